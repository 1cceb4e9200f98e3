//! Raw key and mouse state reconstructed from crossterm's event stream.
//!
//! Terminals report key presses, and only some of them report releases. Until a
//! release event has been seen, a key counts as down for a short timeout after
//! its last press or repeat. Once the terminal proves it sends releases, the
//! timeout is no longer applied.

use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};

use cge_input::{is_interrupt, key_codes, mouse_button, RawInput};

use crate::types::{KEY_COUNT, MOUSE_BUTTON_COUNT};

// In terminals without key-release events, a short timeout prevents a single tap
// from turning into a sustained "held" state.
pub const DEFAULT_KEY_RELEASE_TIMEOUT: Duration = Duration::from_millis(150);

#[derive(Debug, Clone)]
pub struct TerminalInput {
    /// Time of the last press or repeat for every key currently down.
    keys: Vec<Option<Instant>>,
    mouse: Vec<bool>,
    mouse_x: i32,
    mouse_y: i32,
    focused: bool,
    releases_reported: bool,
    release_timeout: Duration,
    interrupted: bool,
    resized: bool,
}

impl TerminalInput {
    pub fn new(key_count: usize, mouse_button_count: usize) -> Self {
        Self {
            keys: vec![None; key_count],
            mouse: vec![false; mouse_button_count],
            mouse_x: 0,
            mouse_y: 0,
            focused: true,
            releases_reported: false,
            release_timeout: DEFAULT_KEY_RELEASE_TIMEOUT,
            interrupted: false,
            resized: false,
        }
    }

    pub fn with_key_release_timeout(mut self, timeout: Duration) -> Self {
        self.release_timeout = timeout;
        self
    }

    pub fn key_release_timeout(&self) -> Duration {
        self.release_timeout
    }

    /// Fold one terminal event into the raw state.
    pub fn handle_event(&mut self, event: &Event, now: Instant) {
        match event {
            Event::Key(key) => self.handle_key(key, now),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::FocusGained => self.focused = true,
            Event::FocusLost => {
                self.focused = false;
                self.release_all();
            }
            Event::Resize(_, _) => self.resized = true,
            _ => {}
        }
    }

    fn handle_key(&mut self, key: &KeyEvent, now: Instant) {
        if key.kind != KeyEventKind::Release && is_interrupt(key) {
            self.interrupted = true;
        }
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                for code in key_codes(key) {
                    if let Some(slot) = self.keys.get_mut(code) {
                        *slot = Some(now);
                    }
                }
            }
            KeyEventKind::Release => {
                self.releases_reported = true;
                for code in key_codes(key) {
                    if let Some(slot) = self.keys.get_mut(code) {
                        *slot = None;
                    }
                }
            }
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) {
        self.mouse_x = i32::from(mouse.column);
        self.mouse_y = i32::from(mouse.row);
        match mouse.kind {
            MouseEventKind::Down(button) | MouseEventKind::Drag(button) => {
                self.set_button(mouse_button(button), true)
            }
            MouseEventKind::Up(button) => self.set_button(mouse_button(button), false),
            _ => {}
        }
    }

    fn set_button(&mut self, index: usize, down: bool) {
        if let Some(b) = self.mouse.get_mut(index) {
            *b = down;
        }
    }

    /// Release keys whose last press is older than the timeout, unless the
    /// terminal reports releases itself.
    pub fn expire(&mut self, now: Instant) {
        if self.releases_reported {
            return;
        }
        let timeout = self.release_timeout;
        for slot in &mut self.keys {
            if slot.is_some_and(|t| now.saturating_duration_since(t) > timeout) {
                *slot = None;
            }
        }
    }

    pub fn release_all(&mut self) {
        self.keys.fill(None);
        self.mouse.fill(false);
    }

    /// Copy the current state into `raw`.
    pub fn fill(&self, raw: &mut RawInput) {
        for (dst, src) in raw.keys.iter_mut().zip(&self.keys) {
            *dst = src.is_some();
        }
        for (dst, src) in raw.mouse.iter_mut().zip(&self.mouse) {
            *dst = *src;
        }
        raw.mouse_x = self.mouse_x;
        raw.mouse_y = self.mouse_y;
        raw.focused = self.focused;
    }

    /// True once Ctrl+C has been pressed. Clears the flag.
    pub fn take_interrupt(&mut self) -> bool {
        std::mem::take(&mut self.interrupted)
    }

    /// True when the terminal was resized since the last call. Clears the flag.
    pub fn take_resize(&mut self) -> bool {
        std::mem::take(&mut self.resized)
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new(KEY_COUNT, MOUSE_BUTTON_COUNT)
    }
}
