//! crossterm implementation of the engine [`Platform`].

use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use crossterm::event::{
    self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{self, SetTitle};
use log::debug;

use cge_engine::{EngineConfig, Platform, StopHandle, SystemClock};
use cge_input::RawInput;

use crate::core::ScreenBuffer;
use crate::input::TerminalInput;
use crate::renderer::TerminalRenderer;
use crate::title::TitleThrottle;

const TITLE_INTERVAL_MS: u64 = 250;

/// Runs an engine session in the current terminal.
///
/// `open` switches to raw mode and the alternate screen and turns on mouse, focus
/// and (where supported) key release reporting; `close` undoes all of it. Ctrl+C
/// stops the loop through the handle given to [`stop_on_interrupt`](Self::stop_on_interrupt),
/// or fails the frame when no handle was given.
pub struct TerminalPlatform {
    renderer: TerminalRenderer,
    input: TerminalInput,
    clock: SystemClock,
    title: TitleThrottle,
    interrupt: Option<StopHandle>,
    open: bool,
    enhanced_keyboard: bool,
}

impl TerminalPlatform {
    pub fn new() -> Self {
        Self {
            renderer: TerminalRenderer::new(),
            input: TerminalInput::default(),
            clock: SystemClock::new(),
            title: TitleThrottle::new(TITLE_INTERVAL_MS),
            interrupt: None,
            open: false,
            enhanced_keyboard: false,
        }
    }

    pub fn with_key_release_timeout(mut self, timeout: Duration) -> Self {
        self.input = std::mem::take(&mut self.input).with_key_release_timeout(timeout);
        self
    }

    /// Stop the loop through `handle` when Ctrl+C is pressed.
    pub fn stop_on_interrupt(&mut self, handle: StopHandle) {
        self.interrupt = Some(handle);
    }

    fn drain_events(&mut self) -> Result<()> {
        while event::poll(Duration::ZERO)? {
            let ev = event::read()?;
            self.input.handle_event(&ev, Instant::now());
        }
        self.input.expire(Instant::now());

        if self.input.take_resize() {
            self.renderer.invalidate();
        }
        if self.input.take_interrupt() {
            match &self.interrupt {
                Some(handle) => handle.stop(),
                None => bail!("interrupted"),
            }
        }
        Ok(())
    }
}

impl Default for TerminalPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for TerminalPlatform {
    fn open(&mut self, config: &EngineConfig) -> Result<()> {
        self.input = TerminalInput::new(config.key_count, config.mouse_button_count)
            .with_key_release_timeout(self.input.key_release_timeout());
        self.renderer.enter()?;
        self.open = true;

        self.renderer.queue_command(EnableMouseCapture)?;
        self.renderer.queue_command(EnableFocusChange)?;
        self.enhanced_keyboard = terminal::supports_keyboard_enhancement().unwrap_or(false);
        if self.enhanced_keyboard {
            self.renderer.queue_command(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))?;
        } else {
            debug!("keyboard enhancement unsupported; using key release timeout");
        }
        self.renderer.queue_command(SetTitle(&config.app_name))?;
        debug!(
            "terminal opened for '{}' ({}x{} cells)",
            config.app_name, config.screen_width, config.screen_height
        );
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if !self.open {
            return Ok(());
        }
        self.open = false;
        if self.enhanced_keyboard {
            self.renderer.queue_command(PopKeyboardEnhancementFlags)?;
        }
        self.renderer.queue_command(DisableFocusChange)?;
        self.renderer.queue_command(DisableMouseCapture)?;
        self.renderer.exit()?;
        debug!("terminal restored");
        Ok(())
    }

    fn now(&mut self) -> Duration {
        self.clock.now()
    }

    fn sample_input(&mut self, raw: &mut RawInput) -> Result<()> {
        self.drain_events()?;
        self.input.fill(raw);
        Ok(())
    }

    fn present(&mut self, screen: &ScreenBuffer) -> Result<()> {
        self.renderer.draw(screen)
    }

    fn set_title(&mut self, title: &str) -> Result<()> {
        let now_ms = u64::try_from(self.clock.now().as_millis()).unwrap_or(u64::MAX);
        if self.title.should_set(now_ms) {
            self.renderer.queue_command(SetTitle(title))?;
        }
        Ok(())
    }
}

impl Drop for TerminalPlatform {
    fn drop(&mut self) {
        // Always try to restore terminal state.
        let _ = self.close();
    }
}
