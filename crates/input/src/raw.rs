//! One frame's raw sample from a platform input source.

use crate::types::{KEY_COUNT, MOUSE_BUTTON_COUNT};

/// Unprocessed input as the platform sees it right now.
///
/// Platforms overwrite this in place every frame; the engine feeds it to the
/// edge trackers after the update callback has run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInput {
    pub keys: Vec<bool>,
    pub mouse: Vec<bool>,
    pub mouse_x: i32,
    pub mouse_y: i32,
    pub focused: bool,
}

impl RawInput {
    pub fn new(key_count: usize, mouse_button_count: usize) -> Self {
        Self {
            keys: vec![false; key_count],
            mouse: vec![false; mouse_button_count],
            mouse_x: 0,
            mouse_y: 0,
            focused: true,
        }
    }

    /// Mark `code` down or up; codes outside the tracked range are ignored.
    pub fn set_key(&mut self, code: usize, down: bool) {
        if let Some(k) = self.keys.get_mut(code) {
            *k = down;
        }
    }

    pub fn set_mouse_button(&mut self, button: usize, down: bool) {
        if let Some(b) = self.mouse.get_mut(button) {
            *b = down;
        }
    }

    /// Release every key and mouse button.
    pub fn release_all(&mut self) {
        self.keys.fill(false);
        self.mouse.fill(false);
    }
}

impl Default for RawInput {
    fn default() -> Self {
        Self::new(KEY_COUNT, MOUSE_BUTTON_COUNT)
    }
}
