//! Per-session state handed to the create and update callbacks.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use cge_core::{Canvas, Pen, ScreenBuffer};
use cge_input::{InputTracker, KeyState, RawInput};

use crate::clock::FrameTime;

/// External stop signal for a running loop. Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the loop to stop after the frame in progress.
    pub fn stop(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// The screen, the input edges and the frame timing of one engine session.
///
/// `Context` is also a [`Canvas`], so drawing calls can go straight to it.
#[derive(Debug)]
pub struct Context {
    screen: ScreenBuffer,
    keys: InputTracker,
    mouse: InputTracker,
    mouse_x: i32,
    mouse_y: i32,
    focused: bool,
    delta_time: f32,
    fps: f32,
    frame_index: u64,
    app_name: String,
    stop: StopHandle,
}

impl Context {
    pub(crate) fn new(
        screen: ScreenBuffer,
        key_count: usize,
        mouse_button_count: usize,
        app_name: String,
    ) -> Self {
        Self {
            screen,
            keys: InputTracker::new(key_count),
            mouse: InputTracker::new(mouse_button_count),
            mouse_x: 0,
            mouse_y: 0,
            focused: true,
            delta_time: 0.0,
            fps: 0.0,
            frame_index: 0,
            app_name,
            stop: StopHandle::new(),
        }
    }

    pub(crate) fn begin_frame(&mut self, frame: FrameTime) {
        self.delta_time = frame.dt;
        self.fps = frame.fps();
        self.frame_index = frame.frame_index;
    }

    /// Run edge detection over this frame's raw sample.
    pub(crate) fn apply_input(&mut self, raw: &RawInput) {
        self.keys.update(&raw.keys);
        self.mouse.update(&raw.mouse);
        self.mouse_x = raw.mouse_x;
        self.mouse_y = raw.mouse_y;
        self.focused = raw.focused;
    }

    pub fn screen(&self) -> &ScreenBuffer {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut ScreenBuffer {
        &mut self.screen
    }

    pub fn screen_width(&self) -> i32 {
        self.screen.width()
    }

    pub fn screen_height(&self) -> i32 {
        self.screen.height()
    }

    /// Edge state of a virtual key code.
    pub fn key(&self, code: usize) -> KeyState {
        self.keys.get(code)
    }

    pub fn keys(&self) -> &InputTracker {
        &self.keys
    }

    pub fn mouse_button(&self, button: usize) -> KeyState {
        self.mouse.get(button)
    }

    pub fn mouse(&self) -> &InputTracker {
        &self.mouse
    }

    pub fn mouse_x(&self) -> i32 {
        self.mouse_x
    }

    pub fn mouse_y(&self) -> i32 {
        self.mouse_y
    }

    pub fn mouse_pos(&self) -> (i32, i32) {
        (self.mouse_x, self.mouse_y)
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Seconds since the previous frame.
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Request a stop; the current frame still samples input and presents.
    pub fn stop(&self) {
        self.stop.stop();
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn is_stopping(&self) -> bool {
        self.stop.is_stopped()
    }
}

impl Canvas for Context {
    fn width(&self) -> i32 {
        self.screen.width()
    }

    fn height(&self) -> i32 {
        self.screen.height()
    }

    fn draw(&mut self, x: i32, y: i32, pen: Pen) {
        self.screen.draw(x, y, pen);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cge_core::types::Colour;

    fn context() -> Context {
        Context::new(ScreenBuffer::new(8, 4).unwrap(), 16, 3, "test".to_string())
    }

    #[test]
    fn test_stop_handles_share_one_flag() {
        let ctx = context();
        let handle = ctx.stop_handle();
        assert!(!ctx.is_stopping());
        handle.stop();
        assert!(ctx.is_stopping());
    }

    #[test]
    fn test_apply_input_updates_edges_and_pointer() {
        let mut ctx = context();
        let mut raw = RawInput::new(16, 3);
        raw.set_key(5, true);
        raw.set_mouse_button(1, true);
        raw.mouse_x = 3;
        raw.mouse_y = 2;
        raw.focused = false;
        ctx.apply_input(&raw);

        assert!(ctx.key(5).pressed);
        assert!(ctx.mouse_button(1).held);
        assert_eq!(ctx.mouse_pos(), (3, 2));
        assert!(!ctx.is_focused());
    }

    #[test]
    fn test_drawing_goes_to_the_screen() {
        let mut ctx = context();
        ctx.draw_line(0, 0, 7, 0, Pen::solid(Colour::FG_RED));
        assert!(ctx.screen().row(0).unwrap().iter().all(|c| c.colour == Colour::FG_RED));
        assert_eq!(ctx.screen_width(), 8);
    }
}
