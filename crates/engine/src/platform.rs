//! The boundary between the engine loop and whatever shows the frames.

use std::time::Duration;

use anyhow::Result;

use cge_core::ScreenBuffer;
use cge_input::RawInput;

use crate::config::EngineConfig;

/// Presentation surface, raw input source and clock for one engine session.
///
/// The loop calls [`open`](Platform::open) once before the create callback and
/// [`close`](Platform::close) once on the way out, including when a frame failed.
pub trait Platform {
    fn open(&mut self, config: &EngineConfig) -> Result<()> {
        let _ = config;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        Ok(())
    }

    /// Monotonic time since an arbitrary fixed origin.
    fn now(&mut self) -> Duration;

    /// Overwrite `raw` with what is down right now.
    fn sample_input(&mut self, raw: &mut RawInput) -> Result<()>;

    /// Show one finished frame.
    fn present(&mut self, screen: &ScreenBuffer) -> Result<()>;

    fn set_title(&mut self, title: &str) -> Result<()> {
        let _ = title;
        Ok(())
    }
}
