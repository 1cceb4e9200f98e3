//! Engine loop module.
//!
//! [`EngineLoop`] owns one session: a validated [`EngineConfig`], the user's
//! state, a [`Platform`] and a create/update callback pair. Each frame it
//!
//! 1. measures the elapsed time since the previous frame,
//! 2. calls the update callback with that delta,
//! 3. samples raw input from the platform and runs edge detection,
//! 4. hands the screen to the platform.
//!
//! The order never changes, and steps 3 and 4 run even on the frame the update
//! callback asks to stop. Callbacks receive a [`Context`] that carries the screen,
//! the input edges and the timing.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use cge_engine::headless::HeadlessPlatform;
//! use cge_engine::{EngineConfig, EngineLoop};
//! use cge_core::{Canvas, Pen};
//! use cge_core::types::Colour;
//!
//! let mut engine = EngineLoop::new(
//!     EngineConfig::new(16, 8, 4, 4),
//!     0u32,
//!     HeadlessPlatform::new(Duration::from_millis(16)),
//!     |_, _| true,
//!     |frames, ctx, _dt| {
//!         ctx.draw_circle(8, 4, 3, Pen::solid(Colour::FG_CYAN));
//!         *frames += 1;
//!         *frames < 3
//!     },
//! )
//! .unwrap();
//! engine.run().unwrap();
//! assert_eq!(engine.frame_count(), 3);
//! ```

pub mod clock;
pub mod config;
pub mod context;
pub mod engine_loop;
pub mod error;
pub mod headless;
pub mod logging;
pub mod platform;

pub use cge_types as types;

pub use clock::{FrameClock, FrameTime, SystemClock};
pub use config::EngineConfig;
pub use context::{Context, StopHandle};
pub use engine_loop::{CreateFn, EngineLoop, LoopState, UpdateFn};
pub use error::{EngineError, Result};
pub use logging::{init_logging, LoggingConfig};
pub use platform::Platform;
