//! Terminal platform for the engine.
//!
//! Presents [`ScreenBuffer`](cge_core::ScreenBuffer)s with crossterm and samples
//! keyboard and mouse state from the terminal event stream.
//!
//! - [`renderer`]: diffing renderer that only sends changed cell runs
//! - [`palette`]: the 16-colour console palette as crossterm colours
//! - [`input`]: raw key/mouse state, with a release timeout for terminals that
//!   never report key releases
//! - [`platform`]: [`TerminalPlatform`], the [`Platform`](cge_engine::Platform)
//!   implementation tying them together

pub mod input;
pub mod palette;
pub mod platform;
pub mod renderer;
pub mod title;

pub use cge_core as core;
pub use cge_types as types;

pub use input::TerminalInput;
pub use palette::palette_color;
pub use platform::TerminalPlatform;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use title::TitleThrottle;
