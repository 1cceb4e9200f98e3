//! Input module (engine-facing).
//!
//! Platforms write a [`RawInput`] sample every frame; [`InputTracker`] turns the
//! stream of samples into held/pressed/released edges. [`map`] translates
//! `crossterm` events into the virtual key codes and mouse button indices the
//! trackers are indexed by.

pub mod map;
pub mod raw;
pub mod tracker;

pub use cge_types as types;

pub use map::{is_interrupt, key_codes, mouse_button};
pub use raw::RawInput;
pub use tracker::{InputTracker, KeyState};
