//! Drawing core: the character-cell screen buffer, the rasterizer and sprites.
//!
//! Everything here is pure and synchronous. Nothing touches the terminal; the
//! engine crate owns the loop and a platform crate owns presentation.
//!
//! # Module Structure
//!
//! - [`buffer`]: [`ScreenBuffer`], the framebuffer every frame is drawn into
//! - [`raster`]: the [`Canvas`] trait with lines, circles, triangles, rectangles,
//!   sprite blits, wireframe models and text
//! - [`sprite`]: [`Sprite`], an off-screen cell grid that is also a [`Canvas`]
//! - [`spr`]: the `.spr` binary file codec
//! - [`error`]: the crate [`Error`] type
//!
//! # Clipping
//!
//! Drawing never fails. Every primitive computes cells freely and the target drops
//! the ones that fall outside its bounds, so shapes may hang off any edge.
//!
//! # Example
//!
//! ```
//! use cge_core::{Canvas, Pen, ScreenBuffer};
//! use cge_core::types::Colour;
//!
//! let mut screen = ScreenBuffer::new(10, 10).unwrap();
//! screen.fill_rectangle(2, 2, 4, 4, Pen::new('#', Colour::FG_WHITE));
//!
//! assert_eq!(screen.get(2, 2).unwrap().glyph, '#');
//! assert_eq!(screen.get(6, 6).unwrap().glyph, '#');
//! assert_eq!(screen.get(7, 7).unwrap().glyph, ' ');
//! ```

pub mod buffer;
pub mod error;
pub mod raster;
pub mod spr;
pub mod sprite;

pub use cge_types as types;

pub use buffer::{Cell, ScreenBuffer};
pub use error::{Error, Result};
pub use raster::{Canvas, Pen, Pose};
pub use sprite::Sprite;
