//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental values used throughout the engine. Everything
//! here is plain data with no external dependencies, so it can be used by the
//! rasterizer, the input tracker, and any platform backend alike.
//!
//! # Colour attributes
//!
//! A cell's colour is a single packed byte: the low nibble is the foreground
//! palette index, the high nibble is the background palette index. Both index the
//! classic 16-colour console palette:
//!
//! | Index | Name | Index | Name |
//! |-------|------|-------|------|
//! | 0 | black | 8 | dark grey |
//! | 1 | dark blue | 9 | blue |
//! | 2 | dark green | 10 | green |
//! | 3 | dark cyan | 11 | cyan |
//! | 4 | dark red | 12 | red |
//! | 5 | dark magenta | 13 | magenta |
//! | 6 | dark yellow | 14 | yellow |
//! | 7 | grey | 15 | white |
//!
//! # Engine defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_SCREEN_WIDTH` | 120 | Screen width in cells |
//! | `DEFAULT_SCREEN_HEIGHT` | 40 | Screen height in cells |
//! | `DEFAULT_CELL_WIDTH` | 4 | Font width hint for the platform |
//! | `DEFAULT_CELL_HEIGHT` | 4 | Font height hint for the platform |
//! | `KEY_COUNT` | 256 | Tracked keyboard codes |
//! | `MOUSE_BUTTON_COUNT` | 5 | Tracked mouse buttons |
//! | `DEFAULT_SPRITE_WIDTH` | 8 | Width of a default-constructed sprite |
//! | `DEFAULT_SPRITE_HEIGHT` | 8 | Height of a default-constructed sprite |
//!
//! # Examples
//!
//! ```
//! use cge_types::{glyph, keys, Colour};
//!
//! let c = Colour::FG_YELLOW | Colour::BG_DARK_BLUE;
//! assert_eq!(c.fg(), 14);
//! assert_eq!(c.bg(), 1);
//! assert_eq!(c, Colour::new(14, 1));
//!
//! assert_eq!(glyph::SOLID, '\u{2588}');
//! assert_eq!(keys::LEFT, 0x25);
//! ```

use std::ops::BitOr;

pub mod keys;

/// Screen width used when a configuration does not name one.
pub const DEFAULT_SCREEN_WIDTH: i32 = 120;

/// Screen height used when a configuration does not name one.
pub const DEFAULT_SCREEN_HEIGHT: i32 = 40;

/// Font width hint handed to the platform.
pub const DEFAULT_CELL_WIDTH: i32 = 4;

/// Font height hint handed to the platform.
pub const DEFAULT_CELL_HEIGHT: i32 = 4;

/// Number of keyboard codes tracked by default.
pub const KEY_COUNT: usize = 256;

/// Number of mouse buttons tracked by default.
pub const MOUSE_BUTTON_COUNT: usize = 5;

/// Width of a sprite built with `Sprite::default()`.
pub const DEFAULT_SPRITE_WIDTH: i32 = 8;

/// Height of a sprite built with `Sprite::default()`.
pub const DEFAULT_SPRITE_HEIGHT: i32 = 8;

/// Packed colour attribute: low nibble foreground, high nibble background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour(pub u8);

impl Colour {
    pub const FG_BLACK: Colour = Colour(0x00);
    pub const FG_DARK_BLUE: Colour = Colour(0x01);
    pub const FG_DARK_GREEN: Colour = Colour(0x02);
    pub const FG_DARK_CYAN: Colour = Colour(0x03);
    pub const FG_DARK_RED: Colour = Colour(0x04);
    pub const FG_DARK_MAGENTA: Colour = Colour(0x05);
    pub const FG_DARK_YELLOW: Colour = Colour(0x06);
    pub const FG_GREY: Colour = Colour(0x07);
    pub const FG_DARK_GREY: Colour = Colour(0x08);
    pub const FG_BLUE: Colour = Colour(0x09);
    pub const FG_GREEN: Colour = Colour(0x0A);
    pub const FG_CYAN: Colour = Colour(0x0B);
    pub const FG_RED: Colour = Colour(0x0C);
    pub const FG_MAGENTA: Colour = Colour(0x0D);
    pub const FG_YELLOW: Colour = Colour(0x0E);
    pub const FG_WHITE: Colour = Colour(0x0F);

    pub const BG_BLACK: Colour = Colour(0x00);
    pub const BG_DARK_BLUE: Colour = Colour(0x10);
    pub const BG_DARK_GREEN: Colour = Colour(0x20);
    pub const BG_DARK_CYAN: Colour = Colour(0x30);
    pub const BG_DARK_RED: Colour = Colour(0x40);
    pub const BG_DARK_MAGENTA: Colour = Colour(0x50);
    pub const BG_DARK_YELLOW: Colour = Colour(0x60);
    pub const BG_GREY: Colour = Colour(0x70);
    pub const BG_DARK_GREY: Colour = Colour(0x80);
    pub const BG_BLUE: Colour = Colour(0x90);
    pub const BG_GREEN: Colour = Colour(0xA0);
    pub const BG_CYAN: Colour = Colour(0xB0);
    pub const BG_RED: Colour = Colour(0xC0);
    pub const BG_MAGENTA: Colour = Colour(0xD0);
    pub const BG_YELLOW: Colour = Colour(0xE0);
    pub const BG_WHITE: Colour = Colour(0xF0);

    /// Pack a foreground and background palette index (each masked to 0-15).
    pub const fn new(fg: u8, bg: u8) -> Self {
        Colour((fg & 0x0F) | ((bg & 0x0F) << 4))
    }

    /// Foreground palette index (0-15).
    pub const fn fg(self) -> u8 {
        self.0 & 0x0F
    }

    /// Background palette index (0-15).
    pub const fn bg(self) -> u8 {
        self.0 >> 4
    }

    pub const fn bits(self) -> u8 {
        self.0
    }
}

impl BitOr for Colour {
    type Output = Colour;

    fn bitor(self, rhs: Colour) -> Colour {
        Colour(self.0 | rhs.0)
    }
}

impl From<u8> for Colour {
    fn from(bits: u8) -> Self {
        Colour(bits)
    }
}

/// Common block glyphs used for shading.
pub mod glyph {
    /// Full block.
    pub const SOLID: char = '\u{2588}';
    /// Dark shade.
    pub const THREE_QUARTERS: char = '\u{2593}';
    /// Medium shade.
    pub const HALF: char = '\u{2592}';
    /// Light shade.
    pub const QUARTER: char = '\u{2591}';
    /// Blank cell; also the transparent glyph for alpha blits.
    pub const SPACE: char = ' ';
}

/// Mouse button indices into the tracked mouse sources.
pub mod mouse {
    pub const LEFT: usize = 0;
    pub const RIGHT: usize = 1;
    pub const MIDDLE: usize = 2;
    pub const X1: usize = 3;
    pub const X2: usize = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colour_packs_foreground_low_and_background_high() {
        let c = Colour::new(0x0C, 0x01);
        assert_eq!(c.bits(), 0x1C);
        assert_eq!(c.fg(), 0x0C);
        assert_eq!(c.bg(), 0x01);
    }

    #[test]
    fn test_colour_new_masks_out_of_range_nibbles() {
        let c = Colour::new(0xFF, 0x1F);
        assert_eq!(c.fg(), 0x0F);
        assert_eq!(c.bg(), 0x0F);
    }

    #[test]
    fn test_colour_constants_combine_with_bitor() {
        assert_eq!(Colour::FG_WHITE | Colour::BG_BLUE, Colour(0x9F));
        assert_eq!(Colour::default(), Colour::FG_BLACK | Colour::BG_BLACK);
    }
}
