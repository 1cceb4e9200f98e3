//! Off-screen cell grids with `.spr` file load/save.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::raster::{Canvas, Pen};
use crate::spr;
use crate::types::{glyph, Colour, DEFAULT_SPRITE_HEIGHT, DEFAULT_SPRITE_WIDTH};

/// A `width x height` grid of glyphs and colours, stored as two parallel row-major arrays.
///
/// Reads outside the sprite return a blank space on black; writes outside it are ignored.
/// Glyphs are 16-bit like the `.spr` format: anything outside the Basic Multilingual
/// Plane is stored as U+FFFD, so every sprite can be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    width: i32,
    height: i32,
    glyphs: Vec<char>,
    colours: Vec<Colour>,
}

impl Sprite {
    /// Blank sprite (spaces, black on black).
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let len = (width as usize) * (height as usize);
        Ok(Self {
            width,
            height,
            glyphs: vec![glyph::SPACE; len],
            colours: vec![Colour::default(); len],
        })
    }

    /// Build from already-validated parts. Callers guarantee both arrays hold
    /// `width * height` entries.
    pub(crate) fn from_parts(
        width: i32,
        height: i32,
        glyphs: Vec<char>,
        colours: Vec<Colour>,
    ) -> Self {
        debug_assert_eq!(glyphs.len(), (width as usize) * (height as usize));
        debug_assert_eq!(colours.len(), glyphs.len());
        Self {
            width,
            height,
            glyphs,
            colours,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn set_glyph(&mut self, x: i32, y: i32, ch: char) {
        if let Some(i) = self.idx(x, y) {
            self.glyphs[i] = storable(ch);
        }
    }

    pub fn set_colour(&mut self, x: i32, y: i32, colour: Colour) {
        if let Some(i) = self.idx(x, y) {
            self.colours[i] = colour;
        }
    }

    pub fn glyph(&self, x: i32, y: i32) -> char {
        self.idx(x, y).map_or(glyph::SPACE, |i| self.glyphs[i])
    }

    pub fn colour(&self, x: i32, y: i32) -> Colour {
        self.idx(x, y).map_or(Colour::FG_BLACK, |i| self.colours[i])
    }

    /// Decode a sprite from any reader in `.spr` layout.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        spr::decode(reader)
    }

    /// Encode this sprite in `.spr` layout.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        spr::encode(self, writer)
    }

    /// Load a `.spr` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        spr::decode(BufReader::new(file))
    }

    /// Load a `.spr` file, falling back to a default blank sprite when it cannot be read.
    pub fn load_or_blank(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(sprite) => sprite,
            Err(e) => {
                log::warn!(
                    "sprite {} could not be loaded ({e}); using a blank {}x{} sprite",
                    path.display(),
                    DEFAULT_SPRITE_WIDTH,
                    DEFAULT_SPRITE_HEIGHT
                );
                Self::default()
            }
        }
    }

    /// Save as a `.spr` file, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        spr::encode(self, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

/// Narrow a glyph to what fits in one 16-bit `.spr` unit.
#[inline(always)]
fn storable(ch: char) -> char {
    if u32::from(ch) > 0xFFFF {
        char::REPLACEMENT_CHARACTER
    } else {
        ch
    }
}

impl Default for Sprite {
    fn default() -> Self {
        let len = (DEFAULT_SPRITE_WIDTH as usize) * (DEFAULT_SPRITE_HEIGHT as usize);
        Self::from_parts(
            DEFAULT_SPRITE_WIDTH,
            DEFAULT_SPRITE_HEIGHT,
            vec![glyph::SPACE; len],
            vec![Colour::default(); len],
        )
    }
}

impl Canvas for Sprite {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn draw(&mut self, x: i32, y: i32, pen: Pen) {
        if let Some(i) = self.idx(x, y) {
            self.glyphs[i] = storable(pen.glyph);
            self.colours[i] = pen.colour;
        }
    }
}
