//! Screen buffer: the character-cell framebuffer every frame is drawn into.

use crate::error::{Error, Result};
use crate::raster::{Canvas, Pen};
use crate::types::{glyph, Colour};

/// A single character cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub glyph: char,
    pub colour: Colour,
}

impl Cell {
    pub const fn new(glyph: char, colour: Colour) -> Self {
        Self { glyph, colour }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            glyph: glyph::SPACE,
            colour: Colour::default(),
        }
    }
}

impl From<Pen> for Cell {
    fn from(pen: Pen) -> Self {
        Self::new(pen.glyph, pen.colour)
    }
}

/// Fixed-size 2D grid of cells, row-major, origin top-left.
///
/// Writes outside `[0, width) x [0, height)` are ignored, which is what lets every
/// raster routine compute coordinates that stray off-screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenBuffer {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl ScreenBuffer {
    /// Allocate a `width x height` buffer filled with blank cells.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let len = (width as usize) * (height as usize);
        Ok(Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    /// One row of cells, or `None` when `y` is off-screen.
    pub fn row(&self, y: i32) -> Option<&[Cell]> {
        if y < 0 || y >= self.height {
            return None;
        }
        let start = (y as usize) * (self.width as usize);
        Some(&self.cells[start..start + self.width as usize])
    }

    /// Become a copy of `other`, reusing this buffer's allocation.
    pub fn copy_from(&mut self, other: &ScreenBuffer) {
        self.width = other.width;
        self.height = other.height;
        self.cells.clear();
        self.cells.extend_from_slice(&other.cells);
    }
}

impl Canvas for ScreenBuffer {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    fn draw(&mut self, x: i32, y: i32, pen: Pen) {
        self.set(x, y, pen.into());
    }
}
