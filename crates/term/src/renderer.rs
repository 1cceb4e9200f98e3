//! TerminalRenderer: flushes a screen buffer to a real terminal.
//!
//! The first frame (and the first frame after [`TerminalRenderer::invalidate`] or a
//! size change) is a full redraw; after that only runs of changed cells are sent.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::core::{Cell, ScreenBuffer};
use crate::palette::{background, foreground};
use crate::types::Colour;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<ScreenBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.queue(ResetColor)?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        self.last = None;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Queue raw commands (title, mode changes) to go out with the next flush.
    pub fn queue_command(&mut self, command: impl crossterm::Command) -> Result<()> {
        self.buf.queue(command)?;
        Ok(())
    }

    /// Draw `screen`, diffing against the previously drawn frame.
    pub fn draw(&mut self, screen: &ScreenBuffer) -> Result<()> {
        let reusable = matches!(
            &self.last,
            Some(prev) if prev.width() == screen.width() && prev.height() == screen.height()
        );
        match self.last.as_mut() {
            Some(prev) if reusable => {
                encode_diff_into(prev, screen, &mut self.buf)?;
                prev.copy_from(screen);
            }
            _ => {
                encode_full_into(screen, &mut self.buf)?;
                self.last = Some(screen.clone());
            }
        }
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        self.buf.clear();
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(screen: &ScreenBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut current: Option<Colour> = None;
    for y in 0..screen.height() {
        out.queue(cursor::MoveTo(0, to_u16(y)))?;
        if let Some(row) = screen.row(y) {
            for cell in row {
                print_cell_into(out, cell, &mut current)?;
            }
        }
    }

    out.queue(ResetColor)?;
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_diff_into(prev: &ScreenBuffer, next: &ScreenBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut current: Option<Colour> = None;
    let mut any = false;

    for_each_changed_run(prev, next, |x, y, run| {
        any = true;
        out.queue(cursor::MoveTo(to_u16(x), to_u16(y)))?;
        for cell in run {
            print_cell_into(out, cell, &mut current)?;
        }
        Ok(())
    })?;

    if any {
        out.queue(ResetColor)?;
    }
    Ok(())
}

fn print_cell_into(out: &mut Vec<u8>, cell: &Cell, current: &mut Option<Colour>) -> Result<()> {
    if *current != Some(cell.colour) {
        out.queue(SetForegroundColor(foreground(cell.colour)))?;
        out.queue(SetBackgroundColor(background(cell.colour)))?;
        *current = Some(cell.colour);
    }
    out.queue(Print(printable(cell.glyph)))?;
    Ok(())
}

/// Control characters would move the cursor; show them as blanks.
fn printable(ch: char) -> char {
    if ch.is_control() {
        ' '
    } else {
        ch
    }
}

fn to_u16(v: i32) -> u16 {
    u16::try_from(v).unwrap_or(u16::MAX)
}

/// Call `f(x, y, cells)` for every maximal run of cells in `next` that differ from
/// `prev`. Buffers of different sizes are reported as one run per row.
fn for_each_changed_run<'a>(
    prev: &ScreenBuffer,
    next: &'a ScreenBuffer,
    mut f: impl FnMut(i32, i32, &'a [Cell]) -> Result<()>,
) -> Result<()> {
    let same_size = prev.width() == next.width() && prev.height() == next.height();

    for y in 0..next.height() {
        let Some(row) = next.row(y) else { continue };
        let old = match prev.row(y) {
            Some(old) if same_size => old,
            _ => {
                f(0, y, row)?;
                continue;
            }
        };

        let w = row.len();
        let mut x = 0;
        while x < w {
            if row[x] == old[x] {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w && row[x] != old[x] {
                x += 1;
            }
            f(start as i32, y, &row[start..x])?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Canvas, Pen};

    fn runs(prev: &ScreenBuffer, next: &ScreenBuffer) -> Vec<(i32, i32, usize)> {
        let mut runs = Vec::new();
        for_each_changed_run(prev, next, |x, y, cells| {
            runs.push((x, y, cells.len()));
            Ok(())
        })
        .unwrap();
        runs
    }

    #[test]
    fn test_changed_run_iterator_coalesces_adjacent_cells() {
        let a = ScreenBuffer::new(5, 1).unwrap();
        let mut b = ScreenBuffer::new(5, 1).unwrap();

        // Change cells [1..=3] into X.
        b.draw_span(1, 3, 0, Pen::new('X', Colour::FG_WHITE));

        assert_eq!(runs(&a, &b), vec![(1, 0, 3)]);
    }

    #[test]
    fn test_colour_only_changes_count_as_changes() {
        let a = ScreenBuffer::new(4, 2).unwrap();
        let mut b = ScreenBuffer::new(4, 2).unwrap();
        b.draw(0, 1, Pen::new(' ', Colour::BG_RED));
        b.draw(3, 1, Pen::new(' ', Colour::BG_RED));

        assert_eq!(runs(&a, &b), vec![(0, 1, 1), (3, 1, 1)]);
    }

    #[test]
    fn test_size_change_marks_every_row() {
        let a = ScreenBuffer::new(3, 1).unwrap();
        let b = ScreenBuffer::new(4, 2).unwrap();
        assert_eq!(runs(&a, &b), vec![(0, 0, 4), (0, 1, 4)]);
    }

    #[test]
    fn test_identical_frames_encode_nothing() {
        let mut a = ScreenBuffer::new(6, 3).unwrap();
        a.draw_line(0, 0, 5, 2, Pen::default());
        let mut out = Vec::new();
        encode_diff_into(&a, &a.clone(), &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_full_redraw_prints_every_glyph() {
        let mut s = ScreenBuffer::new(3, 2).unwrap();
        s.draw_string(0, 0, "abc", Colour::FG_WHITE);
        s.draw_string(0, 1, "d\u{7}f", Colour::FG_RED);

        let mut out = Vec::new();
        encode_full_into(&s, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("abc"));
        assert!(text.contains("d f"));
        assert!(!text.contains('\u{7}'));
    }

    #[test]
    fn test_diff_moves_cursor_to_each_run() {
        let a = ScreenBuffer::new(10, 3).unwrap();
        let mut b = a.clone();
        b.draw_string(4, 2, "hi", Colour::FG_GREEN);

        let mut out = Vec::new();
        encode_diff_into(&a, &b, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        // MoveTo is 1-based in the escape sequence: row 3, column 5.
        assert!(text.contains("\x1b[3;5H"), "{text:?}");
        assert!(text.contains("hi"));
    }
}
