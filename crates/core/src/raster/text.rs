//! Text: one cell per `char`, left to right, clipped cell by cell.

use super::{Canvas, Pen};
use crate::types::{glyph, Colour};

#[inline]
fn column(x: i32, i: usize) -> Option<i32> {
    i32::try_from(i).ok().and_then(|i| x.checked_add(i))
}

pub fn draw_string<C: Canvas + ?Sized>(canvas: &mut C, x: i32, y: i32, text: &str, colour: Colour) {
    for (i, ch) in text.chars().enumerate() {
        let Some(cx) = column(x, i) else { break };
        canvas.draw(cx, y, Pen::new(ch, colour));
    }
}

/// Like [`draw_string`] but spaces leave the destination untouched.
pub fn draw_string_alpha<C: Canvas + ?Sized>(
    canvas: &mut C,
    x: i32,
    y: i32,
    text: &str,
    colour: Colour,
) {
    for (i, ch) in text.chars().enumerate() {
        let Some(cx) = column(x, i) else { break };
        if ch != glyph::SPACE {
            canvas.draw(cx, y, Pen::new(ch, colour));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::ScreenBuffer;

    fn row_text(buf: &ScreenBuffer, y: i32) -> String {
        buf.row(y).unwrap().iter().map(|c| c.glyph).collect()
    }

    #[test]
    fn test_string_is_clipped_per_cell() {
        let mut buf = ScreenBuffer::new(6, 2).unwrap();
        buf.draw_string(-2, 0, "SCORE 120", Colour::FG_WHITE);
        assert_eq!(row_text(&buf, 0), "ORE 12");
        assert_eq!(buf.get(0, 0).unwrap().colour, Colour::FG_WHITE);
    }

    #[test]
    fn test_alpha_string_keeps_background_under_spaces() {
        let mut buf = ScreenBuffer::new(5, 1).unwrap();
        buf.clear(Pen::new('#', Colour::FG_RED));
        buf.draw_string_alpha(0, 0, "a b", Colour::FG_WHITE);
        assert_eq!(row_text(&buf, 0), "a#b##");
    }

    #[test]
    fn test_string_off_screen_rows_are_ignored() {
        let mut buf = ScreenBuffer::new(4, 1).unwrap();
        let before = buf.clone();
        buf.draw_string(0, 1, "hey", Colour::FG_WHITE);
        buf.draw_string(0, -1, "hey", Colour::FG_WHITE);
        assert_eq!(buf, before);
    }
}
