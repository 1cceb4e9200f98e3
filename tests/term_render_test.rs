//! Terminal encoding of whole frames and frame-to-frame diffs.

use cge::core::{Canvas, Pen, ScreenBuffer};
use cge::term::{encode_diff_into, encode_full_into};
use cge::types::Colour;

fn text(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap()
}

fn scene() -> ScreenBuffer {
    let mut screen = ScreenBuffer::new(40, 12).unwrap();
    screen.draw_string(1, 1, "score 0000", Colour::FG_WHITE);
    screen.draw_rectangle(0, 0, 39, 11, Pen::new('#', Colour::FG_DARK_GREY));
    screen.fill_circle(20, 6, 3, Pen::solid(Colour::FG_RED));
    screen
}

#[test]
fn test_diff_only_carries_changed_runs() {
    let before = scene();
    let mut after = before.clone();
    after.draw_string(7, 1, "0042", Colour::FG_WHITE);

    let mut full = Vec::new();
    encode_full_into(&after, &mut full).unwrap();
    let mut diff = Vec::new();
    encode_diff_into(&before, &after, &mut diff).unwrap();

    assert!(diff.len() < full.len());
    let diff = text(diff);
    assert!(diff.contains("42"), "{diff:?}");
    assert!(!diff.contains("score"), "{diff:?}");
    assert!(text(full).contains("score 0042"));
}

#[test]
fn test_replaying_diffs_converges_to_an_empty_diff() {
    let mut prev = scene();
    let mut next = prev.clone();
    for x in 2..30 {
        next.copy_from(&prev);
        next.draw(x, 8, Pen::new('o', Colour::FG_CYAN));
        next.draw(x - 1, 8, Pen::new(' ', Colour::FG_BLACK));

        let mut out = Vec::new();
        encode_diff_into(&prev, &next, &mut out).unwrap();
        assert!(!out.is_empty(), "frame {x}");
        prev.copy_from(&next);
    }

    let mut out = Vec::new();
    encode_diff_into(&prev, &next, &mut out).unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_full_redraw_covers_every_row() {
    let screen = scene();
    let mut out = Vec::new();
    encode_full_into(&screen, &mut out).unwrap();
    let out = text(out);
    for row in 1..=12 {
        assert!(out.contains(&format!("\x1b[{row};1H")), "row {row} never addressed");
    }
}
