//! `.spr` files on disk: save, load, and the blank fallback.

use std::fs;

use cge::core::{Canvas, Error, Pen, ScreenBuffer, Sprite};
use cge::types::{glyph, Colour, DEFAULT_SPRITE_HEIGHT, DEFAULT_SPRITE_WIDTH};

const GLYPHS: [char; 8] = ['#', '@', '.', ' ', glyph::SOLID, glyph::THREE_QUARTERS, '\u{2500}', '~'];

fn patterned(width: i32, height: i32, seed: u32) -> Sprite {
    let mut sprite = Sprite::new(width, height).unwrap();
    let mut state = seed;
    for y in 0..height {
        for x in 0..width {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            sprite.set_glyph(x, y, GLYPHS[(state >> 24) as usize % GLYPHS.len()]);
            sprite.set_colour(x, y, Colour((state >> 8) as u8));
        }
    }
    sprite
}

#[test]
fn test_saved_sprites_load_back_identically() {
    let dir = tempfile::tempdir().unwrap();
    for (i, (w, h)) in [(1, 1), (8, 8), (13, 3), (2, 40)].into_iter().enumerate() {
        let path = dir.path().join(format!("s{i}.spr"));
        let sprite = patterned(w, h, i as u32 + 7);
        sprite.save(&path).unwrap();

        let expected_len = 8 + 4 * (w * h) as u64;
        assert_eq!(fs::metadata(&path).unwrap().len(), expected_len);
        assert_eq!(Sprite::load(&path).unwrap(), sprite);
    }
}

#[test]
fn test_default_sprite_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blank.spr");
    Sprite::default().save(&path).unwrap();
    assert_eq!(Sprite::load(&path).unwrap(), Sprite::default());
}

#[test]
fn test_sprite_drawn_with_astral_glyphs_still_saves() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("invader.spr");

    let mut sprite = Sprite::new(3, 1).unwrap();
    sprite.draw(0, 0, Pen::new('\u{1F47E}', Colour::FG_GREEN));
    sprite.draw_string(1, 0, "ok", Colour::FG_WHITE);
    sprite.save(&path).unwrap();

    let loaded = Sprite::load(&path).unwrap();
    assert_eq!(loaded, sprite);
    assert_eq!(loaded.glyph(0, 0), char::REPLACEMENT_CHARACTER);
    assert_eq!(loaded.glyph(2, 0), 'k');
}

#[test]
fn test_save_overwrites_an_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ship.spr");
    patterned(10, 10, 1).save(&path).unwrap();

    let small = patterned(2, 2, 2);
    small.save(&path).unwrap();
    assert_eq!(Sprite::load(&path).unwrap(), small);
}

#[test]
fn test_missing_file_is_an_io_error_and_falls_back_to_blank() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.spr");

    assert!(matches!(Sprite::load(&path), Err(Error::Io(_))));

    let blank = Sprite::load_or_blank(&path);
    assert_eq!(blank.width(), DEFAULT_SPRITE_WIDTH);
    assert_eq!(blank.height(), DEFAULT_SPRITE_HEIGHT);
    assert!(blank.glyphs().iter().all(|&g| g == ' '));
}

#[test]
fn test_truncated_file_falls_back_to_blank() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cut.spr");
    patterned(4, 4, 3).save(&path).unwrap();

    let bytes = fs::read(&path).unwrap();
    fs::write(&path, &bytes[..bytes.len() - 3]).unwrap();

    assert!(Sprite::load(&path).is_err());
    assert_eq!(Sprite::load_or_blank(&path), Sprite::default());
}

#[test]
fn test_loaded_sprite_blits_onto_the_screen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blit.spr");
    let sprite = patterned(3, 2, 9);
    sprite.save(&path).unwrap();
    let loaded = Sprite::load(&path).unwrap();

    let mut screen = ScreenBuffer::new(6, 4).unwrap();
    screen.draw_sprite(2, 1, &loaded);
    for y in 0..2 {
        for x in 0..3 {
            let cell = screen.get(2 + x, 1 + y).unwrap();
            assert_eq!(cell.glyph, sprite.glyph(x, y));
            assert_eq!(cell.colour, sprite.colour(x, y));
        }
    }
}
