//! The 16-colour console palette as crossterm colours.

use crossterm::style::Color;

use crate::types::Colour;

const PALETTE: [Color; 16] = [
    Color::Black,
    Color::DarkBlue,
    Color::DarkGreen,
    Color::DarkCyan,
    Color::DarkRed,
    Color::DarkMagenta,
    Color::DarkYellow,
    Color::Grey,
    Color::DarkGrey,
    Color::Blue,
    Color::Green,
    Color::Cyan,
    Color::Red,
    Color::Magenta,
    Color::Yellow,
    Color::White,
];

/// Terminal colour for a palette index; only the low nibble is used.
pub fn palette_color(index: u8) -> Color {
    PALETTE[usize::from(index & 0x0F)]
}

pub fn foreground(colour: Colour) -> Color {
    palette_color(colour.fg())
}

pub fn background(colour: Colour) -> Color {
    palette_color(colour.bg())
}
