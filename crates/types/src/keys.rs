//! Virtual key codes.
//!
//! Keyboard sources are indexed by the classic console virtual-key numbering, so
//! letters and digits sit at their ASCII uppercase code (`b'A' as usize`, `b'7' as usize`)
//! and named keys use the constants below.

pub const BACK: usize = 0x08;
pub const TAB: usize = 0x09;
pub const RETURN: usize = 0x0D;
pub const SHIFT: usize = 0x10;
pub const CONTROL: usize = 0x11;
pub const MENU: usize = 0x12;
pub const PAUSE: usize = 0x13;
pub const CAPITAL: usize = 0x14;
pub const ESCAPE: usize = 0x1B;
pub const SPACE: usize = 0x20;
pub const PRIOR: usize = 0x21;
pub const NEXT: usize = 0x22;
pub const END: usize = 0x23;
pub const HOME: usize = 0x24;
pub const LEFT: usize = 0x25;
pub const UP: usize = 0x26;
pub const RIGHT: usize = 0x27;
pub const DOWN: usize = 0x28;
pub const INSERT: usize = 0x2D;
pub const DELETE: usize = 0x2E;

pub const NUMPAD0: usize = 0x60;
pub const MULTIPLY: usize = 0x6A;
pub const ADD: usize = 0x6B;
pub const SUBTRACT: usize = 0x6D;
pub const DECIMAL: usize = 0x6E;
pub const DIVIDE: usize = 0x6F;

pub const F1: usize = 0x70;
pub const F12: usize = 0x7B;

/// `;:`
pub const OEM_1: usize = 0xBA;
/// `=+`
pub const OEM_PLUS: usize = 0xBB;
/// `,<`
pub const OEM_COMMA: usize = 0xBC;
/// `-_`
pub const OEM_MINUS: usize = 0xBD;
/// `.>`
pub const OEM_PERIOD: usize = 0xBE;
/// `/?`
pub const OEM_2: usize = 0xBF;
/// `` `~ ``
pub const OEM_3: usize = 0xC0;
/// `[{`
pub const OEM_4: usize = 0xDB;
/// `\|`
pub const OEM_5: usize = 0xDC;
/// `]}`
pub const OEM_6: usize = 0xDD;
/// `'"`
pub const OEM_7: usize = 0xDE;

/// Code of the `n`th function key (`1..=12`).
pub const fn function(n: u8) -> Option<usize> {
    if n >= 1 && n <= 12 {
        Some(F1 + (n as usize) - 1)
    } else {
        None
    }
}
