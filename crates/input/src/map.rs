//! Mapping from crossterm events to virtual key codes and mouse button indices.

use arrayvec::ArrayVec;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, ModifierKeyCode, MouseButton};

use crate::types::{keys, mouse};

/// Virtual codes touched by one key event: the key itself plus any modifier the
/// terminal folded into it (`'A'` arrives as `Char('A')`, which is `A` + `SHIFT`).
pub type KeyCodes = ArrayVec<usize, 4>;

/// Map a terminal key event to the virtual codes it holds down.
pub fn key_codes(event: &KeyEvent) -> KeyCodes {
    let mut codes = KeyCodes::new();
    let mut shifted = event.modifiers.contains(KeyModifiers::SHIFT);

    match event.code {
        KeyCode::Char(ch) => {
            if let Some((code, shift)) = char_code(ch) {
                codes.push(code);
                shifted |= shift;
            }
        }
        KeyCode::Backspace => codes.push(keys::BACK),
        KeyCode::Tab => codes.push(keys::TAB),
        KeyCode::BackTab => {
            codes.push(keys::TAB);
            shifted = true;
        }
        KeyCode::Enter => codes.push(keys::RETURN),
        KeyCode::Esc => codes.push(keys::ESCAPE),
        KeyCode::Pause => codes.push(keys::PAUSE),
        KeyCode::CapsLock => codes.push(keys::CAPITAL),
        KeyCode::PageUp => codes.push(keys::PRIOR),
        KeyCode::PageDown => codes.push(keys::NEXT),
        KeyCode::End => codes.push(keys::END),
        KeyCode::Home => codes.push(keys::HOME),
        KeyCode::Left => codes.push(keys::LEFT),
        KeyCode::Up => codes.push(keys::UP),
        KeyCode::Right => codes.push(keys::RIGHT),
        KeyCode::Down => codes.push(keys::DOWN),
        KeyCode::Insert => codes.push(keys::INSERT),
        KeyCode::Delete => codes.push(keys::DELETE),
        KeyCode::F(n) => {
            if let Some(code) = keys::function(n) {
                codes.push(code);
            }
        }
        KeyCode::Modifier(m) => match m {
            ModifierKeyCode::LeftShift | ModifierKeyCode::RightShift => {
                shifted = true;
            }
            ModifierKeyCode::LeftControl | ModifierKeyCode::RightControl => {
                codes.push(keys::CONTROL)
            }
            ModifierKeyCode::LeftAlt | ModifierKeyCode::RightAlt => codes.push(keys::MENU),
            _ => {}
        },
        _ => {}
    }

    if shifted {
        codes.push(keys::SHIFT);
    }
    if event.modifiers.contains(KeyModifiers::CONTROL) && !codes.contains(&keys::CONTROL) {
        codes.push(keys::CONTROL);
    }
    if event.modifiers.contains(KeyModifiers::ALT) && !codes.contains(&keys::MENU) {
        codes.push(keys::MENU);
    }
    codes
}

/// Virtual code for a typed character and whether it implies shift.
fn char_code(ch: char) -> Option<(usize, bool)> {
    let code = match ch {
        'a'..='z' => return Some((ch.to_ascii_uppercase() as usize, false)),
        'A'..='Z' | '0'..='9' => return Some((ch as usize, ch.is_ascii_uppercase())),
        ' ' => return Some((keys::SPACE, false)),
        ')' => (b'0' as usize, true),
        '!' => (b'1' as usize, true),
        '@' => (b'2' as usize, true),
        '#' => (b'3' as usize, true),
        '$' => (b'4' as usize, true),
        '%' => (b'5' as usize, true),
        '^' => (b'6' as usize, true),
        '&' => (b'7' as usize, true),
        '*' => (b'8' as usize, true),
        '(' => (b'9' as usize, true),
        ';' => (keys::OEM_1, false),
        ':' => (keys::OEM_1, true),
        '=' => (keys::OEM_PLUS, false),
        '+' => (keys::OEM_PLUS, true),
        ',' => (keys::OEM_COMMA, false),
        '<' => (keys::OEM_COMMA, true),
        '-' => (keys::OEM_MINUS, false),
        '_' => (keys::OEM_MINUS, true),
        '.' => (keys::OEM_PERIOD, false),
        '>' => (keys::OEM_PERIOD, true),
        '/' => (keys::OEM_2, false),
        '?' => (keys::OEM_2, true),
        '`' => (keys::OEM_3, false),
        '~' => (keys::OEM_3, true),
        '[' => (keys::OEM_4, false),
        '{' => (keys::OEM_4, true),
        '\\' => (keys::OEM_5, false),
        '|' => (keys::OEM_5, true),
        ']' => (keys::OEM_6, false),
        '}' => (keys::OEM_6, true),
        '\'' => (keys::OEM_7, false),
        '"' => (keys::OEM_7, true),
        _ => return None,
    };
    Some(code)
}

/// Mouse button index in the tracked button array.
pub fn mouse_button(button: MouseButton) -> usize {
    match button {
        MouseButton::Left => mouse::LEFT,
        MouseButton::Right => mouse::RIGHT,
        MouseButton::Middle => mouse::MIDDLE,
    }
}

/// Ctrl+C. Raw mode swallows SIGINT, so platforms check for it explicitly.
pub fn is_interrupt(event: &KeyEvent) -> bool {
    matches!(event.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && event.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(code: KeyCode) -> Vec<usize> {
        key_codes(&KeyEvent::from(code)).to_vec()
    }

    #[test]
    fn test_letters_map_to_uppercase_codes() {
        assert_eq!(codes(KeyCode::Char('w')), vec![b'W' as usize]);
        assert_eq!(codes(KeyCode::Char('W')), vec![b'W' as usize, keys::SHIFT]);
        assert_eq!(codes(KeyCode::Char('5')), vec![b'5' as usize]);
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(codes(KeyCode::Left), vec![keys::LEFT]);
        assert_eq!(codes(KeyCode::Up), vec![keys::UP]);
        assert_eq!(codes(KeyCode::Right), vec![keys::RIGHT]);
        assert_eq!(codes(KeyCode::Down), vec![keys::DOWN]);
        assert_eq!(codes(KeyCode::Esc), vec![keys::ESCAPE]);
        assert_eq!(codes(KeyCode::Enter), vec![keys::RETURN]);
        assert_eq!(codes(KeyCode::Char(' ')), vec![keys::SPACE]);
        assert_eq!(codes(KeyCode::F(5)), vec![keys::F1 + 4]);
    }

    #[test]
    fn test_shifted_symbols_share_a_code() {
        assert_eq!(codes(KeyCode::Char(';')), vec![keys::OEM_1]);
        assert_eq!(codes(KeyCode::Char(':')), vec![keys::OEM_1, keys::SHIFT]);
        assert_eq!(codes(KeyCode::Char('!')), vec![b'1' as usize, keys::SHIFT]);
        assert_eq!(codes(KeyCode::BackTab), vec![keys::TAB, keys::SHIFT]);
    }

    #[test]
    fn test_modifiers_are_reported_once() {
        let event = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL | KeyModifiers::ALT);
        assert_eq!(
            key_codes(&event).to_vec(),
            vec![b'S' as usize, keys::CONTROL, keys::MENU]
        );

        let event = KeyEvent::new(KeyCode::Char('X'), KeyModifiers::SHIFT);
        assert_eq!(key_codes(&event).to_vec(), vec![b'X' as usize, keys::SHIFT]);
    }

    #[test]
    fn test_unmapped_keys_are_empty() {
        assert!(codes(KeyCode::Null).is_empty());
        assert!(codes(KeyCode::Char('é')).is_empty());
    }

    #[test]
    fn test_mouse_buttons() {
        assert_eq!(mouse_button(MouseButton::Left), 0);
        assert_eq!(mouse_button(MouseButton::Right), 1);
        assert_eq!(mouse_button(MouseButton::Middle), 2);
    }

    #[test]
    fn test_interrupt_key() {
        assert!(is_interrupt(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_interrupt(&KeyEvent::from(KeyCode::Char('c'))));
        assert!(!is_interrupt(&KeyEvent::from(KeyCode::Char('q'))));
    }
}
