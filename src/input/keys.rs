//! Raw keycode constants.
//!
//! Character keys are their Unicode scalar value (`'q' as i32`). Special keys
//! live just past the Unicode range so the two can never collide.

/// First code past the last Unicode scalar value.
pub const KEY_MIN: i32 = 0x11_0000;

pub const KEY_DOWN: i32 = KEY_MIN + 2;
pub const KEY_UP: i32 = KEY_MIN + 3;
pub const KEY_LEFT: i32 = KEY_MIN + 4;
pub const KEY_RIGHT: i32 = KEY_MIN + 5;
pub const KEY_HOME: i32 = KEY_MIN + 6;
pub const KEY_BACKSPACE: i32 = KEY_MIN + 7;
pub const KEY_DC: i32 = KEY_MIN + 74;
pub const KEY_NPAGE: i32 = KEY_MIN + 82;
pub const KEY_PPAGE: i32 = KEY_MIN + 83;
pub const KEY_END: i32 = KEY_MIN + 104;

const KEY_F0: i32 = KEY_MIN + 8;

/// Function key `n` (1-based).
pub const fn key_f(n: u8) -> i32 {
    KEY_F0 + n as i32
}

/// True for codes that name a special key rather than a character.
pub const fn is_special(code: i32) -> bool {
    code >= KEY_MIN
}

pub const KEYS_ARROW: [i32; 4] = [KEY_UP, KEY_DOWN, KEY_LEFT, KEY_RIGHT];

pub const KEY_TAB: i32 = 9;
pub const KEY_ENTER: i32 = 10;
pub const KEY_ESC: i32 = 27;
/// Alt arrives as an escape prefix.
pub const KEY_ALT: i32 = KEY_ESC;
pub const KEY_SPACE: i32 = 32;
/// What terminals send for the backspace key.
pub const KEY_DELETE: i32 = 127;

/// Raw code for `ctrl` + an ASCII letter.
pub const fn ctrl(letter: char) -> i32 {
    (letter as i32) & 0x1f
}

/// Human-readable name for a raw code, used in close reasons and logs.
pub fn key_name(code: i32) -> String {
    match code {
        KEY_UP => "Up".to_string(),
        KEY_DOWN => "Down".to_string(),
        KEY_LEFT => "Left".to_string(),
        KEY_RIGHT => "Right".to_string(),
        KEY_HOME => "Home".to_string(),
        KEY_END => "End".to_string(),
        KEY_NPAGE => "PageDown".to_string(),
        KEY_PPAGE => "PageUp".to_string(),
        KEY_DC => "Delete".to_string(),
        KEY_BACKSPACE | KEY_DELETE => "Backspace".to_string(),
        KEY_TAB => "Tab".to_string(),
        KEY_ENTER => "Enter".to_string(),
        KEY_ESC => "Escape".to_string(),
        KEY_SPACE => "Space".to_string(),
        c @ 1..=26 => format!("^{}", (b'A' + (c as u8) - 1) as char),
        c if (key_f(1)..=key_f(12)).contains(&c) => format!("F{}", c - KEY_F0),
        c => match char::from_u32(c as u32) {
            Some(ch) if !ch.is_control() => ch.to_string(),
            _ => format!("<{}>", c),
        },
    }
}
