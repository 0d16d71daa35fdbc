//! crossterm key events → raw codes.
//!
//! The rest of the crate only sees raw codes. Alt chords are flattened into
//! the escape-prefix pair `[KEY_ESC, code]` so [`Surface::poll_event`] can
//! rebuild them the same way for every surface.
//!
//! [`Surface::poll_event`]: crate::surface::Surface::poll_event

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::keys::*;

/// What a single terminal key event turns into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translated {
    /// Raw codes to queue, in order.
    Codes(Vec<i32>),
    /// Ctrl+C while the terminal is in raw mode.
    Interrupt,
    /// Releases, repeats of modifier-only keys, and keys with no raw code.
    Ignored,
}

/// Translate one crossterm key event.
pub fn translate_key(key: &KeyEvent) -> Translated {
    if key.kind == KeyEventKind::Release {
        return Translated::Ignored;
    }

    let ctrl_held = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt_held = key.modifiers.contains(KeyModifiers::ALT);

    if ctrl_held && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C')) {
        return Translated::Interrupt;
    }

    let code = match key_code_to_raw(&key.code, ctrl_held) {
        Some(code) => code,
        None => return Translated::Ignored,
    };

    if alt_held {
        Translated::Codes(vec![KEY_ALT, code])
    } else {
        Translated::Codes(vec![code])
    }
}

/// Convert a crossterm KeyCode to its raw code.
fn key_code_to_raw(code: &KeyCode, ctrl_held: bool) -> Option<i32> {
    let raw = match code {
        KeyCode::Char(ch) if ctrl_held && ch.is_ascii_alphabetic() => ctrl(*ch),
        KeyCode::Char(ch) => *ch as i32,
        KeyCode::Enter => KEY_ENTER,
        KeyCode::Tab => KEY_TAB,
        KeyCode::Backspace => KEY_DELETE,
        KeyCode::Delete => KEY_DC,
        KeyCode::Esc => KEY_ESC,
        KeyCode::Up => KEY_UP,
        KeyCode::Down => KEY_DOWN,
        KeyCode::Left => KEY_LEFT,
        KeyCode::Right => KEY_RIGHT,
        KeyCode::Home => KEY_HOME,
        KeyCode::End => KEY_END,
        KeyCode::PageUp => KEY_PPAGE,
        KeyCode::PageDown => KEY_NPAGE,
        KeyCode::F(n) if (1..=12).contains(n) => key_f(*n),
        _ => return None,
    };
    Some(raw)
}
