//! The event value handed down the focus stack.
//!
//! An event is built once per poll and consumed by one dispatch pass. Handlers
//! get it by shared reference; the only thing they can change is the one-shot
//! propagation flag.

use std::cell::Cell;
use std::hash::{Hash, Hasher};

/// Source of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Key,
    Mouse,
}

#[derive(Debug, Clone)]
pub struct Event {
    code: i32,
    kind: EventKind,
    modifier: Option<i32>,
    propagate: Cell<bool>,
}

impl Event {
    pub fn new(code: i32, kind: EventKind) -> Self {
        Self {
            code,
            kind,
            modifier: None,
            propagate: Cell::new(true),
        }
    }

    /// A plain key event.
    pub fn key(code: i32) -> Self {
        Self::new(code, EventKind::Key)
    }

    /// A key event carrying a prefix code, e.g. the escape that introduces
    /// an Alt chord.
    pub fn with_modifier(code: i32, kind: EventKind, modifier: i32) -> Self {
        Self {
            modifier: Some(modifier),
            ..Self::new(code, kind)
        }
    }

    #[inline]
    pub fn code(&self) -> i32 {
        self.code
    }

    #[inline]
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    #[inline]
    pub fn modifier(&self) -> Option<i32> {
        self.modifier
    }

    /// Halt delivery to every later handler. Cannot be undone.
    pub fn stop_propagation(&self) {
        self.propagate.set(false);
    }

    /// Whether the next handler in the walk should still see this event.
    #[inline]
    pub fn should_handle(&self) -> bool {
        self.propagate.get()
    }

    /// The code as a character, if it is one.
    pub fn as_char(&self) -> Option<char> {
        u32::try_from(self.code).ok().and_then(char::from_u32)
    }

    /// The character to insert for this event, if it is printable text.
    pub fn printable(&self) -> Option<char> {
        let ch = self.as_char()?;
        if ch == ' ' || ch.is_ascii_graphic() || (!ch.is_ascii() && !ch.is_control()) {
            Some(ch)
        } else {
            None
        }
    }

    /// True if the code matches any of `codes`.
    pub fn is_any(&self, codes: &[i32]) -> bool {
        codes.contains(&self.code)
    }

    fn matches_text(&self, text: &str) -> bool {
        match self.as_char() {
            Some(ch) => ch.to_lowercase().eq(text.chars().flat_map(char::to_lowercase)),
            None => false,
        }
    }
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Event {}

impl Hash for Event {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl PartialEq<i32> for Event {
    fn eq(&self, other: &i32) -> bool {
        self.code == *other
    }
}

impl PartialEq<char> for Event {
    fn eq(&self, other: &char) -> bool {
        let mut buf = [0u8; 4];
        self.matches_text(other.encode_utf8(&mut buf))
    }
}

impl PartialEq<str> for Event {
    fn eq(&self, other: &str) -> bool {
        self.matches_text(other)
    }
}

impl PartialEq<&str> for Event {
    fn eq(&self, other: &&str) -> bool {
        self.matches_text(other)
    }
}
