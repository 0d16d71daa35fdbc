//! Input: the event value, raw key codes, and terminal key translation.
//!
//! ```text
//! crossterm KeyEvent → translate → raw codes → Surface::poll_event → Event
//! ```

pub mod event;
pub mod keys;
pub mod translate;

pub use event::{Event, EventKind};
pub use translate::{Translated, translate_key};
