//! Dispatch engine: focus path resolution and event propagation.

pub mod bus;
pub mod focus;

pub use bus::EventBus;
pub use focus::{FocusEntry, FocusStack, resolve, resolve_mut};
