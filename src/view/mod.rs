//! The component tree.
//!
//! - [`Drawable`]: anything that renders, handles events and takes focus
//! - [`View`]: a drawable holding named children with one active slot
//! - [`Screen`] / [`Controller`]: the set of top-level views and the final
//!   event handler

pub mod container;
pub mod controller;
pub mod drawable;

pub use container::{Container, View};
pub use controller::{Controller, Screen, ViewHandler, ViewHandlers};
pub use drawable::{AsAny, Bind, Drawable, Placement};
