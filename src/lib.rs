//! # trellis-tui
//!
//! Component tree, focus and event propagation for terminal UIs.
//!
//! ## Architecture
//!
//! A [`Controller`] owns a [`Screen`] of named top-level views. Views are
//! [`View`] containers holding named [`Drawable`] children, one of them
//! active. The chain of active children below the active view is the focus
//! path:
//!
//! ```text
//! Screen ─ active view ─ active child ─ … ─ active leaf
//! ```
//!
//! Each tick of a [`Session`] polls one event from the [`Surface`], walks the
//! focus path from the leaf back to the view (any handler may stop the event
//! there), hands surviving events to the controller, then clears and renders
//! the whole tree and lets the focused leaf place the cursor.
//!
//! ## Modules
//!
//! - [`view`] - Drawable, View, Screen, Controller
//! - [`engine`] - focus stack and event propagation
//! - [`pipeline`] - the session loop
//! - [`input`] - events and raw key codes
//! - [`surface`] - terminal and in-memory surfaces
//! - [`renderer`] - frame buffer and diffed ANSI output
//! - [`primitives`] - text field, art, border, table

pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod logging;
pub mod pipeline;
pub mod primitives;
pub mod renderer;
pub mod surface;
pub mod types;
pub mod view;

pub use config::{LogConfig, SessionConfig};
pub use engine::{EventBus, FocusEntry, FocusStack};
pub use error::{Error, Lookup, Result};
pub use input::{Event, EventKind};
pub use pipeline::{CloseReason, Session, SessionState};
pub use primitives::{Art, Border, ColumnSpec, Table, TableRow, TextField};
pub use surface::{MemorySurface, Surface, TerminalSurface};
pub use types::{ColorPair, ColorRef, Rgba};
pub use view::{Bind, Container, Controller, Drawable, Placement, Screen, View, ViewHandlers};
