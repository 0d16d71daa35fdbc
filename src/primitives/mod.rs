//! Ready-made drawables.
//!
//! - [`TextField`] - single-line text entry with a scrolling window
//! - [`Art`] - multi-line text block
//! - [`Border`] - rectangle outline
//! - [`Table`] - titled columns with a selectable row

pub mod box_primitive;
pub mod input;
pub mod table;
pub mod text;

pub use box_primitive::Border;
pub use input::{SubmitHook, TextField};
pub use table::{ColumnSpec, Table, TableRow};
pub use text::Art;
