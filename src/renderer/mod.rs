//! Cells to bytes.
//!
//! Surfaces paint into a [`FrameBuffer`]; [`DiffRenderer`] turns each frame
//! into the escape sequences that bring the terminal up to date with it.

pub mod ansi;
pub mod buffer;
pub mod diff;
pub mod output;

pub use buffer::{FrameBuffer, char_width, string_width};
pub use diff::DiffRenderer;
pub use output::{OutputBuffer, StatefulCellRenderer};
