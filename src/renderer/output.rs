//! Frame output: a byte buffer flushed once per frame, and a cell writer
//! that remembers what the terminal already has.

use std::borrow::Cow;
use std::io::{self, Write};

use super::ansi;
use crate::types::{Cell, Rgba};

/// Room for a full redraw of a typical terminal without regrowing.
const INITIAL_CAPACITY: usize = 16 * 1024;

/// Bytes waiting for the next [`flush_to`](OutputBuffer::flush_to).
#[derive(Debug, Default)]
pub struct OutputBuffer {
    bytes: Vec<u8>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Drop pending bytes, keeping the allocation.
    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    pub fn write_str(&mut self, text: &str) {
        self.bytes.extend_from_slice(text.as_bytes());
    }

    pub fn write_char(&mut self, ch: char) {
        let mut utf8 = [0u8; 4];
        self.write_str(ch.encode_utf8(&mut utf8));
    }

    /// Invalid scalar values are dropped.
    pub fn write_codepoint(&mut self, codepoint: u32) {
        if let Some(ch) = char::from_u32(codepoint) {
            self.write_char(ch);
        }
    }

    /// Hand everything to `sink` in one write and empty the buffer.
    pub fn flush_to<W: Write>(&mut self, sink: &mut W) -> io::Result<()> {
        if !self.bytes.is_empty() {
            sink.write_all(&self.bytes)?;
            sink.flush()?;
            self.bytes.clear();
        }
        Ok(())
    }

    pub fn as_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }
}

impl Write for OutputBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Terminal state after the last emitted cell.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Pen {
    /// Column and row of the last cell, if any was written this frame.
    at: Option<(u16, u16)>,
    fg: Option<Rgba>,
    bg: Option<Rgba>,
}

impl Pen {
    const FRESH: Pen = Pen {
        at: None,
        fg: None,
        bg: None,
    };

    /// Whether writing at `(x, y)` continues from the last cell without a
    /// cursor move.
    fn follows(&self, x: u16, y: u16) -> bool {
        matches!(self.at, Some((px, py)) if py == y && u32::from(px) + 1 == u32::from(x))
    }
}

/// Writes cells into an [`OutputBuffer`], emitting a cursor move or an SGR
/// change only when the cell needs one.
#[derive(Debug)]
pub struct StatefulCellRenderer {
    pen: Pen,
}

impl StatefulCellRenderer {
    pub fn new() -> Self {
        Self { pen: Pen::FRESH }
    }

    /// Forget the terminal state. Called before each frame.
    pub fn reset(&mut self) {
        self.pen = Pen::FRESH;
    }

    pub fn render_cell(&mut self, output: &mut OutputBuffer, x: u16, y: u16, cell: &Cell) {
        // The right half of a wide glyph: the terminal has already moved
        // past it.
        if cell.char == 0 {
            self.pen.at = Some((x, y));
            return;
        }

        // Writes into an `OutputBuffer` cannot fail.
        if !self.pen.follows(x, y) {
            let _ = ansi::cursor_to(output, x, y);
        }

        if self.pen.fg != Some(cell.fg) {
            let _ = ansi::fg(output, cell.fg);
            self.pen.fg = Some(cell.fg);
        }
        if self.pen.bg != Some(cell.bg) {
            let _ = ansi::bg(output, cell.bg);
            self.pen.bg = Some(cell.bg);
        }

        output.write_codepoint(cell.char);
        self.pen.at = Some((x, y));
    }
}

impl Default for StatefulCellRenderer {
    fn default() -> Self {
        Self::new()
    }
}
