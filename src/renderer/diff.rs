//! Frame-to-frame diffing.
//!
//! Each frame is wrapped in a synchronized update. Cells equal to the ones
//! at the same position in the last frame are skipped; a size change drops
//! the last frame so everything is redrawn.

use std::io::{self, Write};

use super::ansi;
use super::buffer::FrameBuffer;
use super::output::{OutputBuffer, StatefulCellRenderer};
use crate::types::Cell;

#[derive(Debug, Default)]
pub struct DiffRenderer {
    output: OutputBuffer,
    cells: StatefulCellRenderer,
    last_frame: Option<FrameBuffer>,
}

impl DiffRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write the cells of `frame` that differ from the last one, then leave
    /// the cursor at `cursor` or hide it. Returns how many cells were sent.
    pub fn render<W: Write>(
        &mut self,
        frame: &FrameBuffer,
        cursor: Option<(u16, u16)>,
        writer: &mut W,
    ) -> io::Result<usize> {
        let stride = usize::from(frame.width()).max(1);
        let last: &[Cell] = match &self.last_frame {
            Some(last) if last.width() == frame.width() && last.height() == frame.height() => last.cells(),
            _ => &[],
        };

        ansi::begin_sync(&mut self.output)?;
        self.cells.reset();

        let mut sent = 0;
        for (index, cell) in frame.cells().iter().enumerate() {
            if last.get(index) == Some(cell) {
                continue;
            }
            let (x, y) = (index % stride, index / stride);
            self.cells.render_cell(&mut self.output, x as u16, y as u16, cell);
            sent += 1;
        }
        if sent > 0 {
            ansi::reset(&mut self.output)?;
        }

        if let Some((x, y)) = cursor {
            ansi::cursor_to(&mut self.output, x, y)?;
            ansi::cursor_show(&mut self.output)?;
        } else {
            ansi::cursor_hide(&mut self.output)?;
        }
        ansi::end_sync(&mut self.output)?;
        self.output.flush_to(writer)?;

        match &mut self.last_frame {
            Some(last) if last.width() == frame.width() && last.height() == frame.height() => {
                last.clone_from(frame);
            }
            slot => *slot = Some(frame.clone()),
        }
        Ok(sent)
    }

    /// Drop the last frame so the next render repaints every cell.
    pub fn invalidate(&mut self) {
        self.last_frame = None;
    }

    pub fn has_previous(&self) -> bool {
        self.last_frame.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ColorPair;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_only_changes_after_first_frame() {
        let mut renderer = DiffRenderer::new();
        let mut frame = FrameBuffer::new(4, 2);
        let mut sink = Vec::new();

        assert!(!renderer.has_previous());
        assert_eq!(renderer.render(&frame, None, &mut sink).unwrap(), 8);

        frame.draw_char(1, 1, 'x', ColorPair::default());
        assert_eq!(renderer.render(&frame, Some((1, 1)), &mut sink).unwrap(), 1);
        assert_eq!(renderer.render(&frame, Some((1, 1)), &mut sink).unwrap(), 0);
    }

    #[test]
    fn test_cursor_is_placed_or_hidden() {
        let mut renderer = DiffRenderer::new();
        let frame = FrameBuffer::new(2, 1);

        let mut sink = Vec::new();
        renderer.render(&frame, Some((1, 0)), &mut sink).unwrap();
        let text = String::from_utf8(sink).unwrap();
        assert!(text.ends_with("\x1b[1;2H\x1b[?25h\x1b[?2026l"));

        let mut sink = Vec::new();
        renderer.render(&frame, None, &mut sink).unwrap();
        assert_eq!(String::from_utf8(sink).unwrap(), "\x1b[?2026h\x1b[?25l\x1b[?2026l");
    }

    #[test]
    fn test_resize_and_invalidate_redraw_everything() {
        let mut renderer = DiffRenderer::new();
        let mut sink = Vec::new();

        renderer.render(&FrameBuffer::new(3, 1), None, &mut sink).unwrap();
        assert_eq!(renderer.render(&FrameBuffer::new(2, 2), None, &mut sink).unwrap(), 4);

        renderer.invalidate();
        assert!(!renderer.has_previous());
        assert_eq!(renderer.render(&FrameBuffer::new(2, 2), None, &mut sink).unwrap(), 4);
    }
}
