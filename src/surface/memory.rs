//! Headless surface with scripted input.
//!
//! Input is a queue of steps; each poll consumes one. A `Gap` step makes a
//! single poll come back empty, which lets tests interleave idle ticks.

use std::collections::VecDeque;

use crate::error::{Error, Result};
use crate::renderer::FrameBuffer;
use crate::types::{Cell, Rgba};

use super::{Canvas, Surface};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Code(i32),
    Gap,
    Interrupt,
}

#[derive(Debug)]
pub struct MemorySurface {
    canvas: Canvas,
    input: VecDeque<Step>,
    flushed: Option<FrameBuffer>,
    flushed_cursor: Option<(u16, u16)>,
    flush_count: usize,
    restore_count: usize,
    reports: Vec<String>,
}

impl MemorySurface {
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_colors(width, height, Rgba::TERMINAL_DEFAULT, Rgba::TERMINAL_DEFAULT)
    }

    pub fn with_colors(width: u16, height: u16, fg: Rgba, bg: Rgba) -> Self {
        Self {
            canvas: Canvas::new(width, height, fg, bg),
            input: VecDeque::new(),
            flushed: None,
            flushed_cursor: None,
            flush_count: 0,
            restore_count: 0,
            reports: Vec::new(),
        }
    }

    /// Queue one raw code.
    pub fn push_code(&mut self, code: i32) -> &mut Self {
        self.input.push_back(Step::Code(code));
        self
    }

    /// Queue each character of `text` as its own raw code.
    pub fn push_text(&mut self, text: &str) -> &mut Self {
        self.input
            .extend(text.chars().map(|ch| Step::Code(ch as i32)));
        self
    }

    /// Queue a poll that returns nothing.
    pub fn push_gap(&mut self) -> &mut Self {
        self.input.push_back(Step::Gap);
        self
    }

    /// Queue an interrupt request.
    pub fn push_interrupt(&mut self) -> &mut Self {
        self.input.push_back(Step::Interrupt);
        self
    }

    pub fn pending_input(&self) -> usize {
        self.input.len()
    }

    /// The last flushed frame, or the live one if nothing was flushed yet.
    pub fn screen(&self) -> &FrameBuffer {
        self.flushed.as_ref().unwrap_or(self.canvas.frame())
    }

    /// Text of row `y` of the last flushed frame.
    pub fn row_text(&self, y: i32) -> String {
        self.screen().row_text(y)
    }

    pub fn cell(&self, x: i32, y: i32) -> Option<&Cell> {
        self.screen().get(x, y)
    }

    /// Cursor location shown by the last flush.
    pub fn flushed_cursor(&self) -> Option<(u16, u16)> {
        self.flushed_cursor
    }

    pub fn flush_count(&self) -> usize {
        self.flush_count
    }

    pub fn restore_count(&self) -> usize {
        self.restore_count
    }

    pub fn reports(&self) -> &[String] {
        &self.reports
    }
}

impl Surface for MemorySurface {
    fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    fn poll_raw(&mut self) -> Result<Option<i32>> {
        match self.input.pop_front() {
            Some(Step::Code(code)) => Ok(Some(code)),
            Some(Step::Interrupt) => Err(Error::Interrupted),
            Some(Step::Gap) | None => Ok(None),
        }
    }

    fn flush(&mut self) -> Result<()> {
        self.flushed = Some(self.canvas.frame().clone());
        self.flushed_cursor = self.canvas.applied_cursor();
        self.flush_count += 1;
        Ok(())
    }

    fn restore(&mut self) -> Result<()> {
        self.restore_count += 1;
        Ok(())
    }

    fn report(&mut self, reason: &str) {
        self.reports.push(reason.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::keys::KEY_ESC;

    #[test]
    fn test_poll_event_plain_codes() {
        let mut surface = MemorySurface::new(4, 1);
        surface.push_text("hi");

        assert_eq!(surface.poll_event().unwrap().unwrap(), 'h' as i32);
        assert_eq!(surface.poll_event().unwrap().unwrap(), 'i' as i32);
        assert!(surface.poll_event().unwrap().is_none());
    }

    #[test]
    fn test_escape_prefix_forms_modified_event() {
        let mut surface = MemorySurface::new(4, 1);
        surface.push_code(KEY_ESC).push_code('x' as i32);

        let event = surface.poll_event().unwrap().unwrap();
        assert_eq!(event, 'x' as i32);
        assert_eq!(event.modifier(), Some(KEY_ESC));
        assert_eq!(surface.pending_input(), 0);
    }

    #[test]
    fn test_lone_escape() {
        let mut surface = MemorySurface::new(4, 1);
        surface.push_code(KEY_ESC);

        let event = surface.poll_event().unwrap().unwrap();
        assert_eq!(event, KEY_ESC);
        assert_eq!(event.modifier(), None);
    }

    #[test]
    fn test_gap_and_interrupt() {
        let mut surface = MemorySurface::new(4, 1);
        surface.push_gap().push_interrupt();

        assert!(surface.poll_event().unwrap().is_none());
        assert!(matches!(surface.poll_event(), Err(Error::Interrupted)));
    }

    #[test]
    fn test_flush_snapshots_frame_and_cursor() {
        let mut surface = MemorySurface::new(4, 1);
        surface.draw_text(0, 0, "ab", None);
        surface.move_cursor(2, 0);
        surface.apply_cursor_position();
        surface.flush().unwrap();

        surface.clear();
        assert_eq!(surface.row_text(0), "ab  ");
        assert_eq!(surface.flushed_cursor(), Some((2, 0)));
        assert_eq!(surface.flush_count(), 1);
    }
}
