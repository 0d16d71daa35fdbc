//! Grid state shared by every surface: the frame being drawn, the palette,
//! and the requested cursor location.

use crate::renderer::FrameBuffer;
use crate::types::{ColorRef, Rgba};

use super::palette::Palette;

#[derive(Debug, Clone)]
pub struct Canvas {
    frame: FrameBuffer,
    palette: Palette,
    cursor: Option<(i32, i32)>,
    applied: Option<(u16, u16)>,
}

impl Canvas {
    pub fn new(width: u16, height: u16, fg: Rgba, bg: Rgba) -> Self {
        Self {
            frame: FrameBuffer::new(width, height),
            palette: Palette::new(fg, bg),
            cursor: None,
            applied: None,
        }
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn palette_mut(&mut self) -> &mut Palette {
        &mut self.palette
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.frame.resize(width, height);
    }

    /// Blank the frame and drop the cursor request. Each frame's focused
    /// leaf claims the cursor again; without a claim the flush hides it.
    pub fn clear(&mut self) {
        self.frame.clear();
        self.cursor = None;
    }

    pub fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Option<ColorRef>) {
        let colors = self.palette.resolve(color.unwrap_or(self.palette.default_ref()));
        self.frame.draw_text(x, y, text, colors);
    }

    pub fn draw_char(&mut self, x: i32, y: i32, ch: char, color: Option<ColorRef>) {
        let colors = self.palette.resolve(color.unwrap_or(self.palette.default_ref()));
        self.frame.draw_char(x, y, ch, colors);
    }

    pub fn draw_rect_outline(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        let colors = self.palette.resolve(self.palette.default_ref());
        self.frame.draw_rect_outline(x0, y0, x1, y1, colors);
    }

    /// Record where the cursor should go at the next flush.
    pub fn move_cursor(&mut self, x: i32, y: i32) {
        self.cursor = Some((x, y));
    }

    pub fn cursor(&self) -> Option<(i32, i32)> {
        self.cursor
    }

    /// The requested cursor location, if it lies on the grid.
    pub fn cursor_on_grid(&self) -> Option<(u16, u16)> {
        let (x, y) = self.cursor?;
        self.frame.in_bounds(x, y).then_some((x as u16, y as u16))
    }

    /// Latch the requested location as the one the next flush shows.
    pub fn apply_cursor(&mut self) {
        self.applied = self.cursor_on_grid();
    }

    pub fn applied_cursor(&self) -> Option<(u16, u16)> {
        self.applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_on_grid() {
        let mut canvas = Canvas::new(10, 5, Rgba::WHITE, Rgba::BLACK);
        assert_eq!(canvas.cursor_on_grid(), None);
        canvas.move_cursor(3, 4);
        assert_eq!(canvas.cursor_on_grid(), Some((3, 4)));
        assert_eq!(canvas.applied_cursor(), None);
        canvas.apply_cursor();
        assert_eq!(canvas.applied_cursor(), Some((3, 4)));
        canvas.move_cursor(10, 0);
        assert_eq!(canvas.cursor(), Some((10, 0)));
        assert_eq!(canvas.cursor_on_grid(), None);
    }

    #[test]
    fn test_clear_drops_cursor_request() {
        let mut canvas = Canvas::new(10, 5, Rgba::WHITE, Rgba::BLACK);
        canvas.move_cursor(2, 2);
        canvas.apply_cursor();
        canvas.clear();
        assert_eq!(canvas.cursor(), None);
        canvas.apply_cursor();
        assert_eq!(canvas.applied_cursor(), None);
    }

    #[test]
    fn test_draw_uses_palette_colors() {
        let mut canvas = Canvas::new(4, 1, Rgba::WHITE, Rgba::BLACK);
        let red = canvas.palette_mut().allocate(Rgba::RED, Rgba::BLACK);
        canvas.draw_char(0, 0, 'a', None);
        canvas.draw_char(1, 0, 'b', Some(red));
        assert_eq!(canvas.frame().get(0, 0).unwrap().fg, Rgba::WHITE);
        assert_eq!(canvas.frame().get(1, 0).unwrap().fg, Rgba::RED);
    }
}
