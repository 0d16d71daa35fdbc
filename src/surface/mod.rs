//! The terminal surface: everything the component tree needs from the
//! character-grid driver.
//!
//! A surface owns a [`Canvas`] (frame, palette, cursor request) and adds raw
//! input, flushing and teardown. Drawing goes through the provided methods so
//! every implementation clips and resolves colors the same way.
//!
//! - [`TerminalSurface`]: crossterm raw mode + diff rendering to stdout
//! - [`MemorySurface`]: scripted input and an inspectable grid, for tests

pub mod canvas;
pub mod memory;
pub mod palette;
pub mod terminal;

pub use canvas::Canvas;
pub use memory::MemorySurface;
pub use palette::Palette;
pub use terminal::TerminalSurface;

use crate::error::Result;
use crate::input::keys::KEY_ESC;
use crate::input::{Event, EventKind};
use crate::types::{ColorRef, Rgba};

pub trait Surface {
    fn canvas(&self) -> &Canvas;

    fn canvas_mut(&mut self) -> &mut Canvas;

    /// Next raw code, without blocking. `Ok(None)` when no input is pending.
    /// Returns `Err(Error::Interrupted)` on an interrupt request.
    fn poll_raw(&mut self) -> Result<Option<i32>>;

    /// The read that follows an escape. Surfaces that see input arrive
    /// byte by byte may wait briefly here.
    fn poll_raw_after_escape(&mut self) -> Result<Option<i32>> {
        self.poll_raw()
    }

    /// Push the current frame and applied cursor to the terminal.
    fn flush(&mut self) -> Result<()>;

    /// Restore the terminal modes changed at session start.
    fn restore(&mut self) -> Result<()>;

    /// Tell the user why the session closed. Called after `restore`.
    fn report(&mut self, reason: &str);

    /// Poll one event. An escape followed by another code becomes a single
    /// event for that code with the escape as its modifier.
    fn poll_event(&mut self) -> Result<Option<Event>> {
        let Some(code) = self.poll_raw()? else {
            return Ok(None);
        };
        if code < 0 {
            return Ok(None);
        }
        if code == KEY_ESC {
            let event = match self.poll_raw_after_escape()? {
                Some(real) if real >= 0 => Event::with_modifier(real, EventKind::Key, KEY_ESC),
                _ => Event::key(KEY_ESC),
            };
            return Ok(Some(event));
        }
        Ok(Some(Event::key(code)))
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Option<ColorRef>) {
        self.canvas_mut().draw_text(x, y, text, color);
    }

    fn draw_char(&mut self, x: i32, y: i32, ch: char, color: Option<ColorRef>) {
        self.canvas_mut().draw_char(x, y, ch, color);
    }

    /// Outline with corners at (x0, y0) and (x1, y1), inclusive.
    fn draw_rect_outline(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        self.canvas_mut().draw_rect_outline(x0, y0, x1, y1);
    }

    fn clear(&mut self) {
        self.canvas_mut().clear();
    }

    fn move_cursor(&mut self, x: i32, y: i32) {
        self.canvas_mut().move_cursor(x, y);
    }

    fn apply_cursor_position(&mut self) {
        self.canvas_mut().apply_cursor();
    }

    fn allocate_color_pair(&mut self, fg: Rgba, bg: Rgba) -> ColorRef {
        self.canvas_mut().palette_mut().allocate(fg, bg)
    }

    fn default_color(&self) -> ColorRef {
        self.canvas().palette().default_ref()
    }
}
