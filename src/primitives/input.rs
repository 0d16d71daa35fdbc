//! Single-line text entry.
//!
//! The field shows a window of `max_width` characters that scrolls to keep
//! the cursor visible. The cursor may sit one column past the last visible
//! character, so the field draws `max_width` cells and places the cursor in
//! `0..=max_width`.

use crate::error::Result;
use crate::input::Event;
use crate::input::keys::{KEY_DC, KEY_DELETE, KEY_END, KEY_ENTER, KEY_HOME, KEY_LEFT, KEY_RIGHT};
use crate::surface::Surface;
use crate::view::{Bind, Drawable, Placement};

/// Default visible width, in characters.
pub const DEFAULT_WIDTH: usize = 12;

/// Called with the current text when Enter is pressed.
pub type SubmitHook = Box<dyn FnMut(&str) -> Result<()>>;

pub struct TextField {
    placement: Placement,
    text: String,
    /// Cursor position in characters.
    cursor: usize,
    /// First visible character.
    left: usize,
    max_width: usize,
    max_length: Option<usize>,
    on_submit: Option<SubmitHook>,
}

impl TextField {
    /// An empty field of [`DEFAULT_WIDTH`] at `(x, y)`.
    pub fn new(x: i32, y: i32) -> Self {
        let mut field = Self {
            placement: Placement::new(x, y),
            text: String::new(),
            cursor: 0,
            left: 0,
            max_width: DEFAULT_WIDTH,
            max_length: None,
            on_submit: None,
        };
        field.sync_size();
        field
    }

    /// Set the visible width. The field's size follows.
    pub fn with_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self.sync_size();
        self.follow_cursor();
        self
    }

    /// Limit the number of characters. Defaults to the width.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    pub fn with_bind(mut self, bind: Bind) -> Self {
        self.placement.bind = bind;
        self
    }

    pub fn on_submit(mut self, hook: impl FnMut(&str) -> Result<()> + 'static) -> Self {
        self.on_submit = Some(Box::new(hook));
        self
    }

    /// The whole text, including any part scrolled out of view.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text and move the cursor to its end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.len();
        self.follow_cursor();
    }

    /// Empty the field, returning what it held.
    pub fn take_text(&mut self) -> String {
        self.cursor = 0;
        self.left = 0;
        std::mem::take(&mut self.text)
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Visible width in characters.
    pub fn max_width(&self) -> usize {
        self.max_width
    }

    pub fn max_length(&self) -> usize {
        self.max_length.unwrap_or(self.max_width)
    }

    /// Cursor position in characters from the start of the text.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Cursor column relative to the field's left edge.
    pub fn cursor_column(&self) -> usize {
        self.cursor - self.left
    }

    /// The part of the text currently shown.
    pub fn visible_text(&self) -> String {
        self.text.chars().skip(self.left).take(self.max_width).collect()
    }

    fn sync_size(&mut self) {
        self.placement.set_size(self.max_width as i32, 1);
    }

    fn follow_cursor(&mut self) {
        if self.cursor < self.left {
            self.left = self.cursor;
        }
        if self.cursor - self.left > self.max_width {
            self.left = self.cursor - self.max_width;
        }
    }

    fn byte_offset(&self, index: usize) -> usize {
        self.text
            .char_indices()
            .nth(index)
            .map_or(self.text.len(), |(offset, _)| offset)
    }

    fn move_cursor(&mut self, delta: isize) {
        self.cursor = self.cursor.saturating_add_signed(delta).min(self.len());
        self.follow_cursor();
    }

    fn move_cursor_to(&mut self, position: usize) {
        self.cursor = position.min(self.len());
        self.follow_cursor();
    }

    /// Remove the character before the cursor.
    fn delete_backward(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let at = self.byte_offset(self.cursor - 1);
        self.text.remove(at);
        self.cursor -= 1;
        self.follow_cursor();
    }

    /// Remove the character under the cursor.
    fn delete_forward(&mut self) {
        if self.cursor >= self.len() {
            return;
        }
        let at = self.byte_offset(self.cursor);
        self.text.remove(at);
    }

    fn insert(&mut self, ch: char) {
        if self.len() >= self.max_length() {
            return;
        }
        let at = self.byte_offset(self.cursor);
        self.text.insert(at, ch);
        self.cursor += 1;
        self.follow_cursor();
    }
}

impl std::fmt::Debug for TextField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextField")
            .field("placement", &self.placement)
            .field("text", &self.text)
            .field("cursor", &self.cursor)
            .field("max_width", &self.max_width)
            .field("max_length", &self.max_length())
            .finish_non_exhaustive()
    }
}

impl Drawable for TextField {
    fn placement(&self) -> &Placement {
        &self.placement
    }

    fn placement_mut(&mut self) -> &mut Placement {
        &mut self.placement
    }

    fn draw(&self, x: i32, y: i32, surface: &mut dyn Surface) {
        surface.draw_text(x, y, &self.visible_text(), None);
    }

    fn handle_event(&mut self, event: &Event, _surface: &mut dyn Surface) -> Result<()> {
        // Alt chords belong to whoever binds them.
        if event.modifier().is_some() {
            return Ok(());
        }

        match event.code() {
            KEY_LEFT => self.move_cursor(-1),
            KEY_RIGHT => self.move_cursor(1),
            KEY_HOME => self.move_cursor_to(0),
            KEY_END => self.move_cursor_to(usize::MAX),
            KEY_DELETE => self.delete_backward(),
            KEY_DC => self.delete_forward(),
            KEY_ENTER => match self.on_submit.as_mut() {
                Some(hook) => hook(&self.text)?,
                None => return Ok(()),
            },
            _ => match event.printable() {
                Some(ch) => self.insert(ch),
                None => return Ok(()),
            },
        }
        event.stop_propagation();
        Ok(())
    }

    fn has_focus(&self, x: i32, y: i32, surface: &mut dyn Surface) {
        let (left, top) = self.placement.anchored(x, y);
        surface.move_cursor(left + self.cursor_column() as i32, top);
    }
}
