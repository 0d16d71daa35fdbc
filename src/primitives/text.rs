//! Multi-line text blocks.

use crate::surface::Surface;
use crate::view::{Bind, Drawable, Placement};

/// A block of lines drawn as is. Size is the longest line by the line count.
#[derive(Debug, Clone)]
pub struct Art {
    placement: Placement,
    lines: Vec<String>,
}

impl Art {
    pub fn new(x: i32, y: i32, source: &str) -> Self {
        let mut art = Self {
            placement: Placement::new(x, y),
            lines: Vec::new(),
        };
        art.set_lines(source);
        art
    }

    pub fn with_bind(mut self, bind: Bind) -> Self {
        self.placement.bind = bind;
        self
    }

    /// Replace the content with the lines of `source`.
    pub fn set_lines(&mut self, source: &str) {
        self.lines = source.split('\n').map(str::to_string).collect();
        self.sync_size();
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Overwrite one character, padding the line with spaces as needed.
    /// Returns false if row `y` does not exist.
    pub fn set_entry(&mut self, x: usize, y: usize, ch: char) -> bool {
        let width = self.placement.width() as usize;
        let Some(line) = self.lines.get_mut(y) else {
            return false;
        };

        let mut chars: Vec<char> = line.chars().collect();
        let padded = width.max(x + 1);
        if chars.len() < padded {
            chars.resize(padded, ' ');
        }
        chars[x] = ch;
        *line = chars.into_iter().collect();
        self.sync_size();
        true
    }

    fn sync_size(&mut self) {
        let width = self
            .lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        self.placement.set_size(width as i32, self.lines.len() as i32);
    }
}

impl Drawable for Art {
    fn placement(&self) -> &Placement {
        &self.placement
    }

    fn placement_mut(&mut self) -> &mut Placement {
        &mut self.placement
    }

    fn draw(&self, x: i32, y: i32, surface: &mut dyn Surface) {
        for (row, line) in self.lines.iter().enumerate() {
            surface.draw_text(x, y + row as i32, line.trim_end(), None);
        }
    }
}
