//! The cell grid a frame is painted into.
//!
//! Coordinates are signed: centered or nested components may start left of
//! or above the grid. Whatever falls outside is dropped.

use unicode_width::UnicodeWidthChar;

use crate::types::{Cell, ColorPair};

/// Box-drawing glyphs used for rectangle outlines.
const HORIZ: char = '─';
const VERT: char = '│';
const TOP_LEFT: char = '┌';
const TOP_RIGHT: char = '┐';
const BOTTOM_LEFT: char = '└';
const BOTTOM_RIGHT: char = '┘';

/// Row-major cells, `width * height` of them.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); usize::from(width) * usize::from(height)],
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Convert signed (x, y) to a flat index, if on the grid.
    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Blank every cell.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Change dimensions. The content is lost.
    pub fn resize(&mut self, width: u16, height: u16) {
        *self = Self::new(width, height);
    }

    /// Set a single cell. Returns true if the cell was on the grid.
    pub fn set_cell(&mut self, x: i32, y: i32, char: u32, colors: ColorPair) -> bool {
        let Some(index) = self.index(x, y) else {
            return false;
        };
        self.cells[index] = Cell {
            char,
            fg: colors.fg,
            bg: colors.bg,
        };
        true
    }

    pub fn draw_char(&mut self, x: i32, y: i32, ch: char, colors: ColorPair) -> bool {
        self.set_cell(x, y, ch as u32, colors)
    }

    /// Lay `text` out left to right from `(x, y)`, stopping at the right
    /// edge. Returns the columns used. A wide glyph fills two columns, the
    /// second holding a continuation cell.
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str, colors: ColorPair) -> i32 {
        let right_edge = i32::from(self.width);
        let mut column = x;
        for ch in text.chars() {
            if column >= right_edge {
                break;
            }
            let span = char_width(ch) as i32;
            if span == 0 {
                continue;
            }
            self.set_cell(column, y, ch as u32, colors);
            if span == 2 {
                self.set_cell(column + 1, y, 0, colors);
            }
            column += span;
        }
        column - x
    }

    /// Draw a rectangle outline with corners at (x0, y0) and (x1, y1),
    /// both inclusive.
    pub fn draw_rect_outline(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, colors: ColorPair) {
        let (left, right) = (x0.min(x1), x0.max(x1));
        let (top, bottom) = (y0.min(y1), y0.max(y1));

        // Edges are walked only where they cross the grid.
        let columns = left.saturating_add(1).max(0)..right.min(i32::from(self.width));
        let rows = top.saturating_add(1).max(0)..bottom.min(i32::from(self.height));
        for col in columns {
            self.draw_char(col, top, HORIZ, colors);
            self.draw_char(col, bottom, HORIZ, colors);
        }
        for row in rows {
            self.draw_char(left, row, VERT, colors);
            self.draw_char(right, row, VERT, colors);
        }

        self.draw_char(left, top, TOP_LEFT, colors);
        self.draw_char(right, top, TOP_RIGHT, colors);
        self.draw_char(left, bottom, BOTTOM_LEFT, colors);
        self.draw_char(right, bottom, BOTTOM_RIGHT, colors);
    }

    /// One row as a string, continuation cells skipped. Mostly for tests.
    pub fn row_text(&self, y: i32) -> String {
        (0..self.width as i32)
            .filter_map(|x| self.get(x, y))
            .filter_map(Cell::symbol)
            .collect()
    }
}

/// Terminal columns taken by `ch`. Control characters take none.
pub fn char_width(ch: char) -> usize {
    if ch.is_control() { 0 } else { ch.width().unwrap_or(0) }
}

pub fn string_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}
