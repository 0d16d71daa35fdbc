//! Column tables with a selectable row.

use crate::error::{Error, Result};
use crate::input::Event;
use crate::input::keys::{KEY_DOWN, KEY_UP};
use crate::surface::Surface;
use crate::types::Rgba;
use crate::view::{Drawable, Placement};

/// Background of the selected row unless configured otherwise.
pub const DEFAULT_SELECTED_BG: Rgba = Rgba::LIGHT_GRAY;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    title: String,
    max_width: usize,
}

impl ColumnSpec {
    /// The title must leave at least one column of slack.
    pub fn new(title: impl Into<String>, max_width: usize) -> Result<Self> {
        let title = title.into();
        if title.chars().count() >= max_width {
            return Err(Error::Config(format!(
                "column title {title:?} does not fit in width {max_width}"
            )));
        }
        Ok(Self { title, max_width })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn max_width(&self) -> usize {
        self.max_width
    }

    /// Padding needed after `value` to fill the column.
    pub fn trailing_space(&self, value: &str) -> usize {
        self.max_width.saturating_sub(value.chars().count())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRow {
    cells: Vec<String>,
}

impl TableRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: impl ToString) {
        self.cells.push(value.to_string());
    }

    pub fn extend<I>(&mut self, values: I)
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        self.cells.extend(values.into_iter().map(|v| v.to_string()));
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.cells.iter()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<S: ToString> FromIterator<S> for TableRow {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().map(|v| v.to_string()).collect(),
        }
    }
}

/// A header line followed by one line per row. Columns are separated by a
/// single space; values longer than their column are cut.
#[derive(Debug, Clone)]
pub struct Table {
    placement: Placement,
    columns: Vec<ColumnSpec>,
    rows: Vec<TableRow>,
    selected: usize,
    selected_bg: Rgba,
}

impl Table {
    /// A table with headers only. The first row is selected once rows arrive.
    pub fn new(x: i32, y: i32, columns: Vec<ColumnSpec>) -> Self {
        let mut table = Self {
            placement: Placement::new(x, y),
            columns,
            rows: Vec::new(),
            selected: 0,
            selected_bg: DEFAULT_SELECTED_BG,
        };
        table.sync_size();
        table
    }

    pub fn with_selected_bg(mut self, bg: Rgba) -> Self {
        self.selected_bg = bg;
        self
    }

    /// Column definitions, left to right.
    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// Rows in display order.
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Replace the rows, keeping the selection on a valid row.
    pub fn set_rows(&mut self, rows: Vec<TableRow>) {
        self.rows = rows;
        self.selected = self.selected.min(self.last_index());
        self.sync_size();
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_row(&self) -> Option<&TableRow> {
        self.rows.get(self.selected)
    }

    /// Select the previous row, stopping at the first.
    pub fn up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Select the next row, stopping at the last.
    pub fn down(&mut self) {
        self.selected = (self.selected + 1).min(self.last_index());
    }

    fn last_index(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }

    fn sync_size(&mut self) {
        let cells: usize = self.columns.iter().map(ColumnSpec::max_width).sum();
        let separators = self.columns.len().saturating_sub(1);
        self.placement
            .set_size((cells + separators) as i32, self.rows.len() as i32 + 1);
    }
}

impl Drawable for Table {
    fn placement(&self) -> &Placement {
        &self.placement
    }

    fn placement_mut(&mut self) -> &mut Placement {
        &mut self.placement
    }

    fn draw(&self, x: i32, y: i32, surface: &mut dyn Surface) {
        let mut column_x = x;
        for column in &self.columns {
            surface.draw_text(column_x, y, column.title(), None);
            column_x += column.max_width() as i32 + 1;
        }

        let highlight = surface.allocate_color_pair(Rgba::WHITE, self.selected_bg);
        let plain = surface.default_color();
        for (index, row) in self.rows.iter().enumerate() {
            let row_y = y + 1 + index as i32;
            let color = if index == self.selected { highlight } else { plain };
            let mut column_x = x;
            for (value, column) in row.iter().zip(&self.columns) {
                let shown: String = value.chars().take(column.max_width()).collect();
                let padded = format!("{shown}{}", " ".repeat(column.trailing_space(&shown)));
                surface.draw_text(column_x, row_y, &padded, Some(color));
                column_x += column.max_width() as i32 + 1;
            }
        }
    }

    fn handle_event(&mut self, event: &Event, _surface: &mut dyn Surface) -> Result<()> {
        match event.code() {
            KEY_UP => self.up(),
            KEY_DOWN => self.down(),
            _ => return Ok(()),
        }
        event.stop_propagation();
        Ok(())
    }

    fn has_focus(&self, x: i32, y: i32, surface: &mut dyn Surface) {
        let (left, top) = self.placement.anchored(x, y);
        surface.move_cursor(
            left + self.placement.width(),
            top + self.selected as i32 + 1,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MemorySurface;
    use crate::view::Bind;
    use pretty_assertions::assert_eq;

    fn table() -> Table {
        let columns = vec![
            ColumnSpec::new("User", 6).unwrap(),
            ColumnSpec::new("Room", 5).unwrap(),
        ];
        let mut table = Table::new(0, 0, columns);
        table.set_rows(vec![
            ["ann", "lobby"].into_iter().collect(),
            ["bartholomew", "den"].into_iter().collect(),
            ["cy", "roof"].into_iter().collect(),
        ]);
        table
    }

    fn press(table: &mut Table, code: i32) -> bool {
        let event = Event::key(code);
        table
            .handle_event(&event, &mut MemorySurface::new(1, 1))
            .unwrap();
        event.should_handle()
    }

    #[test]
    fn test_title_must_fit() {
        assert!(ColumnSpec::new("Name", 5).is_ok());
        assert!(matches!(ColumnSpec::new("Name", 4), Err(Error::Config(_))));
        assert_eq!(ColumnSpec::new("x", 5).unwrap().trailing_space("abc"), 2);
    }

    #[test]
    fn test_size() {
        let table = table();
        assert_eq!((table.width(), table.height()), (12, 4));
    }

    #[test]
    fn test_selection_clamps_to_last_row() {
        let mut table = table();
        assert!(!press(&mut table, KEY_UP));
        assert_eq!(table.selected_index(), 0);
        for _ in 0..5 {
            press(&mut table, KEY_DOWN);
        }
        assert_eq!(table.selected_index(), 2);
        assert_eq!(table.selected_row().unwrap().cells()[0], "cy");
        assert!(press(&mut table, 'x' as i32));
    }

    #[test]
    fn test_shrinking_rows_clamps_selection() {
        let mut table = table();
        table.down();
        table.down();
        table.set_rows(vec![["solo"].into_iter().collect()]);
        assert_eq!(table.selected_index(), 0);
        table.set_rows(Vec::new());
        assert!(table.selected_row().is_none());
        table.down();
        assert_eq!(table.selected_index(), 0);
    }

    #[test]
    fn test_draw_highlights_selected_row() {
        let mut surface = MemorySurface::new(14, 4);
        let mut table = table();
        table.down();
        table.render(0, 0, &mut surface);

        assert_eq!(surface.row_text(0), "User   Room   ");
        assert_eq!(surface.row_text(1), "ann    lobby  ");
        assert_eq!(surface.row_text(2), "bartho den    ");
        assert_eq!(surface.cell(0, 2).unwrap().bg, DEFAULT_SELECTED_BG);
        assert_eq!(surface.cell(0, 1).unwrap().bg, Rgba::TERMINAL_DEFAULT);
    }

    #[test]
    fn test_focus_cursor_tracks_selection() {
        let mut surface = MemorySurface::new(20, 6);
        let mut table = table();
        table.move_to(Some(2), Some(1));
        table.down();
        table.has_focus(1, 1, &mut surface);
        assert_eq!(surface.canvas().cursor(), Some((1 + 14, 1 + 1 + 1 + 1)));
    }

    #[test]
    fn test_centered_focus_cursor() {
        let mut surface = MemorySurface::new(20, 8);
        let mut table = table();
        table.placement_mut().bind = Bind::Center;
        table.move_to(Some(10), Some(5));
        table.render(0, 0, &mut surface);
        table.has_focus(0, 0, &mut surface);

        assert_eq!(surface.row_text(3), format!("{:<20}", "    User   Room"));
        assert_eq!(surface.canvas().cursor(), Some((16, 4)));
    }
}
