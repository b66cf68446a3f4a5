//! Tables, columns, rows and cells.
//!
//! Formatting falls back from cell to row to column to table. Merged regions
//! are described on their top-left (covering) cell through `merge_right` and
//! `merge_down`; the cells they cover stay in the grid so every row has one
//! cell per column.

use super::element::Block;
use super::format::{Borders, Inherit, ParagraphFormat, Shading, inherit_nested};
use super::types::{RowAlignment, RowHeightRule, VerticalAlignment};
use crate::common::Length;

#[derive(Debug, Clone, Default)]
pub struct Table {
    pub style: Option<String>,
    pub format: ParagraphFormat,
    pub borders: Option<Borders>,
    pub shading: Option<Shading>,
    pub top_padding: Option<Length>,
    pub bottom_padding: Option<Length>,
    pub left_padding: Option<Length>,
    pub right_padding: Option<Length>,
    pub columns: Vec<Column>,
    pub rows: Rows,
}

#[derive(Debug, Clone, Default)]
pub struct Column {
    pub width: Option<Length>,
    pub left_padding: Option<Length>,
    pub right_padding: Option<Length>,
    pub format: ParagraphFormat,
    pub borders: Option<Borders>,
    pub shading: Option<Shading>,
}

/// Row collection with the geometry shared by all rows.
#[derive(Debug, Clone, Default)]
pub struct Rows {
    pub alignment: Option<RowAlignment>,
    pub left_indent: Option<Length>,
    pub height: Option<Length>,
    pub height_rule: Option<RowHeightRule>,
    pub vertical_alignment: Option<VerticalAlignment>,
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, Default)]
pub struct Row {
    pub height: Option<Length>,
    pub height_rule: Option<RowHeightRule>,
    /// Repeat the row at the top of each page
    pub heading_format: bool,
    /// Number of following rows to keep on the same page as this one
    pub keep_with: usize,
    pub format: ParagraphFormat,
    pub borders: Option<Borders>,
    pub shading: Option<Shading>,
    pub vertical_alignment: Option<VerticalAlignment>,
    pub top_padding: Option<Length>,
    pub bottom_padding: Option<Length>,
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, Default)]
pub struct Cell {
    pub style: Option<String>,
    pub format: ParagraphFormat,
    pub borders: Option<Borders>,
    pub shading: Option<Shading>,
    pub vertical_alignment: Option<VerticalAlignment>,
    /// Number of cells to the right covered by this cell
    pub merge_right: usize,
    /// Number of cells below covered by this cell
    pub merge_down: usize,
    pub elements: Vec<Block>,
}

impl Cell {
    pub fn add(&mut self, block: impl Into<Block>) -> &mut Self {
        self.elements.push(block.into());
        self
    }
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_column(&mut self, width: Length) -> &mut Column {
        let index = self.columns.len();
        self.columns.push(Column {
            width: Some(width),
            ..Column::default()
        });
        &mut self.columns[index]
    }

    /// Append a row with one empty cell per column.
    pub fn add_row(&mut self) -> &mut Row {
        let cells = vec![Cell::default(); self.columns.len()];
        let index = self.rows.rows.len();
        self.rows.rows.push(Row {
            cells,
            ..Row::default()
        });
        &mut self.rows.rows[index]
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.rows.len()
    }

    #[inline]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.rows.get(row)?.cells.get(col)
    }

    #[inline]
    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        self.rows.rows.get_mut(row)?.cells.get_mut(col)
    }

    /// Style governing a cell's paragraphs.
    pub fn cell_style(&self, row: usize, col: usize) -> Option<&str> {
        self.cell(row, col)
            .and_then(|c| c.style.as_deref())
            .or(self.style.as_deref())
    }

    /// Paragraph format of a cell with row, column and table formats folded in.
    pub fn cell_format(&self, row: usize, col: usize) -> ParagraphFormat {
        let table = &self.format;
        let column = self.columns.get(col).map(|c| c.format.inherit_from(table));
        let column = column.as_ref().unwrap_or(table);
        let row_fmt = self.rows.rows.get(row).map(|r| r.format.inherit_from(column));
        let row_fmt = row_fmt.as_ref().unwrap_or(column);
        match self.cell(row, col) {
            Some(cell) => cell.format.inherit_from(row_fmt),
            None => row_fmt.clone(),
        }
    }

    /// Borders of a cell with row, column and table borders folded in.
    pub fn cell_borders(&self, row: usize, col: usize) -> Option<Borders> {
        let mut borders = self.borders.clone();
        if let Some(column) = self.columns.get(col) {
            borders = inherit_nested(&column.borders, &borders);
        }
        if let Some(r) = self.rows.rows.get(row) {
            borders = inherit_nested(&r.borders, &borders);
        }
        if let Some(cell) = self.cell(row, col) {
            borders = inherit_nested(&cell.borders, &borders);
        }
        borders
    }

    /// Shading of a cell with row, column and table shading folded in.
    pub fn cell_shading(&self, row: usize, col: usize) -> Option<Shading> {
        let mut shading = self.shading.clone();
        if let Some(column) = self.columns.get(col) {
            shading = inherit_nested(&column.shading, &shading);
        }
        if let Some(r) = self.rows.rows.get(row) {
            shading = inherit_nested(&r.shading, &shading);
        }
        if let Some(cell) = self.cell(row, col) {
            shading = inherit_nested(&cell.shading, &shading);
        }
        shading
    }

    pub fn cell_vertical_alignment(&self, row: usize, col: usize) -> Option<VerticalAlignment> {
        self.cell(row, col)
            .and_then(|c| c.vertical_alignment)
            .or_else(|| self.rows.rows.get(row).and_then(|r| r.vertical_alignment))
            .or(self.rows.vertical_alignment)
    }

    pub fn cell_left_padding(&self, col: usize) -> Option<Length> {
        self.columns
            .get(col)
            .and_then(|c| c.left_padding)
            .or(self.left_padding)
    }

    pub fn cell_right_padding(&self, col: usize) -> Option<Length> {
        self.columns
            .get(col)
            .and_then(|c| c.right_padding)
            .or(self.right_padding)
    }

    pub fn cell_top_padding(&self, row: usize) -> Option<Length> {
        self.rows
            .rows
            .get(row)
            .and_then(|r| r.top_padding)
            .or(self.top_padding)
    }

    pub fn cell_bottom_padding(&self, row: usize) -> Option<Length> {
        self.rows
            .rows
            .get(row)
            .and_then(|r| r.bottom_padding)
            .or(self.bottom_padding)
    }

    /// Row height and rule, falling back to the shared row geometry.
    pub fn row_height(&self, row: usize) -> (Option<Length>, Option<RowHeightRule>) {
        let r = self.rows.rows.get(row);
        (
            r.and_then(|r| r.height).or(self.rows.height),
            r.and_then(|r| r.height_rule).or(self.rows.height_rule),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::format::{Border, Font};
    use crate::document::types::ParagraphAlignment;

    fn grid() -> Table {
        let mut table = Table::new();
        table.add_column(Length::from_cm(3.0));
        table.add_column(Length::from_cm(4.0));
        table.add_row();
        table.add_row();
        table
    }

    #[test]
    fn test_rows_have_one_cell_per_column() {
        let table = grid();
        assert_eq!(table.row_count(), 2);
        assert!(table.rows.rows.iter().all(|r| r.cells.len() == 2));
    }

    #[test]
    fn test_format_fallback_order() {
        let mut table = grid();
        table.format.alignment = Some(ParagraphAlignment::Right);
        table.format.font = Font::named("Courier New");
        table.columns[1].format.alignment = Some(ParagraphAlignment::Center);
        table.rows.rows[1].format.font.bold = Some(true);

        let f = table.cell_format(1, 1);
        assert_eq!(f.alignment, Some(ParagraphAlignment::Center));
        assert_eq!(f.font.bold, Some(true));
        assert_eq!(f.font.name.as_deref(), Some("Courier New"));
        assert_eq!(table.cell_format(0, 0).alignment, Some(ParagraphAlignment::Right));
    }

    #[test]
    fn test_borders_fallback() {
        let mut table = grid();
        table.borders = Some(Borders::all(Border::single(Length::from_point(0.5))));
        table.cell_mut(0, 0).unwrap().borders = Some(Borders {
            top: Some(Border {
                visible: Some(false),
                ..Border::default()
            }),
            ..Borders::default()
        });
        let b = table.cell_borders(0, 0).unwrap();
        assert!(!b.top.unwrap().is_visible());
        assert!(b.left.unwrap().is_visible());
    }
}
