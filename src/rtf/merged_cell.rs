//! Covering-cell geometry of merged table regions.
//!
//! A merged region is declared on its top-left cell through `merge_right`
//! and `merge_down`. Every grid position maps to the cell covering it; only
//! covering cells carry content, and the region's outer borders come from
//! the cells along its right and bottom edges.

use crate::document::{Borders, Table};

#[derive(Debug)]
pub(crate) struct MergedCells {
    rows: usize,
    columns: usize,
    /// Covering cell of every grid position, row-major
    covering: Vec<(usize, usize)>,
}

impl MergedCells {
    pub fn new(table: &Table) -> Self {
        let rows = table.row_count();
        let columns = table.column_count();
        let mut covering: Vec<Option<(usize, usize)>> = vec![None; rows * columns];
        for row in 0..rows {
            for col in 0..columns {
                if covering[row * columns + col].is_some() {
                    continue;
                }
                let (down, right) = table
                    .cell(row, col)
                    .map_or((0, 0), |c| (c.merge_down, c.merge_right));
                let last_row = row.saturating_add(down).min(rows - 1);
                let last_col = col.saturating_add(right).min(columns - 1);
                for r in row..=last_row {
                    for c in col..=last_col {
                        covering[r * columns + c].get_or_insert((row, col));
                    }
                }
            }
        }
        Self {
            rows,
            columns,
            covering: covering
                .into_iter()
                .enumerate()
                .map(|(i, c)| c.unwrap_or((i / columns.max(1), i % columns.max(1))))
                .collect(),
        }
    }

    /// The cell whose region contains `(row, col)`.
    #[inline]
    pub fn covering(&self, row: usize, col: usize) -> (usize, usize) {
        self.covering[row * self.columns + col]
    }

    /// Whether `(row, col)` is covered by a cell further left in its row.
    #[inline]
    pub fn is_horizontal_dependent(&self, row: usize, col: usize) -> bool {
        self.covering(row, col).1 != col
    }

    /// Whether `(row, col)` continues a region started in an earlier row.
    #[inline]
    pub fn is_vertical_dependent(&self, row: usize, col: usize) -> bool {
        self.covering(row, col).0 != row
    }

    /// Bottom-right grid position of the region started at `(row, col)`.
    pub fn region_end(&self, table: &Table, row: usize, col: usize) -> (usize, usize) {
        let (down, right) = table
            .cell(row, col)
            .map_or((0, 0), |c| (c.merge_down, c.merge_right));
        (
            row.saturating_add(down).min(self.rows.saturating_sub(1)),
            col.saturating_add(right).min(self.columns.saturating_sub(1)),
        )
    }

    /// Borders of the region started at `(row, col)`: the covering cell's,
    /// with the right edge from its rightmost cell and the bottom edge from
    /// its bottom row.
    pub fn region_borders(&self, table: &Table, row: usize, col: usize) -> Option<Borders> {
        let mut borders = table.cell_borders(row, col);
        let (last_row, last_col) = self.region_end(table, row, col);
        if last_col != col {
            let right = table.cell_borders(row, last_col).and_then(|b| b.right);
            borders.get_or_insert_with(Borders::default).right = right;
        }
        if last_row != row {
            let bottom = table.cell_borders(last_row, col).and_then(|b| b.bottom);
            borders.get_or_insert_with(Borders::default).bottom = bottom;
        }
        borders
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Length;
    use crate::document::Border;

    fn grid(rows: usize, columns: usize) -> Table {
        let mut table = Table::new();
        for _ in 0..columns {
            table.add_column(Length::from_cm(2.0));
        }
        for _ in 0..rows {
            table.add_row();
        }
        table
    }

    #[test]
    fn test_covering_cells() {
        let mut table = grid(3, 3);
        let cell = table.cell_mut(0, 0).unwrap();
        cell.merge_right = 1;
        cell.merge_down = 1;
        let merged = MergedCells::new(&table);
        assert_eq!(merged.covering(1, 1), (0, 0));
        assert_eq!(merged.covering(0, 2), (0, 2));
        assert!(merged.is_horizontal_dependent(0, 1));
        assert!(merged.is_vertical_dependent(1, 0));
        assert!(!merged.is_horizontal_dependent(1, 0));
        assert_eq!(merged.region_end(&table, 0, 0), (1, 1));
    }

    #[test]
    fn test_merge_clamped_to_grid() {
        let mut table = grid(2, 2);
        table.cell_mut(1, 1).unwrap().merge_right = 5;
        table.cell_mut(1, 1).unwrap().merge_down = 5;
        let merged = MergedCells::new(&table);
        assert_eq!(merged.region_end(&table, 1, 1), (1, 1));
        assert_eq!(merged.covering(1, 1), (1, 1));
    }

    #[test]
    fn test_oversized_merge_saturates() {
        let mut table = grid(2, 2);
        table.cell_mut(0, 1).unwrap().merge_right = usize::MAX;
        table.cell_mut(0, 1).unwrap().merge_down = usize::MAX;
        let merged = MergedCells::new(&table);
        assert_eq!(merged.region_end(&table, 0, 1), (1, 1));
        assert_eq!(merged.covering(1, 1), (0, 1));
        assert_eq!(merged.covering(1, 0), (1, 0));
    }

    #[test]
    fn test_region_borders_from_edges() {
        let mut table = grid(2, 2);
        table.cell_mut(0, 0).unwrap().merge_right = 1;
        table.cell_mut(0, 1).unwrap().borders = Some(Borders {
            right: Some(Border::single(Length::from_point(3.0))),
            ..Borders::default()
        });
        let merged = MergedCells::new(&table);
        let borders = merged.region_borders(&table, 0, 0).unwrap();
        assert_eq!(borders.right.and_then(|b| b.width), Some(Length::from_point(3.0)));
        assert!(borders.left.is_none());
    }
}
