//! Tables.
//!
//! RTF has no table object: a table is a run of rows, each opened by
//! `\trowd` with the full row geometry (every cell's merge flags, borders,
//! shading and right edge) and followed by the cell contents, each closed by
//! `\cell`. Cells covered by a merge to their left are left out entirely;
//! their width goes to the covering cell.

use super::base::{Container, FormatView, Scope};
use super::border::{BorderTarget, render_borders, render_shading};
use super::diagnostics::DiagnosticKind;
use super::factory::render_blocks;
use super::merged_cell::MergedCells;
use super::paragraph::{render_style_and_format, resolve_format};
use super::session::RenderSession;
use crate::common::unit::to_twips;
use crate::common::{Length, Result};
use crate::document::style::NORMAL;
use crate::document::{RowHeightRule, Table};

/// Width of a column that sets none.
fn default_column_width() -> Length {
    Length::from_cm(2.5)
}

/// Render a table in the given scope.
pub(crate) fn render_table(session: &mut RenderSession<'_>, table: &Table, scope: Scope<'_>) -> Result<()> {
    if !scope.container.holds_tables() {
        session.warn(
            DiagnosticKind::Unsupported,
            format!("table inside {:?} skipped", scope.container),
        );
        return Ok(());
    }
    if table.column_count() == 0 {
        return Ok(());
    }
    log::trace!("table {} x {}", table.row_count(), table.column_count());

    let merged = MergedCells::new(table);
    let edges = right_edges(table);
    for row in 0..table.row_count() {
        render_row_definition(session, table, &merged, &edges, row)?;
        render_row_content(session, table, &merged, row)?;
        session.writer.control("row")?;
        session.line_break()?;
    }
    Ok(())
}

/// `\cellx` position of every column's right edge.
fn right_edges(table: &Table) -> Vec<i32> {
    let mut edge = table.rows.left_indent.unwrap_or(Length::ZERO);
    table
        .columns
        .iter()
        .map(|column| {
            edge = edge + column.width.unwrap_or_else(default_column_width);
            to_twips(edge)
        })
        .collect()
}

fn render_row_definition(
    session: &mut RenderSession<'_>,
    table: &Table,
    merged: &MergedCells,
    edges: &[i32],
    row: usize,
) -> Result<()> {
    let rows = &table.rows;
    session.writer.control("trowd")?;
    session.translate("trleft", rows.left_indent)?;
    session.translate("trq", rows.alignment)?;

    let (height, rule) = table.row_height(row);
    match rule.unwrap_or_default() {
        RowHeightRule::AtLeast => session.translate("trrh", height)?,
        RowHeightRule::Exactly => {
            if let Some(height) = height {
                session.writer.control_value("trrh", -to_twips(height))?;
            }
        },
        RowHeightRule::Auto => session.writer.control_value("trrh", 0)?,
    }

    let current = &rows.rows[row];
    if current.heading_format {
        session.writer.control("trhdr")?;
    }
    let keep = rows.rows[..=row]
        .iter()
        .enumerate()
        .any(|(i, r)| i.saturating_add(r.keep_with) > row);
    if keep {
        session.writer.control("trkeepfollow")?;
    }

    for col in 0..table.column_count() {
        if merged.is_horizontal_dependent(row, col) {
            continue;
        }
        let (first_row, first_col) = merged.covering(row, col);
        let Some(covering) = table.cell(first_row, first_col) else {
            continue;
        };
        if first_row != row {
            session.writer.control("clvmrg")?;
        } else if covering.merge_down > 0 {
            session.writer.control("clvmgf")?;
        }
        session.translate("clvertal", table.cell_vertical_alignment(first_row, first_col))?;
        if let Some(borders) = merged.region_borders(table, first_row, first_col) {
            render_borders(session, &borders, BorderTarget::Cell)?;
        }
        if let Some(shading) = table.cell_shading(first_row, first_col) {
            render_shading(session, &shading, BorderTarget::Cell)?;
        }
        render_padding(session, table, row, col)?;
        let (_, last_col) = merged.region_end(table, first_row, first_col);
        session.writer.control_value("cellx", edges[last_col])?;
    }
    Ok(())
}

/// Cell padding; each value is followed by its unit flag (3 = twips).
fn render_padding(session: &mut RenderSession<'_>, table: &Table, row: usize, col: usize) -> Result<()> {
    let padding = [
        ("clpadl", "clpadfl", table.cell_left_padding(col)),
        ("clpadt", "clpadft", table.cell_top_padding(row)),
        ("clpadr", "clpadfr", table.cell_right_padding(col)),
        ("clpadb", "clpadfb", table.cell_bottom_padding(row)),
    ];
    for (word, unit, value) in padding {
        if let Some(value) = value {
            session.writer.control_value(word, to_twips(value))?;
            session.writer.control_value(unit, 3)?;
        }
    }
    Ok(())
}

fn render_row_content(session: &mut RenderSession<'_>, table: &Table, merged: &MergedCells, row: usize) -> Result<()> {
    for col in 0..table.column_count() {
        if merged.is_horizontal_dependent(row, col) {
            continue;
        }
        if merged.is_vertical_dependent(row, col) {
            session.writer.control("pard")?;
            session.writer.control("intbl")?;
            session.writer.control("cell")?;
            continue;
        }
        let Some(cell) = table.cell(row, col) else {
            continue;
        };
        let style = table.cell_style(row, col);
        let format = table.cell_format(row, col);
        let scope = Scope::new(Container::Cell).with_base(style, Some(&format));
        // a cell whose blocks are all skipped still needs its in-table paragraph
        if !render_blocks(session, &cell.elements, scope)? {
            session.writer.control("pard")?;
            session.writer.control("intbl")?;
            session.writer.control("plain")?;
            let name = style.unwrap_or(NORMAL);
            let effective = resolve_format(session, &format, name, None);
            let opened = render_style_and_format(session, name, FormatView::effective(&format, &effective))?;
            if opened {
                session.writer.end_group()?;
            }
        }
        session.writer.control("cell")?;
    }
    Ok(())
}
