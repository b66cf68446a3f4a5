//! Borders and shading of paragraphs and table cells.
//!
//! Paragraph and cell borders differ only in their control words, so both go
//! through [`render_borders`] with a [`BorderTarget`].

use super::session::RenderSession;
use super::tokens::RtfToken;
use crate::common::{Length, Result};
use crate::document::{Border, Borders, Shading};

/// Default border width when a visible border sets none (0.5pt).
const DEFAULT_BORDER_WIDTH: i32 = 10;

/// What the borders belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BorderTarget {
    Paragraph,
    Cell,
}

impl BorderTarget {
    /// Control words for top, left, bottom and right.
    fn sides(self) -> [&'static str; 4] {
        match self {
            BorderTarget::Paragraph => ["brdrt", "brdrl", "brdrb", "brdrr"],
            BorderTarget::Cell => ["clbrdrt", "clbrdrl", "clbrdrb", "clbrdrr"],
        }
    }
}

/// Write one border edge: side word, line style, width, color and spacing.
pub(crate) fn render_border(
    session: &mut RenderSession<'_>,
    side: &str,
    border: &Border,
    spacing: Option<Length>,
) -> Result<()> {
    session.writer.control(side)?;
    session.writer.control(border.style.unwrap_or_default().rtf_token())?;
    session.translate_or("brdrw", border.width, DEFAULT_BORDER_WIDTH)?;
    session.translate("brdrcf", border.color)?;
    session.translate("brsp", spacing)?;
    Ok(())
}

/// Write the visible edges of `borders`.
pub(crate) fn render_borders(session: &mut RenderSession<'_>, borders: &Borders, target: BorderTarget) -> Result<()> {
    if borders.visible == Some(false) {
        return Ok(());
    }
    let spacing = |distance: Option<Length>| match target {
        BorderTarget::Paragraph => distance,
        BorderTarget::Cell => None,
    };
    let [top, left, bottom, right] = target.sides();
    let edges = [
        (top, &borders.top, spacing(borders.distance_from_top)),
        (left, &borders.left, spacing(borders.distance_from_left)),
        (bottom, &borders.bottom, spacing(borders.distance_from_bottom)),
        (right, &borders.right, spacing(borders.distance_from_right)),
    ];
    for (side, border, distance) in edges {
        if let Some(border) = border.as_ref().filter(|b| b.is_visible()) {
            render_border(session, side, border, distance)?;
        }
    }
    if target == BorderTarget::Cell {
        let diagonals = [("cldglu", &borders.diagonal_up), ("cldgll", &borders.diagonal_down)];
        for (side, border) in diagonals {
            if let Some(border) = border.as_ref().filter(|b| b.is_visible()) {
                render_border(session, side, border, None)?;
            }
        }
    }
    Ok(())
}

/// Write a background color (`\cbpat` for paragraphs, `\clcbpat` for cells).
pub(crate) fn render_shading(session: &mut RenderSession<'_>, shading: &Shading, target: BorderTarget) -> Result<()> {
    if shading.visible == Some(false) {
        return Ok(());
    }
    let word = match target {
        BorderTarget::Paragraph => "cbpat",
        BorderTarget::Cell => "clcbpat",
    };
    session.translate(word, shading.color)
}
