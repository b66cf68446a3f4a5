//! Dispatch from document objects to their renderers.
//!
//! Every block and inline element of the model maps to exactly one
//! [`DocumentObject`] case, and [`render`] matches on it exhaustively, so a
//! new element kind cannot be added without a renderer.

use super::base::{Container, Scope};
use super::session::RenderSession;
use super::{chart, field, footnote, paragraph, picture, table, text, text_frame};
use crate::common::Result;
use crate::document::{
    Block, Chart, Character, Field, Footnote, FormattedText, Hyperlink, Image, Inline, Paragraph,
    Table, TextFrame,
};

/// A renderable element of the document tree.
#[derive(Debug, Clone, Copy)]
pub(crate) enum DocumentObject<'a> {
    Paragraph(&'a Paragraph),
    Table(&'a Table),
    Image(&'a Image),
    Chart(&'a Chart),
    TextFrame(&'a TextFrame),
    PageBreak,
    Text(&'a str),
    Character(&'a Character),
    FormattedText(&'a FormattedText),
    Hyperlink(&'a Hyperlink),
    Footnote(&'a Footnote),
    Field(&'a Field),
}

impl<'a> From<&'a Block> for DocumentObject<'a> {
    fn from(block: &'a Block) -> Self {
        match block {
            Block::Paragraph(p) => DocumentObject::Paragraph(p),
            Block::Table(t) => DocumentObject::Table(t),
            Block::Image(i) => DocumentObject::Image(i),
            Block::Chart(c) => DocumentObject::Chart(c),
            Block::TextFrame(t) => DocumentObject::TextFrame(t),
            Block::PageBreak => DocumentObject::PageBreak,
        }
    }
}

impl<'a> From<&'a Inline> for DocumentObject<'a> {
    fn from(inline: &'a Inline) -> Self {
        match inline {
            Inline::Text(t) => DocumentObject::Text(t),
            Inline::Character(c) => DocumentObject::Character(c),
            Inline::FormattedText(f) => DocumentObject::FormattedText(f),
            Inline::Field(f) => DocumentObject::Field(f),
            Inline::Hyperlink(h) => DocumentObject::Hyperlink(h),
            Inline::Footnote(f) => DocumentObject::Footnote(f),
            Inline::Image(i) => DocumentObject::Image(i),
            Inline::Chart(c) => DocumentObject::Chart(c),
            Inline::TextFrame(t) => DocumentObject::TextFrame(t),
        }
    }
}

/// Render one object in the given scope.
pub(crate) fn render(session: &mut RenderSession<'_>, object: DocumentObject<'_>, scope: Scope<'_>) -> Result<()> {
    match object {
        DocumentObject::Paragraph(p) => paragraph::render_paragraph(session, p, scope),
        DocumentObject::Table(t) => table::render_table(session, t, scope),
        DocumentObject::Image(i) => picture::render_image(session, i, scope),
        DocumentObject::Chart(c) => chart::render_chart(session, c, scope),
        DocumentObject::TextFrame(t) => text_frame::render_text_frame(session, t, scope),
        DocumentObject::PageBreak => paragraph::render_page_break(session, scope),
        DocumentObject::Text(t) => {
            session.writer.write_text(t)?;
            Ok(())
        },
        DocumentObject::Character(c) => text::render_character(session, c),
        DocumentObject::FormattedText(f) => text::render_formatted_text(session, f, scope),
        DocumentObject::Hyperlink(h) => text::render_hyperlink(session, h, scope),
        DocumentObject::Footnote(f) => footnote::render_footnote(session, f, scope),
        DocumentObject::Field(f) => field::render_field(session, f),
    }
}

/// Whether `block` writes anything in `container`. Blocks the container
/// cannot hold are only reported.
fn produces_output(session: &RenderSession<'_>, block: &Block, container: Container) -> bool {
    match block {
        Block::Paragraph(_) | Block::Image(_) => true,
        Block::Table(t) => container.holds_tables() && t.column_count() > 0,
        Block::TextFrame(_) => container.holds_text_frames(),
        Block::PageBreak => container.holds_page_breaks(),
        Block::Chart(_) => session.options.chart_rasterizer.is_some(),
    }
}

/// Render the blocks of a container. The last block that writes output is
/// rendered as the container's last element; returns whether there was one.
pub(crate) fn render_blocks(session: &mut RenderSession<'_>, blocks: &[Block], scope: Scope<'_>) -> Result<bool> {
    let last = blocks
        .iter()
        .rposition(|block| produces_output(session, block, scope.container));
    for (i, block) in blocks.iter().enumerate() {
        render(session, block.into(), scope.last(Some(i) == last))?;
    }
    Ok(last.is_some())
}

/// Render inline content of a paragraph or inline container.
pub(crate) fn render_inlines(session: &mut RenderSession<'_>, inlines: &[Inline], scope: Scope<'_>) -> Result<()> {
    let count = inlines.len();
    for (i, inline) in inlines.iter().enumerate() {
        render(session, inline.into(), scope.last(i + 1 == count))?;
    }
    Ok(())
}
