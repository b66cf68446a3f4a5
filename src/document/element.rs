//! Block-level document elements.

use super::paragraph::Paragraph;
use super::shape::{Chart, Image, TextFrame};
use super::table::Table;

/// A block element of a section, header, footer, cell, footnote or text frame.
#[derive(Debug, Clone)]
pub enum Block {
    Paragraph(Paragraph),
    /// Boxed to keep the enum small
    Table(Box<Table>),
    Image(Box<Image>),
    Chart(Box<Chart>),
    TextFrame(Box<TextFrame>),
    PageBreak,
}

impl Block {
    #[inline]
    pub fn is_paragraph(&self) -> bool {
        matches!(self, Block::Paragraph(_))
    }

    #[inline]
    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            Block::Paragraph(p) => Some(p),
            _ => None,
        }
    }

    #[inline]
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Block::Table(t) => Some(t),
            _ => None,
        }
    }
}

impl From<Paragraph> for Block {
    fn from(p: Paragraph) -> Self {
        Block::Paragraph(p)
    }
}

impl From<Table> for Block {
    fn from(t: Table) -> Self {
        Block::Table(Box::new(t))
    }
}

impl From<Image> for Block {
    fn from(i: Image) -> Self {
        Block::Image(Box::new(i))
    }
}

impl From<Chart> for Block {
    fn from(c: Chart) -> Self {
        Block::Chart(Box::new(c))
    }
}

impl From<TextFrame> for Block {
    fn from(t: TextFrame) -> Self {
        Block::TextFrame(Box::new(t))
    }
}
