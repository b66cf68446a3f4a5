//! Paragraphs and their inline content.

use super::element::Block;
use super::field::Field;
use super::format::{Font, ParagraphFormat};
use super::shape::{Chart, Image, TextFrame};
use super::types::{HyperlinkType, SymbolName};

/// A paragraph with ordered inline content.
#[derive(Debug, Clone, Default)]
pub struct Paragraph {
    pub style: Option<String>,
    pub format: ParagraphFormat,
    pub elements: Vec<Inline>,
}

impl Paragraph {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Paragraph holding a single text run.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut p = Self::new();
        p.add_text(text);
        p
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn add_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.elements.push(Inline::Text(text.into()));
        self
    }

    pub fn add_character(&mut self, symbol: SymbolName) -> &mut Self {
        self.elements.push(Inline::Character(Character { symbol, count: 1 }));
        self
    }

    pub fn add_line_break(&mut self) -> &mut Self {
        self.add_character(SymbolName::LineBreak)
    }

    pub fn add(&mut self, inline: Inline) -> &mut Self {
        self.elements.push(inline);
        self
    }

    /// Concatenated plain text of the text runs.
    pub fn text(&self) -> String {
        let mut out = String::new();
        collect_text(&self.elements, &mut out);
        out
    }
}

fn collect_text(elements: &[Inline], out: &mut String) {
    for element in elements {
        match element {
            Inline::Text(t) => out.push_str(t),
            Inline::FormattedText(f) => collect_text(&f.elements, out),
            Inline::Hyperlink(h) => collect_text(&h.elements, out),
            _ => {},
        }
    }
}

/// Inline content of a paragraph.
#[derive(Debug, Clone)]
pub enum Inline {
    Text(String),
    Character(Character),
    FormattedText(FormattedText),
    Field(Field),
    Hyperlink(Hyperlink),
    Footnote(Footnote),
    Image(Box<Image>),
    Chart(Box<Chart>),
    TextFrame(Box<TextFrame>),
}

/// A repeated special character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Character {
    pub symbol: SymbolName,
    pub count: usize,
}

/// Inline run with its own character style and format.
#[derive(Debug, Clone, Default)]
pub struct FormattedText {
    pub style: Option<String>,
    pub font: Font,
    pub elements: Vec<Inline>,
}

impl FormattedText {
    pub fn new(font: Font, text: impl Into<String>) -> Self {
        Self {
            style: None,
            font,
            elements: vec![Inline::Text(text.into())],
        }
    }
}

/// A link to a bookmark, URL or file.
#[derive(Debug, Clone, Default)]
pub struct Hyperlink {
    /// Bookmark name, URL or path depending on `link_type`
    pub name: String,
    pub link_type: HyperlinkType,
    pub font: Font,
    pub elements: Vec<Inline>,
}

/// A footnote anchored at its position in the paragraph.
#[derive(Debug, Clone, Default)]
pub struct Footnote {
    /// Custom reference mark; automatic numbering when `None`
    pub reference: Option<String>,
    pub style: Option<String>,
    pub format: ParagraphFormat,
    pub elements: Vec<Block>,
}

impl Footnote {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            elements: vec![Block::Paragraph(Paragraph::with_text(text))],
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_collects_nested_runs() {
        let mut p = Paragraph::with_text("Hello ");
        p.add(Inline::FormattedText(FormattedText::new(Font::default(), "bold")));
        p.add_line_break();
        p.add(Inline::Hyperlink(Hyperlink {
            name: "https://example.com".into(),
            elements: vec![Inline::Text("!".into())],
            ..Hyperlink::default()
        }));
        assert_eq!(p.text(), "Hello bold!");
    }
}
