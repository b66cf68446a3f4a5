//! The document root.

use super::section::{PageSetup, Section};
use super::style::Styles;
use super::types::{FootnoteLocation, FootnoteNumberStyle};
use crate::common::Length;

/// Summary information written to the document's info block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentInfo {
    pub title: String,
    pub author: String,
    pub subject: String,
    pub keywords: String,
}

impl DocumentInfo {
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.author.is_empty()
            && self.subject.is_empty()
            && self.keywords.is_empty()
    }
}

/// A file attached to the document. Not representable in RTF.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddedFile {
    pub name: String,
    pub data: Vec<u8>,
}

/// An in-memory document ready to be rendered.
///
/// # Examples
///
/// ```rust
/// use rambutan::document::{Document, Paragraph};
///
/// let mut doc = Document::new();
/// doc.add_section().add(Paragraph::with_text("Hello"));
/// assert_eq!(doc.sections.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Document {
    pub info: DocumentInfo,
    pub styles: Styles,
    pub sections: Vec<Section>,
    pub default_page_setup: PageSetup,
    pub default_tab_stop: Option<Length>,
    pub footnote_location: Option<FootnoteLocation>,
    pub footnote_number_style: Option<FootnoteNumberStyle>,
    pub footnote_starting_number: Option<i32>,
    pub use_cmyk_color: bool,
    pub embedded_files: Vec<EmbeddedFile>,
}

impl Document {
    pub fn new() -> Self {
        Self {
            info: DocumentInfo::default(),
            styles: Styles::new(),
            sections: Vec::new(),
            default_page_setup: PageSetup::a4(),
            default_tab_stop: None,
            footnote_location: None,
            footnote_number_style: None,
            footnote_starting_number: None,
            use_cmyk_color: false,
            embedded_files: Vec::new(),
        }
    }

    pub fn add_section(&mut self) -> &mut Section {
        self.sections.push(Section::new());
        self.sections.last_mut().expect("section was just pushed")
    }

    /// Page setup of a section with document defaults applied.
    pub fn effective_page_setup(&self, section: &Section) -> PageSetup {
        section.page_setup.inherit_from(&self.default_page_setup)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
