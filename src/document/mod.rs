//! In-memory document object model.
//!
//! The model is built by the caller and only read by the renderers. Every
//! formatting property is optional; unset properties are resolved through
//! style inheritance (see [`Styles::effective_format`]) and read through the
//! tri-state [`Prop`] accessor.
//!
//! # Example
//!
//! ```rust
//! use rambutan::common::Length;
//! use rambutan::document::{Document, Paragraph, Table};
//!
//! let mut doc = Document::new();
//! let section = doc.add_section();
//! section.add(Paragraph::with_text("Quarterly figures").with_style("Heading1"));
//!
//! let mut table = Table::new();
//! table.add_column(Length::from_cm(4.0));
//! table.add_column(Length::from_cm(4.0));
//! let row = table.add_row();
//! row.cells[0].add(Paragraph::with_text("Q1"));
//! row.cells[1].add(Paragraph::with_text("42"));
//! section.add(table);
//! ```

pub mod doc;
pub mod element;
pub mod field;
pub mod format;
pub mod paragraph;
pub mod prop;
pub mod section;
pub mod shape;
pub mod style;
pub mod table;
pub mod types;
pub mod visit;

pub use doc::{Document, DocumentInfo, EmbeddedFile};
pub use element::Block;
pub use field::{DateField, Field, NumericField, PageRefField};
pub use format::{
    Border, Borders, Font, Inherit, ListInfo, ParagraphFormat, Shading, TabStop, TabStops,
};
pub use paragraph::{Character, Footnote, FormattedText, Hyperlink, Inline, Paragraph};
pub use prop::{Layered, Prop};
pub use section::{HeaderFooter, HeadersFooters, PageSetup, Section};
pub use shape::{
    Chart, FillFormat, Image, ImageSource, LineFormat, PictureFormat, Series, ShapeFormat,
    ShapeOffset, TextFrame, WrapFormat,
};
pub use style::{Style, Styles};
pub use table::{Cell, Column, Row, Rows, Table};
pub use types::*;
pub use visit::{ResourceVisitor, Visit};
