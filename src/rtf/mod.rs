//! RTF rendering.
//!
//! This module turns a [`Document`](crate::document::Document) into Rich Text
//! Format. Rendering is a single depth-first pass over the document tree: a
//! pre-scan collects the font, color and list tables the header needs, then
//! every section is written through a [`RtfWriter`].
//!
//! # Architecture
//!
//! - **Writer**: control words, groups, escaped text and hex data
//! - **Session**: per-render state (writer, resource tables, diagnostics)
//!   threaded by `&mut` through every renderer
//! - **Factory**: exhaustive dispatch from document objects to renderers
//! - **Renderers**: one module per object kind (paragraph, table, field,
//!   picture, section, ...)
//!
//! # Example
//!
//! ```rust
//! use rambutan::document::{Document, Paragraph};
//! use rambutan::rtf::{RenderOptions, RtfRenderer};
//!
//! let mut doc = Document::new();
//! doc.add_section().add(Paragraph::with_text("Hello"));
//!
//! let mut out = Vec::new();
//! let report = RtfRenderer::new(&doc)
//!     .with_options(RenderOptions::new().with_line_breaks(false))
//!     .render(&mut out)?;
//! assert!(report.is_clean());
//! # Ok::<(), rambutan::Error>(())
//! ```

mod base;
mod border;
mod chart;
mod date_format;
mod diagnostics;
mod document;
mod factory;
mod field;
mod font;
mod footnote;
mod info;
mod list;
mod merged_cell;
mod options;
mod paragraph;
mod paragraph_format;
mod picture;
mod resources;
mod section;
mod session;
mod shape;
mod style;
mod table;
mod text;
mod text_frame;
mod tokens;
mod writer;

// Re-exports
pub use date_format::{DatePicture, translate_date_pattern};
pub use diagnostics::{Diagnostic, DiagnosticKind, RenderReport};
pub use document::RtfRenderer;
pub use options::{ChartRasterizer, DateLocale, RenderOptions};
pub use picture::{ImageType, detect_image_type};
pub use resources::{ColorTable, FontTable, ListEntry, ListTable, Resources, font_family};
pub use tokens::{RtfToken, ShapeValue, SymbolMarkup, symbol_markup};
pub use writer::{CODE_PAGE, RtfWriter};
