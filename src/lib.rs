//! Rambutan - render document object models to Rich Text Format
//!
//! This library takes an in-memory document (sections, paragraphs, tables,
//! images, charts, text frames, fields, footnotes and styles) and writes it
//! as RTF that word processors open directly.
//!
//! # Features
//!
//! - **Document model**: plain owned structs with optional, inheritable
//!   formatting resolved through named styles
//! - **RTF renderer**: font, color, style and list tables, merged table
//!   cells, floating and inline shapes, fields, footnotes and headers
//! - **Diagnostics**: objects that cannot be rendered (a missing image, a
//!   chart without a rasterizer) are skipped and reported instead of failing
//!   the whole document
//!
//! # Example
//!
//! ```rust
//! use rambutan::common::Length;
//! use rambutan::document::{Document, Paragraph, Table};
//! use rambutan::rtf::RtfRenderer;
//!
//! # fn main() -> Result<(), rambutan::Error> {
//! let mut doc = Document::new();
//! doc.info.title = "Quarterly report".into();
//!
//! let section = doc.add_section();
//! section.add(Paragraph::with_text("Results").with_style("Heading1"));
//!
//! let mut table = Table::new();
//! table.add_column(Length::from_cm(5.0));
//! table.add_column(Length::from_cm(3.0));
//! let row = table.add_row();
//! row.cells[0].add(Paragraph::with_text("Revenue"));
//! row.cells[1].add(Paragraph::with_text("1,024"));
//! section.add(table);
//!
//! let rtf = RtfRenderer::new(&doc).render_to_string()?;
//! assert!(rtf.contains("\\trowd"));
//! # Ok(())
//! # }
//! ```

/// Common types: errors, lengths, colors and unit conversion
pub mod common;

/// The document object model consumed by the renderer
pub mod document;

/// RTF rendering
///
/// See [`rtf::RtfRenderer`] for the entry point.
pub mod rtf;

pub use common::{Error, Result};
