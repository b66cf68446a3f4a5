//! The root renderer.
//!
//! [`RtfRenderer`] checks the document for things RTF cannot represent,
//! collects the font, color and list tables, writes the header and then
//! every section. Each render call works on its own [`RenderSession`], so
//! one renderer can be used any number of times and always produces the same
//! bytes for the same document.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::diagnostics::RenderReport;
use super::info::render_info;
use super::list::render_list_tables;
use super::options::RenderOptions;
use super::resources::Resources;
use super::section::render_section;
use super::session::RenderSession;
use super::style::render_stylesheet;
use super::writer::CODE_PAGE;
use crate::common::{Error, Result};
use crate::document::Document;
use crate::document::style::NORMAL;

/// Renders a [`Document`] as RTF.
///
/// # Examples
///
/// ```rust
/// use rambutan::document::{Document, Paragraph};
/// use rambutan::rtf::RtfRenderer;
///
/// let mut doc = Document::new();
/// doc.add_section().add(Paragraph::with_text("Hello, world"));
///
/// let rtf = RtfRenderer::new(&doc).render_to_string()?;
/// assert!(rtf.starts_with("{\\rtf1\\ansi\\ansicpg1252"));
/// assert!(rtf.contains("Hello, world"));
/// # Ok::<(), rambutan::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct RtfRenderer<'a> {
    document: &'a Document,
    options: RenderOptions,
}

impl<'a> RtfRenderer<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self {
            document,
            options: RenderOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    #[inline]
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Check the document and collect its resource tables.
    ///
    /// Fails before anything is written if the document uses CMYK colors,
    /// carries embedded files or refers to an undefined style.
    fn prepare(&self) -> Result<Resources> {
        let document = self.document;
        if document.use_cmyk_color {
            return Err(Error::UnsupportedColorMode);
        }
        if !document.embedded_files.is_empty() {
            return Err(Error::EmbeddedFilesUnsupported(document.embedded_files.len()));
        }
        let mut resources = Resources::collect(document);
        if !resources.undefined_styles.is_empty() {
            return Err(Error::UndefinedStyle(resources.undefined_styles.swap_remove(0)));
        }
        log::debug!(
            "collected {} fonts, {} colors",
            resources.fonts.len(),
            resources.colors.len()
        );
        Ok(resources)
    }

    /// Write the document to `writer`.
    ///
    /// Problems with single objects (an unreadable image, a chart without a
    /// rasterizer) do not fail the render; they are listed in the returned
    /// report and the object is left out.
    pub fn render<W: Write>(&self, writer: W) -> Result<RenderReport> {
        let resources = self.prepare()?;
        self.render_prepared(resources, writer)
    }

    /// Write the document to a file, replacing it if it exists.
    pub fn render_to_file<P: AsRef<Path>>(&self, path: P) -> Result<RenderReport> {
        // checked before the file is created
        let resources = self.prepare()?;
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        let report = self.render_prepared(resources, &mut writer)?;
        writer.flush()?;
        Ok(report)
    }

    /// Render into a string. RTF output is 7-bit ASCII.
    pub fn render_to_string(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.render(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    fn render_prepared<W: Write>(&self, resources: Resources, mut writer: W) -> Result<RenderReport> {
        let output: &mut dyn Write = &mut writer;
        let mut session = RenderSession::new(self.document, &self.options, output, resources);
        render_document(&mut session)?;
        let report = session.finish()?;
        log::debug!("render finished with {} diagnostics", report.diagnostics.len());
        Ok(report)
    }
}

fn render_document(session: &mut RenderSession<'_>) -> Result<()> {
    let document = session.document;

    session.writer.start_group()?;
    session.writer.control_value("rtf", 1)?;
    session.writer.control("ansi")?;
    session.writer.control_value("ansicpg", CODE_PAGE)?;
    let default_font = document
        .styles
        .effective_font(NORMAL)
        .name
        .map_or(0, |name| session.font_index(&name));
    session.writer.control_value("deff", default_font)?;
    session.line_break()?;

    session.fonts.render(&mut session.writer)?;
    session.line_break()?;
    session.colors.render(&mut session.writer)?;
    session.line_break()?;
    render_stylesheet(session)?;
    render_list_tables(session)?;
    render_info(session)?;

    render_document_flags(session)?;
    session.line_break()?;

    for (index, section) in document.sections.iter().enumerate() {
        render_section(session, section, index)?;
    }
    session.writer.end_group()?;
    Ok(())
}

/// Document-wide settings written once after the header.
fn render_document_flags(session: &mut RenderSession<'_>) -> Result<()> {
    let document = session.document;
    session.writer.control_value("viewkind", 4)?;
    session.writer.control_value("uc", 1)?;
    session.translate("deftab", document.default_tab_stop)?;
    session.translate("ftn", document.footnote_location)?;
    session.translate("ftnn", document.footnote_number_style)?;
    session.translate("ftnstart", document.footnote_starting_number)?;
    // footnotes only, no endnotes
    session.writer.control_value("fet", 0)?;

    let setups: Vec<_> = document
        .sections
        .iter()
        .map(|s| document.effective_page_setup(s))
        .collect();
    if setups.iter().any(|s| s.odd_and_even_pages_header_footer == Some(true)) {
        session.writer.control("facingp")?;
    }
    session.writer.control("htmautsp")?;
    // a single document-wide switch, so only the first section counts
    if setups.first().and_then(|s| s.mirror_margins) == Some(true) {
        session.writer.control("margmirror")?;
    }
    Ok(())
}
