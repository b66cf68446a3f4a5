//! Per-render state.
//!
//! A [`RenderSession`] is created for every call to one of the render entry
//! points and threaded by `&mut` through every renderer. It owns the writer,
//! the resource tables built by the pre-scan and the diagnostics collected so
//! far, so nothing is shared between two renders.

use std::io::{self, Write};
use std::rc::Rc;

use super::diagnostics::{Diagnostic, DiagnosticKind, RenderReport};
use super::options::RenderOptions;
use super::resources::{ColorTable, FontTable, ListTable, Resources};
use super::writer::RtfWriter;
use crate::common::Color;
use crate::document::{Document, ListInfo};

pub(crate) struct RenderSession<'a> {
    pub document: &'a Document,
    pub options: &'a RenderOptions,
    pub writer: RtfWriter<&'a mut dyn Write>,
    pub fonts: FontTable,
    pub colors: ColorTable,
    pub lists: ListTable,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> RenderSession<'a> {
    pub fn new(
        document: &'a Document,
        options: &'a RenderOptions,
        output: &'a mut dyn Write,
        resources: Resources,
    ) -> Self {
        Self {
            document,
            options,
            writer: RtfWriter::new(output),
            fonts: resources.fonts,
            colors: resources.colors,
            lists: resources.lists,
            diagnostics: Vec::new(),
        }
    }

    /// Record a recoverable problem.
    pub fn warn(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        let message = message.into();
        log::warn!("{}", message);
        self.diagnostics.push(Diagnostic { kind, message });
    }

    /// Index of a style in the stylesheet.
    ///
    /// # Panics
    ///
    /// Panics on a name the pre-scan did not validate.
    pub fn style_index(&self, name: &str) -> i32 {
        match self.document.styles.index_of(name) {
            Some(i) => i as i32,
            None => panic!("style {:?} missing from the stylesheet", name),
        }
    }

    #[inline]
    pub fn font_index(&self, name: &str) -> i32 {
        self.fonts.index_of(name)
    }

    #[inline]
    pub fn color_index(&self, color: &Color) -> i32 {
        self.colors.index_of(color)
    }

    #[inline]
    pub fn list_index(&self, info: &Rc<ListInfo>) -> i32 {
        self.lists.index_of(info)
    }

    /// Line break for readability, if enabled.
    pub fn line_break(&mut self) -> io::Result<()> {
        if self.options.line_breaks {
            self.writer.newline()?;
        }
        Ok(())
    }

    pub fn finish(mut self) -> io::Result<RenderReport> {
        self.writer.flush()?;
        Ok(RenderReport {
            diagnostics: self.diagnostics,
        })
    }
}

/// Run `f` against a session over an in-memory buffer and return the markup
/// it wrote.
#[cfg(test)]
pub(crate) fn capture(
    document: &Document,
    f: impl FnOnce(&mut RenderSession<'_>) -> crate::common::Result<()>,
) -> (String, RenderReport) {
    capture_with(document, &RenderOptions::new().with_line_breaks(false), f)
}

#[cfg(test)]
pub(crate) fn capture_with(
    document: &Document,
    options: &RenderOptions,
    f: impl FnOnce(&mut RenderSession<'_>) -> crate::common::Result<()>,
) -> (String, RenderReport) {
    let mut output: Vec<u8> = Vec::new();
    let report = {
        let mut session = RenderSession::new(document, options, &mut output, Resources::collect(document));
        f(&mut session).unwrap();
        session.finish().unwrap()
    };
    (String::from_utf8(output).unwrap(), report)
}
