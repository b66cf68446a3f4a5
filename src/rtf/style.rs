//! The stylesheet.
//!
//! Every style gets the index of its position in the document's style
//! collection. Paragraph styles carry their own (raw) paragraph format;
//! character styles only their font and are marked `\additive`.

use super::base::FormatView;
use super::font::render_font;
use super::paragraph_format::render_paragraph_format;
use super::session::RenderSession;
use crate::common::Result;
use crate::document::{Style, StyleType};

pub(crate) fn render_stylesheet(session: &mut RenderSession<'_>) -> Result<()> {
    let document = session.document;
    session.writer.start_group()?;
    session.writer.control("stylesheet")?;
    for (index, style) in document.styles.iter().enumerate() {
        render_style(session, style, index as i32)?;
    }
    session.writer.end_group()?;
    session.line_break()?;
    Ok(())
}

fn render_style(session: &mut RenderSession<'_>, style: &Style, index: i32) -> Result<()> {
    session.writer.start_group()?;
    match style.style_type {
        StyleType::Paragraph => session.writer.control_value("s", index)?,
        StyleType::Character => {
            session.writer.control_star("cs", Some(index))?;
            session.writer.control("additive")?;
        },
    }
    if let Some(base) = &style.base_style {
        let base = session.style_index(base);
        session.writer.control_value("sbasedon", base)?;
    }
    match style.style_type {
        StyleType::Paragraph => render_paragraph_format(session, FormatView::raw(&style.paragraph_format))?,
        StyleType::Character => render_font(session, FormatView::raw(style.font()))?,
    }
    session.writer.write_text(&style.name)?;
    session.writer.write_separator()?;
    session.writer.end_group()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::document::style::{DEFAULT_PARAGRAPH_FONT, HEADING1, NORMAL};
    use crate::rtf::session::capture;

    #[test]
    fn test_stylesheet_entries() {
        let doc = Document::new();
        let (out, _) = capture(&doc, render_stylesheet);
        assert!(out.starts_with("{\\stylesheet{\\s0\\widctlpar\\f3\\fs20\\b0\\i0 Normal;}"), "{}", out);
        let dpf = doc.styles.index_of(DEFAULT_PARAGRAPH_FONT).unwrap();
        assert!(out.contains(&format!("{{\\*\\cs{}\\additive DefaultParagraphFont;}}", dpf)));
        let h1 = doc.styles.index_of(HEADING1).unwrap();
        let normal = doc.styles.index_of(NORMAL).unwrap();
        assert!(out.contains(&format!("{{\\s{}\\sbasedon{}\\sb240\\sa120\\keepn", h1, normal)), "{}", out);
        assert!(out.ends_with(" Footnote;}}"));
    }

    #[test]
    fn test_style_names_are_escaped() {
        let mut doc = Document::new();
        doc.styles.add(Style::paragraph("Odd {name}", Some(NORMAL)));
        let (out, _) = capture(&doc, render_stylesheet);
        assert!(out.contains(" Odd \\{name\\};}"));
    }
}
