//! Paragraphs and the style-and-format composite shared with table cells.

use super::base::{FormatView, Scope};
use super::diagnostics::DiagnosticKind;
use super::factory::{self, DocumentObject};
use super::font::render_font;
use super::paragraph_format::render_paragraph_format;
use super::session::RenderSession;
use crate::common::Result;
use crate::document::style::NORMAL;
use crate::document::{Inherit, Inline, Paragraph, ParagraphFormat, StyleType, SymbolName};

/// Effective format of a paragraph-like object: its own format over the
/// container's format over its style.
pub(crate) fn resolve_format(
    session: &RenderSession<'_>,
    local: &ParagraphFormat,
    style: &str,
    container: Option<&ParagraphFormat>,
) -> ParagraphFormat {
    let styles = &session.document.styles;
    let mut from_style = styles.effective_format(style);
    if styles.get(style).is_some_and(|s| s.style_type == StyleType::Character) {
        // character styles sit on top of Normal
        from_style = from_style.inherit_from(&styles.effective_format(NORMAL));
    }
    match container {
        Some(base) => local.inherit_from(&base.inherit_from(&from_style)),
        None => local.inherit_from(&from_style),
    }
}

/// Write the style reference and the effective format.
///
/// RTF only has paragraph styles in the `\s` slot, so a character style is
/// replaced by `Normal` and applied through a `\cs` group opened after the
/// format. Returns whether that group was opened; the caller closes it after
/// the content.
pub(crate) fn render_style_and_format(
    session: &mut RenderSession<'_>,
    style: &str,
    view: FormatView<'_, ParagraphFormat>,
) -> Result<bool> {
    let document = session.document;
    let is_character = document
        .styles
        .get(style)
        .is_some_and(|s| s.style_type == StyleType::Character);

    let paragraph_style = session.style_index(if is_character { NORMAL } else { style });
    session.writer.control_value("s", paragraph_style)?;
    render_paragraph_format(session, view)?;

    if !is_character {
        return Ok(false);
    }
    let character_style = session.style_index(style);
    session.writer.start_group()?;
    session.writer.control_value("cs", character_style)?;
    let font = document.styles.effective_font(style);
    render_font(session, FormatView::raw(&font))?;
    Ok(true)
}

fn is_line_break(inline: &Inline) -> bool {
    matches!(inline, Inline::Character(c) if c.symbol == SymbolName::LineBreak)
}

/// Render a paragraph.
pub(crate) fn render_paragraph(session: &mut RenderSession<'_>, paragraph: &Paragraph, scope: Scope<'_>) -> Result<()> {
    session.writer.control("pard")?;
    if scope.in_cell() {
        session.writer.control("intbl")?;
    }
    session.writer.control("plain")?;

    let style = paragraph.style.as_deref().or(scope.base_style).unwrap_or(NORMAL);
    let effective = resolve_format(session, &paragraph.format, style, scope.base_format);
    let opened = render_style_and_format(session, style, FormatView::effective(&paragraph.format, &effective))?;

    let elements = &paragraph.elements;
    // a trailing line break duplicates the paragraph mark
    let count = match elements.last() {
        Some(last) if is_line_break(last) => elements.len() - 1,
        _ => elements.len(),
    };
    let inline = scope.inline();
    for (i, element) in elements[..count].iter().enumerate() {
        factory::render(session, DocumentObject::from(element), inline.last(i + 1 == count))?;
    }

    if opened {
        session.writer.end_group()?;
    }
    if scope.closes_paragraph() {
        session.writer.control("par")?;
        session.line_break()?;
    }
    Ok(())
}

/// Host a non-paragraph object (a shape placed directly in a section, header
/// or cell) in a paragraph of its own.
pub(crate) fn render_wrapper_paragraph(
    session: &mut RenderSession<'_>,
    scope: Scope<'_>,
    body: impl FnOnce(&mut RenderSession<'_>) -> Result<()>,
) -> Result<()> {
    session.writer.control("pard")?;
    if scope.in_cell() {
        session.writer.control("intbl")?;
    }
    session.writer.control("plain")?;
    body(session)?;
    if scope.closes_paragraph() {
        session.writer.control("par")?;
        session.line_break()?;
    }
    Ok(())
}

/// Render a hard page break.
pub(crate) fn render_page_break(session: &mut RenderSession<'_>, scope: Scope<'_>) -> Result<()> {
    if !scope.container.holds_page_breaks() {
        session.warn(
            DiagnosticKind::Unsupported,
            format!("page break inside {:?} skipped", scope.container),
        );
        return Ok(());
    }
    session.writer.control("page")?;
    session.line_break()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Document, Font, Style};
    use crate::rtf::base::Container;
    use crate::rtf::session::capture;

    #[test]
    fn test_plain_paragraph() {
        let doc = Document::new();
        let p = Paragraph::with_text("Hello");
        let (out, _) = capture(&doc, |s| render_paragraph(s, &p, Scope::new(Container::Section)));
        assert_eq!(out, "\\pard\\plain\\s0\\widctlpar\\f3\\fs20\\b0\\i0 Hello\\par");
    }

    #[test]
    fn test_trailing_line_break_suppressed() {
        let doc = Document::new();
        let mut p = Paragraph::with_text("a");
        p.add_line_break();
        p.add_text("b");
        p.add_line_break();
        let (out, _) = capture(&doc, |s| render_paragraph(s, &p, Scope::new(Container::Section)));
        assert!(out.ends_with(" a\\line b\\par"), "{}", out);
    }

    #[test]
    fn test_last_paragraph_in_cell_has_no_par() {
        let doc = Document::new();
        let p = Paragraph::with_text("x");
        let scope = Scope::new(Container::Cell).last(true);
        let (out, _) = capture(&doc, |s| render_paragraph(s, &p, scope));
        assert!(out.starts_with("\\pard\\intbl\\plain"));
        assert!(!out.contains("\\par "));
        assert!(out.ends_with(" x"));
    }

    #[test]
    fn test_character_style_on_paragraph() {
        let mut doc = Document::new();
        let mut emphasis = Style::character("Emphasis", None);
        emphasis.paragraph_format.font = Font {
            italic: Some(true),
            ..Font::default()
        };
        doc.styles.add(emphasis);
        let p = Paragraph::with_text("x").with_style("Emphasis");
        let (out, _) = capture(&doc, |s| render_paragraph(s, &p, Scope::new(Container::Section)));
        let index = doc.styles.index_of("Emphasis").unwrap();
        assert!(out.starts_with("\\pard\\plain\\s0"));
        assert!(out.contains(&format!("{{\\cs{}\\i x}}\\par", index)), "{}", out);
    }

    #[test]
    fn test_page_break_in_cell_is_reported() {
        let doc = Document::new();
        let (out, report) = capture(&doc, |s| render_page_break(s, Scope::new(Container::Cell)));
        assert_eq!(out, "");
        assert_eq!(report.diagnostics.len(), 1);
    }
}
