//! Footnotes.

use super::base::{Container, Scope};
use super::factory::render_blocks;
use super::session::RenderSession;
use crate::common::Result;
use crate::document::Footnote;
use crate::document::style::FOOTNOTE;

/// Reference mark: automatic number (`\chftn`) or the footnote's own mark.
fn render_reference(session: &mut RenderSession<'_>, footnote: &Footnote) -> Result<()> {
    session.writer.start_group()?;
    session.writer.control("super")?;
    match footnote.reference.as_deref() {
        Some(mark) => session.writer.write_text(mark)?,
        None => session.writer.control("chftn")?,
    }
    session.writer.end_group()?;
    Ok(())
}

/// Render the reference mark followed by the `\footnote` destination.
pub(crate) fn render_footnote(session: &mut RenderSession<'_>, footnote: &Footnote, _scope: Scope<'_>) -> Result<()> {
    render_reference(session, footnote)?;

    let style = footnote.style.as_deref().unwrap_or(FOOTNOTE);
    let style_index = session.style_index(style);
    session.writer.start_group()?;
    session.writer.control("footnote")?;
    session.writer.control("pard")?;
    session.writer.control("plain")?;
    session.writer.control_value("s", style_index)?;
    render_reference(session, footnote)?;

    let scope = Scope::new(Container::Footnote).with_base(Some(style), Some(&footnote.format));
    render_blocks(session, &footnote.elements, scope)?;
    session.writer.end_group()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::rtf::session::capture;

    #[test]
    fn test_automatic_footnote() {
        let doc = Document::new();
        let note = Footnote::with_text("See appendix.");
        let footnote_style = doc.styles.index_of(FOOTNOTE).unwrap();
        let (out, _) = capture(&doc, |s| render_footnote(s, &note, Scope::new(Container::Paragraph)));
        let head = format!("{{\\super\\chftn}}{{\\footnote\\pard\\plain\\s{}{{\\super\\chftn}}\\pard", footnote_style);
        assert!(out.starts_with(&head), "{}", out);
        // the last paragraph is closed by the footnote group
        assert!(out.ends_with(" See appendix.}"), "{}", out);
    }

    #[test]
    fn test_custom_reference_mark() {
        let doc = Document::new();
        let note = Footnote {
            reference: Some("*".into()),
            ..Footnote::with_text("x")
        };
        let (out, _) = capture(&doc, |s| render_footnote(s, &note, Scope::new(Container::Paragraph)));
        assert!(out.starts_with("{\\super *}{\\footnote"));
        assert!(!out.contains("chftn"));
    }
}
