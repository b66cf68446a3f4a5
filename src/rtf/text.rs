//! Inline runs: special characters, formatted text and hyperlinks.

use super::base::{FormatView, Scope};
use super::factory::render_inlines;
use super::field::write_field;
use super::font::render_font;
use super::session::RenderSession;
use super::tokens::{SymbolMarkup, symbol_markup};
use crate::common::Result;
use crate::document::{Character, FormattedText, Hyperlink, HyperlinkType, StyleType};

/// Render a special character `count` times.
pub(crate) fn render_character(session: &mut RenderSession<'_>, character: &Character) -> Result<()> {
    let markup = symbol_markup(character.symbol);
    for _ in 0..character.count {
        match markup {
            SymbolMarkup::Control(word) => session.writer.control(word)?,
            SymbolMarkup::Unpadded(symbol) => session.writer.control_unpadded(symbol)?,
            SymbolMarkup::Text(text) => session.writer.write_text(text)?,
        }
    }
    Ok(())
}

/// Render formatted text as a group: the style's font, then the run's own font.
pub(crate) fn render_formatted_text(
    session: &mut RenderSession<'_>,
    text: &FormattedText,
    scope: Scope<'_>,
) -> Result<()> {
    session.writer.start_group()?;
    if let Some(style) = text.style.as_deref() {
        let document = session.document;
        if document
            .styles
            .get(style)
            .is_some_and(|s| s.style_type == StyleType::Character)
        {
            let index = session.style_index(style);
            session.writer.control_value("cs", index)?;
        }
        let font = document.styles.effective_font(style);
        render_font(session, FormatView::raw(&font))?;
    }
    render_font(session, FormatView::raw(&text.font))?;
    render_inlines(session, &text.elements, scope.inline())?;
    session.writer.end_group()?;
    Ok(())
}

/// Field instruction of a hyperlink.
fn hyperlink_instruction(link: &Hyperlink) -> String {
    match link.link_type {
        HyperlinkType::Local => format!("HYPERLINK \\l \"{}\"", link.name),
        HyperlinkType::Web | HyperlinkType::File => format!("HYPERLINK \"{}\"", link.name),
    }
}

/// Render a hyperlink as a `HYPERLINK` field whose result is the link text.
pub(crate) fn render_hyperlink(session: &mut RenderSession<'_>, link: &Hyperlink, scope: Scope<'_>) -> Result<()> {
    write_field(session, &hyperlink_instruction(link), |session| {
        session.writer.start_group()?;
        render_font(session, FormatView::raw(&link.font))?;
        render_inlines(session, &link.elements, scope.inline())?;
        session.writer.end_group()?;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Document, Font, Inline, SymbolName};
    use crate::rtf::base::Container;
    use crate::rtf::session::capture;

    #[test]
    fn test_characters() {
        let doc = Document::new();
        let render = |symbol, count| {
            capture(&doc, |s| {
                s.writer.write_text("a")?;
                render_character(s, &Character { symbol, count })?;
                s.writer.write_text("b")?;
                Ok(())
            })
            .0
        };
        assert_eq!(render(SymbolName::NonBreakableBlank, 1), "a\\~b");
        assert_eq!(render(SymbolName::Tab, 2), "a\\tab\\tab b");
        assert_eq!(render(SymbolName::Copyright, 1), "a\\'a9b");
        assert_eq!(render(SymbolName::Blank, 3), "a   b");
    }

    #[test]
    fn test_formatted_text_group() {
        let doc = Document::new();
        let text = FormattedText::new(
            Font {
                bold: Some(true),
                ..Font::default()
            },
            "strong",
        );
        let (out, _) = capture(&doc, |s| render_formatted_text(s, &text, Scope::new(Container::Paragraph)));
        assert_eq!(out, "{\\b strong}");
    }

    #[test]
    fn test_local_hyperlink() {
        let doc = Document::new();
        let link = Hyperlink {
            name: "intro".into(),
            link_type: HyperlinkType::Local,
            font: Font::default(),
            elements: vec![Inline::Text("see intro".into())],
        };
        let (out, _) = capture(&doc, |s| render_hyperlink(s, &link, Scope::new(Container::Paragraph)));
        assert_eq!(
            out,
            "{\\field{\\*\\fldinst HYPERLINK \\\\l \"intro\"}{\\fldrslt{see intro}}}"
        );
    }
}
