//! Character formatting.

use super::base::FormatView;
use super::session::RenderSession;
use crate::common::Result;
use crate::common::unit::RtfUnit;
use crate::document::Font;

/// Write the character properties of `font`.
pub(crate) fn render_font(session: &mut RenderSession<'_>, font: FormatView<'_, Font>) -> Result<()> {
    if let Some(name) = font.value(|f| f.name.as_deref()) {
        let index = session.font_index(name);
        session.writer.control_value("f", index)?;
    }
    session.translate_in("fs", font.value(|f| f.size), RtfUnit::HalfPoints)?;
    session.translate_bool(font.value(|f| f.bold), "b", "b0")?;
    session.translate_bool(font.value(|f| f.italic), "i", "i0")?;
    session.translate("ul", font.value(|f| f.underline))?;
    session.translate("cf", font.value(|f| f.color))?;
    session.translate("super", font.value(|f| f.superscript))?;
    session.translate("sub", font.value(|f| f.subscript))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{Color, Length};
    use crate::document::{Document, Underline};
    use crate::rtf::session::capture;

    #[test]
    fn test_explicit_font() {
        let mut doc = Document::new();
        doc.styles.get_mut("Normal").unwrap().font_mut().color = Some(Color::rgb(200, 0, 0));
        let font = Font {
            name: Some("Arial".into()),
            size: Some(Length::from_point(11.0)),
            bold: Some(true),
            italic: Some(false),
            underline: Some(Underline::Double),
            color: Some(Color::rgb(200, 0, 0)),
            ..Font::default()
        };
        let (out, _) = capture(&doc, |s| render_font(s, FormatView::raw(&font)));
        assert_eq!(out, "\\f3\\fs22\\b\\i0\\uldb\\cf1");
    }

    #[test]
    fn test_inherited_values_need_effective_view() {
        let doc = Document::new();
        let local = Font::default();
        let effective = Font {
            bold: Some(true),
            ..Font::default()
        };
        let (raw, _) = capture(&doc, |s| render_font(s, FormatView::raw(&local)));
        assert_eq!(raw, "");
        let (resolved, _) = capture(&doc, |s| render_font(s, FormatView::effective(&local, &effective)));
        assert_eq!(resolved, "\\b");
    }
}
