//! Text frames: text box shapes holding block content.

use super::base::{Container, Scope};
use super::diagnostics::DiagnosticKind;
use super::factory::render_blocks;
use super::paragraph::render_wrapper_paragraph;
use super::session::RenderSession;
use super::shape::{ShapeKind, ShapeSize, render_floating, write_property};
use crate::common::unit::to_emu;
use crate::common::{Length, Result};
use crate::document::TextFrame;

fn frame_size(frame: &TextFrame) -> ShapeSize {
    ShapeSize {
        width: frame.width.unwrap_or_else(|| Length::from_cm(5.0)),
        height: frame.height.unwrap_or_else(|| Length::from_cm(2.5)),
    }
}

fn render_shape(session: &mut RenderSession<'_>, frame: &TextFrame) -> Result<()> {
    render_floating(session, &frame.shape, frame_size(frame), ShapeKind::TextBox, |s| {
        let margins = [
            ("dxTextLeft", frame.margin_left),
            ("dyTextTop", frame.margin_top),
            ("dxTextRight", frame.margin_right),
            ("dyTextBottom", frame.margin_bottom),
        ];
        for (name, margin) in margins {
            if let Some(margin) = margin {
                write_property(s, name, to_emu(margin))?;
            }
        }
        s.writer.start_group()?;
        s.writer.control("shptxt")?;
        render_blocks(s, &frame.elements, Scope::new(Container::TextFrame))?;
        s.writer.end_group()?;
        Ok(())
    })
}

pub(crate) fn render_text_frame(session: &mut RenderSession<'_>, frame: &TextFrame, scope: Scope<'_>) -> Result<()> {
    match scope.container {
        Container::Paragraph => render_shape(session, frame),
        other if other.holds_text_frames() => {
            render_wrapper_paragraph(session, scope, |s| render_shape(s, frame))
        },
        other => {
            session.warn(
                DiagnosticKind::Unsupported,
                format!("text frame inside {:?} skipped", other),
            );
            Ok(())
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Block, Document, Paragraph};
    use crate::rtf::session::capture;

    fn frame() -> TextFrame {
        TextFrame {
            margin_left: Some(Length::from_point(1.0)),
            elements: vec![Block::Paragraph(Paragraph::with_text("boxed"))],
            ..TextFrame::default()
        }
    }

    #[test]
    fn test_text_frame_in_section() {
        let doc = Document::new();
        let frame = frame();
        let (out, report) = capture(&doc, |s| render_text_frame(s, &frame, Scope::new(Container::Section)));
        assert!(report.is_clean());
        assert!(out.starts_with("\\pard\\plain{\\shp{\\*\\shpinst\\shpleft0\\shptop0\\shpright2835\\shpbottom1417"), "{}", out);
        assert!(out.contains("{\\sp{\\sn shapeType}{\\sv 202}}"));
        assert!(out.contains("{\\sp{\\sn dxTextLeft}{\\sv 12700}}{\\shptxt\\pard\\plain\\s0"));
        assert!(out.ends_with(" boxed\\par}}}\\par"));
    }

    #[test]
    fn test_text_frame_in_paragraph_has_no_wrapper() {
        let doc = Document::new();
        let frame = frame();
        let (out, _) = capture(&doc, |s| render_text_frame(s, &frame, Scope::new(Container::Paragraph)));
        assert!(out.starts_with("{\\shp"));
    }

    #[test]
    fn test_text_frame_in_cell_is_skipped() {
        let doc = Document::new();
        let frame = frame();
        let (out, report) = capture(&doc, |s| render_text_frame(s, &frame, Scope::new(Container::Cell)));
        assert_eq!(out, "");
        assert_eq!(report.of_kind(DiagnosticKind::Unsupported).count(), 1);
    }
}
