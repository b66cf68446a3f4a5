//! Shape geometry shared by images, charts and text frames.
//!
//! A shape inside a paragraph flows with the text. Anywhere else it floats
//! and is anchored to a wrapper paragraph with a `\shp` group carrying its
//! position, wrapping, outline and fill as `{\sp{\sn name}{\sv value}}`
//! properties.

use super::base::{Container, Scope};
use super::session::RenderSession;
use super::tokens::{RtfToken, ShapeValue};
use crate::common::unit::{to_emu, to_twips};
use crate::common::{Color, Length, Result};
use crate::document::{LineFormat, ShapeFormat, ShapeOffset, WrapFormat};

/// `shapeType` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ShapeKind {
    PictureFrame,
    TextBox,
}

impl ShapeKind {
    fn code(self) -> i32 {
        match self {
            ShapeKind::PictureFrame => 75,
            ShapeKind::TextBox => 202,
        }
    }
}

/// How a shape is placed in its scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Placement {
    /// Inside a paragraph: flows with the text
    Inline,
    /// Directly in a container that cannot anchor floating shapes: inline,
    /// hosted by a paragraph of its own
    InlineWrapped,
    /// Directly in a section, header or footer: floating, anchored to a
    /// paragraph of its own
    Floating,
}

pub(crate) fn placement(scope: &Scope<'_>) -> Placement {
    match scope.container {
        Container::Paragraph => Placement::Inline,
        Container::Section | Container::HeaderFooter => Placement::Floating,
        Container::Cell | Container::Footnote | Container::TextFrame => Placement::InlineWrapped,
    }
}

/// Whether the format asks for free positioning.
pub(crate) fn requests_position(format: &ShapeFormat) -> bool {
    format.left.is_some()
        || format.top.is_some()
        || format.relative_horizontal.is_some()
        || format.relative_vertical.is_some()
        || format.wrap_format.style.is_some()
}

/// Content box of a shape, before its outline is added.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ShapeSize {
    pub width: Length,
    pub height: Length,
}

impl ShapeSize {
    /// The size including the outline, which is drawn outside the content.
    pub fn with_line(self, line: &LineFormat) -> Self {
        let w = line.effective_width();
        Self {
            width: self.width + w,
            height: self.height + w,
        }
    }
}

/// Write `{\sp{\sn name}{\sv value}}`.
pub(crate) fn write_property(session: &mut RenderSession<'_>, name: &str, value: i32) -> Result<()> {
    let mut buf = itoa::Buffer::new();
    let writer = &mut session.writer;
    writer.start_group()?;
    writer.control("sp")?;
    writer.start_group()?;
    writer.control("sn")?;
    writer.write_text(name)?;
    writer.end_group()?;
    writer.start_group()?;
    writer.control("sv")?;
    writer.write_text(buf.format(value))?;
    writer.end_group()?;
    writer.end_group()?;
    Ok(())
}

/// Shape colors are BGR integers, not color table references.
fn bgr(color: &Color) -> i32 {
    color.mix_transparency().to_bgr()
}

/// Outline properties; used by floating shapes and inline picture properties.
pub(crate) fn render_line_properties(session: &mut RenderSession<'_>, line: &LineFormat) -> Result<()> {
    if !line.is_visible() {
        return write_property(session, "fLine", 0);
    }
    write_property(session, "fLine", 1)?;
    if let Some(color) = &line.color {
        write_property(session, "lineColor", bgr(color))?;
    }
    write_property(session, "lineWidth", to_emu(line.effective_width()))?;
    if let Some(dash) = line.dash_style {
        write_property(session, "lineDashing", dash.shape_value())?;
    }
    Ok(())
}

/// Offset along one axis and the named position code, if any.
///
/// A named position is only honored while the wrap distances across the
/// other axis are zero; otherwise the shape sits at offset zero.
fn resolve_offset(offset: Option<ShapeOffset>, cross_distances: [Option<Length>; 2]) -> (Length, Option<i32>) {
    match offset {
        None => (Length::ZERO, None),
        Some(ShapeOffset::Offset(length)) => (length, None),
        Some(ShapeOffset::Position(position)) => {
            let zero = cross_distances.iter().all(|d| d.is_none_or(|d| d.is_zero()));
            if zero {
                (Length::ZERO, Some(position.shape_value()))
            } else {
                (Length::ZERO, None)
            }
        },
    }
}

fn render_wrap_distances(session: &mut RenderSession<'_>, wrap: &WrapFormat) -> Result<()> {
    let distances = [
        ("dxWrapDistLeft", wrap.distance_left),
        ("dyWrapDistTop", wrap.distance_top),
        ("dxWrapDistRight", wrap.distance_right),
        ("dyWrapDistBottom", wrap.distance_bottom),
    ];
    for (name, distance) in distances {
        if let Some(distance) = distance {
            write_property(session, name, to_emu(distance))?;
        }
    }
    Ok(())
}

/// Write a floating `\shp` group; `body` writes the shape's content
/// (picture or text) inside the instance group.
pub(crate) fn render_floating(
    session: &mut RenderSession<'_>,
    format: &ShapeFormat,
    size: ShapeSize,
    kind: ShapeKind,
    body: impl FnOnce(&mut RenderSession<'_>) -> Result<()>,
) -> Result<()> {
    let size = size.with_line(&format.line_format);
    let wrap = &format.wrap_format;
    let horizontal = format.relative_horizontal.unwrap_or_default();
    let vertical = format.relative_vertical.unwrap_or_default();
    let (left, posh) = resolve_offset(format.left, [wrap.distance_top, wrap.distance_bottom]);
    let (top, posv) = resolve_offset(format.top, [wrap.distance_left, wrap.distance_right]);

    let writer = &mut session.writer;
    writer.start_group()?;
    writer.control("shp")?;
    writer.start_group()?;
    writer.control_star("shpinst", None)?;
    writer.control_value("shpleft", to_twips(left))?;
    writer.control_value("shptop", to_twips(top))?;
    writer.control_value("shpright", to_twips(left + size.width))?;
    writer.control_value("shpbottom", to_twips(top + size.height))?;
    writer.control(horizontal.rtf_token())?;
    writer.control("shpbxignore")?;
    writer.control(vertical.rtf_token())?;
    writer.control("shpbyignore")?;
    writer.control_value("shpwr", wrap.style.unwrap_or_default().shape_value())?;
    writer.control_value("shpwrk", 0)?;
    writer.control_value("shpfblwtxt", 0)?;
    writer.control_value("shpz", 0)?;

    write_property(session, "shapeType", kind.code())?;
    if let Some(code) = posh {
        write_property(session, "posh", code)?;
    }
    write_property(session, "posrelh", horizontal.shape_value())?;
    if let Some(code) = posv {
        write_property(session, "posv", code)?;
    }
    write_property(session, "posrelv", vertical.shape_value())?;
    render_wrap_distances(session, wrap)?;
    render_line_properties(session, &format.line_format)?;

    let fill = &format.fill_format;
    match (fill.visible, &fill.color) {
        (Some(false), _) | (None, None) => write_property(session, "fFilled", 0)?,
        (_, color) => {
            write_property(session, "fFilled", 1)?;
            if let Some(color) = color {
                write_property(session, "fillColor", bgr(color))?;
            }
        },
    }

    body(session)?;
    session.writer.end_group()?;
    session.writer.end_group()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Document, RelativeHorizontal, ShapePosition, WrapStyle};
    use crate::rtf::session::capture;

    fn size() -> ShapeSize {
        ShapeSize {
            width: Length::from_point(100.0),
            height: Length::from_point(50.0),
        }
    }

    #[test]
    fn test_placement_by_container() {
        assert_eq!(placement(&Scope::new(Container::Paragraph)), Placement::Inline);
        assert_eq!(placement(&Scope::new(Container::Section)), Placement::Floating);
        assert_eq!(placement(&Scope::new(Container::Cell)), Placement::InlineWrapped);
    }

    #[test]
    fn test_line_width_is_added() {
        let doc = Document::new();
        let format = ShapeFormat {
            left: Some(ShapeOffset::Offset(Length::from_point(10.0))),
            line_format: LineFormat {
                visible: Some(true),
                width: Some(Length::from_point(2.0)),
                ..LineFormat::default()
            },
            ..ShapeFormat::default()
        };
        let (out, _) = capture(&doc, |s| render_floating(s, &format, size(), ShapeKind::PictureFrame, |_| Ok(())));
        assert!(out.starts_with("{\\shp{\\*\\shpinst\\shpleft200\\shptop0\\shpright2240\\shpbottom1040"), "{}", out);
        assert!(out.contains("{\\sp{\\sn lineWidth}{\\sv 25400}}"));
        assert!(out.ends_with("}}"));
    }

    #[test]
    fn test_named_position_needs_zero_cross_wrap_distance() {
        let doc = Document::new();
        let mut format = ShapeFormat {
            left: Some(ShapeOffset::Position(ShapePosition::Right)),
            relative_horizontal: Some(RelativeHorizontal::Margin),
            ..ShapeFormat::default()
        };
        format.wrap_format.style = Some(WrapStyle::Through);
        let (out, _) = capture(&doc, |s| render_floating(s, &format, size(), ShapeKind::TextBox, |_| Ok(())));
        assert!(out.contains("{\\sp{\\sn posh}{\\sv 3}}"));
        assert!(out.contains("\\shpbxmargin"));
        assert!(out.contains("\\shpwr5"));
        assert!(out.contains("{\\sp{\\sn posrelh}{\\sv 0}}"));

        format.wrap_format.distance_top = Some(Length::from_point(4.0));
        let (out, _) = capture(&doc, |s| render_floating(s, &format, size(), ShapeKind::TextBox, |_| Ok(())));
        assert!(!out.contains("posh}"));
        assert!(out.contains("\\shpleft0"));
    }

    #[test]
    fn test_fill_and_line_colors_are_bgr() {
        let doc = Document::new();
        let mut format = ShapeFormat::default();
        format.fill_format.color = Some(Color::rgb(0x11, 0x22, 0x33));
        let (out, _) = capture(&doc, |s| render_floating(s, &format, size(), ShapeKind::TextBox, |_| Ok(())));
        assert!(out.contains("{\\sp{\\sn fFilled}{\\sv 1}}{\\sp{\\sn fillColor}{\\sv 3351057}}"));
        assert!(out.contains("{\\sp{\\sn fLine}{\\sv 0}}"));
    }
}
