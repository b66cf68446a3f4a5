//! Paragraph formatting: alignment, spacing, indentation, pagination, list
//! membership, tab stops, borders, shading and the paragraph's character format.

use super::base::FormatView;
use super::border::{BorderTarget, render_borders, render_shading};
use super::font::render_font;
use super::session::RenderSession;
use crate::common::unit::{RtfUnit, to_rtf_unit};
use crate::common::{Length, Result};
use crate::document::{LineSpacingRule, OutlineLevel, ParagraphFormat};

/// Write every paragraph property `view` resolves.
pub(crate) fn render_paragraph_format(
    session: &mut RenderSession<'_>,
    view: FormatView<'_, ParagraphFormat>,
) -> Result<()> {
    session.translate("q", view.value(|f| f.alignment))?;
    session.translate("sb", view.value(|f| f.space_before))?;
    session.translate("sa", view.value(|f| f.space_after))?;
    session.translate_bool(view.value(|f| f.widow_control), "widctlpar", "nowidctlpar")?;
    session.translate("pagebb", view.value(|f| f.page_break_before))?;
    session.translate("keep", view.value(|f| f.keep_together))?;
    session.translate("keepn", view.value(|f| f.keep_with_next))?;
    session.translate("fi", view.value(|f| f.first_line_indent))?;

    let left = view.value(|f| f.left_indent);
    session.translate("li", left)?;
    session.translate("lin", left)?;
    let right = view.value(|f| f.right_indent);
    session.translate("ri", right)?;
    session.translate("rin", right)?;

    if let Some(level) = view.value(|f| f.outline_level).and_then(outline_index) {
        session.writer.control_value("outlinelevel", level)?;
    }

    render_line_spacing(
        session,
        view.value(|f| f.line_spacing_rule),
        view.value(|f| f.line_spacing),
    )?;

    if let Some(info) = view.value(|f| f.list_info.as_ref()) {
        let ls = session.list_index(info);
        session.writer.control_value("ls", ls)?;
        session.writer.control_value("ilvl", i32::from(info.list_type.level()))?;
    }

    let source = view.source();
    for stop in source.tab_stops.stops.iter().filter(|s| s.add_tab) {
        session.translate("tq", Some(stop.alignment))?;
        session.translate("tl", Some(stop.leader))?;
        session.translate("tx", Some(stop.position))?;
    }
    if let Some(borders) = &source.borders {
        render_borders(session, borders, BorderTarget::Paragraph)?;
    }
    if let Some(shading) = &source.shading {
        render_shading(session, shading, BorderTarget::Paragraph)?;
    }

    render_font(session, view.map(|f| &f.font))
}

/// Zero-based `\outlinelevel`; body text has none.
fn outline_index(level: OutlineLevel) -> Option<i32> {
    let index = match level {
        OutlineLevel::BodyText => return None,
        OutlineLevel::Level1 => 0,
        OutlineLevel::Level2 => 1,
        OutlineLevel::Level3 => 2,
        OutlineLevel::Level4 => 3,
        OutlineLevel::Level5 => 4,
        OutlineLevel::Level6 => 5,
        OutlineLevel::Level7 => 6,
        OutlineLevel::Level8 => 7,
        OutlineLevel::Level9 => 8,
    };
    Some(index)
}

/// `\sl` / `\slmult` pair for a spacing rule. Rules that need a height write
/// nothing without one.
fn render_line_spacing(
    session: &mut RenderSession<'_>,
    rule: Option<LineSpacingRule>,
    spacing: Option<Length>,
) -> Result<()> {
    let (sl, multiple) = match (rule, spacing) {
        (Some(LineSpacingRule::Single), _) => (240, true),
        (Some(LineSpacingRule::OnePtFive), _) => (360, true),
        (Some(LineSpacingRule::Double), _) => (480, true),
        (Some(LineSpacingRule::AtLeast), Some(s)) => (to_rtf_unit(s, RtfUnit::Twips), false),
        // a negative height means "exactly"
        (Some(LineSpacingRule::Exactly), Some(s)) => (-to_rtf_unit(s, RtfUnit::Twips), false),
        (Some(LineSpacingRule::Multiple), Some(s)) => (to_rtf_unit(s, RtfUnit::Lines), true),
        _ => return Ok(()),
    };
    session.writer.control_value("sl", sl)?;
    session.writer.control_value("slmult", i32::from(multiple))?;
    Ok(())
}
