//! Character and paragraph formatting.
//!
//! Formats are plain data with optional fields. [`Inherit::inherit_from`]
//! fills the unset fields of a format from a base format, which is how style
//! chains and table cell fallbacks are resolved.

use std::rc::Rc;

use super::types::{
    BorderStyle, LineSpacingRule, ListType, OutlineLevel, ParagraphAlignment, TabAlignment,
    TabLeader, Underline,
};
use crate::common::{Color, Length};

/// Layering of a format over a base format.
pub trait Inherit {
    /// Return a copy of `self` with unset fields taken from `base`.
    fn inherit_from(&self, base: &Self) -> Self;
}

/// Inherit an optional nested format field by field.
pub(crate) fn inherit_nested<T: Inherit + Clone>(local: &Option<T>, base: &Option<T>) -> Option<T> {
    match (local, base) {
        (Some(l), Some(b)) => Some(l.inherit_from(b)),
        (Some(l), None) => Some(l.clone()),
        (None, b) => b.clone(),
    }
}

macro_rules! inherit_fields {
    ($local:expr, $base:expr; $($field:ident),* $(,)?) => {
        Self {
            $($field: $local.$field.clone().or_else(|| $base.$field.clone()),)*
        }
    };
}

/// Character formatting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Font {
    pub name: Option<String>,
    pub size: Option<Length>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<Underline>,
    pub color: Option<Color>,
    pub superscript: Option<bool>,
    pub subscript: Option<bool>,
}

impl Font {
    /// A font with only the face name set.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

impl Inherit for Font {
    fn inherit_from(&self, base: &Self) -> Self {
        inherit_fields!(self, base; name, size, bold, italic, underline, color, superscript, subscript)
    }
}

/// One edge of a border.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Border {
    pub visible: Option<bool>,
    pub style: Option<BorderStyle>,
    pub width: Option<Length>,
    pub color: Option<Color>,
}

impl Border {
    /// A visible single line of the given width.
    pub fn single(width: Length) -> Self {
        Self {
            visible: Some(true),
            style: Some(BorderStyle::Single),
            width: Some(width),
            color: None,
        }
    }

    /// Whether the border draws anything.
    ///
    /// An explicit `visible` wins; otherwise a border is visible as soon as a
    /// style, width or color has been given, unless the style is `None`.
    pub fn is_visible(&self) -> bool {
        if let Some(visible) = self.visible {
            return visible && self.style != Some(BorderStyle::None);
        }
        if self.style == Some(BorderStyle::None) {
            return false;
        }
        self.style.is_some() || self.width.is_some() || self.color.is_some()
    }
}

impl Inherit for Border {
    fn inherit_from(&self, base: &Self) -> Self {
        inherit_fields!(self, base; visible, style, width, color)
    }
}

/// The edges of a paragraph or cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Borders {
    pub visible: Option<bool>,
    pub top: Option<Border>,
    pub left: Option<Border>,
    pub bottom: Option<Border>,
    pub right: Option<Border>,
    pub diagonal_down: Option<Border>,
    pub diagonal_up: Option<Border>,
    pub distance_from_top: Option<Length>,
    pub distance_from_left: Option<Length>,
    pub distance_from_bottom: Option<Length>,
    pub distance_from_right: Option<Length>,
}

impl Borders {
    /// Set the same border on the four outer edges.
    pub fn all(border: Border) -> Self {
        Self {
            top: Some(border.clone()),
            left: Some(border.clone()),
            bottom: Some(border.clone()),
            right: Some(border),
            ..Self::default()
        }
    }
}

impl Inherit for Borders {
    fn inherit_from(&self, base: &Self) -> Self {
        Self {
            visible: self.visible.or(base.visible),
            top: inherit_nested(&self.top, &base.top),
            left: inherit_nested(&self.left, &base.left),
            bottom: inherit_nested(&self.bottom, &base.bottom),
            right: inherit_nested(&self.right, &base.right),
            diagonal_down: inherit_nested(&self.diagonal_down, &base.diagonal_down),
            diagonal_up: inherit_nested(&self.diagonal_up, &base.diagonal_up),
            distance_from_top: self.distance_from_top.or(base.distance_from_top),
            distance_from_left: self.distance_from_left.or(base.distance_from_left),
            distance_from_bottom: self.distance_from_bottom.or(base.distance_from_bottom),
            distance_from_right: self.distance_from_right.or(base.distance_from_right),
        }
    }
}

/// Background fill of a paragraph or cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shading {
    pub visible: Option<bool>,
    pub color: Option<Color>,
}

impl Shading {
    pub fn solid(color: Color) -> Self {
        Self {
            visible: Some(true),
            color: Some(color),
        }
    }
}

impl Inherit for Shading {
    fn inherit_from(&self, base: &Self) -> Self {
        inherit_fields!(self, base; visible, color)
    }
}

/// A single tab stop.
#[derive(Debug, Clone, PartialEq)]
pub struct TabStop {
    pub position: Length,
    pub alignment: TabAlignment,
    pub leader: TabLeader,
    /// `false` removes an inherited stop at the same position
    pub add_tab: bool,
}

impl TabStop {
    pub fn new(position: Length) -> Self {
        Self {
            position,
            alignment: TabAlignment::Left,
            leader: TabLeader::Spaces,
            add_tab: true,
        }
    }
}

/// Ordered tab stops of a paragraph format.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TabStops {
    pub stops: Vec<TabStop>,
    /// Discard every inherited stop before applying `stops`
    pub clear_all: bool,
}

impl TabStops {
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty() && !self.clear_all
    }

    pub fn add(&mut self, stop: TabStop) {
        self.stops.push(stop);
    }
}

impl Inherit for TabStops {
    fn inherit_from(&self, base: &Self) -> Self {
        let mut stops: Vec<TabStop> = if self.clear_all {
            Vec::new()
        } else {
            base.stops.iter().filter(|s| s.add_tab).cloned().collect()
        };
        for stop in &self.stops {
            stops.retain(|s| (s.position.points() - stop.position.points()).abs() > f64::EPSILON);
            if stop.add_tab {
                stops.push(stop.clone());
            }
        }
        stops.sort_by(|a, b| a.position.points().total_cmp(&b.position.points()));
        Self {
            stops,
            clear_all: self.clear_all || base.clear_all,
        }
    }
}

/// List membership of a paragraph.
///
/// Two paragraphs belong to the same list only if they share the same
/// `Rc<ListInfo>`; equal values in separate allocations start separate lists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListInfo {
    pub list_type: ListType,
    pub number_position: Option<Length>,
    /// Continue the numbering of the previously declared list
    pub continue_previous_list: bool,
}

impl ListInfo {
    pub fn new(list_type: ListType) -> Rc<Self> {
        Rc::new(Self {
            list_type,
            ..Self::default()
        })
    }
}

/// Paragraph formatting, including the paragraph's default character format.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParagraphFormat {
    pub alignment: Option<ParagraphAlignment>,
    pub first_line_indent: Option<Length>,
    pub left_indent: Option<Length>,
    pub right_indent: Option<Length>,
    pub space_before: Option<Length>,
    pub space_after: Option<Length>,
    pub line_spacing: Option<Length>,
    pub line_spacing_rule: Option<LineSpacingRule>,
    pub keep_together: Option<bool>,
    pub keep_with_next: Option<bool>,
    pub page_break_before: Option<bool>,
    pub widow_control: Option<bool>,
    pub outline_level: Option<OutlineLevel>,
    pub list_info: Option<Rc<ListInfo>>,
    pub tab_stops: TabStops,
    pub borders: Option<Borders>,
    pub shading: Option<Shading>,
    pub font: Font,
}

impl Inherit for ParagraphFormat {
    fn inherit_from(&self, base: &Self) -> Self {
        Self {
            alignment: self.alignment.or(base.alignment),
            first_line_indent: self.first_line_indent.or(base.first_line_indent),
            left_indent: self.left_indent.or(base.left_indent),
            right_indent: self.right_indent.or(base.right_indent),
            space_before: self.space_before.or(base.space_before),
            space_after: self.space_after.or(base.space_after),
            line_spacing: self.line_spacing.or(base.line_spacing),
            line_spacing_rule: self.line_spacing_rule.or(base.line_spacing_rule),
            keep_together: self.keep_together.or(base.keep_together),
            keep_with_next: self.keep_with_next.or(base.keep_with_next),
            page_break_before: self.page_break_before.or(base.page_break_before),
            widow_control: self.widow_control.or(base.widow_control),
            outline_level: self.outline_level.or(base.outline_level),
            list_info: self.list_info.clone().or_else(|| base.list_info.clone()),
            tab_stops: self.tab_stops.inherit_from(&base.tab_stops),
            borders: inherit_nested(&self.borders, &base.borders),
            shading: inherit_nested(&self.shading, &base.shading),
            font: self.font.inherit_from(&base.font),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_inherits_unset_fields() {
        let base = Font {
            name: Some("Arial".into()),
            size: Some(Length::from_point(10.0)),
            bold: Some(false),
            ..Font::default()
        };
        let local = Font {
            bold: Some(true),
            ..Font::default()
        };
        let merged = local.inherit_from(&base);
        assert_eq!(merged.name.as_deref(), Some("Arial"));
        assert_eq!(merged.bold, Some(true));
        assert_eq!(merged.size, Some(Length::from_point(10.0)));
    }

    #[test]
    fn test_tab_stop_removal() {
        let mut base = TabStops::default();
        base.add(TabStop::new(Length::from_point(36.0)));
        base.add(TabStop::new(Length::from_point(72.0)));
        let mut local = TabStops::default();
        local.add(TabStop {
            add_tab: false,
            ..TabStop::new(Length::from_point(36.0))
        });
        local.add(TabStop::new(Length::from_point(18.0)));
        let merged = local.inherit_from(&base);
        let positions: Vec<f64> = merged.stops.iter().map(|s| s.position.points()).collect();
        assert_eq!(positions, vec![18.0, 72.0]);
    }

    #[test]
    fn test_border_visibility() {
        assert!(!Border::default().is_visible());
        assert!(Border::single(Length::from_point(1.0)).is_visible());
        let hidden = Border {
            visible: Some(false),
            ..Border::single(Length::from_point(1.0))
        };
        assert!(!hidden.is_visible());
        let none_style = Border {
            style: Some(BorderStyle::None),
            width: Some(Length::from_point(1.0)),
            ..Border::default()
        };
        assert!(!none_style.is_visible());
    }

    #[test]
    fn test_nested_borders_inherit() {
        let base = Borders::all(Border::single(Length::from_point(0.5)));
        let local = Borders {
            top: Some(Border {
                width: Some(Length::from_point(2.0)),
                ..Border::default()
            }),
            ..Borders::default()
        };
        let merged = local.inherit_from(&base);
        let top = merged.top.unwrap();
        assert_eq!(top.width, Some(Length::from_point(2.0)));
        assert_eq!(top.style, Some(BorderStyle::Single));
        assert!(merged.left.is_some());
    }
}
