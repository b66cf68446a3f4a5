//! Named styles and style inheritance.

use super::format::{Font, Inherit, ParagraphFormat};
use super::types::StyleType;
use crate::common::Length;

pub const NORMAL: &str = "Normal";
pub const DEFAULT_PARAGRAPH_FONT: &str = "DefaultParagraphFont";
pub const HEADING1: &str = "Heading1";
pub const HEADING2: &str = "Heading2";
pub const HEADING3: &str = "Heading3";
pub const HEADER: &str = "Header";
pub const FOOTER: &str = "Footer";
pub const FOOTNOTE: &str = "Footnote";

/// A named style.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub name: String,
    /// Name of the style this one derives from; `None` for a root style
    pub base_style: Option<String>,
    pub style_type: StyleType,
    pub paragraph_format: ParagraphFormat,
}

impl Style {
    pub fn paragraph(name: impl Into<String>, base_style: Option<&str>) -> Self {
        Self {
            name: name.into(),
            base_style: base_style.map(str::to_string),
            style_type: StyleType::Paragraph,
            paragraph_format: ParagraphFormat::default(),
        }
    }

    pub fn character(name: impl Into<String>, base_style: Option<&str>) -> Self {
        Self {
            name: name.into(),
            base_style: base_style.map(str::to_string),
            style_type: StyleType::Character,
            paragraph_format: ParagraphFormat::default(),
        }
    }

    /// The character format of the style.
    #[inline]
    pub fn font(&self) -> &Font {
        &self.paragraph_format.font
    }

    #[inline]
    pub fn font_mut(&mut self) -> &mut Font {
        &mut self.paragraph_format.font
    }
}

/// Ordered style collection.
///
/// A style's RTF index is its position in this collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Styles {
    styles: Vec<Style>,
}

impl Styles {
    /// Create the built-in style set.
    pub fn new() -> Self {
        let mut normal = Style::paragraph(NORMAL, None);
        normal.paragraph_format.font = Font {
            name: Some("Arial".into()),
            size: Some(Length::from_point(10.0)),
            bold: Some(false),
            italic: Some(false),
            ..Font::default()
        };
        normal.paragraph_format.widow_control = Some(true);

        let heading = |name: &str, size: f64| {
            let mut style = Style::paragraph(name, Some(NORMAL));
            style.paragraph_format.keep_with_next = Some(true);
            style.paragraph_format.space_before = Some(Length::from_point(12.0));
            style.paragraph_format.space_after = Some(Length::from_point(6.0));
            style.font_mut().bold = Some(true);
            style.font_mut().size = Some(Length::from_point(size));
            style
        };

        let mut footnote = Style::paragraph(FOOTNOTE, Some(NORMAL));
        footnote.font_mut().size = Some(Length::from_point(8.0));

        Self {
            styles: vec![
                normal,
                Style::character(DEFAULT_PARAGRAPH_FONT, None),
                heading(HEADING1, 16.0),
                heading(HEADING2, 14.0),
                heading(HEADING3, 12.0),
                Style::paragraph(HEADER, Some(NORMAL)),
                Style::paragraph(FOOTER, Some(NORMAL)),
                footnote,
            ],
        }
    }

    /// Add a style, replacing any existing style of the same name in place.
    pub fn add(&mut self, style: Style) -> &mut Style {
        let index = match self.index_of(&style.name) {
            Some(i) => {
                self.styles[i] = style;
                i
            },
            None => {
                self.styles.push(style);
                self.styles.len() - 1
            },
        };
        &mut self.styles[index]
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&Style> {
        self.styles.iter().find(|s| s.name == name)
    }

    #[inline]
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Style> {
        self.styles.iter_mut().find(|s| s.name == name)
    }

    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.styles.iter().position(|s| s.name == name)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Style> {
        self.styles.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Effective paragraph format of a style, resolved along its base chain.
    ///
    /// Unknown names resolve to an empty format. Cycles in the base chain are
    /// cut at the first repeated style.
    pub fn effective_format(&self, name: &str) -> ParagraphFormat {
        let mut chain: Vec<&Style> = Vec::new();
        let mut current = self.get(name);
        while let Some(style) = current {
            if chain.iter().any(|s| s.name == style.name) {
                break;
            }
            chain.push(style);
            current = style.base_style.as_deref().and_then(|b| self.get(b));
        }
        chain
            .iter()
            .rev()
            .fold(ParagraphFormat::default(), |acc, style| {
                style.paragraph_format.inherit_from(&acc)
            })
    }

    /// Effective character format of a style.
    pub fn effective_font(&self, name: &str) -> Font {
        self.effective_format(name).font
    }
}

impl Default for Styles {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Styles {
    type Item = &'a Style;
    type IntoIter = std::slice::Iter<'a, Style>;

    fn into_iter(self) -> Self::IntoIter {
        self.styles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::types::ParagraphAlignment;

    #[test]
    fn test_builtin_styles() {
        let styles = Styles::new();
        assert_eq!(styles.index_of(NORMAL), Some(0));
        assert!(styles.get(FOOTNOTE).is_some());
        assert_eq!(
            styles.get(DEFAULT_PARAGRAPH_FONT).map(|s| s.style_type),
            Some(StyleType::Character)
        );
    }

    #[test]
    fn test_effective_format_follows_chain() {
        let mut styles = Styles::new();
        let mut quote = Style::paragraph("Quote", Some(HEADING1));
        quote.paragraph_format.alignment = Some(ParagraphAlignment::Center);
        styles.add(quote);

        let eff = styles.effective_format("Quote");
        assert_eq!(eff.alignment, Some(ParagraphAlignment::Center));
        assert_eq!(eff.font.bold, Some(true));
        assert_eq!(eff.font.name.as_deref(), Some("Arial"));
        assert_eq!(eff.font.size, Some(Length::from_point(16.0)));
    }

    #[test]
    fn test_add_replaces_in_place() {
        let mut styles = Styles::new();
        let count = styles.len();
        styles.add(Style::paragraph(HEADER, None));
        assert_eq!(styles.len(), count);
        assert_eq!(styles.get(HEADER).and_then(|s| s.base_style.clone()), None);
    }

    #[test]
    fn test_cyclic_chain_terminates() {
        let mut styles = Styles::new();
        styles.add(Style::paragraph("A", Some("B")));
        styles.add(Style::paragraph("B", Some("A")));
        let _ = styles.effective_format("A");
    }
}
