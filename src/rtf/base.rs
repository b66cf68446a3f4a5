//! Shared renderer machinery: render scope, format views and the generic
//! property translation.

use super::session::RenderSession;
use super::tokens::RtfToken;
use crate::common::unit::{RtfUnit, to_rtf_unit};
use crate::common::{Color, Length, Result};
use crate::document::{
    BorderStyle, BreakType, FootnoteLocation, FootnoteNumberStyle, Layered, Orientation,
    PageNumberStyle, ParagraphAlignment, ParagraphFormat, RelativeHorizontal,
    RelativeVertical, RowAlignment, TabAlignment, TabLeader, Underline, VerticalAlignment,
};

/// Kind of the nearest enclosing container of the object being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Container {
    Section,
    HeaderFooter,
    Cell,
    Footnote,
    TextFrame,
    Paragraph,
}

impl Container {
    /// Tables nest neither in cells nor in footnotes.
    #[inline]
    pub fn holds_tables(self) -> bool {
        !matches!(self, Container::Cell | Container::Footnote)
    }

    /// Text frames need a paragraph to anchor to, written by the renderer
    /// when the container is a section body or a header.
    #[inline]
    pub fn holds_text_frames(self) -> bool {
        matches!(self, Container::Paragraph | Container::Section | Container::HeaderFooter)
    }

    #[inline]
    pub fn holds_page_breaks(self) -> bool {
        self == Container::Section
    }
}

/// Where an object sits in the tree, passed down instead of parent links.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Scope<'s> {
    pub container: Container,
    /// The object is the last element of its container
    pub is_last: bool,
    /// Style inherited from the container (cell, header, footnote)
    pub base_style: Option<&'s str>,
    /// Paragraph format inherited from the container
    pub base_format: Option<&'s ParagraphFormat>,
}

impl<'s> Scope<'s> {
    pub fn new(container: Container) -> Self {
        Self {
            container,
            is_last: false,
            base_style: None,
            base_format: None,
        }
    }

    pub fn with_base(mut self, style: Option<&'s str>, format: Option<&'s ParagraphFormat>) -> Self {
        self.base_style = style;
        self.base_format = format;
        self
    }

    pub fn last(mut self, is_last: bool) -> Self {
        self.is_last = is_last;
        self
    }

    /// Scope for the children of an inline container inside a paragraph.
    pub fn inline(self) -> Self {
        Self {
            container: Container::Paragraph,
            is_last: false,
            ..self
        }
    }

    #[inline]
    pub fn in_cell(&self) -> bool {
        self.container == Container::Cell
    }

    /// Whether a paragraph in this scope writes its own `\par`. The last
    /// paragraph of a cell or footnote is closed by the container.
    pub fn closes_paragraph(&self) -> bool {
        !(self.is_last && matches!(self.container, Container::Cell | Container::Footnote))
    }
}

/// A format as one renderer sees it: both layers plus whether inherited values
/// are emitted.
#[derive(Debug)]
pub(crate) struct FormatView<'a, F> {
    layers: Layered<'a, F>,
    use_effective: bool,
}

impl<F> Clone for FormatView<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for FormatView<'_, F> {}

impl<'a, F> FormatView<'a, F> {
    /// Emit resolved values: the object's own and those inherited from its styles.
    pub fn effective(local: &'a F, effective: &'a F) -> Self {
        Self {
            layers: Layered::new(local, effective),
            use_effective: true,
        }
    }

    /// Emit only what the format itself sets.
    pub fn raw(format: &'a F) -> Self {
        Self {
            layers: Layered::raw(format),
            use_effective: false,
        }
    }

    #[inline]
    pub fn value<T>(&self, pick: impl Fn(&'a F) -> Option<T>) -> Option<T> {
        self.layers.prop(pick).get(self.use_effective)
    }

    /// The layer values are emitted from.
    #[inline]
    pub fn source(&self) -> &'a F {
        if self.use_effective {
            self.layers.effective
        } else {
            self.layers.local
        }
    }

    #[inline]
    pub fn map<G>(&self, pick: impl Fn(&'a F) -> &'a G) -> FormatView<'a, G> {
        FormatView {
            layers: self.layers.map(pick),
            use_effective: self.use_effective,
        }
    }
}

/// A property value converted for output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RtfValue {
    Flag(bool),
    Number(i32),
    /// A complete control word; empty means nothing is written
    Token(&'static str),
}

/// Conversion of a property value into its RTF form.
pub(crate) trait ToRtf {
    fn to_rtf(&self, session: &RenderSession<'_>, unit: RtfUnit) -> RtfValue;
}

impl ToRtf for bool {
    fn to_rtf(&self, _: &RenderSession<'_>, _: RtfUnit) -> RtfValue {
        RtfValue::Flag(*self)
    }
}

impl ToRtf for i32 {
    fn to_rtf(&self, _: &RenderSession<'_>, _: RtfUnit) -> RtfValue {
        RtfValue::Number(*self)
    }
}

impl ToRtf for Length {
    fn to_rtf(&self, _: &RenderSession<'_>, unit: RtfUnit) -> RtfValue {
        RtfValue::Number(to_rtf_unit(*self, unit))
    }
}

impl ToRtf for Color {
    fn to_rtf(&self, session: &RenderSession<'_>, _: RtfUnit) -> RtfValue {
        RtfValue::Number(session.color_index(self))
    }
}

macro_rules! token_values {
    ($($ty:ident),* $(,)?) => {
        $(
            impl ToRtf for $ty {
                fn to_rtf(&self, _: &RenderSession<'_>, _: RtfUnit) -> RtfValue {
                    RtfValue::Token(self.rtf_token())
                }
            }
        )*
    };
}

token_values!(
    ParagraphAlignment,
    Underline,
    BorderStyle,
    TabAlignment,
    TabLeader,
    VerticalAlignment,
    RowAlignment,
    Orientation,
    BreakType,
    FootnoteLocation,
    FootnoteNumberStyle,
    PageNumberStyle,
    RelativeHorizontal,
    RelativeVertical,
);

impl RenderSession<'_> {
    /// Write `value` under `word`, lengths in twips.
    pub fn translate<T: ToRtf>(&mut self, word: &str, value: Option<T>) -> Result<()> {
        self.translate_with(word, value, RtfUnit::Twips, None)
    }

    /// Write `value` under `word` in the given unit.
    pub fn translate_in<T: ToRtf>(&mut self, word: &str, value: Option<T>, unit: RtfUnit) -> Result<()> {
        self.translate_with(word, value, unit, None)
    }

    /// Write `value` under `word`, or `default` when there is no value.
    pub fn translate_or<T: ToRtf>(&mut self, word: &str, value: Option<T>, default: i32) -> Result<()> {
        self.translate_with(word, value, RtfUnit::Twips, Some(default))
    }

    /// The generic translation.
    ///
    /// Booleans write the bare word when true, numbers and lengths write the
    /// word with a parameter, colors their table index and enumerations their
    /// own token (ignoring `word`).
    fn translate_with<T: ToRtf>(
        &mut self,
        word: &str,
        value: Option<T>,
        unit: RtfUnit,
        default: Option<i32>,
    ) -> Result<()> {
        let Some(value) = value else {
            if let Some(default) = default {
                self.writer.control_value(word, default)?;
            }
            return Ok(());
        };
        match value.to_rtf(self, unit) {
            RtfValue::Flag(true) => self.writer.control(word)?,
            RtfValue::Flag(false) => {},
            RtfValue::Number(n) => self.writer.control_value(word, n)?,
            RtfValue::Token("") => {},
            RtfValue::Token(token) => self.writer.control(token)?,
        }
        Ok(())
    }

    /// Write one of two different words for a boolean; nothing when unset.
    pub fn translate_bool(&mut self, value: Option<bool>, true_word: &str, false_word: &str) -> Result<()> {
        match value {
            Some(true) => self.writer.control(true_word)?,
            Some(false) => self.writer.control(false_word)?,
            None => {},
        }
        Ok(())
    }
}
