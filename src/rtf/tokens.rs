//! Enumeration-to-markup lookup.
//!
//! Every model enumeration that maps onto a fixed RTF control word implements
//! [`RtfToken`]; the token is the complete control word without its leading
//! backslash. An empty token means "emit nothing" (the RTF default already
//! matches). Shape properties, which RTF writes as `{\sp{\sn name}{\sv value}}`
//! pairs, use the numeric codes of [`ShapeValue`] instead.

use crate::document::{
    BorderStyle, BreakType, DashStyle, FootnoteLocation, FootnoteNumberStyle, Orientation,
    PageNumberStyle, ParagraphAlignment, RelativeHorizontal, RelativeVertical, RowAlignment,
    ShapePosition, SymbolName, TabAlignment, TabLeader, Underline, VerticalAlignment, WrapStyle,
};

/// Static RTF control word of an enumeration value.
pub trait RtfToken: Copy {
    fn rtf_token(self) -> &'static str;
}

/// Numeric value of an enumeration inside a shape property.
pub trait ShapeValue: Copy {
    fn shape_value(self) -> i32;
}

macro_rules! rtf_tokens {
    ($ty:ident { $($variant:ident => $token:literal),* $(,)? }) => {
        impl RtfToken for $ty {
            #[inline]
            fn rtf_token(self) -> &'static str {
                match self {
                    $($ty::$variant => $token,)*
                }
            }
        }
    };
}

macro_rules! shape_values {
    ($ty:ident { $($variant:ident => $value:literal),* $(,)? }) => {
        impl ShapeValue for $ty {
            #[inline]
            fn shape_value(self) -> i32 {
                match self {
                    $($ty::$variant => $value,)*
                }
            }
        }
    };
}

rtf_tokens!(ParagraphAlignment {
    Left => "ql",
    Center => "qc",
    Right => "qr",
    Justify => "qj",
});

rtf_tokens!(Underline {
    None => "ulnone",
    Single => "ul",
    Words => "ulw",
    Dotted => "uld",
    Dash => "uldash",
    DotDash => "uldashd",
    DotDotDash => "uldashdd",
    Double => "uldb",
});

rtf_tokens!(BorderStyle {
    None => "brdrnone",
    Single => "brdrs",
    Dot => "brdrdot",
    DashSmallGap => "brdrdashsm",
    DashLargeGap => "brdrdash",
    DashDot => "brdrdashd",
    DashDotDot => "brdrdashdd",
});

rtf_tokens!(TabAlignment {
    Left => "",
    Center => "tqc",
    Right => "tqr",
    Decimal => "tqdec",
});

rtf_tokens!(TabLeader {
    Spaces => "",
    Dots => "tldot",
    Dashes => "tlhyph",
    Lines => "tlul",
    Heavy => "tlth",
    MiddleDot => "tlmdot",
});

rtf_tokens!(VerticalAlignment {
    Top => "clvertalt",
    Center => "clvertalc",
    Bottom => "clvertalb",
});

rtf_tokens!(RowAlignment {
    Left => "trql",
    Center => "trqc",
    Right => "trqr",
});

rtf_tokens!(Orientation {
    Portrait => "",
    Landscape => "lndscpsxn",
});

rtf_tokens!(BreakType {
    Continuous => "sbknone",
    BreakNextPage => "sbkpage",
    BreakEvenPage => "sbkeven",
    BreakOddPage => "sbkodd",
});

rtf_tokens!(FootnoteLocation {
    BottomOfPage => "ftnbj",
    EndOfDocument => "enddoc",
});

rtf_tokens!(FootnoteNumberStyle {
    Arabic => "ftnnar",
    LowercaseLetter => "ftnnalc",
    UppercaseLetter => "ftnnauc",
    LowercaseRoman => "ftnnrlc",
    UppercaseRoman => "ftnnruc",
});

rtf_tokens!(PageNumberStyle {
    Arabic => "pgndec",
    LowercaseLetter => "pgnlcltr",
    UppercaseLetter => "pgnucltr",
    LowercaseRoman => "pgnlcrm",
    UppercaseRoman => "pgnucrm",
});

rtf_tokens!(RelativeHorizontal {
    Character => "shpbxcolumn",
    Column => "shpbxcolumn",
    Margin => "shpbxmargin",
    Page => "shpbxpage",
});

rtf_tokens!(RelativeVertical {
    Line => "shpbypara",
    Margin => "shpbymargin",
    Page => "shpbypage",
    Paragraph => "shpbypara",
});

shape_values!(WrapStyle {
    TopBottom => 1,
    None => 3,
    Through => 5,
});

shape_values!(RelativeHorizontal {
    Margin => 0,
    Page => 1,
    Column => 2,
    Character => 3,
});

shape_values!(RelativeVertical {
    Margin => 0,
    Page => 1,
    Paragraph => 2,
    Line => 3,
});

// posh and posv share their codes: 1 = left/top, 2 = center, 3 = right/bottom
shape_values!(ShapePosition {
    Top => 1,
    Left => 1,
    Center => 2,
    Bottom => 3,
    Right => 3,
    Inside => 4,
    Outside => 5,
});

shape_values!(DashStyle {
    Solid => 0,
    Dash => 1,
    SquareDot => 2,
    DashDot => 3,
    DashDotDot => 4,
});

/// Markup of a special character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolMarkup {
    /// A control word followed by the usual delimiter
    Control(&'static str),
    /// A control symbol that must not be followed by a padding space
    Unpadded(&'static str),
    /// Literal text
    Text(&'static str),
}

/// Markup of a [`SymbolName`].
pub fn symbol_markup(symbol: SymbolName) -> SymbolMarkup {
    match symbol {
        SymbolName::Blank => SymbolMarkup::Text(" "),
        SymbolName::En => SymbolMarkup::Control("enspace"),
        SymbolName::Em => SymbolMarkup::Control("emspace"),
        SymbolName::EmQuarter => SymbolMarkup::Control("qmspace"),
        SymbolName::Tab => SymbolMarkup::Control("tab"),
        SymbolName::LineBreak => SymbolMarkup::Control("line"),
        SymbolName::NonBreakableBlank => SymbolMarkup::Unpadded("~"),
        SymbolName::NonBreakingHyphen => SymbolMarkup::Unpadded("_"),
        SymbolName::SoftHyphen => SymbolMarkup::Unpadded("-"),
        SymbolName::Bullet => SymbolMarkup::Control("bullet"),
        SymbolName::Euro => SymbolMarkup::Text("\u{20AC}"),
        SymbolName::Copyright => SymbolMarkup::Text("\u{A9}"),
        SymbolName::Trademark => SymbolMarkup::Text("\u{2122}"),
        SymbolName::RegisteredTrademark => SymbolMarkup::Text("\u{AE}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens() {
        assert_eq!(ParagraphAlignment::Justify.rtf_token(), "qj");
        assert_eq!(BorderStyle::DashDotDot.rtf_token(), "brdrdashdd");
        assert_eq!(TabAlignment::Left.rtf_token(), "");
        assert_eq!(PageNumberStyle::UppercaseRoman.rtf_token(), "pgnucrm");
        assert_eq!(BreakType::Continuous.rtf_token(), "sbknone");
    }

    #[test]
    fn test_shape_values() {
        assert_eq!(WrapStyle::TopBottom.shape_value(), 1);
        assert_eq!(WrapStyle::None.shape_value(), 3);
        assert_eq!(WrapStyle::Through.shape_value(), 5);
        assert_eq!(RelativeHorizontal::Character.shape_value(), 3);
        assert_eq!(RelativeVertical::Paragraph.shape_value(), 2);
        assert_eq!(ShapePosition::Outside.shape_value(), 5);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(
            symbol_markup(SymbolName::NonBreakableBlank),
            SymbolMarkup::Unpadded("~")
        );
        assert_eq!(symbol_markup(SymbolName::Tab), SymbolMarkup::Control("tab"));
        assert_eq!(symbol_markup(SymbolName::Euro), SymbolMarkup::Text("€"));
    }
}
