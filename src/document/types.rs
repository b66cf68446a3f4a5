//! Enumerations shared across the document model.

/// Horizontal alignment of a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParagraphAlignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

/// How `ParagraphFormat::line_spacing` is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineSpacingRule {
    #[default]
    Single,
    OnePtFive,
    Double,
    /// `line_spacing` is a minimum height
    AtLeast,
    /// `line_spacing` is an exact height
    Exactly,
    /// `line_spacing` is a multiple of single spacing (its point value is the factor)
    Multiple,
}

/// Underline kind for character formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Underline {
    #[default]
    None,
    Single,
    Words,
    Dotted,
    Dash,
    DotDash,
    DotDotDash,
    Double,
}

/// Line style of a border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    None,
    #[default]
    Single,
    Dot,
    DashSmallGap,
    DashLargeGap,
    DashDot,
    DashDotDot,
}

/// Alignment of text at a tab stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabAlignment {
    #[default]
    Left,
    Center,
    Right,
    Decimal,
}

/// Fill characters leading up to a tab stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabLeader {
    #[default]
    Spaces,
    Dots,
    Dashes,
    Lines,
    Heavy,
    MiddleDot,
}

/// Bullet or numbering template of a list paragraph.
///
/// The trailing digit is the nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListType {
    #[default]
    BulletList1,
    BulletList2,
    BulletList3,
    NumberList1,
    NumberList2,
    NumberList3,
}

impl ListType {
    /// Zero-based nesting level.
    pub fn level(self) -> u8 {
        match self {
            ListType::BulletList1 | ListType::NumberList1 => 0,
            ListType::BulletList2 | ListType::NumberList2 => 1,
            ListType::BulletList3 | ListType::NumberList3 => 2,
        }
    }

    pub fn is_bullet(self) -> bool {
        matches!(
            self,
            ListType::BulletList1 | ListType::BulletList2 | ListType::BulletList3
        )
    }
}

/// Outline level of a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutlineLevel {
    #[default]
    BodyText,
    Level1,
    Level2,
    Level3,
    Level4,
    Level5,
    Level6,
    Level7,
    Level8,
    Level9,
}

/// Whether a style applies to whole paragraphs or to character runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StyleType {
    #[default]
    Paragraph,
    Character,
}

/// Special characters that have no plain-text representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolName {
    Blank,
    En,
    Em,
    EmQuarter,
    Tab,
    LineBreak,
    NonBreakableBlank,
    NonBreakingHyphen,
    SoftHyphen,
    Bullet,
    Euro,
    Copyright,
    Trademark,
    RegisteredTrademark,
}

/// Vertical alignment of cell content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAlignment {
    #[default]
    Top,
    Center,
    Bottom,
}

/// Horizontal alignment of table rows on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowAlignment {
    #[default]
    Left,
    Center,
    Right,
}

/// How a row's height is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowHeightRule {
    #[default]
    AtLeast,
    Auto,
    Exactly,
}

/// Text wrapping around a floating shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapStyle {
    #[default]
    TopBottom,
    None,
    Through,
}

/// Horizontal anchor of a floating shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RelativeHorizontal {
    Character,
    #[default]
    Column,
    Margin,
    Page,
}

/// Vertical anchor of a floating shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RelativeVertical {
    Line,
    Margin,
    Page,
    #[default]
    Paragraph,
}

/// Named position of a floating shape relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapePosition {
    Top,
    Bottom,
    Center,
    Left,
    Right,
    Inside,
    Outside,
}

/// Dash pattern of a shape outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashStyle {
    #[default]
    Solid,
    Dash,
    DashDot,
    DashDotDot,
    SquareDot,
}

/// Page orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// Where a section starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BreakType {
    Continuous,
    #[default]
    BreakNextPage,
    BreakEvenPage,
    BreakOddPage,
}

/// Placement of footnotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FootnoteLocation {
    #[default]
    BottomOfPage,
    EndOfDocument,
}

/// Numbering of footnote reference marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FootnoteNumberStyle {
    #[default]
    Arabic,
    LowercaseLetter,
    UppercaseLetter,
    LowercaseRoman,
    UppercaseRoman,
}

/// Numbering of page numbers within a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageNumberStyle {
    #[default]
    Arabic,
    LowercaseLetter,
    UppercaseLetter,
    LowercaseRoman,
    UppercaseRoman,
}

/// Target kind of a hyperlink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HyperlinkType {
    /// Bookmark inside the document
    Local,
    #[default]
    Web,
    File,
}

/// Document property shown by an info field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoFieldName {
    Title,
    Author,
    Subject,
    Keywords,
}

/// Kind of chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartType {
    Line,
    #[default]
    Column,
    Bar,
    Area,
    Pie,
}
