//! Fields: content computed by the reading application.

use super::types::InfoFieldName;

/// A field placed inside a paragraph.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    /// Current page number
    Page(NumericField),
    /// Total page count
    NumPages(NumericField),
    /// Current section number
    Section(NumericField),
    /// Page count of the current section
    SectionPages(NumericField),
    /// Page number of a bookmark
    PageRef(PageRefField),
    /// Bookmark target
    Bookmark(String),
    /// Current date/time
    Date(DateField),
    /// Document property
    Info(InfoFieldName),
}

/// Number format of a numeric field.
///
/// Recognised formats are `""`, `"ROMAN"`, `"roman"`, `"ALPHABETIC"` and
/// `"alphabetic"`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumericField {
    pub format: String,
}

impl NumericField {
    pub fn with_format(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageRefField {
    pub name: String,
    pub format: String,
}

/// Date field with a .NET-style date pattern (`"yyyy-MM-dd"`, `"D"`, ...).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateField {
    pub format: String,
}

impl DateField {
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
        }
    }
}
