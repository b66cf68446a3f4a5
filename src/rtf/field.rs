//! Fields: page numbers, cross references, bookmarks, dates and document
//! properties.
//!
//! Every field is written as `{\field{\*\fldinst INSTRUCTION}{\fldrslt RESULT}}`.
//! The reader computes the result; it is left empty except for document
//! properties, whose value is known.

use super::date_format::translate_date_pattern;
use super::diagnostics::DiagnosticKind;
use super::session::RenderSession;
use crate::common::Result;
use crate::document::{Field, InfoFieldName};

/// Numeric formats Word understands as `\*` switches.
const NUMBER_FORMATS: [&str; 4] = ["ROMAN", "roman", "ALPHABETIC", "alphabetic"];

/// Write a field group.
pub(crate) fn write_field(
    session: &mut RenderSession<'_>,
    instruction: &str,
    result: impl FnOnce(&mut RenderSession<'_>) -> Result<()>,
) -> Result<()> {
    let writer = &mut session.writer;
    writer.start_group()?;
    writer.control("field")?;
    writer.start_group()?;
    writer.control_star("fldinst", None)?;
    writer.write_text(instruction)?;
    writer.end_group()?;
    writer.start_group()?;
    writer.control("fldrslt")?;
    result(session)?;
    session.writer.end_group()?;
    session.writer.end_group()?;
    Ok(())
}

/// Instruction of a numeric field with its optional format switch.
fn numeric_instruction(session: &mut RenderSession<'_>, base: &str, format: &str) -> String {
    if format.is_empty() {
        return base.to_string();
    }
    if NUMBER_FORMATS.contains(&format) {
        return format!("{} \\* {}", base, format);
    }
    session.warn(
        DiagnosticKind::Unsupported,
        format!("unknown number format {:?} for {} field ignored", format, base),
    );
    base.to_string()
}

fn info_field(name: InfoFieldName) -> &'static str {
    match name {
        InfoFieldName::Title => "TITLE",
        InfoFieldName::Author => "AUTHOR",
        InfoFieldName::Subject => "SUBJECT",
        InfoFieldName::Keywords => "KEYWORDS",
    }
}

/// Write `{\*\bkmkstart name}{\*\bkmkend name}`.
pub(crate) fn render_bookmark(session: &mut RenderSession<'_>, name: &str) -> Result<()> {
    for word in ["bkmkstart", "bkmkend"] {
        session.writer.start_group()?;
        session.writer.control_star(word, None)?;
        session.writer.write_text(name)?;
        session.writer.end_group()?;
    }
    Ok(())
}

/// Render a field.
pub(crate) fn render_field(session: &mut RenderSession<'_>, field: &Field) -> Result<()> {
    let empty = |_: &mut RenderSession<'_>| Ok(());
    match field {
        Field::Page(f) => {
            let instruction = numeric_instruction(session, "PAGE", &f.format);
            write_field(session, &instruction, empty)
        },
        Field::NumPages(f) => {
            let instruction = numeric_instruction(session, "NUMPAGES", &f.format);
            write_field(session, &instruction, empty)
        },
        Field::Section(f) => {
            let instruction = numeric_instruction(session, "SECTION", &f.format);
            write_field(session, &instruction, empty)
        },
        Field::SectionPages(f) => {
            let instruction = numeric_instruction(session, "SECTIONPAGES", &f.format);
            write_field(session, &instruction, empty)
        },
        Field::PageRef(f) => {
            let base = format!("PAGEREF {}", f.name);
            let instruction = numeric_instruction(session, &base, &f.format);
            write_field(session, &instruction, empty)
        },
        Field::Bookmark(name) => render_bookmark(session, name),
        Field::Date(f) => {
            let translated = translate_date_pattern(&f.format, &session.options.date_locale);
            for warning in translated.warnings {
                session.warn(DiagnosticKind::Unsupported, warning);
            }
            let instruction = if translated.picture.is_empty() {
                "DATE".to_string()
            } else {
                format!("DATE \\@ \"{}\"", translated.picture)
            };
            write_field(session, &instruction, empty)
        },
        Field::Info(name) => {
            let document = session.document;
            let info = &document.info;
            let value = match name {
                InfoFieldName::Title => info.title.as_str(),
                InfoFieldName::Author => info.author.as_str(),
                InfoFieldName::Subject => info.subject.as_str(),
                InfoFieldName::Keywords => info.keywords.as_str(),
            };
            write_field(session, info_field(*name), |session| {
                session.writer.write_text(value)?;
                Ok(())
            })
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{DateField, Document, NumericField, PageRefField};
    use crate::rtf::session::capture;

    fn render(doc: &Document, field: Field) -> (String, usize) {
        let (out, report) = capture(doc, |s| render_field(s, &field));
        (out, report.diagnostics.len())
    }

    #[test]
    fn test_page_field_with_format() {
        let doc = Document::new();
        let (out, warnings) = render(&doc, Field::Page(NumericField::with_format("ROMAN")));
        assert_eq!(out, "{\\field{\\*\\fldinst PAGE \\\\* ROMAN}{\\fldrslt}}");
        assert_eq!(warnings, 0);
    }

    #[test]
    fn test_unknown_number_format_warns() {
        let doc = Document::new();
        let (out, warnings) = render(&doc, Field::NumPages(NumericField::with_format("hex")));
        assert_eq!(out, "{\\field{\\*\\fldinst NUMPAGES}{\\fldrslt}}");
        assert_eq!(warnings, 1);
    }

    #[test]
    fn test_date_field() {
        let doc = Document::new();
        let (out, _) = render(&doc, Field::Date(DateField::new("yyyy-MM-dd")));
        assert_eq!(
            out,
            "{\\field{\\*\\fldinst DATE \\\\@ \"yyyy'-'MM'-'dd\"}{\\fldrslt}}"
        );
        let (bare, _) = render(&doc, Field::Date(DateField::default()));
        assert_eq!(bare, "{\\field{\\*\\fldinst DATE}{\\fldrslt}}");
    }

    #[test]
    fn test_page_ref_and_bookmark() {
        let doc = Document::new();
        let field = Field::PageRef(PageRefField {
            name: "summary".into(),
            format: String::new(),
        });
        let (out, _) = render(&doc, field);
        assert!(out.contains("\\fldinst PAGEREF summary}"));
        let (out, _) = render(&doc, Field::Bookmark("summary".into()));
        assert_eq!(out, "{\\*\\bkmkstart summary}{\\*\\bkmkend summary}");
    }

    #[test]
    fn test_info_field_carries_value() {
        let mut doc = Document::new();
        doc.info.title = "Annual Report".into();
        let (out, _) = render(&doc, Field::Info(InfoFieldName::Title));
        assert_eq!(out, "{\\field{\\*\\fldinst TITLE}{\\fldrslt Annual Report}}");
    }
}
