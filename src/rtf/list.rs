//! List table and list override table.
//!
//! Every distinct list of the document becomes a three-level template in
//! `\listtable` and an override in `\listoverridetable`; paragraphs refer to
//! the override through `\ls`. A list continuing the previous one shares its
//! ids and defines nothing of its own.

use super::resources::{COURIER_FONT, ListEntry, SYMBOL_FONT, WINGDINGS_FONT};
use super::session::RenderSession;
use crate::common::unit::to_twips;
use crate::common::{Length, Result};

/// `\levelnfc` codes.
const NFC_DECIMAL: i32 = 0;
const NFC_LOWER_ROMAN: i32 = 2;
const NFC_LOWER_LETTER: i32 = 4;
const NFC_BULLET: i32 = 23;

/// Bullet characters and faces of the three levels.
const BULLETS: [(char, &str); 3] = [
    ('\u{F0B7}', SYMBOL_FONT),
    ('o', COURIER_FONT),
    ('\u{F0A7}', WINGDINGS_FONT),
];

/// Number formats of the three levels.
const NUMBERS: [i32; 3] = [NFC_DECIMAL, NFC_LOWER_LETTER, NFC_LOWER_ROMAN];

fn default_number_position() -> Length {
    Length::from_inch(0.25)
}

/// Write `\'hh`.
fn write_escaped_byte(session: &mut RenderSession<'_>, value: u8) -> Result<()> {
    session.writer.control_unpadded("'")?;
    session.writer.write_hex(u32::from(value))?;
    Ok(())
}

fn render_level(session: &mut RenderSession<'_>, entry: &ListEntry, level: u8) -> Result<()> {
    let bullet = entry.info.list_type.is_bullet();
    let nfc = if bullet {
        NFC_BULLET
    } else {
        NUMBERS[usize::from(level)]
    };
    let position = to_twips(entry.info.number_position.unwrap_or_else(default_number_position));

    let writer = &mut session.writer;
    writer.start_group()?;
    writer.control("listlevel")?;
    writer.control_value("levelnfc", nfc)?;
    writer.control_value("levelnfcn", nfc)?;
    writer.control_value("leveljc", 0)?;
    writer.control_value("leveljcn", 0)?;
    writer.control_value("levelfollow", 0)?;
    writer.control_value("levelstartat", 1)?;

    writer.start_group()?;
    writer.control("leveltext")?;
    if bullet {
        write_escaped_byte(session, 1)?;
        let mut buf = [0u8; 4];
        session.writer.write_text(BULLETS[usize::from(level)].0.encode_utf8(&mut buf))?;
    } else {
        // "%N." : placeholder for the level's number and a period
        write_escaped_byte(session, 2)?;
        write_escaped_byte(session, level)?;
        session.writer.write_text(".")?;
    }
    session.writer.write_separator()?;
    session.writer.end_group()?;

    session.writer.start_group()?;
    session.writer.control("levelnumbers")?;
    if !bullet {
        write_escaped_byte(session, 1)?;
    }
    session.writer.write_separator()?;
    session.writer.end_group()?;

    if bullet {
        let font = session.font_index(BULLETS[usize::from(level)].1);
        session.writer.control_value("f", font)?;
    }
    let indent = position * (i32::from(level) + 1);
    session.writer.control_value("fi", -position)?;
    session.writer.control_value("li", indent)?;
    session.writer.control_value("lin", indent)?;
    session.writer.end_group()?;
    Ok(())
}

pub(crate) fn render_list_tables(session: &mut RenderSession<'_>) -> Result<()> {
    if session.lists.is_empty() {
        return Ok(());
    }
    let entries: Vec<ListEntry> = session.lists.definitions().cloned().collect();

    session.writer.start_group()?;
    session.writer.control_star("listtable", None)?;
    for entry in &entries {
        session.writer.start_group()?;
        session.writer.control("list")?;
        session.writer.control_value("listtemplateid", entry.list_id)?;
        for level in 0..3 {
            render_level(session, entry, level)?;
        }
        session.writer.start_group()?;
        session.writer.control("listname")?;
        session.writer.write_separator()?;
        session.writer.end_group()?;
        session.writer.control_value("listid", entry.list_id)?;
        session.writer.end_group()?;
    }
    session.writer.end_group()?;
    session.line_break()?;

    session.writer.start_group()?;
    session.writer.control_star("listoverridetable", None)?;
    for entry in &entries {
        session.writer.start_group()?;
        session.writer.control("listoverride")?;
        session.writer.control_value("listid", entry.list_id)?;
        session.writer.control_value("listoverridecount", 0)?;
        session.writer.control_value("ls", entry.override_id)?;
        session.writer.end_group()?;
    }
    session.writer.end_group()?;
    session.line_break()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Document, ListInfo, ListType, Paragraph};
    use crate::rtf::session::capture;
    use std::rc::Rc;

    fn list_paragraph(info: &Rc<ListInfo>) -> Paragraph {
        let mut p = Paragraph::with_text("item");
        p.format.list_info = Some(Rc::clone(info));
        p
    }

    #[test]
    fn test_no_lists_no_tables() {
        let doc = Document::new();
        let (out, _) = capture(&doc, render_list_tables);
        assert_eq!(out, "");
    }

    #[test]
    fn test_bullet_list_levels() {
        let mut doc = Document::new();
        let info = ListInfo::new(ListType::BulletList1);
        doc.add_section().add(list_paragraph(&info));
        let (out, _) = capture(&doc, render_list_tables);
        assert!(out.starts_with("{\\*\\listtable{\\list\\listtemplateid1{\\listlevel\\levelnfc23"), "{}", out);
        assert!(out.contains("{\\leveltext\\'01\\u-3913?;}{\\levelnumbers;}\\f0\\fi-360\\li360\\lin360}"), "{}", out);
        assert!(out.contains("{\\leveltext\\'01o;}{\\levelnumbers;}\\f1\\fi-360\\li720"));
        assert!(out.contains("\\u-3929?;}"));
        assert!(out.contains("{\\listname;}\\listid1}}"));
        assert!(out.ends_with("{\\*\\listoverridetable{\\listoverride\\listid1\\listoverridecount0\\ls1}}"));
    }

    #[test]
    fn test_number_list_levels() {
        let mut doc = Document::new();
        let info = Rc::new(ListInfo {
            list_type: ListType::NumberList2,
            number_position: Some(Length::from_inch(0.5)),
            continue_previous_list: false,
        });
        doc.add_section().add(list_paragraph(&info));
        let (out, _) = capture(&doc, render_list_tables);
        assert!(out.contains("\\levelnfc0\\levelnfcn0"));
        assert!(out.contains("{\\leveltext\\'02\\'01.;}{\\levelnumbers\\'01;}\\fi-720\\li1440"), "{}", out);
        assert!(out.contains("\\levelnfc2\\levelnfcn2"));
    }

    #[test]
    fn test_continued_list_shares_override() {
        let mut doc = Document::new();
        let first = ListInfo::new(ListType::NumberList1);
        let second = Rc::new(ListInfo {
            list_type: ListType::NumberList1,
            number_position: None,
            continue_previous_list: true,
        });
        let fresh = ListInfo::new(ListType::NumberList1);
        let section = doc.add_section();
        section.add(list_paragraph(&first));
        section.add(list_paragraph(&second));
        section.add(list_paragraph(&fresh));
        let (out, _) = capture(&doc, render_list_tables);
        assert_eq!(out.matches("{\\list\\").count(), 2);
        assert_eq!(out.matches("{\\listoverride\\").count(), 2);
        assert!(out.contains("\\ls2}"));
    }
}
