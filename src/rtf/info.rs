//! The `\info` group with the document's title, author, subject and keywords.

use super::session::RenderSession;
use crate::common::Result;

pub(crate) fn render_info(session: &mut RenderSession<'_>) -> Result<()> {
    let document = session.document;
    let info = &document.info;
    if info.is_empty() {
        return Ok(());
    }
    let entries = [
        ("title", info.title.as_str()),
        ("author", info.author.as_str()),
        ("subject", info.subject.as_str()),
        ("keywords", info.keywords.as_str()),
    ];
    let writer = &mut session.writer;
    writer.start_group()?;
    writer.control("info")?;
    for (word, value) in entries.into_iter().filter(|(_, v)| !v.is_empty()) {
        writer.start_group()?;
        writer.control(word)?;
        writer.write_text(value)?;
        writer.end_group()?;
    }
    writer.end_group()?;
    session.line_break()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::rtf::session::capture;

    #[test]
    fn test_empty_info_is_omitted() {
        let doc = Document::new();
        let (out, _) = capture(&doc, render_info);
        assert_eq!(out, "");
    }

    #[test]
    fn test_only_set_entries() {
        let mut doc = Document::new();
        doc.info.title = "Report".into();
        doc.info.keywords = "q1, sales".into();
        let (out, _) = capture(&doc, render_info);
        assert_eq!(out, "{\\info{\\title Report}{\\keywords q1, sales}}");
    }
}
