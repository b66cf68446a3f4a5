//! Sections: page setup, headers and footers, then the section body.

use super::base::{Container, Scope};
use super::factory::render_blocks;
use super::session::RenderSession;
use crate::common::Result;
use crate::document::style::{FOOTER, HEADER};
use crate::document::{HeaderFooter, HeadersFooters, Orientation, PageSetup, Section};

/// Control words of one header/footer family.
struct Family {
    default_style: &'static str,
    all: &'static str,
    odd: &'static str,
    even: &'static str,
    first: &'static str,
}

const HEADERS: Family = Family {
    default_style: HEADER,
    all: "header",
    odd: "headerr",
    even: "headerl",
    first: "headerf",
};

const FOOTERS: Family = Family {
    default_style: FOOTER,
    all: "footer",
    odd: "footerr",
    even: "footerl",
    first: "footerf",
};

/// Render section `index` of the document.
pub(crate) fn render_section(session: &mut RenderSession<'_>, section: &Section, index: usize) -> Result<()> {
    log::debug!("rendering section {}", index);
    if index > 0 {
        session.writer.control("sect")?;
    }
    session.writer.control("sectd")?;
    let setup = session.document.effective_page_setup(section);
    render_page_setup(session, &setup)?;
    session.line_break()?;

    render_headers_footers(session, &section.headers, &setup, &HEADERS)?;
    render_headers_footers(session, &section.footers, &setup, &FOOTERS)?;
    render_blocks(session, &section.elements, Scope::new(Container::Section))?;
    Ok(())
}

pub(crate) fn render_page_setup(session: &mut RenderSession<'_>, setup: &PageSetup) -> Result<()> {
    session.translate("sbk", setup.section_start)?;

    let (mut width, mut height) = (setup.page_width, setup.page_height);
    if setup.orientation == Some(Orientation::Landscape) {
        if let (Some(w), Some(h)) = (width, height) {
            if w.points() < h.points() {
                (width, height) = (Some(h), Some(w));
            }
        }
    }
    session.translate("pgwsxn", width)?;
    session.translate("pghsxn", height)?;
    session.translate("lndscpsxn", setup.orientation)?;
    session.translate("marglsxn", setup.left_margin)?;
    session.translate("margrsxn", setup.right_margin)?;
    session.translate("margtsxn", setup.top_margin)?;
    session.translate("margbsxn", setup.bottom_margin)?;
    session.translate("headery", setup.header_distance)?;
    session.translate("footery", setup.footer_distance)?;
    session.translate("titlepg", setup.different_first_page_header_footer)?;
    if let Some(start) = setup.starting_number {
        session.writer.control("pgnrestart")?;
        session.writer.control_value("pgnstarts", start)?;
    }
    session.translate("pgn", setup.page_number_style)?;
    Ok(())
}

fn render_headers_footers(
    session: &mut RenderSession<'_>,
    set: &HeadersFooters,
    setup: &PageSetup,
    family: &Family,
) -> Result<()> {
    if setup.odd_and_even_pages_header_footer == Some(true) {
        if let Some(primary) = &set.primary {
            render_header_footer(session, primary, family.odd, family.default_style)?;
        }
        if let Some(even) = &set.even_page {
            render_header_footer(session, even, family.even, family.default_style)?;
        }
    } else if let Some(primary) = &set.primary {
        render_header_footer(session, primary, family.all, family.default_style)?;
    }
    if setup.different_first_page_header_footer == Some(true) {
        if let Some(first) = &set.first_page {
            render_header_footer(session, first, family.first, family.default_style)?;
        }
    }
    Ok(())
}

fn render_header_footer(
    session: &mut RenderSession<'_>,
    header: &HeaderFooter,
    word: &str,
    default_style: &str,
) -> Result<()> {
    let style = header.style.as_deref().unwrap_or(default_style);
    session.writer.start_group()?;
    session.writer.control(word)?;
    let scope = Scope::new(Container::HeaderFooter).with_base(Some(style), Some(&header.format));
    render_blocks(session, &header.elements, scope)?;
    session.writer.end_group()?;
    session.line_break()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Length;
    use crate::document::{BreakType, Document, PageNumberStyle, Paragraph};
    use crate::rtf::session::capture;

    #[test]
    fn test_a4_page_setup() {
        let doc = Document::new();
        let setup = PageSetup::a4();
        let (out, _) = capture(&doc, |s| render_page_setup(s, &setup));
        assert_eq!(
            out,
            "\\sbkpage\\pgwsxn11906\\pghsxn16838\\marglsxn1417\\margrsxn1417\\margtsxn1417\\margbsxn1134\\headery709\\footery709"
        );
    }

    #[test]
    fn test_landscape_swaps_dimensions() {
        let doc = Document::new();
        let setup = PageSetup {
            orientation: Some(Orientation::Landscape),
            section_start: Some(BreakType::Continuous),
            starting_number: Some(3),
            page_number_style: Some(PageNumberStyle::UppercaseRoman),
            ..PageSetup::a4()
        };
        let (out, _) = capture(&doc, |s| render_page_setup(s, &setup));
        assert!(out.starts_with("\\sbknone\\pgwsxn16838\\pghsxn11906\\lndscpsxn"));
        assert!(out.ends_with("\\pgnrestart\\pgnstarts3\\pgnucrm"));
    }

    #[test]
    fn test_headers_for_odd_even_and_first_page() {
        let mut doc = Document::new();
        let section = doc.add_section();
        section.page_setup.odd_and_even_pages_header_footer = Some(true);
        section.page_setup.different_first_page_header_footer = Some(true);
        for slot in [
            &mut section.headers.primary,
            &mut section.headers.even_page,
            &mut section.headers.first_page,
        ] {
            let mut header = HeaderFooter::default();
            header.add(Paragraph::with_text("h"));
            *slot = Some(header);
        }
        let doc = doc;
        let (out, _) = capture(&doc, |s| render_section(s, &doc.sections[0], 0));
        let header = doc.styles.index_of(HEADER).unwrap();
        let odd = out.find("{\\headerr\\pard\\plain").unwrap();
        let even = out.find("{\\headerl").unwrap();
        let first = out.find("{\\headerf").unwrap();
        assert!(odd < even && even < first);
        assert!(out.contains(&format!("{{\\headerr\\pard\\plain\\s{}", header)));
        assert!(!out.contains("{\\header\\"));
        assert!(out.contains("\\titlepg"));
    }

    #[test]
    fn test_sections_are_separated() {
        let mut doc = Document::new();
        doc.add_section().add(Paragraph::with_text("one"));
        doc.add_section().page_setup.left_margin = Some(Length::from_cm(1.0));
        let doc = doc;
        let (first, _) = capture(&doc, |s| render_section(s, &doc.sections[0], 0));
        let (second, _) = capture(&doc, |s| render_section(s, &doc.sections[1], 1));
        assert!(first.starts_with("\\sectd\\sbkpage"));
        assert!(second.starts_with("\\sect\\sectd"));
        assert!(second.contains("\\marglsxn567"));
    }
}
