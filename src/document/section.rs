//! Sections, page setup, headers and footers.

use super::element::Block;
use super::format::ParagraphFormat;
use super::types::{BreakType, Orientation, PageNumberStyle};
use crate::common::Length;

/// Page geometry of a section. Unset fields fall back to the document default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageSetup {
    pub page_width: Option<Length>,
    pub page_height: Option<Length>,
    pub orientation: Option<Orientation>,
    pub top_margin: Option<Length>,
    pub bottom_margin: Option<Length>,
    pub left_margin: Option<Length>,
    pub right_margin: Option<Length>,
    pub header_distance: Option<Length>,
    pub footer_distance: Option<Length>,
    pub section_start: Option<BreakType>,
    pub different_first_page_header_footer: Option<bool>,
    pub odd_and_even_pages_header_footer: Option<bool>,
    /// Only honoured on the first section; RTF has a single document-wide switch
    pub mirror_margins: Option<bool>,
    pub starting_number: Option<i32>,
    pub page_number_style: Option<PageNumberStyle>,
}

impl PageSetup {
    /// A4 portrait with 2.5cm margins.
    pub fn a4() -> Self {
        Self {
            page_width: Some(Length::from_mm(210.0)),
            page_height: Some(Length::from_mm(297.0)),
            orientation: Some(Orientation::Portrait),
            top_margin: Some(Length::from_cm(2.5)),
            bottom_margin: Some(Length::from_cm(2.0)),
            left_margin: Some(Length::from_cm(2.5)),
            right_margin: Some(Length::from_cm(2.5)),
            header_distance: Some(Length::from_cm(1.25)),
            footer_distance: Some(Length::from_cm(1.25)),
            section_start: Some(BreakType::BreakNextPage),
            different_first_page_header_footer: Some(false),
            odd_and_even_pages_header_footer: Some(false),
            mirror_margins: Some(false),
            starting_number: None,
            page_number_style: None,
        }
    }

    /// Fill unset fields from `base`.
    pub fn inherit_from(&self, base: &PageSetup) -> PageSetup {
        PageSetup {
            page_width: self.page_width.or(base.page_width),
            page_height: self.page_height.or(base.page_height),
            orientation: self.orientation.or(base.orientation),
            top_margin: self.top_margin.or(base.top_margin),
            bottom_margin: self.bottom_margin.or(base.bottom_margin),
            left_margin: self.left_margin.or(base.left_margin),
            right_margin: self.right_margin.or(base.right_margin),
            header_distance: self.header_distance.or(base.header_distance),
            footer_distance: self.footer_distance.or(base.footer_distance),
            section_start: self.section_start.or(base.section_start),
            different_first_page_header_footer: self
                .different_first_page_header_footer
                .or(base.different_first_page_header_footer),
            odd_and_even_pages_header_footer: self
                .odd_and_even_pages_header_footer
                .or(base.odd_and_even_pages_header_footer),
            mirror_margins: self.mirror_margins.or(base.mirror_margins),
            starting_number: self.starting_number.or(base.starting_number),
            page_number_style: self.page_number_style.or(base.page_number_style),
        }
    }
}

/// Header or footer content.
#[derive(Debug, Clone, Default)]
pub struct HeaderFooter {
    pub style: Option<String>,
    pub format: ParagraphFormat,
    pub elements: Vec<Block>,
}

impl HeaderFooter {
    pub fn add(&mut self, block: impl Into<Block>) -> &mut Self {
        self.elements.push(block.into());
        self
    }
}

/// The header (or footer) variants of a section.
#[derive(Debug, Clone, Default)]
pub struct HeadersFooters {
    pub primary: Option<HeaderFooter>,
    pub first_page: Option<HeaderFooter>,
    pub even_page: Option<HeaderFooter>,
}

impl HeadersFooters {
    pub fn is_empty(&self) -> bool {
        self.primary.is_none() && self.first_page.is_none() && self.even_page.is_none()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Section {
    pub page_setup: PageSetup,
    pub headers: HeadersFooters,
    pub footers: HeadersFooters,
    pub elements: Vec<Block>,
}

impl Section {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, block: impl Into<Block>) -> &mut Self {
        self.elements.push(block.into());
        self
    }
}
