//! Font, color and list tables.
//!
//! RTF refers to fonts, colors and lists by their position in tables written
//! in the header, so every resource must be known before the first byte of
//! the body. [`Resources::collect`] walks the whole document once and fills
//! the tables in order of first appearance. Looking up a resource that the
//! walk did not see is a bug in the walk and panics.

use std::io::{self, Write};
use std::rc::Rc;

use phf::phf_map;

use super::writer::RtfWriter;
use crate::common::{Color, RGBColor};
use crate::document::{Document, ListInfo, ResourceVisitor, Styles, Visit};

/// Faces every font table starts with; list bullets are drawn from them.
pub const SYMBOL_FONT: &str = "Symbol";
pub const COURIER_FONT: &str = "Courier New";
pub const WINGDINGS_FONT: &str = "Wingdings";

/// Font family control word and character set of well-known faces.
static FONT_FAMILIES: phf::Map<&'static str, (&'static str, i32)> = phf_map! {
    "symbol" => ("froman", 2),
    "wingdings" => ("fnil", 2),
    "webdings" => ("fnil", 2),
    "courier" => ("fmodern", 0),
    "courier new" => ("fmodern", 0),
    "consolas" => ("fmodern", 0),
    "lucida console" => ("fmodern", 0),
    "times" => ("froman", 0),
    "times new roman" => ("froman", 0),
    "georgia" => ("froman", 0),
    "cambria" => ("froman", 0),
    "garamond" => ("froman", 0),
    "arial" => ("fswiss", 0),
    "helvetica" => ("fswiss", 0),
    "verdana" => ("fswiss", 0),
    "tahoma" => ("fswiss", 0),
    "calibri" => ("fswiss", 0),
    "segoe ui" => ("fswiss", 0),
    "comic sans ms" => ("fscript", 0),
    "marlett" => ("ftech", 2),
};

/// Family token and charset of a face; unknown faces are `\fnil` with ANSI charset.
pub fn font_family(name: &str) -> (&'static str, i32) {
    FONT_FAMILIES
        .get(name.to_ascii_lowercase().as_str())
        .copied()
        .unwrap_or(("fnil", 0))
}

/// Ordered font table.
#[derive(Debug, Clone)]
pub struct FontTable {
    names: Vec<String>,
}

impl Default for FontTable {
    fn default() -> Self {
        Self {
            names: vec![
                SYMBOL_FONT.to_string(),
                COURIER_FONT.to_string(),
                WINGDINGS_FONT.to_string(),
            ],
        }
    }
}

impl FontTable {
    /// Add a face unless a face of the same name (ignoring ASCII case) exists.
    pub fn add(&mut self, name: &str) {
        if name.is_empty() || self.position(name).is_some() {
            return;
        }
        self.names.push(name.to_string());
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n.eq_ignore_ascii_case(name))
    }

    /// Table index of a face.
    ///
    /// # Panics
    ///
    /// Panics if the face was never added.
    pub fn index_of(&self, name: &str) -> i32 {
        match self.position(name) {
            Some(i) => i as i32,
            None => panic!("font {:?} missing from the font table", name),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Write `{\fonttbl ...}`.
    pub fn render<W: Write>(&self, writer: &mut RtfWriter<W>) -> io::Result<()> {
        writer.start_group()?;
        writer.control("fonttbl")?;
        for (i, name) in self.names.iter().enumerate() {
            let (family, charset) = font_family(name);
            writer.start_group()?;
            writer.control_value("f", i as i32)?;
            writer.control(family)?;
            writer.control_value("fcharset", charset)?;
            writer.write_text(name)?;
            writer.write_separator()?;
            writer.end_group()?;
        }
        writer.end_group()
    }
}

/// Ordered color table. Colors are stored after transparency mixing, so two
/// colors that mix to the same RGB share an entry.
#[derive(Debug, Clone)]
pub struct ColorTable {
    colors: Vec<RGBColor>,
}

impl Default for ColorTable {
    fn default() -> Self {
        Self {
            colors: vec![RGBColor::BLACK],
        }
    }
}

impl ColorTable {
    pub fn add(&mut self, color: &Color) {
        let rgb = color.mix_transparency();
        if !self.colors.contains(&rgb) {
            self.colors.push(rgb);
        }
    }

    /// Table index of a color.
    ///
    /// # Panics
    ///
    /// Panics if the color was never added.
    pub fn index_of(&self, color: &Color) -> i32 {
        let rgb = color.mix_transparency();
        match self.colors.iter().position(|c| *c == rgb) {
            Some(i) => i as i32,
            None => panic!("color {} missing from the color table", rgb),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Write `{\colortbl ...}`.
    pub fn render<W: Write>(&self, writer: &mut RtfWriter<W>) -> io::Result<()> {
        writer.start_group()?;
        writer.control("colortbl")?;
        for color in &self.colors {
            writer.control_value("red", i32::from(color.r))?;
            writer.control_value("green", i32::from(color.g))?;
            writer.control_value("blue", i32::from(color.b))?;
            writer.write_separator()?;
        }
        writer.end_group()
    }
}

/// One list usage: a template (`\listid`) and the override paragraphs refer to (`\ls`).
#[derive(Debug, Clone)]
pub struct ListEntry {
    pub info: Rc<ListInfo>,
    pub list_id: i32,
    pub override_id: i32,
    /// `false` when the entry continues an earlier list and shares its ids
    pub defines_list: bool,
}

/// Distinct lists of the document, keyed by `Rc` identity.
#[derive(Debug, Clone, Default)]
pub struct ListTable {
    entries: Vec<ListEntry>,
    next_id: i32,
}

impl ListTable {
    pub fn add(&mut self, info: &Rc<ListInfo>) {
        if self.entries.iter().any(|e| Rc::ptr_eq(&e.info, info)) {
            return;
        }
        let previous = self.entries.last().filter(|_| info.continue_previous_list);
        let entry = match previous {
            Some(prev) => ListEntry {
                info: Rc::clone(info),
                list_id: prev.list_id,
                override_id: prev.override_id,
                defines_list: false,
            },
            None => {
                self.next_id += 1;
                ListEntry {
                    info: Rc::clone(info),
                    list_id: self.next_id,
                    override_id: self.next_id,
                    defines_list: true,
                }
            },
        };
        self.entries.push(entry);
    }

    /// The `\ls` number of a list.
    ///
    /// # Panics
    ///
    /// Panics if the list was never added.
    pub fn index_of(&self, info: &Rc<ListInfo>) -> i32 {
        match self.entries.iter().find(|e| Rc::ptr_eq(&e.info, info)) {
            Some(entry) => entry.override_id,
            None => panic!("list {:?} missing from the list table", info),
        }
    }

    /// Entries that define a new list, in table order.
    pub fn definitions(&self) -> impl Iterator<Item = &ListEntry> {
        self.entries.iter().filter(|e| e.defines_list)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The three tables plus the style names that could not be resolved.
#[derive(Debug, Clone, Default)]
pub struct Resources {
    pub fonts: FontTable,
    pub colors: ColorTable,
    pub lists: ListTable,
    pub undefined_styles: Vec<String>,
}

impl Resources {
    /// Walk the document and collect every resource it references.
    pub fn collect(document: &Document) -> Self {
        let mut collector = Collector {
            styles: &document.styles,
            resources: Resources::default(),
        };
        document.visit(&mut collector);
        collector.resources
    }
}

struct Collector<'a> {
    styles: &'a Styles,
    resources: Resources,
}

impl ResourceVisitor for Collector<'_> {
    fn color(&mut self, color: &Color) {
        self.resources.colors.add(color);
    }

    fn font_name(&mut self, name: &str) {
        self.resources.fonts.add(name);
    }

    fn list_info(&mut self, info: &Rc<ListInfo>) {
        self.resources.lists.add(info);
    }

    fn style_ref(&mut self, name: &str) {
        let undefined = &mut self.resources.undefined_styles;
        if self.styles.get(name).is_none() && !undefined.iter().any(|n| n == name) {
            undefined.push(name.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Font, ListType, Paragraph};

    #[test]
    fn test_font_table_seed_and_dedup() {
        let mut fonts = FontTable::default();
        fonts.add("Arial");
        fonts.add("arial");
        fonts.add("courier new");
        assert_eq!(fonts.len(), 4);
        assert_eq!(fonts.index_of(SYMBOL_FONT), 0);
        assert_eq!(fonts.index_of("ARIAL"), 3);
    }

    #[test]
    #[should_panic(expected = "missing from the font table")]
    fn test_font_lookup_miss_panics() {
        FontTable::default().index_of("Nope");
    }

    #[test]
    fn test_color_normalization() {
        let mut colors = ColorTable::default();
        let a = Color::rgba(255, 0, 0, 0.5);
        let b = Color::rgba(255, 0, 0, 0.5);
        let opaque_equivalent = Color::rgb(255, 128, 128);
        colors.add(&a);
        colors.add(&b);
        assert_eq!(colors.len(), 2);
        assert_eq!(colors.index_of(&a), colors.index_of(&opaque_equivalent));
        assert_eq!(colors.index_of(&Color::rgb(0, 0, 0)), 0);
    }

    #[test]
    fn test_list_identity_and_continuation() {
        let first = ListInfo::new(ListType::NumberList1);
        let same_value = ListInfo::new(ListType::NumberList1);
        let continued = Rc::new(ListInfo {
            list_type: ListType::NumberList2,
            continue_previous_list: true,
            ..ListInfo::default()
        });
        let mut lists = ListTable::default();
        lists.add(&first);
        lists.add(&first);
        lists.add(&same_value);
        lists.add(&continued);
        assert_eq!(lists.index_of(&first), 1);
        assert_eq!(lists.index_of(&same_value), 2);
        assert_eq!(lists.index_of(&continued), 2);
        assert_eq!(lists.definitions().count(), 2);
    }

    #[test]
    fn test_collect_reports_undefined_styles() {
        let mut doc = Document::new();
        let mut p = Paragraph::with_text("x").with_style("Missing");
        p.format.font = Font::named("Georgia");
        doc.add_section().add(p);
        let resources = Resources::collect(&doc);
        assert_eq!(resources.undefined_styles, vec!["Missing".to_string()]);
        assert!(resources.fonts.index_of("Georgia") > 2);
        assert!(resources.fonts.index_of("Arial") > 2);
    }

    #[test]
    fn test_font_family_lookup() {
        assert_eq!(font_family("Times New Roman"), ("froman", 0));
        assert_eq!(font_family("Symbol"), ("froman", 2));
        assert_eq!(font_family("Unknown Sans"), ("fnil", 0));
    }
}
