//! Typed walk over every resource-bearing property of the model.
//!
//! Renderers that reference resources by table position (fonts, colors,
//! lists) need to know every such resource before writing anything. [`Visit`]
//! enumerates all of them, including ones nested in formats, borders, shading
//! and shape outlines, whether or not they end up visible.

use std::rc::Rc;

use super::doc::Document;
use super::element::Block;
use super::format::{Border, Borders, Font, ListInfo, ParagraphFormat, Shading};
use super::paragraph::{Inline, Paragraph};
use super::section::{HeaderFooter, HeadersFooters, Section};
use super::shape::{ShapeFormat, TextFrame};
use super::style::{Style, Styles};
use super::table::Table;
use crate::common::Color;

/// Receiver of the resources found during a walk.
pub trait ResourceVisitor {
    fn color(&mut self, color: &Color);
    fn font_name(&mut self, name: &str);
    fn list_info(&mut self, info: &Rc<ListInfo>);
    /// A style referenced by name from a paragraph, cell or base style
    fn style_ref(&mut self, name: &str);
}

/// Types that can report their resources to a [`ResourceVisitor`].
pub trait Visit {
    fn visit(&self, v: &mut dyn ResourceVisitor);
}

impl<T: Visit> Visit for Option<T> {
    fn visit(&self, v: &mut dyn ResourceVisitor) {
        if let Some(inner) = self {
            inner.visit(v);
        }
    }
}

impl<T: Visit> Visit for [T] {
    fn visit(&self, v: &mut dyn ResourceVisitor) {
        for item in self {
            item.visit(v);
        }
    }
}

impl<T: Visit> Visit for Vec<T> {
    fn visit(&self, v: &mut dyn ResourceVisitor) {
        self.as_slice().visit(v);
    }
}

impl<T: Visit + ?Sized> Visit for Box<T> {
    fn visit(&self, v: &mut dyn ResourceVisitor) {
        (**self).visit(v);
    }
}

fn visit_style_name(name: &Option<String>, v: &mut dyn ResourceVisitor) {
    if let Some(name) = name {
        v.style_ref(name);
    }
}

impl Visit for Color {
    fn visit(&self, v: &mut dyn ResourceVisitor) {
        v.color(self);
    }
}

impl Visit for Font {
    fn visit(&self, v: &mut dyn ResourceVisitor) {
        if let Some(name) = &self.name {
            v.font_name(name);
        }
        self.color.visit(v);
    }
}

impl Visit for Border {
    fn visit(&self, v: &mut dyn ResourceVisitor) {
        self.color.visit(v);
    }
}

impl Visit for Borders {
    fn visit(&self, v: &mut dyn ResourceVisitor) {
        self.top.visit(v);
        self.left.visit(v);
        self.bottom.visit(v);
        self.right.visit(v);
        self.diagonal_down.visit(v);
        self.diagonal_up.visit(v);
    }
}

impl Visit for Shading {
    fn visit(&self, v: &mut dyn ResourceVisitor) {
        self.color.visit(v);
    }
}

impl Visit for ParagraphFormat {
    fn visit(&self, v: &mut dyn ResourceVisitor) {
        if let Some(info) = &self.list_info {
            v.list_info(info);
        }
        self.borders.visit(v);
        self.shading.visit(v);
        self.font.visit(v);
    }
}

impl Visit for Style {
    fn visit(&self, v: &mut dyn ResourceVisitor) {
        visit_style_name(&self.base_style, v);
        self.paragraph_format.visit(v);
    }
}

impl Visit for Styles {
    fn visit(&self, v: &mut dyn ResourceVisitor) {
        for style in self {
            style.visit(v);
        }
    }
}

impl Visit for ShapeFormat {
    fn visit(&self, v: &mut dyn ResourceVisitor) {
        self.line_format.color.visit(v);
        self.fill_format.color.visit(v);
    }
}

impl Visit for TextFrame {
    fn visit(&self, v: &mut dyn ResourceVisitor) {
        self.shape.visit(v);
        self.elements.visit(v);
    }
}

impl Visit for Inline {
    fn visit(&self, v: &mut dyn ResourceVisitor) {
        match self {
            Inline::Text(_) | Inline::Character(_) | Inline::Field(_) => {},
            Inline::FormattedText(ft) => {
                visit_style_name(&ft.style, v);
                ft.font.visit(v);
                ft.elements.visit(v);
            },
            Inline::Hyperlink(h) => {
                h.font.visit(v);
                h.elements.visit(v);
            },
            Inline::Footnote(f) => {
                visit_style_name(&f.style, v);
                f.format.visit(v);
                f.elements.visit(v);
            },
            Inline::Image(i) => i.shape.visit(v),
            Inline::Chart(c) => c.shape.visit(v),
            Inline::TextFrame(t) => t.visit(v),
        }
    }
}

impl Visit for Paragraph {
    fn visit(&self, v: &mut dyn ResourceVisitor) {
        visit_style_name(&self.style, v);
        self.format.visit(v);
        self.elements.visit(v);
    }
}

impl Visit for Table {
    fn visit(&self, v: &mut dyn ResourceVisitor) {
        visit_style_name(&self.style, v);
        self.format.visit(v);
        self.borders.visit(v);
        self.shading.visit(v);
        for column in &self.columns {
            column.format.visit(v);
            column.borders.visit(v);
            column.shading.visit(v);
        }
        for row in &self.rows.rows {
            row.format.visit(v);
            row.borders.visit(v);
            row.shading.visit(v);
            for cell in &row.cells {
                visit_style_name(&cell.style, v);
                cell.format.visit(v);
                cell.borders.visit(v);
                cell.shading.visit(v);
                cell.elements.visit(v);
            }
        }
    }
}

impl Visit for Block {
    fn visit(&self, v: &mut dyn ResourceVisitor) {
        match self {
            Block::Paragraph(p) => p.visit(v),
            Block::Table(t) => t.visit(v),
            Block::Image(i) => i.shape.visit(v),
            Block::Chart(c) => c.shape.visit(v),
            Block::TextFrame(t) => t.visit(v),
            Block::PageBreak => {},
        }
    }
}

impl Visit for HeaderFooter {
    fn visit(&self, v: &mut dyn ResourceVisitor) {
        visit_style_name(&self.style, v);
        self.format.visit(v);
        self.elements.visit(v);
    }
}

impl Visit for HeadersFooters {
    fn visit(&self, v: &mut dyn ResourceVisitor) {
        self.primary.visit(v);
        self.first_page.visit(v);
        self.even_page.visit(v);
    }
}

impl Visit for Section {
    fn visit(&self, v: &mut dyn ResourceVisitor) {
        self.headers.visit(v);
        self.footers.visit(v);
        self.elements.visit(v);
    }
}

impl Visit for Document {
    fn visit(&self, v: &mut dyn ResourceVisitor) {
        self.styles.visit(v);
        self.sections.visit(v);
    }
}
