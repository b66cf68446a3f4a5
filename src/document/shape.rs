//! Shapes: images, charts and text frames.

use std::path::PathBuf;

use super::element::Block;
use super::types::{
    ChartType, DashStyle, RelativeHorizontal, RelativeVertical, ShapePosition, WrapStyle,
};
use crate::common::{Color, Length};

/// Horizontal or vertical placement of a floating shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeOffset {
    /// Distance from the anchor
    Offset(Length),
    /// Named position relative to the anchor
    Position(ShapePosition),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WrapFormat {
    pub style: Option<WrapStyle>,
    pub distance_top: Option<Length>,
    pub distance_bottom: Option<Length>,
    pub distance_left: Option<Length>,
    pub distance_right: Option<Length>,
}

/// Outline of a shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineFormat {
    pub visible: Option<bool>,
    pub width: Option<Length>,
    pub color: Option<Color>,
    pub dash_style: Option<DashStyle>,
}

impl LineFormat {
    /// Whether an outline is drawn.
    pub fn is_visible(&self) -> bool {
        self.visible
            .unwrap_or(self.width.is_some() || self.color.is_some())
    }

    /// Width the outline adds around the shape's content box.
    pub fn effective_width(&self) -> Length {
        if self.is_visible() {
            self.width.unwrap_or(Length::from_point(1.0))
        } else {
            Length::ZERO
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FillFormat {
    pub visible: Option<bool>,
    pub color: Option<Color>,
}

/// Placement and decoration shared by every shape kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeFormat {
    pub left: Option<ShapeOffset>,
    pub top: Option<ShapeOffset>,
    pub relative_horizontal: Option<RelativeHorizontal>,
    pub relative_vertical: Option<RelativeVertical>,
    pub wrap_format: WrapFormat,
    pub line_format: LineFormat,
    pub fill_format: FillFormat,
}

/// Where image bytes come from.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageSource {
    /// Path to an image file, relative paths resolve against the render options
    File(PathBuf),
    /// In-memory image; `extension` names the format ("png", "jpg", ...)
    Data { bytes: Vec<u8>, extension: String },
}

impl ImageSource {
    /// Lower-cased format extension.
    pub fn extension(&self) -> Option<String> {
        match self {
            ImageSource::File(path) => path
                .extension()
                .and_then(|e| e.to_str())
                .map(str::to_ascii_lowercase),
            ImageSource::Data { extension, .. } => {
                Some(extension.trim_start_matches('.').to_ascii_lowercase())
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PictureFormat {
    pub crop_left: Option<Length>,
    pub crop_right: Option<Length>,
    pub crop_top: Option<Length>,
    pub crop_bottom: Option<Length>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub source: ImageSource,
    pub width: Option<Length>,
    pub height: Option<Length>,
    pub scale_width: Option<f64>,
    pub scale_height: Option<f64>,
    pub lock_aspect_ratio: Option<bool>,
    /// Pixels per inch used when the image carries none
    pub resolution: Option<f64>,
    pub picture_format: PictureFormat,
    pub shape: ShapeFormat,
}

impl Image {
    pub fn new(source: ImageSource) -> Self {
        Self {
            source,
            width: None,
            height: None,
            scale_width: None,
            scale_height: None,
            lock_aspect_ratio: None,
            resolution: None,
            picture_format: PictureFormat::default(),
            shape: ShapeFormat::default(),
        }
    }

    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self::new(ImageSource::File(path.into()))
    }
}

/// A named data series of a chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
}

/// Chart data. Charts are rasterised by a caller-supplied rasteriser.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Chart {
    pub chart_type: ChartType,
    pub title: Option<String>,
    pub categories: Vec<String>,
    pub series: Vec<Series>,
    pub width: Option<Length>,
    pub height: Option<Length>,
    pub shape: ShapeFormat,
}

/// A positioned box holding block content.
#[derive(Debug, Clone, Default)]
pub struct TextFrame {
    pub width: Option<Length>,
    pub height: Option<Length>,
    pub margin_left: Option<Length>,
    pub margin_right: Option<Length>,
    pub margin_top: Option<Length>,
    pub margin_bottom: Option<Length>,
    pub shape: ShapeFormat,
    pub elements: Vec<Block>,
}
