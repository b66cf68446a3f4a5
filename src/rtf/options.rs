//! Configuration for RTF rendering.
//!
//! This module defines the options that control how a document is turned into
//! RTF: where relative image paths are resolved, how date field patterns are
//! localised, how charts are rasterised and whether the output is broken into
//! lines for readability.

use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::common::Result;
use crate::document::Chart;

/// Turns a chart into a PNG image.
///
/// RTF has no chart objects, so charts are embedded as pictures. The renderer
/// creates a scratch file, asks the rasterizer to write a PNG of the requested
/// pixel size into it and embeds the result. The scratch file is removed
/// afterwards whatever the outcome.
pub trait ChartRasterizer {
    /// Write `chart` as a PNG of `width` x `height` pixels to `target`.
    fn rasterize(&self, chart: &Chart, width: u32, height: u32, target: &Path) -> Result<()>;
}

/// Locale data used to translate date field patterns.
///
/// The one-letter standard patterns (`d`, `D`, `t`, `T`, `g`, `G`) expand to
/// the patterns below; `/` and `:` in a pattern stand for the date and time
/// separators.
///
/// # Examples
///
/// ```rust
/// use rambutan::rtf::DateLocale;
///
/// let german = DateLocale::new()
///     .with_separators(".", ":")
///     .with_short_date("dd.MM.yyyy")
///     .with_long_date("dddd, d. MMMM yyyy");
/// assert_eq!(german.expand("d"), "dd.MM.yyyy");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateLocale {
    pub date_separator: String,
    pub time_separator: String,
    pub short_date: String,
    pub long_date: String,
    pub short_time: String,
    pub long_time: String,
}

impl Default for DateLocale {
    fn default() -> Self {
        Self {
            date_separator: "/".to_string(),
            time_separator: ":".to_string(),
            short_date: "MM/dd/yyyy".to_string(),
            long_date: "dddd, dd MMMM yyyy".to_string(),
            short_time: "HH:mm".to_string(),
            long_time: "HH:mm:ss".to_string(),
        }
    }
}

impl DateLocale {
    /// Create the invariant locale.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_separators(mut self, date: impl Into<String>, time: impl Into<String>) -> Self {
        self.date_separator = date.into();
        self.time_separator = time.into();
        self
    }

    #[inline]
    pub fn with_short_date(mut self, pattern: impl Into<String>) -> Self {
        self.short_date = pattern.into();
        self
    }

    #[inline]
    pub fn with_long_date(mut self, pattern: impl Into<String>) -> Self {
        self.long_date = pattern.into();
        self
    }

    #[inline]
    pub fn with_short_time(mut self, pattern: impl Into<String>) -> Self {
        self.short_time = pattern.into();
        self
    }

    #[inline]
    pub fn with_long_time(mut self, pattern: impl Into<String>) -> Self {
        self.long_time = pattern.into();
        self
    }

    /// Expand a standard one-letter pattern; any other pattern is returned as is.
    pub fn expand<'p>(&self, pattern: &'p str) -> Cow<'p, str> {
        match pattern {
            "d" => Cow::Owned(self.short_date.clone()),
            "D" => Cow::Owned(self.long_date.clone()),
            "t" => Cow::Owned(self.short_time.clone()),
            "T" => Cow::Owned(self.long_time.clone()),
            "g" => Cow::Owned(format!("{} {}", self.short_date, self.short_time)),
            "G" => Cow::Owned(format!("{} {}", self.short_date, self.long_time)),
            other => Cow::Borrowed(other),
        }
    }
}

/// Configuration options for RTF rendering.
///
/// # Examples
///
/// ```rust
/// use rambutan::rtf::RenderOptions;
///
/// let options = RenderOptions::new()
///     .with_image_root("assets")
///     .with_line_breaks(false);
/// ```
#[derive(Clone)]
pub struct RenderOptions {
    /// Base directory for relative image paths
    pub image_root: Option<PathBuf>,
    /// Locale used by date fields
    pub date_locale: DateLocale,
    /// Rasterizer used for charts; charts are skipped without one
    pub chart_rasterizer: Option<Rc<dyn ChartRasterizer>>,
    /// Write a line break after paragraphs, rows and table entries
    pub line_breaks: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            image_root: None,
            date_locale: DateLocale::default(),
            chart_rasterizer: None,
            line_breaks: true,
        }
    }
}

impl fmt::Debug for RenderOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderOptions")
            .field("image_root", &self.image_root)
            .field("date_locale", &self.date_locale)
            .field("chart_rasterizer", &self.chart_rasterizer.is_some())
            .field("line_breaks", &self.line_breaks)
            .finish()
    }
}

impl RenderOptions {
    /// Create a new `RenderOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the directory relative image paths are resolved against.
    #[inline]
    pub fn with_image_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.image_root = Some(root.into());
        self
    }

    #[inline]
    pub fn with_date_locale(mut self, locale: DateLocale) -> Self {
        self.date_locale = locale;
        self
    }

    /// Set the chart rasterizer.
    #[inline]
    pub fn with_chart_rasterizer(mut self, rasterizer: Rc<dyn ChartRasterizer>) -> Self {
        self.chart_rasterizer = Some(rasterizer);
        self
    }

    /// Set whether line breaks are written for readability.
    ///
    /// Readers ignore them; disabling them gives the most compact output.
    #[inline]
    pub fn with_line_breaks(mut self, enabled: bool) -> Self {
        self.line_breaks = enabled;
        self
    }

    /// Resolve an image path against [`RenderOptions::image_root`].
    pub fn resolve_image_path<'p>(&self, path: &'p Path) -> Cow<'p, Path> {
        match &self.image_root {
            Some(root) if path.is_relative() => Cow::Owned(root.join(path)),
            _ => Cow::Borrowed(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_patterns() {
        let locale = DateLocale::new();
        assert_eq!(locale.expand("d"), "MM/dd/yyyy");
        assert_eq!(locale.expand("G"), "MM/dd/yyyy HH:mm:ss");
        assert_eq!(locale.expand("yyyy"), "yyyy");
    }

    #[test]
    fn test_image_path_resolution() {
        let options = RenderOptions::new().with_image_root("/data");
        assert_eq!(
            options.resolve_image_path(Path::new("logo.png")),
            Path::new("/data/logo.png")
        );
        assert_eq!(
            options.resolve_image_path(Path::new("/abs/logo.png")),
            Path::new("/abs/logo.png")
        );
    }
}
