//! Charts are embedded as pictures rasterised by the configured
//! [`ChartRasterizer`](super::options::ChartRasterizer).

use super::base::Scope;
use super::diagnostics::DiagnosticKind;
use super::picture::render_image;
use super::session::RenderSession;
use crate::common::{Length, Result};
use crate::document::{Chart, Image, ImageSource};

/// Resolution charts are rasterised at.
const CHART_DPI: f64 = 96.0;

fn default_width() -> Length {
    Length::from_cm(12.0)
}

fn default_height() -> Length {
    Length::from_cm(8.0)
}

fn pixels(length: Length) -> u32 {
    (length.inches() * CHART_DPI).round().max(1.0) as u32
}

pub(crate) fn render_chart(session: &mut RenderSession<'_>, chart: &Chart, scope: Scope<'_>) -> Result<()> {
    let options = session.options;
    let Some(rasterizer) = options.chart_rasterizer.as_deref() else {
        session.warn(DiagnosticKind::Unsupported, "chart skipped: no chart rasterizer configured");
        return Ok(());
    };
    let width = chart.width.unwrap_or_else(default_width);
    let height = chart.height.unwrap_or_else(default_height);

    let scratch = match tempfile::Builder::new()
        .prefix("rambutan-chart-")
        .suffix(".png")
        .tempfile()
    {
        Ok(file) => file,
        Err(err) => {
            session.warn(DiagnosticKind::Resource, format!("chart scratch file: {}", err));
            return Ok(());
        },
    };
    log::debug!("rasterizing chart to {}", scratch.path().display());
    let rasterized = rasterizer
        .rasterize(chart, pixels(width), pixels(height), scratch.path())
        .and_then(|()| Ok(std::fs::read(scratch.path())?));
    // removes the scratch file
    drop(scratch);

    let bytes = match rasterized {
        Ok(bytes) => bytes,
        Err(err) => {
            session.warn(DiagnosticKind::Resource, format!("chart could not be rasterized: {}", err));
            return Ok(());
        },
    };
    let image = Image {
        width: Some(width),
        height: Some(height),
        resolution: Some(CHART_DPI),
        shape: chart.shape.clone(),
        ..Image::new(ImageSource::Data {
            bytes,
            extension: "png".into(),
        })
    };
    render_image(session, &image, scope)
}
