//! Picture embedding.
//!
//! PNG and JPEG data is embedded unchanged. GIF and BMP are re-encoded to
//! PNG, and Windows metafiles keep their native records. A picture that
//! cannot be read or decoded is reported and left out of the output.

use std::borrow::Cow;
use std::io::Cursor;

use image::{ImageFormat, ImageReader};
use phf::phf_map;

use super::base::Scope;
use super::diagnostics::DiagnosticKind;
use super::paragraph::render_wrapper_paragraph;
use super::session::RenderSession;
use super::shape::{
    Placement, ShapeKind, ShapeSize, placement, render_floating, render_line_properties,
    requests_position,
};
use crate::common::unit::to_twips;
use crate::common::{Error, Length, Result};
use crate::document::{Image, ImageSource};

/// Image formats that can be embedded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageType {
    Png,
    Jpeg,
    Gif,
    Bmp,
    /// Windows Metafile with a placeable header
    Wmf,
    /// Enhanced Metafile
    Emf,
}

static EXTENSIONS: phf::Map<&'static str, ImageType> = phf_map! {
    "png" => ImageType::Png,
    "jpg" => ImageType::Jpeg,
    "jpeg" => ImageType::Jpeg,
    "jpe" => ImageType::Jpeg,
    "gif" => ImageType::Gif,
    "bmp" => ImageType::Bmp,
    "dib" => ImageType::Bmp,
    "wmf" => ImageType::Wmf,
    "emf" => ImageType::Emf,
};

impl ImageType {
    /// Look up a lower-cased file extension.
    pub fn from_extension(extension: &str) -> Option<Self> {
        EXTENSIONS.get(extension).copied()
    }
}

/// Detect image type from binary signature.
pub fn detect_image_type(data: &[u8]) -> Option<ImageType> {
    if data.starts_with(&[0xFF, 0xD8]) {
        return Some(ImageType::Jpeg);
    }
    if data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
        return Some(ImageType::Png);
    }
    if data.starts_with(b"GIF8") {
        return Some(ImageType::Gif);
    }
    // EMR_HEADER record with the " EMF" signature at offset 40
    if data.len() >= 44 && data[0..4] == [0x01, 0x00, 0x00, 0x00] && &data[40..44] == b" EMF" {
        return Some(ImageType::Emf);
    }
    if data.starts_with(&[0xD7, 0xCD, 0xC6, 0x9A]) {
        return Some(ImageType::Wmf);
    }
    if data.starts_with(b"BM") {
        return Some(ImageType::Bmp);
    }
    None
}

/// Blip kinds written after `\pict`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Blip {
    Png,
    Jpeg,
    Wmf,
    Emf,
}

impl Blip {
    fn write(self, session: &mut RenderSession<'_>) -> Result<()> {
        match self {
            Blip::Png => session.writer.control("pngblip")?,
            Blip::Jpeg => session.writer.control("jpegblip")?,
            Blip::Wmf => session.writer.control_value("wmetafile", 8)?,
            Blip::Emf => session.writer.control("emfblip")?,
        }
        Ok(())
    }
}

const WMF_PLACEABLE_HEADER: usize = 22;

/// A decoded picture ready to be embedded.
#[derive(Debug)]
struct Picture<'a> {
    blip: Blip,
    data: Cow<'a, [u8]>,
    /// `\picw`/`\pich`: pixels for bitmaps, hundredths of a millimetre for metafiles
    extent: (i32, i32),
    /// Size at 100% before cropping
    natural: (Length, Length),
}

fn read_i16(data: &[u8], at: usize) -> i32 {
    i32::from(i16::from_le_bytes([data[at], data[at + 1]]))
}

fn read_i32(data: &[u8], at: usize) -> i32 {
    i32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
}

fn bitmap_size(width: u32, height: u32, dpi: f64) -> (Length, Length) {
    (
        Length::from_inch(f64::from(width) / dpi),
        Length::from_inch(f64::from(height) / dpi),
    )
}

fn decode(data: Cow<'_, [u8]>, image_type: ImageType, dpi: f64) -> Result<Picture<'_>> {
    match image_type {
        ImageType::Png | ImageType::Jpeg => {
            let (width, height) = ImageReader::new(Cursor::new(&*data))
                .with_guessed_format()?
                .into_dimensions()?;
            let blip = if image_type == ImageType::Png { Blip::Png } else { Blip::Jpeg };
            Ok(Picture {
                blip,
                data,
                extent: (width as i32, height as i32),
                natural: bitmap_size(width, height, dpi),
            })
        },
        ImageType::Gif | ImageType::Bmp => {
            let decoded = image::load_from_memory(&data)?;
            let mut png = Vec::new();
            decoded.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
            Ok(Picture {
                blip: Blip::Png,
                data: Cow::Owned(png),
                extent: (decoded.width() as i32, decoded.height() as i32),
                natural: bitmap_size(decoded.width(), decoded.height(), dpi),
            })
        },
        ImageType::Emf => {
            if data.len() < 44 {
                return Err(Error::Image("truncated EMF header".into()));
            }
            // rclFrame, in hundredths of a millimetre
            let width = read_i32(&data, 32) - read_i32(&data, 24);
            let height = read_i32(&data, 36) - read_i32(&data, 28);
            Ok(Picture {
                blip: Blip::Emf,
                data,
                extent: (width, height),
                natural: (
                    Length::from_mm(f64::from(width) / 100.0),
                    Length::from_mm(f64::from(height) / 100.0),
                ),
            })
        },
        ImageType::Wmf => {
            if data.len() <= WMF_PLACEABLE_HEADER {
                return Err(Error::Image("truncated WMF header".into()));
            }
            let units_per_inch = f64::from(u16::from_le_bytes([data[14], data[15]]).max(1));
            let width = f64::from(read_i16(&data, 10) - read_i16(&data, 6)) / units_per_inch;
            let height = f64::from(read_i16(&data, 12) - read_i16(&data, 8)) / units_per_inch;
            let natural = (Length::from_inch(width), Length::from_inch(height));
            let records = match data {
                Cow::Borrowed(bytes) => Cow::Borrowed(&bytes[WMF_PLACEABLE_HEADER..]),
                Cow::Owned(mut bytes) => {
                    bytes.drain(..WMF_PLACEABLE_HEADER);
                    Cow::Owned(bytes)
                },
            };
            Ok(Picture {
                blip: Blip::Wmf,
                data: records,
                extent: ((width * 2540.0).round() as i32, (height * 2540.0).round() as i32),
                natural,
            })
        },
    }
}

/// Read and decode the picture of an image, reporting failures.
fn load<'i>(session: &mut RenderSession<'_>, image: &'i Image) -> Option<Picture<'i>> {
    let (data, label): (Cow<'i, [u8]>, Cow<'_, str>) = match &image.source {
        ImageSource::File(path) => {
            let resolved = session.options.resolve_image_path(path);
            match std::fs::read(&resolved) {
                Ok(bytes) => (Cow::Owned(bytes), resolved.to_string_lossy().into_owned().into()),
                Err(err) => {
                    session.warn(
                        DiagnosticKind::Resource,
                        format!("image {} could not be read: {}", resolved.display(), err),
                    );
                    return None;
                },
            }
        },
        ImageSource::Data { bytes, .. } => (Cow::Borrowed(bytes.as_slice()), "in-memory image".into()),
    };

    let image_type = detect_image_type(&data)
        .or_else(|| image.source.extension().as_deref().and_then(ImageType::from_extension));
    let Some(image_type) = image_type else {
        session.warn(
            DiagnosticKind::Unsupported,
            format!("{} has an unsupported image format", label),
        );
        return None;
    };

    match decode(data, image_type, image.resolution.unwrap_or(72.0)) {
        Ok(picture) => Some(picture),
        Err(err) => {
            session.warn(
                DiagnosticKind::Resource,
                format!("{} could not be decoded: {}", label, err),
            );
            None
        },
    }
}

/// Rendered size from the image's explicit size, aspect lock and scale.
fn display_size(image: &Image, natural: (Length, Length)) -> ShapeSize {
    let (nw, nh) = natural;
    let lock = image.lock_aspect_ratio.unwrap_or(true);
    let ratio = |part: Length, whole: Length| {
        if whole.is_zero() { 1.0 } else { part.points() / whole.points() }
    };
    let (width, height) = match (image.width, image.height) {
        (Some(w), Some(h)) => (w, h),
        (Some(w), None) if lock => (w, nh * ratio(w, nw)),
        (Some(w), None) => (w, nh),
        (None, Some(h)) if lock => (nw * ratio(h, nh), h),
        (None, Some(h)) => (nw, h),
        (None, None) => (nw, nh),
    };
    let (scale_x, scale_y) = match (image.scale_width, image.scale_height) {
        (Some(x), None) if lock => (x, x),
        (None, Some(y)) if lock => (y, y),
        (x, y) => (x.unwrap_or(1.0), y.unwrap_or(1.0)),
    };
    ShapeSize {
        width: width * scale_x,
        height: height * scale_y,
    }
}

/// Write the `{\pict ...}` group.
fn write_pict(session: &mut RenderSession<'_>, image: &Image, picture: &Picture<'_>, size: ShapeSize, inline: bool) -> Result<()> {
    let crop = &image.picture_format;
    let crop_left = crop.crop_left.unwrap_or(Length::ZERO);
    let crop_right = crop.crop_right.unwrap_or(Length::ZERO);
    let crop_top = crop.crop_top.unwrap_or(Length::ZERO);
    let crop_bottom = crop.crop_bottom.unwrap_or(Length::ZERO);
    let (nw, nh) = picture.natural;
    let visible_w = to_twips(nw - crop_left - crop_right);
    let visible_h = to_twips(nh - crop_top - crop_bottom);
    let scale = |target: Length, visible: i32| {
        if visible <= 0 {
            100
        } else {
            (100.0 * f64::from(to_twips(target)) / f64::from(visible)).round() as i32
        }
    };

    session.writer.start_group()?;
    session.writer.control("pict")?;
    if inline && image.shape.line_format.is_visible() {
        session.writer.start_group()?;
        session.writer.control_star("picprop", None)?;
        render_line_properties(session, &image.shape.line_format)?;
        session.writer.end_group()?;
    }
    picture.blip.write(session)?;
    let writer = &mut session.writer;
    writer.control_value("picw", picture.extent.0)?;
    writer.control_value("pich", picture.extent.1)?;
    writer.control_value("picwgoal", to_twips(nw))?;
    writer.control_value("pichgoal", to_twips(nh))?;
    writer.control_value("picscalex", scale(size.width, visible_w))?;
    writer.control_value("picscaley", scale(size.height, visible_h))?;
    writer.control_value("piccropl", to_twips(crop_left))?;
    writer.control_value("piccropr", to_twips(crop_right))?;
    writer.control_value("piccropt", to_twips(crop_top))?;
    writer.control_value("piccropb", to_twips(crop_bottom))?;
    writer.write_hex_data(&picture.data)?;
    writer.end_group()?;
    Ok(())
}

/// Render an image in the given scope.
pub(crate) fn render_image(session: &mut RenderSession<'_>, image: &Image, scope: Scope<'_>) -> Result<()> {
    let Some(picture) = load(session, image) else {
        return Ok(());
    };
    let size = display_size(image, picture.natural);
    log::trace!("image {:?} at {} x {}", picture.blip, size.width, size.height);

    // inline pictures draw their outline inside the picture box
    let inline_size = size.with_line(&image.shape.line_format);
    match placement(&scope) {
        Placement::Inline => write_pict(session, image, &picture, inline_size, true),
        Placement::InlineWrapped => {
            if requests_position(&image.shape) {
                session.warn(
                    DiagnosticKind::Unsupported,
                    format!("image positioning ignored inside {:?}", scope.container),
                );
            }
            render_wrapper_paragraph(session, scope, |s| write_pict(s, image, &picture, inline_size, true))
        },
        Placement::Floating => render_wrapper_paragraph(session, scope, |s| {
            render_floating(s, &image.shape, size, ShapeKind::PictureFrame, |s| {
                s.writer.start_group()?;
                s.writer.control("sp")?;
                s.writer.start_group()?;
                s.writer.control("sn")?;
                s.writer.write_text("pib")?;
                s.writer.end_group()?;
                s.writer.start_group()?;
                s.writer.control("sv")?;
                write_pict(s, image, &picture, size, false)?;
                s.writer.end_group()?;
                s.writer.end_group()?;
                Ok(())
            })
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Document, LineFormat, RelativeVertical, ShapeOffset, WrapStyle};
    use crate::rtf::base::Container;
    use crate::rtf::session::capture;
    use image::{DynamicImage, RgbImage, RgbaImage};

    fn png(width: u32, height: u32) -> Vec<u8> {
        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(RgbImage::new(width, height))
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    fn png_image(width: u32, height: u32) -> Image {
        Image::new(ImageSource::Data {
            bytes: png(width, height),
            extension: "png".into(),
        })
    }

    #[test]
    fn test_detect_image_type() {
        assert_eq!(detect_image_type(&png(1, 1)), Some(ImageType::Png));
        assert_eq!(detect_image_type(&[0xFF, 0xD8, 0xFF, 0xE0]), Some(ImageType::Jpeg));
        assert_eq!(detect_image_type(b"GIF89a"), Some(ImageType::Gif));
        assert_eq!(detect_image_type(b"BM\0\0"), Some(ImageType::Bmp));
        assert_eq!(detect_image_type(&[0xD7, 0xCD, 0xC6, 0x9A, 0, 0]), Some(ImageType::Wmf));
        assert_eq!(detect_image_type(b"plain text"), None);
        assert_eq!(ImageType::from_extension("jpeg"), Some(ImageType::Jpeg));
        assert_eq!(ImageType::from_extension("tiff"), None);
    }

    #[test]
    fn test_inline_png() {
        let doc = Document::new();
        let image = png_image(4, 2);
        let (out, report) = capture(&doc, |s| render_image(s, &image, Scope::new(Container::Paragraph)));
        assert!(report.is_clean());
        assert!(
            out.starts_with(
                "{\\pict\\pngblip\\picw4\\pich2\\picwgoal80\\pichgoal40\\picscalex100\\picscaley100\
                 \\piccropl0\\piccropr0\\piccropt0\\piccropb0 89504e47"
            ),
            "{}",
            out
        );
        assert!(out.ends_with('}'));
    }

    #[test]
    fn test_width_keeps_aspect_ratio() {
        let mut image = png_image(4, 2);
        image.width = Some(Length::from_point(8.0));
        let size = display_size(&image, (Length::from_point(4.0), Length::from_point(2.0)));
        assert_eq!(size.height, Length::from_point(4.0));

        image.lock_aspect_ratio = Some(false);
        let size = display_size(&image, (Length::from_point(4.0), Length::from_point(2.0)));
        assert_eq!(size.height, Length::from_point(2.0));

        image.scale_width = Some(0.5);
        image.lock_aspect_ratio = None;
        let size = display_size(&image, (Length::from_point(4.0), Length::from_point(2.0)));
        assert_eq!(size.width, Length::from_point(4.0));
        assert_eq!(size.height, Length::from_point(2.0));
    }

    #[test]
    fn test_gif_is_reencoded_as_png() {
        let mut gif = Vec::new();
        DynamicImage::ImageRgba8(RgbaImage::new(3, 3))
            .write_to(&mut Cursor::new(&mut gif), ImageFormat::Gif)
            .unwrap();
        let doc = Document::new();
        let image = Image::new(ImageSource::Data {
            bytes: gif,
            extension: "gif".into(),
        });
        let (out, _) = capture(&doc, |s| render_image(s, &image, Scope::new(Container::Paragraph)));
        assert!(out.contains("\\pngblip\\picw3\\pich3"));
    }

    #[test]
    fn test_missing_file_is_reported() {
        let doc = Document::new();
        let image = Image::from_file("/nonexistent/rambutan/missing.png");
        let (out, report) = capture(&doc, |s| render_image(s, &image, Scope::new(Container::Section)));
        assert_eq!(out, "");
        assert_eq!(report.of_kind(DiagnosticKind::Resource).count(), 1);
    }

    #[test]
    fn test_unknown_format_is_reported() {
        let doc = Document::new();
        let image = Image::new(ImageSource::Data {
            bytes: b"not an image".to_vec(),
            extension: "xyz".into(),
        });
        let (out, report) = capture(&doc, |s| render_image(s, &image, Scope::new(Container::Paragraph)));
        assert_eq!(out, "");
        assert_eq!(report.of_kind(DiagnosticKind::Unsupported).count(), 1);
    }

    #[test]
    fn test_image_from_file_relative_to_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("dot.png"), png(1, 1)).unwrap();
        let doc = Document::new();
        let image = Image::from_file("dot.png");
        let options = crate::rtf::RenderOptions::new()
            .with_image_root(dir.path())
            .with_line_breaks(false);
        let (out, report) = crate::rtf::session::capture_with(&doc, &options, |s| {
            render_image(s, &image, Scope::new(Container::Paragraph))
        });
        assert!(report.is_clean());
        assert!(out.contains("\\picw1\\pich1"));
    }

    #[test]
    fn test_floating_image_in_section() {
        let doc = Document::new();
        let mut image = png_image(2, 2);
        image.shape.top = Some(ShapeOffset::Offset(Length::from_point(5.0)));
        let (out, _) = capture(&doc, |s| render_image(s, &image, Scope::new(Container::Section)));
        assert!(out.starts_with("\\pard\\plain{\\shp{\\*\\shpinst\\shpleft0\\shptop100"), "{}", out);
        assert!(out.contains("{\\sp{\\sn shapeType}{\\sv 75}}"));
        assert!(out.contains("{\\sp{\\sn pib}{\\sv{\\pict\\pngblip"));
        assert!(out.ends_with("}}}}}\\par"));
    }

    #[test]
    fn test_positioned_image_in_cell_is_inline() {
        let doc = Document::new();
        let mut image = png_image(2, 2);
        image.shape.left = Some(ShapeOffset::Offset(Length::from_point(5.0)));
        let (out, report) = capture(&doc, |s| render_image(s, &image, Scope::new(Container::Cell)));
        assert!(out.starts_with("\\pard\\intbl\\plain{\\pict"));
        assert_eq!(report.of_kind(DiagnosticKind::Unsupported).count(), 1);
    }

    #[test]
    fn test_positioned_image_in_paragraph_stays_inline() {
        let doc = Document::new();
        let mut image = png_image(2, 2);
        image.shape.top = Some(ShapeOffset::Offset(Length::from_point(5.0)));
        image.shape.relative_vertical = Some(RelativeVertical::Page);
        image.shape.wrap_format.style = Some(WrapStyle::Through);
        let (out, report) = capture(&doc, |s| render_image(s, &image, Scope::new(Container::Paragraph)));
        assert!(out.starts_with("{\\pict\\pngblip"), "{}", out);
        assert!(!out.contains("\\shp"));
        assert!(report.is_clean());
    }

    #[test]
    fn test_inline_outline_grows_picture() {
        let doc = Document::new();
        let mut image = png_image(4, 2);
        image.shape.line_format = LineFormat {
            visible: Some(true),
            width: Some(Length::from_point(2.0)),
            ..LineFormat::default()
        };
        let (out, report) = capture(&doc, |s| render_image(s, &image, Scope::new(Container::Paragraph)));
        assert!(report.is_clean());
        assert!(out.starts_with("{\\pict{\\*\\picprop{\\sp{\\sn fLine}{\\sv 1}}"), "{}", out);
        assert!(out.contains("\\picwgoal80\\pichgoal40\\picscalex150\\picscaley200"), "{}", out);
    }

    #[test]
    fn test_wmf_header_is_stripped() {
        let mut wmf = vec![0xD7, 0xCD, 0xC6, 0x9A, 0, 0];
        for v in [0i16, 0, 1440, 720] {
            wmf.extend_from_slice(&v.to_le_bytes());
        }
        wmf.extend_from_slice(&1440u16.to_le_bytes());
        wmf.extend_from_slice(&[0; 6]);
        wmf.extend_from_slice(&[0xAB, 0xCD]);
        let picture = decode(Cow::Owned(wmf), ImageType::Wmf, 72.0).unwrap();
        assert_eq!(picture.blip, Blip::Wmf);
        assert_eq!(&*picture.data, &[0xAB, 0xCD]);
        assert_eq!(picture.extent, (2540, 1270));
        assert_eq!(picture.natural.0, Length::from_inch(1.0));
    }
}
