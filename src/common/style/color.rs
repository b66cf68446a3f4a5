use std::fmt;

/// RGB color representation.
///
/// Represents an opaque color using red, green, and blue components, each in
/// the range 0-255. This is the identity used for RTF color table entries.
///
/// # Examples
///
/// ```rust
/// use rambutan::common::RGBColor;
///
/// let red = RGBColor::new(255, 0, 0);
/// let blue = RGBColor::from_hex("0000FF").unwrap();
/// assert_eq!(red.to_hex(), "FF0000");
/// assert_eq!(blue.to_bgr(), 0xFF0000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RGBColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RGBColor {
    /// Black.
    pub const BLACK: RGBColor = RGBColor::new(0, 0, 0);

    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an RGB color from a hex string ("FF0000" or "#FF0000").
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::new(r, g, b))
    }

    /// Convert to hex string (without # prefix).
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Pack as the little-endian `0x00BBGGRR` integer used by drawing-object
    /// properties.
    #[inline]
    pub fn to_bgr(&self) -> i32 {
        i32::from(self.r) | (i32::from(self.g) << 8) | (i32::from(self.b) << 16)
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

/// Document color with transparency.
///
/// `alpha` is the opacity in `0.0..=1.0`. Colors are compared for table
/// purposes only after [`Color::mix_transparency`], so two colors that blend
/// to the same opaque value share one color table entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f64,
}

impl Color {
    /// Create an opaque color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, alpha: 1.0 }
    }

    /// Create a color with the given opacity (clamped to `0.0..=1.0`).
    #[inline]
    pub fn rgba(r: u8, g: u8, b: u8, alpha: f64) -> Self {
        Self {
            r,
            g,
            b,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// Blend the color over a white page and return the opaque result.
    pub fn mix_transparency(&self) -> RGBColor {
        let alpha = self.alpha.clamp(0.0, 1.0);
        let mix = |c: u8| -> u8 {
            let v = f64::from(c) * alpha + 255.0 * (1.0 - alpha);
            v.round().clamp(0.0, 255.0) as u8
        };
        RGBColor::new(mix(self.r), mix(self.g), mix(self.b))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

impl From<RGBColor> for Color {
    fn from(c: RGBColor) -> Self {
        Self::rgb(c.r, c.g, c.b)
    }
}
