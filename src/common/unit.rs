//! Unit conversion utilities.
//!
//! Page-layout lengths are held in points; RTF expresses them in several
//! integer units depending on the control word. [`to_rtf_unit`] is the single
//! conversion point used by every renderer.

use super::style::Length;

pub const POINTS_PER_INCH: f64 = 72.0;
pub const POINTS_PER_CM: f64 = 72.0 / 2.54;
pub const POINTS_PER_PICA: f64 = 12.0;
pub const TWIPS_PER_POINT: f64 = 20.0;
pub const HALF_POINTS_PER_POINT: f64 = 2.0;
pub const EMUS_PER_PT: f64 = 12_700.0;
/// One line of single spacing (12pt) expressed in twips.
pub const TWIPS_PER_LINE: f64 = 12.0 * TWIPS_PER_POINT;

/// Integer unit an RTF control word expects its parameter in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RtfUnit {
    /// No conversion, the rounded point value is written as-is
    Undefined,
    /// Half points (font sizes)
    HalfPoints,
    /// Twentieths of a point
    Twips,
    /// Multiples of single line spacing, in twips (`\slN\slmult1`)
    Lines,
    /// English Metric Units, 1/12700 point (drawing objects)
    Emu,
    /// Hundredths of a pica (character units)
    HundredthsOfPica,
}

/// Convert a length to the integer unit of an RTF control word.
///
/// Values are rounded to the nearest integer. `Lines` treats the length's
/// point value as a line multiple (`1.5` means one and a half lines).
///
/// # Examples
///
/// ```rust
/// use rambutan::common::Length;
/// use rambutan::common::unit::{to_rtf_unit, RtfUnit};
///
/// assert_eq!(to_rtf_unit(Length::from_point(12.0), RtfUnit::Twips), 240);
/// assert_eq!(to_rtf_unit(Length::from_point(10.5), RtfUnit::HalfPoints), 21);
/// assert_eq!(to_rtf_unit(Length::from_point(1.5), RtfUnit::Lines), 360);
/// ```
#[inline]
pub fn to_rtf_unit(length: Length, unit: RtfUnit) -> i32 {
    let pt = length.points();
    let value = match unit {
        RtfUnit::HalfPoints => pt * HALF_POINTS_PER_POINT,
        RtfUnit::Twips => pt * TWIPS_PER_POINT,
        RtfUnit::Lines => pt * TWIPS_PER_LINE,
        RtfUnit::Emu => pt * EMUS_PER_PT,
        RtfUnit::HundredthsOfPica => pt * 100.0 / POINTS_PER_PICA,
        RtfUnit::Undefined => pt,
    };
    saturate(value.round())
}

/// Convert a length to twips.
#[inline]
pub fn to_twips(length: Length) -> i32 {
    to_rtf_unit(length, RtfUnit::Twips)
}

/// Convert a length to EMUs.
#[inline]
pub fn to_emu(length: Length) -> i32 {
    to_rtf_unit(length, RtfUnit::Emu)
}

#[inline]
fn saturate(value: f64) -> i32 {
    value.clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_unit() {
        let l = Length::from_point(3.0);
        assert_eq!(to_rtf_unit(l, RtfUnit::HalfPoints), 6);
        assert_eq!(to_rtf_unit(l, RtfUnit::Twips), 60);
        assert_eq!(to_rtf_unit(l, RtfUnit::Lines), 720);
        assert_eq!(to_rtf_unit(l, RtfUnit::Emu), 38_100);
        assert_eq!(to_rtf_unit(l, RtfUnit::HundredthsOfPica), 25);
        assert_eq!(to_rtf_unit(l, RtfUnit::Undefined), 3);
    }

    #[test]
    fn test_rounding_and_sign() {
        assert_eq!(to_twips(Length::from_point(0.03)), 1);
        assert_eq!(to_twips(Length::from_point(-2.0)), -40);
        assert_eq!(to_twips(Length::from_inch(1.0)), 1440);
    }

    #[test]
    fn test_saturates() {
        assert_eq!(to_emu(Length::from_point(1.0e12)), i32::MAX);
    }
}
