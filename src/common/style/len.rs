use std::fmt;

use crate::common::unit::{POINTS_PER_CM, POINTS_PER_INCH, POINTS_PER_PICA};

/// Length measurement used throughout the document model.
///
/// The value is stored in points (1/72 inch), the page-layout unit all
/// renderer conversions start from.
///
/// # Examples
///
/// ```rust
/// use rambutan::common::Length;
///
/// let margin = Length::from_cm(2.5);
/// let indent = Length::from_point(18.0);
/// assert!(margin.points() > indent.points());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Length {
    points: f64,
}

impl Length {
    /// Zero length.
    pub const ZERO: Length = Length { points: 0.0 };

    /// Create a length from points.
    #[inline]
    pub const fn from_point(points: f64) -> Self {
        Self { points }
    }

    /// Create a length from inches.
    #[inline]
    pub fn from_inch(inches: f64) -> Self {
        Self {
            points: inches * POINTS_PER_INCH,
        }
    }

    /// Create a length from centimeters.
    #[inline]
    pub fn from_cm(cm: f64) -> Self {
        Self {
            points: cm * POINTS_PER_CM,
        }
    }

    /// Create a length from millimeters.
    #[inline]
    pub fn from_mm(mm: f64) -> Self {
        Self::from_cm(mm / 10.0)
    }

    /// Create a length from picas (12 points).
    #[inline]
    pub fn from_pica(picas: f64) -> Self {
        Self {
            points: picas * POINTS_PER_PICA,
        }
    }

    /// Get the value in points.
    #[inline]
    pub const fn points(&self) -> f64 {
        self.points
    }

    /// Get the value in picas.
    #[inline]
    pub fn picas(&self) -> f64 {
        self.points / POINTS_PER_PICA
    }

    /// Convert to inches.
    #[inline]
    pub fn inches(&self) -> f64 {
        self.points / POINTS_PER_INCH
    }

    /// Whether the length is exactly zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.points == 0.0
    }
}

impl std::ops::Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length::from_point(self.points + rhs.points)
    }
}

impl std::ops::Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length::from_point(self.points - rhs.points)
    }
}

impl std::ops::Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length::from_point(self.points * rhs)
    }
}

impl std::iter::Sum for Length {
    fn sum<I: Iterator<Item = Length>>(iter: I) -> Length {
        iter.fold(Length::ZERO, |acc, l| acc + l)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}pt", self.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(Length::from_inch(1.0).points(), 72.0);
        assert_eq!(Length::from_pica(2.0).points(), 24.0);
        assert!((Length::from_cm(2.54).points() - 72.0).abs() < 1e-9);
        assert!((Length::from_mm(25.4).inches() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_arithmetic() {
        let total: Length = [Length::from_point(10.0), Length::from_point(5.5)]
            .into_iter()
            .sum();
        assert_eq!(total, Length::from_point(15.5));
        assert_eq!((total - Length::from_point(0.5)) * 2.0, Length::from_point(30.0));
    }
}
