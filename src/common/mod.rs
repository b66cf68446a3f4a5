//! Common types and utilities shared by the document model and the renderers.
//!
//! This module provides the error type, length and color values, and the
//! unit converter from points to the integer units RTF control words take.

// Submodule declarations
pub mod error;
pub mod style;
pub mod unit;

// Re-exports for convenience
pub use error::{Error, Result};
pub use style::{Color, Length, RGBColor};
pub use unit::{RtfUnit, to_rtf_unit};
