//! Common style and measurement types.
//!
//! This module provides the value types shared by the document model and the
//! renderers.

// Submodule declarations
pub mod color;
pub mod len;

// Re-exports
pub use color::{Color, RGBColor};
pub use len::Length;
