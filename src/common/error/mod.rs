//! Unified error types for Rambutan.
//!
//! This module provides the single error type returned by the public render
//! entry points.

// Submodule declarations
pub mod types;

// Re-exports
pub use types::{Error, Result};
