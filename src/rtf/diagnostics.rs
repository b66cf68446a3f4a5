//! Non-fatal problems found while rendering.

use std::fmt;

/// Category of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// An external resource (image file, chart scratch file) could not be used
    Resource,
    /// The document uses something RTF output cannot express here
    Unsupported,
}

/// A single recoverable problem. The affected object was skipped or rendered
/// with a fallback; the output is still well-formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            DiagnosticKind::Resource => "resource",
            DiagnosticKind::Unsupported => "unsupported",
        };
        write!(f, "[{}] {}", kind, self.message)
    }
}

/// Outcome of a successful render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderReport {
    pub diagnostics: Vec<Diagnostic>,
}

impl RenderReport {
    /// Whether the render finished without any diagnostic.
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Diagnostics of one kind.
    pub fn of_kind(&self, kind: DiagnosticKind) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.kind == kind)
    }
}
