//! Non-fatal diagnostics collected during a pass.

use std::sync::Arc;

use crate::base::TextRange;

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

/// A diagnostic message with location.
///
/// Diagnostics never abort the pass; they record stray identifiers,
/// skipped subtrees, and similar local trouble for the caller to surface
/// or ignore.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Span of the offending node.
    pub range: TextRange,
    /// Severity level.
    pub severity: Severity,
    /// Stable machine-readable code (e.g. `"unresolved-name"`).
    pub code: Option<Arc<str>>,
    /// The diagnostic message.
    pub message: Arc<str>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(range: TextRange, message: impl Into<Arc<str>>) -> Self {
        Self {
            range,
            severity: Severity::Error,
            code: None,
            message: message.into(),
        }
    }

    /// Create a new warning diagnostic.
    pub fn warning(range: TextRange, message: impl Into<Arc<str>>) -> Self {
        Self {
            range,
            severity: Severity::Warning,
            code: None,
            message: message.into(),
        }
    }

    /// Set the diagnostic code.
    pub fn with_code(mut self, code: impl Into<Arc<str>>) -> Self {
        self.code = Some(code.into());
        self
    }
}
