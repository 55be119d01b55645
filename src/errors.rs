//! Error types for attribute decoding and evaluation.
//!
//! Two channels:
//!
//! 1. **TypeError** is a hard failure returned from the decode path. It means
//!    the host handed us something the type contract does not allow (a
//!    number where a boolean was declared, a value of a foreign type). These
//!    propagate up uninterpreted.
//!
//! 2. **Diagnostics** are non-fatal findings collected for the host to
//!    inspect: validation failures scoped to an attribute path, and
//!    internal-error entries for contract mismatches. The host decides
//!    whether to halt evaluation.

use crate::path::AttributePath;
use crate::wire::WireType;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ═══════════════════════════════════════════════════════════════════
// HARD FAILURES (decode path)
// ═══════════════════════════════════════════════════════════════════

/// Hard failure while turning a wire value into a typed value.
#[derive(Debug, Error)]
pub enum TypeError {
    /// The wire value is not declared as a boolean.
    #[error("can't unmarshal {found} into bool, expected boolean")]
    WireTypeMismatch { found: WireType },

    /// Declared as boolean but carries some other payload.
    #[error("malformed Bool payload: {0}")]
    MalformedPayload(serde_json::Value),

    /// The underlying type decoded into something other than a boolean value.
    #[error("unexpected value type of {0}")]
    UnexpectedValueType(String),

    /// Wrapping the decoded boolean reported errors.
    #[error("unexpected error converting BoolValue to BoolValuable: {0}")]
    Conversion(Diagnostics),

    /// The wire bytes could not be parsed.
    #[error("malformed wire encoding: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl TypeError {
    /// Create an "unexpected value type" error naming the offending type
    pub fn unexpected_value_type(type_name: impl Into<String>) -> Self {
        Self::UnexpectedValueType(type_name.into())
    }

    /// True for failures that happened while reading host input.
    pub fn is_decode_error(&self) -> bool {
        !matches!(self, Self::Conversion(_))
    }
}

/// Result type alias for the decode path
pub type TypeResult<T> = Result<T, TypeError>;

// ═══════════════════════════════════════════════════════════════════
// DIAGNOSTICS (non-fatal findings)
// ═══════════════════════════════════════════════════════════════════

/// Severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Evaluation may continue
    Warning,

    /// Evaluation should stop
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Who is at fault for a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The host broke the type contract (a bug, not a user mistake)
    Internal,

    /// The configured value is not allowed
    InvalidValue,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Internal => "INTERNAL",
            Self::InvalidValue => "INVALID_VALUE",
        };
        write!(f, "{}", s)
    }
}

/// A single finding reported back to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,

    pub code: ErrorCode,

    /// Short, one-line description
    pub summary: String,

    /// Longer explanation, may span lines
    pub detail: String,

    /// Attribute the finding applies to, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<AttributePath>,
}

impl Diagnostic {
    pub fn new(
        severity: Severity,
        code: ErrorCode,
        summary: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            code,
            summary: summary.into(),
            detail: detail.into(),
            path: None,
        }
    }

    /// Error scoped to one attribute (user error)
    pub fn attribute_error(
        path: AttributePath,
        summary: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self::new(Severity::Error, ErrorCode::InvalidValue, summary, detail).with_path(path)
    }

    /// Error caused by the host misusing the type
    pub fn internal_error(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(Severity::Error, ErrorCode::Internal, summary, detail)
    }

    pub fn with_path(mut self, path: AttributePath) -> Self {
        self.path = Some(path);
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{} at {}: {}", self.severity, path, self.summary),
            None => write!(f, "{}: {}", self.severity, self.summary),
        }
    }
}

/// Ordered collection of diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.0.push(diagnostic);
    }

    /// Add a user-facing error with no attribute scope
    pub fn add_error(&mut self, summary: impl Into<String>, detail: impl Into<String>) {
        self.push(Diagnostic::new(
            Severity::Error,
            ErrorCode::InvalidValue,
            summary,
            detail,
        ));
    }

    /// Add an internal-error entry (host contract violation)
    pub fn add_internal_error(&mut self, summary: impl Into<String>, detail: impl Into<String>) {
        self.push(Diagnostic::internal_error(summary, detail));
    }

    /// Add an error scoped to an attribute path
    pub fn add_attribute_error(
        &mut self,
        path: AttributePath,
        summary: impl Into<String>,
        detail: impl Into<String>,
    ) {
        self.push(Diagnostic::attribute_error(path, summary, detail));
    }

    pub fn add_warning(&mut self, summary: impl Into<String>, detail: impl Into<String>) {
        self.push(Diagnostic::new(
            Severity::Warning,
            ErrorCode::InvalidValue,
            summary,
            detail,
        ));
    }

    /// Move every entry of `other` into this collection
    pub fn append(&mut self, other: Diagnostics) {
        self.0.extend(other.0);
    }

    pub fn has_error(&self) -> bool {
        self.0.iter().any(Diagnostic::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.0.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.0.len() - self.error_count()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.0.iter()
    }
}

impl std::fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, diag) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", diag)?;
        }
        Ok(())
    }
}

impl From<Vec<Diagnostic>> for Diagnostics {
    fn from(diags: Vec<Diagnostic>) -> Self {
        Self(diags)
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
