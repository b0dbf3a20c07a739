//! Common types used across the frontend application.

/// Tone of the status line shown under a form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    /// Operation went through.
    Success,
    /// Operation failed.
    Error,
}

impl StatusKind {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusKind::Success => "status-success",
            StatusKind::Error => "status-error",
        }
    }
}

/// User-visible outcome of the last remote operation.
///
/// Each page shows at most one; every operation overwrites the previous
/// message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}
