//! File-level and preference error types.
//!
//! Per-line theme problems are not errors at this level: they are
//! [`DirectiveError`](crate::theme::DirectiveError)s recorded as warnings
//! while the load carries on.

use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// ThemeError
// ---------------------------------------------------------------------------

/// Errors that fail a whole theme load.
#[derive(Debug)]
pub enum ThemeError {
    /// The theme file was located but could not be opened.
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { path, source } => {
                write!(f, "failed to open theme file {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ThemeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Open { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// BackendError
// ---------------------------------------------------------------------------

/// Rejected terminal-backend preference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    UnknownBackend(String),
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownBackend(value) => write!(
                f,
                "unknown terminal backend `{value}` (expected auto, vterm, or legacy)"
            ),
        }
    }
}

impl std::error::Error for BackendError {}
