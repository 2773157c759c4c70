//! Crate-level error types.

use std::fmt;

use crate::scene::SubjectId;

/// Errors produced by the tactical-camera crate.
#[derive(Debug)]
pub enum CameraError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Option values outside their valid range.
    InvalidOptions(String),
    /// A subject handle does not resolve in the registry.
    SubjectNotFound(SubjectId),
    /// Rotation direction outside {-1, +1}.
    InvalidDirection(i32),
    /// `advance` was called before the controller was initialized.
    NotInitialized,
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidOptions(msg) => {
                write!(f, "invalid camera options: {msg}")
            }
            Self::SubjectNotFound(id) => {
                write!(f, "subject {id} not found")
            }
            Self::InvalidDirection(d) => {
                write!(f, "invalid rotation direction {d} (expected -1 or 1)")
            }
            Self::NotInitialized => {
                write!(f, "camera controller used before initialization")
            }
        }
    }
}

impl std::error::Error for CameraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CameraError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
