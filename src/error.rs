//! Typed failure taxonomy for the clone engine.
//!
//! Every failure that crosses the engine boundary is one of three closed
//! kinds, each carrying a stable machine-readable code, a display
//! message, and (where one exists) the underlying I/O cause. Raw
//! `std::io::Error` values never escape unwrapped.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, CloneError>;

/// Failure classification surfaced at the engine boundary.
///
/// The set is closed so the CLI shell can match exhaustively.
#[derive(Debug, Error)]
pub enum CloneError {
    /// The supplied target directory is structurally unusable.
    #[error("invalid target directory {}: {reason}", .path.display())]
    Validation {
        /// The rejected target path.
        path: PathBuf,
        /// Why the path was rejected.
        reason: String,
    },

    /// A filesystem operation failed while walking or writing.
    #[error("failed to {op} {}", .path.display())]
    FileSystem {
        /// The operation that failed, e.g. "copy" or "create directory".
        op: &'static str,
        /// The path the operation was applied to.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The bundled template tree is missing or unreadable. This is an
    /// installation defect rather than a user-input or I/O problem.
    #[error("{message}")]
    Template {
        /// Description of the packaging defect.
        message: String,
        /// The underlying I/O error, when one was observed.
        #[source]
        source: Option<io::Error>,
    },
}

impl CloneError {
    /// Stable machine-readable code for programmatic handling.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::FileSystem { .. } => "FILESYSTEM_ERROR",
            Self::Template { .. } => "CLONE_ERROR",
        }
    }

    /// One-line recovery hint shown under the error message.
    #[must_use]
    pub const fn hint(&self) -> &'static str {
        match self {
            Self::Validation { .. } => {
                "check the target path; use --force to overwrite existing files"
            }
            Self::FileSystem { .. } => "check file permissions and available disk space",
            Self::Template { .. } => {
                "reinstall aidd; the bundled ai/ template appears to be missing"
            }
        }
    }

    /// Wrap an I/O failure with the operation and path it applied to.
    pub(crate) fn filesystem(
        op: &'static str,
        path: impl Into<PathBuf>,
        source: io::Error,
    ) -> Self {
        Self::FileSystem {
            op,
            path: path.into(),
            source,
        }
    }

    /// Build a validation failure for `path`.
    pub(crate) fn validation(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Validation {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn test_codes_are_stable() {
        let validation = CloneError::validation("target", "bad");
        let filesystem = CloneError::filesystem(
            "copy",
            "dest",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let template = CloneError::Template {
            message: "gone".to_string(),
            source: None,
        };

        assert_eq!(validation.code(), "VALIDATION_ERROR");
        assert_eq!(filesystem.code(), "FILESYSTEM_ERROR");
        assert_eq!(template.code(), "CLONE_ERROR");
    }

    #[test]
    fn test_filesystem_error_carries_cause() {
        let err = CloneError::filesystem("copy", "/tmp/dest", io::Error::other("disk full"));

        assert!(err.to_string().contains("failed to copy /tmp/dest"));
        assert!(err.source().unwrap().to_string().contains("disk full"));
    }

    #[test]
    fn test_validation_message_names_the_path() {
        let err = CloneError::validation("/tmp/nope", "parent directory does not exist");

        assert!(err.to_string().contains("/tmp/nope"));
        assert!(err.to_string().contains("parent directory does not exist"));
        assert!(err.source().is_none());
    }

    #[test]
    fn test_every_kind_has_a_hint() {
        let errors = [
            CloneError::validation("t", "r"),
            CloneError::filesystem("copy", "p", io::Error::other("x")),
            CloneError::Template {
                message: "m".to_string(),
                source: None,
            },
        ];

        for err in errors {
            assert!(!err.hint().is_empty());
        }
    }
}
