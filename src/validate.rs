//! Pre-flight validation of the target directory.
//!
//! Runs once, before any traversal begins; on failure no walk or
//! mutation happens at all.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{CloneError, Result};

/// Validates the target directory before the engine starts walking.
pub struct TargetValidator;

impl TargetValidator {
    /// Check that `target` can host a clone.
    ///
    /// An existing target must be a directory. A nonexistent target is
    /// accepted when its parent directory exists — the clone creates
    /// the target itself.
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error otherwise.
    pub fn validate(target: &Path) -> Result<()> {
        match fs::metadata(target) {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(CloneError::validation(
                target,
                "exists but is not a directory",
            )),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Self::validate_parent(target),
            Err(e) => Err(CloneError::validation(target, format!("not accessible: {e}"))),
        }
    }

    fn validate_parent(target: &Path) -> Result<()> {
        let parent = match target.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            // A bare name resolves against the current directory.
            _ => Path::new("."),
        };

        if parent.is_dir() {
            Ok(())
        } else {
            Err(CloneError::validation(
                target,
                "parent directory does not exist",
            ))
        }
    }
}
