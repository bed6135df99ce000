//! Locating the bundled `ai/` template tree.
//!
//! The template ships alongside the installed binary. An explicit
//! override (flag or environment variable) takes precedence, which is
//! also how the test suite points the tool at scratch templates.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CloneError, Result};

/// Name of the template directory, both in the package and at the
/// destination.
pub const TEMPLATE_DIR_NAME: &str = "ai";

/// Environment variable overriding the template location.
pub const TEMPLATE_ROOT_ENV: &str = "AIDD_TEMPLATE_ROOT";

/// Resolve the template root directory.
///
/// Resolution order: the explicit `override_root` (from
/// `--template-root` / `AIDD_TEMPLATE_ROOT`), then an `ai/` directory
/// next to the running executable, then the development checkout.
///
/// # Errors
///
/// Returns a `Template` error (an installation defect) when no usable
/// template directory can be found, or when an explicit override does
/// not point at a directory.
pub fn resolve_root(override_root: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(root) = override_root {
        verify_root(&root)?;
        return Ok(root);
    }

    if let Ok(exe) = env::current_exe()
        && let Some(dir) = exe.parent()
    {
        let bundled = dir.join(TEMPLATE_DIR_NAME);
        if bundled.is_dir() {
            return Ok(bundled);
        }
    }

    let checkout = Path::new(env!("CARGO_MANIFEST_DIR")).join(TEMPLATE_DIR_NAME);
    if checkout.is_dir() {
        return Ok(checkout);
    }

    Err(CloneError::Template {
        message: format!("bundled {TEMPLATE_DIR_NAME}/ template not found near the executable"),
        source: None,
    })
}

/// Check that a template root is a readable directory.
///
/// # Errors
///
/// Returns a `Template` error otherwise — a missing or mangled template
/// is a packaging defect, not a user error.
pub fn verify_root(root: &Path) -> Result<()> {
    match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(CloneError::Template {
            message: format!("template root {} is not a directory", root.display()),
            source: None,
        }),
        Err(e) => Err(CloneError::Template {
            message: format!("template root {} is not readable", root.display()),
            source: Some(e),
        }),
    }
}
