//! Deterministic pre-order traversal of the template tree.
//!
//! Directories are yielded before their children and siblings in lexical
//! order, so the plan derived from a walk is reproducible byte for byte
//! between a dry-run and a real execution.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{CloneError, Result};

/// Kind of a template entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A directory to recreate at the destination.
    Directory,
    /// A file whose bytes are copied verbatim.
    File,
}

/// One entry of the template tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    /// Path relative to the template root; empty for the root itself.
    pub rel_path: PathBuf,
    /// Entry kind.
    pub kind: EntryKind,
}

/// Walk the template tree rooted at `root` in deterministic pre-order.
///
/// Symlinks and special files are not template material and are skipped.
///
/// # Errors
///
/// Returns a `FileSystem` error if any entry cannot be read.
pub fn walk(root: &Path) -> Result<Vec<TemplateEntry>> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().map_or_else(|| root.to_path_buf(), Path::to_path_buf);
            CloneError::filesystem("read template entry", path, e.into())
        })?;

        let kind = if entry.file_type().is_dir() {
            EntryKind::Directory
        } else if entry.file_type().is_file() {
            EntryKind::File
        } else {
            continue;
        };

        let rel_path = entry
            .path()
            .strip_prefix(root)
            .unwrap_or_else(|_| Path::new(""))
            .to_path_buf();

        entries.push(TemplateEntry { rel_path, kind });
    }

    Ok(entries)
}
