//! Plan execution and dry-run simulation.

use std::fs;
use std::io;
use std::path::Path;

use super::CloneReport;
use super::actions::CloneAction;
use crate::error::{CloneError, Result};
use crate::walker::EntryKind;

/// Replays a clone plan against the filesystem, or simulates it.
///
/// Under dry-run no filesystem call is made at all; the per-action
/// counts still accumulate exactly as a real run would report them.
pub struct PlanExecutor {
    dry_run: bool,
}

impl PlanExecutor {
    /// Create a new executor.
    #[must_use]
    pub const fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Execute (or simulate) `plan` in order and assemble the report.
    ///
    /// # Errors
    ///
    /// Returns a `FileSystem` error on the first failed operation; the
    /// remaining plan is abandoned and prior writes are not rolled back.
    pub fn execute(&self, plan: Vec<CloneAction>) -> Result<CloneReport> {
        let mut report = CloneReport::new(self.dry_run);

        for action in &plan {
            self.apply(action, &mut report)?;
        }

        report.actions = plan;
        Ok(report)
    }

    fn apply(&self, action: &CloneAction, report: &mut CloneReport) -> Result<()> {
        match action {
            CloneAction::Create { source, dest, kind } => {
                if !self.dry_run {
                    match kind {
                        EntryKind::Directory => {
                            fs::create_dir_all(dest).map_err(|e| {
                                CloneError::filesystem("create directory", dest, e)
                            })?;
                        }
                        EntryKind::File => Self::copy_file(source, dest)?,
                    }
                }
                report.created += 1;
            }
            CloneAction::Overwrite { source, dest } => {
                if !self.dry_run {
                    Self::copy_file(source, dest)?;
                }
                report.overwritten += 1;
            }
            CloneAction::SkipConflict { .. } => {
                report.conflicts += 1;
            }
            CloneAction::SymlinkCreate { link, target } => {
                if !self.dry_run {
                    Self::create_symlink(link, target)?;
                }
                report.symlinks_created += 1;
            }
            CloneAction::SymlinkSkip { .. } => {
                report.symlinks_skipped += 1;
            }
        }

        Ok(())
    }

    /// Copy one file, contents and permissions, creating the parent if
    /// needed.
    fn copy_file(source: &Path, dest: &Path) -> Result<()> {
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| CloneError::filesystem("create directory", parent, e))?;
        }

        fs::copy(source, dest)
            .map(|_| ())
            .map_err(|e| CloneError::filesystem("copy file to", dest, e))
    }

    /// Create the symlink, replacing a planned-over file or stale link.
    fn create_symlink(link: &Path, target: &Path) -> Result<()> {
        if fs::symlink_metadata(link).is_ok() {
            fs::remove_file(link).map_err(|e| CloneError::filesystem("replace", link, e))?;
        }

        Self::symlink(target, link)
            .map_err(|e| CloneError::filesystem("create symlink", link, e))
    }

    #[cfg(unix)]
    fn symlink(target: &Path, link: &Path) -> io::Result<()> {
        std::os::unix::fs::symlink(target, link)
    }

    #[cfg(windows)]
    fn symlink(target: &Path, link: &Path) -> io::Result<()> {
        std::os::windows::fs::symlink_dir(target, link)
    }

    #[cfg(not(any(unix, windows)))]
    fn symlink(_target: &Path, _link: &Path) -> io::Result<()> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "symbolic links are not supported on this platform",
        ))
    }
}
