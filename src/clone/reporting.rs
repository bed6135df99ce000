//! Console rendering of clone reports.

use std::fmt::Write as _;

use super::CloneReport;
use super::actions::{CloneAction, ConflictReason};
use crate::walker::EntryKind;

/// Renders clone reports for the terminal.
pub struct CloneReporter;

impl CloneReporter {
    /// Per-action detail lines, in plan order.
    #[must_use]
    pub fn action_lines(report: &CloneReport) -> String {
        let mut output = String::new();

        for action in &report.actions {
            Self::push_action_line(&mut output, action, report.dry_run);
        }

        output
    }

    fn push_action_line(output: &mut String, action: &CloneAction, dry_run: bool) {
        let line = match action {
            CloneAction::Create { dest, kind, .. } => {
                let noun = match kind {
                    EntryKind::Directory => "directory",
                    EntryKind::File => "file",
                };
                if dry_run {
                    format!("[DRY RUN] Would create {noun}: {}", dest.display())
                } else {
                    format!("Created {noun}: {}", dest.display())
                }
            }
            CloneAction::Overwrite { dest, .. } => {
                if dry_run {
                    format!("[DRY RUN] Would overwrite: {}", dest.display())
                } else {
                    format!("Overwrote: {}", dest.display())
                }
            }
            CloneAction::SkipConflict { dest, reason } => {
                let why = match reason {
                    ConflictReason::Exists => "already exists",
                    ConflictReason::KindMismatch => "exists as a different kind",
                    ConflictReason::ParentConflict => "parent was skipped",
                };
                format!("Skipped: {} ({why})", dest.display())
            }
            CloneAction::SymlinkCreate { link, target } => {
                if dry_run {
                    format!(
                        "[DRY RUN] Would link: {} -> {}",
                        link.display(),
                        target.display()
                    )
                } else {
                    format!("Linked: {} -> {}", link.display(), target.display())
                }
            }
            CloneAction::SymlinkSkip { link } => {
                format!("Skipped symlink: {} (already exists)", link.display())
            }
        };

        let _ = writeln!(output, "{line}");
    }

    /// Generate the summary block.
    #[must_use]
    pub fn generate_summary(report: &CloneReport) -> String {
        let mut output = String::new();

        output.push_str("\n=== Clone Summary ===\n");
        if report.dry_run {
            output.push_str("Mode:        dry-run (no files were written)\n");
        }
        let _ = writeln!(output, "Created:     {}", report.created);
        let _ = writeln!(output, "Overwritten: {}", report.overwritten);
        let _ = writeln!(output, "Conflicts:   {}", report.conflicts);
        if report.symlinks_created + report.symlinks_skipped > 0 {
            let _ = writeln!(
                output,
                "Symlinks:    {} created, {} skipped",
                report.symlinks_created, report.symlinks_skipped
            );
        }

        let _ = writeln!(output, "\nTotal operations: {}", report.total_operations());

        if report.has_conflicts() {
            output.push_str("Status: ✓ Success (conflicts skipped; re-run with --force to overwrite)\n");
        } else {
            output.push_str("Status: ✓ Success\n");
        }

        output
    }
}
