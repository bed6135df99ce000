//! The clone engine.
//!
//! Walks the bundled template tree in deterministic pre-order, decides
//! per entry whether to copy, overwrite, or skip, optionally creates
//! the `.cursor` editor symlink, and reports a structured outcome.
//! Dry-run computes the identical plan without touching the filesystem.

mod actions;
mod engine;
mod executor;
mod planner;
mod reporting;

pub use actions::{ActionResolver, CloneAction, ConflictReason, DestState};
pub use engine::CloneEngine;
pub use executor::PlanExecutor;
pub use planner::{CURSOR_LINK_NAME, build_plan};
pub use reporting::CloneReporter;

use std::path::PathBuf;

/// Options for one clone invocation, already defaulted and typed by the
/// CLI shell. Immutable for the duration of the run.
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct CloneOptions {
    /// Directory the template is cloned into.
    pub target_directory: PathBuf,
    /// Overwrite existing destination files.
    pub force: bool,
    /// Compute and report the plan without mutating the filesystem.
    pub dry_run: bool,
    /// Include per-entry action detail in the rendered output.
    pub verbose: bool,
    /// Create the `.cursor` editor-integration symlink.
    pub cursor: bool,
}

impl Default for CloneOptions {
    fn default() -> Self {
        Self {
            target_directory: PathBuf::from("."),
            force: false,
            dry_run: false,
            verbose: false,
            cursor: false,
        }
    }
}

/// Outcome of a successful (or successfully simulated) clone.
#[derive(Debug, Clone, Default)]
pub struct CloneReport {
    /// The executed (or simulated) plan, in order.
    pub actions: Vec<CloneAction>,
    /// Entries materialized at the destination.
    pub created: usize,
    /// Existing files replaced under force.
    pub overwritten: usize,
    /// Entries left untouched because of a conflict.
    pub conflicts: usize,
    /// Editor symlinks created (0 or 1).
    pub symlinks_created: usize,
    /// Editor symlinks skipped because the path was occupied (0 or 1).
    pub symlinks_skipped: usize,
    /// Whether this run was a simulation.
    pub dry_run: bool,
}

impl CloneReport {
    /// Empty report for a run in the given mode.
    #[must_use]
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Self::default()
        }
    }

    /// Mutating operations performed (or simulated).
    #[must_use]
    pub const fn total_operations(&self) -> usize {
        self.created + self.overwritten + self.symlinks_created
    }

    /// Whether any entry was left untouched because of a conflict.
    #[must_use]
    pub const fn has_conflicts(&self) -> bool {
        self.conflicts > 0 || self.symlinks_skipped > 0
    }
}
