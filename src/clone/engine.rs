//! Engine facade — one complete pass per invocation.

use std::path::PathBuf;

use super::executor::PlanExecutor;
use super::planner;
use super::{CloneOptions, CloneReport};
use crate::error::Result;
use crate::template;
use crate::validate::TargetValidator;

/// The clone engine.
///
/// Owns one invocation: validate the target, verify the template,
/// compute the plan, then execute or simulate it. A failed pass is
/// never resumed; callers re-invoke from scratch.
pub struct CloneEngine {
    template_root: PathBuf,
    options: CloneOptions,
}

impl CloneEngine {
    /// Create an engine for one invocation.
    #[must_use]
    pub fn new(template_root: impl Into<PathBuf>, options: CloneOptions) -> Self {
        Self {
            template_root: template_root.into(),
            options,
        }
    }

    /// Run the clone to completion.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for an unusable target, `Template` when the
    /// bundled template root is missing or mangled, and `FileSystem`
    /// for any I/O failure while walking or writing.
    pub fn execute(&self) -> Result<CloneReport> {
        TargetValidator::validate(&self.options.target_directory)?;
        template::verify_root(&self.template_root)?;

        let plan = planner::build_plan(&self.template_root, &self.options)?;
        PlanExecutor::new(self.options.dry_run).execute(plan)
    }
}
