//! Plan assembly — walk the template, probe destinations, decide.
//!
//! The plan is computed in full before any execution and never mutated
//! afterwards; the executor replays it in order.

use std::path::{Path, PathBuf};

use super::CloneOptions;
use super::actions::{ActionResolver, CloneAction, ConflictReason, DestState};
use crate::error::Result;
use crate::template::TEMPLATE_DIR_NAME;
use crate::walker::{self, EntryKind};

/// Name of the editor-integration symlink.
pub const CURSOR_LINK_NAME: &str = ".cursor";

/// Build the ordered action plan for one invocation.
///
/// One action per template entry in pre-order, followed by the symlink
/// action when `cursor` is enabled. Entries nested under a conflicted
/// directory are themselves conflicts: their destination parent cannot
/// be created.
///
/// # Errors
///
/// Returns a `FileSystem` error if the template tree cannot be read.
pub fn build_plan(template_root: &Path, options: &CloneOptions) -> Result<Vec<CloneAction>> {
    let entries = walker::walk(template_root)?;

    let mut actions = Vec::with_capacity(entries.len() + 1);
    let mut conflicted_dirs: Vec<PathBuf> = Vec::new();

    for entry in entries {
        let source = template_root.join(&entry.rel_path);
        let dest_rel = Path::new(TEMPLATE_DIR_NAME).join(&entry.rel_path);
        let dest = options.target_directory.join(&dest_rel);

        let action = if conflicted_dirs.iter().any(|dir| dest_rel.starts_with(dir)) {
            CloneAction::SkipConflict {
                dest,
                reason: ConflictReason::ParentConflict,
            }
        } else {
            let state = DestState::probe(&dest);
            ActionResolver::resolve(source, dest, entry.kind, state, options.force)
        };

        if entry.kind == EntryKind::Directory && matches!(action, CloneAction::SkipConflict { .. })
        {
            conflicted_dirs.push(dest_rel);
        }

        actions.push(action);
    }

    if options.cursor {
        let link = options.target_directory.join(CURSOR_LINK_NAME);
        let state = DestState::probe(&link);
        actions.push(ActionResolver::resolve_symlink(
            link,
            PathBuf::from(TEMPLATE_DIR_NAME),
            state,
            options.force,
        ));
    }

    Ok(actions)
}
