//! Per-entry action model and conflict policy.
//!
//! The resolver is pure decision logic: destination existence is the
//! only signal consulted, content is never read, and all mutation is
//! deferred to the executor.

use std::fs;
use std::path::{Path, PathBuf};

use crate::walker::EntryKind;

/// Observed state of a destination path at planning time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestState {
    /// Nothing exists at the destination.
    Absent,
    /// A directory exists at the destination.
    Directory,
    /// A file, symlink, or other non-directory object exists.
    Occupied,
}

impl DestState {
    /// Probe a destination path without following symlinks.
    #[must_use]
    pub fn probe(path: &Path) -> Self {
        match fs::symlink_metadata(path) {
            Err(_) => Self::Absent,
            Ok(meta) if meta.is_dir() => Self::Directory,
            Ok(_) => Self::Occupied,
        }
    }
}

/// Why an entry was left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictReason {
    /// The destination file already exists and force is off.
    Exists,
    /// Source and destination are different kinds of object.
    KindMismatch,
    /// An ancestor directory of this entry was itself a conflict.
    ParentConflict,
}

/// One planned step of a clone, in plan order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloneAction {
    /// Materialize an entry that is absent at the destination.
    /// Directory creation is idempotent, so an existing destination
    /// directory also plans as `Create`.
    Create {
        /// Absolute source path.
        source: PathBuf,
        /// Absolute destination path.
        dest: PathBuf,
        /// Entry kind.
        kind: EntryKind,
    },
    /// Replace an existing destination file (force mode).
    Overwrite {
        /// Absolute source path.
        source: PathBuf,
        /// Absolute destination path.
        dest: PathBuf,
    },
    /// Leave an existing destination object untouched.
    SkipConflict {
        /// Absolute destination path.
        dest: PathBuf,
        /// Why the entry was skipped.
        reason: ConflictReason,
    },
    /// Create the editor-integration symlink.
    SymlinkCreate {
        /// Absolute path of the link itself.
        link: PathBuf,
        /// Link target, relative to the link's directory.
        target: PathBuf,
    },
    /// Leave an existing object at the symlink path untouched.
    SymlinkSkip {
        /// Absolute path of the link that was not created.
        link: PathBuf,
    },
}

impl CloneAction {
    /// Destination path this action refers to.
    #[must_use]
    pub fn dest(&self) -> &Path {
        match self {
            Self::Create { dest, .. }
            | Self::Overwrite { dest, .. }
            | Self::SkipConflict { dest, .. } => dest,
            Self::SymlinkCreate { link, .. } | Self::SymlinkSkip { link } => link,
        }
    }
}

/// Resolves one template entry into an action.
pub struct ActionResolver;

impl ActionResolver {
    /// Decide the action for a file or directory entry.
    #[must_use]
    pub fn resolve(
        source: PathBuf,
        dest: PathBuf,
        kind: EntryKind,
        state: DestState,
        force: bool,
    ) -> CloneAction {
        match (kind, state) {
            (EntryKind::Directory, DestState::Absent | DestState::Directory) => {
                CloneAction::Create { source, dest, kind }
            }
            // Unlike kinds are never merged or removed, force or not.
            (EntryKind::Directory, DestState::Occupied)
            | (EntryKind::File, DestState::Directory) => CloneAction::SkipConflict {
                dest,
                reason: ConflictReason::KindMismatch,
            },
            (EntryKind::File, DestState::Absent) => CloneAction::Create { source, dest, kind },
            (EntryKind::File, DestState::Occupied) if force => {
                CloneAction::Overwrite { source, dest }
            }
            (EntryKind::File, DestState::Occupied) => CloneAction::SkipConflict {
                dest,
                reason: ConflictReason::Exists,
            },
        }
    }

    /// Decide the action for the editor-integration symlink.
    #[must_use]
    pub fn resolve_symlink(
        link: PathBuf,
        target: PathBuf,
        state: DestState,
        force: bool,
    ) -> CloneAction {
        match state {
            DestState::Absent => CloneAction::SymlinkCreate { link, target },
            // A stale link or file is replaced under force; a real
            // directory never is.
            DestState::Occupied if force => CloneAction::SymlinkCreate { link, target },
            DestState::Directory | DestState::Occupied => CloneAction::SymlinkSkip { link },
        }
    }
}
