//! Recursive directory listing
//!
//! `Walker` lists a directory depth-first in pre-order: all direct entries of a
//! directory are emitted before any of its subdirectories are descended into.
//! A single `TraversalState` is threaded through every visit so the threshold
//! policy sees the running total of the whole run.

mod config;
mod entry;
mod prompt;
mod state;

pub use config::{DEFAULT_LIMIT, LimitAction, ThresholdScope, TypeFilter, WalkerConfig};
pub use entry::{Entry, EntryKind, format_permissions, join_display};
pub use prompt::{Prompt, TerminalPrompt, is_decline};
pub use state::{PolicyMode, TraversalState};

use std::fs::DirEntry;
use std::path::{Path, PathBuf};

use crate::exclusion::ExclusionSet;

pub struct Walker {
    config: WalkerConfig,
    exclusions: ExclusionSet,
}

impl Walker {
    pub fn new(config: WalkerConfig) -> Self {
        Self {
            config,
            exclusions: ExclusionSet::defaults(),
        }
    }

    pub fn with_exclusions(mut self, exclusions: ExclusionSet) -> Self {
        self.exclusions = exclusions;
        self
    }

    /// Fresh state for one run under this walker's limit action.
    pub fn new_state(&self) -> TraversalState {
        TraversalState::new(self.config.on_limit)
    }

    /// List `root` with a fresh traversal state.
    pub fn walk<P: Prompt + ?Sized>(&self, root: &Path, prompt: &mut P) -> Vec<Entry> {
        let mut state = self.new_state();
        self.walk_with_state(root, &mut state, prompt)
    }

    /// List `root`, accumulating into an existing state.
    pub fn walk_with_state<P: Prompt + ?Sized>(
        &self,
        root: &Path,
        state: &mut TraversalState,
        prompt: &mut P,
    ) -> Vec<Entry> {
        let root_display = root.to_string_lossy();
        let mut out = Vec::new();
        self.walk_dir(root, &root_display, 0, state, prompt, &mut out);
        out
    }

    fn walk_dir<P: Prompt + ?Sized>(
        &self,
        dir: &Path,
        display_path: &str,
        depth: usize,
        state: &mut TraversalState,
        prompt: &mut P,
        out: &mut Vec<Entry>,
    ) {
        let children = read_sorted(dir);
        tracing::trace!(dir = display_path, children = children.len(), "visiting");

        if !state.admit(children.len(), &self.config, prompt) {
            return;
        }

        let mut subdirs: Vec<(PathBuf, String)> = Vec::new();

        for child in children {
            let name = child.file_name().to_string_lossy().to_string();
            if self.exclusions.is_excluded(&name) {
                continue;
            }

            // Symlinks are not followed: they list as files.
            let meta = match child.metadata() {
                Ok(m) => m,
                Err(e) => {
                    tracing::debug!(path = %child.path().display(), error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            let kind = EntryKind::from_metadata(&meta);
            let path = join_display(display_path, &name);

            if kind == EntryKind::Dir {
                subdirs.push((child.path(), path.clone()));
            }

            if self.passes_type_filter(kind) {
                out.push(Entry::new(kind, &meta, path));
            }
        }

        if self.config.max_depth.is_some_and(|max| depth >= max) {
            return;
        }

        for (sub_dir, sub_display) in subdirs {
            self.walk_dir(&sub_dir, &sub_display, depth + 1, state, prompt, out);
        }
    }

    fn passes_type_filter(&self, kind: EntryKind) -> bool {
        match self.config.type_filter {
            None => true,
            Some(TypeFilter::File) => kind == EntryKind::File,
            Some(TypeFilter::Dir) => kind == EntryKind::Dir,
        }
    }
}

/// Direct children sorted by name. An unreadable directory has no children.
fn read_sorted(dir: &Path) -> Vec<DirEntry> {
    let entries = match std::fs::read_dir(dir) {
        Ok(e) => e,
        Err(e) => {
            tracing::debug!(dir = %dir.display(), error = %e, "cannot list directory");
            return Vec::new();
        }
    };

    let mut entries: Vec<_> = entries.filter_map(|e| e.ok()).collect();
    entries.sort_by_key(|a| a.file_name());
    entries
}
