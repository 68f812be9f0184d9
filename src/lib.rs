//! lsr - recursive listing that skips ignored names and asks before flooding the terminal

pub mod exclusion;
pub mod output;
pub mod walker;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use exclusion::{DEFAULT_EXCLUDES, DEFAULT_IGNORE_FILE, ExclusionSet};
pub use output::{OutputConfig, print_entries, write_json, write_text};
pub use walker::{
    DEFAULT_LIMIT, Entry, EntryKind, LimitAction, PolicyMode, Prompt, TerminalPrompt,
    ThresholdScope, TraversalState, TypeFilter, Walker, WalkerConfig,
};
