//! Name-based exclusion rules built from a `.gitignore`-style file
//!
//! Only literal names are understood. A line starting with `!` marks a name as
//! re-included instead of excluded; whether that re-inclusion actually wins over
//! an exclusion is controlled by [`ExclusionSet::honor_negation`].

use std::path::Path;

/// Names that are always excluded, whatever the ignore file says.
pub const DEFAULT_EXCLUDES: &[&str] = &[".git", ".idea"];

/// Default ignore file consulted by the CLI, relative to the working directory.
pub const DEFAULT_IGNORE_FILE: &str = ".gitignore";

/// Ordered exclude and re-include name lists.
#[derive(Debug, Clone)]
pub struct ExclusionSet {
    excluded: Vec<String>,
    included: Vec<String>,
    honor_negation: bool,
}

impl ExclusionSet {
    /// Only the built-in defaults, nothing re-included.
    pub fn defaults() -> Self {
        Self {
            excluded: DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect(),
            included: Vec::new(),
            honor_negation: false,
        }
    }

    /// Build from the raw text of an ignore file.
    pub fn parse(text: &str) -> Self {
        let mut set = Self::defaults();

        for line in text.trim_matches(|c| c == '\n' || c == '\r').split('\n') {
            let line = line.trim_end_matches('\r');
            if line.is_empty() {
                continue;
            }
            match line.strip_prefix('!') {
                Some(name) => set.included.push(name.to_string()),
                None => set.excluded.push(line.to_string()),
            }
        }

        set
    }

    /// Read and parse an ignore file. A missing or unreadable file is the normal
    /// "no ignore file" case and yields [`ExclusionSet::defaults`].
    pub fn load(path: &Path) -> Self {
        match std::fs::read(path) {
            Ok(bytes) => {
                let set = Self::parse(&String::from_utf8_lossy(&bytes));
                tracing::debug!(
                    path = %path.display(),
                    excluded = set.excluded.len(),
                    included = set.included.len(),
                    "loaded ignore file"
                );
                set
            }
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "no ignore file, using defaults");
                Self::defaults()
            }
        }
    }

    /// Whether names in the re-include list override exclusion.
    pub fn honor_negation(mut self, honor: bool) -> Self {
        self.honor_negation = honor;
        self
    }

    /// Append an extra literal name to exclude.
    pub fn exclude(&mut self, name: impl Into<String>) {
        self.excluded.push(name.into());
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        if self.honor_negation && self.is_included(name) {
            return false;
        }
        self.excluded.iter().any(|e| e == name)
    }

    pub fn is_included(&self, name: &str) -> bool {
        self.included.iter().any(|i| i == name)
    }

    pub fn excluded(&self) -> &[String] {
        &self.excluded
    }

    pub fn included(&self) -> &[String] {
        &self.included
    }
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self::defaults()
    }
}
