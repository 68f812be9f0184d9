//! Configuration types for the walker

/// Default number of observed entries before the threshold policy kicks in.
pub const DEFAULT_LIMIT: usize = 100;

/// Restricts which entry kinds are emitted. Recursion is unaffected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeFilter {
    File,
    Dir,
}

impl TypeFilter {
    /// `"dir"` (any case) selects directories, anything else selects files.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("dir") {
            TypeFilter::Dir
        } else {
            TypeFilter::File
        }
    }
}

/// Which count is compared against the limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThresholdScope {
    /// Running total of everything observed so far in the run.
    #[default]
    Cumulative,
    /// Only the child count of the directory being listed.
    PerDirectory,
}

/// What happens the first time the limit is exceeded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LimitAction {
    /// Ask the operator once; declining halts the rest of the run.
    #[default]
    Ask,
    /// Never ask, keep listing.
    Continue,
    /// Halt without asking.
    Stop,
}

/// Configuration for walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    pub limit: usize,
    pub scope: ThresholdScope,
    pub on_limit: LimitAction,
    pub type_filter: Option<TypeFilter>,
    /// Directories at this depth are listed but not descended into.
    /// The root listing is depth 0.
    pub max_depth: Option<usize>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            scope: ThresholdScope::default(),
            on_limit: LimitAction::default(),
            type_filter: None,
            max_depth: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_filter_parse() {
        assert_eq!(TypeFilter::parse("dir"), TypeFilter::Dir);
        assert_eq!(TypeFilter::parse("DIR"), TypeFilter::Dir);
        assert_eq!(TypeFilter::parse("file"), TypeFilter::File);
        assert_eq!(TypeFilter::parse("directory"), TypeFilter::File);
        assert_eq!(TypeFilter::parse(""), TypeFilter::File);
    }
}
