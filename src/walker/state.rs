//! Run-wide traversal state and the threshold policy

use super::config::{LimitAction, ThresholdScope, WalkerConfig};
use super::prompt::{Prompt, is_decline};

/// Where the threshold policy currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyMode {
    /// Ask the next time the limit is exceeded.
    Confirm,
    /// The limit was accepted (or never enforced); keep listing.
    WalkThrough,
    /// Listing stopped; every later directory yields nothing.
    Halted,
}

/// State shared by every directory visit of one run. Never reset mid-run.
#[derive(Debug, Clone)]
pub struct TraversalState {
    observed: usize,
    mode: PolicyMode,
}

impl TraversalState {
    pub fn new(on_limit: LimitAction) -> Self {
        let mode = match on_limit {
            LimitAction::Continue => PolicyMode::WalkThrough,
            LimitAction::Ask | LimitAction::Stop => PolicyMode::Confirm,
        };
        Self { observed: 0, mode }
    }

    /// Entries seen so far, excluded ones included.
    pub fn observed(&self) -> usize {
        self.observed
    }

    pub fn mode(&self) -> PolicyMode {
        self.mode
    }

    /// Account for a freshly listed directory and decide whether its entries may
    /// be emitted. Returns `false` once the run is halted.
    pub fn admit<P: Prompt + ?Sized>(
        &mut self,
        children: usize,
        config: &WalkerConfig,
        prompt: &mut P,
    ) -> bool {
        self.observed += children;

        if self.mode == PolicyMode::Halted {
            return false;
        }

        let count = match config.scope {
            ThresholdScope::Cumulative => self.observed,
            ThresholdScope::PerDirectory => children,
        };
        if count <= config.limit {
            return true;
        }

        if self.mode == PolicyMode::Confirm {
            let declined = match config.on_limit {
                LimitAction::Ask => prompt.ask(self.observed).is_some_and(|a| is_decline(&a)),
                LimitAction::Stop => true,
                LimitAction::Continue => false,
            };
            if declined {
                tracing::debug!(observed = self.observed, "listing halted at limit");
                self.mode = PolicyMode::Halted;
                prompt.halted(self.observed);
                return false;
            }
            tracing::debug!(observed = self.observed, "limit accepted, no further prompts");
        }

        self.mode = PolicyMode::WalkThrough;
        true
    }
}
