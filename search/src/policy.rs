//! Planner policy: search budgets.

use serde::{Deserialize, Serialize};

use crate::error::PlanError;

/// Budgets bounding a planning call.
///
/// The search itself has no cancellation; these caps are how an embedding
/// system bounds latency. Exhausting either cap is reported as a failed
/// plan, never as a panic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlannerPolicyV1 {
    /// Hard cap on node expansions (summed over all deepening iterations).
    pub max_expansions: u64,
    /// Cap on deepening rounds, the first round at `h(initial)` included.
    /// Best-first never consumes it, but [`Self::validate`] rejects 0 for
    /// either planner.
    pub max_iterations: u64,
}

impl PlannerPolicyV1 {
    /// A policy with no practical budget.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            max_expansions: u64::MAX,
            max_iterations: u64::MAX,
        }
    }

    /// Validate that both budgets allow at least one step.
    ///
    /// The check does not depend on the planner kind, so a policy that
    /// validates can be handed to either planner.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::InvalidPolicy`] if either cap is zero.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.max_expansions == 0 {
            return Err(PlanError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        if self.max_iterations == 0 {
            return Err(PlanError::InvalidPolicy {
                detail: "max_iterations must be at least 1".into(),
            });
        }
        Ok(())
    }
}

impl Default for PlannerPolicyV1 {
    fn default() -> Self {
        Self {
            max_expansions: 100_000,
            max_iterations: 10_000,
        }
    }
}
