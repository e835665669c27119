//! Plans: the ordered step list a planner returns.

use serde::{Deserialize, Serialize};

use goap_kernel::carrier::state::WorldState;
use goap_kernel::proof::canon::{canonical_json_bytes, CanonError};
use goap_kernel::proof::hash::{canonical_hash, ContentHash};

use crate::contract::{ActionId, ActionModelV1};

/// Domain prefix for plan digests.
pub const DOMAIN_PLAN: &[u8] = b"GOAP::PLAN::V1\0";

/// One action of a plan and the state it produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanStep {
    pub action: ActionId,
    pub state: WorldState,
}

/// A minimum-cost action sequence.
///
/// `steps[0]` is the first action to take from the initial state. The
/// initial state itself is not a step; an empty plan means the initial state
/// already satisfies the goal.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Plan {
    /// Sum of the costs of all steps.
    pub cost: i64,
    /// Steps in execution order.
    pub steps: Vec<PlanStep>,
}

impl Plan {
    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the plan has no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Action ids in execution order.
    pub fn actions(&self) -> impl Iterator<Item = ActionId> + '_ {
        self.steps.iter().map(|s| s.action)
    }

    /// Action names in execution order, resolved through `model`.
    #[must_use]
    pub fn action_names(&self, model: &dyn ActionModelV1) -> Vec<String> {
        self.actions()
            .map(|a| model.action_name(a).to_string())
            .collect()
    }

    /// State after the last step, or `initial` for an empty plan.
    #[must_use]
    pub fn final_state<'a>(&'a self, initial: &'a WorldState) -> &'a WorldState {
        self.steps.last().map_or(initial, |s| &s.state)
    }

    /// Canonical JSON bytes: `{"cost":..,"steps":[{"action":..,"state":[..]},..]}`.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonicalization fails (plans hold only
    /// integers, so this does not happen for well-formed plans).
    pub fn canonical_bytes(&self) -> Result<Vec<u8>, CanonError> {
        let steps: Vec<serde_json::Value> = self
            .steps
            .iter()
            .map(|s| {
                serde_json::json!({
                    "action": s.action.0,
                    "state": s.state.as_slice(),
                })
            })
            .collect();
        canonical_json_bytes(&serde_json::json!({
            "cost": self.cost,
            "steps": steps,
        }))
    }

    /// Content hash of [`Self::canonical_bytes`] under [`DOMAIN_PLAN`].
    ///
    /// # Errors
    ///
    /// Propagates [`CanonError`] from [`Self::canonical_bytes`].
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        Ok(canonical_hash(DOMAIN_PLAN, &self.canonical_bytes()?))
    }
}
