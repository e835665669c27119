//! Action model contract trait.

use serde::{Deserialize, Serialize};

use goap_kernel::carrier::descriptor::DimensionDescriptor;
use goap_kernel::carrier::state::WorldState;

/// Identifier of an action in an action model's catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionId(pub u32);

impl ActionId {
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The id as a catalog index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ActionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The collaborator a planner searches over.
///
/// The planner owns no action semantics: enumeration, effects and pricing
/// all come from here.
///
/// # Contract
///
/// - `apply` is a pure function of `(action, state)`.
/// - `cost` is non-negative. Strictly positive costs are not required, but
///   zero-cost actions that leave the state unchanged must never be reported
///   as valid (every valid action changes at least one dimension).
/// - States returned by `apply` have `descriptor().len()` slots and no
///   negative values.
/// - Enumeration order only affects tie-breaking, never correctness.
///
/// Violations detected during search terminate it with
/// [`crate::search::TerminationReasonV1::ActionModelContractViolation`].
///
/// Implementations shared between threads must be safe for concurrent
/// read-only queries; planners only ever take `&self`.
pub trait ActionModelV1 {
    /// Named dimensions; its length fixes the state length for a session.
    fn descriptor(&self) -> &DimensionDescriptor;

    /// Actions whose preconditions `state` satisfies.
    fn valid_actions(&self, state: &WorldState) -> Vec<ActionId>;

    /// The state after applying `action`'s effects to `state`.
    fn apply(&self, action: ActionId, state: &WorldState) -> WorldState;

    /// Non-negative cost of `action`.
    fn cost(&self, action: ActionId) -> i64;

    /// Human-readable name, for diagnostics only.
    fn action_name(&self, action: ActionId) -> &str;
}

/// Check one transition reported by the model against the contract.
///
/// Returns a human-readable violation detail on failure.
pub(crate) fn audit_transition(
    model: &dyn ActionModelV1,
    action: ActionId,
    cost: i64,
    next: &WorldState,
) -> Result<(), String> {
    if cost < 0 {
        return Err(format!(
            "action {} ({action}) has negative cost {cost}",
            model.action_name(action)
        ));
    }
    let expected = model.descriptor().len();
    if next.len() != expected {
        return Err(format!(
            "action {} ({action}) produced a state with {} slots, expected {expected}",
            model.action_name(action),
            next.len()
        ));
    }
    if let Some(slot) = next.first_negative_slot() {
        return Err(format!(
            "action {} ({action}) produced negative value {} in slot {slot}",
            model.action_name(action),
            next.get(slot).unwrap_or_default()
        ));
    }
    Ok(())
}
