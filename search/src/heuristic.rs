//! Admissible distance estimate between a state and a (partial) goal.

use goap_kernel::carrier::state::{is_dont_care, WorldState};

/// Sum of absolute per-dimension differences, skipping don't-care goal slots.
///
/// Admissible and consistent only when every action's cost is at least the
/// total change it makes to the modeled dimensions; that guarantee belongs to
/// the action model. Callers must pass equal-length states (planners validate
/// this before search); extra slots on either side are ignored.
#[must_use]
pub fn heuristic(from: &WorldState, to: &WorldState) -> i64 {
    from.as_slice()
        .iter()
        .zip(to.as_slice())
        .filter(|&(_, &want)| !is_dont_care(want))
        .map(|(&have, &want)| (i64::from(have) - i64::from(want)).abs())
        .sum()
}

/// Whether `state` satisfies `goal` on every constrained dimension.
#[must_use]
pub fn is_goal_match(state: &WorldState, goal: &WorldState) -> bool {
    heuristic(state, goal) == 0
}
