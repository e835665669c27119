//! Plan replay verification.
//!
//! Re-executes a plan against the action model and checks that every
//! recorded step is reproducible. This is the check behind "goal
//! satisfaction": a plan that verifies reaches a goal match from `initial`.

use goap_kernel::carrier::state::WorldState;

use crate::contract::{ActionId, ActionModelV1};
use crate::heuristic::is_goal_match;
use crate::plan::Plan;

/// Typed failure for plan replay. Step indices are zero-based.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReplayError {
    #[error("initial state has {actual} slots but the descriptor declares {expected}")]
    StateLengthMismatch { expected: usize, actual: usize },
    #[error("step {step}: action {action} is not valid from the preceding state")]
    StepNotApplicable { step: usize, action: ActionId },
    #[error("step {step}: recorded state {expected} but replay produced {actual}")]
    StateDivergence {
        step: usize,
        expected: WorldState,
        actual: WorldState,
    },
    #[error("recorded cost {recorded} differs from replayed cost {replayed}")]
    CostMismatch { recorded: i64, replayed: i64 },
    #[error("final state {final_state} does not satisfy the goal")]
    GoalNotSatisfied { final_state: WorldState },
}

/// Replay `plan` from `initial` and return the final state.
///
/// # Errors
///
/// Returns the first [`ReplayError`] encountered, in step order. Cost and
/// goal checks run only after every step replays cleanly.
pub fn verify_plan(
    model: &dyn ActionModelV1,
    initial: &WorldState,
    goal: &WorldState,
    plan: &Plan,
) -> Result<WorldState, ReplayError> {
    let expected = model.descriptor().len();
    if initial.len() != expected {
        return Err(ReplayError::StateLengthMismatch {
            expected,
            actual: initial.len(),
        });
    }

    let mut state = initial.clone();
    let mut replayed: i64 = 0;
    for (step, recorded) in plan.steps.iter().enumerate() {
        if !model.valid_actions(&state).contains(&recorded.action) {
            return Err(ReplayError::StepNotApplicable {
                step,
                action: recorded.action,
            });
        }
        let next = model.apply(recorded.action, &state);
        if next != recorded.state {
            return Err(ReplayError::StateDivergence {
                step,
                expected: recorded.state.clone(),
                actual: next,
            });
        }
        replayed = replayed.saturating_add(model.cost(recorded.action));
        state = next;
    }

    if replayed != plan.cost {
        return Err(ReplayError::CostMismatch {
            recorded: plan.cost,
            replayed,
        });
    }
    if !is_goal_match(&state, goal) {
        return Err(ReplayError::GoalNotSatisfied { final_state: state });
    }
    Ok(state)
}
