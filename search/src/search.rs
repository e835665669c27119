//! Planner entry points, result types and pre-flight validation.

use serde::{Deserialize, Serialize};

use goap_kernel::carrier::state::WorldState;

use crate::contract::ActionModelV1;
use crate::error::{PlanError, StateRole};
use crate::plan::Plan;
use crate::policy::PlannerPolicyV1;

/// Why a planning call stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReasonV1 {
    /// A goal-matching state was reached; the result carries the plan.
    GoalReached,
    /// The reachable state space was exhausted without a goal match.
    ///
    /// Both planners report "unreachable goal" this way, including an
    /// iterative-deepening run whose bound has nowhere further to grow.
    NoPlanFound,
    /// `max_expansions` was reached first.
    ExpansionBudgetExceeded,
    /// `max_iterations` deepening rounds ran without a result.
    IterationBudgetExceeded,
    /// The action model broke its contract (negative cost, malformed state).
    ActionModelContractViolation { detail: String },
}

impl TerminationReasonV1 {
    /// Stable `snake_case` label.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GoalReached => "goal_reached",
            Self::NoPlanFound => "no_plan_found",
            Self::ExpansionBudgetExceeded => "expansion_budget_exceeded",
            Self::IterationBudgetExceeded => "iteration_budget_exceeded",
            Self::ActionModelContractViolation { .. } => "action_model_contract_violation",
        }
    }

    /// JSON projection: `{"type": label}` plus `detail` for contract violations.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::ActionModelContractViolation { detail } => {
                serde_json::json!({"detail": detail, "type": self.as_str()})
            }
            _ => serde_json::json!({"type": self.as_str()}),
        }
    }
}

/// Search counters, for diagnostics and benchmarks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStatsV1 {
    /// Nodes whose successors were enumerated.
    pub expansions: u64,
    /// Distinct nodes created (best-first) or path pushes (deepening).
    pub nodes_generated: u64,
    /// Successors dropped because a node with equal or lower cost existed.
    pub duplicates_suppressed: u64,
    /// Open nodes whose cost was lowered in place.
    pub nodes_relaxed: u64,
    /// Closed nodes moved back to open after a cheaper path was found.
    pub nodes_reopened: u64,
    /// Successors skipped because they were already on the current path.
    pub cycles_skipped: u64,
    /// Deepening rounds started (0 for best-first).
    pub iterations: u64,
    /// Largest frontier heap size (best-first).
    pub frontier_high_water: u64,
    /// Longest path held at once (deepening).
    pub max_path_depth: u64,
}

impl SearchStatsV1 {
    /// JSON projection with every counter.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "cycles_skipped": self.cycles_skipped,
            "duplicates_suppressed": self.duplicates_suppressed,
            "expansions": self.expansions,
            "frontier_high_water": self.frontier_high_water,
            "iterations": self.iterations,
            "max_path_depth": self.max_path_depth,
            "nodes_generated": self.nodes_generated,
            "nodes_relaxed": self.nodes_relaxed,
            "nodes_reopened": self.nodes_reopened,
        })
    }
}

/// Outcome of a planning call.
///
/// Failures are values: check [`PlanResult::is_goal_reached`] or inspect
/// `termination_reason`. An empty `plan` with `GoalReached` means the initial
/// state already satisfied the goal, which is distinct from `NoPlanFound`.
#[derive(Debug, Clone)]
pub struct PlanResult {
    /// The plan (present iff the goal was reached).
    pub plan: Option<Plan>,
    /// Why the search stopped.
    pub termination_reason: TerminationReasonV1,
    /// Search counters.
    pub stats: SearchStatsV1,
}

impl PlanResult {
    pub(crate) fn goal_reached(plan: Plan, stats: SearchStatsV1) -> Self {
        Self {
            plan: Some(plan),
            termination_reason: TerminationReasonV1::GoalReached,
            stats,
        }
    }

    pub(crate) fn failed(reason: TerminationReasonV1, stats: SearchStatsV1) -> Self {
        Self {
            plan: None,
            termination_reason: reason,
            stats,
        }
    }

    /// Returns `true` if the search terminated because a goal was reached.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.termination_reason == TerminationReasonV1::GoalReached
    }

    /// Total plan cost, if a plan was found.
    #[must_use]
    pub fn cost(&self) -> Option<i64> {
        self.plan.as_ref().map(|p| p.cost)
    }
}

/// The two alternative search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlannerKind {
    /// A*-style graph search ([`crate::astar::plan_best_first`]).
    #[default]
    BestFirst,
    /// IDA*-style bounded depth-first search
    /// ([`crate::ida::plan_iterative_deepening`]).
    IterativeDeepening,
}

impl PlannerKind {
    /// Both strategies, in a fixed order.
    pub const ALL: [Self; 2] = [Self::BestFirst, Self::IterativeDeepening];
}

impl std::fmt::Display for PlannerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BestFirst => f.write_str("best_first"),
            Self::IterativeDeepening => f.write_str("iterative_deepening"),
        }
    }
}

/// Run the planner selected by `kind`.
///
/// # Errors
///
/// Returns [`PlanError`] for pre-flight validation failures.
pub fn plan(
    kind: PlannerKind,
    model: &dyn ActionModelV1,
    initial: &WorldState,
    goal: &WorldState,
    policy: &PlannerPolicyV1,
) -> Result<PlanResult, PlanError> {
    match kind {
        PlannerKind::BestFirst => crate::astar::plan_best_first(model, initial, goal, policy),
        PlannerKind::IterativeDeepening => {
            crate::ida::plan_iterative_deepening(model, initial, goal, policy)
        }
    }
}

/// Pre-flight checks shared by both planners.
pub(crate) fn validate_session(
    model: &dyn ActionModelV1,
    initial: &WorldState,
    goal: &WorldState,
    policy: &PlannerPolicyV1,
) -> Result<(), PlanError> {
    policy.validate()?;
    let expected = model.descriptor().len();
    for (role, state) in [(StateRole::Initial, initial), (StateRole::Goal, goal)] {
        if state.len() != expected {
            return Err(PlanError::StateLengthMismatch {
                role,
                expected,
                actual: state.len(),
            });
        }
    }
    if let Some(slot) = initial.first_negative_slot() {
        return Err(PlanError::NegativeInitialValue {
            slot,
            value: initial.get(slot).unwrap_or_default(),
        });
    }
    Ok(())
}
