//! Iterative-deepening (IDA*-style) bounded depth-first search.
//!
//! Memory is linear in plan depth: the only state kept is the current path
//! from the initial state and one frame of pending actions per path entry.
//! Each round explores every path whose `f = g + h` stays within the bound;
//! the smallest `f` that exceeded it becomes the next bound.
//!
//! The depth-first walk is an explicit stack machine, so plan depth is not
//! limited by the call stack. A successor already on the current path is
//! skipped (full-path membership, not just the immediate parent), which
//! keeps zero-cost cycles from recursing forever.

use std::collections::HashSet;

use tracing::{debug, trace, warn};

use goap_kernel::carrier::state::WorldState;

use crate::contract::{audit_transition, ActionId, ActionModelV1};
use crate::error::PlanError;
use crate::heuristic::heuristic;
use crate::plan::{Plan, PlanStep};
use crate::policy::PlannerPolicyV1;
use crate::search::{validate_session, PlanResult, SearchStatsV1, TerminationReasonV1};

/// Result of one bounded depth-first round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoundOutcome {
    /// The path now ends in a goal match reached at this cost.
    Found { cost: i64 },
    /// No goal within the bound; retry with this (strictly larger) bound.
    Pruned { next_bound: i64 },
    /// Nothing was pruned: the reachable space holds no goal.
    Exhausted,
}

/// Reasons a round stops before reaching an outcome.
#[derive(Debug)]
enum Abort {
    Budget,
    Contract(String),
}

/// Pending successors of one path entry.
#[derive(Debug)]
struct Frame {
    g_cost: i64,
    actions: Vec<ActionId>,
    cursor: usize,
    min_pruned: Option<i64>,
}

/// Path-only search state, reused across rounds.
struct PathSearch<'a> {
    model: &'a dyn ActionModelV1,
    goal: &'a WorldState,
    max_expansions: u64,
    /// `path[0]` is the initial state (no action); the rest are plan steps.
    path: Vec<(Option<ActionId>, WorldState)>,
    on_path: HashSet<WorldState>,
    stats: SearchStatsV1,
}

impl<'a> PathSearch<'a> {
    fn new(
        model: &'a dyn ActionModelV1,
        initial: &WorldState,
        goal: &'a WorldState,
        max_expansions: u64,
    ) -> Self {
        let mut on_path = HashSet::new();
        on_path.insert(initial.clone());
        Self {
            model,
            goal,
            max_expansions,
            path: vec![(None, initial.clone())],
            on_path,
            stats: SearchStatsV1::default(),
        }
    }

    fn tip(&self) -> &WorldState {
        &self.path[self.path.len() - 1].1
    }

    fn push(&mut self, action: ActionId, state: WorldState) {
        self.on_path.insert(state.clone());
        self.path.push((Some(action), state));
        self.stats.nodes_generated += 1;
        let depth = (self.path.len() - 1) as u64;
        if depth > self.stats.max_path_depth {
            self.stats.max_path_depth = depth;
        }
    }

    fn pop(&mut self) {
        if self.path.len() > 1 {
            if let Some((_, state)) = self.path.pop() {
                self.on_path.remove(&state);
            }
        }
    }

    /// Enumerate the successors of the path tip, charging one expansion.
    fn expand(&mut self, g_cost: i64) -> Result<Frame, Abort> {
        if self.stats.expansions >= self.max_expansions {
            return Err(Abort::Budget);
        }
        self.stats.expansions += 1;
        Ok(Frame {
            g_cost,
            actions: self.model.valid_actions(self.tip()),
            cursor: 0,
            min_pruned: None,
        })
    }

    /// One depth-first round under `bound`, starting from `path[0]`.
    ///
    /// On `Found` the path is left holding the solution; otherwise it is
    /// unwound back to the initial state.
    fn round(&mut self, bound: i64) -> Result<RoundOutcome, Abort> {
        let h = heuristic(self.tip(), self.goal);
        if h > bound {
            return Ok(RoundOutcome::Pruned { next_bound: h });
        }
        if h == 0 {
            return Ok(RoundOutcome::Found { cost: 0 });
        }

        let mut stack = vec![self.expand(0)?];
        loop {
            let Some(frame) = stack.last_mut() else {
                return Ok(RoundOutcome::Exhausted);
            };

            let Some(&action) = frame.actions.get(frame.cursor) else {
                let min_pruned = frame.min_pruned;
                stack.pop();
                let Some(parent) = stack.last_mut() else {
                    return Ok(min_pruned.map_or(RoundOutcome::Exhausted, |next_bound| {
                        RoundOutcome::Pruned { next_bound }
                    }));
                };
                parent.min_pruned = min_option(parent.min_pruned, min_pruned);
                self.pop();
                continue;
            };
            frame.cursor += 1;
            let g_cost = frame.g_cost;

            let cost = self.model.cost(action);
            let next = self.model.apply(action, self.tip());
            audit_transition(self.model, action, cost, &next).map_err(Abort::Contract)?;

            if self.on_path.contains(&next) {
                self.stats.cycles_skipped += 1;
                continue;
            }

            let child_g = g_cost.saturating_add(cost);
            let h = heuristic(&next, self.goal);
            let f = child_g.saturating_add(h);
            if f > bound {
                frame.min_pruned = min_option(frame.min_pruned, Some(f));
                continue;
            }

            self.push(action, next);
            if h == 0 {
                return Ok(RoundOutcome::Found { cost: child_g });
            }
            stack.push(self.expand(child_g)?);
        }
    }

    fn into_steps(self) -> Vec<PlanStep> {
        self.path
            .into_iter()
            .filter_map(|(action, state)| action.map(|action| PlanStep { action, state }))
            .collect()
    }
}

fn min_option(a: Option<i64>, b: Option<i64>) -> Option<i64> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (x, None) => x,
        (None, y) => y,
    }
}

/// Plan with iterative-deepening bounded depth-first search.
///
/// The bound starts at `heuristic(initial, goal)` and only grows. Successors
/// are tried in the order `model.valid_actions` reports them, so equal inputs
/// always yield the same plan.
///
/// # Errors
///
/// Returns [`PlanError`] only for pre-flight validation failures. Every
/// runtime outcome, including failure, is an `Ok(PlanResult)`.
pub fn plan_iterative_deepening(
    model: &dyn ActionModelV1,
    initial: &WorldState,
    goal: &WorldState,
    policy: &PlannerPolicyV1,
) -> Result<PlanResult, PlanError> {
    validate_session(model, initial, goal, policy)?;

    let mut search = PathSearch::new(model, initial, goal, policy.max_expansions);
    let mut bound = heuristic(initial, goal);

    let termination = loop {
        if search.stats.iterations >= policy.max_iterations {
            break TerminationReasonV1::IterationBudgetExceeded;
        }
        search.stats.iterations += 1;
        let iteration = search.stats.iterations;
        trace!(bound, iteration, "deepening round");

        match search.round(bound) {
            Ok(RoundOutcome::Found { cost }) => {
                let stats = search.stats.clone();
                let plan = Plan {
                    cost,
                    steps: search.into_steps(),
                };
                debug!(
                    cost,
                    steps = plan.len(),
                    iterations = stats.iterations,
                    expansions = stats.expansions,
                    "iterative deepening reached goal"
                );
                return Ok(PlanResult::goal_reached(plan, stats));
            }
            Ok(RoundOutcome::Pruned { next_bound }) => {
                debug_assert!(next_bound > bound);
                bound = next_bound;
            }
            Ok(RoundOutcome::Exhausted) => break TerminationReasonV1::NoPlanFound,
            Err(Abort::Budget) => break TerminationReasonV1::ExpansionBudgetExceeded,
            Err(Abort::Contract(detail)) => {
                warn!(%detail, "action model contract violation");
                break TerminationReasonV1::ActionModelContractViolation { detail };
            }
        }
    };

    debug!(
        reason = ?termination,
        iterations = search.stats.iterations,
        expansions = search.stats.expansions,
        "iterative deepening failed"
    );
    Ok(PlanResult::failed(termination, search.stats))
}
