//! Best-first (A*-style) graph search.
//!
//! One node per distinct state (see [`NodeTable`]). A cheaper rediscovery of
//! an open node lowers its cost in place; a cheaper rediscovery of a closed
//! node lowers its cost and re-opens it, so its successors are re-expanded
//! with the better cost. Cheaper paths are never discarded.

use tracing::{debug, trace, warn};

use goap_kernel::carrier::state::WorldState;

use crate::contract::{audit_transition, ActionModelV1};
use crate::error::PlanError;
use crate::frontier::BestFirstFrontier;
use crate::heuristic::heuristic;
use crate::node::NodeStatus;
use crate::plan::Plan;
use crate::policy::PlannerPolicyV1;
use crate::search::{validate_session, PlanResult, SearchStatsV1, TerminationReasonV1};
use crate::table::NodeTable;

/// Plan with best-first graph search.
///
/// Returns the minimum-cost plan when the heuristic is admissible for
/// `model`. Successors are generated in the order `model.valid_actions`
/// reports them; frontier ties are broken by node creation order, so equal
/// inputs always yield the same plan.
///
/// # Errors
///
/// Returns [`PlanError`] only for pre-flight validation failures. Every
/// runtime outcome, including failure, is an `Ok(PlanResult)`.
pub fn plan_best_first(
    model: &dyn ActionModelV1,
    initial: &WorldState,
    goal: &WorldState,
    policy: &PlannerPolicyV1,
) -> Result<PlanResult, PlanError> {
    validate_session(model, initial, goal, policy)?;

    let mut table = NodeTable::new();
    let mut frontier = BestFirstFrontier::new();
    let mut stats = SearchStatsV1::default();

    let root = table.insert(None, initial.clone(), None, 0, heuristic(initial, goal), 0);
    frontier.push(table.get(root));
    stats.nodes_generated = 1;

    let termination = 'search: loop {
        let Some(current_id) = frontier.pop(&table) else {
            break TerminationReasonV1::NoPlanFound;
        };
        let current = table.get(current_id);

        if current.h_cost == 0 {
            let plan = Plan {
                cost: current.g_cost,
                steps: table.path_to(current_id),
            };
            stats.frontier_high_water = frontier.high_water();
            debug!(
                cost = plan.cost,
                steps = plan.len(),
                expansions = stats.expansions,
                nodes = table.len(),
                "best-first search reached goal"
            );
            return Ok(PlanResult::goal_reached(plan, stats));
        }

        if stats.expansions >= policy.max_expansions {
            break TerminationReasonV1::ExpansionBudgetExceeded;
        }

        let state = current.state.clone();
        let g_cost = current.g_cost;
        let f_cost = current.f_cost();
        let depth = current.depth + 1;
        table.close(current_id);
        stats.expansions += 1;
        trace!(node = current_id, g_cost, f_cost, "expand");

        for action in model.valid_actions(&state) {
            let cost = model.cost(action);
            let next = model.apply(action, &state);
            if let Err(detail) = audit_transition(model, action, cost, &next) {
                warn!(%detail, "action model contract violation");
                break 'search TerminationReasonV1::ActionModelContractViolation { detail };
            }
            let tentative = g_cost.saturating_add(cost);

            if let Some(existing) = table.lookup(&next) {
                if tentative < table.get(existing).g_cost {
                    match table.relax(existing, current_id, action, tentative, depth) {
                        NodeStatus::Open => stats.nodes_relaxed += 1,
                        NodeStatus::Closed => stats.nodes_reopened += 1,
                    }
                    frontier.push(table.get(existing));
                } else {
                    stats.duplicates_suppressed += 1;
                }
                continue;
            }

            let h_cost = heuristic(&next, goal);
            let child = table.insert(
                Some(current_id),
                next,
                Some(action),
                tentative,
                h_cost,
                depth,
            );
            frontier.push(table.get(child));
            stats.nodes_generated += 1;
        }
    };

    stats.frontier_high_water = frontier.high_water();
    debug!(
        reason = ?termination,
        expansions = stats.expansions,
        nodes = table.len(),
        "best-first search failed"
    );
    Ok(PlanResult::failed(termination, stats))
}
