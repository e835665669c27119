//! GOAP Search: goal-oriented action planning over discrete world states.
//!
//! Two independent strategies search the same data model and return the same
//! result shape:
//!
//! - [`astar::plan_best_first`]: A*-style graph search with one node per
//!   distinct state and re-opening on cheaper rediscovery.
//! - [`ida::plan_iterative_deepening`]: IDA*-style bounded depth-first search
//!   with linear memory and on-path cycle skipping.
//!
//! This crate depends only on `goap_kernel`; it does NOT depend on
//! `goap_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! goap_kernel  ←  goap_search  ←  goap_harness
//! (state, hash)   (planners)       (catalog, scenarios, runner)
//! ```
//!
//! # Key types
//!
//! - [`ActionModelV1`](contract::ActionModelV1): the action model a planner searches over
//! - [`PlannerPolicyV1`](policy::PlannerPolicyV1): expansion and iteration budgets
//! - [`PlanResult`](search::PlanResult): plan, termination reason and counters
//! - [`Plan`](plan::Plan): ordered `(action, resulting state)` steps

#![forbid(unsafe_code)]

pub mod astar;
pub mod contract;
pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod ida;
pub mod node;
pub mod plan;
pub mod policy;
pub mod render;
pub mod replay;
pub mod search;
pub mod table;

#[cfg(test)]
mod test_models;
