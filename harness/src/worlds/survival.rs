//! `Survival`: the two-dimension hunger/food world.
//!
//! `eat` (cost 1) needs one food and lowers hunger by 5; `forage` (cost 2)
//! gathers one food. From hunger 10 with no food, the cheapest way to reach
//! hunger 0 costs 6: two forages and two eats.

use goap_search::contract::ActionModelV1;
use goap_search::policy::PlannerPolicyV1;
use goap_search::search::PlannerKind;

use crate::catalog::{ActionCatalogV1, CatalogError};
use crate::scenario::{ScenarioError, ScenarioV1};

/// The survival catalog document.
pub const SURVIVAL_CATALOG_JSON: &str = r#"{
  "dimensions": ["hunger", "has_food"],
  "actions": [
    {"name": "eat", "cost": 1,
     "precondition": {"at_least": {"dimension": "has_food", "value": 1}},
     "effects": [{"add": {"dimension": "hunger", "delta": -5}},
                 {"add": {"dimension": "has_food", "delta": -1}}]},
    {"name": "forage", "cost": 2,
     "effects": [{"add": {"dimension": "has_food", "delta": 1}}]}
  ]
}"#;

/// Load the survival catalog.
///
/// # Errors
///
/// Returns [`CatalogError`] only if the embedded document is invalid.
pub fn survival_catalog() -> Result<ActionCatalogV1, CatalogError> {
    ActionCatalogV1::from_json_str(SURVIVAL_CATALOG_JSON)
}

/// Hunger 10, no food; goal hunger 0, food don't-care.
///
/// # Errors
///
/// Returns [`ScenarioError`] only if the embedded catalog is invalid.
pub fn survival_scenario(planner: PlannerKind) -> Result<ScenarioV1, ScenarioError> {
    let catalog = survival_catalog()?;
    let initial = catalog
        .descriptor()
        .state(&[("hunger", 10), ("has_food", 0)])
        .map_err(|source| ScenarioError::State {
            role: "initial",
            source,
        })?;
    let goal = catalog
        .descriptor()
        .goal(&[("hunger", 0)])
        .map_err(|source| ScenarioError::State {
            role: "goal",
            source,
        })?;
    Ok(ScenarioV1 {
        catalog,
        initial,
        goal,
        planner,
        policy: PlannerPolicyV1::default(),
    })
}
