//! Scenario and catalog loading lock tests: on-disk round trip through the
//! runner, and typed rejection of malformed documents.

use goap_harness::catalog::{ActionCatalogV1, CatalogError};
use goap_harness::runner::run_scenario;
use goap_harness::scenario::{ScenarioError, ScenarioV1};
use goap_harness::worlds::survival::SURVIVAL_CATALOG_JSON;
use goap_search::search::{PlannerKind, TerminationReasonV1};
use lock_tests::fixtures::LOCKED_DOOR;

fn write_scenario(dir: &std::path::Path, body: &str) -> std::path::PathBuf {
    std::fs::write(dir.join("survival.catalog.json"), SURVIVAL_CATALOG_JSON).unwrap();
    let path = dir.join("scenario.json");
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn scenario_file_runs_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_scenario(
        dir.path(),
        r#"{
            "catalog": "survival.catalog.json",
            "initial": {"hunger": 10},
            "goal": {"hunger": 0},
            "planner": "iterative_deepening",
            "policy": {"max_expansions": 500}
        }"#,
    );
    let scenario = ScenarioV1::from_path(&path).unwrap();
    assert_eq!(scenario.planner, PlannerKind::IterativeDeepening);
    assert_eq!(scenario.policy.max_expansions, 500);

    let report = run_scenario(&scenario).unwrap();
    assert_eq!(report.cost(), Some(6));
    let rendered = report.rendered.unwrap();
    assert_eq!(rendered.lines().count(), 6);
    assert!(rendered.contains("         forage: |    10||       1|\n"));
}

#[test]
fn scenario_budget_flows_into_termination() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_scenario(
        dir.path(),
        r#"{"catalog": "survival.catalog.json", "initial": {"hunger": 10},
            "goal": {"hunger": 0}, "policy": {"max_expansions": 1}}"#,
    );
    let report = run_scenario(&ScenarioV1::from_path(&path).unwrap()).unwrap();
    assert_eq!(
        report.termination_reason,
        TerminationReasonV1::ExpansionBudgetExceeded
    );
}

#[test]
fn inline_catalog_unreachable_goal_reports_no_plan() {
    let json = format!(r#"{{"catalog": {LOCKED_DOOR}, "goal": {{"door": 1}}}}"#);
    let report = run_scenario(&ScenarioV1::from_json_str(&json).unwrap()).unwrap();
    assert_eq!(report.termination_reason, TerminationReasonV1::NoPlanFound);
    assert!(report.plan_digest.is_none());
}

#[test]
fn malformed_documents_rejected_with_typed_errors() {
    assert!(matches!(
        ActionCatalogV1::from_json_str("{not json").unwrap_err(),
        CatalogError::Json(_)
    ));
    assert!(matches!(
        ActionCatalogV1::from_json_str(
            r#"{"dimensions": ["x"], "actions": [{"name": "a", "cost": 1,
                "effects": [{"add": {"dimension": "y", "delta": 1}}]}]}"#
        )
        .unwrap_err(),
        CatalogError::UnknownDimension { .. }
    ));
    assert!(matches!(
        ScenarioV1::from_json_str(r#"{"initial": {}}"#).unwrap_err(),
        ScenarioError::Json(_)
    ));
    let json = format!(r#"{{"catalog": {LOCKED_DOOR}, "initial": {{"window": 1}}}}"#);
    assert!(matches!(
        ScenarioV1::from_json_str(&json).unwrap_err(),
        ScenarioError::State { role: "initial", .. }
    ));
}

#[test]
fn unreadable_scenario_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    let err = ScenarioV1::from_path(&missing).unwrap_err();
    assert!(err.to_string().contains("missing.json"), "{err}");
}
