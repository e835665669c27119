//! Planner property lock tests: optimality, goal satisfaction, idempotence,
//! failure correctness and cycle safety, checked against both planners.

use goap_harness::worlds::counter_lattice::CounterLattice;
use goap_harness::worlds::survival::survival_catalog;
use goap_kernel::carrier::state::{WorldState, DONT_CARE};
use goap_search::contract::ActionModelV1;
use goap_search::replay::verify_plan;
use goap_search::search::{PlannerKind, TerminationReasonV1};
use lock_tests::fixtures::{catalog, goal, plan_both, state, LOCKED_DOOR, TWO_CYCLE};

// ---------------------------------------------------------------------------
// Worked example
// ---------------------------------------------------------------------------

#[test]
fn survival_example_costs_six_for_both_planners() {
    let model = survival_catalog().unwrap();
    let initial = state(&model, &[("hunger", 10), ("has_food", 0)]);
    let target = goal(&model, &[("hunger", 0)]);
    assert_eq!(target.as_slice(), &[0, DONT_CARE]);

    for (kind, result) in plan_both(&model, &initial, &target) {
        assert!(result.is_goal_reached(), "{kind}");
        let plan = result.plan.unwrap();
        assert_eq!(plan.cost, 6, "{kind}");
        let names = plan.action_names(&model);
        assert_eq!(names.iter().filter(|n| *n == "forage").count(), 2, "{kind}");
        assert_eq!(names.iter().filter(|n| *n == "eat").count(), 2, "{kind}");
    }
}

// ---------------------------------------------------------------------------
// Optimality
// ---------------------------------------------------------------------------

#[test]
fn both_planners_return_equal_minimal_cost_on_admissible_lattice() {
    let world = CounterLattice::new(3, 4).unwrap();
    let cases: [(&[i32], &[i32], i64); 4] = [
        (&[0, 0, 0], &[3, 1, 2], 6),
        (&[4, 4, 4], &[0, DONT_CARE, 2], 6),
        (&[1, 2, 3], &[1, 2, 3], 0),
        (&[0, 4, 0], &[4, 0, DONT_CARE], 8),
    ];
    for (initial, target, expected) in cases {
        let initial = WorldState::from(initial);
        let target = WorldState::from(target);
        let results = plan_both(&world, &initial, &target);
        for (kind, result) in &results {
            assert_eq!(
                result.cost(),
                Some(expected),
                "{kind}: {initial} -> {target}"
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Goal satisfaction
// ---------------------------------------------------------------------------

#[test]
fn returned_plans_replay_to_a_goal_match() {
    let world = CounterLattice::new(4, 3).unwrap();
    let initial = WorldState::from_slots(vec![0, 3, 1, 2]);
    let target = WorldState::from_slots(vec![3, 0, DONT_CARE, 2]);
    for (kind, result) in plan_both(&world, &initial, &target) {
        let plan = result.plan.unwrap();
        let reached = verify_plan(&world, &initial, &target, &plan)
            .unwrap_or_else(|e| panic!("{kind}: {e}"));
        assert_eq!(reached.get(0), Some(3), "{kind}");
        assert_eq!(reached.get(1), Some(0), "{kind}");
        assert_eq!(reached.get(3), Some(2), "{kind}");
        assert_eq!(&reached, plan.final_state(&initial), "{kind}");
    }
}

// ---------------------------------------------------------------------------
// Idempotence
// ---------------------------------------------------------------------------

#[test]
fn satisfied_goal_yields_empty_successful_plan() {
    let model = survival_catalog().unwrap();
    let initial = state(&model, &[("hunger", 0), ("has_food", 2)]);
    let target = goal(&model, &[("hunger", 0)]);
    for (kind, result) in plan_both(&model, &initial, &target) {
        assert_eq!(
            result.termination_reason,
            TerminationReasonV1::GoalReached,
            "{kind}"
        );
        let plan = result.plan.unwrap();
        assert!(plan.is_empty(), "{kind}");
        assert_eq!(plan.cost, 0, "{kind}");
    }
}

#[test]
fn all_dont_care_goal_is_satisfied_by_any_state() {
    let model = catalog(LOCKED_DOOR);
    let initial = state(&model, &[("steps", 2)]);
    let target = goal(&model, &[]);
    for (kind, result) in plan_both(&model, &initial, &target) {
        assert_eq!(result.cost(), Some(0), "{kind}");
    }
}

// ---------------------------------------------------------------------------
// Failure correctness
// ---------------------------------------------------------------------------

#[test]
fn unreachable_goal_reports_no_plan_not_empty_plan() {
    let model = catalog(LOCKED_DOOR);
    let initial = state(&model, &[]);
    let target = goal(&model, &[("door", 1)]);
    for (kind, result) in plan_both(&model, &initial, &target) {
        assert_eq!(
            result.termination_reason,
            TerminationReasonV1::NoPlanFound,
            "{kind}"
        );
        assert!(result.plan.is_none(), "{kind}");
        assert_eq!(result.cost(), None, "{kind}");
    }
}

#[test]
fn goal_beyond_lattice_cap_is_no_plan() {
    let world = CounterLattice::new(1, 2).unwrap();
    let initial = world.uniform(0);
    let target = WorldState::from_slots(vec![3]);
    for (kind, result) in plan_both(&world, &initial, &target) {
        assert_eq!(
            result.termination_reason,
            TerminationReasonV1::NoPlanFound,
            "{kind}"
        );
    }
}

// ---------------------------------------------------------------------------
// Cycle safety
// ---------------------------------------------------------------------------

#[test]
fn zero_cost_two_cycle_terminates_for_both_planners() {
    let model = catalog(TWO_CYCLE);
    let initial = state(&model, &[]);
    let target = goal(&model, &[("target", 1)]);
    for (kind, result) in plan_both(&model, &initial, &target) {
        assert_eq!(
            result.termination_reason,
            TerminationReasonV1::NoPlanFound,
            "{kind}"
        );
        if kind == PlannerKind::IterativeDeepening {
            assert!(result.stats.cycles_skipped > 0);
            assert_eq!(result.stats.max_path_depth, 1);
        }
    }
}

#[test]
fn zero_cost_cycle_does_not_block_reachable_goal() {
    let model = catalog(TWO_CYCLE);
    let initial = state(&model, &[]);
    let target = goal(&model, &[("switch", 1)]);
    for (kind, result) in plan_both(&model, &initial, &target) {
        let plan = result.plan.unwrap();
        assert_eq!(plan.action_names(&model), vec!["on"], "{kind}");
        assert_eq!(plan.cost, 0, "{kind}");
    }
}

#[test]
fn descriptor_length_governs_session_shape() {
    let model = survival_catalog().unwrap();
    assert_eq!(model.descriptor().len(), 2);
    assert_eq!(
        model.descriptor().names().collect::<Vec<_>>(),
        vec!["hunger", "has_food"]
    );
}
