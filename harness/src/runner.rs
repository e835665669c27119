//! Harness runner: plans a scenario and packages a verified report.
//!
//! The runner uses ONLY search-crate APIs. It does not implement any search
//! or replay logic itself.
//!
//! # Pipeline
//!
//! ```text
//! validate (pre-flight) → plan(kind) → verify_plan() → render_plan()
//!   → Plan::digest() → PlanReportV1 → report digest
//! ```
//!
//! A plan that fails replay verification is a planner bug and surfaces as
//! [`RunError::Replay`], never as a report.

use tracing::info;

use goap_kernel::carrier::state::WorldState;
use goap_kernel::proof::canon::{canonical_json_bytes, CanonError};
use goap_kernel::proof::hash::{canonical_hash, ContentHash};
use goap_search::contract::ActionModelV1;
use goap_search::error::PlanError;
use goap_search::plan::Plan;
use goap_search::policy::PlannerPolicyV1;
use goap_search::render::render_plan;
use goap_search::replay::{verify_plan, ReplayError};
use goap_search::search::{plan, PlannerKind, SearchStatsV1, TerminationReasonV1};

use crate::scenario::{ScenarioError, ScenarioV1};

/// Domain prefix for report digests.
pub const DOMAIN_PLAN_REPORT: &[u8] = b"GOAP::PLAN_REPORT::V1\0";

/// Error during a harness run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// Pre-flight validation rejected the session.
    #[error(transparent)]
    Plan(#[from] PlanError),
    /// The returned plan did not replay (planner bug or impure model).
    #[error("plan failed replay verification: {0}")]
    Replay(#[from] ReplayError),
    /// Canonical JSON serialization failed.
    #[error("canonicalization failed: {0}")]
    Canon(#[from] CanonError),
    /// The scenario could not be loaded.
    #[error(transparent)]
    Scenario(#[from] ScenarioError),
}

/// A replay-verified plan, its diagnostics and its digests.
#[derive(Debug, Clone)]
pub struct PlanReportV1 {
    pub planner: PlannerKind,
    pub policy: PlannerPolicyV1,
    pub termination_reason: TerminationReasonV1,
    pub stats: SearchStatsV1,
    /// Present iff the goal was reached.
    pub plan: Option<Plan>,
    /// Action names in execution order (empty without a plan).
    pub action_names: Vec<String>,
    /// [`WorldState::fingerprint`] of the initial state.
    pub initial_fingerprint: ContentHash,
    /// State after the last step (present iff the goal was reached).
    pub final_state: Option<WorldState>,
    /// Fingerprint of `final_state`.
    pub final_fingerprint: Option<ContentHash>,
    /// [`render_plan`] output (present iff the goal was reached).
    pub rendered: Option<String>,
    /// [`Plan::digest`] (present iff the goal was reached).
    pub plan_digest: Option<ContentHash>,
}

impl PlanReportV1 {
    /// Whether the run produced a verified plan.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.termination_reason == TerminationReasonV1::GoalReached
    }

    /// Total plan cost, if a plan was found.
    #[must_use]
    pub fn cost(&self) -> Option<i64> {
        self.plan.as_ref().map(|p| p.cost)
    }

    /// Canonical JSON projection of the report.
    ///
    /// Excludes the rendered text; everything else is included.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "action_names": self.action_names,
            "cost": self.cost(),
            "final_fingerprint": self.final_fingerprint.as_ref().map(ContentHash::as_str),
            "final_state": self.final_state.as_ref().map(WorldState::as_slice),
            "initial_fingerprint": self.initial_fingerprint.as_str(),
            "plan_digest": self.plan_digest.as_ref().map(ContentHash::as_str),
            "planner": self.planner.to_string(),
            "policy": {
                "max_expansions": self.policy.max_expansions,
                "max_iterations": self.policy.max_iterations,
            },
            "stats": self.stats.to_json(),
            "termination_reason": self.termination_reason.to_json(),
        })
    }

    /// Content hash of the canonical [`Self::to_json`] bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonicalization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = canonical_json_bytes(&self.to_json())?;
        Ok(canonical_hash(DOMAIN_PLAN_REPORT, &bytes))
    }
}

/// Plan with `kind`, then verify, render and digest the result.
///
/// # Errors
///
/// Returns [`RunError::Plan`] for pre-flight failures and
/// [`RunError::Replay`] if the returned plan does not replay. Failed
/// searches are reports, not errors.
pub fn run_planner(
    kind: PlannerKind,
    model: &dyn ActionModelV1,
    initial: &WorldState,
    goal: &WorldState,
    policy: &PlannerPolicyV1,
) -> Result<PlanReportV1, RunError> {
    let result = plan(kind, model, initial, goal, policy)?;

    let mut report = PlanReportV1 {
        planner: kind,
        policy: policy.clone(),
        termination_reason: result.termination_reason,
        stats: result.stats,
        plan: None,
        action_names: Vec::new(),
        initial_fingerprint: initial.fingerprint(),
        final_state: None,
        final_fingerprint: None,
        rendered: None,
        plan_digest: None,
    };

    if let Some(found) = result.plan {
        let final_state = verify_plan(model, initial, goal, &found)?;
        report.final_fingerprint = Some(final_state.fingerprint());
        report.final_state = Some(final_state);
        report.action_names = found.action_names(model);
        report.rendered = Some(render_plan(model, initial, &found));
        report.plan_digest = Some(found.digest()?);
        report.plan = Some(found);
    }

    info!(
        planner = %kind,
        termination = report.termination_reason.as_str(),
        cost = ?report.cost(),
        expansions = report.stats.expansions,
        "planning run complete"
    );
    Ok(report)
}

/// Run a loaded scenario with its configured planner and policy.
///
/// # Errors
///
/// As [`run_planner`].
pub fn run_scenario(scenario: &ScenarioV1) -> Result<PlanReportV1, RunError> {
    run_planner(
        scenario.planner,
        &scenario.catalog,
        &scenario.initial,
        &scenario.goal,
        &scenario.policy,
    )
}
