//! Binary that plans a scenario and prints deterministic output lines for
//! cross-process verification.
//!
//! Usage: `plan_fixture [scenario.json]`
//!
//! Without an argument, runs the built-in survival scenario with both
//! planners. Output: one `key=value` block per run, separated by blank
//! lines, followed by the rendered plan. Logs go to stderr (`RUST_LOG`).

use std::path::Path;
use std::process::ExitCode;

use goap_harness::runner::{run_scenario, PlanReportV1, RunError};
use goap_harness::scenario::ScenarioV1;
use goap_harness::worlds::survival::survival_scenario;
use goap_search::search::PlannerKind;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(std::env::args().nth(1).as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("plan_fixture: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(scenario_path: Option<&str>) -> Result<(), RunError> {
    let scenarios = match scenario_path {
        Some(path) => vec![ScenarioV1::from_path(Path::new(path))?],
        None => PlannerKind::ALL
            .into_iter()
            .map(survival_scenario)
            .collect::<Result<Vec<_>, _>>()?,
    };

    for (i, scenario) in scenarios.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_report(&run_scenario(scenario)?)?;
    }
    Ok(())
}

fn print_report(report: &PlanReportV1) -> Result<(), RunError> {
    println!("planner={}", report.planner);
    println!("termination_reason={}", report.termination_reason.as_str());
    match report.cost() {
        Some(cost) => println!("cost={cost}"),
        None => println!("cost=none"),
    }
    println!("actions={}", report.action_names.join(","));
    if let Some(digest) = &report.plan_digest {
        println!("plan_digest={}", digest.as_str());
    }
    if let Some(fingerprint) = &report.final_fingerprint {
        println!("final_fingerprint={}", fingerprint.as_str());
    }
    println!("report_digest={}", report.digest()?.as_str());
    println!("expansions={}", report.stats.expansions);
    println!("iterations={}", report.stats.iterations);
    if let Some(rendered) = &report.rendered {
        print!("{rendered}");
    }
    Ok(())
}
