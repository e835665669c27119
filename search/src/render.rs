//! Diagnostic text dump of a plan's state evolution.
//!
//! Observational only; nothing in search reads it.

use std::fmt::Write as _;

use goap_kernel::carrier::state::WorldState;

use crate::contract::ActionModelV1;
use crate::plan::Plan;

const LABEL_WIDTH: usize = 15;

/// Render `plan` as a column-aligned table.
///
/// One header row of `|name|` cells in descriptor order, one row for
/// `initial` with a blank label, then one row per step labelled with the
/// action name. Each value is right-aligned to the width of its dimension
/// name.
#[must_use]
pub fn render_plan(model: &dyn ActionModelV1, initial: &WorldState, plan: &Plan) -> String {
    let widths: Vec<usize> = model.descriptor().names().map(str::len).collect();

    let mut out = String::new();
    let _ = write!(out, "{:>LABEL_WIDTH$}: ", "");
    for name in model.descriptor().names() {
        let _ = write!(out, "|{name}|");
    }
    out.push('\n');

    write_row(&mut out, "", initial, &widths);
    for step in &plan.steps {
        let label = model.action_name(step.action);
        write_row(&mut out, label, &step.state, &widths);
    }
    out
}

fn write_row(out: &mut String, label: &str, state: &WorldState, widths: &[usize]) {
    let _ = write!(out, "{label:>LABEL_WIDTH$}: ");
    for (value, &width) in state.as_slice().iter().zip(widths) {
        let _ = write!(out, "|{value:>width$}|");
    }
    out.push('\n');
}
