//! Shared helpers for GOAP benchmark suites.

use goap_harness::worlds::counter_lattice::CounterLattice;
use goap_kernel::carrier::state::{WorldState, DONT_CARE};

/// One planning problem sized for benchmarking.
pub struct Regime {
    /// Stable benchmark id.
    pub name: &'static str,
    pub world: CounterLattice,
    pub initial: WorldState,
    pub goal: WorldState,
}

/// Counter-lattice regimes of increasing size.
///
/// `sparse_goal` leaves half the counters don't-care, which widens the set
/// of goal-matching states.
///
/// # Panics
///
/// Panics if a lattice descriptor cannot be built. Benchmark setup failures
/// are fatal.
#[must_use]
pub fn regimes() -> Vec<Regime> {
    vec![
        lattice("lattice_3x4", 3, 4, |i| i32::try_from(i % 5).unwrap_or(0)),
        lattice("lattice_4x5", 4, 5, alternating(5, 2)),
        lattice("sparse_goal_6x4", 6, 4, alternating(4, DONT_CARE)),
    ]
}

fn alternating(even: i32, odd: i32) -> impl Fn(usize) -> i32 {
    move |i| if i % 2 == 0 { even } else { odd }
}

fn lattice(
    name: &'static str,
    width: usize,
    cap: i32,
    goal_value: impl Fn(usize) -> i32,
) -> Regime {
    let world = CounterLattice::new(width, cap).expect("lattice descriptor");
    let initial = world.uniform(0);
    let goal = WorldState::from_slots((0..width).map(goal_value).collect());
    Regime {
        name,
        world,
        initial,
        goal,
    }
}
