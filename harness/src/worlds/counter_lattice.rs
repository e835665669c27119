//! `CounterLattice`: parameterized world for stress tests and benchmarks.
//!
//! `width` counters, each in `0..=cap`. Per counter `c<i>` there are three
//! actions, enumerated in this order:
//!
//! - `inc_c<i>` (cost 1): +1
//! - `dec_c<i>` (cost 1): -1
//! - `bump_c<i>` (cost 2): +2
//!
//! No action changes the state by more than its cost, so the heuristic is
//! admissible and both planners return the same optimal cost. Many
//! orderings reach the same assignment, which exercises duplicate
//! suppression, and `bump` ties `inc + inc` on cost, which exercises
//! tie-breaking.

use goap_kernel::carrier::descriptor::{DescriptorError, DimensionDescriptor};
use goap_kernel::carrier::state::WorldState;
use goap_search::contract::{ActionId, ActionModelV1};

const ACTIONS_PER_COUNTER: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Move {
    Inc,
    Dec,
    Bump,
}

impl Move {
    const fn delta(self) -> i32 {
        match self {
            Self::Inc => 1,
            Self::Dec => -1,
            Self::Bump => 2,
        }
    }

    const fn cost(self) -> i64 {
        match self {
            Self::Inc | Self::Dec => 1,
            Self::Bump => 2,
        }
    }
}

/// Counter lattice world.
#[derive(Debug, Clone)]
pub struct CounterLattice {
    descriptor: DimensionDescriptor,
    action_names: Vec<String>,
    cap: i32,
}

impl CounterLattice {
    /// Create a lattice of `width` counters capped at `cap`.
    ///
    /// # Errors
    ///
    /// Propagates [`DescriptorError`] from descriptor construction.
    pub fn new(width: usize, cap: i32) -> Result<Self, DescriptorError> {
        let names: Vec<String> = (0..width).map(|i| format!("c{i}")).collect();
        let action_names = names
            .iter()
            .flat_map(|n| [format!("inc_{n}"), format!("dec_{n}"), format!("bump_{n}")])
            .collect();
        Ok(Self {
            descriptor: DimensionDescriptor::new(names)?,
            action_names,
            cap: cap.max(0),
        })
    }

    /// Upper bound of every counter.
    #[must_use]
    pub fn cap(&self) -> i32 {
        self.cap
    }

    /// All counters at `value`.
    #[must_use]
    pub fn uniform(&self, value: i32) -> WorldState {
        WorldState::from_slots(vec![value; self.descriptor.len()])
    }

    fn decode(action: ActionId) -> (usize, Move) {
        let index = action.index();
        let kind = match index % ACTIONS_PER_COUNTER {
            0 => Move::Inc,
            1 => Move::Dec,
            _ => Move::Bump,
        };
        (index / ACTIONS_PER_COUNTER, kind)
    }

    fn target(&self, slot: usize, kind: Move, state: &WorldState) -> Option<i32> {
        let next = state.get(slot)?.checked_add(kind.delta())?;
        (0..=self.cap).contains(&next).then_some(next)
    }
}

impl ActionModelV1 for CounterLattice {
    fn descriptor(&self) -> &DimensionDescriptor {
        &self.descriptor
    }

    fn valid_actions(&self, state: &WorldState) -> Vec<ActionId> {
        (0u32..)
            .take(self.action_names.len())
            .map(ActionId)
            .filter(|&action| {
                let (slot, kind) = Self::decode(action);
                self.target(slot, kind, state).is_some()
            })
            .collect()
    }

    fn apply(&self, action: ActionId, state: &WorldState) -> WorldState {
        let (slot, kind) = Self::decode(action);
        match self.target(slot, kind, state) {
            Some(next) => state.with(slot, next),
            None => state.clone(),
        }
    }

    fn cost(&self, action: ActionId) -> i64 {
        Self::decode(action).1.cost()
    }

    fn action_name(&self, action: ActionId) -> &str {
        self.action_names
            .get(action.index())
            .map_or("<unknown>", String::as_str)
    }
}
