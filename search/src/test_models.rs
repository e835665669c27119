//! Small rule-table action models for unit tests.

use goap_kernel::carrier::descriptor::DimensionDescriptor;
use goap_kernel::carrier::state::WorldState;

use crate::contract::{ActionId, ActionModelV1};

pub(crate) struct Rule {
    name: &'static str,
    cost: i64,
    equals: Vec<(usize, i32)>,
    at_least: Vec<(usize, i32)>,
    set: Vec<(usize, i32)>,
    add: Vec<(usize, i32)>,
}

impl Rule {
    pub(crate) fn new(name: &'static str, cost: i64) -> Self {
        Self {
            name,
            cost,
            equals: Vec::new(),
            at_least: Vec::new(),
            set: Vec::new(),
            add: Vec::new(),
        }
    }

    pub(crate) fn equals(mut self, slot: usize, value: i32) -> Self {
        self.equals.push((slot, value));
        self
    }

    pub(crate) fn at_least(mut self, slot: usize, value: i32) -> Self {
        self.at_least.push((slot, value));
        self
    }

    pub(crate) fn set(mut self, slot: usize, value: i32) -> Self {
        self.set.push((slot, value));
        self
    }

    pub(crate) fn add(mut self, slot: usize, delta: i32) -> Self {
        self.add.push((slot, delta));
        self
    }

    fn holds(&self, state: &WorldState) -> bool {
        self.equals.iter().all(|&(s, v)| state.get(s) == Some(v))
            && self
                .at_least
                .iter()
                .all(|&(s, v)| state.get(s).is_some_and(|have| have >= v))
    }

    fn effect(&self, state: &WorldState) -> WorldState {
        let mut next = state.clone();
        for &(s, v) in &self.set {
            next.set(s, v);
        }
        for &(s, d) in &self.add {
            let v = next.get(s).unwrap_or_default();
            next.set(s, v + d);
        }
        next
    }
}

/// Rules are valid when their precondition holds and the effect changes the
/// state without going negative.
pub(crate) struct RuleModel {
    descriptor: DimensionDescriptor,
    rules: Vec<Rule>,
}

impl RuleModel {
    pub(crate) fn new(dimensions: &[&str], rules: Vec<Rule>) -> Self {
        Self {
            descriptor: DimensionDescriptor::new(dimensions.iter().copied()).unwrap(),
            rules,
        }
    }

    pub(crate) fn id(&self, name: &str) -> ActionId {
        let index = self.rules.iter().position(|r| r.name == name).unwrap();
        ActionId(u32::try_from(index).unwrap())
    }
}

impl ActionModelV1 for RuleModel {
    fn descriptor(&self) -> &DimensionDescriptor {
        &self.descriptor
    }

    fn valid_actions(&self, state: &WorldState) -> Vec<ActionId> {
        self.rules
            .iter()
            .enumerate()
            .filter(|(_, r)| r.holds(state))
            .filter(|(_, r)| {
                let next = r.effect(state);
                next != *state && next.first_negative_slot().is_none()
            })
            .map(|(i, _)| ActionId(u32::try_from(i).unwrap()))
            .collect()
    }

    fn apply(&self, action: ActionId, state: &WorldState) -> WorldState {
        self.rules
            .get(action.index())
            .map_or_else(|| state.clone(), |r| r.effect(state))
    }

    fn cost(&self, action: ActionId) -> i64 {
        self.rules.get(action.index()).map_or(0, |r| r.cost)
    }

    fn action_name(&self, action: ActionId) -> &str {
        self.rules.get(action.index()).map_or("?", |r| r.name)
    }
}

/// `[hunger, has_food]`: eat (cost 1) and forage (cost 2).
pub(crate) fn survival() -> RuleModel {
    RuleModel::new(
        &["hunger", "has_food"],
        vec![
            Rule::new("eat", 1).at_least(1, 1).add(0, -5).add(1, -1),
            Rule::new("forage", 2).add(1, 1),
        ],
    )
}

/// `[switch, target]`: a cost-free toggle; `target` can never change.
pub(crate) fn two_cycle() -> RuleModel {
    RuleModel::new(
        &["switch", "target"],
        vec![
            Rule::new("on", 0).equals(0, 0).set(0, 1),
            Rule::new("off", 0).equals(0, 1).set(0, 0),
        ],
    )
}

/// `[x, y, z]`: `(0,1,0)` is first found through `slow` (cost 10), then
/// more cheaply through `step` + `fast` (cost 2) from a different parent.
pub(crate) fn converging() -> RuleModel {
    RuleModel::new(
        &["x", "y", "z"],
        vec![
            Rule::new("slow", 10).equals(0, 0).equals(1, 0).set(1, 1),
            Rule::new("step", 1).equals(0, 0).equals(1, 0).set(0, 1),
            Rule::new("fast", 1).equals(0, 1).set(0, 0).set(1, 1),
            Rule::new("finish", 1).equals(1, 1).set(2, 1),
        ],
    )
}

/// `[m, done]` with goal `(0, 1)`: the heuristic overestimates on the
/// `detour` branch, so best-first closes `m = 1` via the expensive `direct`
/// action before discovering the cheaper `detour` + `return` route.
pub(crate) fn misleading() -> RuleModel {
    RuleModel::new(
        &["m", "done"],
        vec![
            Rule::new("detour", 1).equals(0, 0).equals(1, 0).set(0, 9),
            Rule::new("direct", 4).equals(0, 0).equals(1, 0).set(0, 1),
            Rule::new("return", 1).equals(0, 9).set(0, 1),
            Rule::new("climb", 1).equals(0, 1).set(0, 20),
            Rule::new("drop", 1).equals(0, 20).set(0, 0).set(1, 1),
        ],
    )
}
