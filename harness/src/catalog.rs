//! `ActionCatalogV1`: a table-driven [`ActionModelV1`] loaded from JSON.
//!
//! The document names dimensions and actions; loading resolves every
//! dimension name to a slot index once, so evaluation never touches strings.
//!
//! ```json
//! {
//!   "dimensions": ["hunger", "has_food"],
//!   "actions": [
//!     {"name": "eat", "cost": 1,
//!      "precondition": {"at_least": {"dimension": "has_food", "value": 1}},
//!      "effects": [{"add": {"dimension": "hunger", "delta": -5}},
//!                  {"add": {"dimension": "has_food", "delta": -1}}]}
//!   ]
//! }
//! ```
//!
//! # Validity
//!
//! An action is valid from a state when its precondition holds AND applying
//! it changes the state. No-op actions are never offered, so zero-cost
//! catalog actions cannot stall the planners on an unchanged state.
//!
//! `add` effects saturate and floor at 0; `set` values must be non-negative.
//! Catalog states therefore never carry negative values.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use goap_kernel::carrier::descriptor::{DescriptorError, DimensionDescriptor};
use goap_kernel::carrier::state::WorldState;
use goap_search::contract::{ActionId, ActionModelV1};

// ---------------------------------------------------------------------------
// Document types
// ---------------------------------------------------------------------------

/// A `(dimension, value)` comparison operand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DimensionValueV1 {
    pub dimension: String,
    pub value: i32,
}

/// Composite precondition tree.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionV1 {
    /// Always holds.
    #[default]
    Always,
    Equals(DimensionValueV1),
    AtLeast(DimensionValueV1),
    AtMost(DimensionValueV1),
    /// Holds when every child holds (vacuously true when empty).
    All(Vec<ConditionV1>),
    /// Holds when some child holds (false when empty).
    Any(Vec<ConditionV1>),
    Not(Box<ConditionV1>),
}

/// A single effect on one dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectV1 {
    /// Replace the value.
    Set(DimensionValueV1),
    /// Add `delta`, saturating, floored at 0.
    Add { dimension: String, delta: i32 },
}

/// One action entry of a catalog document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActionSpecV1 {
    pub name: String,
    pub cost: i64,
    #[serde(default)]
    pub precondition: ConditionV1,
    #[serde(default)]
    pub effects: Vec<EffectV1>,
}

/// The catalog document as written on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogSpecV1 {
    pub dimensions: Vec<String>,
    pub actions: Vec<ActionSpecV1>,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Typed failure for catalog loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Dimensions(#[from] DescriptorError),
    #[error("action {action:?} references unknown dimension {dimension:?}")]
    UnknownDimension { action: String, dimension: String },
    #[error("action name {name:?} is declared more than once")]
    DuplicateAction { name: String },
    #[error("action {action:?} has negative cost {cost}")]
    NegativeCost { action: String, cost: i64 },
    #[error("action {action:?} sets {dimension:?} to negative value {value}")]
    NegativeSetValue {
        action: String,
        dimension: String,
        value: i32,
    },
    #[error("catalog declares {count} actions, more than an action id can address")]
    TooManyActions { count: usize },
}

// ---------------------------------------------------------------------------
// Resolved catalog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
enum Predicate {
    Always,
    Equals(usize, i32),
    AtLeast(usize, i32),
    AtMost(usize, i32),
    All(Vec<Predicate>),
    Any(Vec<Predicate>),
    Not(Box<Predicate>),
}

impl Predicate {
    fn holds(&self, state: &WorldState) -> bool {
        match self {
            Self::Always => true,
            Self::Equals(slot, v) => state.get(*slot) == Some(*v),
            Self::AtLeast(slot, v) => state.get(*slot).is_some_and(|have| have >= *v),
            Self::AtMost(slot, v) => state.get(*slot).is_some_and(|have| have <= *v),
            Self::All(children) => children.iter().all(|c| c.holds(state)),
            Self::Any(children) => children.iter().any(|c| c.holds(state)),
            Self::Not(child) => !child.holds(state),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Effect {
    Set(usize, i32),
    Add(usize, i32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CatalogAction {
    name: String,
    cost: i64,
    precondition: Predicate,
    effects: Vec<Effect>,
}

/// A validated, slot-resolved action catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionCatalogV1 {
    descriptor: DimensionDescriptor,
    actions: Vec<CatalogAction>,
    by_name: BTreeMap<String, ActionId>,
}

impl ActionCatalogV1 {
    /// Validate a parsed document and resolve its dimension names.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] for duplicate dimensions or actions, unknown
    /// dimension references, negative costs and negative `set` values.
    pub fn from_spec(spec: &CatalogSpecV1) -> Result<Self, CatalogError> {
        let descriptor = DimensionDescriptor::new(spec.dimensions.iter().cloned())?;
        let count = spec.actions.len();
        if u32::try_from(count).is_err() {
            return Err(CatalogError::TooManyActions { count });
        }

        let mut actions = Vec::with_capacity(count);
        let mut by_name = BTreeMap::new();
        for (entry, raw) in spec.actions.iter().zip(0u32..) {
            let resolver = Resolver {
                descriptor: &descriptor,
                action: &entry.name,
            };
            if entry.cost < 0 {
                return Err(CatalogError::NegativeCost {
                    action: entry.name.clone(),
                    cost: entry.cost,
                });
            }
            if by_name.insert(entry.name.clone(), ActionId(raw)).is_some() {
                return Err(CatalogError::DuplicateAction {
                    name: entry.name.clone(),
                });
            }
            let effects = entry
                .effects
                .iter()
                .map(|e| resolver.effect(e))
                .collect::<Result<Vec<_>, _>>()?;
            actions.push(CatalogAction {
                name: entry.name.clone(),
                cost: entry.cost,
                precondition: resolver.predicate(&entry.precondition)?,
                effects,
            });
        }

        Ok(Self {
            descriptor,
            actions,
            by_name,
        })
    }

    /// Parse and validate a catalog document.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Json`] for malformed JSON, otherwise as
    /// [`Self::from_spec`].
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let spec: CatalogSpecV1 = serde_json::from_str(json)?;
        Self::from_spec(&spec)
    }

    /// Read, parse and validate a catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read, otherwise as
    /// [`Self::from_json_str`].
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Id of the action called `name`.
    #[must_use]
    pub fn action_id(&self, name: &str) -> Option<ActionId> {
        self.by_name.get(name).copied()
    }

    /// Number of actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether the catalog declares no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    fn effect_of(action: &CatalogAction, state: &WorldState) -> WorldState {
        let mut next = state.clone();
        for effect in &action.effects {
            match *effect {
                Effect::Set(slot, value) => {
                    next.set(slot, value);
                }
                Effect::Add(slot, delta) => {
                    let current = next.get(slot).unwrap_or_default();
                    next.set(slot, current.saturating_add(delta).max(0));
                }
            }
        }
        next
    }
}

impl ActionModelV1 for ActionCatalogV1 {
    fn descriptor(&self) -> &DimensionDescriptor {
        &self.descriptor
    }

    fn valid_actions(&self, state: &WorldState) -> Vec<ActionId> {
        self.actions
            .iter()
            .zip(0u32..)
            .filter(|(action, _)| action.precondition.holds(state))
            .filter(|(action, _)| Self::effect_of(action, state) != *state)
            .map(|(_, raw)| ActionId(raw))
            .collect()
    }

    fn apply(&self, action: ActionId, state: &WorldState) -> WorldState {
        self.actions
            .get(action.index())
            .map_or_else(|| state.clone(), |a| Self::effect_of(a, state))
    }

    fn cost(&self, action: ActionId) -> i64 {
        self.actions.get(action.index()).map_or(0, |a| a.cost)
    }

    fn action_name(&self, action: ActionId) -> &str {
        self.actions
            .get(action.index())
            .map_or("<unknown>", |a| a.name.as_str())
    }
}

struct Resolver<'a> {
    descriptor: &'a DimensionDescriptor,
    action: &'a str,
}

impl Resolver<'_> {
    fn slot(&self, dimension: &str) -> Result<usize, CatalogError> {
        self.descriptor
            .slot_of(dimension)
            .ok_or_else(|| CatalogError::UnknownDimension {
                action: self.action.to_string(),
                dimension: dimension.to_string(),
            })
    }

    fn predicate(&self, condition: &ConditionV1) -> Result<Predicate, CatalogError> {
        Ok(match condition {
            ConditionV1::Always => Predicate::Always,
            ConditionV1::Equals(dv) => Predicate::Equals(self.slot(&dv.dimension)?, dv.value),
            ConditionV1::AtLeast(dv) => Predicate::AtLeast(self.slot(&dv.dimension)?, dv.value),
            ConditionV1::AtMost(dv) => Predicate::AtMost(self.slot(&dv.dimension)?, dv.value),
            ConditionV1::All(children) => Predicate::All(self.predicates(children)?),
            ConditionV1::Any(children) => Predicate::Any(self.predicates(children)?),
            ConditionV1::Not(child) => Predicate::Not(Box::new(self.predicate(child)?)),
        })
    }

    fn predicates(&self, children: &[ConditionV1]) -> Result<Vec<Predicate>, CatalogError> {
        children.iter().map(|c| self.predicate(c)).collect()
    }

    fn effect(&self, effect: &EffectV1) -> Result<Effect, CatalogError> {
        match effect {
            EffectV1::Set(dv) => {
                if dv.value < 0 {
                    return Err(CatalogError::NegativeSetValue {
                        action: self.action.to_string(),
                        dimension: dv.dimension.clone(),
                        value: dv.value,
                    });
                }
                Ok(Effect::Set(self.slot(&dv.dimension)?, dv.value))
            }
            EffectV1::Add { dimension, delta } => Ok(Effect::Add(self.slot(dimension)?, *delta)),
        }
    }
}
