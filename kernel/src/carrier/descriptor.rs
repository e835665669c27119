//! `DimensionDescriptor`: the name ↔ slot-index mapping for a planning session.
//!
//! Slot index is the position of the name in construction order. Names are
//! unique; the mapping is enforced to be a bijection at construction time.
//!
//! The descriptor is irrelevant to search correctness. Planners use only its
//! length (to validate state shapes); diagnostics and state builders use names.

use std::collections::BTreeMap;

use crate::carrier::state::{WorldState, DONT_CARE};

/// Error type for descriptor construction and name lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DescriptorError {
    /// A dimension name was declared more than once.
    #[error("duplicate dimension name {name:?} (slots {existing_slot} and {new_slot})")]
    DuplicateDimension {
        name: String,
        existing_slot: usize,
        new_slot: usize,
    },
    /// A `(name, value)` pair referenced an undeclared dimension.
    #[error("unknown dimension name {name:?}")]
    UnknownDimension { name: String },
}

/// Ordered set of named world-state dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionDescriptor {
    names: Vec<String>,
    index: BTreeMap<String, usize>,
}

impl DimensionDescriptor {
    /// Create a descriptor from dimension names in slot order.
    ///
    /// # Errors
    ///
    /// Returns [`DescriptorError::DuplicateDimension`] if a name repeats.
    pub fn new<I, S>(names: I) -> Result<Self, DescriptorError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ordered = Vec::new();
        let mut index = BTreeMap::new();
        for (slot, name) in names.into_iter().enumerate() {
            let name = name.into();
            if let Some(&existing_slot) = index.get(&name) {
                return Err(DescriptorError::DuplicateDimension {
                    name,
                    existing_slot,
                    new_slot: slot,
                });
            }
            index.insert(name.clone(), slot);
            ordered.push(name);
        }
        Ok(Self {
            names: ordered,
            index,
        })
    }

    /// Number of dimensions (the required `WorldState` length).
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no dimensions are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Slot index for a dimension name.
    #[must_use]
    pub fn slot_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Dimension name at a slot index.
    #[must_use]
    pub fn name_of(&self, slot: usize) -> Option<&str> {
        self.names.get(slot).map(String::as_str)
    }

    /// Dimension names in slot order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Build a working state; unspecified dimensions are 0.
    ///
    /// # Errors
    ///
    /// Returns [`DescriptorError::UnknownDimension`] for undeclared names.
    pub fn state(&self, pairs: &[(&str, i32)]) -> Result<WorldState, DescriptorError> {
        self.build(pairs, 0)
    }

    /// Build a goal state; unspecified dimensions are [`DONT_CARE`].
    ///
    /// # Errors
    ///
    /// Returns [`DescriptorError::UnknownDimension`] for undeclared names.
    pub fn goal(&self, pairs: &[(&str, i32)]) -> Result<WorldState, DescriptorError> {
        self.build(pairs, DONT_CARE)
    }

    fn build(&self, pairs: &[(&str, i32)], fill: i32) -> Result<WorldState, DescriptorError> {
        let mut state = WorldState::from_slots(vec![fill; self.len()]);
        for &(name, value) in pairs {
            let slot = self
                .slot_of(name)
                .ok_or_else(|| DescriptorError::UnknownDimension {
                    name: name.to_string(),
                })?;
            state.set(slot, value);
        }
        Ok(state)
    }
}
