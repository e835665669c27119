//! `WorldState`: the fixed-length discrete state vector.
//!
//! One `i32` slot per named dimension of the session's
//! [`DimensionDescriptor`](crate::carrier::descriptor::DimensionDescriptor).
//!
//! # Equality semantics
//!
//! Equality is exact element-wise integer equality. Two states of different
//! length are never equal; planners reject such sessions before search.
//!
//! # Don't-care slots
//!
//! A negative value in a *goal* state means "any value is acceptable here".
//! [`DONT_CARE`] is the canonical sentinel. Working states (initial state and
//! every state produced by an action) must not carry negative values; the
//! planners enforce this at their boundaries, not this type.

use serde::{Deserialize, Serialize};

use crate::proof::hash::{canonical_hash, ContentHash};

/// Canonical "unconstrained" goal slot value.
pub const DONT_CARE: i32 = -1;

/// Domain prefix for world-state fingerprints.
pub const DOMAIN_WORLD_STATE: &[u8] = b"GOAP::WORLD_STATE::V1\0";

/// Whether a goal slot value means "ignore this dimension".
#[must_use]
pub const fn is_dont_care(value: i32) -> bool {
    value < 0
}

/// Ordered, fixed-length integer vector describing the modeled world.
///
/// Serializes transparently as a JSON integer array.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorldState {
    slots: Vec<i32>,
}

impl WorldState {
    /// Create a zero-filled state with `len` slots.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![0; len],
        }
    }

    /// Create a state from explicit slot values.
    #[must_use]
    pub fn from_slots(slots: Vec<i32>) -> Self {
        Self { slots }
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the state has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Read a slot. Returns `None` if out of range.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<i32> {
        self.slots.get(slot).copied()
    }

    /// Write a slot. Returns `false` (state unchanged) if out of range.
    pub fn set(&mut self, slot: usize, value: i32) -> bool {
        match self.slots.get_mut(slot) {
            Some(v) => {
                *v = value;
                true
            }
            None => false,
        }
    }

    /// Return a copy with one slot replaced.
    #[must_use]
    pub fn with(&self, slot: usize, value: i32) -> Self {
        let mut next = self.clone();
        next.set(slot, value);
        next
    }

    /// The raw slot values in descriptor order.
    #[must_use]
    pub fn as_slice(&self) -> &[i32] {
        &self.slots
    }

    /// Index of the first negative slot, if any.
    ///
    /// Used to reject the don't-care sentinel in working states.
    #[must_use]
    pub fn first_negative_slot(&self) -> Option<usize> {
        self.slots.iter().position(|&v| v < 0)
    }

    /// Canonical byte encoding: little-endian `i32` per slot.
    #[must_use]
    pub fn identity_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.slots.len() * 4);
        for v in &self.slots {
            bytes.extend_from_slice(&v.to_le_bytes());
        }
        bytes
    }

    /// Content hash of [`Self::identity_bytes`] under [`DOMAIN_WORLD_STATE`].
    #[must_use]
    pub fn fingerprint(&self) -> ContentHash {
        canonical_hash(DOMAIN_WORLD_STATE, &self.identity_bytes())
    }
}

impl From<Vec<i32>> for WorldState {
    fn from(slots: Vec<i32>) -> Self {
        Self::from_slots(slots)
    }
}

impl From<&[i32]> for WorldState {
    fn from(slots: &[i32]) -> Self {
        Self::from_slots(slots.to_vec())
    }
}

impl std::fmt::Display for WorldState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[")?;
        for (i, v) in self.slots.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v}")?;
        }
        f.write_str("]")
    }
}
