//! GOAP Kernel: the world-state carrier shared by every planner component.
//!
//! # API Surface
//!
//! - [`carrier::state::WorldState`] -- fixed-length integer state vector
//! - [`carrier::descriptor::DimensionDescriptor`] -- named dimensions, slot order
//! - [`proof::hash::canonical_hash`] -- domain-separated SHA-256 content hashing
//! - [`proof::canon::canonical_json_bytes`] -- the single JSON canonicalizer
//!
//! # Module Dependency Direction
//!
//! `proof` ← `carrier`
//!
//! One-way only. `carrier` fingerprints states through `proof`; `proof`
//! depends on nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod carrier;
pub mod proof;
