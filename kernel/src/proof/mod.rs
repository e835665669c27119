//! Canonical hashing and serialization-for-hashing.

pub mod canon;
pub mod hash;
