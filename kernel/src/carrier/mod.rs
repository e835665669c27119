//! World-state carrier types.

pub mod descriptor;
pub mod state;
