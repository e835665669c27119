//! Built-in worlds for the harness runner, lock tests and benchmarks.

pub mod counter_lattice;
pub mod survival;
