//! GOAP Harness: scenario-level orchestration for the planners.
//!
//! The harness loads JSON action catalogs and scenarios, runs a planner
//! through the search crate's pipeline (`plan` → `verify_plan` →
//! `render_plan` → `digest`) and packages the result as a report.
//!
//! The harness does NOT implement search logic; it delegates to
//! `goap_search`. Worlds provide domain data only.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod catalog;
pub mod runner;
pub mod scenario;
pub mod worlds;
