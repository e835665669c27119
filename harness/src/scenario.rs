//! Scenario configuration: catalog + initial/goal states + planner choice.
//!
//! ```json
//! {
//!   "catalog": "survival_catalog.json",
//!   "initial": {"hunger": 10},
//!   "goal": {"hunger": 0},
//!   "planner": "iterative_deepening",
//!   "policy": {"max_expansions": 5000}
//! }
//! ```
//!
//! `catalog` is either an inline catalog document or a path to one. A
//! relative path resolves against the scenario file's directory (or the
//! current directory for scenarios parsed from a string). Unlisted initial
//! dimensions are 0; unlisted goal dimensions are don't-care.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use goap_kernel::carrier::descriptor::DescriptorError;
use goap_kernel::carrier::state::WorldState;
use goap_search::contract::ActionModelV1;
use goap_search::policy::PlannerPolicyV1;
use goap_search::search::PlannerKind;

use crate::catalog::{ActionCatalogV1, CatalogError, CatalogSpecV1};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogSourceV1 {
    Inline(CatalogSpecV1),
    Path(PathBuf),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScenarioDocV1 {
    catalog: CatalogSourceV1,
    #[serde(default)]
    initial: BTreeMap<String, i32>,
    #[serde(default)]
    goal: BTreeMap<String, i32>,
    #[serde(default)]
    planner: PlannerKind,
    #[serde(default)]
    policy: PlannerPolicyV1,
}

/// Typed failure for scenario loading.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("failed to read scenario {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed scenario JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("scenario catalog is invalid: {0}")]
    Catalog(#[from] CatalogError),
    #[error("scenario {role} state is invalid: {source}")]
    State {
        role: &'static str,
        #[source]
        source: DescriptorError,
    },
}

/// A fully resolved planning scenario.
#[derive(Debug, Clone)]
pub struct ScenarioV1 {
    pub catalog: ActionCatalogV1,
    pub initial: WorldState,
    pub goal: WorldState,
    pub planner: PlannerKind,
    pub policy: PlannerPolicyV1,
}

impl ScenarioV1 {
    /// Parse a scenario; relative catalog paths resolve against the current
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError`] for malformed JSON, an invalid or unreadable
    /// catalog, or state entries naming unknown dimensions.
    pub fn from_json_str(json: &str) -> Result<Self, ScenarioError> {
        Self::resolve(serde_json::from_str(json)?, Path::new("."))
    }

    /// Read and parse a scenario file.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Io`] if the file cannot be read, otherwise as
    /// [`Self::from_json_str`].
    pub fn from_path(path: &Path) -> Result<Self, ScenarioError> {
        let json = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        Self::resolve(serde_json::from_str(&json)?, base)
    }

    fn resolve(doc: ScenarioDocV1, base: &Path) -> Result<Self, ScenarioError> {
        let catalog = match doc.catalog {
            CatalogSourceV1::Inline(spec) => ActionCatalogV1::from_spec(&spec)?,
            CatalogSourceV1::Path(path) => ActionCatalogV1::from_path(&base.join(path))?,
        };
        let initial = catalog
            .descriptor()
            .state(&pairs(&doc.initial))
            .map_err(|source| ScenarioError::State {
                role: "initial",
                source,
            })?;
        let goal = catalog
            .descriptor()
            .goal(&pairs(&doc.goal))
            .map_err(|source| ScenarioError::State {
                role: "goal",
                source,
            })?;
        Ok(Self {
            catalog,
            initial,
            goal,
            planner: doc.planner,
            policy: doc.policy,
        })
    }
}

fn pairs(map: &BTreeMap<String, i32>) -> Vec<(&str, i32)> {
    map.iter().map(|(k, &v)| (k.as_str(), v)).collect()
}
