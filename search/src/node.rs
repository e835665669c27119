//! Best-first search nodes and the frontier ordering key.

use goap_kernel::carrier::state::WorldState;

use crate::contract::ActionId;

/// Arena index of a node in a [`crate::table::NodeTable`].
///
/// Ids are assigned in creation order, so they double as the
/// insertion-order tie-break of the frontier.
pub type NodeId = usize;

/// Which best-first collection a node currently belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeStatus {
    /// Frontier: generated, not yet expanded.
    Open,
    /// Expanded.
    Closed,
}

/// A best-first search node.
///
/// One node exists per distinct `WorldState`. The back-pointer is a node id,
/// never a predecessor state value, so reconstruction cannot confuse two
/// predecessors that share a state.
#[derive(Debug, Clone)]
pub struct PlanNodeV1 {
    /// Arena index (creation order).
    pub node_id: NodeId,
    /// Predecessor on the cheapest known path (`None` for the root).
    pub parent_id: Option<NodeId>,
    /// The world state this node stands for.
    pub state: WorldState,
    /// Action that produced this node from its parent (`None` for the root).
    pub producing_action: Option<ActionId>,
    /// Cheapest known cost from the initial state.
    pub g_cost: i64,
    /// Heuristic distance to the goal (fixed per state).
    pub h_cost: i64,
    /// Steps from the root along the cheapest known path.
    pub depth: u32,
    /// Open or closed.
    pub status: NodeStatus,
}

impl PlanNodeV1 {
    /// Compute `f_cost = g_cost + h_cost` (the frontier ordering key).
    #[must_use]
    pub fn f_cost(&self) -> i64 {
        self.g_cost.saturating_add(self.h_cost)
    }
}

/// The frontier ordering key: `(f_cost, node_id)`.
///
/// Lower `f_cost` first; ties go to the node created first. A node whose
/// cost is lowered in place keeps its id and therefore its tie-break rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub f_cost: i64,
    pub node_id: NodeId,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.f_cost
            .cmp(&other.f_cost)
            .then(self.node_id.cmp(&other.node_id))
    }
}

impl From<&PlanNodeV1> for FrontierKey {
    fn from(node: &PlanNodeV1) -> Self {
        Self {
            f_cost: node.f_cost(),
            node_id: node.node_id,
        }
    }
}
