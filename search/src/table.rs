//! Value-keyed node arena for best-first search.
//!
//! Nodes are stored by id in a `Vec`; a `HashMap<WorldState, NodeId>` makes
//! "is there already a node for this state?" an O(1) question. Open/closed
//! membership is a per-node status, so both collections share one index.

use std::collections::HashMap;

use goap_kernel::carrier::state::WorldState;

use crate::contract::ActionId;
use crate::node::{NodeId, NodeStatus, PlanNodeV1};
use crate::plan::PlanStep;

/// Arena of best-first nodes, keyed by state value.
#[derive(Debug, Default)]
pub struct NodeTable {
    nodes: Vec<PlanNodeV1>,
    index: HashMap<WorldState, NodeId>,
}

impl NodeTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new open node for `state`.
    ///
    /// The caller must have checked [`Self::lookup`] first; a second node for
    /// the same state would shadow the first in the index.
    pub fn insert(
        &mut self,
        parent_id: Option<NodeId>,
        state: WorldState,
        producing_action: Option<ActionId>,
        g_cost: i64,
        h_cost: i64,
        depth: u32,
    ) -> NodeId {
        let node_id = self.nodes.len();
        debug_assert!(!self.index.contains_key(&state));
        self.index.insert(state.clone(), node_id);
        self.nodes.push(PlanNodeV1 {
            node_id,
            parent_id,
            state,
            producing_action,
            g_cost,
            h_cost,
            depth,
            status: NodeStatus::Open,
        });
        node_id
    }

    /// The node for `state`, open or closed.
    #[must_use]
    pub fn lookup(&self, state: &WorldState) -> Option<NodeId> {
        self.index.get(state).copied()
    }

    /// Node by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not returned by [`Self::insert`] on this table.
    #[must_use]
    pub fn get(&self, id: NodeId) -> &PlanNodeV1 {
        &self.nodes[id]
    }

    /// Move a node to the closed collection.
    pub fn close(&mut self, id: NodeId) {
        self.nodes[id].status = NodeStatus::Closed;
    }

    /// Record a cheaper path to an existing node and (re)open it.
    ///
    /// Returns the node's status before the update, so callers can tell an
    /// in-place frontier update from a re-opening of an expanded node.
    pub fn relax(
        &mut self,
        id: NodeId,
        parent_id: NodeId,
        producing_action: ActionId,
        g_cost: i64,
        depth: u32,
    ) -> NodeStatus {
        let node = &mut self.nodes[id];
        let previous = node.status;
        node.parent_id = Some(parent_id);
        node.producing_action = Some(producing_action);
        node.g_cost = g_cost;
        node.depth = depth;
        node.status = NodeStatus::Open;
        previous
    }

    /// Number of nodes ever created.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no node was created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Reconstruct the steps from the root to `goal_id` in execution order.
    ///
    /// The root contributes no step.
    #[must_use]
    pub fn path_to(&self, goal_id: NodeId) -> Vec<PlanStep> {
        let mut steps = Vec::new();
        let mut current = Some(goal_id);
        while let Some(id) = current {
            let node = &self.nodes[id];
            if let Some(action) = node.producing_action {
                steps.push(PlanStep {
                    action,
                    state: node.state.clone(),
                });
            }
            current = node.parent_id;
        }
        steps.reverse();
        steps
    }
}
