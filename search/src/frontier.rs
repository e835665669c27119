//! Best-first frontier over a [`NodeTable`].
//!
//! The heap holds keys only; node data lives in the table. Lowering a node's
//! cost pushes a fresh key and leaves the old one behind. Stale keys are
//! discarded lazily on pop: a key is live only if its node is still open and
//! its `f_cost` still matches. Costs only ever decrease on update, so a live
//! `(node_id, f_cost)` pair is unique in the heap.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::node::{FrontierKey, NodeId, NodeStatus, PlanNodeV1};
use crate::table::NodeTable;

/// Best-first frontier manager.
///
/// `BinaryHeap` is a max-heap, so keys are wrapped in `Reverse` to pop the
/// lowest `(f_cost, node_id)` first.
#[derive(Debug, Default)]
pub struct BestFirstFrontier {
    heap: BinaryHeap<Reverse<FrontierKey>>,
    high_water: u64,
    stale_discarded: u64,
}

impl BestFirstFrontier {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `node` at its current `f_cost`.
    pub fn push(&mut self, node: &PlanNodeV1) {
        self.heap.push(Reverse(FrontierKey::from(node)));
        let size = self.heap.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
    }

    /// Pop the best live open node, skipping stale keys.
    #[must_use]
    pub fn pop(&mut self, table: &NodeTable) -> Option<NodeId> {
        while let Some(Reverse(key)) = self.heap.pop() {
            let node = table.get(key.node_id);
            if node.status == NodeStatus::Open && node.f_cost() == key.f_cost {
                return Some(key.node_id);
            }
            self.stale_discarded += 1;
        }
        None
    }

    /// Keys currently in the heap, stale ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the heap is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// High-water mark of heap size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }

    /// Stale keys skipped by [`Self::pop`] so far.
    #[must_use]
    pub fn stale_discarded(&self) -> u64 {
        self.stale_discarded
    }
}
