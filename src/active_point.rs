//! Active-Point State (component C).
//!
//! `(active_node, active_edge, active_length)` plus the carried
//! `remainder` and the global `tree_end` live in the Extender (component
//! D), which owns the construction loop; this module holds just the point
//! itself and the one piece of genuinely reusable math: walking down past
//! a fully-consumed edge. This state's lifecycle is construction only.
//! The `Builder` that owns it is discarded once `build()` returns, leaving
//! queries holding only the read-only tree.

use crate::child_map::NodeId;
use crate::node::NodeStore;

pub(crate) struct ActivePoint {
    pub(crate) node: NodeId,
    /// Index into the text; meaningful only while `length > 0`.
    pub(crate) edge: usize,
    pub(crate) length: usize,
}

impl ActivePoint {
    pub(crate) fn new() -> Self {
        ActivePoint { node: NodeStore::ROOT, edge: 0, length: 0 }
    }

    /// If the active length reaches or exceeds the length of the edge
    /// leading to `child`, shifts the active point onto `child` and
    /// reports that a hop happened so the caller can re-derive the active
    /// edge symbol and try again.
    pub(crate) fn try_walk_down(&mut self, store: &NodeStore, child: NodeId, open_end: usize) -> bool {
        let edge_len = store.edge_len(child, open_end);
        if self.length >= edge_len {
            self.edge += edge_len;
            self.length -= edge_len;
            self.node = child;
            true
        } else {
            false
        }
    }
}
