//! Ukkonen Extender (component D) and Pattern Matcher (component E).
//!
//! The Extender is the hard part: it maintains the active point, the
//! remainder count, and suffix links across a streaming construction where
//! a single `extend` call can create any number of leaves, at most one
//! edge split, and must leave every internal node (save possibly one
//! still-pending node) with a correctly wired suffix link before the next
//! call begins.

use crate::active_point::ActivePoint;
use crate::child_map::NodeId;
use crate::error::{Result, TreeError};
use crate::node::NodeStore;
use crate::search::SuffixSearch;
use crate::text::Text;

/// A compact suffix tree built in O(n) time and space via Ukkonen's
/// algorithm. Answers pattern queries in O(m + k) time, m the pattern
/// length and k the number of occurrences.
pub struct CompactSuffixTree {
    store: NodeStore,
    text: Text,
}

impl CompactSuffixTree {
    pub(crate) fn build(text: &[u8]) -> Result<Self> {
        let text = Text::seal(text)?;
        let store = Builder::new().run(text.as_bytes());
        Ok(CompactSuffixTree { store, text })
    }

    /// Total node count, including the root. Bounded by 2(n+1) for a sealed
    /// text of length n+1.
    pub fn node_count(&self) -> usize {
        self.store.len()
    }

    /// Every internal node except the root has a suffix link targeting
    /// another internal node or the root. Exposed for tests; not needed by
    /// ordinary callers.
    pub(crate) fn suffix_links_closed(&self) -> bool {
        for id in 1..self.store.len() {
            let node = self.store.node(id);
            if node.is_leaf() {
                continue;
            }
            if node.suffix_link.is_none() {
                return false;
            }
        }
        true
    }

    fn final_end(&self) -> usize {
        self.text.len() - 1
    }

    /// Walks `pattern` from the root, matching it edge by edge. Returns the
    /// node the pattern lands on (possibly mid-edge) when the whole pattern
    /// matches, `None` otherwise.
    fn find_node(&self, pattern: &[u8]) -> Option<NodeId> {
        let mut node = NodeStore::ROOT;
        let mut consumed = 0usize;

        while consumed < pattern.len() {
            let key = pattern[consumed];
            let child = self.store.get_child(node, key)?;

            let start = self.store.start_of(child);
            let edge_len = self.store.edge_len(child, self.final_end());
            let take = (pattern.len() - consumed).min(edge_len);

            let bytes = self.text.as_bytes();
            if bytes[start..start + take] != pattern[consumed..consumed + take] {
                return None;
            }

            consumed += take;
            node = child;

            if take < edge_len {
                // Pattern exhausted inside the edge.
                break;
            }
        }

        Some(node)
    }

    /// Enumerates every leaf beneath `node`, 1-based. Uses an explicit
    /// worklist rather than recursion: occurrence counts are unbounded by
    /// pattern length, so recursion depth would track text length instead.
    fn collect_leaf_positions(&self, node: NodeId) -> Vec<usize> {
        let mut positions = Vec::new();
        let mut stack = vec![node];

        while let Some(current) = stack.pop() {
            let n = self.store.node(current);
            if n.is_leaf() {
                let suffix_index = n.suffix_index.expect("leaf without suffix_index, invariant violated");
                positions.push(suffix_index + 1);
            } else {
                for (_, child) in n.children.iter() {
                    stack.push(child);
                }
            }
        }

        positions
    }
}

impl SuffixSearch for CompactSuffixTree {
    fn search(&self, pattern: &[u8]) -> Result<Vec<usize>> {
        if pattern.contains(&crate::text::SENTINEL) {
            return Err(TreeError::PatternContainsSentinel);
        }
        if pattern.is_empty() || pattern.len() > self.text.original_len() {
            return Ok(Vec::new());
        }

        match self.find_node(pattern) {
            Some(node) => {
                let mut positions = self.collect_leaf_positions(node);
                positions.sort_unstable();
                Ok(positions)
            }
            None => Ok(Vec::new()),
        }
    }
}

/// Owns the mutable construction-only state: the node store, the active
/// point, `remainder`, and `tree_end`. Consumed by `run`, which hands back
/// just the finished `NodeStore`.
struct Builder {
    store: NodeStore,
    active: ActivePoint,
    remainder: usize,
    tree_end: usize,
}

impl Builder {
    fn new() -> Self {
        Builder { store: NodeStore::new(), active: ActivePoint::new(), remainder: 0, tree_end: 0 }
    }

    fn run(mut self, text: &[u8]) -> NodeStore {
        for pos in 0..text.len() {
            self.extend(pos, text);
        }
        self.store
    }

    /// Extends the implicit tree from representing `text[0..pos-1]` to
    /// representing `text[0..pos]`.
    fn extend(&mut self, pos: usize, text: &[u8]) {
        self.tree_end = pos;
        self.remainder += 1;
        let mut last_new_internal: Option<NodeId> = None;

        while self.remainder > 0 {
            if self.active.length == 0 {
                self.active.edge = pos;
            }
            let k = text[self.active.edge];

            match self.store.get_child(self.active.node, k) {
                None => {
                    // Rule 2: no edge starts with k at active_node.
                    let suffix_index = pos - self.remainder + 1;
                    let leaf = self.store.make_leaf(pos, suffix_index);
                    self.store.set_child(self.active.node, k, leaf);

                    if let Some(pending) = last_new_internal.take() {
                        self.store.set_suffix_link(pending, self.active.node);
                    }
                }
                Some(child) => {
                    if self.active.try_walk_down(&self.store, child, self.tree_end) {
                        continue;
                    }

                    let next_pos = self.store.start_of(child) + self.active.length;
                    if text[next_pos] == text[pos] {
                        // Rule 3: implicit extension, nothing more to do
                        // this step. Unresolved suffixes carry forward in
                        // the advanced active point and remainder.
                        if let Some(pending) = last_new_internal.take() {
                            self.store.set_suffix_link(pending, self.active.node);
                        }
                        self.active.length += 1;
                        break;
                    }

                    // Rule 2 with an edge split.
                    let split_len = self.active.length;
                    let (split, _old_child) =
                        self.store.split_edge(self.active.node, k, split_len, text[next_pos]);

                    let suffix_index = pos - self.remainder + 1;
                    let leaf = self.store.make_leaf(pos, suffix_index);
                    self.store.set_child(split, text[pos], leaf);

                    if let Some(pending) = last_new_internal.take() {
                        self.store.set_suffix_link(pending, split);
                    }
                    last_new_internal = Some(split);
                }
            }

            self.remainder -= 1;

            if self.active.node == NodeStore::ROOT && self.active.length > 0 {
                self.active.length -= 1;
                self.active.edge = pos - self.remainder + 1;
            } else if self.active.node != NodeStore::ROOT {
                self.active.node = self.store.suffix_link(self.active.node).unwrap_or(NodeStore::ROOT);
            }
        }
    }
}
