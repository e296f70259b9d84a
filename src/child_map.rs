//! Children of a tree node, keyed by the leading symbol of the outgoing edge.
//!
//! The alphabet isn't known up front, so child maps grow as needed:
//! rather than a fixed, rank-indexed array, children are stored as a small
//! linear-scanned list of (symbol, node) pairs. Branching factor at any
//! one node is tiny in practice (at most the alphabet size plus the
//! sentinel), so `smallvec` keeps the common case inline without paying
//! for a hash map.

use smallvec::SmallVec;

pub(crate) type NodeId = usize;

#[derive(Debug, Default)]
pub(crate) struct ChildMap {
    entries: SmallVec<[(u8, NodeId); 4]>,
}

impl ChildMap {
    pub(crate) fn new() -> Self {
        ChildMap { entries: SmallVec::new() }
    }

    pub(crate) fn get(&self, key: u8) -> Option<NodeId> {
        self.entries.iter().find(|&&(k, _)| k == key).map(|&(_, id)| id)
    }

    /// Inserts or overwrites the child at `key`. Callers never intend to
    /// overwrite in practice (invariant 3: sibling edges have distinct
    /// leading symbols) but this stays total rather than panicking, since
    /// the rewire step of `split_edge` legitimately replaces an entry.
    pub(crate) fn set(&mut self, key: u8, child: NodeId) {
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = child;
        } else {
            self.entries.push((key, child));
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (u8, NodeId)> + '_ {
        self.entries.iter().copied()
    }
}
