//! Naive Trie Oracle (component F).
//!
//! Inserts every suffix of the text, character by character, recording the
//! (1-based) starting position at every node traversed. Retained solely as
//! a reference oracle for cross-validating the compact tree in tests.
//! Quadratic in both time and space.
//!
//! The reference implementation this was distilled from inserts via
//! recursion whose depth tracks the suffix length; this walks iteratively
//! instead so a long text can't blow the stack.

use crate::child_map::{ChildMap, NodeId};
use crate::error::{Result, TreeError};
use crate::search::SuffixSearch;
use crate::text::{Text, SENTINEL};

struct TrieNode {
    children: ChildMap,
    /// 1-based starting positions of every suffix whose insertion path
    /// passes through this node.
    positions: Vec<usize>,
}

impl TrieNode {
    fn new() -> Self {
        TrieNode { children: ChildMap::new(), positions: Vec::new() }
    }
}

/// Quadratic-space trie of every suffix of the text; see module docs.
pub struct NaiveSuffixTree {
    nodes: Vec<TrieNode>,
    text: Text,
}

impl NaiveSuffixTree {
    const ROOT: NodeId = 0;

    pub(crate) fn build(text: &[u8]) -> Result<Self> {
        let text = Text::seal(text)?;
        let bytes = text.as_bytes();

        let mut nodes = vec![TrieNode::new()];

        // i ranges over the original text only; each inserted suffix still
        // reaches the sentinel at its own end.
        for i in 0..text.original_len() {
            let mut current = Self::ROOT;
            for &symbol in &bytes[i..] {
                let next = match nodes[current].children.get(symbol) {
                    Some(id) => id,
                    None => {
                        nodes.push(TrieNode::new());
                        let id = nodes.len() - 1;
                        nodes[current].children.set(symbol, id);
                        id
                    }
                };
                nodes[next].positions.push(i + 1);
                current = next;
            }
        }

        Ok(NaiveSuffixTree { nodes, text })
    }
}

impl SuffixSearch for NaiveSuffixTree {
    fn search(&self, pattern: &[u8]) -> Result<Vec<usize>> {
        if pattern.contains(&SENTINEL) {
            return Err(TreeError::PatternContainsSentinel);
        }
        if pattern.is_empty() || pattern.len() > self.text.original_len() {
            return Ok(Vec::new());
        }

        let mut current = Self::ROOT;
        for &symbol in pattern {
            match self.nodes[current].children.get(symbol) {
                Some(next) => current = next,
                None => return Ok(Vec::new()),
            }
        }

        let mut positions = self.nodes[current].positions.clone();
        positions.sort_unstable();
        Ok(positions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_expected_scenarios() {
        let tree = NaiveSuffixTree::build(b"banana").unwrap();
        assert_eq!(tree.search(b"an").unwrap(), vec![2, 4]);
        assert_eq!(tree.search(b"na").unwrap(), vec![3, 5]);
        assert_eq!(tree.search(b"ban").unwrap(), vec![1]);
        assert_eq!(tree.search(b"xyz").unwrap(), Vec::<usize>::new());
    }

    #[test]
    fn empty_and_over_length_pattern() {
        let tree = NaiveSuffixTree::build(b"banana").unwrap();
        assert_eq!(tree.search(b"").unwrap(), Vec::<usize>::new());
        assert_eq!(tree.search(b"bananabanana").unwrap(), Vec::<usize>::new());
    }

    #[test]
    fn rejects_pattern_containing_sentinel() {
        let tree = NaiveSuffixTree::build(b"banana").unwrap();
        assert_eq!(tree.search(b"a\0n").unwrap_err(), TreeError::PatternContainsSentinel);
    }

    #[test]
    fn rejects_sentinel_in_text() {
        assert_eq!(NaiveSuffixTree::build(b"ba\0na").unwrap_err(), TreeError::SentinelInText);
    }
}
