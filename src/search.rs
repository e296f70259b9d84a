//! Shared query surface implemented by both index variants, so tests (and
//! callers who don't care which variant they hold) can go through one
//! generic path.

use crate::error::Result;

pub trait SuffixSearch {
    /// Returns every 1-based starting position of `pattern` in the text
    /// the tree was built from, sorted ascending. An empty pattern or one
    /// longer than the text returns an empty list rather than an error.
    fn search(&self, pattern: &[u8]) -> Result<Vec<usize>>;
}

/// Free-function form matching the core API's `search(tree, pattern)`
/// shape; `SuffixSearch::search` is the idiomatic entry point in Rust.
pub fn search<T: SuffixSearch>(tree: &T, pattern: &[u8]) -> Result<Vec<usize>> {
    tree.search(pattern)
}
