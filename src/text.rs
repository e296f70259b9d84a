//! Symbol & Text Model (component A).
//!
//! The text is sealed once, at construction: the sentinel is appended and
//! the resulting byte sequence never changes again. Symbols are plain
//! bytes; comparison is exact equality.

use crate::error::{Result, TreeError};

/// The reserved terminal symbol. Chosen as NUL since it cannot occur in
/// ordinary text and mirrors the `\0`-terminated convention
/// `suff_collections` asks its callers to apply by hand. Here the crate
/// appends it itself instead.
pub(crate) const SENTINEL: u8 = 0x00;

pub(crate) struct Text {
    /// The caller's bytes with `SENTINEL` appended.
    sealed: Vec<u8>,
}

impl Text {
    /// Validates and seals `input`, appending the sentinel.
    pub(crate) fn seal(input: &[u8]) -> Result<Text> {
        if input.is_empty() {
            return Err(TreeError::EmptyText);
        }
        if input.contains(&SENTINEL) {
            return Err(TreeError::SentinelInText);
        }

        let mut sealed = Vec::with_capacity(input.len() + 1);
        sealed.extend_from_slice(input);
        sealed.push(SENTINEL);

        Ok(Text { sealed })
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.sealed
    }

    /// Length including the appended sentinel.
    pub(crate) fn len(&self) -> usize {
        self.sealed.len()
    }

    /// Length of the caller's original text, excluding the sentinel.
    pub(crate) fn original_len(&self) -> usize {
        self.sealed.len() - 1
    }
}
