//! Input-validation failures surfaced to callers.
//!
//! `ContractViolation`-class failures (invariant breakage during
//! construction) are deliberately not represented here: they're
//! programming errors, not recoverable conditions, and show up as panics
//! at the internal call site that detects them instead.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("text must not be empty")]
    EmptyText,

    #[error("text contains the reserved sentinel byte (0x00)")]
    SentinelInText,

    #[error("pattern contains the reserved sentinel byte (0x00)")]
    PatternContainsSentinel,
}

pub type Result<T> = std::result::Result<T, TreeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(TreeError::EmptyText.to_string(), "text must not be empty");
        assert_eq!(
            TreeError::SentinelInText.to_string(),
            "text contains the reserved sentinel byte (0x00)"
        );
        assert_eq!(
            TreeError::PatternContainsSentinel.to_string(),
            "pattern contains the reserved sentinel byte (0x00)"
        );
    }
}
