//! Error types for card construction.

use thiserror::Error;

/// Errors that can occur when building a rank from a raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RankError {
    /// The raw value is outside `1..=13`.
    #[error("invalid rank: {0} (expected 1..=13)")]
    InvalidRank(u8),
}
