//! Error types for Stride achievement data

use thiserror::Error;

/// Errors raised when validating achievement classification keys.
///
/// Only strict parsing (`FromStr` on the vocabulary enums) produces these.
/// The display resolvers never fail; they fall back per their documented
/// policy instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AchievementError {
    /// Badge color key is not part of the closed vocabulary
    #[error("Unknown badge color key: {0}")]
    UnknownBadgeColor(String),

    /// Category key is not part of the closed vocabulary
    #[error("Unknown category key: {0}")]
    UnknownCategory(String),
}
