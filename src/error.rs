//! Error types for deck operations.

use thiserror::Error;

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// No cards remain to deal.
    #[error("no cards remain to deal")]
    Exhausted,
}
