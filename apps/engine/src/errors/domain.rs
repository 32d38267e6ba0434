//! Domain-level error type returned by every match operation.
//!
//! Everyday rule violations (an illegal bid, calling with nothing to call)
//! are recoverable: the operation is rejected and the match state is left
//! exactly as it was. `Invariant` is reserved for orchestrator bugs.

use thiserror::Error;

use crate::domain::bidding::BidRejection;

/// Validation kinds, so callers can branch without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Call or exact call with no bid on the table.
    NoActiveBid,
    /// Bid or challenge while no round is in progress.
    RoundNotActive,
    /// `start_round` while the previous round is still being bid.
    RoundAlreadyActive,
    /// Any operation after a single player remains.
    MatchOver,
    /// A die face outside 1..=6, or more dice than a player may hold.
    InvalidDie,
    /// Too few seats, or an unusable starting dice count.
    InvalidPlayers,
    /// Behavior profile value outside its allowed range.
    InvalidProfile,
    /// Malformed or out-of-range match configuration.
    InvalidConfig,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Candidate bid failed the legality check.
    #[error("illegal bid: {0}")]
    IllegalBid(#[from] BidRejection),
    /// Input or phase validation failure.
    #[error("validation error {0:?}: {1}")]
    Validation(ValidationKind, String),
    /// Programming error in the orchestrator (e.g. turn on an eliminated seat).
    #[error("invariant violated: {0}")]
    Invariant(String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::Invariant(detail.into())
    }

    /// The validation kind, if this is a validation error.
    pub fn kind(&self) -> Option<ValidationKind> {
        match self {
            DomainError::Validation(kind, _) => Some(*kind),
            _ => None,
        }
    }
}
