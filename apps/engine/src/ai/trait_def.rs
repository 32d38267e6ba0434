//! AI player trait definition.

use std::time::Duration;

use thiserror::Error;

use crate::ai::Action;
use crate::domain::player_view::MatchView;
use crate::errors::domain::DomainError;

/// Errors that can occur during AI decision-making.
#[derive(Debug, Error)]
pub enum AiError {
    /// AI encountered an internal error
    #[error("AI internal error: {0}")]
    Internal(String),
    /// AI produced an invalid move
    #[error("AI invalid move: {0}")]
    InvalidMove(String),
}

impl From<AiError> for DomainError {
    fn from(err: AiError) -> Self {
        DomainError::invariant(format!("AI error: {err}"))
    }
}

/// Trait for AI players.
///
/// Implementations receive the match as seen from their own seat and must
/// return an action the state machine accepts: a legal raise, or a challenge
/// when there is a bid to challenge.
pub trait AiPlayer: Send + Sync {
    /// Decide what to do on this seat's turn.
    fn choose_action(&self, view: &MatchView) -> Result<Action, AiError>;

    /// How long a presentation layer should pause before showing the action.
    /// The engine never sleeps.
    fn think_delay(&self) -> Duration {
        Duration::ZERO
    }
}
