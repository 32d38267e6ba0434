//! AI player module - automated opponents.
//!
//! This module provides:
//! - [`decide`] and [`decide_classic`], pure policies over a [`MatchView`]
//! - the [`AiPlayer`] trait and its implementations
//! - a static registry plus [`create_ai`]
//! - [`play_turn`] / [`apply_action`] for orchestrators

mod classic;
pub mod config;
mod heuristic;
pub mod policy;
pub mod profile;
mod random;
pub mod registry;
mod trait_def;

use std::fmt;

pub use classic::{decide_classic, Classic};
pub use config::AiConfig;
pub use heuristic::Heuristic;
pub use policy::decide;
pub use profile::{BehaviorProfile, ClassicProfile};
pub use random::RandomPlayer;
pub use registry::{by_name, registered_ais, AiFactory};
use serde::{Deserialize, Serialize};
pub use trait_def::{AiError, AiPlayer};

use crate::domain::player_view::MatchView;
use crate::domain::round_flow::{BidPlaced, ChallengeOutcome};
use crate::domain::{Bid, MatchState};
use crate::errors::domain::{DomainError, ValidationKind};

/// What a player does on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "bid", rename_all = "snake_case")]
pub enum Action {
    Raise(Bid),
    /// Doubt the standing bid.
    Call,
    /// Claim the standing bid is exactly right.
    ExactCall,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Raise(bid) => write!(f, "raise to {bid}"),
            Action::Call => write!(f, "call"),
            Action::ExactCall => write!(f, "exact call"),
        }
    }
}

/// What applying an [`Action`] did to the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActionOutcome {
    Bid(BidPlaced),
    Challenge(ChallengeOutcome),
}

/// Create a registered AI by name.
pub fn create_ai(name: &str, config: &AiConfig) -> Result<Box<dyn AiPlayer>, DomainError> {
    let factory = by_name(name).ok_or_else(|| {
        DomainError::validation(
            ValidationKind::InvalidConfig,
            format!("unknown AI '{name}'"),
        )
    })?;
    (factory.make)(config)
}

/// Apply `action` for the player whose turn it is.
pub fn apply_action(state: &mut MatchState, action: Action) -> Result<ActionOutcome, DomainError> {
    match action {
        Action::Raise(bid) => state.place_bid(bid).map(ActionOutcome::Bid),
        Action::Call => state.call().map(ActionOutcome::Challenge),
        Action::ExactCall => state.exact_call().map(ActionOutcome::Challenge),
    }
}

/// Ask `ai` for the current player's action and apply it.
pub fn play_turn(
    state: &mut MatchState,
    ai: &dyn AiPlayer,
) -> Result<(Action, ActionOutcome), DomainError> {
    let view: MatchView = state.current_view();
    let action = ai.choose_action(&view)?;
    let outcome = apply_action(state, action)?;
    Ok((action, outcome))
}
