#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Dudo (Liar's Dice) rules engine: bid legality, the minimal-raise
//! generator, the round/match state machine and the computer opponents.

pub mod ai;
pub mod config;
pub mod domain;
pub mod errors;

// Re-exports for public API
pub use ai::{
    apply_action, create_ai, decide, decide_classic, play_turn, Action, ActionOutcome, AiConfig,
    AiError, AiPlayer, BehaviorProfile, ClassicProfile,
};
pub use config::MatchConfig;
pub use domain::{
    is_legal_raise, next_minimal_raise, Bid, BidRejection, ChallengeOutcome, DiceRng, MatchState,
    MatchView, RoundPhase, Seat, SeededRng,
};
pub use errors::{DomainError, ValidationKind};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    engine_test_support::logging::init();
}
