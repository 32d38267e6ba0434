//! Domain layer: pure game rules, no I/O.

pub mod bidding;
pub mod dice;
pub mod event_log;
pub mod match_transition;
pub mod player_view;
pub mod raise;
pub mod rng;
pub mod round_flow;
pub mod rules;
pub mod seed_derivation;
pub mod state;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_legality;
#[cfg(test)]
mod tests_match_flow;
#[cfg(test)]
mod tests_props_legality;
#[cfg(test)]
mod tests_props_match;

// Re-exports for ergonomics
pub use bidding::{is_legal, is_legal_raise, legal_raises, Bid, BidRejection};
pub use dice::{Face, Player, WILDCARD};
pub use event_log::EventLog;
pub use match_transition::{derive_match_transitions, MatchSnapshot, MatchTransition};
pub use player_view::MatchView;
pub use raise::{next_minimal_raise, OPENING_BID};
pub use rng::{DiceRng, EntropyRng, SeededRng};
pub use round_flow::{BidPlaced, ChallengeKind, ChallengeOutcome, RoundStarted};
pub use rules::{count_matching, table_cap};
pub use seed_derivation::{derive_round_seed, derive_seat_seed};
pub use state::{MatchState, RoundPhase, Seat};
