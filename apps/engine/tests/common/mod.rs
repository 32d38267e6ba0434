#![allow(dead_code)]

// tests/common/mod.rs
use dudo_engine::domain::{Face, Player};
use dudo_engine::MatchState;

// Logging is auto-installed for every test binary that declares `mod common`.
#[ctor::ctor]
fn init_logging() {
    engine_test_support::logging::init();
}

/// Match over fixed hands, named P0.., each seat with a ceiling of `max_dice`.
pub fn match_with_hands(hands: &[&[Face]], max_dice: u8) -> MatchState {
    let players = hands
        .iter()
        .enumerate()
        .map(|(i, hand)| {
            Player::with_dice(format!("P{i}"), max_dice, hand.to_vec())
                .expect("scenario hands must be valid")
        })
        .collect();
    MatchState::from_players(players).expect("scenario needs at least two seats")
}

/// Same as [`match_with_hands`] with the round already open on those hands.
pub fn open_round(hands: &[&[Face]], max_dice: u8) -> MatchState {
    let mut state = match_with_hands(hands, max_dice);
    state
        .start_round_with_hands(hands.iter().map(|h| h.to_vec()).collect())
        .expect("scenario round must open");
    state
}
