/// Property-based tests for round resolution and whole-match invariants
use proptest::prelude::*;

use crate::domain::bidding::legal_raises;
use crate::domain::dice::Face;
use crate::domain::rng::{DiceRng, SeededRng};
use crate::domain::rules::die_matches;
use crate::domain::state::{MatchState, RoundPhase};
use crate::domain::test_state_helpers::active_round;
use crate::domain::{test_gens, test_prelude};

fn total_dice(state: &MatchState) -> u32 {
    state.players().iter().map(|p| p.dice_count() as u32).sum()
}

fn hand_refs(table: &[Vec<Face>]) -> Vec<&[Face]> {
    table.iter().map(Vec::as_slice).collect()
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: a call moves exactly one die off the table, from the right seat.
    #[test]
    fn prop_call_costs_exactly_one_die(table in test_gens::table(), pick in any::<prop::sample::Index>()) {
        let mut state = active_round(&hand_refs(&table), 5);
        let options = legal_raises(None, state.table_cap());
        let bid = options[pick.index(options.len())];
        state.place_bid(bid).unwrap();

        let before = total_dice(&state);
        let expected: u32 = table
            .iter()
            .flatten()
            .filter(|&&d| die_matches(d, bid.face))
            .count() as u32;

        let out = state.call().unwrap();
        prop_assert_eq!(out.actual, expected);
        prop_assert_eq!(total_dice(&state), before - 1);
        let loser = if expected >= bid.quantity { out.caller } else { out.bidder };
        prop_assert_eq!(out.loser, Some(loser));
        prop_assert_ne!(state.phase(), RoundPhase::Active);
    }

    /// Property: an exact call changes the table by at most one die.
    #[test]
    fn prop_exact_call_moves_at_most_one_die(table in test_gens::table(), pick in any::<prop::sample::Index>()) {
        let mut state = active_round(&hand_refs(&table), 5);
        let options = legal_raises(None, state.table_cap());
        let bid = options[pick.index(options.len())];
        state.place_bid(bid).unwrap();

        let before = total_dice(&state) as i64;
        let out = state.exact_call().unwrap();
        let after = total_dice(&state) as i64;
        prop_assert!((after - before).abs() <= 1);
        prop_assert_eq!(out.challenger_won, out.actual == bid.quantity);
        if out.challenger_won {
            prop_assert!(out.loser.is_none());
        } else {
            prop_assert_eq!(after, before - 1);
        }
    }

    /// Property: random legal play always ends with one survivor, and the
    /// player to act never sits out.
    #[test]
    fn prop_random_matches_terminate(seed in any::<u64>(), players in 2usize..=5, dice in 1u8..=4) {
        let names = (0..players).map(|i| format!("P{i}")).collect();
        let config = crate::config::MatchConfig::new(names, dice);
        let mut state = MatchState::new(&config).unwrap();
        let mut rng = SeededRng::new(seed);
        let ceiling = players as u32 * dice as u32;

        let mut rounds = 0;
        while state.phase() != RoundPhase::MatchOver {
            rounds += 1;
            prop_assert!(rounds < 500, "match did not terminate");
            state.start_round(&mut rng).unwrap();

            loop {
                prop_assert!(!state.players()[state.current_player()].is_eliminated());
                let raises = legal_raises(state.current_bid(), state.table_cap());
                let challenge = state.current_bid().is_some()
                    && (raises.is_empty() || rng.next_int(0, 3) == 0);
                if challenge {
                    if rng.next_int(0, 4) == 0 {
                        state.exact_call().unwrap();
                    } else {
                        state.call().unwrap();
                    }
                    break;
                }
                let bid = raises[rng.next_int(0, raises.len().min(4) as u32) as usize];
                state.place_bid(bid).unwrap();
            }
            prop_assert!(total_dice(&state) <= ceiling);
        }

        prop_assert_eq!(state.active_seats().count(), 1);
        prop_assert_eq!(state.winner_seat(), Some(state.current_player()));
    }
}
