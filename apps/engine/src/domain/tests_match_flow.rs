use crate::domain::bidding::{Bid, BidRejection};
use crate::domain::rng::SeededRng;
use crate::domain::round_flow::ChallengeKind;
use crate::domain::state::{MatchState, RoundPhase};
use crate::domain::test_state_helpers::{active_round, players_with_hands, round_with_bids};
use crate::errors::domain::{DomainError, ValidationKind};

fn b(q: u32, f: u8) -> Bid {
    Bid::new(q, f)
}

fn counts(state: &MatchState) -> Vec<u8> {
    state.players().iter().map(|p| p.dice_count()).collect()
}

#[test]
fn bids_rotate_and_record_the_bidder() {
    let mut state = active_round(&[&[2, 3], &[4, 5], &[6, 6]], 5);
    assert_eq!(state.current_player(), 0);

    let placed = state.place_bid(b(1, 2)).unwrap();
    assert_eq!(placed.bidder, 0);
    assert_eq!(placed.next_player, 1);
    assert_eq!(state.current_bid(), Some(b(1, 2)));
    assert_eq!(state.last_bidder(), Some(0));

    state.place_bid(b(1, 3)).unwrap();
    let placed = state.place_bid(b(2, 3)).unwrap();
    assert_eq!(placed.next_player, 0, "turn wraps to seat 0");
    assert_eq!(state.log().iter().next(), Some("P2 bids 2 3s"));
}

#[test]
fn call_on_a_true_bid_costs_the_caller() {
    // Aces count for fours: 1 + 1 natural four in each hand = 4.
    let mut state = round_with_bids(&[&[1, 4], &[4, 6, 1]], 5, &[b(4, 4)]);
    let out = state.call().unwrap();

    assert_eq!(out.kind, ChallengeKind::Call);
    assert_eq!((out.caller, out.bidder), (1, 0));
    assert_eq!(out.actual, 4);
    assert!(!out.challenger_won);
    assert_eq!(out.loser, Some(1));
    assert_eq!(out.next_starter, Some(1));
    assert!(!out.match_over);
    assert_eq!(counts(&state), vec![2, 2]);
    assert_eq!(state.phase(), RoundPhase::Resolved);
    assert!(!state.round_active());
    assert_eq!(state.current_player(), 1);
}

#[test]
fn call_on_a_false_bid_costs_the_bidder() {
    let mut state = round_with_bids(&[&[1, 4], &[4, 6, 1]], 5, &[b(5, 4)]);
    let out = state.call().unwrap();
    assert!(out.challenger_won);
    assert_eq!(out.loser, Some(0));
    assert_eq!(out.next_starter, Some(0));
    assert_eq!(counts(&state), vec![1, 3]);

    let lines: Vec<&str> = state.log().latest(3).collect();
    assert_eq!(
        lines,
        vec![
            "Bid was wrong! P0 loses a die!",
            "Actual count: 4 4s",
            "P1 calls! Checking...",
        ]
    );
}

#[test]
fn aces_bid_counts_only_aces() {
    let mut state = round_with_bids(&[&[1, 4], &[4, 6, 1]], 5, &[b(3, 1)]);
    let out = state.call().unwrap();
    assert_eq!(out.actual, 2);
    assert_eq!(out.loser, Some(0));
}

#[test]
fn exact_call_right_gains_a_die_and_bidder_opens() {
    let mut state = round_with_bids(&[&[1, 4], &[4, 6, 1]], 5, &[b(4, 4)]);
    let out = state.exact_call().unwrap();
    assert_eq!(out.kind, ChallengeKind::ExactCall);
    assert!(out.challenger_won);
    assert_eq!(out.gainer, Some(1));
    assert_eq!(out.loser, None);
    assert_eq!(out.next_starter, Some(0));
    assert_eq!(counts(&state), vec![2, 4]);
    assert_eq!(
        state.log().iter().next(),
        Some("Spot On! P1 gains a die!")
    );
}

#[test]
fn exact_call_right_at_ceiling_gains_nothing() {
    let mut state = round_with_bids(&[&[1, 4], &[4, 6, 1]], 3, &[b(4, 4)]);
    let out = state.exact_call().unwrap();
    assert!(out.challenger_won);
    assert_eq!(out.gainer, None);
    assert_eq!(counts(&state), vec![2, 3]);
    assert_eq!(out.next_starter, Some(0));
}

#[test]
fn exact_call_wrong_costs_the_caller_either_way() {
    for bid in [b(3, 4), b(5, 4)] {
        let mut state = round_with_bids(&[&[1, 4], &[4, 6, 1]], 5, &[bid]);
        let out = state.exact_call().unwrap();
        assert!(!out.challenger_won, "{bid}");
        assert_eq!(out.loser, Some(1));
        assert_eq!(out.next_starter, Some(1));
        assert_eq!(counts(&state), vec![2, 2]);
    }
}

#[test]
fn eliminated_loser_passes_the_start_on() {
    let mut state = round_with_bids(&[&[2], &[3, 3], &[4, 4]], 5, &[b(2, 2)]);
    let out = state.call().unwrap();
    assert_eq!(out.loser, Some(0));
    assert_eq!(out.eliminated, Some(0));
    assert_eq!(out.next_starter, Some(1));
    assert!(!out.match_over);
    assert!(state.players()[0].is_eliminated());

    let mut rng = SeededRng::new(9);
    let started = state.start_round(&mut rng).unwrap();
    assert_eq!(started.starter, 1);
    assert_eq!(started.round_no, 2);
    assert_eq!(started.table_cap, 4);
    assert!(state.players()[0].dice().is_empty());

    state.place_bid(b(1, 2)).unwrap();
    assert_eq!(state.current_player(), 2);
    state.place_bid(b(1, 3)).unwrap();
    assert_eq!(state.current_player(), 1, "seat 0 is skipped");
}

#[test]
fn last_survivor_wins() {
    let mut state = round_with_bids(&[&[2], &[3, 3]], 5, &[b(2, 2)]);
    let out = state.call().unwrap();
    assert!(out.match_over);
    assert_eq!(out.next_starter, None);
    assert_eq!(state.phase(), RoundPhase::MatchOver);
    assert!(state.is_game_over());
    assert_eq!(state.winner_seat(), Some(1));
    assert_eq!(
        state.log().iter().next(),
        Some("P1 wins the match!")
    );

    let before = state.clone();
    let err = state.start_round(&mut SeededRng::new(1)).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::MatchOver));
    assert_eq!(state, before);
}

#[test]
fn start_round_rolls_live_hands() {
    let mut state = MatchState::from_players(players_with_hands(&[&[2, 2, 2], &[5]], 5)).unwrap();
    let started = state.start_round(&mut SeededRng::new(77)).unwrap();
    assert_eq!(started.round_no, 1);
    assert_eq!(started.starter, 0);
    assert_eq!(started.table_cap, 4);
    assert_eq!(state.players()[0].dice().len(), 3);
    assert_eq!(state.players()[1].dice().len(), 1);
    assert!(state.current_bid().is_none());
    assert_eq!(
        state.log().iter().next(),
        Some("New round started. P0 goes first.")
    );
}

#[test]
fn rejected_operations_leave_state_untouched() {
    fn assert_rejected(
        state: &mut MatchState,
        op: impl FnOnce(&mut MatchState) -> Result<(), DomainError>,
        kind: ValidationKind,
    ) {
        let before = state.clone();
        let err = op(state).unwrap_err();
        assert_eq!(err.kind(), Some(kind), "{err}");
        assert_eq!(*state, before);
    }

    let mut fresh =
        MatchState::from_players(players_with_hands(&[&[2, 3], &[4, 5]], 5)).unwrap();
    assert_rejected(
        &mut fresh,
        |s| s.place_bid(b(1, 2)).map(drop),
        ValidationKind::RoundNotActive,
    );
    assert_rejected(&mut fresh, |s| s.call().map(drop), ValidationKind::RoundNotActive);

    let mut open = active_round(&[&[2, 3], &[4, 5]], 5);
    assert_rejected(&mut open, |s| s.call().map(drop), ValidationKind::NoActiveBid);
    assert_rejected(&mut open, |s| s.exact_call().map(drop), ValidationKind::NoActiveBid);
    assert_rejected(
        &mut open,
        |s| s.start_round_with_hands(vec![vec![2, 2], vec![3, 3]]).map(drop),
        ValidationKind::RoundAlreadyActive,
    );

    let mut resolved = round_with_bids(&[&[2, 3], &[4, 5]], 5, &[b(1, 2)]);
    resolved.call().unwrap();
    assert_rejected(
        &mut resolved,
        |s| s.exact_call().map(drop),
        ValidationKind::RoundNotActive,
    );
}

#[test]
fn illegal_bid_is_refused_with_its_reason() {
    let mut state = round_with_bids(&[&[2, 3], &[4, 5]], 5, &[b(2, 4)]);
    let before = state.clone();

    let err = state.place_bid(b(2, 3)).unwrap_err();
    assert!(matches!(
        err,
        DomainError::IllegalBid(BidRejection::FaceNotRaised { face: 4 })
    ));
    assert_eq!(state, before);

    let mut opening = active_round(&[&[2, 3], &[4, 5]], 5);
    let err = opening.place_bid(b(1, 1)).unwrap_err();
    assert!(matches!(
        err,
        DomainError::IllegalBid(BidRejection::WildcardOpening)
    ));
}

#[test]
fn bad_hands_are_refused_without_partial_writes() {
    let mut state = MatchState::from_players(players_with_hands(&[&[2, 3], &[4, 5]], 5)).unwrap();
    let before = state.clone();
    let err = state
        .start_round_with_hands(vec![vec![6, 6], vec![9, 1]])
        .unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::InvalidDie));
    assert_eq!(state, before);

    let err = state
        .start_round_with_hands(vec![vec![6, 6], vec![1]])
        .unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::InvalidDie));
    assert_eq!(state, before);
}
