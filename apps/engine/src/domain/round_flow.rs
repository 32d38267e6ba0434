//! Round operations: start, bid, call, exact call.
//!
//! Each operation either fully applies or returns an error with the match
//! state untouched. Everything that can fail is checked before the first
//! mutation.

use serde::Serialize;
use tracing::{debug, info};

use crate::domain::bidding::{is_legal_raise, Bid};
use crate::domain::dice::{face_name, Face};
use crate::domain::rng::DiceRng;
use crate::domain::rules::count_matching;
use crate::domain::state::{MatchState, RoundPhase, Seat};
use crate::errors::domain::{DomainError, ValidationKind};

/// Result of starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoundStarted {
    pub round_no: u32,
    pub starter: Seat,
    pub table_cap: u32,
}

/// Result of an accepted bid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BidPlaced {
    pub bidder: Seat,
    pub bid: Bid,
    pub next_player: Seat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ChallengeKind {
    /// Doubt the bid: it loses if fewer dice match than claimed.
    Call,
    /// Claim the bid is exactly right.
    ExactCall,
}

/// How a challenge settled the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChallengeOutcome {
    pub kind: ChallengeKind,
    pub caller: Seat,
    pub bidder: Seat,
    pub bid: Bid,
    /// Dice on the table that count toward `bid.face`.
    pub actual: u32,
    /// Whether the challenger was right.
    pub challenger_won: bool,
    /// Seat that lost a die, if any.
    pub loser: Option<Seat>,
    /// Seat that regained a die (absent when already at its ceiling).
    pub gainer: Option<Seat>,
    /// Set when the loss took the loser's last die.
    pub eliminated: Option<Seat>,
    /// Opener of the next round; `None` once the match is over.
    pub next_starter: Option<Seat>,
    pub match_over: bool,
}

impl MatchState {
    /// Roll fresh dice for every live player and open bidding.
    pub fn start_round(&mut self, rng: &mut dyn DiceRng) -> Result<RoundStarted, DomainError> {
        self.ensure_can_start()?;
        for player in self.players.iter_mut().filter(|p| !p.is_eliminated()) {
            player.roll(rng);
        }
        Ok(self.open_round())
    }

    /// Open bidding with hands rolled outside the engine (replays, physical
    /// dice). Eliminated seats must get empty hands.
    pub fn start_round_with_hands(
        &mut self,
        hands: Vec<Vec<Face>>,
    ) -> Result<RoundStarted, DomainError> {
        self.ensure_can_start()?;
        if hands.len() != self.players.len() {
            return Err(DomainError::validation(
                ValidationKind::InvalidDie,
                format!(
                    "expected {} hands, got {}",
                    self.players.len(),
                    hands.len()
                ),
            ));
        }

        // Validate on a copy so a bad hand leaves every player untouched.
        let mut players = self.players.clone();
        for (player, hand) in players.iter_mut().zip(hands) {
            player.set_hand(hand)?;
        }
        self.players = players;
        Ok(self.open_round())
    }

    /// Place `bid` for the player whose turn it is.
    pub fn place_bid(&mut self, bid: Bid) -> Result<BidPlaced, DomainError> {
        self.ensure_active()?;
        is_legal_raise(self.current_bid, bid, self.table_cap())?;

        let bidder = self.current_player;
        let next_player = self
            .next_active_seat(bidder)
            .filter(|&seat| seat != bidder)
            .ok_or_else(|| DomainError::invariant("active round with a single live seat"))?;

        self.current_bid = Some(bid);
        self.last_bidder = Some(bidder);
        self.current_player = next_player;

        debug!(
            round_no = self.round_no,
            bidder,
            quantity = bid.quantity,
            face = bid.face,
            "Bid placed"
        );
        let line = format!("{} bids {bid}", self.name_of(bidder));
        self.log.push(line);

        Ok(BidPlaced {
            bidder,
            bid,
            next_player,
        })
    }

    /// Challenge the current bid. If the dice meet it the caller loses a die,
    /// otherwise the bidder does. The loser opens the next round.
    pub fn call(&mut self) -> Result<ChallengeOutcome, DomainError> {
        let (caller, bidder, bid) = self.challenge_context()?;
        let actual = count_matching(&self.players, bid.face);
        let bid_stood = actual >= bid.quantity;
        let loser = if bid_stood { caller } else { bidder };

        self.phase = RoundPhase::Resolved;
        let announce = format!("{} calls! Checking...", self.name_of(caller));
        let verdict = if bid_stood {
            format!("Bid was correct! {} loses a die!", self.name_of(loser))
        } else {
            format!("Bid was wrong! {} loses a die!", self.name_of(loser))
        };
        self.log.push(announce);
        self.log
            .push(format!("Actual count: {actual} {}", face_name(bid.face)));
        self.log.push(verdict);

        let eliminated = self.take_die(loser);
        let next_starter = self.settle_next_starter(loser);

        info!(
            round_no = self.round_no,
            caller,
            bidder,
            bid = %bid,
            actual,
            loser,
            "Call resolved"
        );

        Ok(ChallengeOutcome {
            kind: ChallengeKind::Call,
            caller,
            bidder,
            bid,
            actual,
            challenger_won: !bid_stood,
            loser: Some(loser),
            gainer: None,
            eliminated,
            next_starter,
            match_over: next_starter.is_none(),
        })
    }

    /// Claim the current bid is exact. Right: the caller regains a die and
    /// the bidder opens next. Wrong: the caller loses a die and opens next.
    pub fn exact_call(&mut self) -> Result<ChallengeOutcome, DomainError> {
        let (caller, bidder, bid) = self.challenge_context()?;
        let actual = count_matching(&self.players, bid.face);
        let exact = actual == bid.quantity;

        self.phase = RoundPhase::Resolved;
        let caller_name = self.name_of(caller).to_string();
        self.log
            .push(format!("{caller_name} calls Spot On! Checking..."));
        self.log
            .push(format!("Actual count: {actual} {}", face_name(bid.face)));

        let (loser, gainer, eliminated, preferred) = if exact {
            self.log.push(format!("Spot On! {caller_name} gains a die!"));
            let gained = self.players[caller].gain_die();
            (None, gained.then_some(caller), None, bidder)
        } else {
            self.log.push(format!("Wrong! {caller_name} loses a die!"));
            let eliminated = self.take_die(caller);
            (Some(caller), None, eliminated, caller)
        };
        let next_starter = self.settle_next_starter(preferred);

        info!(
            round_no = self.round_no,
            caller,
            bidder,
            bid = %bid,
            actual,
            exact,
            "Exact call resolved"
        );

        Ok(ChallengeOutcome {
            kind: ChallengeKind::ExactCall,
            caller,
            bidder,
            bid,
            actual,
            challenger_won: exact,
            loser,
            gainer,
            eliminated,
            next_starter,
            match_over: next_starter.is_none(),
        })
    }

    fn ensure_can_start(&self) -> Result<(), DomainError> {
        match self.phase {
            RoundPhase::MatchOver => Err(DomainError::validation(
                ValidationKind::MatchOver,
                "the match is over",
            )),
            RoundPhase::Active => Err(DomainError::validation(
                ValidationKind::RoundAlreadyActive,
                "the current round has not been resolved",
            )),
            RoundPhase::NotStarted | RoundPhase::Resolved => {
                if self.players[self.current_player].is_eliminated() {
                    return Err(DomainError::invariant(format!(
                        "round starter {} is eliminated",
                        self.current_player
                    )));
                }
                Ok(())
            }
        }
    }

    fn ensure_active(&self) -> Result<(), DomainError> {
        match self.phase {
            RoundPhase::Active => Ok(()),
            RoundPhase::MatchOver => Err(DomainError::validation(
                ValidationKind::MatchOver,
                "the match is over",
            )),
            RoundPhase::NotStarted | RoundPhase::Resolved => Err(DomainError::validation(
                ValidationKind::RoundNotActive,
                "no round in progress",
            )),
        }
    }

    /// (caller, bidder, bid) for a challenge, or why there is nothing to challenge.
    fn challenge_context(&self) -> Result<(Seat, Seat, Bid), DomainError> {
        self.ensure_active()?;
        let bid = self.current_bid.ok_or_else(|| {
            DomainError::validation(ValidationKind::NoActiveBid, "there is no bid to challenge")
        })?;
        let bidder = self
            .last_bidder
            .ok_or_else(|| DomainError::invariant("current bid without a bidder"))?;
        Ok((self.current_player, bidder, bid))
    }

    fn open_round(&mut self) -> RoundStarted {
        self.current_bid = None;
        self.last_bidder = None;
        self.phase = RoundPhase::Active;
        self.round_no += 1;

        let starter = self.current_player;
        let table_cap = self.table_cap();
        let line = format!(
            "New round started. {} goes first.",
            self.name_of(starter)
        );
        self.log.push(line);
        info!(round_no = self.round_no, starter, table_cap, "Round started");

        RoundStarted {
            round_no: self.round_no,
            starter,
            table_cap,
        }
    }

    /// Remove one die from `seat`; returns the seat if that eliminated it.
    fn take_die(&mut self, seat: Seat) -> Option<Seat> {
        let eliminated = self.players[seat].lose_die();
        if eliminated {
            let line = format!("{} is out of dice!", self.name_of(seat));
            self.log.push(line);
            info!(round_no = self.round_no, seat, "Player eliminated");
        }
        eliminated.then_some(seat)
    }

    /// Hand the next round to `preferred`, or the next live seat after it
    /// if it was just eliminated. Ends the match when one player remains.
    fn settle_next_starter(&mut self, preferred: Seat) -> Option<Seat> {
        if self.is_game_over() {
            self.phase = RoundPhase::MatchOver;
            if let Some(winner) = self.winner_seat() {
                self.current_player = winner;
                let line = format!("{} wins the match!", self.name_of(winner));
                self.log.push(line);
                info!(winner, rounds = self.round_no, "Match over");
            }
            return None;
        }

        let starter = if self.players[preferred].is_eliminated() {
            self.next_active_seat(preferred)?
        } else {
            preferred
        };
        self.current_player = starter;
        Some(starter)
    }
}
