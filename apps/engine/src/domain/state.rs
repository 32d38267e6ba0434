use serde::{Deserialize, Serialize};

use crate::config::MatchConfig;
use crate::domain::bidding::Bid;
use crate::domain::dice::Player;
use crate::domain::event_log::EventLog;
use crate::domain::rules::{self, MIN_PLAYERS};
use crate::errors::domain::{DomainError, ValidationKind};

/// Index into the fixed, index-stable player list.
pub type Seat = usize;

/// Where the match is in the round cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Match created, first round not rolled yet.
    NotStarted,
    /// Dice rolled, bids and challenges accepted.
    Active,
    /// A challenge settled the round; the next one may start.
    Resolved,
    /// At most one player holds dice.
    MatchOver,
}

/// Entire match container. The orchestrator owns it; every mutation goes
/// through the round operations in `round_flow`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchState {
    pub(crate) players: Vec<Player>,
    /// Player whose turn it is (or who opens the next round).
    pub(crate) current_player: Seat,
    /// Bid on the table; `None` until the round's first bid.
    pub(crate) current_bid: Option<Bid>,
    /// Seat that placed `current_bid`; set iff `current_bid` is.
    pub(crate) last_bidder: Option<Seat>,
    pub(crate) phase: RoundPhase,
    /// 1-based number of the current or most recent round; 0 before the first.
    pub(crate) round_no: u32,
    pub(crate) log: EventLog,
}

impl MatchState {
    /// Fresh match from a validated config. Seat 0 opens the first round.
    pub fn new(config: &MatchConfig) -> Result<Self, DomainError> {
        config.validate()?;
        let players = config
            .players
            .iter()
            .map(|name| Player::new(name.clone(), config.starting_dice))
            .collect();
        Self::from_players(players)
    }

    /// Match over an explicit roster, e.g. a mid-match replay.
    ///
    /// The first live seat opens. A roster with one or no live players is
    /// already over.
    pub fn from_players(players: Vec<Player>) -> Result<Self, DomainError> {
        if players.len() < MIN_PLAYERS {
            return Err(DomainError::validation(
                ValidationKind::InvalidPlayers,
                format!(
                    "a match needs at least {MIN_PLAYERS} players, got {}",
                    players.len()
                ),
            ));
        }
        let current_player = players
            .iter()
            .position(|p| !p.is_eliminated())
            .unwrap_or(0);
        let mut state = Self {
            players,
            current_player,
            current_bid: None,
            last_bidder: None,
            phase: RoundPhase::NotStarted,
            round_no: 0,
            log: EventLog::new(),
        };
        if state.is_game_over() {
            state.phase = RoundPhase::MatchOver;
        }
        Ok(state)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, seat: Seat) -> Option<&Player> {
        self.players.get(seat)
    }

    pub fn current_player(&self) -> Seat {
        self.current_player
    }

    pub fn current_bid(&self) -> Option<Bid> {
        self.current_bid
    }

    pub fn last_bidder(&self) -> Option<Seat> {
        self.last_bidder
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn round_active(&self) -> bool {
        self.phase == RoundPhase::Active
    }

    pub fn round_no(&self) -> u32 {
        self.round_no
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// Dice still in play.
    pub fn table_cap(&self) -> u32 {
        rules::table_cap(&self.players)
    }

    /// Seats still holding dice, in seat order.
    pub fn active_seats(&self) -> impl Iterator<Item = Seat> + '_ {
        self.players
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_eliminated())
            .map(|(seat, _)| seat)
    }

    pub fn is_game_over(&self) -> bool {
        self.active_seats().count() <= 1
    }

    /// Sole survivor once the match is over.
    pub fn winner_seat(&self) -> Option<Seat> {
        if !self.is_game_over() {
            return None;
        }
        self.active_seats().next()
    }

    pub fn winner(&self) -> Option<&Player> {
        self.winner_seat().map(|seat| &self.players[seat])
    }

    /// First live seat strictly after `from`, wrapping. May return `from`
    /// itself when it is the only live seat.
    pub fn next_active_seat(&self, from: Seat) -> Option<Seat> {
        let n = self.players.len();
        (1..=n)
            .map(|step| (from + step) % n)
            .find(|&seat| !self.players[seat].is_eliminated())
    }

    pub(crate) fn name_of(&self, seat: Seat) -> &str {
        self.players.get(seat).map(Player::name).unwrap_or("?")
    }
}
