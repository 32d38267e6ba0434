//! In-memory match simulator for AI evaluation.
//!
//! Runs whole matches through the engine's public operations, so every AI
//! action is validated exactly as it would be in live play.

use dudo_engine::ai::{apply_action, Action, ActionOutcome, AiError, AiPlayer};
use dudo_engine::domain::{derive_round_seed, ChallengeKind, Seat};
use dudo_engine::{Bid, DomainError, MatchConfig, MatchState, RoundPhase, SeededRng};
use tracing::debug;

/// One resolved round.
#[derive(Debug, Clone)]
pub struct RoundRecord {
    pub round_no: u32,
    pub starter: Seat,
    pub table_cap: u32,
    /// Every accepted bid, in order.
    pub bids: Vec<(Seat, Bid)>,
    pub challenge: ChallengeKind,
    pub caller: Seat,
    pub bidder: Seat,
    pub final_bid: Bid,
    pub actual: u32,
    pub challenger_won: bool,
    pub loser: Option<Seat>,
    pub gainer: Option<Seat>,
    pub eliminated: Option<Seat>,
}

/// Result of simulating a complete match.
#[derive(Debug, Clone)]
pub struct MatchResult {
    pub winner: Option<Seat>,
    pub rounds: Vec<RoundRecord>,
    /// Dice per seat at the end.
    pub final_dice: Vec<u8>,
}

impl MatchResult {
    pub fn rounds_played(&self) -> u32 {
        self.rounds.len() as u32
    }

    /// Round in which `seat` lost its last die.
    pub fn eliminated_in(&self, seat: Seat) -> Option<u32> {
        self.rounds
            .iter()
            .find(|r| r.eliminated == Some(seat))
            .map(|r| r.round_no)
    }
}

/// Runs one match. Dice for round `n` come from `derive_round_seed(match_seed, n)`.
pub struct Simulator {
    state: MatchState,
    match_seed: u64,
    max_rounds: u32,
}

impl Simulator {
    pub fn new(config: &MatchConfig, match_seed: u64, max_rounds: u32) -> Result<Self, SimulatorError> {
        let state = MatchState::new(config).map_err(SimulatorError::Domain)?;
        Ok(Self {
            state,
            match_seed,
            max_rounds,
        })
    }

    /// Play until one seat is left. `ais[seat]` acts for that seat.
    pub fn simulate_match(mut self, ais: &[Box<dyn AiPlayer>]) -> Result<MatchResult, SimulatorError> {
        if ais.len() != self.state.players().len() {
            return Err(SimulatorError::InvalidState(format!(
                "{} AIs for {} seats",
                ais.len(),
                self.state.players().len()
            )));
        }

        let mut rounds = Vec::new();
        while self.state.phase() != RoundPhase::MatchOver {
            if rounds.len() as u32 >= self.max_rounds {
                return Err(SimulatorError::RoundLimit(self.max_rounds));
            }
            rounds.push(self.play_round(ais)?);
        }

        Ok(MatchResult {
            winner: self.state.winner_seat(),
            rounds,
            final_dice: self
                .state
                .players()
                .iter()
                .map(|p| p.dice_count())
                .collect(),
        })
    }

    fn play_round(&mut self, ais: &[Box<dyn AiPlayer>]) -> Result<RoundRecord, SimulatorError> {
        let round_no = self.state.round_no() + 1;
        let mut dice = SeededRng::new(derive_round_seed(self.match_seed, round_no));
        let started = self
            .state
            .start_round(&mut dice)
            .map_err(SimulatorError::Domain)?;

        let mut bids = Vec::new();
        loop {
            let view = self.state.current_view();
            let seat = view.seat;
            let action = ais[seat]
                .choose_action(&view)
                .map_err(|e| SimulatorError::Ai(seat, e))?;

            match apply_action(&mut self.state, action)
                .map_err(|e| SimulatorError::Rejected(seat, action, e))?
            {
                ActionOutcome::Bid(placed) => bids.push((placed.bidder, placed.bid)),
                ActionOutcome::Challenge(out) => {
                    debug!(
                        round_no,
                        bids = bids.len(),
                        caller = out.caller,
                        loser = ?out.loser,
                        "Round resolved"
                    );
                    return Ok(RoundRecord {
                        round_no: started.round_no,
                        starter: started.starter,
                        table_cap: started.table_cap,
                        bids,
                        challenge: out.kind,
                        caller: out.caller,
                        bidder: out.bidder,
                        final_bid: out.bid,
                        actual: out.actual,
                        challenger_won: out.challenger_won,
                        loser: out.loser,
                        gainer: out.gainer,
                        eliminated: out.eliminated,
                    });
                }
            }
        }
    }
}

#[derive(Debug)]
pub enum SimulatorError {
    /// AI returned an error
    Ai(Seat, AiError),
    /// The engine refused an AI's action
    Rejected(Seat, Action, DomainError),
    /// Match setup failed
    Domain(DomainError),
    /// The match did not finish within the round limit
    RoundLimit(u32),
    /// Invalid simulator setup
    InvalidState(String),
}

impl std::fmt::Display for SimulatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimulatorError::Ai(seat, err) => write!(f, "AI error (seat {seat}): {err}"),
            SimulatorError::Rejected(seat, action, err) => {
                write!(f, "seat {seat} tried to {action}: {err}")
            }
            SimulatorError::Domain(err) => write!(f, "Domain error: {err}"),
            SimulatorError::RoundLimit(max) => write!(f, "no winner after {max} rounds"),
            SimulatorError::InvalidState(msg) => write!(f, "Invalid state: {msg}"),
        }
    }
}

impl std::error::Error for SimulatorError {}
