//! Edge-triggered match transitions for orchestrators that poll.
//!
//! Take a [`MatchSnapshot`] before an operation and one after, and
//! [`derive_match_transitions`] reports what changed. The engine itself
//! never calls out to subscribers.

use serde::Serialize;

use crate::domain::state::{MatchState, RoundPhase, Seat};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchSnapshot {
    pub phase: RoundPhase,
    pub round_no: u32,
    /// Seat expected to act; `None` outside an active round.
    pub turn: Option<Seat>,
    pub dice_counts: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum MatchTransition {
    /// A new round was rolled.
    RoundStarted { round_no: u32 },
    /// The turn moved to a specific seat.
    TurnBecame { seat: Seat },
    /// A seat lost dice; `remaining` is its new count.
    DiceLost { seat: Seat, remaining: u8 },
    /// A seat regained a die.
    DieGained { seat: Seat, remaining: u8 },
    /// A seat dropped to zero dice.
    PlayerEliminated { seat: Seat },
    /// One player is left.
    MatchEnded { winner: Option<Seat> },
}

impl MatchState {
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            phase: self.phase,
            round_no: self.round_no,
            turn: self.round_active().then_some(self.current_player),
            dice_counts: self.players.iter().map(|p| p.dice_count()).collect(),
        }
    }
}

/// Derive transitions from before/after snapshots of the same match.
pub fn derive_match_transitions(
    before: &MatchSnapshot,
    after: &MatchSnapshot,
) -> Vec<MatchTransition> {
    let mut transitions = Vec::new();

    // 1. New round
    if after.round_no != before.round_no && after.phase == RoundPhase::Active {
        transitions.push(MatchTransition::RoundStarted {
            round_no: after.round_no,
        });
    }

    // 2. Turn change
    if let Some(seat) = after.turn {
        if before.turn != Some(seat) || after.round_no != before.round_no {
            transitions.push(MatchTransition::TurnBecame { seat });
        }
    }

    // 3. Dice changes, in seat order
    for (seat, (&was, &now)) in before
        .dice_counts
        .iter()
        .zip(after.dice_counts.iter())
        .enumerate()
    {
        if now < was {
            transitions.push(MatchTransition::DiceLost {
                seat,
                remaining: now,
            });
            if now == 0 {
                transitions.push(MatchTransition::PlayerEliminated { seat });
            }
        } else if now > was {
            transitions.push(MatchTransition::DieGained {
                seat,
                remaining: now,
            });
        }
    }

    // 4. Match end (!MatchOver -> MatchOver)
    if before.phase != RoundPhase::MatchOver && after.phase == RoundPhase::MatchOver {
        let mut live = after
            .dice_counts
            .iter()
            .enumerate()
            .filter(|(_, c)| **c > 0)
            .map(|(seat, _)| seat);
        let winner = live.next();
        transitions.push(MatchTransition::MatchEnded { winner });
    }

    transitions
}
