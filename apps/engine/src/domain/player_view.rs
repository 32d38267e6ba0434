//! What a single seat is allowed to see.
//!
//! AI players decide from a [`MatchView`], never from the full
//! [`MatchState`]: opponents' dice stay concealed.

use serde::{Deserialize, Serialize};

use crate::domain::bidding::Bid;
use crate::domain::dice::Face;
use crate::domain::state::{MatchState, Seat};
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchView {
    /// Seat this view belongs to.
    pub seat: Seat,
    /// This seat's concealed dice.
    pub own_dice: Vec<Face>,
    /// Dice held per seat (0 = eliminated), public information.
    pub dice_counts: Vec<u8>,
    pub current_bid: Option<Bid>,
    pub last_bidder: Option<Seat>,
    pub round_no: u32,
}

impl MatchView {
    /// Dice in play, never less than one.
    pub fn table_cap(&self) -> u32 {
        self.dice_counts
            .iter()
            .map(|&c| c as u32)
            .sum::<u32>()
            .max(1)
    }

    pub fn own_dice_count(&self) -> u8 {
        self.dice_counts.get(self.seat).copied().unwrap_or(0)
    }

    /// Dice hidden from this seat.
    pub fn unseen_dice(&self) -> u32 {
        self.table_cap()
            .saturating_sub(self.own_dice_count() as u32)
    }
}

impl MatchState {
    /// View for `seat`.
    pub fn view_for(&self, seat: Seat) -> Result<MatchView, DomainError> {
        if seat >= self.players.len() {
            return Err(DomainError::invariant(format!(
                "no seat {seat} at this table"
            )));
        }
        Ok(self.build_view(seat))
    }

    /// View for the player whose turn it is.
    pub fn current_view(&self) -> MatchView {
        self.build_view(self.current_player)
    }

    fn build_view(&self, seat: Seat) -> MatchView {
        MatchView {
            seat,
            own_dice: self.players[seat].dice().to_vec(),
            dice_counts: self.players.iter().map(|p| p.dice_count()).collect(),
            current_bid: self.current_bid,
            last_bidder: self.last_bidder,
            round_no: self.round_no,
        }
    }
}
