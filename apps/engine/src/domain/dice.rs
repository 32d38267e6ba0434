//! Dice and player model.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::rng::DiceRng;
use crate::errors::domain::{DomainError, ValidationKind};

/// A die face, 1..=6.
pub type Face = u8;

pub const MIN_FACE: Face = 1;
pub const MAX_FACE: Face = 6;
/// Aces: bid target in their own right and a match for every other face.
pub const WILDCARD: Face = 1;
/// Smallest face a round may open on.
pub const LOWEST_NATURAL: Face = 2;

#[inline]
pub fn is_wildcard(face: Face) -> bool {
    face == WILDCARD
}

#[inline]
pub fn is_valid_face(face: Face) -> bool {
    (MIN_FACE..=MAX_FACE).contains(&face)
}

/// Display name used in log lines ("Aces" for the wildcard).
pub fn face_name(face: Face) -> FaceName {
    FaceName(face)
}

#[derive(Debug, Clone, Copy)]
pub struct FaceName(Face);

impl fmt::Display for FaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if is_wildcard(self.0) {
            write!(f, "Aces")
        } else {
            write!(f, "{}s", self.0)
        }
    }
}

/// One seat at the table.
///
/// Elimination is derived from `dice_count == 0`, so the two can never
/// disagree. The concealed dice are only meaningful between a roll and the
/// challenge that ends the round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    dice: Vec<Face>,
    dice_count: u8,
    max_dice: u8,
}

impl Player {
    /// New player holding `starting_dice`, which is also their ceiling.
    pub fn new(name: impl Into<String>, starting_dice: u8) -> Self {
        debug_assert!(starting_dice > 0, "players start with at least one die");
        Self {
            name: name.into(),
            dice: Vec::with_capacity(starting_dice as usize),
            dice_count: starting_dice,
            max_dice: starting_dice,
        }
    }

    /// Player with a known concealed hand, for replays and scenarios.
    ///
    /// `dice.len()` becomes the dice count; `max_dice` must be at least that.
    pub fn with_dice(
        name: impl Into<String>,
        max_dice: u8,
        dice: Vec<Face>,
    ) -> Result<Self, DomainError> {
        if let Some(bad) = dice.iter().find(|&&d| !is_valid_face(d)) {
            return Err(DomainError::validation(
                ValidationKind::InvalidDie,
                format!("die face {bad} outside {MIN_FACE}..={MAX_FACE}"),
            ));
        }
        if max_dice == 0 || dice.len() > max_dice as usize {
            return Err(DomainError::validation(
                ValidationKind::InvalidDie,
                format!("{} dice exceed the ceiling of {max_dice}", dice.len()),
            ));
        }
        Ok(Self {
            name: name.into(),
            dice_count: dice.len() as u8,
            dice,
            max_dice,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Concealed dice from the latest roll.
    pub fn dice(&self) -> &[Face] {
        &self.dice
    }

    pub fn dice_count(&self) -> u8 {
        self.dice_count
    }

    pub fn max_dice(&self) -> u8 {
        self.max_dice
    }

    pub fn is_eliminated(&self) -> bool {
        self.dice_count == 0
    }

    /// Replace the hand with `dice_count` fresh dice.
    pub fn roll(&mut self, rng: &mut dyn DiceRng) {
        self.dice.clear();
        for _ in 0..self.dice_count {
            self.dice.push(rng.roll_die());
        }
    }

    /// Install a hand rolled elsewhere; it must hold exactly `dice_count` dice.
    pub(crate) fn set_hand(&mut self, dice: Vec<Face>) -> Result<(), DomainError> {
        if let Some(bad) = dice.iter().find(|&&d| !is_valid_face(d)) {
            return Err(DomainError::validation(
                ValidationKind::InvalidDie,
                format!("die face {bad} outside {MIN_FACE}..={MAX_FACE}"),
            ));
        }
        if dice.len() != self.dice_count as usize {
            return Err(DomainError::validation(
                ValidationKind::InvalidDie,
                format!(
                    "{} holds {} dice, hand has {}",
                    self.name,
                    self.dice_count,
                    dice.len()
                ),
            ));
        }
        self.dice = dice;
        Ok(())
    }

    /// Lose one die. Returns true if this eliminated the player.
    pub fn lose_die(&mut self) -> bool {
        debug_assert!(self.dice_count > 0, "eliminated player cannot lose a die");
        self.dice_count = self.dice_count.saturating_sub(1);
        if self.dice_count == 0 {
            self.dice.clear();
            return true;
        }
        false
    }

    /// Regain one die up to the ceiling. Returns true if a die was added.
    pub fn gain_die(&mut self) -> bool {
        if self.is_eliminated() || self.dice_count >= self.max_dice {
            return false;
        }
        self.dice_count += 1;
        true
    }
}
