use std::env;

use serde::{Deserialize, Serialize};

use crate::domain::rng::{rng_from_seed, DiceRng};
use crate::domain::rules::{DEFAULT_STARTING_DICE, MIN_PLAYERS};
use crate::errors::domain::{DomainError, ValidationKind};

/// Table setup for a single match.
///
/// ```json
/// {"players": ["You", "Rival"], "starting_dice": 5, "seed": 12345}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Seat names, in turn order. Seat 0 opens the first round.
    pub players: Vec<String>,
    /// Dice per player at the start, also each player's ceiling.
    pub starting_dice: u8,
    /// Match seed for replayable dice; `None` means OS entropy. See
    /// [`MatchConfig::dice_rng`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            players: vec!["You".to_string(), "AI".to_string()],
            starting_dice: DEFAULT_STARTING_DICE,
            seed: None,
        }
    }
}

impl MatchConfig {
    pub fn new(players: Vec<String>, starting_dice: u8) -> Self {
        Self {
            players,
            starting_dice,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Dice source for `start_round`: seeded from `seed`, or OS entropy.
    pub fn dice_rng(&self) -> Box<dyn DiceRng + Send> {
        rng_from_seed(self.seed)
    }

    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let config: Self = serde_json::from_str(json).map_err(|e| {
            DomainError::validation(ValidationKind::InvalidConfig, format!("match config: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read `DUDO_PLAYERS` (comma separated), `DUDO_STARTING_DICE` and
    /// `DUDO_SEED`, falling back to defaults for anything unset.
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// [`MatchConfig::from_env`] against an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, DomainError> {
        let mut config = Self::default();

        if let Some(players) = lookup("DUDO_PLAYERS") {
            config.players = players
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(dice) = lookup("DUDO_STARTING_DICE") {
            config.starting_dice = dice.trim().parse().map_err(|_| {
                DomainError::validation(
                    ValidationKind::InvalidConfig,
                    format!("DUDO_STARTING_DICE must be a small positive integer, got '{dice}'"),
                )
            })?;
        }
        if let Some(seed) = lookup("DUDO_SEED") {
            config.seed = Some(seed.trim().parse().map_err(|_| {
                DomainError::validation(
                    ValidationKind::InvalidConfig,
                    format!("DUDO_SEED must be an unsigned integer, got '{seed}'"),
                )
            })?);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.players.len() < MIN_PLAYERS {
            return Err(DomainError::validation(
                ValidationKind::InvalidPlayers,
                format!(
                    "a match needs at least {MIN_PLAYERS} players, got {}",
                    self.players.len()
                ),
            ));
        }
        if self.players.iter().any(|name| name.trim().is_empty()) {
            return Err(DomainError::validation(
                ValidationKind::InvalidPlayers,
                "player names must not be blank",
            ));
        }
        if self.starting_dice == 0 {
            return Err(DomainError::validation(
                ValidationKind::InvalidConfig,
                "players must start with at least one die",
            ));
        }
        Ok(())
    }
}
