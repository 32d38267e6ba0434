//! Tuning knobs for the computer opponents.
//!
//! Profiles are plain data: the policies read them and never mutate them.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::rng::DiceRng;
use crate::errors::domain::{DomainError, ValidationKind};

/// Personality of a [`decide`](crate::ai::decide) opponent.
///
/// ```json
/// {"aggression": 0.7, "call_pressure_ratio": 0.8}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorProfile {
    pub display_name: String,
    /// Seconds, lower bound of the presentation delay.
    pub think_time_min: f64,
    /// Seconds, upper bound of the presentation delay.
    pub think_time_max: f64,
    /// Higher raises more and calls less.
    pub aggression: f64,
    /// Per-draw chance of skipping one step further up the raise chain.
    pub raise_bias: f64,
    /// Chance of one more overreaching step.
    pub bluff_chance: f64,
    /// Chance of an exact call when the bid looks plausible.
    pub spot_on_chance: f64,
    /// Bid quantity over table cap at or above which the AI always calls.
    pub call_pressure_ratio: f64,
    /// Fraction of aggression removed when short on dice (0 = no effect).
    pub low_dice_nerf: f64,
    /// Own dice count at or below which the nerf applies.
    pub low_dice_threshold: u8,
}

impl Default for BehaviorProfile {
    fn default() -> Self {
        Self::rival()
    }
}

impl BehaviorProfile {
    pub const PRESETS: [&'static str; 3] = ["rival", "cautious", "reckless"];

    /// The stock opponent.
    pub fn rival() -> Self {
        Self {
            display_name: "Rival".to_string(),
            think_time_min: 0.6,
            think_time_max: 1.4,
            aggression: 0.55,
            raise_bias: 0.40,
            bluff_chance: 0.10,
            spot_on_chance: 0.05,
            call_pressure_ratio: 0.65,
            low_dice_nerf: 0.35,
            low_dice_threshold: 2,
        }
    }

    /// Calls early, rarely skips ahead.
    pub fn cautious() -> Self {
        Self {
            display_name: "Cautious".to_string(),
            think_time_min: 0.9,
            think_time_max: 1.8,
            aggression: 0.35,
            raise_bias: 0.20,
            bluff_chance: 0.05,
            spot_on_chance: 0.03,
            call_pressure_ratio: 0.50,
            low_dice_nerf: 0.50,
            low_dice_threshold: 2,
        }
    }

    /// Pushes bids high and bluffs often.
    pub fn reckless() -> Self {
        Self {
            display_name: "Reckless".to_string(),
            think_time_min: 0.3,
            think_time_max: 0.9,
            aggression: 0.80,
            raise_bias: 0.60,
            bluff_chance: 0.25,
            spot_on_chance: 0.08,
            call_pressure_ratio: 0.90,
            low_dice_nerf: 0.15,
            low_dice_threshold: 1,
        }
    }

    pub fn preset(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "rival" => Some(Self::rival()),
            "cautious" => Some(Self::cautious()),
            "reckless" => Some(Self::reckless()),
            _ => None,
        }
    }

    /// Parse and validate a JSON profile; missing fields take the rival's values.
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let profile: Self = serde_json::from_str(json).map_err(|e| {
            DomainError::validation(ValidationKind::InvalidProfile, format!("profile: {e}"))
        })?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let unit_fields = [
            ("aggression", self.aggression),
            ("raise_bias", self.raise_bias),
            ("bluff_chance", self.bluff_chance),
            ("spot_on_chance", self.spot_on_chance),
            ("low_dice_nerf", self.low_dice_nerf),
        ];
        for (field, value) in unit_fields {
            check_range(field, value, 0.0, 1.0)?;
        }
        check_range("call_pressure_ratio", self.call_pressure_ratio, 0.2, 1.2)?;
        check_range("think_time_min", self.think_time_min, 0.0, MAX_THINK_TIME_SECS)?;
        check_range(
            "think_time_max",
            self.think_time_max,
            self.think_time_min,
            MAX_THINK_TIME_SECS,
        )?;
        if self.low_dice_threshold == 0 {
            return Err(DomainError::validation(
                ValidationKind::InvalidProfile,
                "low_dice_threshold must be at least 1",
            ));
        }
        Ok(())
    }

    /// Presentation delay, uniformly between the think-time bounds.
    pub fn think_delay(&self, rng: &mut dyn DiceRng) -> Duration {
        let t = rng.next_unit();
        let secs = self.think_time_min + (self.think_time_max - self.think_time_min) * t;
        // Fields are public, so an unvalidated profile can still get here.
        Duration::try_from_secs_f64(secs.clamp(0.0, MAX_THINK_TIME_SECS)).unwrap_or(Duration::ZERO)
    }
}

/// Upper bound for either think-time bound, in seconds.
pub const MAX_THINK_TIME_SECS: f64 = 60.0;

fn check_range(field: &str, value: f64, min: f64, max: f64) -> Result<(), DomainError> {
    if value.is_nan() || value < min || value > max {
        return Err(DomainError::validation(
            ValidationKind::InvalidProfile,
            format!("{field} = {value} is outside [{min}, {max}]"),
        ));
    }
    Ok(())
}

/// Knobs of the simpler classic opponent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassicProfile {
    /// Chance of calling outright.
    pub call_base: f64,
    /// Chance of an exact call, drawn after `call_base` misses.
    pub spot_on_base: f64,
    /// Chance of preferring a quantity raise over a face raise.
    pub raise_quantity_bias: f64,
}

impl Default for ClassicProfile {
    fn default() -> Self {
        Self {
            call_base: 0.15,
            spot_on_base: 0.10,
            raise_quantity_bias: 0.60,
        }
    }
}

impl ClassicProfile {
    pub fn validate(&self) -> Result<(), DomainError> {
        check_range("call_base", self.call_base, 0.0, 1.0)?;
        check_range("spot_on_base", self.spot_on_base, 0.0, 1.0)?;
        check_range("raise_quantity_bias", self.raise_quantity_bias, 0.0, 1.0)?;
        if self.call_base + self.spot_on_base > 1.0 {
            return Err(DomainError::validation(
                ValidationKind::InvalidProfile,
                "call_base + spot_on_base must not exceed 1",
            ));
        }
        Ok(())
    }
}
