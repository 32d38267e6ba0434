//! Shared types for the simulator.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use dudo_engine::ai::{by_name, Heuristic};
use dudo_engine::{AiConfig, BehaviorProfile};

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Jsonl,
    Json,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum MetricsLevel {
    Basic,
    Detailed,
}

/// One seat of the simulated table: a registered AI name, optionally with a
/// behavior preset (`heuristic:reckless`). Only the heuristic AI takes one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatSpec {
    pub ai: &'static str,
    pub preset: Option<String>,
}

impl SeatSpec {
    /// AI config for this seat with the given per-seat seed.
    pub fn ai_config(&self, seed: u64) -> AiConfig {
        let config = AiConfig::with_seed(seed);
        match &self.preset {
            Some(preset) => config.with_preset(preset.clone()),
            None => config,
        }
    }
}

impl fmt::Display for SeatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.preset {
            Some(preset) => write!(f, "{}:{}", self.ai, preset),
            None => write!(f, "{}", self.ai),
        }
    }
}

impl FromStr for SeatSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, preset) = match s.trim().split_once(':') {
            Some((name, preset)) => (name.trim(), Some(preset.trim().to_ascii_lowercase())),
            None => (s.trim(), None),
        };
        let factory = by_name(name).ok_or_else(|| format!("Unknown AI type: {name}"))?;
        if let Some(preset) = &preset {
            if factory.name != Heuristic::NAME {
                return Err(format!(
                    "AI type '{}' does not take a preset (only {} does)",
                    factory.name,
                    Heuristic::NAME
                ));
            }
            if BehaviorProfile::preset(preset).is_none() {
                return Err(format!(
                    "Unknown preset '{preset}' (expected one of {})",
                    BehaviorProfile::PRESETS.join(", ")
                ));
            }
        }
        Ok(Self {
            ai: factory.name,
            preset,
        })
    }
}

/// Parse a comma-separated seat list.
pub fn parse_seats(list: &str) -> Result<Vec<SeatSpec>, String> {
    let seats = list
        .split(',')
        .filter(|s| !s.trim().is_empty())
        .map(SeatSpec::from_str)
        .collect::<Result<Vec<_>, _>>()?;
    if seats.len() < 2 {
        return Err(format!("need at least two seats, got {}", seats.len()));
    }
    Ok(seats)
}
