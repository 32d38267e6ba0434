//! How to register your AI
//!
//! 1) Implement `AiPlayer` for your type in its module.
//! 2) Add an `AiFactory` entry to the static list with a stable lowercase `name`.
//! 3) Keep ordering stable; constructors must not touch global state.
//! 4) Same seed in the `AiConfig` ⇒ same decisions.

use crate::ai::config::AiConfig;
use crate::ai::{AiPlayer, Classic, Heuristic, RandomPlayer};
use crate::errors::domain::DomainError;

/// Factory definition for constructing AI implementations.
pub struct AiFactory {
    pub name: &'static str,
    pub version: &'static str,
    pub make: fn(config: &AiConfig) -> Result<Box<dyn AiPlayer>, DomainError>,
}

static AI_FACTORIES: &[AiFactory] = &[
    AiFactory {
        name: Heuristic::NAME,
        version: Heuristic::VERSION,
        make: make_heuristic,
    },
    AiFactory {
        name: Classic::NAME,
        version: Classic::VERSION,
        make: make_classic,
    },
    AiFactory {
        name: RandomPlayer::NAME,
        version: RandomPlayer::VERSION,
        make: make_random_player,
    },
];

/// Returns the statically registered AI factories.
pub fn registered_ais() -> &'static [AiFactory] {
    AI_FACTORIES
}

/// Finds a registered AI factory by name, ignoring ASCII case.
pub fn by_name(name: &str) -> Option<&'static AiFactory> {
    registered_ais()
        .iter()
        .find(|factory| factory.name.eq_ignore_ascii_case(name))
}

fn make_heuristic(config: &AiConfig) -> Result<Box<dyn AiPlayer>, DomainError> {
    let profile = config.behavior_profile()?;
    Ok(Box::new(Heuristic::with_profile(profile, config.seed())))
}

fn make_classic(config: &AiConfig) -> Result<Box<dyn AiPlayer>, DomainError> {
    let profile = config.classic_profile()?;
    Ok(Box::new(Classic::with_profile(profile, config.seed())))
}

fn make_random_player(config: &AiConfig) -> Result<Box<dyn AiPlayer>, DomainError> {
    Ok(Box::new(RandomPlayer::new(config.seed())))
}
