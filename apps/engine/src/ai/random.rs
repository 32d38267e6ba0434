//! Random AI player - makes random legal moves.
//!
//! Baseline for conformance tests and the simulator: it picks uniformly among
//! every legal raise and, when a bid stands, the two challenges.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{AiError, AiPlayer};
use crate::ai::Action;
use crate::domain::bidding::legal_raises;
use crate::domain::player_view::MatchView;

/// AI that makes random legal moves.
///
/// Seeded players are deterministic; unseeded ones draw from OS entropy.
pub struct RandomPlayer {
    /// `AiPlayer` methods take `&self`, the RNG needs `&mut`.
    rng: Mutex<StdRng>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "random";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl AiPlayer for RandomPlayer {
    fn choose_action(&self, view: &MatchView) -> Result<Action, AiError> {
        let mut options: Vec<Action> = legal_raises(view.current_bid, view.table_cap())
            .into_iter()
            .map(Action::Raise)
            .collect();
        if view.current_bid.is_some() {
            options.push(Action::Call);
            options.push(Action::ExactCall);
        }

        if options.is_empty() {
            return Err(AiError::InvalidMove("No legal actions available".into()));
        }

        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;

        options
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| AiError::Internal("Failed to choose random action".into()))
    }
}
