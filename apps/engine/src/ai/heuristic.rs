//! Heuristic: the profile-driven opponent.
//!
//! Reads only the table pressure and its own dice count, never its own faces,
//! so it plays the same whether it holds five sixes or five twos. The
//! personality lives entirely in the [`BehaviorProfile`].

use std::sync::Mutex;
use std::time::Duration;

use crate::ai::policy::decide;
use crate::ai::profile::BehaviorProfile;
use crate::ai::{Action, AiError, AiPlayer};
use crate::domain::player_view::MatchView;
use crate::domain::rng::{rng_from_seed, DiceRng};

pub struct Heuristic {
    profile: BehaviorProfile,
    rng: Mutex<Box<dyn DiceRng + Send>>,
}

impl Heuristic {
    pub const NAME: &'static str = "heuristic";
    pub const VERSION: &'static str = "1.0.0";

    /// Rival profile.
    pub fn new(seed: Option<u64>) -> Self {
        Self::with_profile(BehaviorProfile::rival(), seed)
    }

    pub fn with_profile(profile: BehaviorProfile, seed: Option<u64>) -> Self {
        Self {
            profile,
            rng: Mutex::new(rng_from_seed(seed)),
        }
    }

    pub fn profile(&self) -> &BehaviorProfile {
        &self.profile
    }
}

impl AiPlayer for Heuristic {
    fn choose_action(&self, view: &MatchView) -> Result<Action, AiError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;
        Ok(decide(view, &self.profile, &mut **rng))
    }

    fn think_delay(&self) -> Duration {
        match self.rng.lock() {
            Ok(mut rng) => self.profile.think_delay(&mut **rng),
            Err(_) => Duration::from_secs_f64(self.profile.think_time_min.max(0.0)),
        }
    }
}
