//! Classic opponent: flat call/exact-call odds and a biased one-step raise.
//!
//! Ignores the table pressure entirely, so it is weaker and more erratic
//! than [`Heuristic`](crate::ai::Heuristic). Every raise it proposes is
//! checked against the legality rules before it is returned.

use std::sync::Mutex;

use tracing::trace;

use crate::ai::profile::ClassicProfile;
use crate::ai::{Action, AiError, AiPlayer};
use crate::domain::bidding::{is_legal, min_natural_quantity, min_wildcard_quantity, Bid};
use crate::domain::dice::{Face, LOWEST_NATURAL, MAX_FACE, WILDCARD};
use crate::domain::player_view::MatchView;
use crate::domain::rng::{rng_from_seed, DiceRng};

/// Random natural face, 2..=6.
fn natural_face(rng: &mut dyn DiceRng) -> Face {
    rng.next_int(LOWEST_NATURAL as u32, MAX_FACE as u32 + 1) as Face
}

/// Choose an action the classic way.
pub fn decide_classic(view: &MatchView, profile: &ClassicProfile, rng: &mut dyn DiceRng) -> Action {
    let cap = view.table_cap();

    let Some(bid) = view.current_bid else {
        let quantity = rng.next_int(1, 4).clamp(1, cap);
        let face = natural_face(rng);
        return Action::Raise(Bid::new(quantity, face));
    };

    if bid.quantity >= cap && bid.face >= MAX_FACE {
        return Action::Call;
    }

    let r = rng.next_unit();
    if r < profile.call_base {
        return Action::Call;
    }
    if r < profile.call_base + profile.spot_on_base {
        return Action::ExactCall;
    }

    match biased_raise(bid, cap, profile.raise_quantity_bias, rng) {
        Some(raise) => Action::Raise(raise),
        None => Action::Call,
    }
}

/// First legal candidate from the preference list, or `None`.
fn biased_raise(bid: Bid, cap: u32, quantity_bias: f64, rng: &mut dyn DiceRng) -> Option<Bid> {
    if bid.quantity >= cap {
        let face_up = (bid.face < MAX_FACE).then(|| Bid::new(bid.quantity, bid.face + 1))?;
        return is_legal(Some(bid), face_up, cap).then_some(face_up);
    }

    let quantity_up = (bid.quantity < cap).then(|| Bid::new(bid.quantity + 1, bid.face));
    let face_up = (bid.face < MAX_FACE).then(|| Bid::new(bid.quantity, bid.face + 1));
    let to_aces = (!bid.is_wildcard())
        .then(|| Bid::new(min_wildcard_quantity(bid.quantity).min(cap), WILDCARD));
    let from_aces = bid.is_wildcard().then(|| {
        let quantity = min_natural_quantity(bid.quantity).min(cap);
        Bid::new(quantity, natural_face(rng))
    });

    let order = if rng.next_unit() < quantity_bias {
        [quantity_up, face_up, to_aces, from_aces]
    } else {
        [face_up, quantity_up, to_aces, from_aces]
    };

    let choice = order
        .into_iter()
        .flatten()
        .find(|&candidate| is_legal(Some(bid), candidate, cap));
    trace!(?choice, "classic raise");
    choice
}

/// [`AiPlayer`] around [`decide_classic`].
pub struct Classic {
    profile: ClassicProfile,
    rng: Mutex<Box<dyn DiceRng + Send>>,
}

impl Classic {
    pub const NAME: &'static str = "classic";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(seed: Option<u64>) -> Self {
        Self::with_profile(ClassicProfile::default(), seed)
    }

    pub fn with_profile(profile: ClassicProfile, seed: Option<u64>) -> Self {
        Self {
            profile,
            rng: Mutex::new(rng_from_seed(seed)),
        }
    }

    pub fn profile(&self) -> &ClassicProfile {
        &self.profile
    }
}

impl AiPlayer for Classic {
    fn choose_action(&self, view: &MatchView) -> Result<Action, AiError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;
        Ok(decide_classic(view, &self.profile, &mut **rng))
    }
}
