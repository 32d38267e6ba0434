//! Profile-driven decision policy.
//!
//! Pure apart from the injected RNG: the same view, profile and RNG stream
//! always produce the same action. Draw order is fixed (exact-call roll,
//! raise roll, then three step rolls) so seeded replays stay stable.

use tracing::trace;

use crate::ai::profile::BehaviorProfile;
use crate::ai::Action;
use crate::domain::bidding::Bid;
use crate::domain::dice::{MAX_FACE, MIN_FACE};
use crate::domain::player_view::MatchView;
use crate::domain::raise::{next_minimal_raise, step_raises};
use crate::domain::rng::DiceRng;

/// Pressure window in which an exact call is considered.
const SPOT_ON_PRESSURE: (f64, f64) = (0.3, 0.6);

fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Aggression after the low-dice nerf.
pub fn effective_aggression(profile: &BehaviorProfile, own_dice: u8) -> f64 {
    if own_dice <= profile.low_dice_threshold {
        clamp01(profile.aggression * (1.0 - profile.low_dice_nerf))
    } else {
        profile.aggression
    }
}

/// Choose an action for `view.seat`.
pub fn decide(view: &MatchView, profile: &BehaviorProfile, rng: &mut dyn DiceRng) -> Action {
    let cap = view.table_cap();

    let Some(bid) = view.current_bid else {
        return match next_minimal_raise(None, cap) {
            Some(open) => Action::Raise(open),
            None => Action::Call,
        };
    };

    let pressure = bid.quantity as f64 / cap as f64;
    let aggression = effective_aggression(profile, view.own_dice_count());

    let spot_roll = rng.next_unit();
    if spot_roll < profile.spot_on_chance
        && pressure > SPOT_ON_PRESSURE.0
        && pressure < SPOT_ON_PRESSURE.1
    {
        trace!(seat = view.seat, pressure, "exact call");
        return Action::ExactCall;
    }

    let raise_roll = rng.next_unit();
    let too_high = pressure >= profile.call_pressure_ratio;
    if raise_roll >= aggression || too_high {
        trace!(seat = view.seat, pressure, aggression, too_high, "call");
        return Action::Call;
    }

    let Some(minimal) = next_minimal_raise(Some(bid), cap) else {
        return Action::Call;
    };

    let mut extra_steps = 0;
    if rng.next_unit() < profile.raise_bias {
        extra_steps += 1;
    }
    if rng.next_unit() < profile.raise_bias {
        extra_steps += 1;
    }
    if rng.next_unit() < profile.bluff_chance {
        extra_steps += 1;
    }

    let raised = step_raises(minimal, extra_steps, cap);
    let clamped = Bid::new(
        raised.quantity.clamp(1, cap),
        raised.face.clamp(MIN_FACE, MAX_FACE),
    );
    trace!(seat = view.seat, extra_steps, bid = %clamped, "raise");
    Action::Raise(clamped)
}
