//! Bid legality.
//!
//! [`is_legal_raise`] is the single source of truth for whether a bid may be
//! placed. The state machine, the raise generator, every AI and any UI bid
//! editor go through it.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::dice::{face_name, is_valid_face, is_wildcard, Face, MAX_FACE, MIN_FACE};

/// A claim that at least `quantity` dice on the table show `face`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bid {
    pub quantity: u32,
    pub face: Face,
}

impl Bid {
    pub const fn new(quantity: u32, face: Face) -> Self {
        Self { quantity, face }
    }

    /// Quantity at least one and face on the die.
    pub fn is_well_formed(&self) -> bool {
        self.quantity >= 1 && is_valid_face(self.face)
    }

    pub fn is_wildcard(&self) -> bool {
        is_wildcard(self.face)
    }
}

impl fmt::Display for Bid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.quantity, face_name(self.face))
    }
}

/// Why a candidate bid was refused. One variant per rejecting branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum BidRejection {
    #[error("invalid bid values")]
    InvalidValues,
    #[error("cannot bid more than the table maximum of {cap}")]
    ExceedsTableCap { cap: u32 },
    #[error("first bid cannot be Aces")]
    WildcardOpening,
    #[error("quantity is already at the table maximum ({cap}); you must increase the face value")]
    SaturatedQuantityChanged { cap: u32 },
    #[error("must increase face value above {face}")]
    FaceNotRaised { face: Face },
    #[error("must bid at least {minimum} Aces (next whole number after halving {from})")]
    BelowWildcardMinimum { minimum: u32, from: u32 },
    #[error("you need at least {minimum} to leave Aces, but the table only holds {cap}")]
    ConversionUnavailable { minimum: u32, cap: u32 },
    #[error("you need at least {minimum} in order to leave Aces")]
    BelowConversionMinimum { minimum: u32 },
    #[error("must increase quantity above {quantity}")]
    QuantityNotRaised { quantity: u32 },
    #[error("cannot decrease quantity below {quantity} when increasing face value")]
    QuantityDecreased { quantity: u32 },
    #[error("not a raise over the current bid")]
    NotARaise,
}

impl BidRejection {
    /// Stable machine-readable code, one per variant.
    pub fn code(&self) -> &'static str {
        match self {
            BidRejection::InvalidValues => "INVALID_VALUES",
            BidRejection::ExceedsTableCap { .. } => "EXCEEDS_TABLE_CAP",
            BidRejection::WildcardOpening => "WILDCARD_OPENING",
            BidRejection::SaturatedQuantityChanged { .. } => "SATURATED_QUANTITY_CHANGED",
            BidRejection::FaceNotRaised { .. } => "FACE_NOT_RAISED",
            BidRejection::BelowWildcardMinimum { .. } => "BELOW_WILDCARD_MINIMUM",
            BidRejection::ConversionUnavailable { .. } => "CONVERSION_UNAVAILABLE",
            BidRejection::BelowConversionMinimum { .. } => "BELOW_CONVERSION_MINIMUM",
            BidRejection::QuantityNotRaised { .. } => "QUANTITY_NOT_RAISED",
            BidRejection::QuantityDecreased { .. } => "QUANTITY_DECREASED",
            BidRejection::NotARaise => "NOT_A_RAISE",
        }
    }
}

/// Fewest Aces that may follow a bid of `quantity` on a natural face.
#[inline]
pub fn min_wildcard_quantity(quantity: u32) -> u32 {
    quantity / 2 + 1
}

/// Fewest natural dice that may follow a bid of `quantity` Aces.
#[inline]
pub fn min_natural_quantity(quantity: u32) -> u32 {
    quantity.saturating_mul(2).saturating_add(1)
}

/// Decide whether `candidate` may follow `previous` with `table_cap` dice in play.
///
/// Branches are checked in a fixed precedence: shape and cap, opening bid,
/// quantity saturation, wildcard conversions, same face, different natural
/// faces. Saturation is checked before the wildcard conversions, so at a
/// saturated quantity even Aces → natural is a plain face raise.
pub fn is_legal_raise(
    previous: Option<Bid>,
    candidate: Bid,
    table_cap: u32,
) -> Result<(), BidRejection> {
    debug_assert!(table_cap >= 1, "table cap must be positive");

    if !candidate.is_well_formed() {
        return Err(BidRejection::InvalidValues);
    }
    if candidate.quantity > table_cap {
        return Err(BidRejection::ExceedsTableCap { cap: table_cap });
    }

    let Some(prev) = previous else {
        if candidate.is_wildcard() {
            return Err(BidRejection::WildcardOpening);
        }
        return Ok(());
    };
    debug_assert!(prev.is_well_formed(), "previous bid {prev:?} is malformed");

    if prev.quantity >= table_cap {
        if candidate.quantity != prev.quantity {
            return Err(BidRejection::SaturatedQuantityChanged { cap: table_cap });
        }
        if candidate.face <= prev.face {
            return Err(BidRejection::FaceNotRaised { face: prev.face });
        }
        return Ok(());
    }

    match (prev.is_wildcard(), candidate.is_wildcard()) {
        (false, true) => {
            let minimum = min_wildcard_quantity(prev.quantity);
            if candidate.quantity < minimum {
                return Err(BidRejection::BelowWildcardMinimum {
                    minimum,
                    from: prev.quantity,
                });
            }
            Ok(())
        }
        (true, false) => {
            let minimum = min_natural_quantity(prev.quantity);
            if minimum > table_cap {
                return Err(BidRejection::ConversionUnavailable {
                    minimum,
                    cap: table_cap,
                });
            }
            if candidate.quantity < minimum {
                return Err(BidRejection::BelowConversionMinimum { minimum });
            }
            Ok(())
        }
        _ if candidate.face == prev.face => {
            if candidate.quantity <= prev.quantity {
                return Err(BidRejection::QuantityNotRaised {
                    quantity: prev.quantity,
                });
            }
            Ok(())
        }
        (false, false) => {
            if candidate.quantity > prev.quantity {
                Ok(())
            } else if candidate.quantity == prev.quantity && candidate.face > prev.face {
                Ok(())
            } else if candidate.quantity == prev.quantity {
                Err(BidRejection::FaceNotRaised { face: prev.face })
            } else if candidate.face > prev.face {
                Err(BidRejection::QuantityDecreased {
                    quantity: prev.quantity,
                })
            } else {
                Err(BidRejection::NotARaise)
            }
        }
        // Both wildcard always has equal faces and is handled above.
        (true, true) => Err(BidRejection::NotARaise),
    }
}

/// Boolean form of [`is_legal_raise`].
#[inline]
pub fn is_legal(previous: Option<Bid>, candidate: Bid, table_cap: u32) -> bool {
    is_legal_raise(previous, candidate, table_cap).is_ok()
}

/// Every legal follow-up to `previous`, ordered by (quantity, face).
pub fn legal_raises(previous: Option<Bid>, table_cap: u32) -> Vec<Bid> {
    let mut out = Vec::new();
    for quantity in 1..=table_cap {
        for face in MIN_FACE..=MAX_FACE {
            let candidate = Bid::new(quantity, face);
            if is_legal(previous, candidate, table_cap) {
                out.push(candidate);
            }
        }
    }
    out
}
