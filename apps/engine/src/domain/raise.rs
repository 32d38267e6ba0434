//! Minimal-raise generator.

use crate::domain::bidding::{is_legal, min_wildcard_quantity, Bid};
use crate::domain::dice::{LOWEST_NATURAL, MAX_FACE, MIN_FACE, WILDCARD};

/// The opening bid offered when nothing is on the table.
pub const OPENING_BID: Bid = Bid::new(1, LOWEST_NATURAL);

/// Cheapest legal raise over `previous`, or `None` when the raise space is
/// exhausted at this table cap (the caller should challenge instead).
///
/// Preference: same quantity one face up, then one more of the same face,
/// then the minimal switch to Aces, then an ascending scan.
pub fn next_minimal_raise(previous: Option<Bid>, table_cap: u32) -> Option<Bid> {
    let Some(prev) = previous else {
        return Some(OPENING_BID);
    };
    let q = prev.quantity;
    let face = prev.face;

    if face < MAX_FACE {
        let b = Bid::new(q, face + 1);
        if is_legal(previous, b, table_cap) {
            return Some(b);
        }
    }

    if q < table_cap {
        let b = Bid::new(q + 1, face);
        if is_legal(previous, b, table_cap) {
            return Some(b);
        }
    }

    if face != WILDCARD {
        let to_aces = Bid::new(min_wildcard_quantity(q).min(table_cap), WILDCARD);
        if is_legal(previous, to_aces, table_cap) {
            return Some(to_aces);
        }
    }

    for qty in q..=table_cap {
        let start = if qty == q {
            (face + 1).min(MAX_FACE)
        } else {
            MIN_FACE
        };
        for f in start..=MAX_FACE {
            let b = Bid::new(qty, f);
            if is_legal(previous, b, table_cap) {
                return Some(b);
            }
        }
    }

    None
}

/// Follow the minimal-raise chain `steps` times from `from`, stopping early
/// when it runs out. Returns the last bid reached.
pub fn step_raises(from: Bid, steps: u32, table_cap: u32) -> Bid {
    let mut current = from;
    for _ in 0..steps {
        match next_minimal_raise(Some(current), table_cap) {
            Some(next) => current = next,
            None => break,
        }
    }
    current
}
