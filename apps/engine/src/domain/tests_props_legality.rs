/// Property-based tests for bid legality and the raise generator
use proptest::prelude::*;

use crate::domain::bidding::{is_legal, is_legal_raise, legal_raises, BidRejection};
use crate::domain::raise::next_minimal_raise;
use crate::domain::{test_gens, test_prelude, Bid};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: nothing above the table cap is ever legal.
    #[test]
    fn prop_cap_is_absolute((cap, prev, cand) in test_gens::cap_prev_candidate()) {
        if cand.quantity > cap {
            prop_assert!(!is_legal(Some(prev), cand, cap));
            prop_assert!(!is_legal(None, cand, cap));
        }
    }

    /// Property: Aces never open a round.
    #[test]
    fn prop_no_wildcard_opening(cap in test_gens::table_cap(), q in 1u32..=30) {
        let q = q.min(cap);
        prop_assert_eq!(
            is_legal_raise(None, Bid::new(q, 1), cap),
            Err(BidRejection::WildcardOpening)
        );
    }

    /// Property: a saturated quantity only admits the same quantity on a higher face.
    #[test]
    fn prop_saturation(
        cap in test_gens::table_cap(),
        face in test_gens::face(),
        q in 1u32..=32,
        f in test_gens::face(),
    ) {
        let prev = Bid::new(cap, face);
        let cand = Bid::new(q, f);
        if is_legal(Some(prev), cand, cap) {
            prop_assert_eq!(cand.quantity, cap);
            prop_assert!(cand.face > prev.face);
        }
    }

    /// Property: repeating the current bid is never a raise.
    #[test]
    fn prop_repeat_is_never_legal((cap, prev) in test_gens::cap_and_bid()) {
        prop_assert!(!is_legal(Some(prev), prev, cap));
    }

    /// Property: the generator either finds a legal raise or none exists.
    #[test]
    fn prop_minimal_raise_is_legal((cap, prev) in test_gens::cap_and_bid()) {
        match next_minimal_raise(Some(prev), cap) {
            Some(next) => prop_assert!(is_legal(Some(prev), next, cap),
                "{} -> {} @ {}", prev, next, cap),
            None => prop_assert!(legal_raises(Some(prev), cap).is_empty(),
                "generator gave up on {} @ {} while raises exist", prev, cap),
        }
    }

    /// Property: every enumerated raise is legal and unique.
    #[test]
    fn prop_enumeration_matches_predicate((cap, prev) in test_gens::cap_and_bid()) {
        let raises = legal_raises(Some(prev), cap);
        for r in &raises {
            prop_assert!(is_legal(Some(prev), *r, cap));
        }
        let unique: std::collections::HashSet<_> = raises.iter().collect();
        prop_assert_eq!(unique.len(), raises.len());
    }

    /// Property: the predicate is pure.
    #[test]
    fn prop_legality_is_deterministic((cap, prev, cand) in test_gens::cap_prev_candidate()) {
        let first = is_legal_raise(Some(prev), cand, cap);
        prop_assert_eq!(is_legal_raise(Some(prev), cand, cap), first);
    }
}
