use crate::domain::bidding::{is_legal, is_legal_raise, legal_raises, Bid, BidRejection};

fn b(q: u32, f: u8) -> Bid {
    Bid::new(q, f)
}

#[test]
fn opening_bid_rules() {
    assert_eq!(is_legal_raise(None, b(1, 2), 10), Ok(()));
    assert_eq!(is_legal_raise(None, b(10, 6), 10), Ok(()));
    assert_eq!(
        is_legal_raise(None, b(3, 1), 10),
        Err(BidRejection::WildcardOpening)
    );
    assert_eq!(
        is_legal_raise(None, b(11, 3), 10),
        Err(BidRejection::ExceedsTableCap { cap: 10 })
    );
}

#[test]
fn malformed_bids_rejected_first() {
    for bad in [b(0, 3), b(2, 0), b(2, 7), b(0, 1)] {
        assert_eq!(
            is_legal_raise(Some(b(2, 3)), bad, 10),
            Err(BidRejection::InvalidValues),
            "{bad:?}"
        );
        assert_eq!(is_legal_raise(None, bad, 10), Err(BidRejection::InvalidValues));
    }
}

#[test]
fn natural_to_aces_needs_half_plus_one() {
    let prev = Some(b(7, 4));
    assert!(is_legal(prev, b(4, 1), 10));
    assert!(is_legal(prev, b(9, 1), 10));
    assert_eq!(
        is_legal_raise(prev, b(3, 1), 10),
        Err(BidRejection::BelowWildcardMinimum { minimum: 4, from: 7 })
    );
    // Even quantities: 6 → 4.
    assert!(is_legal(Some(b(6, 5)), b(4, 1), 10));
    assert!(!is_legal(Some(b(6, 5)), b(3, 1), 10));
}

#[test]
fn aces_to_natural_needs_double_plus_one() {
    let prev = Some(b(3, 1));
    for face in 2..=6 {
        assert!(is_legal(prev, b(7, face), 10), "7 {face}s");
        assert_eq!(
            is_legal_raise(prev, b(6, face), 10),
            Err(BidRejection::BelowConversionMinimum { minimum: 7 })
        );
    }
}

#[test]
fn aces_to_natural_unavailable_when_minimum_exceeds_cap() {
    let prev = Some(b(5, 1));
    assert_eq!(
        is_legal_raise(prev, b(10, 6), 10),
        Err(BidRejection::ConversionUnavailable {
            minimum: 11,
            cap: 10
        })
    );
    // Staying on Aces is still possible.
    assert!(is_legal(prev, b(6, 1), 10));
}

#[test]
fn saturated_quantity_only_allows_higher_faces() {
    let prev = Some(b(10, 3));
    assert_eq!(
        legal_raises(prev, 10),
        vec![b(10, 4), b(10, 5), b(10, 6)]
    );
    assert_eq!(
        is_legal_raise(prev, b(10, 3), 10),
        Err(BidRejection::FaceNotRaised { face: 3 })
    );
    assert_eq!(
        is_legal_raise(prev, b(10, 2), 10),
        Err(BidRejection::FaceNotRaised { face: 3 })
    );
    assert_eq!(
        is_legal_raise(prev, b(9, 6), 10),
        Err(BidRejection::SaturatedQuantityChanged { cap: 10 })
    );
    // An Aces switch that would otherwise clear the halving minimum.
    assert_eq!(
        is_legal_raise(prev, b(6, 1), 10),
        Err(BidRejection::SaturatedQuantityChanged { cap: 10 })
    );
}

#[test]
fn saturation_wins_over_aces_conversion() {
    // With every die already claimed as Aces, a natural face at the same
    // quantity is a plain face raise.
    assert!(is_legal(Some(b(5, 1)), b(5, 2), 5));
    assert_eq!(legal_raises(Some(b(5, 1)), 5).len(), 5);

    // The same move on a bigger table is an ordinary conversion and fails.
    assert_eq!(
        is_legal_raise(Some(b(5, 1)), b(5, 2), 20),
        Err(BidRejection::BelowConversionMinimum { minimum: 11 })
    );
}

#[test]
fn same_face_must_raise_quantity() {
    assert_eq!(
        is_legal_raise(Some(b(3, 4)), b(3, 4), 10),
        Err(BidRejection::QuantityNotRaised { quantity: 3 })
    );
    assert!(is_legal(Some(b(3, 4)), b(4, 4), 10));
    assert!(is_legal(Some(b(2, 1)), b(3, 1), 10));
    assert_eq!(
        is_legal_raise(Some(b(2, 1)), b(2, 1), 10),
        Err(BidRejection::QuantityNotRaised { quantity: 2 })
    );
    assert_eq!(
        is_legal_raise(Some(b(2, 1)), b(1, 1), 10),
        Err(BidRejection::QuantityNotRaised { quantity: 2 })
    );
}

#[test]
fn different_natural_faces() {
    let prev = Some(b(3, 4));
    assert!(is_legal(prev, b(3, 5), 10));
    assert!(is_legal(prev, b(4, 2), 10));
    assert_eq!(
        is_legal_raise(prev, b(3, 3), 10),
        Err(BidRejection::FaceNotRaised { face: 4 })
    );
    assert_eq!(
        is_legal_raise(prev, b(2, 6), 10),
        Err(BidRejection::QuantityDecreased { quantity: 3 })
    );
    assert_eq!(
        is_legal_raise(prev, b(2, 3), 10),
        Err(BidRejection::NotARaise)
    );
}

#[test]
fn cap_is_checked_before_everything_else() {
    assert_eq!(
        is_legal_raise(Some(b(3, 1)), b(11, 2), 10),
        Err(BidRejection::ExceedsTableCap { cap: 10 })
    );
    assert_eq!(
        is_legal_raise(Some(b(10, 3)), b(11, 3), 10),
        Err(BidRejection::ExceedsTableCap { cap: 10 })
    );
}

#[test]
fn legality_is_deterministic() {
    let cases = [
        (None, b(1, 1)),
        (Some(b(7, 4)), b(3, 1)),
        (Some(b(10, 3)), b(10, 4)),
        (Some(b(3, 1)), b(6, 2)),
    ];
    for (prev, cand) in cases {
        let first = is_legal_raise(prev, cand, 10);
        for _ in 0..5 {
            assert_eq!(is_legal_raise(prev, cand, 10), first);
        }
    }
}

#[test]
fn rejection_codes_are_distinct() {
    let all = [
        BidRejection::InvalidValues,
        BidRejection::ExceedsTableCap { cap: 1 },
        BidRejection::WildcardOpening,
        BidRejection::SaturatedQuantityChanged { cap: 1 },
        BidRejection::FaceNotRaised { face: 2 },
        BidRejection::BelowWildcardMinimum { minimum: 1, from: 1 },
        BidRejection::ConversionUnavailable { minimum: 1, cap: 1 },
        BidRejection::BelowConversionMinimum { minimum: 1 },
        BidRejection::QuantityNotRaised { quantity: 1 },
        BidRejection::QuantityDecreased { quantity: 1 },
        BidRejection::NotARaise,
    ];
    let codes: std::collections::HashSet<_> = all.iter().map(BidRejection::code).collect();
    assert_eq!(codes.len(), all.len());
}

#[test]
fn rejection_messages_name_the_limit() {
    let msg = BidRejection::BelowWildcardMinimum { minimum: 4, from: 7 }.to_string();
    assert!(msg.contains('4') && msg.contains('7'), "{msg}");
    assert_eq!(
        BidRejection::WildcardOpening.to_string(),
        "first bid cannot be Aces"
    );
}

#[test]
fn legal_raises_are_sorted_and_all_legal() {
    let prev = Some(b(4, 5));
    let raises = legal_raises(prev, 8);
    assert!(!raises.is_empty());
    assert!(raises.iter().all(|&c| is_legal(prev, c, 8)));
    assert!(raises
        .windows(2)
        .all(|w| (w[0].quantity, w[0].face) < (w[1].quantity, w[1].face)));
    assert_eq!(raises.first(), Some(&b(3, 1)));
}

#[test]
fn bid_display() {
    assert_eq!(b(3, 4).to_string(), "3 4s");
    assert_eq!(b(2, 1).to_string(), "2 Aces");
}
