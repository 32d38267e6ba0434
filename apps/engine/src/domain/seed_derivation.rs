//! RNG seed derivation for deterministic matches.
//!
//! A single match seed fans out into one seed per round (dice) and one per
//! seat (AI decisions), so any round of any match can be replayed on its own.

/// Seed for rolling the dice of round `round_no` (1-based).
pub fn derive_round_seed(match_seed: u64, round_no: u32) -> u64 {
    match_seed
        .wrapping_add((round_no as u64).wrapping_mul(1_000_000))
        .wrapping_add(2) // Offset to distinguish from seat seeds
}

/// Seed for the AI sitting at `seat`.
pub fn derive_seat_seed(match_seed: u64, seat: usize) -> u64 {
    match_seed
        .wrapping_add((seat as u64).wrapping_mul(10_000))
        .wrapping_add(1) // Offset to distinguish from round seeds
}
