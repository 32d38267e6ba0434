use crate::domain::dice::{is_wildcard, Face, Player};

/// Dice each player starts a match with, unless configured otherwise.
pub const DEFAULT_STARTING_DICE: u8 = 5;
/// A match needs someone to bid and someone to challenge.
pub const MIN_PLAYERS: usize = 2;
/// Event log entries kept, newest first.
pub const LOG_CAPACITY: usize = 20;

/// Dice still in play: the upper bound on any bid quantity.
pub fn table_cap(players: &[Player]) -> u32 {
    players
        .iter()
        .filter(|p| !p.is_eliminated())
        .map(|p| p.dice_count() as u32)
        .sum()
}

/// Whether a single die counts toward a bid on `face`.
///
/// Aces count for every face; a bid on Aces counts only Aces.
#[inline]
pub fn die_matches(die: Face, face: Face) -> bool {
    die == face || (is_wildcard(die) && !is_wildcard(face))
}

/// Dice across all live hands that count toward a bid on `face`.
pub fn count_matching(players: &[Player], face: Face) -> u32 {
    players
        .iter()
        .filter(|p| !p.is_eliminated())
        .flat_map(|p| p.dice().iter())
        .filter(|&&die| die_matches(die, face))
        .count() as u32
}
