//! Static prize ladder: level → money table plus fireproof checkpoints.

pub type Money = u64;

/// Number of rungs on the ladder; also the question count per game.
pub const LEVELS: usize = 15;

/// Prize for completing each level correctly, in ascending order.
pub const PRIZES: [Money; LEVELS] = [
    100, 200, 300, 500, 1_000, 2_000, 4_000, 8_000, 16_000, 32_000, 64_000, 125_000, 250_000,
    500_000, 1_000_000,
];

/// Levels whose prize is guaranteed even after a later wrong answer.
pub const FIREPROOF_LEVELS: [u8; 3] = [4, 9, 14];

/// Prize for completing `level` correctly.
///
/// Out-of-range levels are a programming error (the session enforces bounds
/// before calling in) and panic on the table index.
pub fn prize_for(level: u8) -> Money {
    PRIZES[level as usize]
}

/// Guaranteed payout when the game fails while attempting `level`: the prize
/// of the nearest fireproof checkpoint strictly below it, or 0 if none was
/// reached.
pub fn fireproof_fallback(level: u8) -> Money {
    FIREPROOF_LEVELS
        .iter()
        .copied()
        .filter(|&checkpoint| checkpoint < level)
        .next_back()
        .map(prize_for)
        .unwrap_or(0)
}
