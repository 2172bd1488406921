//! RNG seed derivation for deterministic lifeline behavior.
//!
//! Derives unique-but-deterministic seeds from a base game seed so that the
//! same (game, level, lifeline) combination always reproduces the same help
//! hash, e.g. when a persistence write is replayed.

use crate::domain::question::HelpKind;

/// Derive a seed for computing a lifeline at a given level.
///
/// Same game + level + lifeline = same seed; different lifelines on the same
/// question get distinct offsets so their draws never collide.
pub fn derive_help_seed(game_seed: i64, level: u8, kind: HelpKind) -> u64 {
    // Cast i64 to u64 for RNG (sign doesn't matter for seed)
    let base = game_seed as u64;
    let kind_offset: u64 = match kind {
        HelpKind::AudienceHelp => 1,
        HelpKind::FiftyFifty => 2,
    };

    base.wrapping_add((level as u64).wrapping_mul(10_000))
        .wrapping_add(kind_offset)
}
