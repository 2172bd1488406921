//! Lifeline computation over an injected randomness source.

use rand::Rng;

use crate::domain::question::{AnswerKey, AudienceVote, FiftyFifty};

/// Simulate an audience vote biased toward the correct key.
///
/// The correct key draws 51..=85 percent, so it is always the strict
/// plurality; the remainder is split among the other three keys by two
/// random cut points. Percentages sum to exactly 100 by construction.
pub fn audience_vote<R: Rng>(correct: AnswerKey, rng: &mut R) -> AudienceVote {
    let correct_share: u8 = rng.random_range(51..=85);
    let remainder = 100 - correct_share;

    let mut cuts = [
        rng.random_range(0..=remainder),
        rng.random_range(0..=remainder),
    ];
    cuts.sort_unstable();
    let splits = [cuts[0], cuts[1] - cuts[0], remainder - cuts[1]];

    let mut percents = [0u8; 4];
    percents[correct.index()] = correct_share;
    let incorrect = AnswerKey::ALL.iter().copied().filter(|&k| k != correct);
    for (key, split) in incorrect.zip(splits) {
        percents[key.index()] = split;
    }
    AudienceVote(percents)
}

/// Pick the two keys left by the fifty-fifty lifeline: the correct one plus
/// one uniformly random incorrect option, in display order.
pub fn fifty_fifty<R: Rng>(correct: AnswerKey, rng: &mut R) -> FiftyFifty {
    let incorrect: Vec<AnswerKey> = AnswerKey::ALL
        .iter()
        .copied()
        .filter(|&k| k != correct)
        .collect();
    let kept_wrong = incorrect[rng.random_range(0..incorrect.len())];

    let mut kept = [correct, kept_wrong];
    kept.sort_unstable();
    FiftyFifty(kept)
}
