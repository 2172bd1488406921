//! Session operations: answer, cash-out, lifelines, administrative kill.
//!
//! Each operation is a short synchronous computation over one session: it
//! validates against the current status first, then applies the whole target
//! state or nothing. No I/O, no retries; persisting the result atomically is
//! the storage collaborator's job.

use rand::Rng;
use tracing::{debug, info};

use crate::domain::help;
use crate::domain::ladder::{fireproof_fallback, prize_for, Money, LEVELS};
use crate::domain::question::{AnswerKey, AudienceVote, FiftyFifty, HelpKind};
use crate::domain::state::{GameSession, GameStatus};
use crate::errors::domain::DomainError;

/// Result of answering, describing what state changes occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    /// Whether the submitted key matched the correct one.
    pub correct: bool,
    /// Level after this answer (`LEVELS` on a win, 0 after a failure).
    pub level_after: u8,
    /// Terminal status reached by this answer, if any.
    pub finished_as: Option<GameStatus>,
}

/// What a lifeline produced, mirroring the record stored on the question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpOutcome {
    AudienceVote(AudienceVote),
    FiftyFifty(FiftyFifty),
}

fn require_in_progress(session: &GameSession) -> Result<(), DomainError> {
    if session.status.is_terminal() {
        return Err(DomainError::SessionFinished);
    }
    Ok(())
}

/// Answer the current question.
///
/// Correct below the top level advances the ladder without banking anything;
/// correct at level 14 wins the top prize; incorrect ends the game with the
/// fireproof fallback and records the failing level in the status.
pub fn answer(session: &mut GameSession, key: AnswerKey) -> Result<AnswerOutcome, DomainError> {
    require_in_progress(session)?;

    let level = session.current_level;
    let correct = session.questions[level as usize].is_correct(key);

    if !correct {
        let prize = fireproof_fallback(level);
        session.status = GameStatus::Fail { level };
        session.prize = prize;
        session.current_level = 0;
        info!(level, prize, "wrong answer, session failed");
        return Ok(AnswerOutcome {
            correct: false,
            level_after: 0,
            finished_as: Some(session.status),
        });
    }

    if level as usize == LEVELS - 1 {
        session.current_level = LEVELS as u8;
        session.status = GameStatus::Won;
        session.prize = prize_for(level);
        info!(prize = session.prize, "top question answered, session won");
        return Ok(AnswerOutcome {
            correct: true,
            level_after: session.current_level,
            finished_as: Some(GameStatus::Won),
        });
    }

    session.current_level = level + 1;
    debug!(level_after = session.current_level, "correct answer");
    Ok(AnswerOutcome {
        correct: true,
        level_after: session.current_level,
        finished_as: None,
    })
}

/// Stop voluntarily and bank the prize for the last level completed.
///
/// Rejected before the first correct answer: there is nothing to bank yet,
/// and the caller must surface that as a validation failure rather than a
/// silent success.
pub fn take_money(session: &mut GameSession) -> Result<Money, DomainError> {
    require_in_progress(session)?;

    let level = session.current_level;
    if level == 0 {
        return Err(DomainError::NothingBanked);
    }
    let prize = prize_for(level - 1);
    session.status = GameStatus::Money { level };
    session.prize = prize;
    info!(level, prize, "cash-out");
    Ok(prize)
}

/// Spend a lifeline on the current question.
///
/// Sets the kind's used-flag and attaches the computed hash to the current
/// question only; level, status, and prize are untouched. The randomness
/// source is injected so callers (and tests) control determinism, e.g. via
/// [`crate::domain::seed_derivation::derive_help_seed`].
pub fn use_help<R: Rng>(
    session: &mut GameSession,
    kind: HelpKind,
    rng: &mut R,
) -> Result<HelpOutcome, DomainError> {
    require_in_progress(session)?;

    if session.help_used(kind) {
        return Err(DomainError::HelpAlreadyUsed(kind));
    }

    let question = &mut session.questions[session.current_level as usize];
    let outcome = match kind {
        HelpKind::AudienceHelp => {
            let vote = help::audience_vote(question.correct, rng);
            question.help.audience_vote = Some(vote);
            session.audience_help_used = true;
            HelpOutcome::AudienceVote(vote)
        }
        HelpKind::FiftyFifty => {
            let kept = help::fifty_fifty(question.correct, rng);
            question.help.fifty_fifty = Some(kept);
            session.fifty_fifty_used = true;
            HelpOutcome::FiftyFifty(kept)
        }
    };
    debug!(
        level = session.current_level,
        help = kind.as_str(),
        "lifeline used"
    );
    Ok(outcome)
}

/// Forcibly end an abandoned session without an explicit answer.
///
/// The payout is computed exactly as for a wrong answer at the current level.
pub fn kill(session: &mut GameSession) -> Result<Money, DomainError> {
    require_in_progress(session)?;

    let level = session.current_level;
    let prize = fireproof_fallback(level);
    session.status = GameStatus::Killed { level };
    session.prize = prize;
    session.current_level = 0;
    info!(level, prize, "session killed");
    Ok(prize)
}
