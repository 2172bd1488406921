#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Pure game engine for a millionaire-style trivia game.
//!
//! A session owns an ordered ladder of 15 questions; answering correctly
//! climbs the prize ladder, a wrong answer ends the game with the fireproof
//! fallback, and the player may cash out or spend one-time lifelines along
//! the way. The crate holds no I/O: loading, persisting, and authorizing
//! sessions is the caller's job.

pub mod domain;
pub mod errors;


// Re-exports for public API
pub use domain::ladder::{fireproof_fallback, prize_for, Money, FIREPROOF_LEVELS, LEVELS, PRIZES};
pub use domain::question::{
    AnswerKey, AudienceVote, FiftyFifty, GameQuestion, HelpKind, HelpRecord,
};
pub use domain::seed_derivation::derive_help_seed;
pub use domain::session::{answer, kill, take_money, use_help, AnswerOutcome, HelpOutcome};
pub use domain::snapshot::{session_snapshot, QuestionPublic, SessionSnapshot};
pub use domain::state::{GameSession, GameStatus};
pub use errors::DomainError;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
