#![cfg(test)]

//! Test-only session fixtures for domain unit tests.

use crate::domain::ladder::LEVELS;
use crate::domain::question::{AnswerKey, GameQuestion};
use crate::domain::state::GameSession;

/// Correct key shared by every fixture question.
pub const CORRECT: AnswerKey = AnswerKey::B;

pub fn make_question(no: usize, correct: AnswerKey) -> GameQuestion {
    GameQuestion::new(
        format!("Question {no}"),
        [
            format!("Option a{no}"),
            format!("Option b{no}"),
            format!("Option c{no}"),
            format!("Option d{no}"),
        ],
        correct,
    )
}

/// Fresh session at level 0 with a full fixture question set.
pub fn make_session() -> GameSession {
    make_session_at(0)
}

/// Session advanced to `level` by construction.
pub fn make_session_at(level: u8) -> GameSession {
    let questions = (0..LEVELS).map(|no| make_question(no, CORRECT)).collect();
    let mut session = GameSession::new(7, questions).expect("fixture question set is valid");
    session.current_level = level;
    session
}

/// Some key other than the given one.
pub fn wrong_key(correct: AnswerKey) -> AnswerKey {
    AnswerKey::ALL
        .iter()
        .copied()
        .find(|&k| k != correct)
        .expect("three incorrect keys exist")
}
