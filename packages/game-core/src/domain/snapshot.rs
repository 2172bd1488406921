//! Public snapshot API for observing a session without exposing internals.
//!
//! The presentation layer renders from these views; in particular the
//! current question is exposed without its correct key.

use serde::{Deserialize, Serialize};

use crate::domain::ladder::Money;
use crate::domain::question::{GameQuestion, HelpRecord};
use crate::domain::state::{GameSession, GameStatus};

/// Player-visible view of a question: body, options, and any lifeline
/// output, but never the correct key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionPublic {
    pub text: String,
    pub options: [String; 4],
    #[serde(default, skip_serializing_if = "HelpRecord::is_empty")]
    pub help: HelpRecord,
}

impl From<&GameQuestion> for QuestionPublic {
    fn from(question: &GameQuestion) -> Self {
        Self {
            text: question.text.clone(),
            options: question.options.clone(),
            help: question.help.clone(),
        }
    }
}

/// Top-level read-only view of a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub level: u8,
    pub status: GameStatus,
    pub prize: Money,
    pub audience_help_used: bool,
    pub fifty_fifty_used: bool,
    /// Present only while the session is running.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<QuestionPublic>,
}

pub fn session_snapshot(session: &GameSession) -> SessionSnapshot {
    SessionSnapshot {
        level: session.current_level,
        status: session.status,
        prize: session.prize,
        audience_help_used: session.audience_help_used,
        fifty_fifty_used: session.fifty_fifty_used,
        question: session.current_question().map(QuestionPublic::from),
    }
}
