//! Domain-level error type.
//!
//! Every rejected operation returns one of these; nothing here is fatal to
//! the process. The boundary layer (HTTP, rendering) is responsible for
//! turning them into user-facing messages.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::domain::question::HelpKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Operation attempted on a session that already reached a terminal status.
    SessionFinished,
    /// Submitted answer letter is not one of `a`..`d` (exact match required).
    InvalidAnswerKey(String),
    /// Help type string that names no known lifeline.
    UnknownHelp(String),
    /// The named lifeline was already consumed in this session.
    HelpAlreadyUsed(HelpKind),
    /// Cash-out requires at least one correctly answered question.
    NothingBanked,
    /// Question set handed in at creation does not form a valid game.
    InvalidQuestionSet(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::SessionFinished => write!(f, "session is finished"),
            DomainError::InvalidAnswerKey(s) => write!(f, "invalid answer key: {s}"),
            DomainError::UnknownHelp(s) => write!(f, "unknown help type: {s}"),
            DomainError::HelpAlreadyUsed(kind) => {
                write!(f, "help already used: {}", kind.as_str())
            }
            DomainError::NothingBanked => write!(f, "cannot take money before level 1"),
            DomainError::InvalidQuestionSet(s) => write!(f, "invalid question set: {s}"),
        }
    }
}

impl Error for DomainError {}
