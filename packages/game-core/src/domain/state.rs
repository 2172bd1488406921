//! Session state container and read-only queries.

use serde::{Deserialize, Serialize};

use crate::domain::ladder::{Money, LEVELS};
use crate::domain::question::{GameQuestion, HelpKind};
use crate::errors::domain::DomainError;

/// Session status as a tagged union: terminal variants record the level at
/// which the game ended, so no boolean-plus-string combination can go stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GameStatus {
    /// Game is running; the player faces the question at `current_level`.
    InProgress,
    /// All 15 questions answered correctly.
    Won,
    /// Wrong answer while attempting `level`.
    Fail { level: u8 },
    /// Voluntary cash-out while facing `level`.
    Money { level: u8 },
    /// Administrative/timeout termination while facing `level`.
    Killed { level: u8 },
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GameStatus::InProgress => "in_progress",
            GameStatus::Won => "won",
            GameStatus::Fail { .. } => "fail",
            GameStatus::Money { .. } => "money",
            GameStatus::Killed { .. } => "killed",
        }
    }
}

/// One player's run up the prize ladder.
///
/// Owns the 15-question sequence assigned at creation and every field the
/// operations in [`crate::domain::session`] mutate. Persisting the whole
/// object atomically after each operation is the storage collaborator's job;
/// so is enforcing one in-progress session per user at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    /// Owning user; mutation authorization happens at the boundary.
    pub user_id: i64,
    /// Exactly `LEVELS` questions, ordered by ascending difficulty.
    pub questions: Vec<GameQuestion>,
    /// 0-based ladder position; reset to 0 once a failure makes further
    /// progress impossible (the failing level lives in the status variant).
    pub current_level: u8,
    pub status: GameStatus,
    /// Final payout; 0 until a terminating transition fires.
    pub prize: Money,
    pub audience_help_used: bool,
    pub fifty_fifty_used: bool,
}

impl GameSession {
    /// Start a new session over a question set supplied by the (external)
    /// question bank. The set is validated here since the bank is outside
    /// this crate's control.
    pub fn new(user_id: i64, questions: Vec<GameQuestion>) -> Result<Self, DomainError> {
        if questions.len() != LEVELS {
            return Err(DomainError::InvalidQuestionSet(format!(
                "expected {LEVELS} questions, got {}",
                questions.len()
            )));
        }
        for (no, question) in questions.iter().enumerate() {
            if question.options.iter().any(|option| option.is_empty()) {
                return Err(DomainError::InvalidQuestionSet(format!(
                    "question {no} has an empty option"
                )));
            }
            for first in 0..4 {
                for second in (first + 1)..4 {
                    if question.options[first] == question.options[second] {
                        return Err(DomainError::InvalidQuestionSet(format!(
                            "question {no} has duplicate options"
                        )));
                    }
                }
            }
        }
        Ok(Self {
            user_id,
            questions,
            current_level: 0,
            status: GameStatus::InProgress,
            prize: 0,
            audience_help_used: false,
            fifty_fifty_used: false,
        })
    }

    /// The question the player is facing, while the game is still running.
    pub fn current_question(&self) -> Option<&GameQuestion> {
        if self.status.is_terminal() {
            return None;
        }
        self.questions.get(self.current_level as usize)
    }

    pub fn finished(&self) -> bool {
        self.status.is_terminal()
    }

    /// Level reached when the session ended; current level while running.
    pub fn reached_level(&self) -> u8 {
        match self.status {
            GameStatus::InProgress => self.current_level,
            GameStatus::Won => LEVELS as u8,
            GameStatus::Fail { level }
            | GameStatus::Money { level }
            | GameStatus::Killed { level } => level,
        }
    }

    pub fn help_used(&self, kind: HelpKind) -> bool {
        match kind {
            HelpKind::AudienceHelp => self.audience_help_used,
            HelpKind::FiftyFifty => self.fifty_fifty_used,
        }
    }
}
