//! Domain layer: pure game logic types and helpers.

pub mod help;
pub mod ladder;
pub mod question;
pub mod seed_derivation;
pub mod session;
pub mod snapshot;
pub mod state;

#[cfg(test)]
mod test_session_helpers;
#[cfg(test)]
mod tests_props_session;

// Re-exports for ergonomics
pub use ladder::{fireproof_fallback, prize_for, Money};
pub use question::{AnswerKey, GameQuestion, HelpKind};
pub use seed_derivation::derive_help_seed;
pub use state::{GameSession, GameStatus};
