//! Error handling for the game core.

pub mod domain;

pub use domain::DomainError;
