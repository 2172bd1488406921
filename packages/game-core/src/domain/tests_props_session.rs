//! Property tests for the session state machine (pure domain, no I/O).
//!
//! Properties tested:
//! - A correct answer at level L moves to L+1, or to Won at the top level
//! - A wrong answer at level L always pays the fireproof fallback for L
//! - Cash-out at level L pays the prize for L-1
//! - Audience votes are four non-negative weights summing to exactly 100
//! - Fifty-fifty always retains the correct key
//! - Terminal sessions reject every operation without mutation

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::domain::ladder::{fireproof_fallback, prize_for, LEVELS};
use crate::domain::session::{answer, kill, take_money, use_help};
use crate::domain::state::GameStatus;
use crate::domain::test_session_helpers::{make_session_at, CORRECT};
use crate::domain::{test_gens, test_prelude};
use crate::errors::domain::DomainError;

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: correct answer at L moves to L+1, or Won at the top
    #[test]
    fn prop_correct_answer_advances(level in test_gens::answerable_level()) {
        let mut session = make_session_at(level);
        let outcome = answer(&mut session, CORRECT);
        prop_assert!(outcome.is_ok());
        let outcome = outcome.unwrap();

        prop_assert!(outcome.correct);
        if level as usize == LEVELS - 1 {
            prop_assert_eq!(session.status, GameStatus::Won);
            prop_assert_eq!(session.current_level, LEVELS as u8);
            prop_assert_eq!(session.prize, prize_for(level));
        } else {
            prop_assert_eq!(session.status, GameStatus::InProgress);
            prop_assert_eq!(session.current_level, level + 1);
            // Never decreases below the previous fireproof fallback: nothing
            // is banked at all until a terminating transition.
            prop_assert_eq!(session.prize, 0);
        }
    }

    /// Property: wrong answer at L pays fireproof_fallback(L), whichever
    /// incorrect key was chosen
    #[test]
    fn prop_wrong_answer_pays_fallback(
        level in test_gens::answerable_level(),
        key in test_gens::wrong_key_for(CORRECT),
    ) {
        let mut session = make_session_at(level);
        let outcome = answer(&mut session, key);
        prop_assert!(outcome.is_ok());

        prop_assert_eq!(session.status, GameStatus::Fail { level });
        prop_assert_eq!(session.prize, fireproof_fallback(level));
        prop_assert_eq!(session.current_level, 0);
        prop_assert_eq!(session.reached_level(), level);
    }

    /// Property: cash-out at L>0 pays prize_for(L-1)
    #[test]
    fn prop_take_money_matches_ladder(level in 1..LEVELS as u8) {
        let mut session = make_session_at(level);
        let prize = take_money(&mut session);
        prop_assert!(prize.is_ok());

        prop_assert_eq!(prize.unwrap(), prize_for(level - 1));
        prop_assert_eq!(session.status, GameStatus::Money { level });
    }

    /// Property: audience vote weights sum to exactly 100
    #[test]
    fn prop_audience_vote_sums_to_100(
        correct in test_gens::answer_key(),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let vote = crate::domain::help::audience_vote(correct, &mut rng);
        prop_assert_eq!(vote.total(), 100);
    }

    /// Property: fifty-fifty always retains the correct key
    #[test]
    fn prop_fifty_fifty_keeps_correct(
        correct in test_gens::answer_key(),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let kept = crate::domain::help::fifty_fifty(correct, &mut rng);
        prop_assert!(kept.contains(correct));
        prop_assert_ne!(kept.0[0], kept.0[1]);
    }

    /// Property: no operation mutates a terminal session
    #[test]
    fn prop_terminal_sessions_are_immutable(
        level in test_gens::answerable_level(),
        key in test_gens::wrong_key_for(CORRECT),
        kind in test_gens::help_kind(),
        seed in any::<u64>(),
    ) {
        let mut session = make_session_at(level);
        answer(&mut session, key).unwrap();
        let terminal = session.clone();

        let mut rng = StdRng::seed_from_u64(seed);
        prop_assert_eq!(answer(&mut session, CORRECT), Err(DomainError::SessionFinished));
        prop_assert_eq!(take_money(&mut session), Err(DomainError::SessionFinished));
        prop_assert_eq!(kill(&mut session), Err(DomainError::SessionFinished));
        prop_assert_eq!(
            use_help(&mut session, kind, &mut rng),
            Err(DomainError::SessionFinished)
        );
        prop_assert_eq!(session, terminal);
    }
}
