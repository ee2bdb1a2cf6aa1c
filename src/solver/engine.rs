//! Consistency-based guess selection

use super::candidates::Candidates;
use crate::core::{Attempt, Code, score};
use crate::error::GameError;
use log::{debug, warn};

/// Hypothesis-elimination solver
///
/// Holds no state between turns: every call rescans the full candidate space
/// against the history it is given, so identical histories always produce the
/// same guess.
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver;

impl Solver {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Check whether `candidate` would have produced every recorded response
    ///
    /// Responses are compared by black and white counts only.
    #[must_use]
    pub fn is_consistent(candidate: &Code, history: &[Attempt]) -> bool {
        history
            .iter()
            .all(|attempt| score(candidate, attempt.guess()) == *attempt.response())
    }

    /// Pick the first candidate, in enumeration order, consistent with `history`
    ///
    /// # Errors
    /// Returns `CandidateSpaceExhausted` if no candidate survives. With an honest
    /// codemaker whose secret is in the candidate space this cannot happen, since
    /// the secret itself is always consistent.
    pub fn next_guess(&self, history: &[Attempt]) -> Result<Code, GameError> {
        let mut scanned = 0usize;
        let found = Candidates::new().find(|candidate| {
            scanned += 1;
            Self::is_consistent(candidate, history)
        });

        if let Some(guess) = found {
            debug!(
                "next guess {guess} after scanning {scanned} candidates against {} attempts",
                history.len()
            );
            Ok(guess)
        } else {
            warn!(
                "all {scanned} candidates contradict the {} recorded attempts",
                history.len()
            );
            Err(GameError::CandidateSpaceExhausted {
                attempts: history.len(),
            })
        }
    }

    /// All candidates still consistent with `history`, in enumeration order
    #[must_use]
    pub fn consistent_candidates(&self, history: &[Attempt]) -> Vec<Code> {
        Candidates::new()
            .filter(|candidate| Self::is_consistent(candidate, history))
            .collect()
    }

    /// Count how many candidates remain given the history
    #[must_use]
    pub fn count_candidates(&self, history: &[Attempt]) -> usize {
        Candidates::new()
            .filter(|candidate| Self::is_consistent(candidate, history))
            .count()
    }
}
