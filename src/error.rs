//! Error types for the game library

use std::io;

/// Everything that can end a game early
///
/// All variants are fatal at the point they are raised: the game is abandoned
/// rather than retried, and no partial attempt is recorded.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("unrecognized color token '{0}' (expected one of R, Y, G, B, W, K)")]
    InvalidColorToken(String),

    #[error("unrecognized response token '{0}' (expected K for black or W for white)")]
    InvalidResponseToken(String),

    #[error("a code must have exactly 4 colors, got {0}")]
    InvalidCodeLength(usize),

    #[error("no candidate is consistent with the {attempts} recorded attempts")]
    CandidateSpaceExhausted { attempts: usize },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
