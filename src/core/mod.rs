//! Core domain types for the game
//!
//! Colors, codes, pegs and the scoring rule. Everything here is pure and has
//! no knowledge of players or I/O.

mod attempt;
mod code;
mod response;

pub use attempt::Attempt;
pub use code::{CODE_LENGTH, Code, Color, PALETTE_SIZE};
pub use response::{Peg, Response, score};
