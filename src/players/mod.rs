//! The two roles of the game and their human and computer implementations

pub mod codemaker;
pub mod guesser;
pub mod input;

pub use codemaker::{Codemaker, CodemakerKind, ComputerCodemaker, HumanCodemaker};
pub use guesser::{ComputerGuesser, Guesser, GuesserKind, HumanGuesser};
pub use input::{Console, LineSource};
#[cfg(test)]
pub use input::ScriptedInput;
