//! Mastermind
//!
//! A code-breaking game for a guesser and a codemaker, either of which can be
//! a human at the terminal or the computer. The computer guesser scans every
//! arrangement of four distinct colors and plays the first one consistent with
//! all responses so far.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Code, score};
//! use mastermind::solver::Solver;
//!
//! let secret = Code::parse("W, B, K, R").unwrap();
//! let guess = Solver::new().next_guess(&[]).unwrap();
//! assert_eq!(guess.to_string(), "R, Y, G, B");
//!
//! let response = score(&secret, &guess);
//! assert_eq!(response.counts(), (0, 2));
//! ```

// Core domain types
pub mod core;

// Typed library errors
pub mod error;

// Automated guessing
pub mod solver;

// Human and computer roles
pub mod players;

// Turn loop
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::GameError;
