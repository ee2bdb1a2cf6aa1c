//! Automated code-breaking
//!
//! The candidate enumerator and the consistency filter built on top of it.

mod candidates;
mod engine;

pub use candidates::{CANDIDATE_COUNT, Candidates};
pub use engine::Solver;
