//! Terminal output formatting
//!
//! Transcript rendering and pretty-printing of command results.

pub mod display;
pub mod formatters;

pub use display::{Frame, Renderer, TerminalRenderer, print_benchmark_result};
