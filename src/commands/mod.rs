//! Command implementations

pub mod benchmark;
pub mod play;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use play::{Role, build_game, run_play, select_roles};
