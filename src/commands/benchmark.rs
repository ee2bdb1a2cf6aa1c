//! Benchmark command
//!
//! Plays the computer guesser against every secret in a list and gathers
//! statistics on how many guesses it needed.

use crate::core::Code;
use crate::error::GameError;
use crate::game::{Game, GameState};
use crate::players::{ComputerCodemaker, ComputerGuesser};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub solved: usize,
    pub failed: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guesses needed -> number of solved games
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
}

/// Play one self-play game per secret
///
/// Games run in parallel; each is independent and single-threaded.
///
/// # Errors
/// Returns the first error raised by any game. With computer players on
/// both sides this only happens if the candidate space is exhausted.
pub fn run_benchmark(secrets: &[Code], show_progress: bool) -> Result<BenchmarkResult, GameError> {
    let start = Instant::now();

    let pb = if show_progress {
        ProgressBar::new(secrets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let outcomes = secrets
        .par_iter()
        .map(|&secret| {
            let mut game = Game::new(
                ComputerGuesser::new(),
                ComputerCodemaker::with_secret(secret),
            );
            while !game.play_turn()?.is_over() {}
            pb.inc(1);
            Ok::<_, GameError>((game.attempts().len(), game.state()))
        })
        .collect::<Result<Vec<_>, _>>();

    pb.finish_and_clear();
    let outcomes = outcomes?;

    let solved: Vec<usize> = outcomes
        .iter()
        .filter(|(_, state)| *state == GameState::GuesserWon)
        .map(|(guesses, _)| *guesses)
        .collect();

    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    for &guesses in &solved {
        *distribution.entry(guesses).or_insert(0) += 1;
    }

    let average_guesses = if solved.is_empty() {
        0.0
    } else {
        solved.iter().sum::<usize>() as f64 / solved.len() as f64
    };

    let result = BenchmarkResult {
        total_games: outcomes.len(),
        solved: solved.len(),
        failed: outcomes.len() - solved.len(),
        average_guesses,
        min_guesses: solved.iter().copied().min().unwrap_or(0),
        max_guesses: solved.iter().copied().max().unwrap_or(0),
        distribution,
        duration: start.elapsed(),
    };
    info!(
        "benchmark: {}/{} solved, average {:.3} guesses",
        result.solved, result.total_games, result.average_guesses
    );
    Ok(result)
}
