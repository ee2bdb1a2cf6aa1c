//! Transcript rendering and result display

use super::formatters::{create_progress_bar, format_attempt};
use crate::commands::BenchmarkResult;
use crate::core::Attempt;
use crate::game::{GameState, MAX_ATTEMPTS};
use colored::Colorize;
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

/// Everything shown after a turn
pub struct Frame<'a> {
    pub attempts: &'a [Attempt],
    pub debug: Option<&'a str>,
    pub state: GameState,
}

/// Shows the game to the players
pub trait Renderer {
    /// Draw `frame`
    ///
    /// # Errors
    /// Returns an error if the output cannot be written.
    fn render(&mut self, frame: &Frame<'_>) -> io::Result<()>;
}

/// Redraws the whole transcript on a cleared screen
pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl TerminalRenderer<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;

        if let Some(debug) = frame.debug {
            writeln!(self.out, "{}", format!("[debug] {debug}").bright_black())?;
        }

        for (i, attempt) in frame.attempts.iter().enumerate() {
            let line = format_attempt(i + 1, attempt);
            if attempt.response().is_win() {
                writeln!(self.out, "{}", line.green())?;
            } else {
                writeln!(self.out, "{line}")?;
            }
        }

        match frame.state {
            GameState::GuesserWon => {
                writeln!(self.out, "\n{}", "Guesser won!".bright_green().bold())?;
            }
            GameState::CodemakerWon => {
                writeln!(self.out, "\n{}", "Codemaker won!".bright_red().bold())?;
            }
            GameState::InProgress => {}
        }

        self.out.flush()
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Secrets tested:   {}", result.total_games);
    println!(
        "   Solved:           {}",
        format!("{}", result.solved).green()
    );
    if result.failed > 0 {
        println!(
            "   Failed:           {}",
            format!("{}", result.failed).red().bold()
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=MAX_ATTEMPTS {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = (count as f64 / result.total_games as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {guess_count:>2}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }
}
