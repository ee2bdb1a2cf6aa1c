//! Mastermind - CLI
//!
//! Play a game with human or computer roles, or benchmark the computer guesser.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mastermind::{
    commands::{run_benchmark, run_play},
    game::GameConfig,
    output::print_benchmark_result,
    solver::Candidates,
};

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind code-breaking game with human or computer players",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Show role details (including a computer codemaker's secret) with every frame
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one game (default)
    Play,

    /// Play the computer guesser against every possible secret
    Benchmark,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = GameConfig {
        debug: cli.debug,
        ..GameConfig::default()
    };

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            run_play(config)?;
        }
        Commands::Benchmark => {
            let secrets: Vec<_> = Candidates::new().collect();
            println!("Running benchmark on {} secrets...", secrets.len());
            let result = run_benchmark(&secrets, true)?;
            print_benchmark_result(&result);
        }
    }

    Ok(())
}
