//! Play command
//!
//! Asks who plays each role, then runs one game on the terminal.

use crate::game::{Game, GameConfig, GameState};
use crate::output::TerminalRenderer;
use crate::players::{
    CodemakerKind, ComputerCodemaker, ComputerGuesser, Console, GuesserKind, HumanCodemaker,
    HumanGuesser, LineSource,
};
use anyhow::{Result, bail};
use log::info;
use std::fmt;

/// Who fills a role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Human,
    Computer,
}

impl Role {
    /// Parse `h`/`human` or `c`/`computer`, ignoring case
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "h" | "human" => Some(Self::Human),
            "c" | "computer" => Some(Self::Computer),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Computer => write!(f, "computer"),
        }
    }
}

/// Ask for the guesser's role, then the codemaker's
///
/// # Errors
/// Fails on closed input or an unrecognized answer.
pub fn select_roles<I: LineSource>(input: &mut I) -> Result<(Role, Role)> {
    let mut ask = |who: &str| -> Result<Role> {
        let answer = input.request(&format!("Who is the {who}? [h]uman / [c]omputer"))?;
        match Role::from_name(&answer) {
            Some(role) => Ok(role),
            None => bail!("unrecognized role '{answer}' for the {who}"),
        }
    };
    let guesser = ask("guesser")?;
    let codemaker = ask("codemaker")?;
    Ok((guesser, codemaker))
}

/// Construct a game for the chosen roles
///
/// Each human role gets its own input source from `make_input`.
pub fn build_game<I, F>(
    guesser: Role,
    codemaker: Role,
    config: GameConfig,
    mut make_input: F,
) -> Game<GuesserKind<I>, CodemakerKind<I>>
where
    I: LineSource,
    F: FnMut() -> I,
{
    let guesser = match guesser {
        Role::Human => GuesserKind::Human(HumanGuesser::new(make_input())),
        Role::Computer => GuesserKind::Computer(ComputerGuesser::new()),
    };
    let codemaker = match codemaker {
        Role::Human => CodemakerKind::Human(HumanCodemaker::new(make_input())),
        Role::Computer => {
            CodemakerKind::Computer(ComputerCodemaker::new(config.allow_repeats))
        }
    };
    Game::new(guesser, codemaker).with_debug(config.debug)
}

/// Run the interactive play mode
///
/// # Errors
/// Any input, parse or rendering error ends the game.
pub fn run_play(config: GameConfig) -> Result<GameState> {
    println!("Mastermind: crack a code of 4 pegs in at most 10 guesses.");
    println!("Colors: R (red), Y (yellow), G (green), B (blue), W (white), K (black).");
    println!("Responses: K = black peg (right color, right place), W = white peg (right color, wrong place).\n");

    let mut console = Console;
    let (guesser, codemaker) = select_roles(&mut console)?;
    info!("starting game: guesser={guesser} codemaker={codemaker}");

    let mut game = build_game(guesser, codemaker, config, || Console);
    let state = game.run(&mut TerminalRenderer::stdout())?;
    Ok(state)
}
