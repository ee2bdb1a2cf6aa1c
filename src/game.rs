//! Turn orchestration
//!
//! A game asks the guesser for a guess, asks the codemaker to score it,
//! records the attempt, renders the transcript and then decides whether the
//! game is over.

use crate::core::Attempt;
use crate::error::GameError;
use crate::output::{Frame, Renderer};
use crate::players::{Codemaker, Guesser};
use log::{debug, info};

/// Turns available to the guesser
pub const MAX_ATTEMPTS: usize = 10;

/// Where a game stands after a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    GuesserWon,
    CodemakerWon,
}

impl GameState {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Settings chosen before a game starts
#[derive(Debug, Clone, Copy, Default)]
pub struct GameConfig {
    /// Let a computer codemaker repeat colors in its secret
    pub allow_repeats: bool,
    /// Render a line describing both roles with every frame
    pub debug: bool,
}

/// One game between a guesser and a codemaker
///
/// The game owns both roles for its lifetime. Attempts are append-only and
/// an attempt is recorded only once both the guess and its response exist.
pub struct Game<G, C> {
    guesser: G,
    codemaker: C,
    attempts: Vec<Attempt>,
    state: GameState,
    debug: bool,
}

impl<G: Guesser, C: Codemaker> Game<G, C> {
    pub fn new(guesser: G, codemaker: C) -> Self {
        Self {
            guesser,
            codemaker,
            attempts: Vec::with_capacity(MAX_ATTEMPTS),
            state: GameState::InProgress,
            debug: false,
        }
    }

    /// Enable or disable the debug line in rendered frames
    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Play a single turn and return the resulting state
    ///
    /// Once the game is over this returns the final state without asking
    /// either role for anything.
    ///
    /// # Errors
    /// Propagates any error from the guesser or codemaker. Nothing is recorded
    /// for a turn that fails.
    pub fn play_turn(&mut self) -> Result<GameState, GameError> {
        if self.state.is_over() {
            return Ok(self.state);
        }

        let guess = self.guesser.guess(&self.attempts)?;
        let response = self.codemaker.respond(&guess)?;
        debug!("turn {}: {guess}  |  {response}", self.attempts.len() + 1);
        self.attempts.push(Attempt::new(guess, response));

        self.state = self.evaluate();
        if self.state.is_over() {
            info!(
                "game over after {} attempts: {:?}",
                self.attempts.len(),
                self.state
            );
        }
        Ok(self.state)
    }

    /// Play turns until the game is over, rendering after each one
    ///
    /// # Errors
    /// Propagates role errors and renderer I/O errors.
    pub fn run<R: Renderer>(&mut self, renderer: &mut R) -> Result<GameState, GameError> {
        loop {
            let state = self.play_turn()?;
            let debug = self.debug.then(|| self.debug_line());
            renderer.render(&Frame {
                attempts: &self.attempts,
                debug: debug.as_deref(),
                state,
            })?;
            if state.is_over() {
                return Ok(state);
            }
        }
    }

    /// Describe both roles
    #[must_use]
    pub fn debug_line(&self) -> String {
        format!(
            "guesser: {}  codemaker: {}",
            self.guesser.describe(&self.attempts),
            self.codemaker.describe()
        )
    }

    fn evaluate(&self) -> GameState {
        let Some(last) = self.attempts.last() else {
            return GameState::InProgress;
        };

        if self.attempts.len() <= MAX_ATTEMPTS && last.response().is_win() {
            GameState::GuesserWon
        } else if self.attempts.len() == MAX_ATTEMPTS {
            GameState::CodemakerWon
        } else {
            GameState::InProgress
        }
    }
}
