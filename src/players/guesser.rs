//! The code-guessing role
//!
//! Defines the Guesser trait and its two implementations.

use super::input::LineSource;
use crate::core::{Attempt, Code};
use crate::error::GameError;
use crate::solver::Solver;

/// Produces the next guess from the game history
pub trait Guesser {
    /// Return the next guess
    ///
    /// # Errors
    /// Fails if the guess cannot be obtained: unparseable human input, closed
    /// input, or an exhausted candidate space.
    fn guess(&mut self, history: &[Attempt]) -> Result<Code, GameError>;

    /// Short description of this role for the debug display
    fn describe(&self, history: &[Attempt]) -> String;
}

/// Enum wrapper for both guesser kinds
///
/// Chosen once when the game is set up, then used with static dispatch.
pub enum GuesserKind<I: LineSource> {
    Human(HumanGuesser<I>),
    Computer(ComputerGuesser),
}

impl<I: LineSource> Guesser for GuesserKind<I> {
    fn guess(&mut self, history: &[Attempt]) -> Result<Code, GameError> {
        match self {
            Self::Human(g) => g.guess(history),
            Self::Computer(g) => g.guess(history),
        }
    }

    fn describe(&self, history: &[Attempt]) -> String {
        match self {
            Self::Human(g) => g.describe(history),
            Self::Computer(g) => g.describe(history),
        }
    }
}

/// Guesses the first candidate consistent with every recorded attempt
#[derive(Debug, Clone, Copy, Default)]
pub struct ComputerGuesser {
    solver: Solver,
}

impl ComputerGuesser {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            solver: Solver::new(),
        }
    }
}

impl Guesser for ComputerGuesser {
    fn guess(&mut self, history: &[Attempt]) -> Result<Code, GameError> {
        self.solver.next_guess(history)
    }

    fn describe(&self, history: &[Attempt]) -> String {
        format!(
            "computer ({} consistent candidates)",
            self.solver.count_candidates(history)
        )
    }
}

/// Asks a person for each guess
pub struct HumanGuesser<I> {
    input: I,
}

impl<I: LineSource> HumanGuesser<I> {
    pub const fn new(input: I) -> Self {
        Self { input }
    }

    /// Give back the input source
    pub fn into_inner(self) -> I {
        self.input
    }
}

impl<I: LineSource> Guesser for HumanGuesser<I> {
    fn guess(&mut self, history: &[Attempt]) -> Result<Code, GameError> {
        let prompt = format!("Guess #{} (e.g. R, Y, G, B)", history.len() + 1);
        let line = self.input.request(&prompt)?;
        Code::parse(&line)
    }

    fn describe(&self, _history: &[Attempt]) -> String {
        "human".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Response, score};
    use crate::players::input::ScriptedInput;

    fn code(s: &str) -> Code {
        Code::parse(s).unwrap()
    }

    #[test]
    fn computer_opens_with_first_candidate() {
        let mut guesser = ComputerGuesser::new();
        assert_eq!(guesser.guess(&[]).unwrap(), code("R, Y, G, B"));
        assert_eq!(guesser.describe(&[]), "computer (360 consistent candidates)");
    }

    #[test]
    fn computer_follows_history() {
        let secret = code("K, W, B, G");
        let first = code("R, Y, G, B");
        let history = vec![Attempt::new(first, score(&secret, &first))];

        let mut guesser = ComputerGuesser::new();
        let next = guesser.guess(&history).unwrap();
        assert_eq!(next, code("Y, R, W, K"));
    }

    #[test]
    fn computer_reports_exhaustion() {
        let history = vec![Attempt::new(code("R, Y, G, B"), Response::default())];
        let mut guesser = ComputerGuesser::new();
        assert!(matches!(
            guesser.guess(&history),
            Err(GameError::CandidateSpaceExhausted { .. })
        ));
    }

    #[test]
    fn human_parses_input() {
        let mut guesser = HumanGuesser::new(ScriptedInput::new(["b, w, k, r"]));
        assert_eq!(guesser.guess(&[]).unwrap(), code("B, W, K, R"));
        let input = guesser.into_inner();
        assert_eq!(input.prompts(), &["Guess #1 (e.g. R, Y, G, B)".to_string()]);
    }

    #[test]
    fn human_invalid_token_is_fatal() {
        let mut guesser = HumanGuesser::new(ScriptedInput::new(["R, Y, Q, B", "R, Y, G, B"]));
        assert!(matches!(
            guesser.guess(&[]),
            Err(GameError::InvalidColorToken(t)) if t == "Q"
        ));
    }

    #[test]
    fn human_closed_input() {
        let mut guesser = HumanGuesser::new(ScriptedInput::new(Vec::<String>::new()));
        assert!(matches!(guesser.guess(&[]), Err(GameError::Io(_))));
    }

    #[test]
    fn kind_dispatches() {
        let mut computer: GuesserKind<ScriptedInput> =
            GuesserKind::Computer(ComputerGuesser::new());
        assert_eq!(computer.guess(&[]).unwrap(), code("R, Y, G, B"));

        let mut human = GuesserKind::Human(HumanGuesser::new(ScriptedInput::new(["K K K K"])));
        assert_eq!(human.guess(&[]).unwrap(), code("K, K, K, K"));
        assert_eq!(human.describe(&[]), "human");
    }
}
