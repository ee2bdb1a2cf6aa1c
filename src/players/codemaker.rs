//! The code-making role
//!
//! The codemaker owns the secret and answers scoring requests. The secret is
//! never handed to the guesser.

use super::input::LineSource;
use crate::core::{CODE_LENGTH, Code, Color, PALETTE_SIZE, Response, score};
use crate::error::GameError;
use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

/// Answers each guess with a response
pub trait Codemaker {
    /// Score `guess`
    ///
    /// # Errors
    /// Fails if the response cannot be obtained (unparseable or closed human input).
    fn respond(&mut self, guess: &Code) -> Result<Response, GameError>;

    /// Short description of this role for the debug display
    fn describe(&self) -> String;
}

/// Enum wrapper for both codemaker kinds
pub enum CodemakerKind<I: LineSource> {
    Human(HumanCodemaker<I>),
    Computer(ComputerCodemaker),
}

impl<I: LineSource> Codemaker for CodemakerKind<I> {
    fn respond(&mut self, guess: &Code) -> Result<Response, GameError> {
        match self {
            Self::Human(c) => c.respond(guess),
            Self::Computer(c) => c.respond(guess),
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Human(c) => c.describe(),
            Self::Computer(c) => c.describe(),
        }
    }
}

/// Holds a secret fixed at construction and scores guesses against it
#[derive(Debug, Clone)]
pub struct ComputerCodemaker {
    secret: Code,
    allow_repeats: bool,
}

impl ComputerCodemaker {
    /// Draw a random secret from the thread-local generator
    ///
    /// With `allow_repeats` the four colors are sampled with replacement,
    /// otherwise without.
    #[must_use]
    pub fn new(allow_repeats: bool) -> Self {
        Self::from_rng(&mut rand::rng(), allow_repeats)
    }

    /// Draw a random secret from `rng`
    pub fn from_rng<R: Rng>(rng: &mut R, allow_repeats: bool) -> Self {
        let colors: [Color; CODE_LENGTH] = if allow_repeats {
            std::array::from_fn(|_| Color::ALL[rng.random_range(0..PALETTE_SIZE)])
        } else {
            let mut palette = Color::ALL;
            palette.shuffle(rng);
            std::array::from_fn(|i| palette[i])
        };
        let secret = Code::new(colors);
        debug!("codemaker drew secret {secret} (repeats allowed: {allow_repeats})");

        Self {
            secret,
            allow_repeats,
        }
    }

    /// Use a known secret
    #[must_use]
    pub fn with_secret(secret: Code) -> Self {
        Self {
            secret,
            allow_repeats: !secret.is_distinct(),
        }
    }

    #[must_use]
    pub const fn allows_repeats(&self) -> bool {
        self.allow_repeats
    }

    #[cfg(test)]
    pub(crate) const fn secret(&self) -> &Code {
        &self.secret
    }
}

impl Codemaker for ComputerCodemaker {
    fn respond(&mut self, guess: &Code) -> Result<Response, GameError> {
        Ok(score(&self.secret, guess))
    }

    fn describe(&self) -> String {
        format!(
            "computer (secret {}, repeats {})",
            self.secret,
            if self.allow_repeats { "on" } else { "off" }
        )
    }
}

/// Asks a person to score each guess
pub struct HumanCodemaker<I> {
    input: I,
}

impl<I: LineSource> HumanCodemaker<I> {
    pub const fn new(input: I) -> Self {
        Self { input }
    }

    /// Give back the input source
    pub fn into_inner(self) -> I {
        self.input
    }
}

impl<I: LineSource> Codemaker for HumanCodemaker<I> {
    fn respond(&mut self, guess: &Code) -> Result<Response, GameError> {
        let prompt = format!("Guess is {guess}. Response (K = black, W = white)");
        let line = self.input.request(&prompt)?;
        Response::parse(&line)
    }

    fn describe(&self) -> String {
        "human".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::input::ScriptedInput;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn code(s: &str) -> Code {
        Code::parse(s).unwrap()
    }

    #[test]
    fn random_secret_without_repeats_is_distinct() {
        for seed in 0..200 {
            let maker = ComputerCodemaker::from_rng(&mut StdRng::seed_from_u64(seed), false);
            assert!(maker.secret().is_distinct(), "seed {seed}");
            assert!(!maker.allows_repeats());
        }
    }

    #[test]
    fn random_secret_with_repeats_sometimes_repeats() {
        let mut rng = StdRng::seed_from_u64(42);
        let repeated = (0..200)
            .map(|_| ComputerCodemaker::from_rng(&mut rng, true))
            .filter(|maker| !maker.secret().is_distinct())
            .count();
        assert!(repeated > 0);
    }

    #[test]
    fn same_seed_same_secret() {
        let a = ComputerCodemaker::from_rng(&mut StdRng::seed_from_u64(9), false);
        let b = ComputerCodemaker::from_rng(&mut StdRng::seed_from_u64(9), false);
        assert_eq!(a.secret(), b.secret());
    }

    #[test]
    fn computer_scores_against_secret() {
        let mut maker = ComputerCodemaker::with_secret(code("R, Y, G, B"));
        assert_eq!(maker.respond(&code("R, Y, G, B")).unwrap().counts(), (4, 0));
        assert_eq!(maker.respond(&code("B, G, Y, R")).unwrap().counts(), (0, 4));
        // The secret does not change between requests
        assert!(maker.respond(&code("R, Y, G, B")).unwrap().is_win());
    }

    #[test]
    fn computer_describe_shows_secret() {
        let maker = ComputerCodemaker::with_secret(code("K, W, B, G"));
        assert_eq!(maker.describe(), "computer (secret K, W, B, G, repeats off)");

        let maker = ComputerCodemaker::with_secret(code("K, K, B, G"));
        assert_eq!(maker.describe(), "computer (secret K, K, B, G, repeats on)");
    }

    #[test]
    fn human_parses_response() {
        let mut maker = HumanCodemaker::new(ScriptedInput::new(["K, W, W"]));
        let response = maker.respond(&code("R, Y, G, B")).unwrap();
        assert_eq!(response.counts(), (1, 2));
        assert_eq!(response.to_string(), "K, W, W");

        let input = maker.into_inner();
        assert_eq!(
            input.prompts(),
            &["Guess is R, Y, G, B. Response (K = black, W = white)".to_string()]
        );
    }

    #[test]
    fn human_empty_response_means_no_pegs() {
        let mut maker = HumanCodemaker::new(ScriptedInput::new([""]));
        let response = maker.respond(&code("R, Y, G, B")).unwrap();
        assert!(response.pegs().is_empty());
    }

    #[test]
    fn human_invalid_token_is_fatal() {
        let mut maker = HumanCodemaker::new(ScriptedInput::new(["K, R"]));
        assert!(matches!(
            maker.respond(&code("R, Y, G, B")),
            Err(GameError::InvalidResponseToken(t)) if t == "R"
        ));
    }

    #[test]
    fn kind_dispatches() {
        let mut maker: CodemakerKind<ScriptedInput> =
            CodemakerKind::Computer(ComputerCodemaker::with_secret(code("G, B, R, Y")));
        assert_eq!(maker.respond(&code("G, B, R, Y")).unwrap().counts(), (4, 0));
        assert!(maker.describe().starts_with("computer"));
    }
}
