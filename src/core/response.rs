//! Peg responses and the scoring rule
//!
//! A response is encoded for humans as its peg letters joined by `", "`:
//! `K` for a black peg, `W` for a white peg. Note that `W` and `K` here do
//! not mean the colors White and Black.

use super::code::{CODE_LENGTH, Code, tokens, write_joined};
use crate::error::GameError;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Classification of one matching color pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Peg {
    /// Same color, same position
    Black,
    /// Same color, different position
    White,
}

impl Peg {
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Black => 'K',
            Self::White => 'W',
        }
    }

    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'K' => Some(Self::Black),
            'W' => Some(Self::White),
            _ => None,
        }
    }
}

/// The pegs produced by scoring one guess
///
/// The peg sequence is kept so a decoded response re-encodes to the same
/// text, but the order carries no meaning: two responses are equal iff their
/// black counts and white counts are equal.
#[derive(Debug, Clone, Default)]
pub struct Response {
    pegs: Vec<Peg>,
}

impl Response {
    #[must_use]
    pub const fn new(pegs: Vec<Peg>) -> Self {
        Self { pegs }
    }

    /// Build a response with the blacks first, then the whites
    #[must_use]
    pub fn from_counts(blacks: usize, whites: usize) -> Self {
        let mut pegs = vec![Peg::Black; blacks];
        pegs.extend(std::iter::repeat_n(Peg::White, whites));
        Self::new(pegs)
    }

    #[must_use]
    pub fn pegs(&self) -> &[Peg] {
        &self.pegs
    }

    #[must_use]
    pub fn blacks(&self) -> usize {
        self.pegs.iter().filter(|&&p| p == Peg::Black).count()
    }

    #[must_use]
    pub fn whites(&self) -> usize {
        self.pegs.iter().filter(|&&p| p == Peg::White).count()
    }

    /// `(black-count, white-count)`
    #[must_use]
    pub fn counts(&self) -> (usize, usize) {
        (self.blacks(), self.whites())
    }

    /// Exactly four pegs, all black
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.pegs.len() == CODE_LENGTH && self.pegs.iter().all(|&p| p == Peg::Black)
    }

    /// Decode a human-entered response such as `"K, K, W"`
    ///
    /// An empty (or all-whitespace) string is the response with no pegs.
    ///
    /// # Errors
    /// Returns `InvalidResponseToken` for the first token that is not `K` or `W`.
    pub fn parse(s: &str) -> Result<Self, GameError> {
        tokens(s)
            .map(|token| {
                let mut chars = token.chars();
                match (chars.next().and_then(Peg::from_letter), chars.next()) {
                    (Some(peg), None) => Ok(peg),
                    _ => Err(GameError::InvalidResponseToken(token.to_string())),
                }
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }
}

impl PartialEq for Response {
    fn eq(&self, other: &Self) -> bool {
        self.counts() == other.counts()
    }
}

impl Eq for Response {}

impl Hash for Response {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.counts().hash(state);
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, self.pegs.iter().map(|p| p.letter()))
    }
}

impl FromStr for Response {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Score `guess` against `secret`
///
/// Every pair of positions `(i, j)` with `secret[i] == guess[j]` emits one peg:
/// black when `i == j`, white otherwise. Pairs are not matched one-to-one, so a
/// color repeated in both codes contributes once per pair. Pegs are emitted in
/// scan order, secret position outermost.
///
/// # Examples
/// ```
/// use mastermind::core::{Code, score};
///
/// let secret = Code::parse("R, Y, G, B").unwrap();
/// let guess = Code::parse("B, G, Y, R").unwrap();
/// assert_eq!(score(&secret, &guess).counts(), (0, 4));
///
/// // Repeated colors count every pair
/// let secret = Code::parse("R, R, Y, G").unwrap();
/// let guess = Code::parse("R, R, B, W").unwrap();
/// assert_eq!(score(&secret, &guess).counts(), (2, 2));
/// ```
#[must_use]
pub fn score(secret: &Code, guess: &Code) -> Response {
    let mut pegs = Vec::with_capacity(CODE_LENGTH);
    for (i, s) in secret.colors().iter().enumerate() {
        for (j, g) in guess.colors().iter().enumerate() {
            if s == g {
                pegs.push(if i == j { Peg::Black } else { Peg::White });
            }
        }
    }
    Response::new(pegs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color::{self, Black, Blue, Green, Red, White, Yellow};

    fn code(colors: [Color; CODE_LENGTH]) -> Code {
        Code::new(colors)
    }

    /// Number of (i, j) pairs with equal colors, counted directly
    fn equal_pairs(secret: &Code, guess: &Code) -> usize {
        secret
            .colors()
            .iter()
            .map(|s| guess.colors().iter().filter(|g| *g == s).count())
            .sum()
    }

    #[test]
    fn exact_match_all_black() {
        let secret = code([Red, Yellow, Green, Blue]);
        let response = score(&secret, &secret);
        assert_eq!(response.counts(), (4, 0));
        assert!(response.is_win());
    }

    #[test]
    fn reversed_all_white() {
        let secret = code([Red, Yellow, Green, Blue]);
        let guess = code([Blue, Green, Yellow, Red]);
        let response = score(&secret, &guess);
        assert_eq!(response.counts(), (0, 4));
        assert!(!response.is_win());
    }

    #[test]
    fn no_shared_colors() {
        let secret = code([Red, Yellow, Green, Blue]);
        let guess = code([White, Black, White, Black]);
        let response = score(&secret, &guess);
        assert!(response.pegs().is_empty());
        assert_eq!(response.to_string(), "");
    }

    #[test]
    fn mixed_black_and_white() {
        // R matches in place, G and B swap places
        let secret = code([Red, Yellow, Green, Blue]);
        let guess = code([Red, Black, Blue, Green]);
        assert_eq!(score(&secret, &guess).counts(), (1, 2));
    }

    #[test]
    fn repeated_guess_color_counts_each_pair() {
        // R at secret[0] pairs with all four guess positions
        let secret = code([Red, Yellow, Green, Blue]);
        let guess = code([Red, Red, Red, Red]);
        let response = score(&secret, &guess);
        assert_eq!(response.counts(), (1, 3));
        assert!(!response.is_win());
    }

    #[test]
    fn repeated_colors_both_sides_overcount() {
        // Four R pairs (two black, two white) plus the Y pair at 2 vs 3
        let secret = code([Red, Red, Yellow, Green]);
        let guess = code([Red, Red, Blue, Yellow]);
        assert_eq!(score(&secret, &guess).counts(), (2, 3));

        // Every one of the sixteen pairs matches
        let all_red = code([Red; CODE_LENGTH]);
        let response = score(&all_red, &all_red);
        assert_eq!(response.counts(), (4, 12));
        assert!(!response.is_win());
    }

    #[test]
    fn peg_total_equals_equal_pairs() {
        let codes = [
            code([Red, Yellow, Green, Blue]),
            code([Blue, Green, Yellow, Red]),
            code([Red, Red, Yellow, Green]),
            code([White, Black, Red, Red]),
            code([Black; CODE_LENGTH]),
            code([Green, White, Green, White]),
        ];
        for secret in &codes {
            for guess in &codes {
                let response = score(secret, guess);
                assert_eq!(
                    response.blacks() + response.whites(),
                    equal_pairs(secret, guess),
                    "{secret} vs {guess}"
                );
            }
        }
    }

    #[test]
    fn scan_order_secret_outermost() {
        // secret[0]=R pairs with guess[1], then secret[2]=G with guess[2]
        let secret = code([Red, Yellow, Green, Blue]);
        let guess = code([White, Red, Green, Black]);
        let response = score(&secret, &guess);
        assert_eq!(response.pegs(), &[Peg::White, Peg::Black]);
        assert_eq!(response.to_string(), "W, K");
    }

    #[test]
    fn equality_ignores_order() {
        let a = Response::parse("K, W, W").unwrap();
        let b = Response::parse("W, W, K").unwrap();
        let c = Response::parse("K, K, W").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a, Response::from_counts(1, 2));
    }

    #[test]
    fn new_keeps_peg_order() {
        let response = Response::new(vec![Peg::White, Peg::Black, Peg::White]);
        assert_eq!(response.counts(), (1, 2));
        assert_eq!(response.to_string(), "W, K, W");
        assert!(!Response::new(vec![Peg::Black; 3]).is_win());
    }

    #[test]
    fn parse_round_trip() {
        for input in ["K, K, K, K", "W, K", "W, W, W, W", "K", ""] {
            assert_eq!(Response::parse(input).unwrap().to_string(), input);
        }
    }

    #[test]
    fn parse_lenient_separators() {
        let response = Response::parse("k w  ,k").unwrap();
        assert_eq!(response.to_string(), "K, W, K");
        assert_eq!(Response::parse("   ").unwrap().counts(), (0, 0));
    }

    #[test]
    fn parse_unrecognized_token() {
        assert!(matches!(
            Response::parse("K, B"),
            Err(GameError::InvalidResponseToken(t)) if t == "B"
        ));
        assert!(matches!(
            Response::parse("KW"),
            Err(GameError::InvalidResponseToken(t)) if t == "KW"
        ));
    }

    #[test]
    fn win_requires_exactly_four_blacks() {
        assert!(Response::from_counts(4, 0).is_win());
        assert!(!Response::from_counts(3, 1).is_win());
        assert!(!Response::from_counts(3, 0).is_win());
        assert!(!Response::from_counts(5, 0).is_win());
    }
}
