//! Palette colors and 4-peg codes
//!
//! A code is encoded for humans as its color letters joined by `", "`,
//! e.g. `"R, Y, G, B"`.

use crate::error::GameError;
use std::fmt;
use std::str::FromStr;

/// Number of pegs in every code
pub const CODE_LENGTH: usize = 4;

/// Number of colors in the palette
pub const PALETTE_SIZE: usize = 6;

/// One of the six peg colors
///
/// Variant order is the palette order used by the candidate enumerator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Yellow,
    Green,
    Blue,
    White,
    Black,
}

impl Color {
    /// The full palette in enumeration order
    pub const ALL: [Self; PALETTE_SIZE] = [
        Self::Red,
        Self::Yellow,
        Self::Green,
        Self::Blue,
        Self::White,
        Self::Black,
    ];

    /// Single-letter encoding
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Yellow => 'Y',
            Self::Green => 'G',
            Self::Blue => 'B',
            Self::White => 'W',
            Self::Black => 'K',
        }
    }

    /// Decode a single letter (case-insensitive)
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'R' => Some(Self::Red),
            'Y' => Some(Self::Yellow),
            'G' => Some(Self::Green),
            'B' => Some(Self::Blue),
            'W' => Some(Self::White),
            'K' => Some(Self::Black),
            _ => None,
        }
    }

    /// Position of this color in [`Color::ALL`]
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// An ordered sequence of exactly four colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code([Color; CODE_LENGTH]);

impl Code {
    #[inline]
    #[must_use]
    pub const fn new(colors: [Color; CODE_LENGTH]) -> Self {
        Self(colors)
    }

    #[inline]
    #[must_use]
    pub const fn colors(&self) -> &[Color; CODE_LENGTH] {
        &self.0
    }

    /// Check that no color appears twice
    #[must_use]
    pub fn is_distinct(&self) -> bool {
        let mut seen = [false; PALETTE_SIZE];
        for color in self.0 {
            if seen[color.index()] {
                return false;
            }
            seen[color.index()] = true;
        }
        true
    }

    /// Decode a human-entered code such as `"R, Y, G, B"`
    ///
    /// Tokens may be separated by commas and/or whitespace and are
    /// case-insensitive.
    ///
    /// # Errors
    /// - `InvalidColorToken` for the first token that is not a palette letter
    /// - `InvalidCodeLength` if there are not exactly four tokens
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Color};
    ///
    /// let code = Code::parse("R, Y, G, B").unwrap();
    /// assert_eq!(code.colors()[3], Color::Blue);
    /// assert_eq!(code.to_string(), "R, Y, G, B");
    ///
    /// assert!(Code::parse("R, Y, X, B").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, GameError> {
        let colors = tokens(s)
            .map(|token| {
                let mut chars = token.chars();
                match (chars.next().and_then(Color::from_letter), chars.next()) {
                    (Some(color), None) => Ok(color),
                    _ => Err(GameError::InvalidColorToken(token.to_string())),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        let len = colors.len();
        let colors: [Color; CODE_LENGTH] = colors
            .try_into()
            .map_err(|_| GameError::InvalidCodeLength(len))?;
        Ok(Self(colors))
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, self.0.iter().map(|c| c.letter()))
    }
}

impl FromStr for Code {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Split human input on commas and whitespace, dropping empty pieces
pub(crate) fn tokens(s: &str) -> impl Iterator<Item = &str> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
}

/// Write letters joined by `", "`
pub(crate) fn write_joined(
    f: &mut fmt::Formatter<'_>,
    letters: impl Iterator<Item = char>,
) -> fmt::Result {
    for (i, letter) in letters.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{letter}")?;
    }
    Ok(())
}
