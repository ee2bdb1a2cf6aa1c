//! Enumeration of the candidate space
//!
//! Candidates are the ordered arrangements of four distinct colors, produced
//! in lexicographic order over the palette order `R, Y, G, B, W, K`:
//!
//! ```text
//! R, Y, G, B
//! R, Y, G, W
//! R, Y, G, K
//! R, Y, B, G
//! ...
//! K, W, B, G
//! ```
//!
//! The order is observable: the solver returns the first consistent candidate.

use crate::core::{CODE_LENGTH, Code, Color, PALETTE_SIZE};

/// Number of arrangements of 4 distinct colors from 6 (6 × 5 × 4 × 3)
pub const CANDIDATE_COUNT: usize = 360;

/// Total number of 4-color codes, repeats allowed (6^4)
const CODE_SPACE: usize = PALETTE_SIZE.pow(CODE_LENGTH as u32);

/// Lazy iterator over every candidate in enumeration order
///
/// Walks all 6^4 codes as a base-6 odometer (most significant digit first) and
/// skips those with a repeated color, which leaves exactly the distinct
/// arrangements in lexicographic order. Restart by calling [`Candidates::new`]
/// again or by cloning a fresh iterator.
#[derive(Debug, Clone, Default)]
pub struct Candidates {
    next: usize,
}

impl Candidates {
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 0 }
    }
}

impl Iterator for Candidates {
    type Item = Code;

    fn next(&mut self) -> Option<Code> {
        while self.next < CODE_SPACE {
            let code = decode(self.next);
            self.next += 1;
            if code.is_distinct() {
                return Some(code);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(CANDIDATE_COUNT.min(CODE_SPACE - self.next)))
    }
}

impl std::iter::FusedIterator for Candidates {}

/// Map an odometer value in `0..6^4` to its code
fn decode(mut value: usize) -> Code {
    let mut colors = [Color::Red; CODE_LENGTH];
    for slot in colors.iter_mut().rev() {
        *slot = Color::ALL[value % PALETTE_SIZE];
        value /= PALETTE_SIZE;
    }
    Code::new(colors)
}
