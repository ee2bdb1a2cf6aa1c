//! One completed turn

use super::{Code, Response};

/// An immutable (guess, response) pair, recorded once per turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    guess: Code,
    response: Response,
}

impl Attempt {
    #[must_use]
    pub const fn new(guess: Code, response: Response) -> Self {
        Self { guess, response }
    }

    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Code {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub const fn response(&self) -> &Response {
        &self.response
    }
}
