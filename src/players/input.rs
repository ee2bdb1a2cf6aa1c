//! Line-based request/reply contract for human players

#[cfg(test)]
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Something that can show a prompt and hand back one line of input
pub trait LineSource {
    /// Display `prompt` and return the reply with surrounding whitespace trimmed
    ///
    /// # Errors
    /// Returns an I/O error if reading fails or the input is closed.
    fn request(&mut self, prompt: &str) -> io::Result<String>;
}

/// Prompts on stdout, reads from stdin
#[derive(Debug, Clone, Copy, Default)]
pub struct Console;

impl LineSource for Console {
    fn request(&mut self, prompt: &str) -> io::Result<String> {
        print!("{prompt}: ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().lock().read_line(&mut input)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for a reply",
            ));
        }

        Ok(input.trim().to_string())
    }
}

/// Replays canned replies in order and remembers the prompts it was shown
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    replies: VecDeque<String>,
    prompts: Vec<String>,
}

#[cfg(test)]
impl ScriptedInput {
    #[must_use]
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: replies.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Prompts shown so far, oldest first
    #[must_use]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

#[cfg(test)]
impl LineSource for ScriptedInput {
    fn request(&mut self, prompt: &str) -> io::Result<String> {
        self.prompts.push(prompt.to_string());
        self.replies
            .pop_front()
            .map(|reply| reply.trim().to_string())
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }
}
