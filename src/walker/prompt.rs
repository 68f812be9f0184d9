//! Operator confirmation when a listing grows past the limit

use std::io::{BufRead, Write};

const QUESTION: &str = "Listed files are too long. Do you want to read all files? [Yn]: ";

/// Where the walker asks whether to keep going.
pub trait Prompt {
    /// Ask once. `None` means no answer could be read, which counts as yes.
    fn ask(&mut self, observed: usize) -> Option<String>;

    /// Called once when listing stops.
    fn halted(&mut self, observed: usize);
}

/// True when the answer declines to continue. Only `n` declines; the default is yes.
pub fn is_decline(answer: &str) -> bool {
    answer.trim().to_lowercase() == "n"
}

/// Line-based prompt over any reader/writer pair, normally stdin and stderr.
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompt for TerminalPrompt<R, W> {
    fn ask(&mut self, _observed: usize) -> Option<String> {
        if write!(self.output, "{}", QUESTION)
            .and_then(|_| self.output.flush())
            .is_err()
        {
            return None;
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line),
            Err(e) => {
                tracing::debug!(error = %e, "could not read confirmation answer");
                None
            }
        }
    }

    fn halted(&mut self, observed: usize) {
        let _ = writeln!(self.output, "Stopped listing. Showing {} files.", observed);
    }
}
