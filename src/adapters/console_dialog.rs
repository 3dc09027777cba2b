//! Confirmation prompts on the terminal.

use std::io::{self, BufRead, Write};

use crate::traits::Dialog;

/// Asks `[y/N]` on stderr and reads the answer from stdin.
///
/// Anything but `y`/`yes` declines, including a closed stdin.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleDialog {
    assume: Option<bool>,
}

impl ConsoleDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every prompt with `answer` without reading stdin.
    pub fn assume(answer: bool) -> Self {
        Self {
            assume: Some(answer),
        }
    }
}

fn parse_answer(line: &str) -> bool {
    matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

impl Dialog for ConsoleDialog {
    fn confirm(&self, message: &str) -> bool {
        if let Some(answer) = self.assume {
            tracing::debug!("Auto-answering '{}' with {}", message, answer);
            return answer;
        }

        let mut stderr = io::stderr();
        if write!(stderr, "{} [y/N] ", message).and_then(|_| stderr.flush()).is_err() {
            return false;
        }

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => false,
            Ok(_) => parse_answer(&line),
        }
    }
}
