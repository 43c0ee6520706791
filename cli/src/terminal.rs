//! Interactive collaborators over a line-oriented terminal.
//!
//! Questions and notices go to the error stream so stdout carries only poem
//! output. Flags given on the command line answer questions up front.

#[cfg(test)]
#[path = "terminal_test.rs"]
mod terminal_test;

use std::cell::RefCell;
use std::io::{BufRead, Write};

use poems::{Interaction, Notice};

pub struct TerminalInteraction<R, W> {
    input: RefCell<R>,
    output: RefCell<W>,
    assume_yes: bool,
    title: Option<String>,
}

impl<R: BufRead, W: Write> TerminalInteraction<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input: RefCell::new(input), output: RefCell::new(output), assume_yes: false, title: None }
    }

    /// Answer every confirmation with yes.
    #[must_use]
    pub fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }

    /// Answer the title prompt with `title`.
    #[must_use]
    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    /// Print `question` and read one line; `None` on end of input.
    fn ask(&self, question: &str) -> Option<String> {
        {
            let mut output = self.output.borrow_mut();
            let _ = write!(output, "{question} ");
            let _ = output.flush();
        }
        let mut line = String::new();
        match self.input.borrow_mut().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_owned()),
        }
    }
}

impl<R: BufRead, W: Write> Interaction for TerminalInteraction<R, W> {
    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        self.ask(&format!("{message} [y/N]"))
            .is_some_and(|answer| matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
    }

    fn prompt(&self, message: &str, default: &str) -> Option<String> {
        if let Some(title) = &self.title {
            return Some(title.clone());
        }
        let answer = self.ask(&format!("{message} [{default}]"))?;
        if answer.is_empty() { Some(default.to_owned()) } else { Some(answer) }
    }

    fn notify(&self, notice: Notice) {
        let mut output = self.output.borrow_mut();
        let _ = match &notice {
            Notice::Info(message) => writeln!(output, "{message}"),
            Notice::Error(message) => writeln!(output, "error: {message}"),
        };
    }
}
