//! Terminal-backed prompter.

use console::Term;
use spqr_core::scaffold::Prompter;
use std::io;
use std::io::BufRead;

/// Writes questions to stderr and reads answers from stdin.
///
/// Keeps stdout free for results, so `--json` output stays parseable.
pub struct TermPrompter {
    term: Term,
}

impl TermPrompter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }
}

impl Default for TermPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TermPrompter {
    fn say(&mut self, message: &str) -> io::Result<()> {
        self.term.write_line(message)
    }

    fn ask(&mut self, question: &str) -> io::Result<String> {
        self.term.write_str(question)?;
        self.term.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before an answer was given",
            ));
        }
        Ok(line.trim().to_string())
    }
}
