//! Line-oriented question/answer abstraction.
//!
//! Generators never touch stdin/stdout directly; interviews go through a
//! [`Prompter`] supplied by the caller.

use std::collections::VecDeque;
use std::io;

use crate::ScaffoldError;
use crate::ScaffoldResult;

/// Source of answers for project interviews.
pub trait Prompter {
    /// Shows an informational line.
    fn say(&mut self, message: &str) -> io::Result<()>;

    /// Asks a question and returns the answer with surrounding whitespace
    /// removed.
    fn ask(&mut self, question: &str) -> io::Result<String>;
}

/// Returns `preset` if given, otherwise asks `question`.
pub(crate) fn answer_or_ask(
    prompter: &mut dyn Prompter,
    preset: Option<String>,
    question: &str,
) -> ScaffoldResult<String> {
    match preset {
        Some(value) => Ok(value.trim().to_string()),
        None => prompter.ask(question).map_err(ScaffoldError::Prompt),
    }
}

/// Prompter that replays canned answers, for tests and non-interactive use.
///
/// Everything shown or asked is kept in [`ScriptedPrompter::transcript`].
///
/// # Examples
///
/// ```
/// use spqr_core::scaffold::Prompter;
/// use spqr_core::scaffold::ScriptedPrompter;
///
/// let mut prompter = ScriptedPrompter::new(["demo"]);
/// assert_eq!(prompter.ask("Enter project name: ").unwrap(), "demo");
/// assert!(prompter.ask("Anything else? ").is_err());
/// ```
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedPrompter {
    /// Creates a prompter that answers with `answers`, in order.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Lines shown and questions asked so far.
    #[must_use]
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }
}

impl Prompter for ScriptedPrompter {
    fn say(&mut self, message: &str) -> io::Result<()> {
        self.transcript.push(message.to_string());
        Ok(())
    }

    fn ask(&mut self, question: &str) -> io::Result<String> {
        self.transcript.push(question.to_string());
        self.answers
            .pop_front()
            .map(|answer| answer.trim().to_string())
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    format!("no answer for {question:?}"),
                )
            })
    }
}
