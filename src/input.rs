//! Parsing of the player's answer line.

use thiserror::Error;

use crate::models::NUM_OPTIONS;

/// Why an answer line was not accepted. Always recoverable: the player is
/// asked again.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnswerError {
    #[error("no answer given")]
    Empty,

    #[error("{0:?} is not a number")]
    NotANumber(String),

    #[error("{0} is not between 1 and 4")]
    OutOfRange(usize),
}

/// Parses one line of input into a 1-based option number.
pub fn parse_answer(line: &str) -> Result<usize, AnswerError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(AnswerError::Empty);
    }

    let answer: usize = trimmed
        .parse()
        .map_err(|_| AnswerError::NotANumber(trimmed.to_string()))?;

    if (1..=NUM_OPTIONS).contains(&answer) {
        Ok(answer)
    } else {
        Err(AnswerError::OutOfRange(answer))
    }
}
