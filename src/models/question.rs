use serde::Deserialize;
use thiserror::Error;

pub const NUM_OPTIONS: usize = 4;

/// A single multiple-choice question.
///
/// `correct_answer` is 1-based, matching the numbers shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    pub text: String,
    pub options: [String; NUM_OPTIONS],
    pub correct_answer: usize,
}

/// Reasons a question is rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuestionError {
    #[error("question text is empty")]
    EmptyText,

    #[error("option {0} is empty")]
    EmptyOption(usize),

    #[error("correct answer {0} is outside 1-4")]
    AnswerOutOfRange(usize),
}

impl Question {
    pub fn new(
        text: impl Into<String>,
        options: [&str; NUM_OPTIONS],
        correct_answer: usize,
    ) -> Result<Self, QuestionError> {
        let question = Self {
            text: text.into(),
            options: options.map(String::from),
            correct_answer,
        };
        question.validate()?;
        Ok(question)
    }

    pub fn validate(&self) -> Result<(), QuestionError> {
        if self.text.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }
        if let Some(index) = self.options.iter().position(|o| o.trim().is_empty()) {
            return Err(QuestionError::EmptyOption(index + 1));
        }
        if !(1..=NUM_OPTIONS).contains(&self.correct_answer) {
            return Err(QuestionError::AnswerOutOfRange(self.correct_answer));
        }
        Ok(())
    }

    pub fn is_correct(&self, answer: usize) -> bool {
        answer == self.correct_answer
    }

    /// Text of the correct option.
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_answer - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Question {
        Question::new(
            "Which company developed Java?",
            ["Microsoft", "Google", "Sun Microsystems", "Oracle"],
            3,
        )
        .unwrap()
    }

    #[test]
    fn correct_option_uses_one_based_index() {
        let question = sample();
        assert_eq!(question.correct_option(), "Sun Microsystems");
        assert!(question.is_correct(3));
        assert!(!question.is_correct(1));
    }

    #[test]
    fn rejects_answer_outside_range() {
        let zero = Question::new("Q", ["a", "b", "c", "d"], 0);
        let five = Question::new("Q", ["a", "b", "c", "d"], 5);
        assert_eq!(zero.unwrap_err(), QuestionError::AnswerOutOfRange(0));
        assert_eq!(five.unwrap_err(), QuestionError::AnswerOutOfRange(5));
    }

    #[test]
    fn rejects_blank_text_and_options() {
        assert_eq!(
            Question::new("  ", ["a", "b", "c", "d"], 1).unwrap_err(),
            QuestionError::EmptyText
        );
        assert_eq!(
            Question::new("Q", ["a", "", "c", "d"], 1).unwrap_err(),
            QuestionError::EmptyOption(2)
        );
    }
}
