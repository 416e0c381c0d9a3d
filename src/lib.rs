//! # console-quiz
//!
//! A line-based multiple-choice quiz for the terminal.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use console_quiz::{Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Run the built-in question set on stdin/stdout
//!     let summary = Quiz::builtin().run()?;
//!     println!("finished with {}", summary);
//!
//!     Ok(())
//! }
//! ```

mod app;
mod data;
mod input;
mod models;
pub mod terminal;
mod ui;

use std::io::{self, BufRead, Write};
use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

pub use app::{App, Feedback};
pub use data::{LoadError, builtin_questions, load_questions_from_json, parse_questions};
pub use input::{AnswerError, parse_answer};
pub use models::{AppState, NUM_OPTIONS, Question, QuestionError, ScoreBand, Summary};
pub use ui::Theme;

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Error loading questions from file.
    #[error("failed to load questions: {0}")]
    Load(#[from] LoadError),

    /// IO error during quiz execution.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A question passed to `Quiz::new` breaks its invariants.
    #[error("question {index} is invalid: {reason}")]
    InvalidQuestion {
        index: usize,
        #[source]
        reason: QuestionError,
    },

    /// `Quiz::new` was given no questions.
    #[error("a quiz needs at least one question")]
    NoQuestions,

    /// Input ended before every question was answered.
    #[error("input closed before question {question} was answered")]
    InputClosed { question: usize },
}

/// A quiz instance that can be run on a pair of streams.
pub struct Quiz {
    app: App,
    theme: Theme,
}

impl Quiz {
    /// Create a new quiz from a vector of questions.
    ///
    /// Every question is validated; an empty set is rejected.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::NoQuestions);
        }
        for (index, question) in questions.iter().enumerate() {
            question
                .validate()
                .map_err(|reason| QuizError::InvalidQuestion {
                    index: index + 1,
                    reason,
                })?;
        }

        Ok(Self::from_app(App::with_questions(questions)))
    }

    /// The five built-in questions.
    pub fn builtin() -> Self {
        Self::from_app(App::new())
    }

    fn from_app(app: App) -> Self {
        Self {
            app,
            theme: Theme::default(),
        }
    }

    /// Load a quiz from a JSON file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use console_quiz::Quiz;
    ///
    /// let quiz = Quiz::from_json("questions.json").expect("Failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let questions = load_questions_from_json(path)?;
        Self::new(questions)
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Run the quiz on stdin/stdout, blocking for each answer.
    pub fn run(self) -> Result<Summary, QuizError> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Run the quiz against arbitrary streams.
    pub fn run_with<R: BufRead, W: Write>(
        mut self,
        mut input: R,
        mut output: W,
    ) -> Result<Summary, QuizError> {
        info!(questions = self.app.total_questions(), "starting quiz");

        while let Some(question) = self.app.current_question() {
            let number = self.app.current_question_number();
            ui::render_question(&mut output, self.theme, number, question)?;

            let answer = read_answer(&mut input, &mut output, self.theme, number)?;
            if let Some(feedback) = self.app.submit_answer(answer) {
                debug!(
                    question = number,
                    answer,
                    correct = feedback.is_correct(),
                    "answer submitted"
                );
                ui::render_feedback(&mut output, self.theme, &feedback)?;
            }
        }

        let summary = self.app.summary();
        ui::render(&mut output, self.theme, &summary)?;
        info!(
            score = summary.score,
            total = summary.total,
            band = ?summary.band,
            "quiz finished"
        );

        Ok(summary)
    }

    /// Read-only view of the quiz state.
    pub fn app(&self) -> &App {
        &self.app
    }
}

/// Prompts until a valid answer is read.
fn read_answer<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    theme: Theme,
    question: usize,
) -> Result<usize, QuizError> {
    let mut line = String::new();
    loop {
        ui::render_prompt(output, theme)?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Err(QuizError::InputClosed { question });
        }

        match parse_answer(&line) {
            Ok(answer) => return Ok(answer),
            Err(err) => {
                debug!(question, error = %err, "rejected answer");
                ui::render_invalid_answer(output, theme)?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> (Result<Summary, QuizError>, String) {
        let mut output = Vec::new();
        let result = Quiz::builtin().run_with(input.as_bytes(), &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn perfect_run() {
        let (result, output) = run("2\n2\n3\n3\n2\n");
        let summary = result.unwrap();
        assert_eq!(summary.band, ScoreBand::Perfect);
        assert!(output.contains("Your score: 5/5"));
        assert!(output.contains("🏆 Excellent! Perfect score."));
        assert_eq!(output.matches("✅ Correct!").count(), 5);
    }

    #[test]
    fn all_wrong_run() {
        let (result, output) = run("1\n1\n1\n1\n1\n");
        assert_eq!(result.unwrap(), Summary::new(0, 5));
        assert!(output.contains("Your score: 0/5"));
        assert!(output.contains("📚 Keep practicing!"));
        assert!(output.contains("❌ Wrong! Correct answer: 3. Sun Microsystems"));
    }

    #[test]
    fn two_of_five_keeps_practicing() {
        let (result, output) = run("2\n2\n1\n1\n1\n");
        assert_eq!(result.unwrap().band, ScoreBand::KeepPracticing);
        assert!(output.contains("Your score: 2/5"));
    }

    #[test]
    fn three_of_five_passes() {
        let (result, output) = run("2\n2\n3\n1\n1\n");
        assert_eq!(result.unwrap().band, ScoreBand::Passed);
        assert!(output.contains("👍 Good job! You passed."));
    }

    #[test]
    fn invalid_input_reprompts_same_question() {
        let (result, output) = run("java\n\n7\n2\n2\n3\n3\n2\n");
        assert_eq!(result.unwrap().score, 5);
        assert_eq!(output.matches("Please enter a number between 1 and 4.").count(), 3);
        assert_eq!(output.matches("Q1.").count(), 1);
        assert_eq!(output.matches("Your answer (1-4): ").count(), 8);
    }

    #[test]
    fn eof_mid_quiz_is_an_error() {
        let (result, output) = run("2\n2\n");
        assert!(matches!(result, Err(QuizError::InputClosed { question: 3 })));
        assert!(!output.contains("Quiz Finished!"));
    }

    fn question(correct_answer: usize) -> Question {
        Question {
            text: "Q".to_string(),
            options: ["a", "b", "c", "d"].map(String::from),
            correct_answer,
        }
    }

    #[test]
    fn new_rejects_out_of_range_answer() {
        for bad in [0, 5] {
            let err = Quiz::new(vec![question(1), question(bad)]).err().unwrap();
            assert!(matches!(
                err,
                QuizError::InvalidQuestion {
                    index: 2,
                    reason: QuestionError::AnswerOutOfRange(n),
                } if n == bad
            ));
        }
    }

    #[test]
    fn new_rejects_empty_set() {
        let err = Quiz::new(Vec::new()).err().unwrap();
        assert!(matches!(err, QuizError::NoQuestions));
        assert_eq!(err.to_string(), "a quiz needs at least one question");
    }

    #[test]
    fn custom_quiz_runs_with_valid_questions() {
        let quiz = Quiz::new(vec![question(4)]).unwrap();
        assert_eq!(quiz.app().total_questions(), 1);

        let mut output = Vec::new();
        let summary = quiz.run_with("1\n".as_bytes(), &mut output).unwrap();
        assert_eq!(summary, Summary::new(0, 1));
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("❌ Wrong! Correct answer: 4. d"));
    }

    #[test]
    fn builtin_quiz_has_five_questions() {
        let quiz = Quiz::builtin();
        assert_eq!(quiz.app().total_questions(), 5);
        assert_eq!(quiz.app().state, AppState::Quiz);
    }

    #[test]
    fn questions_are_asked_in_order() {
        let (_, output) = run("1\n1\n1\n1\n1\n");
        let positions: Vec<usize> = (1..=5)
            .map(|n| output.find(&format!("\nQ{}. ", n)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
