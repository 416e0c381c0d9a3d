use crate::data::builtin_questions;
use crate::models::{AppState, Question, Summary};

/// Outcome of a single submitted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Wrong { number: usize, text: String },
}

impl Feedback {
    pub fn is_correct(&self) -> bool {
        matches!(self, Feedback::Correct)
    }
}

pub struct App {
    pub state: AppState,
    questions: Vec<Question>,
    current_question_index: usize,
    answers: Vec<Option<usize>>,
}

impl App {
    pub fn new() -> Self {
        Self::with_questions(builtin_questions())
    }

    pub(crate) fn with_questions(questions: Vec<Question>) -> Self {
        let num_questions = questions.len();
        let state = if num_questions == 0 {
            AppState::Result
        } else {
            AppState::Quiz
        };

        Self {
            state,
            questions,
            current_question_index: 0,
            answers: vec![None; num_questions],
        }
    }

    /// The question awaiting an answer, if the quiz is still running.
    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            AppState::Quiz => self.questions.get(self.current_question_index),
            AppState::Result => None,
        }
    }

    pub fn current_question_number(&self) -> usize {
        self.current_question_index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    /// Records a 1-based answer for the current question and advances.
    ///
    /// Returns `None` once the quiz has already finished.
    pub fn submit_answer(&mut self, answer: usize) -> Option<Feedback> {
        let question = self.current_question()?;
        let feedback = if question.is_correct(answer) {
            Feedback::Correct
        } else {
            Feedback::Wrong {
                number: question.correct_answer,
                text: question.correct_option().to_string(),
            }
        };

        self.answers[self.current_question_index] = Some(answer);
        self.current_question_index += 1;

        if self.current_question_index >= self.questions.len() {
            self.state = AppState::Result;
        }

        Some(feedback)
    }

    pub fn calculate_score(&self) -> usize {
        self.answers
            .iter()
            .zip(self.questions.iter())
            .filter(|(answer, question)| *answer == &Some(question.correct_answer))
            .count()
    }

    pub fn summary(&self) -> Summary {
        Summary::new(self.calculate_score(), self.total_questions())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
