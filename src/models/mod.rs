mod question;
mod score;

pub use question::{NUM_OPTIONS, Question, QuestionError};
pub use score::{ScoreBand, Summary};

/// Which phase of the quiz the app is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Quiz,
    Result,
}
