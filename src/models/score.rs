use std::fmt;

/// Qualitative bucket for a final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Perfect,
    Passed,
    KeepPracticing,
}

impl ScoreBand {
    /// Every answer right is `Perfect`; at least half (exact, not rounded
    /// down) is `Passed`.
    pub fn for_score(score: usize, total: usize) -> Self {
        if score == total {
            Self::Perfect
        } else if score * 2 >= total {
            Self::Passed
        } else {
            Self::KeepPracticing
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Perfect => "🏆 Excellent! Perfect score.",
            Self::Passed => "👍 Good job! You passed.",
            Self::KeepPracticing => "📚 Keep practicing!",
        }
    }
}

/// Final outcome of a finished quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub score: usize,
    pub total: usize,
    pub band: ScoreBand,
}

impl Summary {
    pub fn new(score: usize, total: usize) -> Self {
        Self {
            score,
            total,
            band: ScoreBand::for_score(score, total),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.score, self.total)
    }
}
