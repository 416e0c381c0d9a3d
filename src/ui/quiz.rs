use std::io::{self, Write};

use crossterm::style::Color;

use super::Theme;
use crate::app::Feedback;
use crate::models::{NUM_OPTIONS, Question};

pub fn render_question<W: Write>(
    out: &mut W,
    theme: Theme,
    number: usize,
    question: &Question,
) -> io::Result<()> {
    let heading = format!("Q{}. {}", number, question.text);
    writeln!(out)?;
    writeln!(out, "{}", theme.bold(&heading))?;

    for (index, option) in question.options.iter().enumerate() {
        writeln!(out, "{}. {}", index + 1, option)?;
    }
    Ok(())
}

pub fn render_prompt<W: Write>(out: &mut W, theme: Theme) -> io::Result<()> {
    let prompt = format!("Your answer (1-{}): ", NUM_OPTIONS);
    write!(out, "{}", theme.paint(&prompt, Color::Cyan))?;
    out.flush()
}

pub fn render_feedback<W: Write>(out: &mut W, theme: Theme, feedback: &Feedback) -> io::Result<()> {
    match feedback {
        Feedback::Correct => writeln!(out, "{}", theme.paint("✅ Correct!", Color::Green)),
        Feedback::Wrong { number, text } => {
            let line = format!("❌ Wrong! Correct answer: {}. {}", number, text);
            writeln!(out, "{}", theme.paint(&line, Color::Red))
        }
    }
}

pub fn render_invalid_answer<W: Write>(out: &mut W, theme: Theme) -> io::Result<()> {
    let line = format!("Please enter a number between 1 and {}.", NUM_OPTIONS);
    writeln!(out, "{}", theme.paint(&line, Color::Yellow))
}
