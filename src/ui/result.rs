use std::io::{self, Write};

use crossterm::style::Color;

use super::Theme;
use crate::models::{ScoreBand, Summary};

pub fn render<W: Write>(out: &mut W, theme: Theme, summary: &Summary) -> io::Result<()> {
    let score_line = format!("Your score: {}", summary);

    writeln!(out)?;
    writeln!(out, "{}", theme.bold("Quiz Finished!"))?;
    writeln!(out, "{}", theme.paint(&score_line, band_color(summary.band)))?;
    writeln!(out, "{}", summary.band.message())?;
    out.flush()
}

fn band_color(band: ScoreBand) -> Color {
    match band {
        ScoreBand::Perfect => Color::Green,
        ScoreBand::Passed => Color::Cyan,
        ScoreBand::KeepPracticing => Color::Yellow,
    }
}
