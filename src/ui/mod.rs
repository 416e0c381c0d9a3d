mod quiz;
mod result;

use crossterm::style::{Color, StyledContent, Stylize, style};

pub use quiz::{render_feedback, render_invalid_answer, render_prompt, render_question};
pub use result::render;

/// Console styling. With colour off every string is written verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct Theme {
    pub color: bool,
}

impl Theme {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint<'a>(&self, text: &'a str, color: Color) -> StyledContent<&'a str> {
        if self.color {
            text.with(color)
        } else {
            style(text)
        }
    }

    fn bold<'a>(&self, text: &'a str) -> StyledContent<&'a str> {
        if self.color {
            text.bold()
        } else {
            style(text)
        }
    }
}
