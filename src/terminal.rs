use std::io;

use crossterm::tty::IsTty;

/// When to emit ANSI colour on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Resolves `Auto` against the environment: colour only on a terminal and
    /// only when `NO_COLOR` is unset or empty.
    pub fn enabled(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
                resolve_auto(io::stdout().is_tty(), no_color)
            }
        }
    }
}

fn resolve_auto(is_tty: bool, no_color: bool) -> bool {
    is_tty && !no_color
}
