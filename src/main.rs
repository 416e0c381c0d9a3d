use std::path::PathBuf;

use clap::Parser;
use console_quiz::terminal::ColorChoice;
use console_quiz::{Quiz, QuizError, Theme};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the questions from instead of the built-in set
    #[arg(short, long)]
    questions: Option<PathBuf>,

    /// When to colour the output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Log more to stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), QuizError> {
    let quiz = match &args.questions {
        Some(path) => {
            let quiz = Quiz::from_json(path)?;
            tracing::info!(path = %path.display(), "loaded question set");
            quiz
        }
        None => Quiz::builtin(),
    };

    quiz.with_theme(Theme::new(args.color.enabled())).run()?;
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
