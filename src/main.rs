use std::path::PathBuf;

use clap::Parser;
use knowledge_quiz::{Quiz, QuizError};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the questions from (defaults to the built-in set)
    #[arg(short, long)]
    questions: Option<PathBuf>,

    /// Validate the questions and exit without starting the quiz
    #[arg(long)]
    check: bool,
}

fn main() {
    pretty_env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), QuizError> {
    let quiz = match &args.questions {
        Some(path) => Quiz::from_json(path)?,
        None => Quiz::builtin()?,
    };

    if args.check {
        let total = quiz.app().engine().total_questions();
        println!("OK: {} questions", total);
        return Ok(());
    }

    log::info!("Starting quiz");
    quiz.run()
}
