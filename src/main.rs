use std::process;

use clap::{Parser, Subcommand};
use quizz::{
    QuestionRecord, Quiz, QuizError, QuizOutcome, load_questions, sample_questions, to_definition,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a quiz and print its questions as JSON
    Parse {
        /// File path or http(s) URL of the quiz
        source: String,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Answer a quiz in page order and print the score
    Score {
        /// File path or http(s) URL of the quiz
        source: String,
        /// Answer for each question, in order
        #[arg(short, long = "answer", required = true)]
        answers: Vec<String>,
    },
    /// Print the built-in sample questions
    Sample {
        /// Print in the $Q:/$A:/$C: format instead of JSON
        #[arg(long)]
        definition: bool,
    },
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(args.command).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run(command: Command) -> Result<(), QuizError> {
    match command {
        Command::Parse { source, pretty } => {
            let questions = load_questions(&source).await?;
            println!("{}", to_json(&questions, pretty)?);
        }
        Command::Score { source, answers } => {
            let mut quiz = Quiz::load(&source).await?;
            let outcome = quiz.submit_answers(answers.as_slice())?;
            print_outcome(&outcome);
        }
        Command::Sample { definition } => {
            let questions = sample_questions();
            if definition {
                print!("{}", to_definition(&questions));
            } else {
                println!("{}", to_json(&questions, true)?);
            }
        }
    }
    Ok(())
}

fn to_json(questions: &[QuestionRecord], pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(questions)
    } else {
        serde_json::to_string(questions)
    }
}

fn print_outcome(outcome: &QuizOutcome) {
    println!("You scored {} out of {}", outcome.score, outcome.total);
    for (index, answer) in outcome.answers.iter().enumerate() {
        let symbol = if answer.is_correct { "+" } else { "-" };
        println!(
            " {} {:2}. {}  (yours: {}, correct: {})",
            symbol,
            index + 1,
            answer.question,
            answer.selected.as_deref().unwrap_or("-"),
            answer.correct_answer
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample_questions(), false).unwrap();
        assert!(json.starts_with("[{\"question\":\"What is the capital of France?\""));
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_json_failure_becomes_quiz_error() {
        let err = serde_json::from_str::<Vec<QuestionRecord>>("not json").unwrap_err();
        let err = QuizError::from(err);
        assert!(matches!(err, QuizError::Output(_)));
        assert!(err.to_string().starts_with("failed to write questions as JSON"));
    }
}
