//! # quizz
//!
//! Quiz definitions in a small line-oriented text format, and the headless
//! state of a paginated quiz screen.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quizz::{Quiz, QuizError};
//!
//! # async fn run() -> Result<(), QuizError> {
//! // Load questions from a definition file or an http(s) URL
//! let mut quiz = Quiz::load("questions.txt").await?;
//!
//! let outcome = quiz.submit_answers(&["Paris", "4"])?;
//! println!("You scored {} out of {}", outcome.score, outcome.total);
//! # Ok(())
//! # }
//! ```

mod app;
mod data;
mod error;
mod models;

pub use app::{AnswerOutcome, App, ITEMS_PER_PAGE, QuizOutcome};
pub use data::parser::{CHOICE_MARKER, CORRECT_MARKER, QUESTION_MARKER};
pub use data::{
    fetch_definition, load_questions, load_questions_from_json, load_questions_from_path,
    load_questions_or_empty, parse, read_definition, sample_questions, to_definition,
};
pub use error::{LoadError, QuizError};
pub use models::{AppState, QuestionRecord};

/// A loaded quiz together with its session state.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Create a new quiz from a vector of questions.
    pub fn new(questions: Vec<QuestionRecord>) -> Self {
        Self {
            app: App::with_questions(questions),
        }
    }

    /// Load a quiz from a local path or an `http(s)://` URL.
    ///
    /// Files ending in `.json` are read as a JSON array of records, anything
    /// else as a quiz definition.
    pub async fn load(source: &str) -> Result<Self, QuizError> {
        let questions = load_questions(source).await?;
        Ok(Self::new(questions))
    }

    /// Answer every question in page order, then submit.
    ///
    /// Extra answers are ignored. Fails without changing the score when
    /// there are fewer answers than questions.
    pub fn submit_answers<S: AsRef<str>>(
        &mut self,
        answers: &[S],
    ) -> Result<QuizOutcome, QuizError> {
        let total = self.app.total_questions();
        if answers.len() < total {
            return Err(QuizError::NotSubmittable {
                answered: answers.len(),
                total,
            });
        }

        self.app.restart();

        for (page, answer) in (1..=self.app.total_pages()).zip(answers) {
            let answer: &str = answer.as_ref();
            self.app.go_to_page(page);
            self.app.select_answer(answer);
        }

        // Every page has an answer at this point.
        let submitted = self.app.submit();
        debug_assert!(submitted);

        Ok(self.app.outcome())
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_answers() {
        let mut quiz = Quiz::new(sample_questions());
        let outcome = quiz.submit_answers(&["Paris", "5"]).unwrap();
        assert_eq!(outcome.score, 1);
        assert_eq!(outcome.total, 2);
        assert!(quiz.app().is_result_visible());
    }

    #[test]
    fn test_submit_answers_too_few() {
        let mut quiz = Quiz::new(sample_questions());
        let err = quiz.submit_answers(&["Paris"]).unwrap_err();
        assert!(matches!(
            err,
            QuizError::NotSubmittable {
                answered: 1,
                total: 2
            }
        ));
        assert!(!quiz.app().is_result_visible());
    }

    #[test]
    fn test_failed_submit_keeps_previous_result() {
        let mut quiz = Quiz::new(sample_questions());
        quiz.submit_answers(&["Paris", "4"]).unwrap();

        assert!(quiz.submit_answers(&["Paris"]).is_err());
        assert_eq!(quiz.app().score(), 2);
        assert_eq!(quiz.app().answered_count(), 2);
        assert!(quiz.app().is_result_visible());
    }

    #[test]
    fn test_parsed_definition_drives_session() {
        let questions = parse("$Q: 2+2?\n$A: 3\n$A: 4\n$C: 4\n");
        let mut quiz = Quiz::new(questions);
        let outcome = quiz.submit_answers(&["4"]).unwrap();
        assert_eq!(outcome.score, 1);
    }
}
