mod question;

pub use question::QuestionRecord;

/// Which part of the quiz screen is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Answering questions.
    #[default]
    Quiz,
    /// Score dialog is showing.
    Result,
}
