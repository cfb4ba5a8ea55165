use serde::{Deserialize, Serialize};

/// One parsed question block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    pub question: String,
    pub choices: Vec<String>,
    /// Expected to match one of `choices`, but never checked.
    #[serde(default)]
    pub correct_answer: String,
}

impl QuestionRecord {
    pub fn new(
        question: impl Into<String>,
        choices: Vec<String>,
        correct_answer: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            choices,
            correct_answer: correct_answer.into(),
        }
    }

    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }
}
