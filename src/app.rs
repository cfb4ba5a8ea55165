use crate::models::{AppState, QuestionRecord};

pub const ITEMS_PER_PAGE: usize = 1;

/// Outcome for a single question after submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub question: String,
    pub selected: Option<String>,
    pub correct_answer: String,
    pub is_correct: bool,
}

/// Score summary with a per-question breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOutcome {
    pub score: usize,
    pub total: usize,
    pub answers: Vec<AnswerOutcome>,
}

pub struct App {
    pub state: AppState,
    questions: Vec<QuestionRecord>,
    /// 1-based.
    current_page: usize,
    selected_answers: Vec<Option<String>>,
    score: usize,
}

impl App {
    pub fn with_questions(questions: Vec<QuestionRecord>) -> Self {
        let num_questions = questions.len();

        Self {
            state: AppState::Quiz,
            questions,
            current_page: 1,
            selected_answers: vec![None; num_questions],
            score: 0,
        }
    }

    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.questions.len().div_ceil(ITEMS_PER_PAGE)
    }

    /// Questions shown on the current page.
    pub fn current_questions(&self) -> &[QuestionRecord] {
        let start = ((self.current_page - 1) * ITEMS_PER_PAGE).min(self.questions.len());
        let end = (start + ITEMS_PER_PAGE).min(self.questions.len());
        &self.questions[start..end]
    }

    /// Returns false and stays put when `page` is out of range.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if page == 0 || page > self.total_pages() {
            return false;
        }
        self.current_page = page;
        true
    }

    pub fn next_page(&mut self) {
        if self.current_page < self.total_pages() {
            self.current_page += 1;
        }
    }

    pub fn previous_page(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
    }

    /// Record an answer for the question on the current page.
    pub fn select_answer(&mut self, answer: impl Into<String>) {
        let index = (self.current_page - 1) * ITEMS_PER_PAGE;
        if let Some(slot) = self.selected_answers.get_mut(index) {
            *slot = Some(answer.into());
        }
    }

    pub fn selected_answer(&self, index: usize) -> Option<&str> {
        self.selected_answers.get(index)?.as_deref()
    }

    pub fn selected_answers(&self) -> &[Option<String>] {
        &self.selected_answers
    }

    pub fn answered_count(&self) -> usize {
        self.selected_answers.iter().filter(|a| a.is_some()).count()
    }

    pub fn can_submit(&self) -> bool {
        self.selected_answers.iter().all(Option::is_some)
    }

    pub fn calculate_score(&self) -> usize {
        self.selected_answers
            .iter()
            .zip(self.questions.iter())
            .filter(|(answer, question)| {
                answer
                    .as_deref()
                    .is_some_and(|answer| question.is_correct(answer))
            })
            .count()
    }

    /// Score the quiz and show the result. Refused while anything is unanswered.
    pub fn submit(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        self.score = self.calculate_score();
        self.state = AppState::Result;
        log::debug!("submitted: {} / {}", self.score, self.total_questions());
        true
    }

    /// Score captured by the last submit.
    pub fn score(&self) -> usize {
        self.score
    }

    pub fn is_result_visible(&self) -> bool {
        self.state == AppState::Result
    }

    /// Hide the result. Selections are kept.
    pub fn close_result(&mut self) {
        self.state = AppState::Quiz;
    }

    pub fn outcome(&self) -> QuizOutcome {
        let answers = self
            .questions
            .iter()
            .zip(self.selected_answers.iter())
            .map(|(question, selected)| AnswerOutcome {
                question: question.question.clone(),
                selected: selected.clone(),
                correct_answer: question.correct_answer.clone(),
                is_correct: selected
                    .as_deref()
                    .is_some_and(|answer| question.is_correct(answer)),
            })
            .collect();

        QuizOutcome {
            score: self.calculate_score(),
            total: self.total_questions(),
            answers,
        }
    }

    pub fn restart(&mut self) {
        self.state = AppState::Quiz;
        self.current_page = 1;
        self.score = 0;
        self.selected_answers = vec![None; self.questions.len()];
    }
}
