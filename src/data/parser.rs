//! Parser for the quiz definition format.
//!
//! # Format
//! ```text
//! $Q: What is 2 + 2?
//! $A: 3
//! $A: 4
//! $C: 4
//! ```
//!
//! Lines are trimmed before matching. Anything that does not start with one
//! of the three markers is ignored, and the parser never fails.

use crate::models::QuestionRecord;

pub const QUESTION_MARKER: &str = "$Q: ";
pub const CHOICE_MARKER: &str = "$A: ";
pub const CORRECT_MARKER: &str = "$C: ";

/// Parse definition text into question records, one per `$Q:` line.
pub fn parse(content: &str) -> Vec<QuestionRecord> {
    let content = content.strip_prefix('\u{FEFF}').unwrap_or(content);
    let mut block = Block::default();
    let mut records = Vec::new();

    for line in content.lines() {
        match Line::classify(line) {
            Line::Question(text) => {
                if let Some(record) = block.flush() {
                    records.push(record);
                }
                block.question = Some(text.to_string());
            }
            Line::Choice(text) => block.push_choice(text),
            Line::Correct(text) => block.set_correct(text),
            Line::Other => {}
        }
    }

    if let Some(record) = block.flush() {
        records.push(record);
    }

    log::debug!("parsed {} question(s)", records.len());
    records
}

/// Write records back out in the definition format.
///
/// Records with an empty correct answer get no `$C:` line. Empty questions
/// and empty choices trim down to a bare marker the parser ignores, so they
/// are skipped rather than written.
pub fn to_definition(records: &[QuestionRecord]) -> String {
    let mut out = String::new();
    for record in records {
        if record.question.is_empty() {
            log::debug!("skipping record with an empty question");
            continue;
        }
        push_line(&mut out, QUESTION_MARKER, &record.question);
        for choice in record.choices.iter().filter(|c| !c.is_empty()) {
            push_line(&mut out, CHOICE_MARKER, choice);
        }
        if !record.correct_answer.is_empty() {
            push_line(&mut out, CORRECT_MARKER, &record.correct_answer);
        }
    }
    out
}

fn push_line(out: &mut String, marker: &str, text: &str) {
    out.push_str(marker);
    out.push_str(text);
    out.push('\n');
}

enum Line<'a> {
    Question(&'a str),
    Choice(&'a str),
    Correct(&'a str),
    Other,
}

impl<'a> Line<'a> {
    fn classify(line: &'a str) -> Self {
        let trimmed = line.trim();

        if let Some(rest) = trimmed.strip_prefix(QUESTION_MARKER) {
            Line::Question(rest)
        } else if let Some(rest) = trimmed.strip_prefix(CHOICE_MARKER) {
            Line::Choice(rest)
        } else if let Some(rest) = trimmed.strip_prefix(CORRECT_MARKER) {
            Line::Correct(rest)
        } else {
            Line::Other
        }
    }
}

/// The question block currently being accumulated.
#[derive(Default)]
struct Block {
    question: Option<String>,
    choices: Vec<String>,
    correct_answer: String,
}

impl Block {
    fn push_choice(&mut self, text: &str) {
        if self.question.is_none() {
            log::trace!("dropping choice before first question: {text}");
            return;
        }
        self.choices.push(text.to_string());
    }

    fn set_correct(&mut self, text: &str) {
        if self.question.is_none() {
            log::trace!("dropping correct answer before first question: {text}");
            return;
        }
        self.correct_answer = text.to_string();
    }

    /// Take the finished record out, leaving the block empty.
    fn flush(&mut self) -> Option<QuestionRecord> {
        let question = self.question.take()?;
        Some(QuestionRecord {
            question,
            choices: std::mem::take(&mut self.choices),
            correct_answer: std::mem::take(&mut self.correct_answer),
        })
    }
}
