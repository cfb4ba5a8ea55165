use std::fs;
use std::path::Path;

use crate::data::parser::parse;
use crate::error::LoadError;
use crate::models::QuestionRecord;

pub fn sample_questions() -> Vec<QuestionRecord> {
    vec![
        QuestionRecord::new(
            "What is the capital of France?",
            vec![
                "Paris".to_string(),
                "London".to_string(),
                "Berlin".to_string(),
                "Madrid".to_string(),
            ],
            "Paris",
        ),
        QuestionRecord::new(
            "What is 2 + 2?",
            vec![
                "3".to_string(),
                "4".to_string(),
                "5".to_string(),
                "6".to_string(),
            ],
            "4",
        ),
    ]
}

/// Read a file in the quiz definition format.
pub fn read_definition<P: AsRef<Path>>(path: P) -> Result<Vec<QuestionRecord>, LoadError> {
    let content = read_to_string(path.as_ref())?;
    Ok(parse(&content))
}

/// Read a JSON array of question records.
pub fn load_questions_from_json<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<QuestionRecord>, LoadError> {
    let content = read_to_string(path.as_ref())?;
    let questions: Vec<QuestionRecord> = serde_json::from_str(&content)?;
    Ok(questions)
}

/// Load from a local file, picking the format from the extension.
pub fn load_questions_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<QuestionRecord>, LoadError> {
    let path = path.as_ref();
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        load_questions_from_json(path)
    } else {
        read_definition(path)
    }
}

/// Fetch a definition over HTTP and parse the body.
pub async fn fetch_definition(url: &str) -> Result<Vec<QuestionRecord>, LoadError> {
    log::info!("fetching questions from {url}");
    let body = reqwest::get(url).await?.error_for_status()?.text().await?;
    Ok(parse(&body))
}

/// Load from a URL (`http://` or `https://`) or a local path.
pub async fn load_questions(source: &str) -> Result<Vec<QuestionRecord>, LoadError> {
    let questions = if is_url(source) {
        fetch_definition(source).await?
    } else {
        load_questions_from_path(source)?
    };
    log::info!("loaded {} question(s) from {source}", questions.len());
    Ok(questions)
}

/// Like [`load_questions`], but a retrieval failure gives an empty set.
pub async fn load_questions_or_empty(source: &str) -> Vec<QuestionRecord> {
    match load_questions(source).await {
        Ok(questions) => questions,
        Err(e) => {
            log::warn!("could not load questions from {source}: {e}");
            Vec::new()
        }
    }
}

fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

fn read_to_string(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_definition() {
        let file = temp_file(".txt", "$Q: 2+2?\n$A: 3\n$A: 4\n$C: 4\n");
        let questions = read_definition(file.path()).unwrap();
        assert_eq!(
            questions,
            vec![QuestionRecord::new(
                "2+2?",
                vec!["3".to_string(), "4".to_string()],
                "4"
            )]
        );
    }

    #[test]
    fn test_json_dispatch_by_extension() {
        let json = serde_json::to_string(&sample_questions()).unwrap();
        let file = temp_file(".JSON", &json);
        let questions = load_questions_from_path(file.path()).unwrap();
        assert_eq!(questions, sample_questions());
    }

    #[test]
    fn test_other_extensions_use_definition_format() {
        let file = temp_file(".quiz", "$Q: only\n");
        let questions = load_questions_from_path(file.path()).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question, "only");
    }

    #[test]
    fn test_invalid_json() {
        let file = temp_file(".json", "{ not json");
        let err = load_questions_from_path(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn test_missing_file_names_the_path() {
        let err = read_definition("does/not/exist.txt").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("does/not/exist.txt"));
    }

    #[test]
    fn test_is_url() {
        assert!(is_url("https://example.com/quiz.txt"));
        assert!(is_url("http://localhost:8080/q"));
        assert!(!is_url("quiz.txt"));
        assert!(!is_url("ftp://example.com/quiz.txt"));
    }

    #[tokio::test]
    async fn test_load_questions_from_file_source() {
        let file = temp_file(".txt", "$Q: a\n$Q: b\n");
        let source = file.path().to_str().unwrap();
        let questions = load_questions(source).await.unwrap();
        assert_eq!(questions.len(), 2);
    }

    #[tokio::test]
    async fn test_load_or_empty_on_missing_file() {
        let questions = load_questions_or_empty("does/not/exist.txt").await;
        assert!(questions.is_empty());
    }
}
