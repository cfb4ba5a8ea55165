mod loader;
pub mod parser;

pub use loader::{
    fetch_definition, load_questions, load_questions_from_json, load_questions_from_path,
    load_questions_or_empty, read_definition, sample_questions,
};
pub use parser::{parse, to_definition};
