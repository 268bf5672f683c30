use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::models::Question;

use super::dataset::{Dataset, DatasetError};

const BUILTIN_QUESTIONS: &str = include_str!("questions.json");

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid question set: {0}")]
    Invalid(#[from] DatasetError),
}

/// The question set compiled into the binary.
pub fn builtin_dataset() -> Result<Dataset, LoadError> {
    parse_dataset(BUILTIN_QUESTIONS, "built-in questions")
}

pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Dataset, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_dataset(&json_content, &path.display().to_string())
}

fn parse_dataset(json: &str, origin: &str) -> Result<Dataset, LoadError> {
    let questions: Vec<Question> =
        serde_json::from_str(json).map_err(|source| LoadError::Parse {
            origin: origin.to_string(),
            source,
        })?;

    let dataset = Dataset::new(questions)?;
    log::info!("Loaded {} questions from {}", dataset.len(), origin);
    Ok(dataset)
}
