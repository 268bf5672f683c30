mod dataset;
mod loader;

pub use dataset::{Dataset, DatasetError, MIN_OPTIONS};
pub use loader::{builtin_dataset, load_questions_from_json, LoadError};
