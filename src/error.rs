use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("version control error: {0}")]
    VersionControl(String),
    #[error("language model error: {0}")]
    LanguageModel(String),
    #[error("unexpected completion response: {0}")]
    MalformedResponse(String),
    #[error("output directory {} does not exist", .0.display())]
    OutputDirectory(PathBuf),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
