//! Error types for nratakit

use thiserror::Error;

use crate::forms::ValidationErrors;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid exclusion pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Unknown form '{0}'")]
    UnknownForm(String),

    #[error("Config file not found. Run 'nratakit init' first.")]
    ConfigNotFound,

    #[error("Config file already exists: {0}")]
    ConfigExists(String),
}

impl From<ValidationErrors> for Error {
    fn from(errors: ValidationErrors) -> Self {
        Error::Validation(errors)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
