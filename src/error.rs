use thiserror::Error;

#[derive(Error, Debug)]
pub enum CustomizationError {
    #[error("No priority configuration found")]
    MissingConfiguration,
    #[error("Malformed priority configuration: {0}")]
    MalformedConfiguration(#[source] serde_json::Error),
    #[error("No valid available payment methods found")]
    NoEligibleMethods,
    #[error("No valid operations generated")]
    NoMatches,
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CustomizationError>;
