use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeployLensError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid timestamp '{value}' on release {version}: expected YYYY-MM-DDTHH:MM:SS.sssZ")]
    InvalidTimestamp { version: String, value: String },

    #[error("Release versions are not unique across the dataset: {}", .0.join(", "))]
    DuplicateVersions(Vec<String>),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DeployLensError>;
