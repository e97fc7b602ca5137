use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContribError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown column: {id} (valid: {valid})")]
    InvalidColumn { id: String, valid: String },

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("GitHub API error: {0}")]
    GitHub(String),

    #[error("Render error: {0}")]
    Render(String),
}

impl From<octocrab::Error> for ContribError {
    fn from(err: octocrab::Error) -> Self {
        ContribError::GitHub(err.to_string())
    }
}

impl From<serde_json::Error> for ContribError {
    fn from(err: serde_json::Error) -> Self {
        ContribError::Render(format!("Failed to serialize JSON: {err}"))
    }
}

pub type Result<T> = std::result::Result<T, ContribError>;
