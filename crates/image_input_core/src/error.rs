use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid widget configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Configuration field `{0}` must not be empty")]
    EmptyField(&'static str),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
