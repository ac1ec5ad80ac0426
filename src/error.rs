use thiserror::Error;

/// Errors that can occur while talking to the recipe provider
#[derive(Error, Debug)]
pub enum FinderError {
    /// Network failure or unreadable response body
    #[error("Failed to reach recipe provider: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider answered with a non-success status code
    #[error("Recipe provider returned HTTP {0}")]
    Status(reqwest::StatusCode),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
