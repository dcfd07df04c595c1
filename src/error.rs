use thiserror::Error;

/// Unified error type for rc-publish operations
#[derive(Error, Debug)]
pub enum RcPublishError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Environment error: {0}")]
    Environment(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Remote operation failed: {0}")]
    Remote(String),

    #[error("Release API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Webhook request failed: {0}")]
    Webhook(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in rc-publish
pub type Result<T> = std::result::Result<T, RcPublishError>;

impl RcPublishError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        RcPublishError::Config(msg.into())
    }

    /// Create an environment error with context
    pub fn environment(msg: impl Into<String>) -> Self {
        RcPublishError::Environment(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        RcPublishError::Tag(msg.into())
    }

    /// Create a remote error with context
    pub fn remote(msg: impl Into<String>) -> Self {
        RcPublishError::Remote(msg.into())
    }

    /// Create a webhook error with context
    pub fn webhook(msg: impl Into<String>) -> Self {
        RcPublishError::Webhook(msg.into())
    }
}
