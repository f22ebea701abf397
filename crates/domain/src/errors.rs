use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Blocklist fetch failed: {message}")]
    FetchFailed {
        status: Option<u16>,
        message: String,
    },

    #[error("Notification delivery failed: {0}")]
    NotificationFailed(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn fetch(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::FetchFailed {
            status,
            message: message.into(),
        }
    }
}
