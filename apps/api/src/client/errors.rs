use thiserror::Error;

/// Failure of a call from the client to the engagement service.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The request never completed (connect failure, timeout, broken body).
    #[error("Network error: {0}")]
    Network(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Service error: {0}")]
    Service(String),
}

impl ClientError {
    /// Whether the server state is unknown after this error, as opposed to a definite refusal.
    pub fn is_indeterminate(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Service(_))
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            tracing::warn!(reqwest_timeout = %err);
        } else if err.is_connect() {
            tracing::warn!(reqwest_connect = %err);
        } else {
            tracing::warn!(reqwest_error = %err);
        }
        ClientError::Network(err.to_string())
    }
}

#[derive(Debug, Error)]
pub enum InteractionStoreError {
    #[error("interaction file unreadable: {0}")]
    Io(#[from] std::io::Error),
    #[error("interaction file corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Failure to assemble a client from its configuration.
#[derive(Debug, Error)]
pub enum ClientSetupError {
    #[error(transparent)]
    Store(#[from] InteractionStoreError),
    #[error(transparent)]
    Api(#[from] ClientError),
}
