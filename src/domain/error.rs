use thiserror::Error;

/// Failure conditions raised while talking to the completion provider.
///
/// The `Display` text of the request/response variants is the bare message so
/// it can be handed to the user unchanged through [`crate::ApiResponse::error`].
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("API key not configured")]
    MissingConfiguration,

    #[error("{0}")]
    RequestFailed(String),

    #[error("{0}")]
    MalformedResponse(String),

    #[error("{0}")]
    Transport(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl DomainError {
    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::RequestFailed(msg.into())
    }

    pub fn malformed_response(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn is_missing_configuration(&self) -> bool {
        matches!(self, Self::MissingConfiguration)
    }

    pub fn is_request_failed(&self) -> bool {
        matches!(self, Self::RequestFailed(_))
    }

    pub fn is_malformed_response(&self) -> bool {
        matches!(self, Self::MalformedResponse(_))
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
