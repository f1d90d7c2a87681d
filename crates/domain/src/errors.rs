use thiserror::Error;

/// Status reported for failures that happen outside the HTTP request lifecycle.
pub const STATUS_INTERNAL: u16 = 600;
/// Status reported when an operation is attempted on a closed client.
pub const STATUS_CLIENT_CLOSED: u16 = 601;
/// Status reported when the caller cancelled the operation.
pub const STATUS_CANCELLED: u16 = 499;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Resource not found: {url}")]
    NotFound { url: String },

    #[error("Transport error for {url}: {message}")]
    Transport { url: String, message: String },

    #[error("Request timeout: {url}")]
    Timeout { url: String },

    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus { url: String, status: u16 },

    #[error("Failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("SDK client closed")]
    ClientClosed,

    #[error("Operation cancelled")]
    Cancelled,

    #[error("Resolution task failed: {0}")]
    TaskFailed(String),
}

impl DomainError {
    /// Diagnostic status code. Upstream statuses are preserved as-is.
    pub fn status(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::UnexpectedStatus { status, .. } => *status,
            Self::Decode { .. } => 422,
            Self::InvalidArgument(_) => 400,
            Self::ClientClosed => STATUS_CLIENT_CLOSED,
            Self::Cancelled => STATUS_CANCELLED,
            Self::Transport { .. } | Self::Timeout { .. } | Self::TaskFailed(_) => {
                STATUS_INTERNAL
            }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
