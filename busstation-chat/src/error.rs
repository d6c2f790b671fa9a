use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Chat assistant is not configured (missing API key)")]
    MissingApiKey,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Message must not be empty")]
    EmptyMessage,

    #[error("Upstream returned status {status}: {detail}")]
    Upstream { status: u16, detail: String },

    #[error("Upstream unreachable: {0}")]
    Network(String),

    #[error("Invalid greeting pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl ChatError {
    /// Status reported by the upstream, if it answered at all.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            ChatError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Detail passed through to the caller on upstream failures.
    pub fn upstream_detail(&self) -> Option<&str> {
        match self {
            ChatError::Upstream { detail, .. } => Some(detail),
            ChatError::Network(detail) => Some(detail),
            _ => None,
        }
    }
}
