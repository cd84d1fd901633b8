use thiserror::Error;

/// Domain failures surfaced by the storage adapter and the RPC handlers.
///
/// Every variant carries a human readable message and an optional machine
/// readable code. The `Display` output is exactly the message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaError {
    #[error("{message}")]
    NotFound {
        message: String,
        code: Option<String>,
    },

    #[error("{message}")]
    InvalidArgument {
        message: String,
        code: Option<String>,
    },

    #[error("{message}")]
    SizeExceeded {
        message: String,
        code: Option<String>,
    },

    #[error("{message}")]
    Upstream {
        message: String,
        code: Option<String>,
    },

    #[error("{message}")]
    BatchFailure {
        message: String,
        code: Option<String>,
    },

    #[error("{message}")]
    Internal {
        message: String,
        code: Option<String>,
    },
}

impl MediaError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            code: None,
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
            code: None,
        }
    }

    pub fn size_exceeded(message: impl Into<String>) -> Self {
        Self::SizeExceeded {
            message: message.into(),
            code: None,
        }
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
            code: None,
        }
    }

    pub fn batch_failure(message: impl Into<String>) -> Self {
        Self::BatchFailure {
            message: message.into(),
            code: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            code: None,
        }
    }

    /// Attaches a machine readable code, replacing any previous one.
    pub fn with_code(mut self, new_code: impl Into<String>) -> Self {
        match &mut self {
            Self::NotFound { code, .. }
            | Self::InvalidArgument { code, .. }
            | Self::SizeExceeded { code, .. }
            | Self::Upstream { code, .. }
            | Self::BatchFailure { code, .. }
            | Self::Internal { code, .. } => *code = Some(new_code.into()),
        }
        self
    }

    pub fn message(&self) -> &str {
        match self {
            Self::NotFound { message, .. }
            | Self::InvalidArgument { message, .. }
            | Self::SizeExceeded { message, .. }
            | Self::Upstream { message, .. }
            | Self::BatchFailure { message, .. }
            | Self::Internal { message, .. } => message,
        }
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            Self::NotFound { code, .. }
            | Self::InvalidArgument { code, .. }
            | Self::SizeExceeded { code, .. }
            | Self::Upstream { code, .. }
            | Self::BatchFailure { code, .. }
            | Self::Internal { code, .. } => code.as_deref(),
        }
    }

    /// Short kind name used in structured log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NotFound",
            Self::InvalidArgument { .. } => "InvalidArgument",
            Self::SizeExceeded { .. } => "SizeExceeded",
            Self::Upstream { .. } => "UpstreamError",
            Self::BatchFailure { .. } => "BatchFailure",
            Self::Internal { .. } => "Internal",
        }
    }
}
