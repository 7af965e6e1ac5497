/// Error types for the title-classification collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    /// Missing or invalid provider configuration
    ConfigError(String),
    /// Transport-level failure talking to the service
    NetworkError(String),
    /// The service answered with a non-success status
    ApiError(String),
    /// The service answered with a body we cannot interpret
    InvalidResponse(String),
}

impl std::fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClassifyError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            ClassifyError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            ClassifyError::ApiError(msg) => write!(f, "API error: {}", msg),
            ClassifyError::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl std::error::Error for ClassifyError {}

/// Result type for classification operations
pub type ClassifyResult<T> = Result<T, ClassifyError>;
