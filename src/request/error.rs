use crate::request::status::Status;

/// Error types for request state-machine operations
///
/// These are programmer errors in callers (command handlers, maintenance
/// jobs), raised synchronously and never absorbed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// The transition rule forbids this status change
    IllegalTransition { from: Status, to: Status },
    /// Single-request operation on a defined-multiple request or vice versa
    WrongKind(String),
    /// No per-language slot exists for this code
    UnknownLanguage(String),
    /// No known encoding could decode the persisted record
    Decode(String),
}

impl std::fmt::Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestError::IllegalTransition { from, to } => {
                write!(f, "Illegal status transition: {} -> {}", from, to)
            }
            RequestError::WrongKind(msg) => write!(f, "Wrong request kind: {}", msg),
            RequestError::UnknownLanguage(code) => {
                write!(f, "No status slot for language '{}'", code)
            }
            RequestError::Decode(msg) => write!(f, "Record decode error: {}", msg),
        }
    }
}

impl std::error::Error for RequestError {}

/// Result type for request operations
pub type RequestResult<T> = Result<T, RequestError>;
