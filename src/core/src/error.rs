use std::fmt;

/// Error taxonomy shared by every engine component. The web layer maps each
/// kind onto an HTTP status, so variants carry a message only and never a
/// store-specific payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    NotFound(String),
    InvalidInput(String),
    Conflict(String),
    Upstream(String),
}

impl CoreError {
    pub fn kind(&self) -> &'static str {
        match self {
            CoreError::NotFound(_) => "not_found",
            CoreError::InvalidInput(_) => "invalid_input",
            CoreError::Conflict(_) => "conflict",
            CoreError::Upstream(_) => "upstream",
        }
    }
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CoreError::NotFound(msg) => write!(f, "Not found: {}", msg),
            CoreError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CoreError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            CoreError::Upstream(msg) => write!(f, "Upstream failure: {}", msg),
        }
    }
}

impl std::error::Error for CoreError {}

pub type Result<T> = std::result::Result<T, CoreError>;
