use thiserror::Error;

/// Core error types for Handy
#[derive(Debug, Error)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Input validation failed
    #[error("Validation error in {field}: {message}")]
    Validation { field: String, message: String },

    /// Expression evaluation failed (keypad calculator)
    #[error("Expression error: {0}")]
    Expr(#[from] ExprError),

    /// QR request construction or fetch failed
    #[error("QR error: {0}")]
    Qr(String),

    /// Internal logic error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Errors produced by the calculator expression engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExprError {
    #[error("Nothing to evaluate")]
    Empty,

    #[error("Unexpected character in expression")]
    BadToken,

    #[error("Malformed expression")]
    Syntax,

    #[error("Unbalanced parentheses")]
    UnbalancedParens,

    #[error("Division by zero")]
    DivisionByZero,
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}
