//! Error types for the account ledger
//!
//! This module provides the error taxonomy shared by the service and API
//! crates. Client-facing failures (validation, rule violations, missing
//! accounts) are kept apart from server-side failures so the API layer can
//! map each one to the right status code.

use std::fmt::Display;
use thiserror::Error;

use crate::model::account::AccountError;

/// Account ledger error type
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed input when constructing an account
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// A deposit or withdrawal rejected by the account's business rules
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Error when an account cannot be found
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// The caller abandoned the operation before it completed
    #[error("Operation cancelled")]
    Cancelled,

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// The human-readable message without the variant prefix
    pub fn message(&self) -> String {
        match self {
            Error::ValidationError(msg)
            | Error::InvalidOperation(msg)
            | Error::AccountNotFound(msg)
            | Error::ConfigurationError(msg)
            | Error::Internal(msg) => msg.clone(),
            Error::Cancelled => "Operation cancelled".to_string(),
        }
    }

    /// Whether the error was caused by the client rather than the server
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::ValidationError(_) | Error::InvalidOperation(_) | Error::AccountNotFound(_)
        )
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait to add context to error results
pub trait ErrorExt<T> {
    /// Add context information to an error
    fn with_context<C, F>(self, context_fn: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Display;
}

impl<T> ErrorExt<T> for Result<T> {
    fn with_context<C, F>(self, context_fn: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Display,
    {
        self.map_err(|e| {
            let context = context_fn().to_string();
            match e {
                // Client-facing messages are returned verbatim
                Error::ValidationError(msg) => Error::ValidationError(msg),
                Error::InvalidOperation(msg) => Error::InvalidOperation(msg),
                Error::AccountNotFound(msg) => Error::AccountNotFound(msg),
                Error::Cancelled => Error::Cancelled,
                Error::Internal(msg) => Error::Internal(format!("{}: {}", context, msg)),
                Error::ConfigurationError(msg) => {
                    Error::ConfigurationError(format!("{}: {}", context, msg))
                }
            }
        })
    }
}

/// Entity rule violations surface as client errors
impl From<AccountError> for Error {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::InvalidArgument(msg) => Error::ValidationError(msg),
            AccountError::InvalidOperation(msg) => Error::InvalidOperation(msg),
        }
    }
}
