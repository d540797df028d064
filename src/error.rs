//! Error types and handling for pageshell

use thiserror::Error;

/// Result type alias for pageshell operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for pageshell
#[derive(Error, Debug)]
pub enum Error {
    /// Activation-boundary errors
    #[error("Activation error: {0}")]
    Activation(#[from] ActivationError),

    /// Host shell and content attachment errors
    #[error("Host error: {0}")]
    Host(#[from] HostError),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

/// Errors raised at the activation boundary.
///
/// A failed activation never yields a partially constructed page: the
/// factory either returns a fully-formed handle or one of these.
#[derive(Error, Debug)]
pub enum ActivationError {
    #[error("No page type registered under '{name}'")]
    NotRegistered { name: String },

    #[error("Activation of '{name}' failed: {message}")]
    CreationFailed { name: String, message: String },
}

/// Host shell errors
#[derive(Error, Debug)]
pub enum HostError {
    #[error("Page instance '{id}' is already mounted")]
    AlreadyMounted { id: String },

    #[error("Page instance '{id}' is not mounted")]
    NotMounted { id: String },

    #[error("A content tree is already attached to this page")]
    ContentAlreadyAttached,
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Generic(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Generic(msg.to_string())
    }
}
