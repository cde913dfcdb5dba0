//! Error types for the Tagweave domain.
//!
//! The parser and the selection store are total and never fail. Errors only
//! come from the host that owns the prompt text.

use thiserror::Error;

/// The top-level error type for Tagweave operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The session has no host to read the prompt from or commit it to.
    #[error("No host binding: the editing session is not attached to a prompt field")]
    NoHostBinding,

    // --- I/O ---
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification of an [`Error`], for callers that branch on the
/// failure category rather than the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NoHostBinding,
    Io,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NoHostBinding => ErrorKind::NoHostBinding,
            Error::Io(_) => ErrorKind::Io,
        }
    }
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;
