//! Note store error types.

use thiserror::Error;

/// Result type for note store operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur talking to the note store.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure: the store could not be reached at all.
    /// Retrying is the caller's call.
    #[error("note store unreachable: {0}")]
    BackendUnavailable(String),

    /// The store reports the note does not exist: never created, expired,
    /// or already consumed.
    #[error("note not found")]
    NotFound,

    /// The store was reached but refused the request.
    #[error("note store rejected request ({status}): {message}")]
    BackendRejected { status: u16, message: String },

    /// The store answered with a success status but an undecodable body.
    #[error("invalid response from note store: {0}")]
    InvalidResponse(String),
}
