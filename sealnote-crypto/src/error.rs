//! Crypto error types.

use thiserror::Error;

/// Result type for crypto operations.
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Errors that can occur while encrypting or decrypting a note.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Input is structurally invalid and was rejected before any
    /// cryptographic verification (bad encoding, undersized blob).
    #[error("malformed ciphertext: {0}")]
    Malformed(String),

    /// Tag verification failed. Wrong identifier, wrong password, and
    /// tampered ciphertext are intentionally indistinguishable here.
    #[error("cannot decrypt: wrong key or corrupted data")]
    Authentication,

    /// Key derivation requires a non-empty identifier.
    #[error("identifier must not be empty")]
    EmptyIdentifier,

    #[error("encryption failed: {0}")]
    Encryption(String),
}
