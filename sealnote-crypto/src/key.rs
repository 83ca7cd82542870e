//! Key derivation from a note identifier and an optional password.
//!
//! Sender and receiver never exchange key material, so derivation must be
//! deterministic across processes and platforms: the same
//! (identifier, password) pair always yields the same 256-bit key. The
//! identifier is freshly random per note and acts as the salt; no additional
//! salt is carried on the wire.

use crate::error::{CryptoError, CryptoResult};
use sha2::{Digest, Sha256};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Key size in bytes (256 bits).
pub const KEY_SIZE: usize = 32;

/// A derived symmetric key. Zeroized when dropped.
///
/// Exists only in memory for the duration of one encrypt/decrypt call;
/// never serialized, logged, or persisted.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey([u8; KEY_SIZE]);

impl DerivedKey {
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

/// Derives the symmetric key for a note.
///
/// An empty password is equivalent to no password: the key is then derived
/// from the identifier alone. With a password present, the password is first
/// reduced to a fixed-length SHA-256 digest (the same digest
/// [`hash_password`] exposes) and mixed into the derivation input:
///
/// ```text
/// key = SHA-256(identifier)                        (no password)
/// key = SHA-256(identifier ‖ SHA-256(password))    (with password)
/// ```
pub fn derive_key(identifier: &str, password: &str) -> CryptoResult<DerivedKey> {
    if identifier.is_empty() {
        return Err(CryptoError::EmptyIdentifier);
    }

    let mut hasher = Sha256::new();
    hasher.update(identifier.as_bytes());
    if !password.is_empty() {
        hasher.update(Sha256::digest(password.as_bytes()));
    }

    Ok(DerivedKey(hasher.finalize().into()))
}

/// Returns the lowercase hex SHA-256 digest of a password.
///
/// This is the exact digest used inside [`derive_key`]. Callers that gate on
/// password possession without decrypting (e.g., a UI prompt) must use this
/// helper, or verification and decryption would silently diverge.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_identifier_rejected() {
        assert!(matches!(
            derive_key("", "pw"),
            Err(CryptoError::EmptyIdentifier)
        ));
    }

    #[test]
    fn empty_password_equals_no_password() {
        let a = derive_key("Ab3xQ9", "").unwrap();
        let b = derive_key("Ab3xQ9", "").unwrap();
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn password_changes_key() {
        let without = derive_key("Ab3xQ9", "").unwrap();
        let with = derive_key("Ab3xQ9", "secret").unwrap();
        assert_ne!(without.as_bytes(), with.as_bytes());
    }
}
