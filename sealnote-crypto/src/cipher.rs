//! Authenticated encryption over note payloads.
//!
//! ChaCha20-Poly1305 with a fresh random nonce per call. The wire format is
//! `nonce ‖ ciphertext ‖ tag`, base64-encoded so the blob travels safely in
//! JSON. Decryption recovers the nonce from the prefix; the Poly1305 tag
//! covers the ciphertext, so any bit flip or wrong key fails verification.

use crate::error::{CryptoError, CryptoResult};
use crate::key::DerivedKey;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chacha20poly1305::aead::{Aead, KeyInit, OsRng};
use chacha20poly1305::{AeadCore, ChaCha20Poly1305, Key, Nonce};
use serde::{Deserialize, Serialize};

/// Nonce size in bytes (ChaCha20-Poly1305 standard).
pub const NONCE_SIZE: usize = 12;

/// Poly1305 authentication tag size in bytes.
pub const TAG_SIZE: usize = 16;

/// Minimum decoded blob size: nonce plus tag, i.e. an empty plaintext.
pub const MIN_BLOB_SIZE: usize = NONCE_SIZE + TAG_SIZE;

/// A transport-safe encrypted payload.
///
/// Base64 over `nonce ‖ ciphertext ‖ tag`. This is the only artifact that is
/// ever sent to or stored by the note store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CiphertextBlob(String);

impl CiphertextBlob {
    /// Encodes raw `nonce ‖ ciphertext ‖ tag` bytes into the wire form.
    pub fn encode(raw: &[u8]) -> Self {
        Self(STANDARD.encode(raw))
    }

    /// Wraps an already-encoded string, e.g. one fetched from the store.
    ///
    /// No validation happens here; a bad blob surfaces as [`CryptoError`]
    /// when it is decoded or opened.
    pub fn from_encoded(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Decodes back to raw bytes, rejecting invalid base64.
    pub fn decode(&self) -> CryptoResult<Vec<u8>> {
        STANDARD
            .decode(&self.0)
            .map_err(|e| CryptoError::Malformed(format!("invalid base64: {e}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CiphertextBlob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Authenticated cipher over raw byte payloads.
///
/// The engine is an explicit capability handed to the note encryptor rather
/// than reached through a global, so its one-time initialization stays
/// visible and testable.
pub trait CipherEngine: Send + Sync {
    /// Encrypts, returning `nonce ‖ ciphertext ‖ tag`.
    fn seal(&self, key: &DerivedKey, plaintext: &[u8]) -> CryptoResult<Vec<u8>>;

    /// Decrypts `nonce ‖ ciphertext ‖ tag`, verifying the tag.
    fn open(&self, key: &DerivedKey, data: &[u8]) -> CryptoResult<Vec<u8>>;
}

/// Default ChaCha20-Poly1305 engine.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChaCha20Engine;

impl ChaCha20Engine {
    pub fn new() -> Self {
        Self
    }
}

impl CipherEngine for ChaCha20Engine {
    fn seal(&self, key: &DerivedKey, plaintext: &[u8]) -> CryptoResult<Vec<u8>> {
        let cipher = ChaCha20Poly1305::new(Key::from_slice(key.as_bytes()));
        // Fresh nonce per call. Reuse under the same key would break both
        // confidentiality and integrity.
        let nonce = ChaCha20Poly1305::generate_nonce(&mut OsRng);

        let ciphertext = cipher
            .encrypt(&nonce, plaintext)
            .map_err(|e| CryptoError::Encryption(e.to_string()))?;

        let mut out = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
        out.extend_from_slice(&nonce);
        out.extend_from_slice(&ciphertext);
        Ok(out)
    }

    fn open(&self, key: &DerivedKey, data: &[u8]) -> CryptoResult<Vec<u8>> {
        // Undersized input is detectable before any cipher work and gets a
        // distinct error from a failed tag check.
        if data.len() < MIN_BLOB_SIZE {
            return Err(CryptoError::Malformed(format!(
                "ciphertext too short: {} bytes, need at least {MIN_BLOB_SIZE}",
                data.len()
            )));
        }

        let (nonce, ciphertext) = data.split_at(NONCE_SIZE);
        let cipher = ChaCha20Poly1305::new(Key::from_slice(key.as_bytes()));

        cipher
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map_err(|_| CryptoError::Authentication)
    }
}

/// Encrypts a payload into a wire-ready blob.
pub fn encrypt(key: &DerivedKey, plaintext: &[u8]) -> CryptoResult<CiphertextBlob> {
    let raw = ChaCha20Engine::new().seal(key, plaintext)?;
    Ok(CiphertextBlob::encode(&raw))
}

/// Decrypts a wire blob back to the payload bytes.
pub fn decrypt(key: &DerivedKey, blob: &CiphertextBlob) -> CryptoResult<Vec<u8>> {
    let raw = blob.decode()?;
    ChaCha20Engine::new().open(key, &raw)
}
