//! Client-side encryption layer for SealNote.
//!
//! Provides everything needed to turn a note into an opaque blob before it
//! ever leaves the device:
//! - SHA-256 based key derivation from a short note identifier and an
//!   optional password
//! - ChaCha20-Poly1305 authenticated encryption with a base64 wire encoding
//! - A small orchestration service (`NoteEncryptor`) with a one-shot,
//!   concurrency-safe engine initialization
//!
//! # Architecture
//!
//! The key model is deliberately symmetric and client-derived:
//!
//! 1. **Identifier**: a fresh 6-character random string generated per note.
//!    It is shared alongside the note link and doubles as the per-note salt,
//!    so identical passwords never produce identical keys across notes.
//!
//! 2. **Password** (optional): hashed to a fixed-length digest before it
//!    enters derivation, so password length never shapes the key input.
//!
//! The derived key exists only in process memory for the duration of one
//! encrypt or decrypt call and is zeroized on drop. Nothing that crosses the
//! network — the ciphertext blob or the server-issued note id — is usable to
//! reconstruct it.

pub mod cipher;
pub mod encryptor;
pub mod error;
pub mod identifier;
pub mod key;

pub use cipher::{
    decrypt, encrypt, ChaCha20Engine, CipherEngine, CiphertextBlob, MIN_BLOB_SIZE, NONCE_SIZE,
    TAG_SIZE,
};
pub use encryptor::{EngineFactory, EngineFuture, NoteEncryptor};
pub use error::{CryptoError, CryptoResult};
pub use identifier::{generate_identifier, IDENTIFIER_ALPHABET, IDENTIFIER_LEN};
pub use key::{derive_key, hash_password, DerivedKey, KEY_SIZE};
