//! Note encryption service.
//!
//! Ties identifier generation, key derivation, and the cipher engine into
//! the two operations the rest of the app calls: `encrypt_note` and
//! `decrypt_note`. The engine may be slow to construct, so it sits behind a
//! one-shot async initialization guard: concurrent first callers share a
//! single factory run, and a failed run leaves the guard empty so a later
//! call can retry.

use crate::cipher::{ChaCha20Engine, CipherEngine, CiphertextBlob};
use crate::error::{CryptoError, CryptoResult};
use crate::{identifier, key};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Future produced by an [`EngineFactory`].
pub type EngineFuture = Pin<Box<dyn Future<Output = CryptoResult<Arc<dyn CipherEngine>>> + Send>>;

/// Async constructor for a cipher engine, run at most once per encryptor.
pub type EngineFactory = Box<dyn Fn() -> EngineFuture + Send + Sync>;

/// Client-side note encryption service.
///
/// Stateless apart from the one-time engine guard; encrypt and decrypt calls
/// are independent and safe to run concurrently once initialization has
/// completed.
pub struct NoteEncryptor {
    engine: OnceCell<Arc<dyn CipherEngine>>,
    factory: EngineFactory,
}

impl NoteEncryptor {
    /// Creates an encryptor backed by the default ChaCha20-Poly1305 engine.
    pub fn new() -> Self {
        Self::with_engine_factory(Box::new(|| {
            Box::pin(async { Ok(Arc::new(ChaCha20Engine::new()) as Arc<dyn CipherEngine>) })
        }))
    }

    /// Creates an encryptor with a custom engine factory.
    ///
    /// The factory runs lazily on first use. All concurrent first callers
    /// await the same run; none proceeds before it completes.
    pub fn with_engine_factory(factory: EngineFactory) -> Self {
        Self {
            engine: OnceCell::new(),
            factory,
        }
    }

    /// Forces engine initialization. Idempotent; safe to call repeatedly
    /// and concurrently.
    pub async fn init(&self) -> CryptoResult<()> {
        self.engine().await.map(|_| ())
    }

    async fn engine(&self) -> CryptoResult<&Arc<dyn CipherEngine>> {
        self.engine.get_or_try_init(|| (self.factory)()).await
    }

    /// Generates a fresh random note identifier.
    pub fn generate_identifier(&self) -> String {
        identifier::generate_identifier()
    }

    /// Returns the hex digest of a password, for possession checks that must
    /// stay consistent with key derivation.
    pub fn hash_password(&self, password: &str) -> String {
        key::hash_password(password)
    }

    /// Encrypts a note.
    ///
    /// Two calls with identical inputs yield different blobs: the nonce is
    /// random per call. An empty password means the key derives from the
    /// identifier alone.
    pub async fn encrypt_note(
        &self,
        text: &str,
        identifier: &str,
        password: &str,
    ) -> CryptoResult<CiphertextBlob> {
        let derived = key::derive_key(identifier, password)?;
        let engine = self.engine().await?;
        let raw = engine.seal(&derived, text.as_bytes())?;
        Ok(CiphertextBlob::encode(&raw))
    }

    /// Decrypts a note.
    ///
    /// Wrong identifier, wrong password, and tampered data all surface as
    /// the same [`CryptoError::Authentication`]; the caller cannot tell
    /// which factor was wrong.
    pub async fn decrypt_note(
        &self,
        blob: &CiphertextBlob,
        identifier: &str,
        password: &str,
    ) -> CryptoResult<String> {
        let derived = key::derive_key(identifier, password)?;
        let engine = self.engine().await?;
        let raw = blob.decode()?;
        let plaintext = engine.open(&derived, &raw)?;
        String::from_utf8(plaintext)
            .map_err(|_| CryptoError::Malformed("decrypted payload is not valid UTF-8".into()))
    }
}

impl Default for NoteEncryptor {
    fn default() -> Self {
        Self::new()
    }
}
