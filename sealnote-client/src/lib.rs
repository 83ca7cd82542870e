//! HTTP client for the SealNote note store.
//!
//! The store is a dumb, key-addressed blob backend: it holds ciphertext it
//! cannot read and hands it back by server-issued id. This crate covers the
//! three lifecycle calls — create, fetch, delete — plus the error mapping
//! the UI relies on (`NotFound` vs `BackendRejected` vs transport failure).
//!
//! No retries and no caching happen here; the store is the sole source of
//! truth for note existence and callers decide their own retry policy.

pub mod api_client;
pub mod config;
pub mod error;
pub mod types;

pub use api_client::NoteStoreClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use types::{FetchedNote, NoteMetadata};
