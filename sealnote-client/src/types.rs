//! Wire types for the note store API.

use chrono::{DateTime, Utc};
use sealnote_crypto::CiphertextBlob;
use serde::{Deserialize, Serialize};

/// Metadata attached to a note on creation.
///
/// The store enforces these; the client only declares them. Defaults match
/// the product behavior: one read, 24-hour lifetime.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NoteMetadata {
    /// Whether the ciphertext was encrypted with a password on top of the
    /// identifier. The store never learns the password itself.
    pub password_protected: bool,

    /// How many successful fetches before the store deletes the note.
    pub views: u32,

    /// Minutes until the store expires the note.
    pub expiration_minutes: u32,
}

impl Default for NoteMetadata {
    fn default() -> Self {
        Self {
            password_protected: false,
            views: 1,
            expiration_minutes: 1440,
        }
    }
}

/// Body for `POST /notes`.
#[derive(Debug, Serialize)]
pub(crate) struct CreateNoteRequest<'a> {
    pub ciphertext: &'a str,
    pub password_protected: bool,
    pub views: u32,
    pub expiration_minutes: u32,
}

/// Response from `POST /notes`.
#[derive(Debug, Deserialize)]
pub(crate) struct CreateNoteResponse {
    pub id: String,
}

/// A note as returned by `GET /notes/{id}`.
///
/// The fetch endpoint always carries the ciphertext; the rest is advisory
/// and tolerated as absent.
#[derive(Clone, Debug, Deserialize)]
pub struct FetchedNote {
    pub ciphertext: CiphertextBlob,
    #[serde(default)]
    pub password_protected: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Body for `DELETE /notes/{id}`.
#[derive(Debug, Serialize)]
pub(crate) struct DeleteNoteRequest<'a> {
    pub credential: &'a str,
}

/// Error body shape shared by all store endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}
