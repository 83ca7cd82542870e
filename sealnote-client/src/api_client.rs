//! HTTP client for the note store lifecycle calls.
//!
//! Three pure request/response operations over an opaque boundary: store a
//! ciphertext blob, get it back by server-issued id, delete it. Transport
//! failures, 404s, and other rejections map onto distinct [`ClientError`]
//! variants so the UI can render each without echoing raw backend text.

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::types::{CreateNoteRequest, CreateNoteResponse, DeleteNoteRequest, ErrorBody, FetchedNote, NoteMetadata};
use reqwest::{Client, Response, StatusCode};
use sealnote_crypto::CiphertextBlob;
use tracing::debug;

/// HTTP client for the SealNote note store.
pub struct NoteStoreClient {
    client: Client,
    config: ClientConfig,
}

impl NoteStoreClient {
    pub fn new(config: ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("failed to build HTTP client");

        Self { client, config }
    }

    /// Stores a ciphertext blob, returning the server-issued note id.
    ///
    /// The id locates the blob but is useless for decryption; the
    /// identifier/password pair never travels with it.
    pub async fn create(
        &self,
        ciphertext: &CiphertextBlob,
        metadata: &NoteMetadata,
    ) -> ClientResult<String> {
        let url = format!("{}/notes", self.config.api_base_url);
        let body = CreateNoteRequest {
            ciphertext: ciphertext.as_str(),
            password_protected: metadata.password_protected,
            views: metadata.views,
            expiration_minutes: metadata.expiration_minutes,
        };

        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(transport)?;

        if !resp.status().is_success() {
            return Err(rejection(resp).await);
        }

        let data: CreateNoteResponse = decode(resp).await?;
        debug!("created note {}", data.id);
        Ok(data.id)
    }

    /// Fetches a note's ciphertext by server-issued id.
    ///
    /// 404 covers never-existed, expired, and already-consumed alike; the
    /// store does not distinguish them and neither does this client.
    pub async fn fetch(&self, id: &str) -> ClientResult<FetchedNote> {
        let url = format!("{}/notes/{id}", self.config.api_base_url);

        let resp = self.client.get(&url).send().await.map_err(transport)?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound);
        }
        if !resp.status().is_success() {
            return Err(rejection(resp).await);
        }

        decode(resp).await
    }

    /// Deletes a note, presenting an optional caller-held credential.
    ///
    /// Deleting an already-deleted note reports `NotFound`, so the call is
    /// idempotent from the caller's perspective.
    pub async fn delete(&self, id: &str, credential: Option<&str>) -> ClientResult<()> {
        let url = format!("{}/notes/{id}", self.config.api_base_url);

        let req = self.client.delete(&url);
        let req = match credential {
            Some(credential) => req.json(&DeleteNoteRequest { credential }),
            None => req,
        };

        let resp = req.send().await.map_err(transport)?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound);
        }
        if !resp.status().is_success() {
            return Err(rejection(resp).await);
        }

        debug!("deleted note {id}");
        Ok(())
    }
}

fn transport(err: reqwest::Error) -> ClientError {
    ClientError::BackendUnavailable(err.to_string())
}

/// Maps a non-success response to `BackendRejected`, tolerating a missing
/// or malformed error body.
async fn rejection(resp: Response) -> ClientError {
    let status = resp.status().as_u16();
    let message = match resp.text().await {
        Ok(text) => serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.error)
            .unwrap_or_else(|_| "Internal Server Error".to_string()),
        Err(_) => "Internal Server Error".to_string(),
    };
    ClientError::BackendRejected { status, message }
}

async fn decode<T: serde::de::DeserializeOwned>(resp: Response) -> ClientResult<T> {
    resp.json()
        .await
        .map_err(|e| ClientError::InvalidResponse(e.to_string()))
}
