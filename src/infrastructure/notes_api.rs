// src/infrastructure/notes_api.rs
//! REST client for the notes API.
//!
//! Endpoints, relative to the configured base URL:
//! `GET /notes`, `GET /notes/archived`, `POST /notes`, `DELETE /notes/{id}`,
//! `POST /notes/{id}/archive`, `POST /notes/{id}/unarchive`.
//! Responses are wrapped as `{"status", "message", "data"}`.

use crate::application::NoteRepository;
use crate::domain::{DomainError, NewNote, Note, NoteId, ViewFilter};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, instrument};

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    message: Option<String>,
    data: Option<T>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct HttpNoteRepository {
    client: reqwest::Client,
    base_url: String,
}

impl HttpNoteRepository {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn list_url(&self, filter: ViewFilter) -> String {
        match filter {
            ViewFilter::Active => format!("{}/notes", self.base_url),
            ViewFilter::Archived => format!("{}/notes/archived", self.base_url),
        }
    }

    pub fn note_url(&self, id: &NoteId) -> String {
        format!("{}/notes/{}", self.base_url, id)
    }

    pub fn archive_url(&self, id: &NoteId, archived: bool) -> String {
        let action = if archived { "archive" } else { "unarchive" };
        format!("{}/{}", self.note_url(id), action)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, DomainError> {
        request
            .send()
            .await
            .map_err(|e| DomainError::Network(e.to_string()))
    }

    /// Turn a non-2xx response into a `Validation` error carrying the API's
    /// message when the body has one.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, DomainError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        Err(rejection(status, &body))
    }

    async fn parse_data<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, DomainError> {
        let response = Self::ensure_success(response).await?;
        let envelope: Envelope<T> = response
            .json()
            .await
            .map_err(|e| DomainError::Network(format!("Invalid response body: {e}")))?;
        debug!(message = ?envelope.message, "Parsed response envelope");
        envelope
            .data
            .ok_or_else(|| DomainError::Network("Response body has no data field".to_string()))
    }
}

fn rejection(status: StatusCode, body: &str) -> DomainError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|e| e.message)
        .unwrap_or_else(|| body.to_string());
    DomainError::Validation {
        status: status.as_u16(),
        message,
    }
}

#[async_trait]
impl NoteRepository for HttpNoteRepository {
    #[instrument(level = "debug", skip(self))]
    async fn list_notes(&self, filter: ViewFilter) -> Result<Vec<Note>, DomainError> {
        let response = self.send(self.client.get(self.list_url(filter))).await?;
        Self::parse_data(response).await
    }

    #[instrument(level = "debug", skip(self))]
    async fn create_note(&self, note: &NewNote) -> Result<Note, DomainError> {
        let response = self
            .send(self.client.post(self.list_url(ViewFilter::Active)).json(note))
            .await?;
        Self::parse_data(response).await
    }

    #[instrument(level = "debug", skip(self))]
    async fn delete_note(&self, id: &NoteId) -> Result<(), DomainError> {
        let response = self.send(self.client.delete(self.note_url(id))).await?;
        if response.status() == StatusCode::NOT_FOUND {
            debug!(note_id = %id, "Note already gone, treating delete as done");
            return Ok(());
        }
        Self::ensure_success(response).await?;
        Ok(())
    }

    #[instrument(level = "debug", skip(self))]
    async fn set_archived(&self, id: &NoteId, archived: bool) -> Result<(), DomainError> {
        let response = self
            .send(self.client.post(self.archive_url(id, archived)))
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }
}
