// src/application/repository.rs
use crate::domain::{DomainError, NewNote, Note, NoteId, ViewFilter};
use async_trait::async_trait;
use std::sync::Arc;

/// Remote notes resource. Every call either completes or surfaces an error;
/// there are no retries and no cancellation.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Fetch the notes for one view filter, in the order the resource returns them.
    async fn list_notes(&self, filter: ViewFilter) -> Result<Vec<Note>, DomainError>;

    async fn create_note(&self, note: &NewNote) -> Result<Note, DomainError>;

    /// Delete a note. Deleting an id that is already gone is not an error.
    async fn delete_note(&self, id: &NoteId) -> Result<(), DomainError>;

    /// Call the archive or unarchive endpoint depending on the target state.
    async fn set_archived(&self, id: &NoteId, archived: bool) -> Result<(), DomainError>;
}

#[async_trait]
impl<R: NoteRepository + ?Sized> NoteRepository for Arc<R> {
    async fn list_notes(&self, filter: ViewFilter) -> Result<Vec<Note>, DomainError> {
        (**self).list_notes(filter).await
    }

    async fn create_note(&self, note: &NewNote) -> Result<Note, DomainError> {
        (**self).create_note(note).await
    }

    async fn delete_note(&self, id: &NoteId) -> Result<(), DomainError> {
        (**self).delete_note(id).await
    }

    async fn set_archived(&self, id: &NoteId, archived: bool) -> Result<(), DomainError> {
        (**self).set_archived(id, archived).await
    }
}
