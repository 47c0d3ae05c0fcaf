// src/domain/error.rs
use crate::domain::validation::FormValidation;
use crate::domain::NoteId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Transport failure or a body that could not be decoded.
    #[error("Network error: {0}")]
    Network(String),
    /// The notes API answered with a non-2xx status.
    #[error("Request rejected ({status}): {message}")]
    Validation { status: u16, message: String },
    /// Local length checks failed; nothing was sent.
    #[error("Invalid note: {0}")]
    ClientValidation(FormValidation),
    #[error("Note not found in current view: {0}")]
    NoteNotFound(NoteId),
}
