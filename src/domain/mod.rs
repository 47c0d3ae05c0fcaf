// src/domain/mod.rs
pub mod error;
pub mod note;
pub mod validation;

pub use error::DomainError;
pub use note::{NewNote, Note, NoteId, ViewFilter};
pub use validation::{validate, FormValidation};
