// src/application/note_form.rs
use crate::application::notifier::{Notification, Notifier};
use crate::application::repository::NoteRepository;
use crate::application::signal::{Signal, SignalSender};
use crate::domain::validation::{body_is_valid, title_is_valid, validate};
use crate::domain::{DomainError, FormValidation, NewNote, Note};
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

pub const ADD_FAILED_MESSAGE: &str = "Failed to add note. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Clean,
    Editing,
    Submitting,
}

/// Inline feedback for a single input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    Pristine,
    Valid,
    Invalid,
}

impl FieldState {
    fn from_valid(valid: bool) -> Self {
        if valid {
            Self::Valid
        } else {
            Self::Invalid
        }
    }

    pub fn is_invalid(self) -> bool {
        self == Self::Invalid
    }
}

/// Snapshot of the form's inputs and feedback, for presenters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormView<'a> {
    pub title: &'a str,
    pub body: &'a str,
    pub title_state: FieldState,
    pub body_state: FieldState,
}

impl Default for FormView<'_> {
    fn default() -> Self {
        Self {
            title: "",
            body: "",
            title_state: FieldState::Pristine,
            body_state: FieldState::Pristine,
        }
    }
}

/// Title/body input pair. The only place notes are created.
///
/// `clean -> editing` on input, `editing -> submitting` on a valid submit,
/// then back to `clean` with empty fields on success or to `editing` with the
/// fields kept on failure.
pub struct NoteForm<R: NoteRepository, N: Notifier> {
    repository: Arc<R>,
    notifier: N,
    signals: SignalSender,
    title: String,
    body: String,
    state: FormState,
    title_state: FieldState,
    body_state: FieldState,
}

impl<R: NoteRepository, N: Notifier> NoteForm<R, N> {
    pub fn new(repository: Arc<R>, notifier: N, signals: SignalSender) -> Self {
        Self {
            repository,
            notifier,
            signals,
            title: String::new(),
            body: String::new(),
            state: FormState::Clean,
            title_state: FieldState::Pristine,
            body_state: FieldState::Pristine,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn title_state(&self) -> FieldState {
        self.title_state
    }

    pub fn body_state(&self) -> FieldState {
        self.body_state
    }

    /// Keystroke on the title input; only updates feedback.
    pub fn input_title(&mut self, value: impl Into<String>) -> FieldState {
        self.title = value.into();
        self.state = FormState::Editing;
        self.title_state = FieldState::from_valid(title_is_valid(&self.title));
        self.title_state
    }

    pub fn input_body(&mut self, value: impl Into<String>) -> FieldState {
        self.body = value.into();
        self.state = FormState::Editing;
        self.body_state = FieldState::from_valid(body_is_valid(&self.body));
        self.body_state
    }

    pub fn view(&self) -> FormView<'_> {
        FormView {
            title: &self.title,
            body: &self.body,
            title_state: self.title_state,
            body_state: self.body_state,
        }
    }

    pub fn validation(&self) -> FormValidation {
        validate(&self.title, &self.body)
    }

    /// Validate both fields and, if they pass, create the note.
    ///
    /// No request is issued unless both fields are valid. On success the
    /// fields are cleared and `NoteCreated` is emitted; the form never
    /// refreshes any list itself.
    #[instrument(level = "debug", skip(self), fields(title = %self.title))]
    pub async fn submit(&mut self) -> Result<Note, DomainError> {
        let validation = self.validation();
        self.title_state = FieldState::from_valid(validation.title_valid);
        self.body_state = FieldState::from_valid(validation.body_valid);

        if !validation.is_valid() {
            debug!(?validation, "Submission blocked by client-side validation");
            self.state = FormState::Editing;
            return Err(DomainError::ClientValidation(validation));
        }

        self.state = FormState::Submitting;
        let payload = NewNote::new(self.title.clone(), self.body.clone());
        match self.repository.create_note(&payload).await {
            Ok(note) => {
                info!(note_id = %note.id, "Note created");
                self.reset();
                self.signals.emit(Signal::NoteCreated(note.clone()));
                Ok(note)
            }
            Err(e) => {
                error!(error = %e, "Error adding note");
                self.state = FormState::Editing;
                self.notifier.notify(Notification::error(ADD_FAILED_MESSAGE));
                Err(e)
            }
        }
    }

    pub fn reset(&mut self) {
        self.title.clear();
        self.body.clear();
        self.state = FormState::Clean;
        self.title_state = FieldState::Pristine;
        self.body_state = FieldState::Pristine;
    }
}
