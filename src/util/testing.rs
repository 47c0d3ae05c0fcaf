// src/util/testing.rs

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::collections::HashSet;
use std::env;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{Notification, Notifier, NoteRepository};
use crate::domain::{DomainError, NewNote, Note, NoteId, ViewFilter};

/// Every request the mock received, in call order.
#[derive(Debug, Clone, PartialEq)]
pub enum RepositoryCall {
    List(ViewFilter),
    Create(NewNote),
    Delete(NoteId),
    SetArchived(NoteId, bool),
}

/// Shared in-memory stand-in for the remote notes API.
///
/// Holds a note store that behaves like the real resource (list by filter,
/// create, delete, archive toggles) and records every call so tests can
/// assert on the exact requests issued.
///
/// # Examples
///
/// ```
/// use notesview::util::testing::{sample_note, MockNoteRepository};
///
/// let mock = MockNoteRepository::builder()
///     .with_note(sample_note("notes-1", "Groceries", false))
///     .with_delete_failure("notes-1")
///     .build();
/// ```
pub struct MockNoteRepository {
    notes: Mutex<Vec<Note>>,
    calls: Mutex<Vec<RepositoryCall>>,
    list_failure: AtomicBool,
    create_rejection: Option<(u16, String)>,
    delete_failures: HashSet<NoteId>,
    archive_failures: HashSet<NoteId>,
    next_id: AtomicUsize,
}

impl MockNoteRepository {
    pub fn builder() -> MockNoteRepositoryBuilder {
        MockNoteRepositoryBuilder::new()
    }

    pub fn calls(&self) -> Vec<RepositoryCall> {
        self.calls.lock().expect("mock lock poisoned").clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().expect("mock lock poisoned").clear();
    }

    /// Count of list requests, per filter when given.
    pub fn list_calls(&self, filter: Option<ViewFilter>) -> usize {
        self.calls()
            .iter()
            .filter(|c| match (c, filter) {
                (RepositoryCall::List(_), None) => true,
                (RepositoryCall::List(f), Some(wanted)) => *f == wanted,
                _ => false,
            })
            .count()
    }

    /// Make subsequent list requests fail (or succeed again).
    pub fn set_list_failure(&self, fail: bool) {
        self.list_failure.store(fail, Ordering::SeqCst);
    }

    pub fn stored_notes(&self) -> Vec<Note> {
        self.notes.lock().expect("mock lock poisoned").clone()
    }

    fn record(&self, call: RepositoryCall) {
        self.calls.lock().expect("mock lock poisoned").push(call);
    }
}

#[async_trait]
impl NoteRepository for MockNoteRepository {
    async fn list_notes(&self, filter: ViewFilter) -> Result<Vec<Note>, DomainError> {
        self.record(RepositoryCall::List(filter));
        if self.list_failure.load(Ordering::SeqCst) {
            return Err(DomainError::Network("connection refused".to_string()));
        }
        Ok(self
            .stored_notes()
            .into_iter()
            .filter(|n| n.archived == filter.is_archived())
            .collect())
    }

    async fn create_note(&self, note: &NewNote) -> Result<Note, DomainError> {
        self.record(RepositoryCall::Create(note.clone()));
        if let Some((status, message)) = &self.create_rejection {
            return Err(DomainError::Validation {
                status: *status,
                message: message.clone(),
            });
        }
        let n = self.next_id.fetch_add(1, Ordering::SeqCst);
        let created = Note {
            id: NoteId::new(format!("notes-created-{n}")),
            title: note.title.clone(),
            body: note.body.clone(),
            created_at: fixed_timestamp(),
            archived: false,
        };
        self.notes
            .lock()
            .expect("mock lock poisoned")
            .push(created.clone());
        Ok(created)
    }

    async fn delete_note(&self, id: &NoteId) -> Result<(), DomainError> {
        self.record(RepositoryCall::Delete(id.clone()));
        if self.delete_failures.contains(id) {
            return Err(DomainError::Network("connection reset".to_string()));
        }
        self.notes
            .lock()
            .expect("mock lock poisoned")
            .retain(|n| &n.id != id);
        Ok(())
    }

    async fn set_archived(&self, id: &NoteId, archived: bool) -> Result<(), DomainError> {
        self.record(RepositoryCall::SetArchived(id.clone(), archived));
        if self.archive_failures.contains(id) {
            return Err(DomainError::Network("connection reset".to_string()));
        }
        let mut notes = self.notes.lock().expect("mock lock poisoned");
        match notes.iter_mut().find(|n| &n.id == id) {
            Some(note) => {
                note.archived = archived;
                Ok(())
            }
            None => Err(DomainError::Validation {
                status: 404,
                message: "Catatan tidak ditemukan".to_string(),
            }),
        }
    }
}

/// Builder for MockNoteRepository
///
/// Provides a fluent interface for configuring mock behavior.
pub struct MockNoteRepositoryBuilder {
    notes: Vec<Note>,
    list_failure: bool,
    create_rejection: Option<(u16, String)>,
    delete_failures: HashSet<NoteId>,
    archive_failures: HashSet<NoteId>,
}

impl MockNoteRepositoryBuilder {
    pub fn new() -> Self {
        Self {
            notes: vec![],
            list_failure: false,
            create_rejection: None,
            delete_failures: HashSet::new(),
            archive_failures: HashSet::new(),
        }
    }

    /// Seed the store with a note
    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }

    /// Every list request fails with a network error
    pub fn with_list_failure(mut self) -> Self {
        self.list_failure = true;
        self
    }

    /// Create requests are rejected with the given status and message
    pub fn with_create_rejection(mut self, status: u16, message: &str) -> Self {
        self.create_rejection = Some((status, message.to_string()));
        self
    }

    /// Deleting this id fails with a network error
    pub fn with_delete_failure(mut self, id: &str) -> Self {
        self.delete_failures.insert(NoteId::from(id));
        self
    }

    /// Archiving or unarchiving this id fails with a network error
    pub fn with_archive_failure(mut self, id: &str) -> Self {
        self.archive_failures.insert(NoteId::from(id));
        self
    }

    pub fn build(self) -> MockNoteRepository {
        MockNoteRepository {
            notes: Mutex::new(self.notes),
            calls: Mutex::new(vec![]),
            list_failure: AtomicBool::new(self.list_failure),
            create_rejection: self.create_rejection,
            delete_failures: self.delete_failures,
            archive_failures: self.archive_failures,
            next_id: AtomicUsize::new(1),
        }
    }
}

impl Default for MockNoteRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Notifier that keeps every notification for later inspection.
/// Clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    notifications: Arc<Mutex<Vec<Notification>>>,
    loading: Arc<Mutex<Vec<bool>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().expect("notifier lock poisoned").clone()
    }

    pub fn last(&self) -> Option<Notification> {
        self.notifications().last().cloned()
    }

    /// Every loading indicator switch, in order.
    pub fn loading_transitions(&self) -> Vec<bool> {
        self.loading.lock().expect("notifier lock poisoned").clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications
            .lock()
            .expect("notifier lock poisoned")
            .push(notification);
    }

    fn loading(&self, active: bool) {
        self.loading
            .lock()
            .expect("notifier lock poisoned")
            .push(active);
    }
}

pub fn fixed_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2022, 7, 28, 10, 3, 12)
        .single()
        .expect("valid fixed timestamp")
}

pub fn sample_note(id: &str, title: &str, archived: bool) -> Note {
    Note {
        id: NoteId::from(id),
        title: title.to_string(),
        body: format!("Body of {title}, long enough"),
        created_at: fixed_timestamp(),
        archived,
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["hyper", "h2", "reqwest", "mio", "axum"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[ctor::ctor]
    fn init() {
        init_test_setup().expect("Failed to initialize test setup");
    }

    #[tokio::test]
    async fn given_mixed_notes_when_listing_by_filter_then_splits_on_archived_flag() {
        let mock = MockNoteRepository::builder()
            .with_note(sample_note("a", "Active one", false))
            .with_note(sample_note("b", "Archived one", true))
            .build();

        let active = mock.list_notes(ViewFilter::Active).await.expect("List should succeed");
        let archived = mock.list_notes(ViewFilter::Archived).await.expect("List should succeed");

        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, NoteId::from("a"));
        assert_eq!(archived.len(), 1);
        assert_eq!(archived[0].id, NoteId::from("b"));
        assert_eq!(mock.list_calls(None), 2);
        assert_eq!(mock.list_calls(Some(ViewFilter::Archived)), 1);
    }

    #[tokio::test]
    async fn given_create_rejection_configured_when_creating_then_returns_validation_error() {
        let mock = MockNoteRepository::builder()
            .with_create_rejection(400, "Gagal menambahkan catatan")
            .build();

        let result = mock.create_note(&NewNote::new("Title", "Body long enough")).await;

        assert!(matches!(result, Err(DomainError::Validation { status: 400, .. })));
        assert!(mock.stored_notes().is_empty());
    }

    #[tokio::test]
    async fn given_missing_note_when_deleting_then_succeeds() {
        let mock = MockNoteRepository::builder().build();

        let result = mock.delete_note(&NoteId::from("gone")).await;

        assert!(result.is_ok());
        assert_eq!(mock.calls(), vec![RepositoryCall::Delete(NoteId::from("gone"))]);
    }

    #[test]
    fn given_recording_notifier_clone_when_notifying_then_shares_record() {
        let notifier = RecordingNotifier::new();
        let clone = notifier.clone();

        clone.notify(Notification::error("Failed to delete note."));

        assert_eq!(notifier.notifications().len(), 1);
        assert!(notifier.last().expect("Notification recorded").is_error());
    }
}
