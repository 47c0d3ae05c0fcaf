// src/application/controller.rs
//! Owner of the canonical note list and the view filter.
//!
//! Every mutation goes to the remote resource first and is followed by a full
//! re-fetch of the current view. The local list is never patched in place:
//! after a successful round-trip it equals what the resource returns for the
//! current filter, and after a failed fetch it keeps its previous value.

use crate::application::note_card::NoteCard;
use crate::application::notifier::{Notification, Notifier};
use crate::application::repository::NoteRepository;
use crate::application::signal::{Signal, SignalReceiver, SignalSender};
use crate::domain::{DomainError, Note, NoteId, ViewFilter};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch notes. Please try again.";
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete note.";
pub const TOGGLE_FAILED_MESSAGE: &str = "Failed to update note status.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub notes: Vec<Note>,
    pub view_filter: ViewFilter,
    pub loading: bool,
    pub last_notification: Option<Notification>,
}

impl AppState {
    pub fn empty_message(&self) -> String {
        format!("No {} notes found", self.view_filter.label())
    }
}

pub struct AppController<R: NoteRepository, N: Notifier> {
    repository: Arc<R>,
    notifier: N,
    signals: SignalSender,
    state: AppState,
    cards: Vec<NoteCard>,
}

impl<R: NoteRepository, N: Notifier> AppController<R, N> {
    pub fn new(repository: Arc<R>, notifier: N, signals: SignalSender) -> Self {
        Self {
            repository,
            notifier,
            signals,
            state: AppState::default(),
            cards: vec![],
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view_filter(&self) -> ViewFilter {
        self.state.view_filter
    }

    /// One card per note, in the order the resource returned them.
    pub fn cards(&self) -> &[NoteCard] {
        &self.cards
    }

    pub fn card(&self, id: &NoteId) -> Option<&NoteCard> {
        self.cards.iter().find(|c| c.id() == id)
    }

    /// Fetch the current view and replace the list. On failure the list
    /// keeps its previous value.
    #[instrument(level = "debug", skip(self), fields(filter = %self.state.view_filter))]
    pub async fn refresh(&mut self) -> Result<(), DomainError> {
        self.set_loading(true);
        let result = self.repository.list_notes(self.state.view_filter).await;
        self.set_loading(false);

        match result {
            Ok(notes) => {
                debug!(count = notes.len(), "Fetched notes");
                self.state.notes = notes;
                self.render_cards();
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Error fetching notes");
                self.announce(Notification::error(FETCH_FAILED_MESSAGE));
                Err(e)
            }
        }
    }

    #[instrument(level = "debug", skip(self, note), fields(note_id = %note.id))]
    pub async fn on_note_created(&mut self, note: Note) -> Result<(), DomainError> {
        self.state.view_filter = ViewFilter::Active;
        self.refresh_after_mutation().await;
        self.announce(Notification::success("Success", "Note added successfully!"));
        Ok(())
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn on_delete_requested(&mut self, id: NoteId) -> Result<(), DomainError> {
        self.set_loading(true);
        let result = self.repository.delete_note(&id).await;
        self.set_loading(false);

        if let Err(e) = result {
            error!(error = %e, note_id = %id, "Error deleting note");
            self.announce(Notification::error(DELETE_FAILED_MESSAGE));
            return Err(e);
        }

        info!(note_id = %id, "Note deleted");
        self.refresh_after_mutation().await;
        self.announce(Notification::success("Deleted", "Note deleted successfully!"));
        Ok(())
    }

    /// Toggle the archived flag of a note in the current list.
    ///
    /// The endpoint is chosen from the locally held flag, which can be stale
    /// if the note changed remotely since the last refresh.
    #[instrument(level = "debug", skip(self))]
    pub async fn on_archive_toggle_requested(&mut self, id: NoteId) -> Result<(), DomainError> {
        let Some(currently_archived) = self
            .state
            .notes
            .iter()
            .find(|n| n.id == id)
            .map(|n| n.archived)
        else {
            warn!(note_id = %id, "Archive toggle for a note not in the current list");
            self.announce(Notification::error(TOGGLE_FAILED_MESSAGE));
            return Err(DomainError::NoteNotFound(id));
        };

        let target = !currently_archived;
        self.set_loading(true);
        let result = self.repository.set_archived(&id, target).await;
        self.set_loading(false);

        if let Err(e) = result {
            error!(error = %e, note_id = %id, "Error archiving note");
            self.announce(Notification::error(TOGGLE_FAILED_MESSAGE));
            return Err(e);
        }

        info!(note_id = %id, archived = target, "Note archive state changed");
        self.refresh_after_mutation().await;
        let message = if target {
            "Note archived!"
        } else {
            "Note unarchived!"
        };
        self.announce(Notification::success("Success", message));
        Ok(())
    }

    pub async fn on_view_filter_changed(&mut self, filter: ViewFilter) -> Result<(), DomainError> {
        debug!(%filter, "View filter changed");
        self.state.view_filter = filter;
        self.refresh().await
    }

    pub async fn handle(&mut self, signal: Signal) -> Result<(), DomainError> {
        match signal {
            Signal::ShowActive => self.on_view_filter_changed(ViewFilter::Active).await,
            Signal::ShowArchived => self.on_view_filter_changed(ViewFilter::Archived).await,
            Signal::NoteCreated(note) => self.on_note_created(note).await,
            Signal::DeleteRequested(id) => self.on_delete_requested(id).await,
            Signal::ArchiveToggleRequested(id) => self.on_archive_toggle_requested(id).await,
        }
    }

    /// Handle every queued signal, in order. A failure does not stop the
    /// remaining signals; the last failure is returned after all are handled.
    pub async fn process_pending(
        &mut self,
        receiver: &mut SignalReceiver,
    ) -> Result<usize, DomainError> {
        let mut handled = 0;
        let mut last_error = None;
        while let Some(signal) = receiver.try_recv() {
            if let Err(e) = self.handle(signal).await {
                debug!(error = %e, "Signal handling failed");
                last_error = Some(e);
            }
            handled += 1;
        }
        match last_error {
            Some(e) => Err(e),
            None => Ok(handled),
        }
    }

    /// The mutation already went through; a failed fetch here has been
    /// announced by `refresh` and leaves the previous list in place.
    async fn refresh_after_mutation(&mut self) {
        if let Err(e) = self.refresh().await {
            warn!(error = %e, "Refresh after mutation failed, list may be stale");
        }
    }

    fn set_loading(&mut self, active: bool) {
        self.state.loading = active;
        self.notifier.loading(active);
    }

    fn render_cards(&mut self) {
        self.cards = self
            .state
            .notes
            .iter()
            .map(|note| NoteCard::new(note, self.signals.clone()))
            .collect();
    }

    fn announce(&mut self, notification: Notification) {
        self.state.last_notification = Some(notification.clone());
        self.notifier.notify(notification);
    }
}
