// src/application/app.rs
//! The assembled notes view: app bar, form and controller sharing one
//! signal channel.
//!
//! Leaf components only emit signals. Nothing changes in the controller until
//! [`App::dispatch`] drains the channel, so every entry point here is
//! "act on a component, then dispatch".

use crate::application::app_bar::AppBar;
use crate::application::controller::AppController;
use crate::application::note_card::NoteCard;
use crate::application::note_form::NoteForm;
use crate::application::notifier::Notifier;
use crate::application::repository::NoteRepository;
use crate::application::signal::{self, SignalReceiver};
use crate::domain::{DomainError, Note, NoteId, ViewFilter};
use crate::ports::{HtmlPresenter, TextPresenter};
use std::sync::Arc;
use tracing::debug;

pub struct App<R: NoteRepository, N: Notifier + Clone> {
    bar: AppBar,
    form: NoteForm<R, N>,
    controller: AppController<R, N>,
    receiver: SignalReceiver,
}

impl<R: NoteRepository, N: Notifier + Clone> App<R, N> {
    pub fn new(repository: Arc<R>, notifier: N) -> Self {
        let (sender, receiver) = signal::channel();
        Self {
            bar: AppBar::new(sender.clone()),
            form: NoteForm::new(repository.clone(), notifier.clone(), sender.clone()),
            controller: AppController::new(repository, notifier, sender),
            receiver,
        }
    }

    pub fn bar(&self) -> &AppBar {
        &self.bar
    }

    pub fn form(&self) -> &NoteForm<R, N> {
        &self.form
    }

    pub fn controller(&self) -> &AppController<R, N> {
        &self.controller
    }

    /// Initial load of the given view.
    pub async fn start(&mut self, filter: ViewFilter) -> Result<(), DomainError> {
        self.bar.sync(filter);
        self.controller.on_view_filter_changed(filter).await
    }

    /// Hand every pending signal to the controller, then bring the app bar
    /// highlight in line with the controller's filter.
    pub async fn dispatch(&mut self) -> Result<usize, DomainError> {
        let result = self.controller.process_pending(&mut self.receiver).await;
        self.bar.sync(self.controller.view_filter());
        result
    }

    pub async fn show(&mut self, filter: ViewFilter) -> Result<(), DomainError> {
        self.bar.click(filter);
        self.dispatch().await.map(|_| ())
    }

    /// Type into the form and submit it.
    pub async fn submit_note(&mut self, title: &str, body: &str) -> Result<Note, DomainError> {
        self.form.input_title(title);
        self.form.input_body(body);
        let note = self.form.submit().await?;
        self.dispatch().await?;
        Ok(note)
    }

    pub async fn delete(&mut self, id: &NoteId) -> Result<(), DomainError> {
        self.shown_card(id)?.request_delete();
        self.dispatch().await.map(|_| ())
    }

    pub async fn toggle_archive(&mut self, id: &NoteId) -> Result<(), DomainError> {
        self.shown_card(id)?.request_archive_toggle();
        self.dispatch().await.map(|_| ())
    }

    pub fn render_text(&self) -> String {
        TextPresenter::new().render(self.controller.state(), self.controller.cards())
    }

    pub fn render_html(&self) -> String {
        HtmlPresenter::new().render_page(
            self.bar.highlighted(),
            &self.form.view(),
            self.controller.state(),
            self.controller.cards(),
        )
    }

    fn shown_card(&self, id: &NoteId) -> Result<&NoteCard, DomainError> {
        self.controller.card(id).ok_or_else(|| {
            debug!(note_id = %id, filter = %self.controller.view_filter(), "No card for note");
            DomainError::NoteNotFound(id.clone())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::{sample_note, MockNoteRepository, RecordingNotifier, RepositoryCall};

    fn app_with(
        mock: MockNoteRepository,
    ) -> (App<MockNoteRepository, RecordingNotifier>, Arc<MockNoteRepository>) {
        let repo = Arc::new(mock);
        (App::new(repo.clone(), RecordingNotifier::new()), repo)
    }

    #[tokio::test]
    async fn given_archived_view_when_submitting_note_then_creates_once_and_shows_active() {
        // Arrange
        let (mut app, repo) = app_with(MockNoteRepository::builder().build());
        app.start(ViewFilter::Archived).await.expect("Start should succeed");
        repo.clear_calls();

        // Act
        let note = app
            .submit_note("Groceries", "Milk, eggs, bread")
            .await
            .expect("Submit should succeed");

        // Assert
        assert_eq!(repo.calls().len(), 2);
        assert!(matches!(repo.calls()[0], RepositoryCall::Create(_)));
        assert_eq!(repo.calls()[1], RepositoryCall::List(ViewFilter::Active));
        assert_eq!(app.bar().highlighted(), ViewFilter::Active);
        assert_eq!(app.controller().state().notes, vec![note]);
    }

    #[tokio::test]
    async fn given_note_not_shown_when_deleting_then_returns_not_found_without_request() {
        let (mut app, repo) = app_with(
            MockNoteRepository::builder()
                .with_note(sample_note("a", "Archived", true))
                .build(),
        );
        app.start(ViewFilter::Active).await.expect("Start should succeed");
        repo.clear_calls();

        let result = app.delete(&NoteId::from("a")).await;

        assert!(matches!(result, Err(DomainError::NoteNotFound(_))));
        assert!(repo.calls().is_empty());
    }

    #[tokio::test]
    async fn given_started_app_when_rendering_html_then_contains_cards() {
        let (mut app, _repo) = app_with(
            MockNoteRepository::builder()
                .with_note(sample_note("a", "Groceries", false))
                .build(),
        );
        app.start(ViewFilter::Active).await.expect("Start should succeed");

        let html = app.render_html();

        assert!(html.contains(r#"data-id="a""#));
        assert!(html.contains("<h2>Groceries</h2>"));
    }
}
