use notesview::application::App;
use notesview::domain::{NoteId, ViewFilter};
use notesview::util::testing::{sample_note, MockNoteRepository, RecordingNotifier};
use std::sync::Arc;

async fn started_app(
    mock: MockNoteRepository,
    filter: ViewFilter,
) -> App<MockNoteRepository, RecordingNotifier> {
    let mut app = App::new(Arc::new(mock), RecordingNotifier::new());
    app.start(filter).await.expect("Start should succeed");
    app
}

#[tokio::test]
async fn given_active_notes_when_rendering_page_then_contains_grid_and_highlighted_tab() {
    // Arrange
    let app = started_app(
        MockNoteRepository::builder()
            .with_note(sample_note("notes-1", "Groceries", false))
            .with_note(sample_note("notes-2", "Hidden", true))
            .build(),
        ViewFilter::Active,
    )
    .await;

    // Act
    let html = app.render_html();

    // Assert
    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("<title>Notes App</title>"));
    assert!(html.contains(r#"<button id="showActive" class="active">"#));
    assert!(html.contains(r#"data-id="notes-1""#));
    assert!(!html.contains(r#"data-id="notes-2""#));
    assert!(html.contains("Thursday, 28 July 2022"));
    assert!(html.contains(">Archive</button>"));
}

#[tokio::test]
async fn given_empty_archived_view_when_rendering_page_then_shows_empty_state() {
    // Arrange
    let app = started_app(MockNoteRepository::builder().build(), ViewFilter::Archived).await;

    // Act
    let html = app.render_html();

    // Assert
    assert!(html.contains(r#"<div class="empty-state"><h2>No archived notes found</h2></div>"#));
    assert!(html.contains(r#"<button id="showArchived" class="active">"#));
    assert!(!html.contains("notesContainer"));
}

#[tokio::test]
async fn given_markup_in_title_when_rendering_page_then_escapes_it() {
    // Arrange
    let app = started_app(
        MockNoteRepository::builder()
            .with_note(sample_note("notes-x", "<script>alert(1)</script>", false))
            .build(),
        ViewFilter::Active,
    )
    .await;

    // Act
    let html = app.render_html();

    // Assert
    assert!(!html.contains("<script>alert(1)</script>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
}

#[tokio::test]
async fn given_archived_note_when_rendering_text_then_marks_it_archived() {
    // Arrange
    let app = started_app(
        MockNoteRepository::builder()
            .with_note(sample_note("notes-9", "Old news", true))
            .build(),
        ViewFilter::Archived,
    )
    .await;

    // Act
    let text = app.render_text();

    // Assert
    assert!(text.starts_with("notes-9 [archived]\n  Old news\n"));
    assert!(text.contains("    Body of Old news, long enough"));
}

#[tokio::test]
async fn given_deleted_note_when_rendering_page_then_shows_success_notification() {
    // Arrange
    let mut app = started_app(
        MockNoteRepository::builder()
            .with_note(sample_note("notes-1", "Doomed", false))
            .build(),
        ViewFilter::Active,
    )
    .await;

    // Act
    app.delete(&NoteId::from("notes-1"))
        .await
        .expect("Delete should succeed");
    let html = app.render_html();

    // Assert
    assert!(html.contains(
        r#"<div class="notification success" role="alert"><strong>Deleted</strong> Note deleted successfully!</div>"#
    ));
    assert!(html.contains("No active notes found"));
}
