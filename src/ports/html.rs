// src/ports/html.rs
use crate::application::app_bar::APP_TITLE;
use crate::application::note_form::FormView;
use crate::application::{AppState, FieldState, NoteCard, Notification, NotificationLevel};
use crate::domain::validation::{BODY_ERROR_MESSAGE, TITLE_ERROR_MESSAGE};
use crate::domain::ViewFilter;
use html_escape::{encode_double_quoted_attribute, encode_text};
use tracing::instrument;

const STYLE: &str = r#"
        :root {
            --primary-color: #2c3e50;
            --secondary-color: #3498db;
            --success-color: #2ecc71;
            --danger-color: #e74c3c;
            --card-background: #ffffff;
            --text-color: #333333;
        }
        body {
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            margin: 0;
            background-color: #f5f5f5;
            color: var(--text-color);
        }
        body.loading { cursor: progress; opacity: 0.7; }
        header.app-bar {
            background-color: var(--primary-color);
            color: white;
            padding: 1rem;
        }
        .container {
            max-width: 1200px;
            margin: 0 auto;
            display: flex;
            justify-content: space-between;
            align-items: center;
        }
        header button {
            background: none;
            border: none;
            color: white;
            padding: 0.5rem 1rem;
            border-radius: 4px;
        }
        header button.active { background-color: var(--secondary-color); }
        main { max-width: 1200px; margin: 2rem auto; padding: 0 1rem; }
        form.note-form {
            display: flex;
            flex-direction: column;
            gap: 1rem;
            background: var(--card-background);
            padding: 1.5rem;
            border-radius: 8px;
            margin-bottom: 2rem;
        }
        .form-group { display: flex; flex-direction: column; gap: 0.5rem; }
        .invalid { border-color: var(--danger-color); }
        .error { color: var(--danger-color); font-size: 0.875rem; }
        .notes-grid {
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
            gap: 1.5rem;
        }
        .note-card {
            background: var(--card-background);
            border-radius: 12px;
            padding: 1.5rem;
            box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
            display: flex;
            flex-direction: column;
        }
        .note-card h2 { color: var(--primary-color); font-size: 1.25rem; margin: 0 0 0.5rem; }
        .date { color: #666; font-size: 0.875rem; font-style: italic; margin-bottom: 1rem; }
        .body { line-height: 1.6; white-space: pre-line; flex-grow: 1; margin-bottom: 1.5rem; }
        .actions { display: flex; gap: 0.75rem; }
        .actions button { flex: 1; border: none; border-radius: 8px; color: white; padding: 0.625rem 1rem; }
        .archive { background-color: var(--secondary-color); }
        .delete { background-color: var(--danger-color); }
        .empty-state { text-align: center; color: #666; }
        .notification { padding: 1rem; border-radius: 8px; margin-bottom: 1.5rem; color: white; }
        .notification.success { background-color: var(--success-color); }
        .notification.error { background-color: var(--danger-color); }
"#;

/// Renders the whole notes view as one standalone HTML page.
#[derive(Debug, Default)]
pub struct HtmlPresenter;

impl HtmlPresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn render_app_bar(&self, highlighted: ViewFilter) -> String {
        let class_for = |filter: ViewFilter| if filter == highlighted { r#" class="active""# } else { "" };
        format!(
            r#"<header class="app-bar">
    <div class="container">
        <h1>{title}</h1>
        <nav>
            <button id="showActive"{active}>Active Notes</button>
            <button id="showArchived"{archived}>Archived Notes</button>
        </nav>
    </div>
</header>"#,
            title = APP_TITLE,
            active = class_for(ViewFilter::Active),
            archived = class_for(ViewFilter::Archived),
        )
    }

    pub fn render_form(&self, form: &FormView<'_>) -> String {
        let field = |state: FieldState, message: &str| -> (&'static str, String) {
            if state.is_invalid() {
                (
                    r#" class="invalid""#,
                    format!(r#"<span class="error">{}</span>"#, message),
                )
            } else {
                ("", String::new())
            }
        };
        let (title_class, title_error) = field(form.title_state, TITLE_ERROR_MESSAGE);
        let (body_class, body_error) = field(form.body_state, BODY_ERROR_MESSAGE);

        format!(
            r#"<form class="note-form" id="noteForm">
    <div class="form-group">
        <label for="title">Title</label>
        <input type="text" id="title" name="title" minlength="3" value="{title}"{title_class}>
        {title_error}
    </div>
    <div class="form-group">
        <label for="body">Note Content</label>
        <textarea id="body" name="body" minlength="10"{body_class}>{body}</textarea>
        {body_error}
    </div>
    <button type="submit">Add Note</button>
</form>"#,
            title = encode_double_quoted_attribute(form.title),
            body = encode_text(form.body),
        )
    }

    #[instrument(level = "trace", skip(self, card), fields(note_id = %card.id()))]
    pub fn render_card(&self, card: &NoteCard) -> String {
        let attrs = card.attributes();
        let id = encode_double_quoted_attribute(attrs.id.as_str());
        format!(
            r#"<article class="note-card" data-id="{id}" data-archived="{archived}">
    <div class="note-header">
        <h2>{title}</h2>
        <div class="date">{date}</div>
    </div>
    <div class="body">{body}</div>
    <div class="actions">
        <button class="archive" data-id="{id}">{toggle}</button>
        <button class="delete" data-id="{id}">Delete</button>
    </div>
</article>"#,
            archived = attrs.archived,
            title = encode_text(&attrs.title),
            date = card.formatted_date(),
            body = encode_text(&attrs.body),
            toggle = card.toggle_label(),
        )
    }

    /// Notes grid, or the empty-state message for the current filter.
    pub fn render_notes(&self, state: &AppState, cards: &[NoteCard]) -> String {
        if cards.is_empty() {
            return format!(
                r#"<div class="empty-state"><h2>{}</h2></div>"#,
                state.empty_message()
            );
        }
        let cards: Vec<String> = cards.iter().map(|c| self.render_card(c)).collect();
        format!(
            "<section class=\"notes-grid\" id=\"notesContainer\">\n{}\n</section>",
            cards.join("\n")
        )
    }

    pub fn render_notification(&self, notification: &Notification) -> String {
        let class = match notification.level {
            NotificationLevel::Success => "success",
            NotificationLevel::Error => "error",
        };
        format!(
            r#"<div class="notification {class}" role="alert"><strong>{title}</strong> {message}</div>"#,
            title = encode_text(&notification.title),
            message = encode_text(&notification.message),
        )
    }

    pub fn render_page(
        &self,
        highlighted: ViewFilter,
        form: &FormView<'_>,
        state: &AppState,
        cards: &[NoteCard],
    ) -> String {
        let notification = state
            .last_notification
            .as_ref()
            .map(|n| self.render_notification(n))
            .unwrap_or_default();

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>{style}</style>
</head>
<body class="{body_class}">
{app_bar}
<main>
{notification}
{form}
{notes}
</main>
</body>
</html>"#,
            title = APP_TITLE,
            style = STYLE,
            body_class = if state.loading { "loading" } else { "" },
            app_bar = self.render_app_bar(highlighted),
            form = self.render_form(form),
            notes = self.render_notes(state, cards),
        )
    }
}
