// src/ports/text.rs
use crate::application::{AppState, NoteCard};

/// Renders the current view for the terminal.
#[derive(Debug, Default)]
pub struct TextPresenter;

impl TextPresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn render_card(&self, card: &NoteCard) -> String {
        let attrs = card.attributes();
        let marker = if attrs.archived { " [archived]" } else { "" };
        let body: Vec<String> = attrs.body.lines().map(|l| format!("    {l}")).collect();
        format!(
            "{id}{marker}\n  {title}\n  {date}\n{body}",
            id = attrs.id,
            title = attrs.title,
            date = card.formatted_date(),
            body = body.join("\n"),
        )
    }

    /// One block per card in resource order, or the empty-state line.
    pub fn render(&self, state: &AppState, cards: &[NoteCard]) -> String {
        if cards.is_empty() {
            return state.empty_message();
        }
        cards
            .iter()
            .map(|c| self.render_card(c))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
