// src/application/note_card.rs
use crate::application::signal::{Signal, SignalSender};
use crate::domain::{Note, NoteId};
use chrono::{DateTime, Utc};

/// The attributes a card is drawn from. A card owns nothing else.
#[derive(Debug, Clone, PartialEq)]
pub struct CardAttributes {
    pub id: NoteId,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub archived: bool,
}

impl From<&Note> for CardAttributes {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id.clone(),
            title: note.title.clone(),
            body: note.body.clone(),
            date: note.created_at,
            archived: note.archived,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NoteCard {
    attributes: CardAttributes,
    signals: SignalSender,
}

impl NoteCard {
    pub fn new(note: &Note, signals: SignalSender) -> Self {
        Self {
            attributes: CardAttributes::from(note),
            signals,
        }
    }

    pub fn attributes(&self) -> &CardAttributes {
        &self.attributes
    }

    pub fn id(&self) -> &NoteId {
        &self.attributes.id
    }

    /// Replace the attributes. Returns true when anything changed and the
    /// card has to be redrawn.
    pub fn set_attributes(&mut self, note: &Note) -> bool {
        let next = CardAttributes::from(note);
        if next == self.attributes {
            return false;
        }
        self.attributes = next;
        true
    }

    pub fn request_delete(&self) {
        self.signals
            .emit(Signal::DeleteRequested(self.attributes.id.clone()));
    }

    pub fn request_archive_toggle(&self) {
        self.signals
            .emit(Signal::ArchiveToggleRequested(self.attributes.id.clone()));
    }

    /// Creation date as `Thursday, 28 July 2022`.
    pub fn formatted_date(&self) -> String {
        self.attributes.date.format("%A, %-d %B %Y").to_string()
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.attributes.archived {
            "Unarchive"
        } else {
            "Archive"
        }
    }
}
