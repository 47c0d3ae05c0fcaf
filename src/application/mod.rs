// src/application/mod.rs
pub mod app;
pub mod app_bar;
pub mod controller;
pub mod note_card;
pub mod note_form;
pub mod notifier;
pub mod repository;
pub mod signal;

pub use app::App;
pub use app_bar::AppBar;
pub use controller::{AppController, AppState};
pub use note_card::{CardAttributes, NoteCard};
pub use note_form::{FieldState, FormState, FormView, NoteForm};
pub use notifier::{Notification, NotificationLevel, Notifier};
pub use repository::NoteRepository;
pub use signal::{Signal, SignalReceiver, SignalSender};
