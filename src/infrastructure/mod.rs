// src/infrastructure/mod.rs
pub mod config;
pub mod notes_api;
pub mod renderer;
pub mod terminal;

pub use config::Config;
pub use notes_api::HttpNoteRepository;
pub use renderer::ContentRenderer;
pub use terminal::TerminalNotifier;
