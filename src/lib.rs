// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use anyhow::{bail, Context, Result};
use application::{App, NoteRepository, Notifier};
use domain::{DomainError, NoteId, ViewFilter};
use infrastructure::{Config, ContentRenderer, HttpNoteRepository, TerminalNotifier};
use std::sync::Arc;
use tracing::{debug, info};

use crate::cli::args::{Args, Command};

pub async fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting notesview with arguments");

    // Initialize configuration
    let config = Config::resolve(args.config.as_deref())?;
    let base_url = args
        .base_url
        .clone()
        .unwrap_or_else(|| config.api.base_url.clone());

    // Initialize infrastructure and application
    let repository = Arc::new(HttpNoteRepository::new(base_url));
    info!(base_url = repository.base_url(), "Using notes API");
    let mut app = App::new(repository, TerminalNotifier::new());

    execute(&mut app, &config, args.command).await
}

/// Run one command against an assembled app.
pub async fn execute<R, N>(app: &mut App<R, N>, config: &Config, command: Command) -> Result<()>
where
    R: NoteRepository,
    N: Notifier + Clone,
{
    let filter_for = |archived: bool| {
        if archived {
            ViewFilter::Archived
        } else {
            config.view.default_filter
        }
    };

    match command {
        Command::List { archived, json } => {
            app.start(filter_for(archived))
                .await
                .context("Failed to fetch notes")?;
            if json {
                let notes = &app.controller().state().notes;
                println!("{}", serde_json::to_string_pretty(notes)?);
            } else {
                println!("{}", app.render_text());
            }
        }
        Command::Add { title, body } => match app.submit_note(&title, &body).await {
            Ok(note) => info!(note_id = %note.id, "Added note"),
            Err(DomainError::ClientValidation(validation)) => {
                for message in validation.messages() {
                    eprintln!("{message}");
                }
                bail!("Note not submitted: {validation}");
            }
            Err(e) => return Err(e).context("Failed to add note"),
        },
        Command::Delete { note_id, archived } => {
            let id = NoteId::from(note_id);
            app.start(ViewFilter::from_archived(archived))
                .await
                .context("Failed to fetch notes")?;
            app.delete(&id)
                .await
                .with_context(|| format!("Failed to delete note {id}"))?;
        }
        Command::ToggleArchive { note_id, archived } => {
            let id = NoteId::from(note_id);
            app.start(ViewFilter::from_archived(archived))
                .await
                .context("Failed to fetch notes")?;
            app.toggle_archive(&id)
                .await
                .with_context(|| format!("Failed to update archive state of note {id}"))?;
        }
        Command::View { archived, output } => {
            app.start(filter_for(archived))
                .await
                .context("Failed to fetch notes")?;
            let html = app.render_html();
            let mut renderer = ContentRenderer::new();
            match output {
                Some(path) => renderer.write_to(&path, &html)?,
                None if config.view.open_browser => {
                    let path = renderer.create_temp_file(&html)?;
                    renderer.open_in_browser(&path)?;
                }
                None => println!("{html}"),
            }
        }
        Command::Shell => {
            // A failed initial fetch is already announced; the session stays usable.
            if let Err(e) = app.start(config.view.default_filter).await {
                debug!(error = %e, "Initial fetch failed");
            }
            cli::shell::run_shell(app).await?;
        }
    }

    Ok(())
}
