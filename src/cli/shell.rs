// src/cli/shell.rs
//! Line-oriented session: each stdin line becomes one component action, the
//! resulting signals are dispatched, and the view is printed again.

use crate::application::{App, NoteRepository, Notifier};
use crate::domain::{DomainError, NoteId, ViewFilter};
use anyhow::Result;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

pub const HELP: &str = "\
Commands:
  active                   show active notes
  archived                 show archived notes
  add <title> | <body>     add a note
  delete <id>              delete a shown note
  archive <id>             archive or unarchive a shown note
  help                     show this help
  quit                     leave the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Show(ViewFilter),
    Add { title: String, body: String },
    Delete(NoteId),
    ToggleArchive(NoteId),
    Help,
    Quit,
    Empty,
}

/// Parse one input line. Arguments of `add` are taken verbatim apart from the
/// single spaces around the `|` separator, so length checks see what the
/// user typed.
pub fn parse(line: &str) -> Result<ShellCommand, String> {
    let line = line.trim_start();
    let (verb, raw_rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest),
        None => (line.trim_end(), ""),
    };
    let rest = raw_rest.trim();

    match verb {
        "" => Ok(ShellCommand::Empty),
        "active" => Ok(ShellCommand::Show(ViewFilter::Active)),
        "archived" => Ok(ShellCommand::Show(ViewFilter::Archived)),
        "help" => Ok(ShellCommand::Help),
        "quit" | "exit" => Ok(ShellCommand::Quit),
        "add" => match raw_rest.split_once('|') {
            Some((title, body)) => Ok(ShellCommand::Add {
                title: title.strip_suffix(' ').unwrap_or(title).to_string(),
                body: body.strip_prefix(' ').unwrap_or(body).to_string(),
            }),
            None => Err("usage: add <title> | <body>".to_string()),
        },
        "delete" | "archive" if rest.is_empty() => Err(format!("usage: {verb} <id>")),
        "delete" => Ok(ShellCommand::Delete(NoteId::from(rest))),
        "archive" => Ok(ShellCommand::ToggleArchive(NoteId::from(rest))),
        other => Err(format!("unknown command '{other}', try 'help'")),
    }
}

/// Read commands until `quit` or end of input. Failed operations are
/// reported and the session continues.
pub async fn run_shell<R, N>(app: &mut App<R, N>) -> Result<()>
where
    R: NoteRepository,
    N: Notifier + Clone,
{
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    println!("{}\n", app.render_text());
    prompt()?;

    while let Some(line) = lines.next_line().await? {
        let command = match parse(&line) {
            Ok(command) => command,
            Err(message) => {
                eprintln!("{message}");
                prompt()?;
                continue;
            }
        };
        debug!(?command, "Shell command");

        let result = match command {
            ShellCommand::Quit => break,
            ShellCommand::Empty => Ok(()),
            ShellCommand::Help => {
                println!("{HELP}");
                Ok(())
            }
            ShellCommand::Show(filter) => app.show(filter).await,
            ShellCommand::Add { title, body } => app.submit_note(&title, &body).await.map(|_| ()),
            ShellCommand::Delete(id) => app.delete(&id).await,
            ShellCommand::ToggleArchive(id) => app.toggle_archive(&id).await,
        };

        match result {
            Err(DomainError::ClientValidation(validation)) => {
                for message in validation.messages() {
                    eprintln!("{message}");
                }
            }
            Err(DomainError::NoteNotFound(id)) => {
                eprintln!(
                    "No note {id} in the {} view",
                    app.controller().view_filter()
                );
            }
            // Already announced through the notifier.
            Err(e) => debug!(error = %e, "Shell command failed"),
            Ok(()) => println!("{}\n", app.render_text()),
        }
        prompt()?;
    }

    Ok(())
}

fn prompt() -> Result<()> {
    print!("> ");
    std::io::stdout().flush()?;
    Ok(())
}
