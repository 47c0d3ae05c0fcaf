// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the notes API, overrides the config file
    #[arg(short, long, value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List the notes of one view
    List {
        /// Show archived notes instead of active ones
        #[arg(long)]
        archived: bool,

        /// Output notes as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a note
    Add {
        /// Note title (at least 3 characters)
        #[arg(short, long)]
        title: String,

        /// Note content (at least 10 characters)
        #[arg(long)]
        body: String,
    },

    /// Delete a note
    Delete {
        /// Note ID to delete
        #[arg(value_name = "NOTE_ID")]
        note_id: String,

        /// The note is in the archived view
        #[arg(long)]
        archived: bool,
    },

    /// Archive an active note, or unarchive an archived one
    ToggleArchive {
        /// Note ID to toggle
        #[arg(value_name = "NOTE_ID")]
        note_id: String,

        /// The note is in the archived view
        #[arg(long)]
        archived: bool,
    },

    /// Render the notes page as HTML and open it in the browser
    View {
        /// Show archived notes instead of active ones
        #[arg(long)]
        archived: bool,

        /// Write the page to this file instead of opening the browser
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Interactive session reading commands from stdin
    Shell,
}
