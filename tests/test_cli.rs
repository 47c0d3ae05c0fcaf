use clap::Parser;
use notesview::cli::args::{Args, Command};
use std::path::PathBuf;

#[test]
fn given_no_subcommand_when_parsing_then_fails() {
    // Arrange
    let args = vec!["notesview", "-v"];

    // Act & Assert
    let result = Args::try_parse_from(args);
    assert!(result.is_err(), "Should fail without subcommand");
}

#[test]
fn given_list_command_when_parsing_then_defaults_to_active_text_output() {
    // Arrange
    let args = vec!["notesview", "list"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::List { archived, json } => {
            assert!(!archived);
            assert!(!json);
        }
        _ => panic!("Expected List command"),
    }
    assert_eq!(parsed.config, None);
    assert_eq!(parsed.base_url, None);
    assert_eq!(parsed.verbose, 0);
}

#[test]
fn given_list_archived_json_when_parsing_then_sets_both_flags() {
    // Arrange
    let args = vec!["notesview", "list", "--archived", "--json"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::List { archived, json } => {
            assert!(archived);
            assert!(json);
        }
        _ => panic!("Expected List command"),
    }
}

#[test]
fn given_add_command_when_parsing_then_captures_title_and_body() {
    // Arrange
    let args = vec![
        "notesview",
        "add",
        "-t",
        "Groceries",
        "--body",
        "Milk, eggs, bread",
    ];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Add { title, body } => {
            assert_eq!(title, "Groceries");
            assert_eq!(body, "Milk, eggs, bread");
        }
        _ => panic!("Expected Add command"),
    }
}

#[test]
fn given_add_without_body_when_parsing_then_fails() {
    let args = vec!["notesview", "add", "--title", "Groceries"];

    let result = Args::try_parse_from(args);

    assert!(result.is_err(), "Should require --body");
}

#[test]
fn given_delete_command_when_parsing_then_keeps_string_id() {
    // Arrange
    let args = vec!["notesview", "delete", "notes-jT-jjsyz61J8XKiI"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Delete { note_id, archived } => {
            assert_eq!(note_id, "notes-jT-jjsyz61J8XKiI");
            assert!(!archived);
        }
        _ => panic!("Expected Delete command"),
    }
}

#[test]
fn given_toggle_archive_in_archived_view_when_parsing_then_succeeds() {
    // Arrange
    let args = vec!["notesview", "toggle-archive", "notes-1", "--archived"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::ToggleArchive { note_id, archived } => {
            assert_eq!(note_id, "notes-1");
            assert!(archived);
        }
        _ => panic!("Expected ToggleArchive command"),
    }
}

#[test]
fn given_view_with_output_when_parsing_then_captures_path() {
    // Arrange
    let args = vec!["notesview", "view", "-o", "/tmp/notes.html"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::View { archived, output } => {
            assert!(!archived);
            assert_eq!(output, Some(PathBuf::from("/tmp/notes.html")));
        }
        _ => panic!("Expected View command"),
    }
}

#[test]
fn given_global_flags_after_subcommand_when_parsing_then_succeeds() {
    // Arrange
    let args = vec![
        "notesview",
        "shell",
        "-c",
        "/path/to/config.toml",
        "-b",
        "http://localhost:5000/v2",
        "-vv",
    ];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert!(matches!(parsed.command, Command::Shell));
    assert_eq!(parsed.config, Some(PathBuf::from("/path/to/config.toml")));
    assert_eq!(parsed.base_url.as_deref(), Some("http://localhost:5000/v2"));
    assert_eq!(parsed.verbose, 2);
}

#[test]
fn given_unknown_subcommand_when_parsing_then_fails() {
    let args = vec!["notesview", "edit", "notes-1"];

    let result = Args::try_parse_from(args);

    assert!(result.is_err(), "Should reject unknown subcommand");
}
