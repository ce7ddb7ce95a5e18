//! CLI Integration Tests for SU-RAG
//!
//! Runs the binary for help, configuration and session commands that need
//! no backend, and drives the command runner against the mock backend for
//! the rest.

#![cfg(feature = "cli")]

mod common;

use common::mocks::{chat, profile, MockBackend, MOCK_TOKEN};
use std::fs;
use std::process::Command;
use su_rag::auth::{MemoryTokenStore, Session};
use su_rag::cli::commands::execute;
use su_rag::cli::output::Output;
use su_rag::cli::{Commands, ProfileCommands};
use su_rag::types::SignupRole;
use su_rag::ClientConfig;
use tempfile::TempDir;

/// Helper to run su-rag with arguments inside `dir`, isolated from any
/// token or config in the developer's environment.
fn run_su_rag(args: &[&str], dir: &TempDir) -> std::process::Output {
    Command::new("cargo")
        .arg("run")
        .arg("--quiet")
        .arg("--manifest-path")
        .arg(concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml"))
        .arg("--")
        .args(args)
        .current_dir(dir.path())
        .env("SU_RAG_TOKEN_PATH", dir.path().join("token"))
        .env_remove("SU_RAG_API_BASE")
        .env_remove("SU_RAG_PASSWORD")
        .output()
        .expect("Failed to execute command")
}

// =============================================================================
// Help and Version Tests
// =============================================================================

#[test]
fn test_help_command() {
    let dir = TempDir::new().unwrap();
    let output = run_su_rag(&["--help"], &dir);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("SU-RAG"));
    assert!(stdout.contains("USAGE") || stdout.contains("Usage"));
    for command in ["login", "signup", "chats", "send", "upload", "profile"] {
        assert!(stdout.contains(command), "help is missing {}", command);
    }
}

#[test]
fn test_version_command() {
    let dir = TempDir::new().unwrap();
    let output = run_su_rag(&["--version"], &dir);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("su-rag"));
}

#[test]
fn test_whoami_when_signed_out() {
    let dir = TempDir::new().unwrap();
    let output = run_su_rag(&["--no-color", "whoami"], &dir);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Not signed in"));
}

#[test]
fn test_protected_command_requires_login() {
    let dir = TempDir::new().unwrap();
    let output = run_su_rag(&["--no-color", "chats"], &dir);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Not signed in"));
}

#[test]
fn test_config_command_reads_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("custom.toml"),
        "[api]\nbase_url = \"https://rag.example.edu\"\n",
    )
    .unwrap();

    let output = run_su_rag(&["--no-color", "--config", "custom.toml", "config"], &dir);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("https://rag.example.edu"));
}

#[test]
fn test_invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("su-rag.toml"), "[api]\nbase_url = \"ftp://x\"\n").unwrap();

    let output = run_su_rag(&["config", "--validate"], &dir);
    assert!(!output.status.success());
}

// =============================================================================
// Command Runner Tests
// =============================================================================

fn signed_in() -> Session {
    Session::new(MemoryTokenStore::with_token(MOCK_TOKEN))
}

async fn exec(command: Commands, backend: &MockBackend, session: &Session) -> anyhow::Result<()> {
    execute(
        Some(command),
        backend.clone(),
        session.clone(),
        &ClientConfig::default(),
        &Output::no_color(),
    )
    .await
}

#[tokio::test]
async fn test_login_command_stores_token() {
    let backend = MockBackend::new();
    let session = Session::in_memory();

    exec(
        Commands::Login {
            email: "ada@seattleu.edu".into(),
            password: "pw".into(),
        },
        &backend,
        &session,
    )
    .await
    .unwrap();

    assert_eq!(session.token().as_deref(), Some(MOCK_TOKEN));
}

#[tokio::test]
async fn test_failed_login_reports_backend_text() {
    let backend = MockBackend::new();
    backend.fail_on("login");
    let session = Session::in_memory();

    let err = exec(
        Commands::Login {
            email: "ada@seattleu.edu".into(),
            password: "bad".into(),
        },
        &backend,
        &session,
    )
    .await
    .unwrap_err();

    assert_eq!(err.to_string(), "Invalid credentials");
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn test_signup_command() {
    let backend = MockBackend::new();
    let session = Session::in_memory();

    exec(
        Commands::Signup {
            email: "new@seattleu.edu".into(),
            password: "pw".into(),
            name: "New".into(),
            role: SignupRole::User,
        },
        &backend,
        &session,
    )
    .await
    .unwrap();

    assert_eq!(backend.calls(), vec!["signup:new@seattleu.edu:user"]);
}

#[tokio::test]
async fn test_logout_command() {
    let session = signed_in();
    exec(Commands::Logout, &MockBackend::new(), &session)
        .await
        .unwrap();
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn test_chat_commands() {
    let backend = MockBackend::new().with_chats(vec![chat("a", false), chat("b", true)]);
    let session = signed_in();

    exec(Commands::Chats { favorites: true }, &backend, &session)
        .await
        .unwrap();
    exec(Commands::New, &backend, &session).await.unwrap();
    exec(
        Commands::Favorite {
            chat_id: "a".into(),
            off: false,
        },
        &backend,
        &session,
    )
    .await
    .unwrap();
    exec(
        Commands::Delete {
            chat_id: "b".into(),
        },
        &backend,
        &session,
    )
    .await
    .unwrap();

    let stored = backend.stored_chats();
    assert_eq!(stored.len(), 2);
    assert!(stored.iter().any(|c| c.id == "a" && c.favorite));
    assert!(stored.iter().all(|c| c.id != "b"));
}

#[tokio::test]
async fn test_send_command_fetches_then_sends() {
    let backend = MockBackend::new().with_reply("Hi");
    let session = signed_in();

    exec(
        Commands::Send {
            chat_id: "a".into(),
            message: "Hello".into(),
        },
        &backend,
        &session,
    )
    .await
    .unwrap();

    assert_eq!(backend.calls(), vec!["history:a", "send_message:a:Hello"]);
}

#[tokio::test]
async fn test_send_blank_message_fails() {
    let backend = MockBackend::new();
    let result = exec(
        Commands::Send {
            chat_id: "a".into(),
            message: "   ".into(),
        },
        &backend,
        &signed_in(),
    )
    .await;

    assert!(result.is_err());
    assert_eq!(backend.count("send_message"), 0);
}

#[tokio::test]
async fn test_profile_update_command() {
    let backend = MockBackend::new().with_profile(profile());

    exec(
        Commands::Profile(ProfileCommands::Update {
            name: None,
            degree: Some("MSCS".into()),
            department: None,
        }),
        &backend,
        &signed_in(),
    )
    .await
    .unwrap();

    assert_eq!(backend.calls(), vec!["profile", "update_profile"]);
}

#[tokio::test]
async fn test_profile_update_needs_a_field() {
    let backend = MockBackend::new().with_profile(profile());
    let result = exec(
        Commands::Profile(ProfileCommands::Update {
            name: None,
            degree: None,
            department: None,
        }),
        &backend,
        &signed_in(),
    )
    .await;

    assert!(result.is_err());
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn test_upload_command_reads_files() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("catalog.pdf");
    fs::write(&file, b"%PDF-1.4").unwrap();
    let backend = MockBackend::new();

    exec(
        Commands::Upload { files: vec![file] },
        &backend,
        &signed_in(),
    )
    .await
    .unwrap();

    assert_eq!(backend.calls(), vec!["upload_documents:1"]);
}

#[tokio::test]
async fn test_upload_missing_file_fails_before_request() {
    let dir = TempDir::new().unwrap();
    let backend = MockBackend::new();

    let result = exec(
        Commands::Upload {
            files: vec![dir.path().join("missing.pdf")],
        },
        &backend,
        &signed_in(),
    )
    .await;

    assert!(result.is_err());
    assert!(backend.calls().is_empty());
}
