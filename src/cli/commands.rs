//! Command execution for the `su-rag` binary.

use super::output::Output;
use super::{Commands, ProfileCommands};
use crate::account::{AuthMode, LoginForm, ProfileEditor, UploadForm, UploadStatus};
use crate::api::{ChatBackend, HttpBackend};
use crate::auth::{FileTokenStore, Session};
use crate::chat::ChatController;
use crate::types::{Document, UserProfile};
use crate::utils::toml_config::ClientConfig;
use anyhow::{anyhow, bail, Context, Result};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

/// Build the HTTP backend and file-backed session from `config`, then run `command`.
pub async fn run(command: Option<Commands>, config: &ClientConfig, out: &Output) -> Result<()> {
    let backend = HttpBackend::from_config(&config.api)?;
    let session = Session::new(FileTokenStore::new(config.storage.token_path.clone()));
    debug!(base_url = backend.base_url(), "backend configured");
    execute(command, backend, session, config, out).await
}

/// Run one command against any backend.
pub async fn execute<B: ChatBackend>(
    command: Option<Commands>,
    backend: B,
    session: Session,
    config: &ClientConfig,
    out: &Output,
) -> Result<()> {
    let Some(command) = command else {
        return status(&session, config, out);
    };

    match command {
        Commands::Login { email, password } => {
            let mut form = LoginForm::new();
            form.email = email;
            form.password = password;
            authenticate(form, &backend, &session, out).await
        }

        Commands::Signup {
            email,
            password,
            name,
            role,
        } => {
            let mut form = LoginForm::new();
            form.toggle_mode();
            form.email = email;
            form.password = password;
            form.name = name;
            form.role = role;
            authenticate(form, &backend, &session, out).await
        }

        Commands::Logout => {
            session.sign_out()?;
            out.success("Signed out");
            Ok(())
        }

        Commands::Whoami => whoami(&session, out),

        Commands::Chats { favorites } => {
            ensure_signed_in(&session)?;
            let mut chats = ChatController::new(backend, session);
            chats.load_chats().await.context("Failed to load chats")?;
            chats.list_mut().set_favorites_only(favorites);

            let visible = chats.list().filtered();
            if visible.is_empty() {
                out.info(if favorites {
                    "No favorite chats"
                } else {
                    "No chats yet"
                });
                out.hint("Start one with:");
                out.command("su-rag new");
                return Ok(());
            }

            out.header(if favorites { "Favorite chats" } else { "Chats" });
            out.table_header(&["ID", "Created", "Owner", "Fav"]);
            for chat in visible {
                out.chat_row(chat);
            }
            Ok(())
        }

        Commands::New => {
            ensure_signed_in(&session)?;
            let mut chats = ChatController::new(backend, session);
            let chat = chats.create_chat().await.context("Failed to create chat")?;
            out.success(&format!("Created chat {}", chat.id));
            out.hint("Continue the conversation with:");
            out.command(&format!("su-rag chat {}", chat.id));
            Ok(())
        }

        Commands::Delete { chat_id } => {
            ensure_signed_in(&session)?;
            let mut chats = ChatController::new(backend, session);
            chats
                .delete_chat(&chat_id)
                .await
                .with_context(|| format!("Failed to delete chat {}", chat_id))?;
            out.success(&format!("Deleted chat {}", chat_id));
            Ok(())
        }

        Commands::Favorite { chat_id, off } => {
            ensure_signed_in(&session)?;
            let mut chats = ChatController::new(backend, session);
            chats
                .toggle_favorite(&chat_id, !off)
                .await
                .with_context(|| format!("Failed to update chat {}", chat_id))?;
            if off {
                out.success(&format!("Removed {} from favorites", chat_id));
            } else {
                out.success(&format!("Added {} to favorites", chat_id));
            }
            Ok(())
        }

        Commands::History { chat_id } => {
            ensure_signed_in(&session)?;
            let mut chats = ChatController::new(backend, session);
            chats.select_chat(Some(&chat_id)).await;
            out.header(&format!("Chat {}", chat_id));
            for message in chats.window().display_messages() {
                out.message(&message);
            }
            Ok(())
        }

        Commands::Send { chat_id, message } => {
            ensure_signed_in(&session)?;
            let mut chats = ChatController::new(backend, session);
            chats.select_chat(Some(&chat_id)).await;
            if !chats.send_message(&message).await {
                bail!("Message is empty");
            }
            if let Some(reply) = chats.window().history().last() {
                out.message(reply);
            }
            Ok(())
        }

        Commands::Chat { chat_id } => {
            ensure_signed_in(&session)?;
            interactive(ChatController::new(backend, session), chat_id, out).await
        }

        Commands::Profile(ProfileCommands::Show) => {
            ensure_signed_in(&session)?;
            let mut editor = ProfileEditor::new();
            if !editor.load(&backend, &session).await {
                bail!(editor.error().unwrap_or_default().to_string());
            }
            if let Some(profile) = editor.profile() {
                print_profile(profile, out);
            }
            Ok(())
        }

        Commands::Profile(ProfileCommands::Update {
            name,
            degree,
            department,
        }) => {
            ensure_signed_in(&session)?;
            if name.is_none() && degree.is_none() && department.is_none() {
                bail!("Nothing to update; pass --name, --degree or --department");
            }

            let mut editor = ProfileEditor::new();
            if !editor.load(&backend, &session).await {
                bail!(editor.error().unwrap_or_default().to_string());
            }
            if let Some(name) = name {
                editor.set_name(name);
            }
            if let Some(degree) = degree {
                editor.set_degree(degree);
            }
            if let Some(department) = department {
                editor.set_department(department);
            }

            if !editor.save(&backend, &session).await {
                bail!(editor.error().unwrap_or_default().to_string());
            }
            out.success("Profile saved");
            if let Some(profile) = editor.profile() {
                print_profile(profile, out);
            }
            Ok(())
        }

        Commands::Upload { files } => {
            ensure_signed_in(&session)?;
            let documents = read_documents(&files, out).await?;
            let mut form = UploadForm::new();
            form.select_files(documents);
            out.info(&format!("Uploading {}", form.selected_names()));

            form.submit(&backend, &session).await;
            match form.status() {
                UploadStatus::Success(message) => {
                    out.success(message);
                    Ok(())
                }
                UploadStatus::Error(message) => Err(anyhow!(message.clone())),
                _ => Ok(()),
            }
        }

        Commands::Config { validate } => {
            if validate {
                out.success("Configuration is valid");
                return Ok(());
            }
            out.header("Configuration");
            out.kv("api.base_url", &config.api.base_url);
            out.kv(
                "api.timeout_secs",
                &config
                    .api
                    .timeout_secs
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "none".to_string()),
            );
            out.kv(
                "storage.token_path",
                &config.storage.token_path.display().to_string(),
            );
            out.kv("logging.level", &config.logging.level);
            Ok(())
        }
    }
}

// ============= Helpers =============

fn ensure_signed_in(session: &Session) -> Result<()> {
    if !session.is_authenticated() {
        bail!("Not signed in. Run `su-rag login --email <EMAIL>` first");
    }
    Ok(())
}

async fn authenticate<B: ChatBackend>(
    mut form: LoginForm,
    backend: &B,
    session: &Session,
    out: &Output,
) -> Result<()> {
    if !form.submit(backend, session).await {
        bail!(form.error().unwrap_or_default().to_string());
    }

    let verb = match form.mode {
        AuthMode::Login => "Signed in",
        AuthMode::Signup => "Account created and signed in",
    };
    match session.claims().and_then(|c| c.name.or(c.sub)) {
        Some(who) => out.success(&format!("{} as {}", verb, who)),
        None => out.success(verb),
    }
    Ok(())
}

fn whoami(session: &Session, out: &Output) -> Result<()> {
    if !session.is_authenticated() {
        out.warning("Not signed in");
        return Ok(());
    }

    out.header("Session");
    match session.claims() {
        Some(claims) => {
            out.kv("email", claims.sub.as_deref().unwrap_or("-"));
            out.kv("name", claims.name.as_deref().unwrap_or("-"));
            out.kv("role", claims.role.as_deref().unwrap_or("-"));
            if let Some(exp) = claims.expires_at() {
                out.kv("expires", &exp.format("%Y-%m-%d %H:%M UTC").to_string());
            }
        }
        None => out.kv("token", "stored (not a readable JWT)"),
    }
    Ok(())
}

fn status(session: &Session, config: &ClientConfig, out: &Output) -> Result<()> {
    out.banner();
    out.kv("backend", &config.api.base_url);
    if session.is_authenticated() {
        let who = session
            .claims()
            .and_then(|c| c.name.or(c.sub))
            .unwrap_or_else(|| "signed in".to_string());
        out.kv("user", &who);
        out.hint("List your chats with:");
        out.command("su-rag chats");
    } else {
        out.kv("user", "not signed in");
        out.hint("Sign in with:");
        out.command("su-rag login --email <EMAIL>");
    }
    Ok(())
}

fn print_profile(profile: &UserProfile, out: &Output) {
    out.header("Profile");
    out.kv(
        "name",
        if profile.name.is_empty() {
            "Not specified"
        } else {
            profile.name.as_str()
        },
    );
    out.kv("email", &profile.email);
    out.kv("role", &profile.role);
    out.kv("degree", profile.degree.as_deref().unwrap_or(""));
    out.kv("department", profile.department.as_deref().unwrap_or(""));
    if let Some(created) = profile.created_at.as_deref() {
        out.kv("created", created);
    }
}

async fn read_documents(paths: &[PathBuf], out: &Output) -> Result<Vec<Document>> {
    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| anyhow!("{} is not a file", path.display()))?;

        let document = Document::new(file_name, bytes);
        if !document.is_pdf() {
            out.warning(&format!(
                "{} is not a PDF; the backend may skip it",
                document.file_name
            ));
        }
        documents.push(document);
    }
    Ok(documents)
}

async fn interactive<B: ChatBackend>(
    mut chats: ChatController<B>,
    chat_id: Option<String>,
    out: &Output,
) -> Result<()> {
    match chat_id {
        Some(id) => chats.select_chat(Some(&id)).await,
        None => {
            let chat = chats.create_chat().await.context("Failed to create chat")?;
            out.info(&format!("Started chat {}", chat.id));
        }
    }

    for message in chats.window().display_messages() {
        out.message(&message);
    }
    out.hint("Type a message and press Enter. /quit to leave.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        out.prompt();
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line == "/quit" || line == "/exit" {
            break;
        }

        out.pending();
        if chats.send_message(line).await {
            if let Some(reply) = chats.window().history().last() {
                out.message(reply);
            }
        }
    }

    out.newline();
    Ok(())
}
