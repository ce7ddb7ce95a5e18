//! # SU-RAG - Seattle University RAG chat client
//!
//! Client-side state and backend access for the university's
//! retrieval-augmented chat service. Retrieval, generation and storage all
//! happen on the backend; this crate only signs users in, keeps the chat
//! list and the active conversation in sync, and forwards profile edits and
//! document uploads.
//!
//! ## Overview
//!
//! The crate is used in two ways:
//!
//! 1. **As a terminal client** - Run the `su-rag` binary (feature `cli`)
//! 2. **As a library** - The Leptos front end in `ui/` depends on it with
//!    default features off, which keeps it buildable for `wasm32`
//!
//! ### Basic Example
//!
//! ```rust,ignore
//! use su_rag::{ChatController, HttpBackend, Session};
//!
//! #[tokio::main]
//! async fn main() -> su_rag::Result<()> {
//!     let session = Session::in_memory();
//!     let backend = HttpBackend::new("http://localhost:5050");
//!
//!     let mut form = su_rag::LoginForm::new();
//!     form.email = "ada@seattleu.edu".into();
//!     form.password = "secret".into();
//!     form.submit(&backend, &session).await;
//!
//!     let mut chats = ChatController::new(backend, session);
//!     chats.create_chat().await?;
//!     chats.send_message("When does registration open?").await;
//!     for message in chats.window().history() {
//!         println!("{:?}: {}", message.role, message.text);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `http` | `reqwest`-based [`HttpBackend`] |
//! | `cli` | Terminal client binary (default, implies `http`) |
//!
//! ## Modules
//!
//! - [`api`] - Backend trait, endpoint paths and HTTP implementation
//! - [`auth`] - Session token storage, claim decoding and route guarding
//! - [`chat`] - Chat list and chat window state machines
//! - [`account`] - Login/signup, profile and upload forms
//! - [`types`] - Wire types and error handling
//! - [`utils`] - Configuration

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(rustdoc::missing_crate_level_docs)]

/// Login/signup, profile editing and document upload.
pub mod account;
/// Backend trait and HTTP client.
pub mod api;
/// Session, token storage and route guarding.
pub mod auth;
/// Chat list and chat window state.
pub mod chat;
/// Terminal front end.
#[cfg(feature = "cli")]
pub mod cli;
/// Core types (wire models, errors).
pub mod types;
/// Configuration utilities.
pub mod utils;

// Re-export commonly used types
pub use account::{LoginForm, ProfileEditor, UploadForm};
pub use api::ChatBackend;
#[cfg(feature = "http")]
pub use api::HttpBackend;
pub use auth::{Route, Session};
pub use chat::{ChatController, ChatList, ChatWindow};
pub use types::{AppError, ChatMeta, Message, Result, Role, UserProfile};
pub use utils::toml_config::ClientConfig;
