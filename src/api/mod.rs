//! Backend API abstraction
//!
//! The RAG backend is an opaque REST service. Controllers talk to it only
//! through the [`ChatBackend`] trait so that the same state logic runs against
//! the native `reqwest` client, the browser `gloo-net` client in `ui/`, or a
//! test double.
//!
//! # Endpoints
//!
//! - `POST /auth/login`, `POST /auth/signup` - returns `{token}`
//! - `GET /chats` - list chat metadata
//! - `POST /chats` - create a chat
//! - `DELETE /chats/{id}` - delete a chat
//! - `POST /chats/{id}/favorite` - set the favorite flag
//! - `GET /chats/{id}/history` - message history
//! - `POST /chats/{id}/message` - send a message, returns the assistant reply
//! - `GET /user/profile`, `PUT /user/profile` - profile read/update
//! - `POST /api/upload-documents` - multipart document upload
//!
//! Every call except login/signup carries `Authorization: Bearer <token>`.

#[cfg(feature = "http")]
pub mod http;

use crate::types::{ChatMeta, Document, LoginRequest, Message, Result, SignupRequest, UserProfile};
use async_trait::async_trait;

#[cfg(feature = "http")]
pub use http::HttpBackend;

/// Multipart field name the backend reads uploaded files from.
pub const UPLOAD_FIELD: &str = "documents";

/// Client side of the RAG backend's REST surface.
///
/// Futures are not required to be `Send`: in the browser they run on the
/// single UI thread via `spawn_local`.
#[async_trait(?Send)]
pub trait ChatBackend {
    /// Exchange credentials for a bearer token
    async fn login(&self, request: &LoginRequest) -> Result<String>;

    /// Create an account and return its bearer token
    async fn signup(&self, request: &SignupRequest) -> Result<String>;

    async fn list_chats(&self, token: &str) -> Result<Vec<ChatMeta>>;

    async fn create_chat(&self, token: &str) -> Result<ChatMeta>;

    async fn delete_chat(&self, token: &str, chat_id: &str) -> Result<()>;

    async fn set_favorite(&self, token: &str, chat_id: &str, favorite: bool) -> Result<()>;

    async fn history(&self, token: &str, chat_id: &str) -> Result<Vec<Message>>;

    /// Send a user message and return the assistant's reply text
    async fn send_message(&self, token: &str, chat_id: &str, message: &str) -> Result<String>;

    async fn profile(&self, token: &str) -> Result<UserProfile>;

    /// Replace the profile with `profile` and return the stored result
    async fn update_profile(&self, token: &str, profile: &UserProfile) -> Result<UserProfile>;

    /// Upload documents for indexing; returns the processed file names
    async fn upload_documents(&self, token: &str, documents: &[Document]) -> Result<Vec<String>>;
}

/// Path helpers shared by every backend implementation.
pub mod paths {
    pub const LOGIN: &str = "/auth/login";
    pub const SIGNUP: &str = "/auth/signup";
    pub const CHATS: &str = "/chats";
    pub const PROFILE: &str = "/user/profile";
    pub const UPLOAD: &str = "/api/upload-documents";

    pub fn chat(chat_id: &str) -> String {
        format!("/chats/{}", chat_id)
    }

    pub fn favorite(chat_id: &str) -> String {
        format!("/chats/{}/favorite", chat_id)
    }

    pub fn history(chat_id: &str) -> String {
        format!("/chats/{}/history", chat_id)
    }

    pub fn message(chat_id: &str) -> String {
        format!("/chats/{}/message", chat_id)
    }
}

/// Join a base URL and an absolute path without doubling the slash.
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}
