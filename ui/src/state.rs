//! Global application state

use crate::api::{GlooBackend, LocalStorageTokenStore};
use leptos::prelude::*;
use su_rag::auth::Session;
use su_rag::chat::{ChatList, ChatWindow};
use su_rag::types::Result;

const DEFAULT_API_BASE: &str = "http://localhost:5050";

/// Global application state
#[derive(Clone)]
pub struct AppState {
    /// Token persistence and claims
    pub session: Session,
    /// Mirrors `session.is_authenticated()` so views can react to it
    pub authenticated: RwSignal<bool>,
    /// Sidebar chat list and favorites filter
    pub chats: RwSignal<ChatList>,
    /// Active chat and its history
    pub window: RwSignal<ChatWindow>,
    /// API base URL, fixed at build time
    pub api_base: String,
}

impl AppState {
    pub fn new() -> Self {
        let session = Session::new(LocalStorageTokenStore);
        let authenticated = RwSignal::new(session.is_authenticated());

        Self {
            session,
            authenticated,
            chats: RwSignal::new(ChatList::new()),
            window: RwSignal::new(ChatWindow::new()),
            api_base: option_env!("SU_RAG_API_BASE")
                .unwrap_or(DEFAULT_API_BASE)
                .to_string(),
        }
    }

    pub fn backend(&self) -> GlooBackend {
        GlooBackend::new(self.api_base.clone())
    }

    pub fn sign_in(&self, token: &str) -> Result<()> {
        self.session.sign_in(token)?;
        self.authenticated.set(true);
        Ok(())
    }

    /// Drop the token and everything loaded under it.
    pub fn sign_out(&self) {
        if let Err(e) = self.session.sign_out() {
            tracing::warn!("Failed to clear token: {}", e);
        }
        self.authenticated.set(false);
        self.chats.set(ChatList::new());
        self.window.set(ChatWindow::new());
    }

    pub fn is_admin(&self) -> bool {
        self.session.is_admin()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
