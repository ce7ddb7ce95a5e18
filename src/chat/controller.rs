use super::list::ChatList;
use super::window::ChatWindow;
use crate::api::ChatBackend;
use crate::auth::Session;
use crate::types::{ChatMeta, Result};
use tracing::{debug, info, warn};

/// Drives a [`ChatList`] and a [`ChatWindow`] against a backend.
///
/// Local state is mutated before the request is made; failures of the
/// optimistic mutations are reconciled by reloading the list.
pub struct ChatController<B> {
    backend: B,
    session: Session,
    list: ChatList,
    window: ChatWindow,
}

impl<B: ChatBackend> ChatController<B> {
    pub fn new(backend: B, session: Session) -> Self {
        Self {
            backend,
            session,
            list: ChatList::new(),
            window: ChatWindow::new(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn list(&self) -> &ChatList {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ChatList {
        &mut self.list
    }

    pub fn window(&self) -> &ChatWindow {
        &self.window
    }

    /// Replace the local list with the backend's. On error the list is kept
    /// and the failure is only logged; the error is returned for callers
    /// that want to report it.
    pub async fn load_chats(&mut self) -> Result<()> {
        let result = match self.session.bearer() {
            Ok(token) => self.backend.list_chats(&token).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(chats) => {
                debug!(count = chats.len(), "chat list loaded");
                self.list.replace_all(chats);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "failed to load chats");
                Err(e)
            }
        }
    }

    /// Create a chat, put it first in the list and make it active.
    pub async fn create_chat(&mut self) -> Result<ChatMeta> {
        let token = self.session.bearer()?;
        let chat = self.backend.create_chat(&token).await.map_err(|e| {
            warn!(error = %e, "failed to create chat");
            e
        })?;

        info!(chat_id = %chat.id, "chat created");
        self.list.prepend(chat.clone());
        self.window.activate_new(&chat.id);
        Ok(chat)
    }

    /// Remove a chat locally, then on the backend.
    pub async fn delete_chat(&mut self, chat_id: &str) -> Result<()> {
        self.list.remove(chat_id);
        if self.window.active() == Some(chat_id) {
            self.window.clear();
        }

        let result = match self.session.bearer() {
            Ok(token) => self.backend.delete_chat(&token, chat_id).await,
            Err(e) => Err(e),
        };

        if let Err(e) = result {
            warn!(chat_id, error = %e, "delete failed, reloading chat list");
            let _ = self.load_chats().await;
            return Err(e);
        }
        Ok(())
    }

    /// Set the favorite flag locally, then on the backend.
    pub async fn toggle_favorite(&mut self, chat_id: &str, favorite: bool) -> Result<()> {
        self.list.set_favorite(chat_id, favorite);

        let result = match self.session.bearer() {
            Ok(token) => self.backend.set_favorite(&token, chat_id, favorite).await,
            Err(e) => Err(e),
        };

        if let Err(e) = result {
            warn!(chat_id, error = %e, "favorite update failed, reloading chat list");
            let _ = self.load_chats().await;
            return Err(e);
        }
        Ok(())
    }

    /// Activate a chat (or none) and fetch its history once.
    pub async fn select_chat(&mut self, chat_id: Option<&str>) {
        let Some(ticket) = self.window.select(chat_id) else {
            return;
        };

        let result = match self.session.bearer() {
            Ok(token) => self.backend.history(&token, &ticket.chat_id).await,
            Err(e) => Err(e),
        };
        self.window.apply_history(&ticket, result);
    }

    /// Send a message in the active chat. Returns false when the input was
    /// ignored (blank text or no active chat).
    pub async fn send_message(&mut self, text: &str) -> bool {
        let Some(ticket) = self.window.begin_send(text) else {
            return false;
        };

        let result = match self.session.bearer() {
            Ok(token) => {
                self.backend
                    .send_message(&token, &ticket.chat_id, text)
                    .await
            }
            Err(e) => Err(e),
        };
        self.window.apply_reply(&ticket, result);
        true
    }
}
