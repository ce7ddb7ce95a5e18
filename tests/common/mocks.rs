//! Mock implementations for testing.
//!
//! [`MockBackend`] is an in-memory stand-in for the RAG backend. It records
//! every call, so tests can assert on exactly which requests a controller
//! made, and individual operations can be switched to fail.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use su_rag::api::ChatBackend;
use su_rag::types::{
    AppError, ChatMeta, Document, LoginRequest, Message, Result, SignupRequest, UserProfile,
};

pub const MOCK_TOKEN: &str = "mock-token";

#[derive(Default)]
struct MockState {
    chats: Vec<ChatMeta>,
    histories: HashMap<String, Vec<Message>>,
    reply: String,
    profile: Option<UserProfile>,
    failing: HashSet<&'static str>,
    calls: Vec<String>,
    tokens_seen: Vec<String>,
    next_id: u32,
}

/// Shared-state mock backend. Clones observe the same state.
///
/// # Examples
///
/// ```ignore
/// let backend = MockBackend::new().with_chats(vec![chat("a", false)]);
/// backend.fail_on("delete_chat");
/// ```
#[derive(Clone, Default)]
pub struct MockBackend {
    state: Arc<Mutex<MockState>>,
}

impl MockBackend {
    pub fn new() -> Self {
        let backend = Self::default();
        backend.state.lock().reply = "Mock reply".to_string();
        backend
    }

    pub fn with_chats(self, chats: Vec<ChatMeta>) -> Self {
        self.state.lock().chats = chats;
        self
    }

    pub fn with_history(self, chat_id: &str, history: Vec<Message>) -> Self {
        self.state
            .lock()
            .histories
            .insert(chat_id.to_string(), history);
        self
    }

    pub fn with_reply(self, reply: &str) -> Self {
        self.state.lock().reply = reply.to_string();
        self
    }

    pub fn with_profile(self, profile: UserProfile) -> Self {
        self.state.lock().profile = Some(profile);
        self
    }

    /// Make every call of `operation` fail from now on.
    pub fn fail_on(&self, operation: &'static str) {
        self.state.lock().failing.insert(operation);
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().calls.clone()
    }

    /// Number of recorded calls whose name starts with `prefix`.
    pub fn count(&self, prefix: &str) -> usize {
        self.state
            .lock()
            .calls
            .iter()
            .filter(|c| c.starts_with(prefix))
            .count()
    }

    pub fn tokens_seen(&self) -> Vec<String> {
        self.state.lock().tokens_seen.clone()
    }

    /// The backend's own view of the chats.
    pub fn stored_chats(&self) -> Vec<ChatMeta> {
        self.state.lock().chats.clone()
    }

    fn record(&self, call: String, token: Option<&str>, operation: &'static str) -> Result<()> {
        let mut state = self.state.lock();
        state.calls.push(call);
        if let Some(token) = token {
            state.tokens_seen.push(token.to_string());
        }
        if state.failing.contains(operation) {
            return Err(AppError::Api {
                status: 500,
                body: format!("mock {} failure", operation),
            });
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl ChatBackend for MockBackend {
    async fn login(&self, request: &LoginRequest) -> Result<String> {
        self.record(format!("login:{}", request.email), None, "login")
            .map_err(|_| AppError::Api {
                status: 401,
                body: "Invalid credentials".to_string(),
            })?;
        Ok(MOCK_TOKEN.to_string())
    }

    async fn signup(&self, request: &SignupRequest) -> Result<String> {
        self.record(
            format!("signup:{}:{}", request.email, request.role.as_str()),
            None,
            "signup",
        )?;
        Ok(MOCK_TOKEN.to_string())
    }

    async fn list_chats(&self, token: &str) -> Result<Vec<ChatMeta>> {
        self.record("list_chats".to_string(), Some(token), "list_chats")?;
        Ok(self.state.lock().chats.clone())
    }

    async fn create_chat(&self, token: &str) -> Result<ChatMeta> {
        self.record("create_chat".to_string(), Some(token), "create_chat")?;
        let mut state = self.state.lock();
        state.next_id += 1;
        let chat = ChatMeta {
            id: format!("new-{}", state.next_id),
            created_at: "2024-05-01T12:00:00".to_string(),
            user_id: "ada@seattleu.edu".to_string(),
            user_name: "Ada".to_string(),
            favorite: false,
        };
        state.chats.insert(0, chat.clone());
        Ok(chat)
    }

    async fn delete_chat(&self, token: &str, chat_id: &str) -> Result<()> {
        self.record(format!("delete_chat:{}", chat_id), Some(token), "delete_chat")?;
        self.state.lock().chats.retain(|c| c.id != chat_id);
        Ok(())
    }

    async fn set_favorite(&self, token: &str, chat_id: &str, favorite: bool) -> Result<()> {
        self.record(
            format!("set_favorite:{}:{}", chat_id, favorite),
            Some(token),
            "set_favorite",
        )?;
        let mut state = self.state.lock();
        if let Some(chat) = state.chats.iter_mut().find(|c| c.id == chat_id) {
            chat.favorite = favorite;
        }
        Ok(())
    }

    async fn history(&self, token: &str, chat_id: &str) -> Result<Vec<Message>> {
        self.record(format!("history:{}", chat_id), Some(token), "history")?;
        Ok(self
            .state
            .lock()
            .histories
            .get(chat_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn send_message(&self, token: &str, chat_id: &str, message: &str) -> Result<String> {
        self.record(
            format!("send_message:{}:{}", chat_id, message),
            Some(token),
            "send_message",
        )?;
        Ok(self.state.lock().reply.clone())
    }

    async fn profile(&self, token: &str) -> Result<UserProfile> {
        self.record("profile".to_string(), Some(token), "profile")?;
        self.state.lock().profile.clone().ok_or(AppError::Api {
            status: 404,
            body: "User not found".to_string(),
        })
    }

    async fn update_profile(&self, token: &str, profile: &UserProfile) -> Result<UserProfile> {
        self.record("update_profile".to_string(), Some(token), "update_profile")?;
        self.state.lock().profile = Some(profile.clone());
        Ok(profile.clone())
    }

    async fn upload_documents(&self, token: &str, documents: &[Document]) -> Result<Vec<String>> {
        self.record(
            format!("upload_documents:{}", documents.len()),
            Some(token),
            "upload_documents",
        )?;
        Ok(documents.iter().map(|d| d.file_name.clone()).collect())
    }
}

// ============= Fixtures =============

pub fn chat(id: &str, favorite: bool) -> ChatMeta {
    ChatMeta {
        id: id.to_string(),
        created_at: "2024-03-01T10:15:00.000000".to_string(),
        user_id: "ada@seattleu.edu".to_string(),
        user_name: "Ada".to_string(),
        favorite,
    }
}

pub fn profile() -> UserProfile {
    UserProfile {
        email: "ada@seattleu.edu".to_string(),
        name: "Ada".to_string(),
        role: "user".to_string(),
        degree: Some("BSCS".to_string()),
        department: Some(String::new()),
        created_at: None,
    }
}
