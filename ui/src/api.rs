//! Browser backend for the RAG server, plus the spawn-and-apply helpers the
//! pages use to keep the shared chat state in sync.

use crate::state::AppState;
use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_storage::{LocalStorage, Storage};
use js_sys::{Array, Uint8Array};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use serde::Serialize;
use su_rag::api::{join_url, paths, ChatBackend, UPLOAD_FIELD};
use su_rag::auth::TokenStore;
use su_rag::types::{
    AppError, ChatMeta, ChatsResponse, CreatedChat, Document, FavoriteRequest, HistoryResponse,
    LoginRequest, Message, Result, SendMessageRequest, SendMessageResponse, SignupRequest,
    TokenResponse, UploadResponse, UserProfile,
};
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, FormData};

// ============= Token Storage =============

/// Local storage key holding the raw bearer token.
const STORAGE_KEY_TOKEN: &str = "token";

/// Token store backed by `window.localStorage`. The token is stored as the
/// plain string, not JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageTokenStore;

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<String> {
        LocalStorage::raw()
            .get_item(STORAGE_KEY_TOKEN)
            .ok()
            .flatten()
            .filter(|t| !t.is_empty())
    }

    fn save(&self, token: &str) -> Result<()> {
        LocalStorage::raw()
            .set_item(STORAGE_KEY_TOKEN, token)
            .map_err(|e| AppError::Storage(format!("{:?}", e)))
    }

    fn clear(&self) -> Result<()> {
        LocalStorage::delete(STORAGE_KEY_TOKEN);
        Ok(())
    }
}

// ============= HTTP Backend =============

/// `gloo-net` implementation of [`ChatBackend`].
#[derive(Debug, Clone)]
pub struct GlooBackend {
    base_url: String,
}

impl GlooBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    fn authed(builder: RequestBuilder, token: &str) -> RequestBuilder {
        builder.header("Authorization", &format!("Bearer {}", token))
    }

    fn with_json<T: Serialize>(builder: RequestBuilder, body: &T) -> Result<Request> {
        builder
            .json(body)
            .map_err(|e| AppError::InvalidInput(e.to_string()))
    }

    fn build(builder: RequestBuilder) -> Result<Request> {
        builder
            .build()
            .map_err(|e| AppError::Network(e.to_string()))
    }

    async fn execute(request: Request) -> Result<Response> {
        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Api { status, body });
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        response
            .json::<T>()
            .await
            .map_err(|e| AppError::Decode(e.to_string()))
    }
}

fn multipart(documents: &[Document]) -> Result<FormData> {
    let js_err = |e: JsValue| AppError::InvalidInput(format!("{:?}", e));
    let form = FormData::new().map_err(js_err)?;

    for doc in documents {
        let parts = Array::new();
        parts.push(&Uint8Array::from(doc.bytes.as_slice()));

        let options = BlobPropertyBag::new();
        options.set_type(&doc.content_type);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_err)?;

        form.append_with_blob_and_filename(UPLOAD_FIELD, &blob, &doc.file_name)
            .map_err(js_err)?;
    }
    Ok(form)
}

#[async_trait(?Send)]
impl ChatBackend for GlooBackend {
    async fn login(&self, request: &LoginRequest) -> Result<String> {
        let req = Self::with_json(Request::post(&self.url(paths::LOGIN)), request)?;
        let body: TokenResponse = Self::decode(Self::execute(req).await?).await?;
        Ok(body.token)
    }

    async fn signup(&self, request: &SignupRequest) -> Result<String> {
        let req = Self::with_json(Request::post(&self.url(paths::SIGNUP)), request)?;
        let body: TokenResponse = Self::decode(Self::execute(req).await?).await?;
        Ok(body.token)
    }

    async fn list_chats(&self, token: &str) -> Result<Vec<ChatMeta>> {
        let req = Self::build(Self::authed(Request::get(&self.url(paths::CHATS)), token))?;
        let body: ChatsResponse = Self::decode(Self::execute(req).await?).await?;
        Ok(body.chats)
    }

    async fn create_chat(&self, token: &str) -> Result<ChatMeta> {
        let req = Self::build(Self::authed(Request::post(&self.url(paths::CHATS)), token))?;
        let body: CreatedChat = Self::decode(Self::execute(req).await?).await?;
        Ok(body.into())
    }

    async fn delete_chat(&self, token: &str, chat_id: &str) -> Result<()> {
        let req = Self::build(Self::authed(
            Request::delete(&self.url(&paths::chat(chat_id))),
            token,
        ))?;
        Self::execute(req).await?;
        Ok(())
    }

    async fn set_favorite(&self, token: &str, chat_id: &str, favorite: bool) -> Result<()> {
        let req = Self::with_json(
            Self::authed(Request::post(&self.url(&paths::favorite(chat_id))), token),
            &FavoriteRequest { favorite },
        )?;
        Self::execute(req).await?;
        Ok(())
    }

    async fn history(&self, token: &str, chat_id: &str) -> Result<Vec<Message>> {
        let req = Self::build(Self::authed(
            Request::get(&self.url(&paths::history(chat_id))),
            token,
        ))?;
        let body: HistoryResponse = Self::decode(Self::execute(req).await?).await?;
        Ok(body.history)
    }

    async fn send_message(&self, token: &str, chat_id: &str, message: &str) -> Result<String> {
        let req = Self::with_json(
            Self::authed(Request::post(&self.url(&paths::message(chat_id))), token),
            &SendMessageRequest {
                message: message.to_string(),
            },
        )?;
        let body: SendMessageResponse = Self::decode(Self::execute(req).await?).await?;
        Ok(body.response)
    }

    async fn profile(&self, token: &str) -> Result<UserProfile> {
        let req = Self::build(Self::authed(Request::get(&self.url(paths::PROFILE)), token))?;
        Self::decode(Self::execute(req).await?).await
    }

    async fn update_profile(&self, token: &str, profile: &UserProfile) -> Result<UserProfile> {
        let req = Self::with_json(
            Self::authed(Request::put(&self.url(paths::PROFILE)), token),
            profile,
        )?;
        Self::decode(Self::execute(req).await?).await
    }

    async fn upload_documents(&self, token: &str, documents: &[Document]) -> Result<Vec<String>> {
        let form = multipart(documents)?;
        let req = Self::authed(Request::post(&self.url(paths::UPLOAD)), token)
            .body(form)
            .map_err(|e| AppError::InvalidInput(e.to_string()))?;
        let body: UploadResponse = Self::decode(Self::execute(req).await?).await?;
        Ok(body.processed_files)
    }
}

// ============= State Actions =============
//
// Each action applies its local mutation immediately and spawns the request.
// Responses are applied through the same `ChatList`/`ChatWindow` methods the
// native controller uses, so stale replies are dropped the same way.

/// Replace the chat list with the backend's. Failures are only logged.
pub fn load_chats(state: AppState) {
    spawn_local(async move {
        let backend = state.backend();
        let result = match state.session.bearer() {
            Ok(token) => backend.list_chats(&token).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(chats) => state.chats.update(|list| list.replace_all(chats)),
            Err(e) => tracing::warn!("Failed to load chats: {}", e),
        }
    });
}

pub fn create_chat(state: AppState) {
    spawn_local(async move {
        let backend = state.backend();
        let result = match state.session.bearer() {
            Ok(token) => backend.create_chat(&token).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(chat) => {
                let id = chat.id.clone();
                state.chats.update(|list| list.prepend(chat));
                state.window.update(|w| w.activate_new(&id));
            }
            Err(e) => tracing::warn!("Failed to create chat: {}", e),
        }
    });
}

pub fn delete_chat(state: AppState, chat_id: String) {
    state.chats.update(|list| {
        list.remove(&chat_id);
    });
    state.window.update(|w| {
        if w.active() == Some(chat_id.as_str()) {
            w.clear();
        }
    });

    spawn_local(async move {
        let backend = state.backend();
        let result = match state.session.bearer() {
            Ok(token) => backend.delete_chat(&token, &chat_id).await,
            Err(e) => Err(e),
        };
        if let Err(e) = result {
            tracing::warn!("Delete of {} failed, reloading: {}", chat_id, e);
            load_chats(state);
        }
    });
}

pub fn toggle_favorite(state: AppState, chat_id: String, favorite: bool) {
    state.chats.update(|list| {
        list.set_favorite(&chat_id, favorite);
    });

    spawn_local(async move {
        let backend = state.backend();
        let result = match state.session.bearer() {
            Ok(token) => backend.set_favorite(&token, &chat_id, favorite).await,
            Err(e) => Err(e),
        };
        if let Err(e) = result {
            tracing::warn!("Favorite update of {} failed, reloading: {}", chat_id, e);
            load_chats(state);
        }
    });
}

/// Make `chat_id` active and fetch its history, once per change.
pub fn select_chat(state: AppState, chat_id: String) {
    let Some(ticket) = state.window.try_update(|w| w.select(Some(&chat_id))).flatten() else {
        return;
    };

    spawn_local(async move {
        let backend = state.backend();
        let result = match state.session.bearer() {
            Ok(token) => backend.history(&token, &ticket.chat_id).await,
            Err(e) => Err(e),
        };
        state.window.update(|w| {
            w.apply_history(&ticket, result);
        });
    });
}

pub fn send_message(state: AppState, text: String) {
    let Some(ticket) = state.window.try_update(|w| w.begin_send(&text)).flatten() else {
        return;
    };

    spawn_local(async move {
        let backend = state.backend();
        let result = match state.session.bearer() {
            Ok(token) => backend.send_message(&token, &ticket.chat_id, &text).await,
            Err(e) => Err(e),
        };
        state.window.update(|w| {
            w.apply_reply(&ticket, result);
        });
    });
}

/// Read every selected file into memory for upload.
pub async fn read_files(files: web_sys::FileList) -> Result<Vec<Document>> {
    let mut documents = Vec::with_capacity(files.length() as usize);
    for i in 0..files.length() {
        let Some(file) = files.get(i) else {
            continue;
        };
        let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
            .await
            .map_err(|e| AppError::InvalidInput(format!("{:?}", e)))?;
        documents.push(Document::new(file.name(), Uint8Array::new(&buffer).to_vec()));
    }
    Ok(documents)
}
