//! `reqwest` implementation of [`ChatBackend`].

use super::{join_url, paths, ChatBackend, UPLOAD_FIELD};
use crate::types::{
    AppError, ChatMeta, ChatsResponse, CreatedChat, Document, FavoriteRequest, HistoryResponse,
    LoginRequest, Message, Result, SendMessageRequest, SendMessageResponse, SignupRequest,
    TokenResponse, UploadResponse, UserProfile,
};
use crate::utils::toml_config::ApiConfig;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// HTTP client for the RAG backend.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    /// Client without a request timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Client with an optional per-request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AppError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        Self::with_timeout(
            config.base_url.clone(),
            config.timeout_secs.map(Duration::from_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), "backend returned an error response");
            return Err(AppError::Api {
                status: status.as_u16(),
                body,
            });
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

#[async_trait(?Send)]
impl ChatBackend for HttpBackend {
    async fn login(&self, request: &LoginRequest) -> Result<String> {
        let req = self.client.post(self.url(paths::LOGIN)).json(request);
        let body: TokenResponse = Self::decode(self.execute(req).await?).await?;
        Ok(body.token)
    }

    async fn signup(&self, request: &SignupRequest) -> Result<String> {
        let req = self.client.post(self.url(paths::SIGNUP)).json(request);
        let body: TokenResponse = Self::decode(self.execute(req).await?).await?;
        Ok(body.token)
    }

    async fn list_chats(&self, token: &str) -> Result<Vec<ChatMeta>> {
        let req = self.client.get(self.url(paths::CHATS)).bearer_auth(token);
        let body: ChatsResponse = Self::decode(self.execute(req).await?).await?;
        Ok(body.chats)
    }

    async fn create_chat(&self, token: &str) -> Result<ChatMeta> {
        let req = self.client.post(self.url(paths::CHATS)).bearer_auth(token);
        let body: CreatedChat = Self::decode(self.execute(req).await?).await?;
        Ok(body.into())
    }

    async fn delete_chat(&self, token: &str, chat_id: &str) -> Result<()> {
        let req = self
            .client
            .delete(self.url(&paths::chat(chat_id)))
            .bearer_auth(token);
        self.execute(req).await?;
        Ok(())
    }

    async fn set_favorite(&self, token: &str, chat_id: &str, favorite: bool) -> Result<()> {
        let req = self
            .client
            .post(self.url(&paths::favorite(chat_id)))
            .bearer_auth(token)
            .json(&FavoriteRequest { favorite });
        self.execute(req).await?;
        Ok(())
    }

    async fn history(&self, token: &str, chat_id: &str) -> Result<Vec<Message>> {
        let req = self
            .client
            .get(self.url(&paths::history(chat_id)))
            .bearer_auth(token);
        let body: HistoryResponse = Self::decode(self.execute(req).await?).await?;
        Ok(body.history)
    }

    async fn send_message(&self, token: &str, chat_id: &str, message: &str) -> Result<String> {
        let req = self
            .client
            .post(self.url(&paths::message(chat_id)))
            .bearer_auth(token)
            .json(&SendMessageRequest {
                message: message.to_string(),
            });
        let body: SendMessageResponse = Self::decode(self.execute(req).await?).await?;
        Ok(body.response)
    }

    async fn profile(&self, token: &str) -> Result<UserProfile> {
        let req = self.client.get(self.url(paths::PROFILE)).bearer_auth(token);
        Self::decode(self.execute(req).await?).await
    }

    async fn update_profile(&self, token: &str, profile: &UserProfile) -> Result<UserProfile> {
        let req = self
            .client
            .put(self.url(paths::PROFILE))
            .bearer_auth(token)
            .json(profile);
        Self::decode(self.execute(req).await?).await
    }

    async fn upload_documents(&self, token: &str, documents: &[Document]) -> Result<Vec<String>> {
        let mut form = Form::new();
        for doc in documents {
            let part = Part::bytes(doc.bytes.clone())
                .file_name(doc.file_name.clone())
                .mime_str(&doc.content_type)
                .map_err(|e| AppError::InvalidInput(format!("{}: {}", doc.file_name, e)))?;
            form = form.part(UPLOAD_FIELD, part);
        }

        let req = self
            .client
            .post(self.url(paths::UPLOAD))
            .bearer_auth(token)
            .multipart(form);
        let body: UploadResponse = Self::decode(self.execute(req).await?).await?;
        Ok(body.processed_files)
    }
}
