//! HTTP backend tests
//!
//! These tests use wiremock to stand in for the RAG backend and validate:
//! - Request paths, methods and bodies for every endpoint
//! - Bearer authorization on protected calls
//! - Error mapping (raw body on non-2xx, decode and network failures)

#![cfg(feature = "http")]

use serde_json::json;
use std::time::Duration;
use su_rag::api::{ChatBackend, HttpBackend};
use su_rag::types::{
    AppError, Document, LoginRequest, Message, SignupRequest, SignupRole, UserProfile,
};
use wiremock::matchers::{body_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "tok-123";

fn bearer() -> (&'static str, String) {
    ("authorization", format!("Bearer {}", TOKEN))
}

// ============= Auth =============

#[tokio::test]
async fn test_login_returns_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({"email": "ada@seattleu.edu", "password": "pw"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": TOKEN})))
        .expect(1)
        .mount(&server)
        .await;

    let backend = HttpBackend::new(server.uri());
    let token = backend
        .login(&LoginRequest {
            email: "ada@seattleu.edu".into(),
            password: "pw".into(),
        })
        .await
        .unwrap();

    assert_eq!(token, TOKEN);
}

#[tokio::test]
async fn test_login_failure_keeps_raw_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid credentials"))
        .mount(&server)
        .await;

    let backend = HttpBackend::new(server.uri());
    let err = backend
        .login(&LoginRequest {
            email: "a@b".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Invalid credentials");
    assert!(matches!(err, AppError::Api { status: 401, .. }));
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn test_signup_sends_name_and_role() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/signup"))
        .and(body_json(json!({
            "email": "ada@seattleu.edu",
            "password": "pw",
            "name": "Ada",
            "role": "admin"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"token": TOKEN})))
        .expect(1)
        .mount(&server)
        .await;

    let backend = HttpBackend::new(server.uri());
    let token = backend
        .signup(&SignupRequest {
            email: "ada@seattleu.edu".into(),
            password: "pw".into(),
            name: "Ada".into(),
            role: SignupRole::Admin,
        })
        .await
        .unwrap();

    assert_eq!(token, TOKEN);
}

// ============= Chats =============

#[tokio::test]
async fn test_list_chats_sends_bearer() {
    let server = MockServer::start().await;
    let (name, value) = bearer();
    Mock::given(method("GET"))
        .and(path("/chats"))
        .and(header(name, value.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "chats": [
                {"id": "c1", "created_at": "2024-03-01T10:15:00.123", "userId": "ada@seattleu.edu", "userName": "Ada", "favorite": true},
                {"id": "c2", "created_at": "2024-03-02T08:00:00", "userId": "ada@seattleu.edu", "userName": "Ada", "favorite": false}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let backend = HttpBackend::new(server.uri());
    let chats = backend.list_chats(TOKEN).await.unwrap();

    assert_eq!(chats.len(), 2);
    assert_eq!(chats[0].id, "c1");
    assert!(chats[0].favorite);
    assert!(chats[1].created_at_utc().is_some());
}

#[tokio::test]
async fn test_create_chat_maps_to_meta() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "chat_id": "new-1",
            "created_at": "2024-03-01T10:15:00",
            "userId": "ada@seattleu.edu",
            "userName": "Ada"
        })))
        .mount(&server)
        .await;

    let backend = HttpBackend::new(format!("{}/", server.uri()));
    let chat = backend.create_chat(TOKEN).await.unwrap();

    assert_eq!(chat.id, "new-1");
    assert_eq!(chat.user_name, "Ada");
    assert!(!chat.favorite);
}

#[tokio::test]
async fn test_delete_chat() {
    let server = MockServer::start().await;
    let (name, value) = bearer();
    Mock::given(method("DELETE"))
        .and(path("/chats/c1"))
        .and(header(name, value.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "deleted"})))
        .expect(1)
        .mount(&server)
        .await;

    HttpBackend::new(server.uri())
        .delete_chat(TOKEN, "c1")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_set_favorite_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chats/c1/favorite"))
        .and(body_json(json!({"favorite": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "updated"})))
        .expect(1)
        .mount(&server)
        .await;

    HttpBackend::new(server.uri())
        .set_favorite(TOKEN, "c1", true)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_history() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/chats/c1/history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "history": [
                {"role": "user", "text": "Where is the library?"},
                {"role": "assistant", "text": "Lemieux Library is on campus."}
            ]
        })))
        .mount(&server)
        .await;

    let history = HttpBackend::new(server.uri())
        .history(TOKEN, "c1")
        .await
        .unwrap();

    assert_eq!(
        history,
        vec![
            Message::user("Where is the library?"),
            Message::assistant("Lemieux Library is on campus.")
        ]
    );
}

#[tokio::test]
async fn test_send_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chats/c1/message"))
        .and(body_json(json!({"message": "Hello"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "Hi there"})))
        .expect(1)
        .mount(&server)
        .await;

    let reply = HttpBackend::new(server.uri())
        .send_message(TOKEN, "c1", "Hello")
        .await
        .unwrap();

    assert_eq!(reply, "Hi there");
}

// ============= Profile & Upload =============

#[tokio::test]
async fn test_profile_roundtrip() {
    let server = MockServer::start().await;
    let stored = json!({
        "email": "ada@seattleu.edu",
        "name": "Ada",
        "role": "user",
        "degree": "MSCS",
        "department": "CS",
        "createdAt": null
    });
    Mock::given(method("GET"))
        .and(path("/user/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stored.clone()))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/user/profile"))
        .and(body_string_contains("\"department\":\"Mathematics\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "email": "ada@seattleu.edu",
            "name": "Ada",
            "role": "user",
            "degree": "MSCS",
            "department": "Mathematics",
            "createdAt": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let backend = HttpBackend::new(server.uri());
    let mut profile: UserProfile = backend.profile(TOKEN).await.unwrap();
    assert_eq!(profile.degree.as_deref(), Some("MSCS"));

    profile.department = Some("Mathematics".into());
    let saved = backend.update_profile(TOKEN, &profile).await.unwrap();
    assert_eq!(saved.department.as_deref(), Some("Mathematics"));
}

#[tokio::test]
async fn test_upload_documents_multipart() {
    let server = MockServer::start().await;
    let (name, value) = bearer();
    Mock::given(method("POST"))
        .and(path("/api/upload-documents"))
        .and(header(name, value.as_str()))
        .and(body_string_contains("name=\"documents\""))
        .and(body_string_contains("filename=\"catalog.pdf\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Documents processed successfully",
            "processed_files": ["catalog.pdf"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let processed = HttpBackend::new(server.uri())
        .upload_documents(TOKEN, &[Document::new("catalog.pdf", b"%PDF-1.4".to_vec())])
        .await
        .unwrap();

    assert_eq!(processed, vec!["catalog.pdf"]);
}

// ============= Error Mapping =============

#[tokio::test]
async fn test_server_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/chats"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = HttpBackend::new(server.uri())
        .list_chats(TOKEN)
        .await
        .unwrap_err();

    match err {
        AppError::Api { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chats/c1/message"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = HttpBackend::new(server.uri())
        .send_message(TOKEN, "c1", "Hello")
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    let uri = {
        let server = MockServer::start().await;
        server.uri()
    };

    let err = HttpBackend::new(uri).list_chats(TOKEN).await.unwrap_err();
    assert!(matches!(err, AppError::Network(_)));
}

#[tokio::test]
async fn test_timeout_applies_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/chats"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"chats": []}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let backend =
        HttpBackend::with_timeout(server.uri(), Some(Duration::from_millis(50))).unwrap();
    let err = backend.list_chats(TOKEN).await.unwrap_err();
    assert!(matches!(err, AppError::Network(_)));
}
