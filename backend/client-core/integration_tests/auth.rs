//! Login flow against a mock auth endpoint.

use client_core::auth::{AuthClient, Credentials};
use client_core::error::AuthError;
use client_core::session::{MemoryTokenStore, TokenStore};

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies the happy path end to end: credentials posted as
/// JSON, returned tokens persisted under the storage keys, outcome pointing
/// at the dashboard with the page-fade delay.
///
/// **WHY THIS MATTERS**: This is the one flow a user cannot work without.
///
/// **BUG THIS CATCHES**: Body field renames, a missed store write, or a
/// navigation target drift.
#[tokio::test]
async fn given_valid_credentials_when_login_then_tokens_stored_and_dashboard_navigation() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login/"))
        .and(body_json(json!({"username": "alice", "password": "secret"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tokens": {"access": "A", "refresh": "R"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = AuthClient::new(&server.uri()).unwrap();
    let store = MemoryTokenStore::new();
    let credentials = Credentials::new("alice", "secret");

    let outcome = client
        .login(&credentials, &store)
        .await
        .expect("login succeeds");

    let tokens = store.load().unwrap().expect("tokens stored");
    assert_eq!(tokens.access.expose(), "A");
    assert_eq!(tokens.refresh.expose(), "R");

    assert_eq!(outcome.navigate_to, "/dashboard");
    assert_eq!(outcome.navigation_delay().as_millis(), 400);
}

/// **VALUE**: Verifies a rejected login writes nothing and surfaces the
/// server's error message as a typed rejection.
///
/// **WHY THIS MATTERS**: The browser original only console-logged the error;
/// the redesign promises callers a real error and an untouched store.
///
/// **BUG THIS CATCHES**: Saving tokens before the status check, or losing
/// the server-supplied error text.
#[tokio::test]
async fn given_bad_credentials_when_login_then_rejected_and_no_storage_writes() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login/"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error": "bad credentials"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = AuthClient::new(&server.uri()).unwrap();
    let store = MemoryTokenStore::new();
    let credentials = Credentials::new("alice", "wrong");

    let error = client
        .login(&credentials, &store)
        .await
        .expect_err("login rejected");

    match error {
        AuthError::Rejected {
            status_code,
            ref message,
            ..
        } => {
            assert_eq!(status_code.0, 401);
            assert_eq!(message, "bad credentials");
        }
        other => panic!("expected Rejected, got {other:?}"),
    }

    assert!(store.load().unwrap().is_none(), "no tokens persisted");
}

/// **VALUE**: Verifies a rejection body without the expected `error` field
/// still produces a useful message (the raw body).
#[tokio::test]
async fn given_unstructured_error_body_when_login_then_raw_body_in_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let client = AuthClient::new(&server.uri()).unwrap();
    let store = MemoryTokenStore::new();

    let error = client
        .login(&Credentials::new("alice", "secret"), &store)
        .await
        .expect_err("login fails");

    assert!(error.to_string().contains("upstream exploded"));
    assert_eq!(error.status_code(), Some(500));
}

/// **VALUE**: Verifies a success status with a malformed body is a JSON
/// error, not a stored garbage session.
#[tokio::test]
async fn given_malformed_success_body_when_login_then_json_error_and_no_writes() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
        .mount(&server)
        .await;

    let client = AuthClient::new(&server.uri()).unwrap();
    let store = MemoryTokenStore::new();

    let error = client
        .login(&Credentials::new("alice", "secret"), &store)
        .await
        .expect_err("parse fails");

    assert!(matches!(error, AuthError::Http { .. } | AuthError::Json { .. }));
    assert!(store.load().unwrap().is_none());
}
