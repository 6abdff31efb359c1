use uc_client::commands;
use uc_client::error::UcClientError;
use uc_client::state::AppState;

use client_core::auth::AuthClient;
use client_core::config::ClientConfig;
use client_core::mentorship::MentorClient;
use client_core::session::FileTokenStore;

use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/auth/login/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tokens": {"access": "A", "refresh": "R"}
        })))
        .mount(server)
        .await;
}

async fn mock_api() -> MockServer {
    let server = MockServer::start().await;

    mock_login(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/mentorship/requests/find_mentors/"))
        .and(header("authorization", "Bearer A"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "recommendations": [{
                "mentor": {
                    "id": 1,
                    "user": {"username": "bob"},
                    "year": 2,
                    "branch": "CS"
                },
                "compatibility_score": 87
            }]
        })))
        .mount(&server)
        .await;

    server
}

/// **VALUE**: Verifies the authenticate-then-fetch-then-render flow end to
/// end: login persists the session to disk and into app state, discovery
/// reads it back, and the rendered output carries the staggered-reveal
/// styling.
///
/// **WHY THIS MATTERS**: This is the one sequence the dashboard depends on.
/// The two HTTP calls only compose through the session file; this test is
/// what catches the pieces drifting apart.
#[tokio::test]
async fn given_fresh_profile_when_login_then_mentors_renders_cards() {
    let server = mock_api().await;
    let dir = TempDir::new().unwrap();

    let state = AppState::new();
    let store = FileTokenStore::at(dir.path().join("session.json"));
    let auth_client = AuthClient::new(&server.uri()).unwrap();
    let mentor_client = MentorClient::new(&server.uri()).unwrap();
    let mut config = ClientConfig::default();
    config.server.api_base_url = server.uri();

    let outcome = commands::auth::login(&state, &auth_client, &store, "alice", "secret")
        .await
        .expect("login succeeds");
    assert_eq!(outcome.navigate_to, "/dashboard");
    assert!(state.is_authenticated().await);

    let html = commands::mentors::find_mentors(&state, &mentor_client, &store, &config)
        .await
        .expect("discovery succeeds");

    assert!(html.contains("bob"));
    assert!(html.contains("Compatibility: 87%"));
    assert!(html.contains("transition: all 0.6s cubic-bezier(0.4, 0, 0.2, 1)"));
}

/// **VALUE**: Verifies reduced motion drops the stagger from the rendered
/// cards but keeps the reveal transition.
#[tokio::test]
async fn given_reduce_motion_when_mentors_rendered_then_no_stagger() {
    let server = mock_api().await;
    let dir = TempDir::new().unwrap();

    let state = AppState::new();
    let store = FileTokenStore::at(dir.path().join("session.json"));
    let auth_client = AuthClient::new(&server.uri()).unwrap();
    let mentor_client = MentorClient::new(&server.uri()).unwrap();
    let mut config = ClientConfig::default();
    config.server.api_base_url = server.uri();
    config.ui.reduce_motion = true;

    commands::auth::login(&state, &auth_client, &store, "alice", "secret")
        .await
        .expect("login succeeds");

    let html = commands::mentors::find_mentors(&state, &mentor_client, &store, &config)
        .await
        .expect("discovery succeeds");

    assert!(html.contains("transition-delay: 0s"));
    assert!(html.contains("transition: all 0.6s cubic-bezier(0.4, 0, 0.2, 1)"));
}

/// **VALUE**: Verifies discovery without a prior login is a typed
/// NotAuthenticated error at the command layer, before any request is made.
#[tokio::test]
async fn given_no_login_when_mentors_requested_then_not_authenticated() {
    let server = mock_api().await;
    let dir = TempDir::new().unwrap();

    let state = AppState::new();
    let store = FileTokenStore::at(dir.path().join("session.json"));
    let mentor_client = MentorClient::new(&server.uri()).unwrap();
    let config = ClientConfig::default();

    let error = commands::mentors::find_mentors(&state, &mentor_client, &store, &config)
        .await
        .expect_err("no session");

    assert!(matches!(error, UcClientError::NotAuthenticated { .. }));
}

/// **VALUE**: Verifies a rejected token logs the user out of app state before
/// the error is returned: after a 401 fetch the caller both receives
/// NotAuthenticated and observes `is_authenticated() == false`.
///
/// **WHY THIS MATTERS**: The session clear used to be fired on a detached
/// task, so the process could exit (or the caller re-read state) before it
/// ran, leaving "authenticated" state alongside an unusable-session error.
///
/// **BUG THIS CATCHES**: The error path returning before the ClearSession
/// command has been applied.
#[tokio::test]
async fn given_rejected_token_when_mentors_fetched_then_state_cleared() {
    let server = MockServer::start().await;
    mock_login(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/mentorship/requests/find_mentors/"))
        .respond_with(ResponseTemplate::new(401).set_body_string("token expired"))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let state = AppState::new();
    let store = FileTokenStore::at(dir.path().join("session.json"));
    let auth_client = AuthClient::new(&server.uri()).unwrap();
    let mentor_client = MentorClient::new(&server.uri()).unwrap();
    let config = ClientConfig::default();

    commands::auth::login(&state, &auth_client, &store, "alice", "secret")
        .await
        .expect("login succeeds");
    assert!(state.is_authenticated().await);

    let error = commands::mentors::find_mentors(&state, &mentor_client, &store, &config)
        .await
        .expect_err("fetch rejected");

    assert!(matches!(error, UcClientError::NotAuthenticated { .. }));
    assert!(
        !state.is_authenticated().await,
        "session state must be cleared before the error is returned"
    );
}
