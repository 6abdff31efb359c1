//! Mentor discovery and request submission against a mock API.

use client_core::error::MentorshipError;
use client_core::mentorship::MentorClient;
use client_core::session::{MemoryTokenStore, SessionTokens};
use client_core::view::MentorListView;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn authenticated_store() -> MemoryTokenStore {
    MemoryTokenStore::with_tokens(SessionTokens::new("A", "R"))
}

/// **VALUE**: Verifies the full discovery flow: bearer-authorized GET,
/// parsed recommendations, and a rendered card carrying "bob", "2", "CS",
/// "87%" in that order.
///
/// **WHY THIS MATTERS**: This is the observable contract of the dashboard's
/// mentor list, stated field for field.
///
/// **BUG THIS CATCHES**: Header drift, response-shape drift, or render-order
/// drift between the client and the API.
#[tokio::test]
async fn given_stored_token_when_find_mentors_then_renders_one_ordered_card() {
    let server = MockServer::start().await;

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
        .expect(1)
        .mount(&server)
        .await;

    let client = MentorClient::new(&server.uri()).unwrap();
    let store = authenticated_store();

    let mentors = client.find_mentors(&store).await.expect("fetch succeeds");
    assert_eq!(mentors.len(), 1);

    let mut view = MentorListView::new();
    view.display(&mentors);

    assert_eq!(view.len(), 1);
    let card = &view.items()[0];
    let bob = card.find("bob").unwrap();
    let year = card.find("2").unwrap();
    let branch = card.find("CS").unwrap();
    let score = card.find("87%").unwrap();
    assert!(bob < year && year < branch && branch < score);
}

/// **VALUE**: Verifies discovery without a stored session fails the
/// precondition check before any request goes out.
///
/// **WHY THIS MATTERS**: The browser original sent `Bearer null` and hoped
/// the server rejected it. The redesign makes the missing token an explicit
/// client-side failure; `expect(0)` proves no request was even attempted.
#[tokio::test]
async fn given_no_session_when_find_mentors_then_not_authenticated_and_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/mentorship/requests/find_mentors/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = MentorClient::new(&server.uri()).unwrap();
    let store = MemoryTokenStore::new();

    let error = client
        .find_mentors(&store)
        .await
        .expect_err("precondition fails");

    assert!(matches!(error, MentorshipError::NotAuthenticated { .. }));
    assert!(error.needs_login());
}

/// **VALUE**: Verifies a non-success discovery response is a typed server
/// error carrying the status, and that a 401 flags the session as unusable.
#[tokio::test]
async fn given_expired_token_when_find_mentors_then_server_error_needs_login() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/mentorship/requests/find_mentors/"))
        .respond_with(ResponseTemplate::new(401).set_body_string("token expired"))
        .mount(&server)
        .await;

    let client = MentorClient::new(&server.uri()).unwrap();
    let store = authenticated_store();

    let error = client
        .find_mentors(&store)
        .await
        .expect_err("fetch rejected");

    match &error {
        MentorshipError::Server {
            status_code,
            message,
            ..
        } => {
            assert_eq!(status_code.0, 401);
            assert_eq!(message, "token expired");
        }
        other => panic!("expected Server, got {other:?}"),
    }
    assert!(error.needs_login());
}

/// **VALUE**: Verifies an empty recommendation list is a success that leaves
/// the rendered container empty.
#[tokio::test]
async fn given_no_recommendations_when_find_mentors_then_empty_view() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/mentorship/requests/find_mentors/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"recommendations": []})),
        )
        .mount(&server)
        .await;

    let client = MentorClient::new(&server.uri()).unwrap();
    let store = authenticated_store();

    let mentors = client.find_mentors(&store).await.expect("fetch succeeds");

    let mut view = MentorListView::new();
    view.display(&mentors);
    assert!(view.is_empty());
}

/// **VALUE**: Verifies the send-request operation posts the mentor id under
/// bearer authorization.
///
/// **WHY THIS MATTERS**: The browser original referenced `sendRequest` but
/// never defined it; this pins down the contract the cards' action buttons
/// rely on.
#[tokio::test]
async fn given_stored_token_when_send_request_then_posts_mentor_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/mentorship/requests/"))
        .and(header("authorization", "Bearer A"))
        .and(body_json(json!({"mentor_id": 7})))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let client = MentorClient::new(&server.uri()).unwrap();
    let store = authenticated_store();

    client
        .send_request(&store, 7)
        .await
        .expect("request succeeds");
}
