// Unit tests for the app error type

use crate::error::UcClientError;

use client_core::error::SessionStoreError;

/// **VALUE**: Verifies each variant renders its category, message, and a
/// source location.
///
/// **WHY THIS MATTERS**: These strings are what reaches the terminal and the
/// log file; a variant that loses its location is much harder to chase.
#[test]
fn given_each_variant_when_rendered_then_carries_category_and_location() {
    let app = UcClientError::app("boom");
    let core = UcClientError::core(SessionStoreError::path_detection("no data dir"));
    let auth = UcClientError::not_authenticated("no stored session");

    assert!(app.to_string().starts_with("Client Error: boom ["));
    assert!(
        core.to_string()
            .starts_with("Core Error: Session Path Detection Error: no data dir [")
    );
    assert!(
        auth.to_string()
            .starts_with("Not Authenticated: no stored session [")
    );

    // Location points into this test file
    assert!(app.to_string().contains("error.rs"));
}

/// **VALUE**: Verifies errors serialize as tagged JSON for structured
/// consumers.
///
/// **BUG THIS CATCHES**: Dropping the serde tag attributes, which would
/// change the wire shape of every surfaced error.
#[test]
fn given_app_error_when_serialized_then_tagged_json() {
    let error = UcClientError::app("boom");

    let json = serde_json::to_value(&error).unwrap();

    assert_eq!(json["type"], "App");
    assert_eq!(json["data"]["message"], "boom");
    assert!(json["data"]["location"]["file"].is_string());
}
