// Unit tests for mentorship error categorization

use crate::error::MentorshipError;

/// **VALUE**: Verifies `needs_login` flags exactly the failures that make the
/// stored session unusable: the missing-token precondition and 401/403
/// rejections.
///
/// **WHY THIS MATTERS**: The command layer clears the in-memory session on
/// `needs_login()`. Over-matching logs the user out on transient server
/// faults; under-matching leaves a dead token in place.
///
/// **BUG THIS CATCHES**: Status categorization drifting to cover all 4xx (a
/// 400 is a bad request, not a bad session) or missing 403.
#[test]
fn given_each_failure_kind_then_needs_login_only_for_auth_rejections() {
    assert!(MentorshipError::not_authenticated("no stored session").needs_login());
    assert!(MentorshipError::server(401, "token expired").needs_login());
    assert!(MentorshipError::server(403, "forbidden").needs_login());

    assert!(!MentorshipError::server(400, "bad request").needs_login());
    assert!(!MentorshipError::server(500, "upstream exploded").needs_login());
}
