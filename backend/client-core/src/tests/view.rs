// Unit tests for mentor list rendering and HTML escaping

use crate::mentorship::{MentorProfile, MentorUser, Recommendation};
use crate::view::{MentorListView, escape_html, render_mentor_card};

fn recommendation(username: &str, year: u32, branch: &str, score: f64) -> Recommendation {
    Recommendation {
        mentor: MentorProfile {
            id: 1,
            user: MentorUser {
                username: username.to_string(),
            },
            year,
            branch: branch.to_string(),
        },
        compatibility_score: score,
    }
}

/// **VALUE**: Verifies a card renders the four fields in their layout order:
/// username, year, branch, compatibility.
///
/// **WHY THIS MATTERS**: The dashboard template and its CSS key off this
/// structure; reordering fields silently breaks the card layout.
///
/// **BUG THIS CATCHES**: Field order drift or a dropped `%` on the score.
#[test]
fn given_recommendation_when_rendered_then_fields_appear_in_order() {
    let card = render_mentor_card(&recommendation("bob", 2, "CS", 87.0));

    let username = card.find("bob").expect("username rendered");
    let year = card.find("Year: 2").expect("year rendered");
    let branch = card.find("Branch: CS").expect("branch rendered");
    let score = card.find("Compatibility: 87%").expect("score rendered");

    assert!(username < year && year < branch && branch < score);
}

/// **VALUE**: Verifies the send-request action carries the mentor id as a
/// data attribute, not an inline handler.
///
/// **WHY THIS MATTERS**: The original emitted `onclick="sendRequest(N)"`,
/// which both assumed an undefined global and re-opened the injection
/// surface. The data attribute is the parameterized replacement.
#[test]
fn given_recommendation_when_rendered_then_action_uses_data_attribute() {
    let card = render_mentor_card(&recommendation("bob", 2, "CS", 87.0));

    assert!(card.contains("data-mentor-id=\"1\""));
    assert!(!card.contains("onclick"));
}

/// **VALUE**: Verifies server-supplied fields are entity-escaped before
/// interpolation into markup.
///
/// **WHY THIS MATTERS**: Mentor usernames and branches are user-controlled
/// upstream. The browser original interpolated them raw into innerHTML; this
/// is the regression test for that injection exposure.
///
/// **BUG THIS CATCHES**: Any rendering path that bypasses `escape_html`.
#[test]
fn given_markup_in_fields_when_rendered_then_escaped() {
    let card = render_mentor_card(&recommendation(
        "<script>alert(1)</script>",
        2,
        "C&S \"branch\"",
        87.0,
    ));

    assert!(!card.contains("<script>"));
    assert!(card.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(card.contains("C&amp;S &quot;branch&quot;"));
}

/// **VALUE**: Verifies `display` replaces the container contents: previous
/// cards are cleared, new cards appended in order.
#[test]
fn given_populated_list_when_displayed_again_then_contents_replaced() {
    let mut view = MentorListView::new();

    view.display(&[recommendation("alice", 3, "EE", 91.0)]);
    assert_eq!(view.len(), 1);

    view.display(&[
        recommendation("bob", 2, "CS", 87.0),
        recommendation("carol", 4, "ME", 75.5),
    ]);

    assert_eq!(view.len(), 2);
    assert!(view.items()[0].contains("bob"));
    assert!(view.items()[1].contains("carol"));
    assert!(view.to_html().contains("Compatibility: 75.5%"));
    assert!(!view.to_html().contains("alice"));
}

/// **VALUE**: Verifies displaying an empty recommendation list clears any
/// pre-existing content and adds nothing.
#[test]
fn given_populated_list_when_displayed_empty_then_container_is_empty() {
    let mut view = MentorListView::new();
    view.display(&[recommendation("alice", 3, "EE", 91.0)]);

    view.display(&[]);

    assert!(view.is_empty());
    assert_eq!(view.to_html(), "");
}

/// **VALUE**: Verifies the escape table covers the five significant HTML
/// characters and leaves everything else alone.
#[test]
fn given_plain_and_special_text_when_escaped_then_only_entities_change() {
    assert_eq!(escape_html("plain text-42"), "plain text-42");
    assert_eq!(escape_html("a&b<c>d\"e'f"), "a&amp;b&lt;c&gt;d&quot;e&#39;f");
}
