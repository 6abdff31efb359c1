//! One markup fragment per mentor recommendation.

use crate::mentorship::Recommendation;
use crate::view::escape::escape_html;

/// Render a single mentor card.
///
/// Field order matches the platform's card layout: username heading, year,
/// branch, compatibility score, then the send-request action.
pub fn render_mentor_card(recommendation: &Recommendation) -> String {
    render_mentor_card_styled(recommendation, None)
}

/// Render a card with an optional inline style, used to attach the reveal
/// transition when the list is rendered statically.
pub fn render_mentor_card_styled(
    recommendation: &Recommendation,
    inline_style: Option<&str>,
) -> String {
    let mentor = &recommendation.mentor;
    let style_attr = match inline_style {
        Some(style) => format!(" style=\"{style}\""),
        None => String::new(),
    };

    format!(
        concat!(
            "<div class=\"card mentor-card\"{style}>",
            "<h3>{username}</h3>",
            "<p>Year: {year}</p>",
            "<p>Branch: {branch}</p>",
            "<p>Compatibility: {score}%</p>",
            "<button class=\"btn send-request\" data-mentor-id=\"{id}\">Send Request</button>",
            "</div>"
        ),
        style = style_attr,
        username = escape_html(&mentor.user.username),
        year = mentor.year,
        branch = escape_html(&mentor.branch),
        score = recommendation.compatibility_score,
        id = mentor.id,
    )
}
