// Unit tests for the transition module
// Tests CSS rendering of easing curves and named transitions

use crate::effects::transition::{
    CARD_REVEAL, CubicBezier, HOVER, MENU_TOGGLE, PAGE_FADE, SMOOTH, Transition,
};

use std::time::Duration;

/// **VALUE**: Verifies the house easing curve renders as the exact CSS the
/// platform's stylesheets expect.
///
/// **WHY THIS MATTERS**: The webview applies these strings verbatim. A
/// formatting drift (e.g. `0.0` instead of `0`) still parses as CSS but would
/// diverge from the stylesheet-declared curves and is a sign the renderer
/// changed behavior.
///
/// **BUG THIS CATCHES**: Float formatting regressions in the Display impl.
#[test]
fn given_smooth_curve_when_rendered_then_matches_stylesheet_syntax() {
    assert_eq!(SMOOTH.to_string(), "cubic-bezier(0.4, 0, 0.2, 1)");
}

/// **VALUE**: Verifies every named transition renders with its documented
/// property and duration.
///
/// **WHY THIS MATTERS**: These four constants are the entire motion design of
/// the client; each one is applied somewhere different (cards, hover targets,
/// page body, nav container).
///
/// **BUG THIS CATCHES**: A swapped duration or property between constants.
#[test]
fn given_named_transitions_when_rendered_then_css_values_match() {
    assert_eq!(CARD_REVEAL.css(), "all 0.6s cubic-bezier(0.4, 0, 0.2, 1)");
    assert_eq!(HOVER.css(), "all 0.3s cubic-bezier(0.4, 0, 0.2, 1)");
    assert_eq!(PAGE_FADE.css(), "opacity 0.4s cubic-bezier(0.4, 0, 0.2, 1)");
    assert_eq!(MENU_TOGGLE.css(), "all 0.3s cubic-bezier(0.4, 0, 0.2, 1)");
}

/// **VALUE**: Verifies custom transitions go through the same rendering path.
///
/// **BUG THIS CATCHES**: Hard-coded values leaking into `css()` instead of
/// using the struct fields.
#[test]
fn given_custom_transition_when_rendered_then_uses_own_fields() {
    let transition = Transition {
        property: "transform",
        duration: Duration::from_millis(150),
        easing: CubicBezier {
            x1: 0.25,
            y1: 0.1,
            x2: 0.25,
            y2: 1.0,
        },
    };

    assert_eq!(
        transition.css(),
        "transform 0.15s cubic-bezier(0.25, 0.1, 0.25, 1)"
    );
}
