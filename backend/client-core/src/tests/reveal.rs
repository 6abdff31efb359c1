// Unit tests for the staggered card reveal schedule

use crate::effects::reveal::{
    CARD_HIDDEN_STYLE, CARD_STAGGER_STEP, reveal_schedule, reveal_schedule_reduced,
};

use std::time::Duration;

/// **VALUE**: Verifies each card's reveal delay is exactly `index * 50ms`.
///
/// **WHY THIS MATTERS**: The lazy staggered entrance is the page's signature
/// load effect. The rule is one line - card i begins no earlier than
/// i * 50ms - and this pins it down for any N.
///
/// **BUG THIS CATCHES**: An off-by-one (first card delayed), a wrong stagger
/// step, or an accidental reordering of the schedule.
#[test]
fn given_n_cards_when_scheduled_then_delay_is_index_times_step() {
    let schedule = reveal_schedule(8);

    assert_eq!(schedule.len(), 8);
    for (i, step) in schedule.iter().enumerate() {
        assert_eq!(step.index, i);
        assert_eq!(step.delay, CARD_STAGGER_STEP * i as u32);
    }

    assert_eq!(schedule[0].delay, Duration::ZERO);
    assert_eq!(schedule[7].delay, Duration::from_millis(350));
}

/// **VALUE**: Verifies an empty page produces an empty schedule, not a panic
/// or a phantom step.
#[test]
fn given_zero_cards_when_scheduled_then_schedule_is_empty() {
    assert!(reveal_schedule(0).is_empty());
}

/// **VALUE**: Verifies the hidden and revealed styles carry the exact CSS
/// the original page applied around each reveal.
///
/// **WHY THIS MATTERS**: The reveal is implemented as a pair of style
/// mutations; if either string drifts, cards stay invisible or jump without
/// animating.
///
/// **BUG THIS CATCHES**: Losing the transform reset or the transition
/// declaration from the revealed style.
#[test]
fn given_reveal_step_when_styles_rendered_then_match_page_css() {
    let schedule = reveal_schedule(1);
    let step = &schedule[0];

    assert_eq!(CARD_HIDDEN_STYLE, "opacity: 0; transform: translateY(20px)");
    assert_eq!(
        step.revealed_style(),
        "transition: all 0.6s cubic-bezier(0.4, 0, 0.2, 1); opacity: 1; transform: translateY(0)"
    );
}

/// **VALUE**: Verifies the static inline style embeds the per-card delay as
/// `transition-delay`, so server-rendered cards stagger without timers.
#[test]
fn given_third_card_when_inline_style_rendered_then_carries_its_delay() {
    let schedule = reveal_schedule(3);

    assert!(schedule[2].inline_style().ends_with("transition-delay: 0.1s"));
}

/// **VALUE**: Verifies reduced motion removes the stagger but keeps the
/// transition itself.
///
/// **WHY THIS MATTERS**: `ui.reduce_motion` must not degrade into cards
/// popping in with no animation at all, and must not keep the stagger.
#[test]
fn given_reduced_motion_when_scheduled_then_all_delays_are_zero() {
    let schedule = reveal_schedule_reduced(5);

    assert_eq!(schedule.len(), 5);
    for step in &schedule {
        assert_eq!(step.delay, Duration::ZERO);
    }
}
