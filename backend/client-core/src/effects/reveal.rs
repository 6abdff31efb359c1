//! Staggered card entrance.
//!
//! Cards start transparent and offset, then slide into place one after the
//! other. The delay for card *i* is exactly `i * CARD_STAGGER_STEP`; the
//! reveal itself uses the standard 600 ms eased transition.

use crate::effects::transition::{CARD_REVEAL, Transition};

use std::time::Duration;

/// Gap between consecutive card reveals.
pub const CARD_STAGGER_STEP: Duration = Duration::from_millis(50);

/// Style applied before the reveal begins.
pub const CARD_HIDDEN_STYLE: &str = "opacity: 0; transform: translateY(20px)";

/// One card's slot in the reveal sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStep {
    pub index: usize,
    pub delay: Duration,
    pub transition: Transition,
}

impl RevealStep {
    /// Style once the reveal has run.
    pub fn revealed_style(&self) -> String {
        format!(
            "transition: {}; opacity: 1; transform: translateY(0)",
            self.transition.css()
        )
    }

    /// Complete inline style for a statically rendered card: the element
    /// carries its own delay instead of relying on a timer in the page.
    pub fn inline_style(&self) -> String {
        format!(
            "{CARD_HIDDEN_STYLE}; transition: {}; transition-delay: {}s",
            self.transition.css(),
            self.delay.as_millis() as f32 / 1000.0
        )
    }
}

/// Build the reveal sequence for `card_count` cards.
///
/// Step `i` never begins before `i * CARD_STAGGER_STEP` after initialization.
pub fn reveal_schedule(card_count: usize) -> Vec<RevealStep> {
    (0..card_count)
        .map(|index| RevealStep {
            index,
            delay: CARD_STAGGER_STEP * index as u32,
            transition: CARD_REVEAL,
        })
        .collect()
}

/// Reveal sequence with no stagger and no offset delay, for reduced-motion
/// preferences. The transition still runs so cards do not pop in abruptly.
pub fn reveal_schedule_reduced(card_count: usize) -> Vec<RevealStep> {
    (0..card_count)
        .map(|index| RevealStep {
            index,
            delay: Duration::ZERO,
            transition: CARD_REVEAL,
        })
        .collect()
}
