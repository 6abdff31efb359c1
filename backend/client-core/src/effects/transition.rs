//! Eased CSS transitions.
//!
//! The whole UI uses a single easing curve; durations differ per effect.

use std::fmt;
use std::time::Duration;

/// A cubic-bezier easing curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

/// The house easing curve (material "standard" curve).
pub const SMOOTH: CubicBezier = CubicBezier {
    x1: 0.4,
    y1: 0.0,
    x2: 0.2,
    y2: 1.0,
};

impl fmt::Display for CubicBezier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cubic-bezier({}, {}, {}, {})",
            self.x1, self.y1, self.x2, self.y2
        )
    }
}

/// A CSS `transition` declaration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub property: &'static str,
    pub duration: Duration,
    pub easing: CubicBezier,
}

impl Transition {
    pub const fn new(property: &'static str, duration: Duration) -> Self {
        Self {
            property,
            duration,
            easing: SMOOTH,
        }
    }

    /// Render as a CSS `transition` value, e.g.
    /// `all 0.6s cubic-bezier(0.4, 0, 0.2, 1)`.
    pub fn css(&self) -> String {
        format!("{} {}s {}", self.property, self.duration_secs(), self.easing)
    }

    fn duration_secs(&self) -> f32 {
        self.duration.as_millis() as f32 / 1000.0
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.css())
    }
}

/// Card entrance reveal.
pub const CARD_REVEAL: Transition = Transition::new("all", Duration::from_millis(600));

/// Hover styling on buttons, nav links, and dropdown items.
pub const HOVER: Transition = Transition::new("all", Duration::from_millis(300));

/// Whole-page fade before navigation.
pub const PAGE_FADE: Transition = Transition::new("opacity", Duration::from_millis(400));

/// Mobile menu open/close.
pub const MENU_TOGGLE: Transition = Transition::new("all", Duration::from_millis(300));
