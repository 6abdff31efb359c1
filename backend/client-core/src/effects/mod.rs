//! Presentation effects for the host page.
//!
//! Pure computations: every function here turns page structure into style
//! and class directives for the webview to apply. Nothing performs I/O,
//! nothing retries, and a missing element is always a silent no-op.

pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod transition;

pub use nav::{IconRenderer, NavMenu, PageEffects};
pub use reveal::{RevealStep, reveal_schedule, reveal_schedule_reduced};
pub use scroll::{AnchorIndex, ScrollBehavior, ScrollBlock, ScrollCommand};
pub use transition::{CubicBezier, Transition};
