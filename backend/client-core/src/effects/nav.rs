//! Navigation chrome: mobile menu toggle, hover styling, icon rendering.
//!
//! The browser original registered its page-ready work twice (two
//! `DOMContentLoaded` listeners), so the menu listener and the icon call each
//! ran twice per load. Consolidated here into [`PageEffects::initialize`],
//! which runs at most once.

use crate::effects::transition::{HOVER, MENU_TOGGLE, Transition};

use log::debug;

/// Element id of the mobile menu toggle control.
pub const MOBILE_MENU_TOGGLE_ID: &str = "mobile-menu-toggle";

/// Element id of the collapsible nav links container.
pub const NAV_LINKS_CONTAINER_ID: &str = "nav-links-container";

/// Class toggled on the nav container when the menu is open.
pub const ACTIVE_CLASS: &str = "active";

/// Selectors receiving the hover transition.
pub const HOVER_TARGETS: [&str; 3] = [".btn", ".nav-link", ".dropdown-item"];

/// Transition applied to hover targets on mouse enter.
pub const fn hover_transition() -> Transition {
    HOVER
}

/// Icon-rendering collaborator, detected by presence.
///
/// When the host page carries an icon library this is `Some`; when it
/// doesn't, icon setup is skipped without error.
pub trait IconRenderer {
    fn create_icons(&self);
}

/// State of the collapsible mobile menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    active: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the menu open/closed. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.active = !self.active;
        self.active
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Classes currently on the nav container.
    pub fn class_list(&self) -> Vec<&'static str> {
        if self.active {
            vec![ACTIVE_CLASS]
        } else {
            Vec::new()
        }
    }

    /// Transition to set on the container when toggling.
    pub fn transition(&self) -> Transition {
        MENU_TOGGLE
    }
}

/// One-shot page initialization.
#[derive(Debug, Default)]
pub struct PageEffects {
    initialized: bool,
    pub menu: NavMenu,
}

impl PageEffects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run page-ready setup: icon rendering (if the collaborator is present)
    /// and menu state. Idempotent; returns `true` only on the call that
    /// actually ran.
    pub fn initialize(&mut self, icons: Option<&dyn IconRenderer>) -> bool {
        if self.initialized {
            debug!("Page effects already initialized, skipping");
            return false;
        }

        if let Some(renderer) = icons {
            renderer.create_icons();
        } else {
            debug!("No icon renderer present, skipping icon setup");
        }

        self.initialized = true;
        true
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}
