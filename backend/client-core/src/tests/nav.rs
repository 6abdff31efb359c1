// Unit tests for nav chrome: menu toggle, idempotent page init, icon
// capability detection

use crate::effects::nav::{ACTIVE_CLASS, HOVER_TARGETS, IconRenderer, NavMenu, PageEffects};

use std::cell::Cell;

struct CountingIcons {
    calls: Cell<u32>,
}

impl IconRenderer for CountingIcons {
    fn create_icons(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}

/// **VALUE**: Verifies the menu toggle flips the `active` class on and off.
///
/// **WHY THIS MATTERS**: The mobile menu is pure class toggling; the webview
/// only mirrors `class_list()` onto the container.
#[test]
fn given_closed_menu_when_toggled_twice_then_returns_to_closed() {
    let mut menu = NavMenu::new();
    assert!(!menu.is_active());
    assert!(menu.class_list().is_empty());

    assert!(menu.toggle());
    assert_eq!(menu.class_list(), vec![ACTIVE_CLASS]);

    assert!(!menu.toggle());
    assert!(menu.class_list().is_empty());
}

/// **VALUE**: Verifies page initialization runs its work exactly once.
///
/// **WHY THIS MATTERS**: The browser original registered two page-ready
/// listeners, so icon setup and the menu listener each ran twice per load.
/// The consolidated initializer is the fix; this pins the idempotence down.
///
/// **BUG THIS CATCHES**: Re-running icon setup (and with it, double-bound
/// listeners) if the initialized guard is dropped.
#[test]
fn given_initialized_page_when_initialized_again_then_noop() {
    let icons = CountingIcons {
        calls: Cell::new(0),
    };
    let mut effects = PageEffects::new();

    assert!(effects.initialize(Some(&icons)));
    assert!(!effects.initialize(Some(&icons)));

    assert_eq!(icons.calls.get(), 1);
    assert!(effects.is_initialized());
}

/// **VALUE**: Verifies a page without an icon library initializes cleanly.
///
/// **WHY THIS MATTERS**: The icon renderer is capability-detected, not a
/// hard dependency; its absence must not be an error.
#[test]
fn given_no_icon_renderer_when_initialized_then_succeeds() {
    let mut effects = PageEffects::new();

    assert!(effects.initialize(None));
    assert!(effects.is_initialized());
}

/// **VALUE**: Verifies the hover transition targets cover the three
/// interactive element kinds the pages use.
#[test]
fn given_hover_targets_then_cover_buttons_nav_links_and_dropdown_items() {
    assert_eq!(HOVER_TARGETS, [".btn", ".nav-link", ".dropdown-item"]);
}
