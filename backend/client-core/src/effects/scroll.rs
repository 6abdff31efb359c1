//! Same-page anchor scrolling.
//!
//! Clicks on `a[href^="#"]` links suppress navigation and scroll the target
//! into view. A missing target is a silent no-op, never an error.

use std::collections::HashSet;

/// Scroll animation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Auto,
}

/// Vertical alignment of the scrolled-to element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBlock {
    Start,
    Center,
    End,
}

/// Directive to scroll one element into view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollCommand {
    pub target_id: String,
    pub behavior: ScrollBehavior,
    pub block: ScrollBlock,
}

/// Index of the element ids present in the host document.
#[derive(Debug, Default, Clone)]
pub struct AnchorIndex {
    ids: HashSet<String>,
}

impl AnchorIndex {
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Resolve an anchor href to a scroll directive.
    ///
    /// Returns `Some` exactly when `href` is a same-page anchor (`#...`)
    /// whose target id exists; otherwise `None`.
    pub fn resolve(&self, href: &str) -> Option<ScrollCommand> {
        let target_id = href.strip_prefix('#')?;

        if target_id.is_empty() || !self.ids.contains(target_id) {
            return None;
        }

        Some(ScrollCommand {
            target_id: target_id.to_string(),
            behavior: ScrollBehavior::Smooth,
            block: ScrollBlock::Start,
        })
    }
}
