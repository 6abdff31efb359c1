//! Markup rendering for the mentor list.
//!
//! The browser original interpolated server-supplied fields straight into
//! `innerHTML`. Everything rendered here goes through [`escape::escape_html`]
//! instead, and the per-card action carries the mentor id as a data
//! attribute rather than an inline handler.

pub mod escape;
pub mod mentor_card;

pub use escape::escape_html;
pub use mentor_card::{render_mentor_card, render_mentor_card_styled};

use crate::effects::reveal::RevealStep;
use crate::mentorship::Recommendation;

/// Element id of the list container in the host page.
pub const MENTOR_LIST_ID: &str = "mentor-list";

/// The `#mentor-list` container: an ordered sequence of card fragments.
#[derive(Debug, Default, Clone)]
pub struct MentorListView {
    items: Vec<String>,
}

impl MentorListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the container contents with one card per recommendation,
    /// in the given order. No reordering, no pagination, no deduplication.
    /// An empty slice leaves the container empty.
    pub fn display(&mut self, mentors: &[Recommendation]) {
        self.items.clear();
        self.items
            .extend(mentors.iter().map(render_mentor_card));
    }

    /// Like [`display`](Self::display), but each card carries its slot in
    /// the reveal schedule as an inline style.
    pub fn display_with_reveal(&mut self, mentors: &[Recommendation], schedule: &[RevealStep]) {
        self.items.clear();
        self.items.extend(mentors.iter().enumerate().map(|(i, mentor)| {
            let style = schedule.get(i).map(|step| step.inline_style());
            render_mentor_card_styled(mentor, style.as_deref())
        }));
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Joined fragments for injection into the container.
    pub fn to_html(&self) -> String {
        self.items.concat()
    }
}
