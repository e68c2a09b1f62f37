//! The rendering surface the page core drives.

use shared::domain::SectionId;

/// What the core needs from whatever is drawing the page: scroll queries,
/// element lookup, smooth scrolling, and the background scroll lock.
pub trait PageHost {
    /// Current vertical scroll offset of the page, never negative.
    fn scroll_offset(&self) -> f32;

    /// Top edge of the section relative to the viewport, or `None` when the
    /// section is not laid out.
    fn element_top(&self, section: &SectionId) -> Option<f32>;

    /// Starts an eased scroll towards `offset`.
    fn smooth_scroll_to(&mut self, offset: f32);

    fn set_scroll_locked(&mut self, locked: bool);
}
