//! egui-backed page surface: remembers where sections were laid out and
//! drives eased scrolling of the page's scroll area.

use std::{collections::HashMap, time::Instant};

use page_core::{PageHost, ScrollAnimation};
use shared::domain::SectionId;

#[derive(Debug, Default)]
pub struct EguiPageHost {
    scroll_offset: f32,
    /// Section tops relative to the viewport, from the last laid-out frame.
    section_tops: HashMap<SectionId, f32>,
    animation: Option<ScrollAnimation>,
    scroll_locked: bool,
}

impl EguiPageHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Offset the scroll area must be forced to this frame, if an animation
    /// is running. Finished animations are dropped after their last sample.
    pub fn animated_offset(&mut self, now: Instant) -> Option<f32> {
        let animation = self.animation?;
        let offset = animation.offset_at(now);
        if animation.is_finished(now) {
            self.animation = None;
        }
        Some(offset)
    }

    /// Stores what the scroll area reported after layout. Returns the new
    /// offset when it moved.
    pub fn record_scroll_offset(&mut self, offset: f32) -> Option<f32> {
        let offset = offset.max(0.0);
        if (offset - self.scroll_offset).abs() < f32::EPSILON {
            return None;
        }
        self.scroll_offset = offset;
        Some(offset)
    }

    pub fn record_section_tops(&mut self, tops: impl IntoIterator<Item = (SectionId, f32)>) {
        self.section_tops.clear();
        self.section_tops.extend(tops);
    }

    /// User wheel/drag input wins over an in-progress animation.
    pub fn cancel_animation(&mut self) {
        self.animation = None;
    }
}

impl PageHost for EguiPageHost {
    fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    fn element_top(&self, section: &SectionId) -> Option<f32> {
        self.section_tops.get(section).copied()
    }

    fn smooth_scroll_to(&mut self, offset: f32) {
        self.animation = Some(ScrollAnimation::new(self.scroll_offset, offset, Instant::now()));
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        if locked != self.scroll_locked {
            tracing::debug!(locked, "background scroll lock changed");
        }
        self.scroll_locked = locked;
    }
}
