use std::collections::HashMap;

use shared::domain::SectionId;

use crate::host::PageHost;

/// In-memory page surface that records what the core asked of it.
#[derive(Debug, Default)]
pub struct FakeHost {
    pub scroll_offset: f32,
    pub sections: HashMap<String, f32>,
    pub scroll_requests: Vec<f32>,
    pub scroll_locked: bool,
    pub lock_updates: usize,
}

impl FakeHost {
    pub fn with_section(mut self, id: &str, top: f32) -> Self {
        self.sections.insert(id.to_string(), top);
        self
    }

    pub fn scrolled_to(mut self, offset: f32) -> Self {
        self.scroll_offset = offset;
        self
    }
}

impl PageHost for FakeHost {
    fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    fn element_top(&self, section: &SectionId) -> Option<f32> {
        self.sections.get(section.as_str()).copied()
    }

    fn smooth_scroll_to(&mut self, offset: f32) {
        self.scroll_requests.push(offset);
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
        self.lock_updates += 1;
    }
}
