//! In-page navigation: offset computation and the eased scroll used to get
//! there.

use std::time::{Duration, Instant};

use shared::domain::SectionId;
use tracing::debug;

use crate::{host::PageHost, overlay::OverlayController, view_state::ViewState};

/// Space left above a section for the fixed header.
pub const HEADER_ALLOWANCE: f32 = 80.0;
pub const SMOOTH_SCROLL_DURATION: Duration = Duration::from_millis(500);

/// Scrolls to `section` and closes the mobile menu whether or not the
/// section exists. Returns the offset scrolled to, if any.
pub fn scroll_to_section<H: PageHost>(
    view: &mut ViewState,
    host: &mut H,
    section: &SectionId,
) -> Option<f32> {
    let target = section_offset(&*host, section);
    match target {
        Some(offset) => {
            debug!(%section, offset, "scrolling to section");
            host.smooth_scroll_to(offset);
        }
        None => debug!(%section, "navigation target not found"),
    }
    OverlayController::new(view, host).close_mobile_menu();
    target
}

/// Document offset that puts the section just under the header.
pub fn section_offset<H: PageHost + ?Sized>(host: &H, section: &SectionId) -> Option<f32> {
    let top = host.element_top(section)?;
    Some((top + host.scroll_offset() - HEADER_ALLOWANCE).max(0.0))
}

/// An ease-in-out scroll from one offset to another, sampled per frame by
/// hosts without native smooth scrolling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
}

impl ScrollAnimation {
    pub fn new(from: f32, to: f32, started_at: Instant) -> Self {
        Self::with_duration(from, to, started_at, SMOOTH_SCROLL_DURATION)
    }

    pub fn with_duration(from: f32, to: f32, started_at: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn offset_at(&self, now: Instant) -> f32 {
        let eased = ease_in_out_cubic(self.progress(now));
        self.from + (self.to - self.from) * eased
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[cfg(test)]
#[path = "tests/navigator_tests.rs"]
mod tests;
