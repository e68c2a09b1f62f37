use tracing::debug;

/// Scroll offset past which the header switches to its compact style.
pub const HEADER_COMPACT_THRESHOLD: f32 = 50.0;

/// Page-lifetime view flags. The two overlay flags are only changed through
/// [`crate::overlay::OverlayController`] so the scroll lock follows them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState {
    pub(crate) header_compact: bool,
    pub(crate) mobile_menu_open: bool,
    pub(crate) login_overlay_open: bool,
}

impl ViewState {
    pub fn is_header_compact(&self) -> bool {
        self.header_compact
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn is_login_overlay_open(&self) -> bool {
        self.login_overlay_open
    }

    pub fn wants_scroll_lock(&self) -> bool {
        self.mobile_menu_open || self.login_overlay_open
    }

    /// Recomputes the compact-header flag from a scroll offset. Returns true
    /// when the flag flipped.
    pub fn apply_scroll(&mut self, offset: f32) -> bool {
        let compact = offset > HEADER_COMPACT_THRESHOLD;
        let changed = compact != self.header_compact;
        self.header_compact = compact;
        if changed {
            debug!(offset, compact, "header style changed");
        }
        changed
    }
}
