//! Mobile navigation and login overlay visibility, with outside-click and
//! escape dismissal.

use tracing::debug;

use crate::{host::PageHost, view_state::ViewState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Character(char),
    Other,
}

/// Where a pointer-down landed, relative to the four regions the overlay
/// rules care about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerTarget {
    pub in_mobile_menu: bool,
    pub on_mobile_menu_trigger: bool,
    pub in_login_overlay: bool,
    pub on_login_trigger: bool,
}

impl PointerTarget {
    pub fn outside() -> Self {
        Self::default()
    }
}

/// Axis-aligned region in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Region {
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

/// Regions recorded while drawing a frame, used to classify the next
/// pointer-down.
#[derive(Debug, Clone, Default)]
pub struct HitRegions {
    pub mobile_menu: Option<Region>,
    pub mobile_menu_triggers: Vec<Region>,
    pub login_overlay: Option<Region>,
    pub login_triggers: Vec<Region>,
    /// Backdrop drawn behind the login overlay. Triggers under it are hidden
    /// and a press there lands on the backdrop.
    pub login_backdrop: Option<Region>,
}

impl HitRegions {
    pub fn clear(&mut self) {
        self.mobile_menu = None;
        self.mobile_menu_triggers.clear();
        self.login_overlay = None;
        self.login_triggers.clear();
        self.login_backdrop = None;
    }

    pub fn classify(&self, x: f32, y: f32) -> PointerTarget {
        let inside = |region: &Option<Region>| region.is_some_and(|r| r.contains(x, y));
        let covered = inside(&self.login_backdrop);
        let on_any =
            |regions: &[Region]| !covered && regions.iter().any(|r| r.contains(x, y));
        PointerTarget {
            in_mobile_menu: inside(&self.mobile_menu),
            on_mobile_menu_trigger: on_any(&self.mobile_menu_triggers),
            in_login_overlay: inside(&self.login_overlay),
            on_login_trigger: on_any(&self.login_triggers),
        }
    }
}

/// Applies overlay transitions to a [`ViewState`] and pushes the resulting
/// scroll lock to the host after each one.
pub struct OverlayController<'a, H: PageHost> {
    view: &'a mut ViewState,
    host: &'a mut H,
}

impl<'a, H: PageHost> OverlayController<'a, H> {
    pub fn new(view: &'a mut ViewState, host: &'a mut H) -> Self {
        Self { view, host }
    }

    pub fn open_mobile_menu(&mut self) {
        self.view.mobile_menu_open = true;
        self.sync_scroll_lock();
    }

    pub fn close_mobile_menu(&mut self) {
        self.view.mobile_menu_open = false;
        self.sync_scroll_lock();
    }

    pub fn open_login_overlay(&mut self) {
        self.view.login_overlay_open = true;
        self.sync_scroll_lock();
    }

    pub fn close_login_overlay(&mut self) {
        self.view.login_overlay_open = false;
        self.sync_scroll_lock();
    }

    /// The login entry inside the mobile menu swaps one overlay for the other.
    pub fn open_login_from_mobile_menu(&mut self) {
        self.open_login_overlay();
        self.close_mobile_menu();
    }

    pub fn on_pointer_down(&mut self, target: PointerTarget) {
        if self.view.mobile_menu_open && !target.in_mobile_menu && !target.on_mobile_menu_trigger {
            debug!("pointer down outside mobile menu");
            self.close_mobile_menu();
        }
        if self.view.login_overlay_open && !target.in_login_overlay && !target.on_login_trigger {
            debug!("pointer down outside login overlay");
            self.close_login_overlay();
        }
    }

    pub fn on_key_down(&mut self, key: &Key) {
        if *key == Key::Escape {
            self.close_mobile_menu();
            self.close_login_overlay();
        }
    }

    fn sync_scroll_lock(&mut self) {
        self.host.set_scroll_locked(self.view.wants_scroll_lock());
    }
}

#[cfg(test)]
#[path = "tests/overlay_tests.rs"]
mod tests;
