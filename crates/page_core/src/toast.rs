//! Transient notifications. Each toast is shown for a fixed window, fades
//! out, and is then pruned; nothing needs to dismiss it by hand.

use std::time::{Duration, Instant};

use shared::domain::ToastKind;
use tracing::debug;

pub const TOAST_FADE_IN: Duration = Duration::from_millis(300);
pub const TOAST_DISPLAY_WINDOW: Duration = Duration::from_secs(3);
pub const TOAST_FADE_OUT: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(pub u64);

#[derive(Debug, Clone)]
pub struct Toast {
    id: ToastId,
    kind: ToastKind,
    message: String,
    shown_at: Instant,
}

impl Toast {
    pub fn id(&self) -> ToastId {
        self.id
    }

    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn fade_starts_at(&self) -> Instant {
        self.shown_at + TOAST_DISPLAY_WINDOW
    }

    pub fn expires_at(&self) -> Instant {
        self.fade_starts_at() + TOAST_FADE_OUT
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at()
    }

    /// Still on screen, including the first frame of its fade-in when its
    /// opacity is zero.
    pub fn is_visible(&self, now: Instant) -> bool {
        !self.is_expired(now)
    }

    /// 0.0 → 1.0 over the fade-in, 1.0 while displayed, 1.0 → 0.0 over the
    /// fade-out.
    pub fn opacity(&self, now: Instant) -> f32 {
        let since_shown = now.saturating_duration_since(self.shown_at);
        if since_shown < TOAST_FADE_IN {
            return since_shown.as_secs_f32() / TOAST_FADE_IN.as_secs_f32();
        }
        let fade_start = self.fade_starts_at();
        if now <= fade_start {
            return 1.0;
        }
        let remaining = self.expires_at().saturating_duration_since(now);
        (remaining.as_secs_f32() / TOAST_FADE_OUT.as_secs_f32()).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Default)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>, now: Instant) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        let message = message.into();
        debug!(id = id.0, ?kind, %message, "toast shown");
        self.toasts.push(Toast {
            id,
            kind,
            message,
            shown_at: now,
        });
        id
    }

    /// Drops expired toasts and returns how many were removed.
    pub fn prune(&mut self, now: Instant) -> usize {
        let before = self.toasts.len();
        self.toasts.retain(|toast| !toast.is_expired(now));
        before - self.toasts.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|toast| toast.id == id)
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Earliest instant at which the queue changes without new input; hosts
    /// use it to schedule the next repaint.
    pub fn next_deadline(&self, now: Instant) -> Option<Instant> {
        self.toasts
            .iter()
            .flat_map(|toast| [toast.shown_at + TOAST_FADE_IN, toast.fade_starts_at(), toast.expires_at()])
            .filter(|deadline| *deadline > now)
            .min()
    }
}

#[cfg(test)]
#[path = "tests/toast_tests.rs"]
mod tests;
