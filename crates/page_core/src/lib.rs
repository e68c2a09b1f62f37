//! View-state and interaction core of the landing page: header compaction,
//! overlay dismissal, section navigation, toasts, and the contact form.

use std::time::Instant;

use shared::domain::{ContactField, SectionId};
use tracing::{debug, info};

pub mod contact;
pub mod host;
pub mod listeners;
pub mod navigator;
pub mod overlay;
pub mod toast;
pub mod view_state;

pub use contact::{
    deliver, ContactError, ContactForm, ContactTransport, HttpContactTransport, SubmissionInFlight,
    SubmitOutcome,
};
pub use host::PageHost;
pub use listeners::{EventKind, ListenerRegistry, Subscription};
pub use navigator::{scroll_to_section, ScrollAnimation, HEADER_ALLOWANCE};
pub use overlay::{HitRegions, Key, OverlayController, PointerTarget, Region};
pub use toast::{Toast, ToastId, ToastQueue};
pub use view_state::{ViewState, HEADER_COMPACT_THRESHOLD};

#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    Scroll { offset: f32 },
    PointerDown(PointerTarget),
    KeyDown(Key),
}

impl PageEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            PageEvent::Scroll { .. } => EventKind::Scroll,
            PageEvent::PointerDown(_) => EventKind::PointerDown,
            PageEvent::KeyDown(_) => EventKind::KeyDown,
        }
    }
}

/// A mounted landing page. Owns its host, view state, toasts, contact form,
/// and the listener subscriptions acquired at mount; all of them go away on
/// unmount.
pub struct LandingPage<H: PageHost> {
    host: H,
    view: ViewState,
    toasts: ToastQueue,
    contact: ContactForm,
    subscriptions: Vec<Subscription>,
}

impl<H: PageHost> LandingPage<H> {
    pub fn mount(mut host: H, listeners: &ListenerRegistry) -> Self {
        let subscriptions = [EventKind::Scroll, EventKind::PointerDown, EventKind::KeyDown]
            .into_iter()
            .map(|kind| listeners.subscribe(kind))
            .collect();
        let mut view = ViewState::default();
        view.apply_scroll(host.scroll_offset());
        host.set_scroll_locked(false);
        info!("landing page mounted");
        Self {
            host,
            view,
            toasts: ToastQueue::new(),
            contact: ContactForm::new(),
            subscriptions,
        }
    }

    /// Detaches every listener and hands the host back.
    pub fn unmount(mut self) -> H {
        self.subscriptions.clear();
        self.host.set_scroll_locked(false);
        info!("landing page unmounted");
        self.host
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    pub fn contact_mut(&mut self) -> &mut ContactForm {
        &mut self.contact
    }

    fn is_subscribed(&self, kind: EventKind) -> bool {
        self.subscriptions
            .iter()
            .any(|sub| sub.kind() == kind && sub.is_attached())
    }

    pub fn dispatch(&mut self, event: PageEvent) {
        if !self.is_subscribed(event.kind()) {
            debug!(kind = ?event.kind(), "no listener for event");
            return;
        }
        match event {
            PageEvent::Scroll { offset } => {
                self.view.apply_scroll(offset);
            }
            PageEvent::PointerDown(target) => self.overlay().on_pointer_down(target),
            PageEvent::KeyDown(key) => self.overlay().on_key_down(&key),
        }
    }

    pub fn overlay(&mut self) -> OverlayController<'_, H> {
        OverlayController::new(&mut self.view, &mut self.host)
    }

    pub fn open_mobile_menu(&mut self) {
        self.overlay().open_mobile_menu();
    }

    pub fn close_mobile_menu(&mut self) {
        self.overlay().close_mobile_menu();
    }

    pub fn open_login_overlay(&mut self) {
        self.overlay().open_login_overlay();
    }

    pub fn close_login_overlay(&mut self) {
        self.overlay().close_login_overlay();
    }

    pub fn open_login_from_mobile_menu(&mut self) {
        self.overlay().open_login_from_mobile_menu();
    }

    pub fn scroll_to_section(&mut self, section: &SectionId) -> Option<f32> {
        scroll_to_section(&mut self.view, &mut self.host, section)
    }

    pub fn update_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.contact.update_field(field, value);
    }

    pub fn begin_contact_submit(
        &mut self,
    ) -> Result<shared::domain::ContactFormRecord, SubmissionInFlight> {
        self.contact.begin_submit()
    }

    pub fn finish_contact_submit(&mut self, outcome: SubmitOutcome, now: Instant) -> ToastId {
        self.contact.finish_submit(outcome, &mut self.toasts, now)
    }

    pub async fn submit_contact<T: ContactTransport + ?Sized>(
        &mut self,
        transport: &T,
    ) -> Result<SubmitOutcome, SubmissionInFlight> {
        self.contact.submit(transport, &mut self.toasts).await
    }

    pub fn show_toast(
        &mut self,
        kind: shared::domain::ToastKind,
        message: impl Into<String>,
        now: Instant,
    ) -> ToastId {
        self.toasts.push(kind, message, now)
    }

    pub fn prune_toasts(&mut self, now: Instant) -> usize {
        self.toasts.prune(now)
    }
}

#[cfg(test)]
#[path = "tests/support.rs"]
pub(crate) mod test_support;

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
