use std::time::{Duration, Instant};

use super::*;
use crate::{
    contact::ContactError,
    test_support::FakeHost,
    toast::{TOAST_DISPLAY_WINDOW, TOAST_FADE_OUT},
};
use async_trait::async_trait;
use shared::{domain::ToastKind, protocol::ContactSubmitResponse};

struct NeverReachable;

#[async_trait]
impl ContactTransport for NeverReachable {
    async fn post_contact(
        &self,
        _record: &shared::domain::ContactFormRecord,
    ) -> Result<ContactSubmitResponse, ContactError> {
        Err(ContactError::Timeout)
    }
}

fn mounted(host: FakeHost) -> (ListenerRegistry, LandingPage<FakeHost>) {
    let registry = ListenerRegistry::new();
    let page = LandingPage::mount(host, &registry);
    (registry, page)
}

#[test]
fn mount_attaches_one_listener_per_event_kind() {
    let (registry, page) = mounted(FakeHost::default());
    assert_eq!(registry.live_count(), 3);
    assert!(registry.is_listening(EventKind::Scroll));
    assert!(registry.is_listening(EventKind::PointerDown));
    assert!(registry.is_listening(EventKind::KeyDown));
    assert_eq!(page.view(), &ViewState::default());
}

#[test]
fn unmount_releases_listeners_and_scroll_lock() {
    let (registry, mut page) = mounted(FakeHost::default());
    page.open_login_overlay();
    assert!(page.host().scroll_locked);

    let host = page.unmount();

    assert_eq!(registry.live_count(), 0);
    assert!(!host.scroll_locked);
}

#[test]
fn dropping_the_page_also_releases_listeners() {
    let (registry, page) = mounted(FakeHost::default());
    drop(page);
    assert_eq!(registry.live_count(), 0);
}

#[test]
fn mount_reads_initial_scroll_position() {
    let (_registry, page) = mounted(FakeHost::default().scrolled_to(400.0));
    assert!(page.view().is_header_compact());
}

#[test]
fn scroll_events_drive_header_style() {
    let (_registry, mut page) = mounted(FakeHost::default());
    page.dispatch(PageEvent::Scroll { offset: 50.0 });
    assert!(!page.view().is_header_compact());
    page.dispatch(PageEvent::Scroll { offset: 51.0 });
    assert!(page.view().is_header_compact());
}

#[test]
fn pointer_and_key_events_route_to_overlay_rules() {
    let (_registry, mut page) = mounted(FakeHost::default());
    page.open_mobile_menu();
    page.open_login_overlay();

    page.dispatch(PageEvent::PointerDown(PointerTarget {
        in_login_overlay: true,
        ..PointerTarget::default()
    }));
    assert!(!page.view().is_mobile_menu_open());
    assert!(page.view().is_login_overlay_open());

    page.dispatch(PageEvent::KeyDown(Key::Escape));
    assert!(!page.view().is_login_overlay_open());
    assert!(!page.host().scroll_locked);
}

#[test]
fn navigation_from_mobile_menu_scrolls_and_dismisses() {
    let (_registry, mut page) = mounted(
        FakeHost::default()
            .with_section(SectionId::FEATURES, 640.0)
            .scrolled_to(0.0),
    );
    page.open_mobile_menu();

    let target = page.scroll_to_section(&SectionId::from(SectionId::FEATURES));

    assert_eq!(target, Some(560.0));
    assert_eq!(page.host().scroll_requests, vec![560.0]);
    assert!(!page.view().is_mobile_menu_open());
    assert!(!page.host().scroll_locked);
}

#[tokio::test]
async fn failed_submission_toast_expires_on_its_own() {
    let (_registry, mut page) = mounted(FakeHost::default());
    page.update_field(ContactField::Name, "A");
    page.update_field(ContactField::Email, "a@b.com");
    page.update_field(ContactField::Message, "hi");

    let outcome = page.submit_contact(&NeverReachable).await.expect("submit");

    assert_eq!(outcome, SubmitOutcome::NetworkError);
    assert_eq!(page.contact().record().name, "A");
    assert_eq!(page.toasts().len(), 1);

    let shown_at = Instant::now();
    page.prune_toasts(shown_at + TOAST_DISPLAY_WINDOW + TOAST_FADE_OUT + Duration::from_millis(5));
    assert!(page.toasts().is_empty());
}

#[test]
fn bridged_submission_round_trip() {
    let (_registry, mut page) = mounted(FakeHost::default());
    page.update_field(ContactField::Name, "A");
    page.update_field(ContactField::Email, "a@b.com");
    page.update_field(ContactField::Message, "hi");

    let record = page.begin_contact_submit().expect("begin");
    assert_eq!(record.email, "a@b.com");
    assert!(page.begin_contact_submit().is_err());

    let now = Instant::now();
    let id = page.finish_contact_submit(SubmitOutcome::Delivered, now);

    assert!(page.contact().record().is_empty());
    let toast = page.toasts().get(id).expect("toast");
    assert_eq!(toast.kind(), ToastKind::Success);
}
