use super::*;
use crate::test_support::FakeHost;

#[derive(Debug, Clone, Copy)]
enum Op {
    OpenMenu,
    CloseMenu,
    OpenLogin,
    CloseLogin,
    LoginFromMenu,
    PointerOutside,
    PointerInMenu,
    PointerInLogin,
    Escape,
    OtherKey,
}

fn apply(controller: &mut OverlayController<'_, FakeHost>, op: Op) {
    match op {
        Op::OpenMenu => controller.open_mobile_menu(),
        Op::CloseMenu => controller.close_mobile_menu(),
        Op::OpenLogin => controller.open_login_overlay(),
        Op::CloseLogin => controller.close_login_overlay(),
        Op::LoginFromMenu => controller.open_login_from_mobile_menu(),
        Op::PointerOutside => controller.on_pointer_down(PointerTarget::outside()),
        Op::PointerInMenu => controller.on_pointer_down(PointerTarget {
            in_mobile_menu: true,
            ..PointerTarget::default()
        }),
        Op::PointerInLogin => controller.on_pointer_down(PointerTarget {
            in_login_overlay: true,
            ..PointerTarget::default()
        }),
        Op::Escape => controller.on_key_down(&Key::Escape),
        Op::OtherKey => controller.on_key_down(&Key::Character('a')),
    }
}

#[test]
fn scroll_lock_tracks_open_flags_after_every_operation() {
    let ops = [
        Op::OpenMenu,
        Op::OpenLogin,
        Op::PointerInMenu,
        Op::CloseMenu,
        Op::OtherKey,
        Op::PointerInLogin,
        Op::CloseLogin,
        Op::OpenLogin,
        Op::OpenMenu,
        Op::PointerOutside,
        Op::OpenMenu,
        Op::LoginFromMenu,
        Op::Escape,
        Op::Escape,
        Op::OpenMenu,
        Op::CloseLogin,
        Op::CloseMenu,
    ];
    let mut view = ViewState::default();
    let mut host = FakeHost::default();
    for op in ops {
        let mut controller = OverlayController::new(&mut view, &mut host);
        apply(&mut controller, op);
        assert_eq!(
            host.scroll_locked,
            view.is_mobile_menu_open() || view.is_login_overlay_open(),
            "after {op:?}"
        );
    }
}

#[test]
fn outside_pointer_closes_menu_and_leaves_login_flag() {
    let mut view = ViewState::default();
    let mut host = FakeHost::default();
    let mut controller = OverlayController::new(&mut view, &mut host);
    controller.open_mobile_menu();
    controller.on_pointer_down(PointerTarget {
        on_login_trigger: true,
        ..PointerTarget::default()
    });
    assert!(!view.is_mobile_menu_open());
    assert!(!view.is_login_overlay_open());
    assert!(!host.scroll_locked);
}

#[test]
fn pointer_on_menu_trigger_keeps_menu_open() {
    let mut view = ViewState::default();
    let mut host = FakeHost::default();
    let mut controller = OverlayController::new(&mut view, &mut host);
    controller.open_mobile_menu();
    controller.on_pointer_down(PointerTarget {
        on_mobile_menu_trigger: true,
        ..PointerTarget::default()
    });
    assert!(view.is_mobile_menu_open());
    assert!(host.scroll_locked);
}

#[test]
fn single_outside_pointer_closes_both_overlays() {
    let mut view = ViewState::default();
    let mut host = FakeHost::default();
    let mut controller = OverlayController::new(&mut view, &mut host);
    controller.open_mobile_menu();
    controller.open_login_overlay();
    controller.on_pointer_down(PointerTarget::outside());
    assert!(!view.is_mobile_menu_open());
    assert!(!view.is_login_overlay_open());
    assert!(!host.scroll_locked);
}

#[test]
fn pointer_inside_login_overlay_only_closes_menu() {
    let mut view = ViewState::default();
    let mut host = FakeHost::default();
    let mut controller = OverlayController::new(&mut view, &mut host);
    controller.open_mobile_menu();
    controller.open_login_overlay();
    controller.on_pointer_down(PointerTarget {
        in_login_overlay: true,
        ..PointerTarget::default()
    });
    assert!(!view.is_mobile_menu_open());
    assert!(view.is_login_overlay_open());
    assert!(host.scroll_locked);
}

#[test]
fn escape_closes_both_and_is_idempotent() {
    let mut view = ViewState::default();
    let mut host = FakeHost::default();
    let mut controller = OverlayController::new(&mut view, &mut host);
    controller.open_mobile_menu();
    controller.open_login_overlay();
    controller.on_key_down(&Key::Escape);
    controller.on_key_down(&Key::Escape);
    assert_eq!(view, ViewState::default());
    assert!(!host.scroll_locked);
}

#[test]
fn other_keys_leave_overlays_alone() {
    let mut view = ViewState::default();
    let mut host = FakeHost::default();
    let mut controller = OverlayController::new(&mut view, &mut host);
    controller.open_login_overlay();
    controller.on_key_down(&Key::Enter);
    assert!(view.is_login_overlay_open());
}

#[test]
fn login_from_menu_swaps_overlays_without_unlocking() {
    let mut view = ViewState::default();
    let mut host = FakeHost::default();
    let mut controller = OverlayController::new(&mut view, &mut host);
    controller.open_mobile_menu();
    controller.open_login_from_mobile_menu();
    assert!(!view.is_mobile_menu_open());
    assert!(view.is_login_overlay_open());
    assert!(host.scroll_locked);
}

#[test]
fn hit_regions_classify_pointer_positions() {
    let regions = HitRegions {
        mobile_menu: Some(Region::new(600.0, 0.0, 900.0, 800.0)),
        mobile_menu_triggers: vec![Region::new(850.0, 10.0, 890.0, 50.0)],
        login_overlay: Some(Region::new(200.0, 150.0, 700.0, 550.0)),
        login_triggers: vec![Region::new(700.0, 10.0, 780.0, 50.0)],
        login_backdrop: None,
    };

    assert_eq!(regions.classify(10.0, 700.0), PointerTarget::outside());

    let on_trigger = regions.classify(860.0, 30.0);
    assert!(on_trigger.in_mobile_menu);
    assert!(on_trigger.on_mobile_menu_trigger);
    assert!(!on_trigger.in_login_overlay);

    let in_both = regions.classify(650.0, 300.0);
    assert!(in_both.in_mobile_menu);
    assert!(in_both.in_login_overlay);
}

#[test]
fn cleared_regions_classify_everything_as_outside() {
    let mut regions = HitRegions {
        mobile_menu: Some(Region::new(0.0, 0.0, 100.0, 100.0)),
        ..HitRegions::default()
    };
    regions.clear();
    assert_eq!(regions.classify(50.0, 50.0), PointerTarget::outside());
}

#[test]
fn backdrop_press_over_hidden_trigger_closes_login_overlay() {
    let regions = HitRegions {
        login_overlay: Some(Region::new(240.0, 160.0, 960.0, 560.0)),
        login_triggers: vec![Region::new(1100.0, 20.0, 1200.0, 60.0)],
        login_backdrop: Some(Region::new(0.0, 0.0, 1280.0, 820.0)),
        ..HitRegions::default()
    };
    let mut view = ViewState::default();
    let mut host = FakeHost::default();
    let mut controller = OverlayController::new(&mut view, &mut host);
    controller.open_login_overlay();

    let target = regions.classify(1150.0, 40.0);
    assert!(!target.on_login_trigger);
    assert!(!target.in_login_overlay);

    controller.on_pointer_down(target);
    assert!(!view.is_login_overlay_open());
    assert!(!host.scroll_locked);
}

#[test]
fn press_inside_card_keeps_login_overlay_open() {
    let regions = HitRegions {
        login_overlay: Some(Region::new(240.0, 160.0, 960.0, 560.0)),
        login_backdrop: Some(Region::new(0.0, 0.0, 1280.0, 820.0)),
        ..HitRegions::default()
    };
    let mut view = ViewState::default();
    let mut host = FakeHost::default();
    let mut controller = OverlayController::new(&mut view, &mut host);
    controller.open_login_overlay();

    controller.on_pointer_down(regions.classify(600.0, 300.0));
    assert!(view.is_login_overlay_open());
    assert!(host.scroll_locked);
}

#[test]
fn triggers_count_when_no_backdrop_is_drawn() {
    let regions = HitRegions {
        login_triggers: vec![Region::new(1100.0, 20.0, 1200.0, 60.0)],
        ..HitRegions::default()
    };
    assert!(regions.classify(1150.0, 40.0).on_login_trigger);
}
