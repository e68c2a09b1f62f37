use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use egui::{Color32, RichText};
use page_core::{
    HitRegions, Key, LandingPage, ListenerRegistry, PageEvent, Region, SubmissionInFlight,
    SubmitOutcome,
};
use shared::content::{LOGIN_OPTIONS, NAV_ITEMS, PRODUCT_NAME};
use shared::domain::SectionId;
use tracing::{debug, error, info, warn};

use crate::backend_bridge::commands::BackendCommand;
use crate::config::LandingSettings;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;
use crate::ui::host::EguiPageHost;
use crate::ui::sections::{self, PageAction, PageFrame};
use crate::ui::theme;

const IDLE_REPAINT: Duration = Duration::from_millis(100);
const LOGIN_CARD_MAX_WIDTH: f32 = 720.0;

fn ui_in_rect(
    ui: &mut egui::Ui,
    rect: egui::Rect,
    layout: egui::Layout,
    add: impl FnOnce(&mut egui::Ui),
) {
    let mut child = ui.new_child(egui::UiBuilder::new().max_rect(rect).layout(layout));
    child.set_clip_rect(rect);
    add(&mut child);
}

fn region(rect: egui::Rect) -> Region {
    Region::new(rect.min.x, rect.min.y, rect.max.x, rect.max.y)
}

pub struct LandingApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    settings: LandingSettings,
    page: LandingPage<EguiPageHost>,
    // The page's subscriptions detach once the registry is dropped.
    _listeners: ListenerRegistry,
    hit_regions: HitRegions,
    backend_error: Option<String>,
    theme_applied: bool,
}

impl LandingApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        settings: LandingSettings,
    ) -> Self {
        let listeners = ListenerRegistry::new();
        let page = LandingPage::mount(EguiPageHost::new(), &listeners);
        info!(
            live_listeners = listeners.live_count(),
            site = %settings.site_url,
            "landing page mounted"
        );
        Self {
            cmd_tx,
            ui_rx,
            settings,
            page,
            _listeners: listeners,
            hit_regions: HitRegions::default(),
            backend_error: None,
            theme_applied: false,
        }
    }

    fn process_ui_events(&mut self, now: Instant) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::ContactSubmitted(outcome) => {
                    self.page.finish_contact_submit(outcome, now);
                }
                UiEvent::BackendUnavailable(reason) => {
                    error!(%reason, "contact backend unavailable");
                    if self.page.contact().is_in_flight() {
                        self.page
                            .finish_contact_submit(SubmitOutcome::NetworkError, now);
                    }
                    self.backend_error = Some(reason);
                }
            }
        }
    }

    /// Routes this frame's raw input into the page. Pointer presses are
    /// classified against the regions laid out in the previous frame.
    fn process_input(&mut self, ctx: &egui::Context) {
        let (pressed_at, escape, wheel) = ctx.input(|i| {
            (
                i.pointer
                    .any_pressed()
                    .then(|| i.pointer.press_origin())
                    .flatten(),
                i.key_pressed(egui::Key::Escape),
                i.smooth_scroll_delta.y != 0.0,
            )
        });

        if let Some(pos) = pressed_at {
            let target = self.hit_regions.classify(pos.x, pos.y);
            self.page.dispatch(PageEvent::PointerDown(target));
        }
        if escape {
            self.page.dispatch(PageEvent::KeyDown(Key::Escape));
        }
        if wheel && self.page.host().is_animating() {
            self.page.host_mut().cancel_animation();
        }
    }

    fn show_page_body(&mut self, ctx: &egui::Context, now: Instant, frame: &mut PageFrame) {
        let forced_offset = self.page.host_mut().animated_offset(now);
        let locked = self.page.host().is_scroll_locked();
        let contact = self.page.contact_mut();

        let scroll_output = egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(theme::SURFACE))
            .show(ctx, |ui| {
                let mut area = egui::ScrollArea::vertical()
                    .id_salt("landing_page_scroll")
                    .auto_shrink([false, false])
                    .enable_scrolling(!locked);
                if let Some(offset) = forced_offset {
                    area = area.vertical_scroll_offset(offset);
                }
                area.show(ui, |ui| {
                    ui.spacing_mut().item_spacing.y = 0.0;
                    frame.viewport_top = ui.clip_rect().top();
                    sections::hero(ui, frame);
                    sections::features(ui, frame);
                    sections::about(ui, frame);
                    sections::team(ui, frame);
                    sections::contact(ui, frame, contact);
                    sections::footer(ui, frame);
                })
            })
            .inner;

        let host = self.page.host_mut();
        host.record_section_tops(frame.section_tops.drain(..));
        if let Some(offset) = host.record_scroll_offset(scroll_output.state.offset.y) {
            self.page.dispatch(PageEvent::Scroll { offset });
        }
    }

    fn show_header(&mut self, ctx: &egui::Context, narrow: bool, frame: &mut PageFrame) {
        let compact = self.page.view().is_header_compact();
        let height = if compact {
            theme::HEADER_HEIGHT_COMPACT
        } else {
            theme::HEADER_HEIGHT
        };
        let screen = ctx.screen_rect();

        egui::Area::new(egui::Id::new("landing_header"))
            .order(egui::Order::Middle)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                let (rect, _) = ui.allocate_exact_size(
                    egui::vec2(screen.width(), height),
                    egui::Sense::hover(),
                );
                ui.painter()
                    .rect_filled(rect, 0.0, theme::header_fill(compact));
                if compact {
                    ui.painter().hline(
                        rect.x_range(),
                        rect.bottom(),
                        egui::Stroke::new(1.0, Color32::from_gray(225)),
                    );
                }

                let inner = rect.shrink2(egui::vec2(24.0, 0.0));
                ui_in_rect(
                    ui,
                    inner,
                    egui::Layout::left_to_right(egui::Align::Center),
                    |ui| {
                        let logo = ui.add(
                            egui::Button::new(
                                RichText::new(format!("🧭 {PRODUCT_NAME}"))
                                    .size(24.0)
                                    .strong()
                                    .color(theme::PRIMARY),
                            )
                            .frame(false),
                        );
                        if logo.clicked() {
                            frame
                                .actions
                                .push(PageAction::Navigate(SectionId::from(SectionId::HOME)));
                        }

                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if narrow {
                                let toggle = ui.add(
                                    egui::Button::new(RichText::new("☰").size(24.0)).frame(false),
                                );
                                self.hit_regions.mobile_menu_triggers.push(region(toggle.rect));
                                if toggle.clicked() {
                                    frame.actions.push(PageAction::OpenMobileMenu);
                                }
                                return;
                            }

                            let login = ui.add(theme::primary_button("➜ Login"));
                            frame.login_triggers.push(login.rect);
                            if login.clicked() {
                                frame.actions.push(PageAction::OpenLogin);
                            }
                            ui.add_space(12.0);
                            for item in NAV_ITEMS.iter().rev() {
                                let link = ui.add(
                                    egui::Button::new(
                                        RichText::new(item.label).size(16.0).color(theme::TEXT),
                                    )
                                    .frame(false),
                                );
                                if link.clicked() {
                                    frame.actions.push(PageAction::Navigate(item.section_id()));
                                }
                            }
                        });
                    },
                );
            });
    }

    fn show_mobile_menu(&mut self, ctx: &egui::Context, frame: &mut PageFrame) {
        let screen = ctx.screen_rect();
        let width = theme::MOBILE_MENU_WIDTH.min(screen.width());
        let response = egui::Area::new(egui::Id::new("landing_mobile_menu"))
            .order(egui::Order::Tooltip)
            .fixed_pos(egui::pos2(screen.right() - width, screen.top()))
            .show(ctx, |ui| {
                egui::Frame::NONE
                    .fill(theme::SURFACE)
                    .stroke(egui::Stroke::new(1.0, Color32::from_gray(220)))
                    .inner_margin(egui::Margin::same(20))
                    .show(ui, |ui| {
                        ui.set_width(width - 40.0);
                        ui.set_min_height(screen.height() - 40.0);
                        ui.horizontal(|ui| {
                            ui.label(
                                RichText::new(PRODUCT_NAME)
                                    .size(22.0)
                                    .strong()
                                    .color(theme::PRIMARY),
                            );
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    let close = ui.add(
                                        egui::Button::new(RichText::new("✕").size(20.0))
                                            .frame(false),
                                    );
                                    if close.clicked() {
                                        frame.actions.push(PageAction::CloseMobileMenu);
                                    }
                                },
                            );
                        });
                        ui.add_space(16.0);
                        for item in NAV_ITEMS {
                            let link = ui.add(
                                egui::Button::new(RichText::new(item.label).size(18.0))
                                    .frame(false),
                            );
                            if link.clicked() {
                                frame.actions.push(PageAction::Navigate(item.section_id()));
                            }
                            ui.add_space(6.0);
                        }
                        ui.add_space(12.0);
                        let login = ui.add(
                            theme::primary_button("➜ Login")
                                .min_size(egui::vec2(ui.available_width(), 40.0)),
                        );
                        if login.clicked() {
                            frame.actions.push(PageAction::LoginFromMobileMenu);
                        }
                    });
            })
            .response;
        self.hit_regions.mobile_menu = Some(region(response.rect));
    }

    fn show_login_overlay(&mut self, ctx: &egui::Context, frame: &mut PageFrame) {
        let screen = ctx.screen_rect();

        // Backdrop swallows clicks so nothing underneath reacts; dismissal is
        // decided by the pointer-down routing, not by this response.
        egui::Area::new(egui::Id::new("landing_login_backdrop"))
            .order(egui::Order::Foreground)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                let (rect, _) = ui.allocate_exact_size(screen.size(), egui::Sense::click());
                ui.painter()
                    .rect_filled(rect, 0.0, Color32::from_black_alpha(140));
            });
        self.hit_regions.login_backdrop = Some(region(screen));

        let width = LOGIN_CARD_MAX_WIDTH.min(screen.width() - 40.0).max(200.0);
        let response = egui::Area::new(egui::Id::new("landing_login_card"))
            .order(egui::Order::Tooltip)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                egui::Frame::NONE
                    .fill(theme::SURFACE)
                    .corner_radius(16.0)
                    .inner_margin(egui::Margin::same(28))
                    .show(ui, |ui| {
                        ui.set_width(width - 56.0);
                        ui.horizontal(|ui| {
                            ui.vertical(|ui| {
                                ui.label(
                                    RichText::new(format!("Welcome to {PRODUCT_NAME}"))
                                        .size(26.0)
                                        .strong(),
                                );
                                ui.label(
                                    RichText::new("Choose your access method")
                                        .color(theme::TEXT_MUTED),
                                );
                            });
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Min),
                                |ui| {
                                    let close = ui.add(
                                        egui::Button::new(RichText::new("✕").size(20.0))
                                            .frame(false),
                                    );
                                    if close.clicked() {
                                        frame.actions.push(PageAction::CloseLogin);
                                    }
                                },
                            );
                        });
                        ui.add_space(16.0);

                        for option in LOGIN_OPTIONS {
                            let card = egui::Frame::NONE
                                .fill(theme::SURFACE_ALT)
                                .corner_radius(12.0)
                                .inner_margin(egui::Margin::same(16))
                                .show(ui, |ui| {
                                    ui.set_width(ui.available_width());
                                    ui.horizontal(|ui| {
                                        ui.label(
                                            RichText::new(option.icon)
                                                .size(28.0)
                                                .color(theme::PRIMARY),
                                        );
                                        ui.vertical(|ui| {
                                            ui.label(
                                                RichText::new(option.title).size(18.0).strong(),
                                            );
                                            ui.label(
                                                RichText::new(option.description)
                                                    .color(theme::TEXT_MUTED),
                                            );
                                        });
                                    });
                                })
                                .response;
                            let clicked = ui
                                .interact(card.rect, ui.id().with(option.href), egui::Sense::click())
                                .on_hover_cursor(egui::CursorIcon::PointingHand)
                                .clicked();
                            if clicked {
                                debug!(kind = ?option.kind, "login option chosen");
                                frame.actions.push(PageAction::OpenLink(option.href));
                            }
                            ui.add_space(10.0);
                        }
                    });
            })
            .response;
        self.hit_regions.login_overlay = Some(region(response.rect));
    }

    fn show_toasts(&self, ctx: &egui::Context, now: Instant) {
        let mut y = 100.0;
        for toast in self.page.toasts().iter() {
            if !toast.is_visible(now) {
                continue;
            }
            let opacity = toast.opacity(now);
            let slide = (1.0 - opacity) * 10.0;
            let response = egui::Area::new(egui::Id::new(("landing_toast", toast.id())))
                .order(egui::Order::Tooltip)
                .interactable(false)
                .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-20.0, y + slide))
                .show(ctx, |ui| {
                    egui::Frame::NONE
                        .fill(theme::with_alpha(theme::toast_fill(toast.kind()), opacity))
                        .corner_radius(10.0)
                        .inner_margin(egui::Margin::symmetric(18, 14))
                        .show(ui, |ui| {
                            ui.set_max_width(360.0);
                            let text_color = theme::with_alpha(Color32::WHITE, opacity);
                            ui.horizontal(|ui| {
                                ui.label(
                                    RichText::new(theme::toast_icon(toast.kind()))
                                        .size(18.0)
                                        .color(text_color),
                                );
                                ui.label(RichText::new(toast.message()).color(text_color));
                            });
                        });
                })
                .response;
            y += response.rect.height() + 10.0;
        }
    }

    fn show_backend_banner(&self, ctx: &egui::Context) {
        let Some(reason) = &self.backend_error else {
            return;
        };
        egui::Area::new(egui::Id::new("landing_backend_banner"))
            .order(egui::Order::Foreground)
            .interactable(false)
            .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(16.0, -16.0))
            .show(ctx, |ui| {
                egui::Frame::NONE
                    .fill(theme::with_alpha(theme::ERROR, 0.9))
                    .corner_radius(8.0)
                    .inner_margin(egui::Margin::symmetric(12, 8))
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new(format!("Contact service offline: {reason}"))
                                .color(Color32::WHITE),
                        );
                    });
            });
    }

    fn apply_actions(&mut self, ctx: &egui::Context, actions: Vec<PageAction>, now: Instant) {
        for action in actions {
            match action {
                PageAction::Navigate(section) => {
                    if self.page.scroll_to_section(&section).is_none() {
                        debug!(section = %section, "navigation target not laid out");
                    }
                }
                PageAction::OpenMobileMenu => self.page.open_mobile_menu(),
                PageAction::CloseMobileMenu => self.page.close_mobile_menu(),
                PageAction::OpenLogin => self.page.open_login_overlay(),
                PageAction::CloseLogin => self.page.close_login_overlay(),
                PageAction::LoginFromMobileMenu => self.page.open_login_from_mobile_menu(),
                PageAction::OpenLink(href) => self.open_link(ctx, href),
                PageAction::SubmitContact => self.submit_contact(now),
            }
        }
    }

    fn open_link(&self, ctx: &egui::Context, href: &str) {
        match self.settings.resolve_link(href) {
            Ok(url) => {
                info!(%url, "opening page link");
                ctx.open_url(egui::OpenUrl::same_tab(url.as_str()));
            }
            Err(err) => warn!(href, "cannot resolve page link: {err:#}"),
        }
    }

    fn submit_contact(&mut self, now: Instant) {
        if let Err(err) = self.page.contact().record().validate() {
            debug!("contact form not submittable: {err}");
            return;
        }
        let record = match self.page.begin_contact_submit() {
            Ok(record) => record,
            Err(SubmissionInFlight) => return,
        };
        let command = BackendCommand::SubmitContact { record };
        if let Err(err) = dispatch_backend_command(&self.cmd_tx, command) {
            warn!("contact submission not queued: {err}");
            self.page.finish_contact_submit(SubmitOutcome::NetworkError, now);
        }
    }

    fn schedule_repaint(&self, ctx: &egui::Context, now: Instant) {
        if self.page.host().is_animating() {
            ctx.request_repaint();
            return;
        }
        let next_toast = self
            .page
            .toasts()
            .next_deadline(now)
            .map(|deadline| deadline.saturating_duration_since(now));
        match next_toast {
            Some(_) if self.page.toasts().iter().any(|t| t.opacity(now) < 1.0) => {
                ctx.request_repaint();
            }
            Some(wait) => ctx.request_repaint_after(wait.min(IDLE_REPAINT)),
            None => ctx.request_repaint_after(IDLE_REPAINT),
        }
    }
}

impl eframe::App for LandingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        if !self.theme_applied {
            theme::apply(ctx);
            self.theme_applied = true;
        }

        self.process_ui_events(now);
        self.process_input(ctx);

        let narrow = ctx.screen_rect().width() < theme::MOBILE_BREAKPOINT;
        let mut frame = PageFrame::default();
        self.hit_regions.clear();

        self.show_page_body(ctx, now, &mut frame);
        self.show_header(ctx, narrow, &mut frame);
        if self.page.view().is_mobile_menu_open() {
            self.show_mobile_menu(ctx, &mut frame);
        }
        if self.page.view().is_login_overlay_open() {
            self.show_login_overlay(ctx, &mut frame);
        }
        self.show_toasts(ctx, now);
        self.show_backend_banner(ctx);

        self.hit_regions
            .login_triggers
            .extend(frame.login_triggers.iter().copied().map(region));
        let actions = std::mem::take(&mut frame.actions);
        self.apply_actions(ctx, actions, now);

        let pruned = self.page.prune_toasts(now);
        if pruned > 0 {
            debug!(pruned, "expired toasts removed");
        }
        self.schedule_repaint(ctx, now);
    }
}
