//! Renderers for the scrolling page body: hero, features, about, team,
//! contact, and footer.

use eframe::egui;
use egui::{Color32, RichText};
use page_core::ContactForm;
use shared::{
    content::{
        ABOUT_HEADING, ABOUT_PARAGRAPHS, CONTACT_CHANNELS, COPYRIGHT, FEATURES, HERO_BLURB,
        HERO_STATS, HERO_TITLE_ACCENT, HERO_TITLE_LEAD, HERO_TITLE_TAIL, LOGIN_PORTALS,
        MISSION_CARDS, PRODUCT_NAME, QUICK_LINKS, REPORT_PROBLEM_HREF, RESOURCES, SOCIAL_LINKS,
        TEAM_MEMBERS,
    },
    content::{Feature, FooterLink},
    domain::{ContactField, SectionId},
};

use crate::ui::theme;

#[derive(Debug, Clone, PartialEq)]
pub enum PageAction {
    Navigate(SectionId),
    OpenMobileMenu,
    CloseMobileMenu,
    OpenLogin,
    CloseLogin,
    LoginFromMobileMenu,
    OpenLink(&'static str),
    SubmitContact,
}

/// Everything a frame's renderers report back: user actions, section
/// positions, and the header controls that count as login triggers.
#[derive(Debug, Default)]
pub struct PageFrame {
    pub viewport_top: f32,
    pub actions: Vec<PageAction>,
    pub section_tops: Vec<(SectionId, f32)>,
    pub login_triggers: Vec<egui::Rect>,
}

impl PageFrame {
    fn mark_section(&mut self, ui: &egui::Ui, section: &str) {
        let top = ui.cursor().top() - self.viewport_top;
        self.section_tops.push((SectionId::from(section), top));
    }
}

fn columns_for(width: f32, max: usize) -> usize {
    let fitting = if width >= 960.0 {
        3
    } else if width >= 620.0 {
        2
    } else {
        1
    };
    fitting.min(max).max(1)
}

fn content_column(ui: &mut egui::Ui, add: impl FnOnce(&mut egui::Ui)) {
    let available = ui.available_width();
    let width = available.min(theme::CONTENT_MAX_WIDTH);
    let side = ((available - width) / 2.0).max(0.0);
    ui.horizontal(|ui| {
        ui.add_space(side);
        ui.vertical(|ui| {
            ui.set_width(width);
            // The page scroll area packs sections edge to edge.
            ui.spacing_mut().item_spacing.y = theme::ITEM_SPACING;
            add(ui);
        });
    });
}

fn section_band(ui: &mut egui::Ui, fill: Color32, add: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::NONE
        .fill(fill)
        .inner_margin(egui::Margin::symmetric(24, 64))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            content_column(ui, add);
        });
}

fn section_header(ui: &mut egui::Ui, title: &str, subtitle: &str) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(title).size(32.0).strong());
        ui.label(RichText::new(subtitle).size(17.0).color(theme::TEXT_MUTED));
    });
    ui.add_space(28.0);
}

fn card(ui: &mut egui::Ui, add: impl FnOnce(&mut egui::Ui)) -> egui::Response {
    egui::Frame::NONE
        .fill(theme::SURFACE)
        .stroke(egui::Stroke::new(1.0, Color32::from_gray(226)))
        .corner_radius(12.0)
        .inner_margin(egui::Margin::same(20))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add(ui);
        })
        .response
}

fn card_grid<T>(
    ui: &mut egui::Ui,
    items: &[T],
    max_columns: usize,
    mut render: impl FnMut(&mut egui::Ui, &T),
) {
    let columns = columns_for(ui.available_width(), max_columns);
    for row in items.chunks(columns) {
        ui.columns(columns, |cols| {
            for (col, item) in cols.iter_mut().zip(row) {
                render(col, item);
            }
        });
        ui.add_space(8.0);
    }
}

fn feature_card(ui: &mut egui::Ui, feature: &Feature) {
    card(ui, |ui| {
        ui.label(RichText::new(feature.icon).size(28.0).color(theme::PRIMARY));
        ui.label(RichText::new(feature.title).size(19.0).strong());
        ui.label(RichText::new(feature.description).color(theme::TEXT_MUTED));
    });
}

pub fn hero(ui: &mut egui::Ui, frame: &mut PageFrame) {
    frame.mark_section(ui, SectionId::HOME);
    egui::Frame::NONE
        .fill(theme::SURFACE_ALT)
        .inner_margin(egui::Margin {
            left: 24,
            right: 24,
            top: 120,
            bottom: 72,
        })
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            content_column(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing.x = 0.0;
                    ui.label(RichText::new(HERO_TITLE_LEAD).size(44.0).strong());
                    ui.label(
                        RichText::new(HERO_TITLE_ACCENT)
                            .size(44.0)
                            .strong()
                            .color(theme::PRIMARY),
                    );
                    ui.label(RichText::new(HERO_TITLE_TAIL).size(44.0).strong());
                });
                ui.add_space(8.0);
                ui.label(RichText::new(HERO_BLURB).size(18.0).color(theme::TEXT_MUTED));
                ui.add_space(20.0);

                ui.horizontal_wrapped(|ui| {
                    if ui.add(theme::primary_button("🚀 Get Started")).clicked() {
                        frame.actions.push(PageAction::OpenLogin);
                    }
                    if ui
                        .add(theme::filled_button(
                            "⚠ Report Community Problem",
                            theme::ACCENT_WARNING,
                        ))
                        .clicked()
                    {
                        frame.actions.push(PageAction::OpenLink(REPORT_PROBLEM_HREF));
                    }
                    // No demo is published yet; the button is presentational.
                    ui.add(theme::secondary_button("▶ Watch Demo"));
                });

                ui.add_space(28.0);
                ui.horizontal_wrapped(|ui| {
                    for stat in HERO_STATS {
                        card(ui, |ui| {
                            ui.set_max_width(200.0);
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(stat.icon).size(26.0));
                                ui.vertical(|ui| {
                                    ui.label(
                                        RichText::new(stat.value)
                                            .size(22.0)
                                            .strong()
                                            .color(theme::PRIMARY_DARK),
                                    );
                                    ui.label(RichText::new(stat.label).color(theme::TEXT_MUTED));
                                });
                            });
                        });
                    }
                });
            });
        });
}

pub fn features(ui: &mut egui::Ui, frame: &mut PageFrame) {
    frame.mark_section(ui, SectionId::FEATURES);
    section_band(ui, theme::SURFACE, |ui| {
        section_header(
            ui,
            "Comprehensive Features",
            "Everything you need for efficient field management in one platform",
        );
        card_grid(ui, FEATURES, 3, feature_card);
    });
}

pub fn about(ui: &mut egui::Ui, frame: &mut PageFrame) {
    frame.mark_section(ui, SectionId::ABOUT);
    section_band(ui, theme::SURFACE_ALT, |ui| {
        section_header(
            ui,
            "Our Mission",
            "Empowering organizations with efficient field management solutions",
        );
        ui.label(RichText::new(ABOUT_HEADING).size(24.0).strong());
        for paragraph in ABOUT_PARAGRAPHS {
            ui.label(RichText::new(*paragraph).size(16.0).color(theme::TEXT_MUTED));
        }
        ui.add_space(12.0);
        card_grid(ui, MISSION_CARDS, 2, feature_card);
    });
}

pub fn team(ui: &mut egui::Ui, frame: &mut PageFrame) {
    frame.mark_section(ui, SectionId::TEAM);
    section_band(ui, theme::SURFACE, |ui| {
        section_header(ui, "Our Team", "The dedicated professionals behind Sarathi");
        card_grid(ui, TEAM_MEMBERS, 4, |ui, member| {
            card(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("👤").size(36.0).color(theme::PRIMARY));
                    ui.label(RichText::new(member.name).size(18.0).strong());
                    ui.label(RichText::new(member.role).color(theme::PRIMARY));
                    ui.label(RichText::new(member.description).color(theme::TEXT_MUTED));
                });
            });
        });
    });
}

fn social_row(ui: &mut egui::Ui, text_color: Color32) {
    ui.horizontal(|ui| {
        for link in SOCIAL_LINKS {
            // Profiles are not published yet, so the icons do not navigate.
            ui.label(RichText::new(link.icon).size(18.0).strong().color(text_color))
                .on_hover_text(link.label);
        }
    });
}

fn labeled_field(ui: &mut egui::Ui, label: &str, edit: egui::TextEdit<'_>) {
    ui.label(RichText::new(label).strong());
    ui.add_sized([ui.available_width(), 34.0], edit);
}

fn contact_form(ui: &mut egui::Ui, form: &mut ContactForm, frame: &mut PageFrame) {
    card(ui, |ui| {
        ui.label(RichText::new("Send Us a Message").size(22.0).strong());
        ui.add_space(6.0);

        labeled_field(
            ui,
            "Your Name",
            egui::TextEdit::singleline(form.field_mut(ContactField::Name))
                .hint_text("Enter your name"),
        );
        labeled_field(
            ui,
            "Email Address",
            egui::TextEdit::singleline(form.field_mut(ContactField::Email))
                .hint_text("you@example.com"),
        );
        labeled_field(
            ui,
            "Organization",
            egui::TextEdit::singleline(form.field_mut(ContactField::Organization))
                .hint_text("Your company name"),
        );
        ui.label(RichText::new("Message").strong());
        ui.add(
            egui::TextEdit::multiline(form.field_mut(ContactField::Message))
                .hint_text("How can we help you?")
                .desired_rows(4)
                .desired_width(f32::INFINITY),
        );

        ui.add_space(8.0);
        let label = if form.is_in_flight() {
            "Sending…"
        } else {
            "✉ Send Message"
        };
        let button = theme::primary_button(label).min_size(egui::vec2(ui.available_width(), 42.0));
        let response = ui.add_enabled(form.can_submit(), button);
        if response.clicked() {
            frame.actions.push(PageAction::SubmitContact);
        }
        if !form.is_in_flight() {
            if let Err(err) = form.record().validate() {
                if !form.record().is_empty() {
                    ui.label(RichText::new(err.to_string()).small().color(theme::TEXT_MUTED));
                }
            }
        }
    });
}

pub fn contact(ui: &mut egui::Ui, frame: &mut PageFrame, form: &mut ContactForm) {
    frame.mark_section(ui, SectionId::CONTACT);
    section_band(ui, theme::SURFACE_ALT, |ui| {
        section_header(
            ui,
            "Contact Us",
            "Get in touch with our team for more information",
        );
        let columns = columns_for(ui.available_width(), 2);
        let info = |ui: &mut egui::Ui| {
            for channel in CONTACT_CHANNELS {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(channel.icon).size(24.0).color(theme::PRIMARY));
                    ui.vertical(|ui| {
                        ui.label(RichText::new(channel.title).size(18.0).strong());
                        for line in channel.lines {
                            ui.label(RichText::new(*line).color(theme::TEXT_MUTED));
                        }
                    });
                });
                ui.add_space(8.0);
            }
            ui.label(RichText::new("Connect With Us").size(18.0).strong());
            social_row(ui, theme::PRIMARY);
        };
        if columns == 2 {
            ui.columns(2, |cols| {
                info(&mut cols[0]);
                contact_form(&mut cols[1], form, frame);
            });
        } else {
            info(ui);
            ui.add_space(16.0);
            contact_form(ui, form, frame);
        }
    });
}

fn footer_link(ui: &mut egui::Ui, link: &FooterLink, frame: &mut PageFrame) {
    let response = ui.add(
        egui::Button::new(RichText::new(link.text).color(theme::FOOTER_TEXT)).frame(false),
    );
    if !response.clicked() {
        return;
    }
    if let Some(section) = link.section() {
        frame.actions.push(PageAction::Navigate(section));
    } else if link.href != "#" {
        frame.actions.push(PageAction::OpenLink(link.href));
    }
}

pub fn footer(ui: &mut egui::Ui, frame: &mut PageFrame) {
    egui::Frame::NONE
        .fill(theme::FOOTER_BG)
        .inner_margin(egui::Margin::symmetric(24, 48))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            content_column(ui, |ui| {
                let columns = columns_for(ui.available_width(), 3).max(2);
                ui.columns(columns, |cols| {
                    let heading = |text: &str| {
                        RichText::new(text.to_string())
                            .size(18.0)
                            .strong()
                            .color(Color32::WHITE)
                    };

                    cols[0].label(heading(PRODUCT_NAME).size(24.0));
                    cols[0].label(
                        RichText::new(
                            "Comprehensive field management solutions for modern organizations. Streamline operations and enhance productivity with our platform.",
                        )
                        .color(theme::FOOTER_TEXT),
                    );
                    social_row(&mut cols[0], theme::FOOTER_TEXT);

                    let links_col = 1 % columns;
                    cols[links_col].label(heading("Quick Links"));
                    for link in QUICK_LINKS {
                        footer_link(&mut cols[links_col], link, frame);
                    }

                    let portals_col = 2 % columns;
                    cols[portals_col].label(heading("Login Portals"));
                    for portal in LOGIN_PORTALS {
                        let text = format!("{} {}", portal.icon, portal.text);
                        if cols[portals_col]
                            .add(
                                egui::Button::new(RichText::new(text).color(theme::FOOTER_TEXT))
                                    .frame(false),
                            )
                            .clicked()
                        {
                            frame.actions.push(PageAction::OpenLink(portal.href));
                        }
                    }

                    let resources_col = columns - 1;
                    cols[resources_col].label(heading("Resources"));
                    for link in RESOURCES {
                        footer_link(&mut cols[resources_col], link, frame);
                    }
                });

                ui.add_space(24.0);
                ui.separator();
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(COPYRIGHT).color(theme::FOOTER_TEXT));
                });
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_columns_shrink_with_width() {
        assert_eq!(columns_for(1200.0, 3), 3);
        assert_eq!(columns_for(1200.0, 2), 2);
        assert_eq!(columns_for(700.0, 4), 2);
        assert_eq!(columns_for(400.0, 3), 1);
        assert_eq!(columns_for(400.0, 0), 1);
    }
}
