//! Contact form rendering for `SiteApp`.
//!
//! Draws the lead form and drives the submit pipeline: click (or Enter in
//! a one-line field) hands a validated lead to `start_submit`; while a
//! submission is in flight the button is disabled and relabelled.

use std::time::Instant;

use eframe::egui;

use meridian_kiosk::page::registry::SectionId;
use meridian_kiosk::theme::Palette;

use super::sections::{page_side_margin, section_heading};
use super::{SiteApp, SECTION_GAP};

impl SiteApp {
    /// Render the contact section.
    pub fn draw_contact(&mut self, ui: &mut egui::Ui, now: Instant) {
        let copy = match &self.content.contact {
            Some(c) => c.clone(),
            None => return,
        };
        let palette = self.palette;
        let service_titles: Vec<String> = self
            .content
            .services
            .iter()
            .map(|s| s.title.clone())
            .collect();

        let top = ui.cursor().min;
        ui.add_space(SECTION_GAP);

        let mut submit_clicked = false;
        let mut enter_submit = false;

        let side = page_side_margin(ui.available_width());
        egui::Frame::none()
            .inner_margin(egui::Margin::symmetric(side, 0.0))
            .show(ui, |ui| {
                section_heading(ui, &palette, "Get in touch", &copy.heading);
                ui.label(
                    egui::RichText::new(&copy.blurb)
                        .size(14.5)
                        .color(palette.ink_soft),
                );
                ui.add_space(18.0);

                ui.vertical(|ui| {
                    ui.set_max_width(560.0);

                    let form = &mut self.controller.form;
                    let submitting = form.submitting();

                    ui.columns(2, |cols| {
                        field_label(&mut cols[0], &palette, "First name");
                        let first = cols[0].add(
                            egui::TextEdit::singleline(&mut form.first_name)
                                .hint_text("Jordan")
                                .desired_width(f32::INFINITY),
                        );
                        if first.lost_focus()
                            && cols[0].input(|i| i.key_pressed(egui::Key::Enter))
                        {
                            enter_submit = true;
                        }

                        field_label(&mut cols[1], &palette, "Last name");
                        let last = cols[1].add(
                            egui::TextEdit::singleline(&mut form.last_name)
                                .hint_text("Reyes")
                                .desired_width(f32::INFINITY),
                        );
                        if last.lost_focus()
                            && cols[1].input(|i| i.key_pressed(egui::Key::Enter))
                        {
                            enter_submit = true;
                        }
                    });
                    ui.add_space(10.0);

                    field_label(ui, &palette, "Email");
                    let email = ui.add(
                        egui::TextEdit::singleline(&mut form.email)
                            .hint_text("you@studio.com")
                            .desired_width(f32::INFINITY),
                    );
                    if email.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        enter_submit = true;
                    }
                    ui.add_space(10.0);

                    field_label(ui, &palette, "Service (optional)");
                    let selected = form
                        .service
                        .clone()
                        .unwrap_or_else(|| String::from("No preference"));
                    egui::ComboBox::from_id_salt("service_choice")
                        .selected_text(selected)
                        .width(240.0)
                        .show_ui(ui, |ui| {
                            ui.selectable_value(&mut form.service, None, "No preference");
                            for title in &service_titles {
                                ui.selectable_value(
                                    &mut form.service,
                                    Some(title.clone()),
                                    title,
                                );
                            }
                        });
                    ui.add_space(10.0);

                    field_label(ui, &palette, "Message");
                    ui.add(
                        egui::TextEdit::multiline(&mut form.message)
                            .hint_text("Tell us about the project...")
                            .desired_rows(5)
                            .desired_width(f32::INFINITY),
                    );
                    ui.add_space(16.0);

                    let label = if submitting {
                        "Sending\u{2026}"
                    } else {
                        "Send message"
                    };
                    let button = ui.add_enabled(
                        !submitting,
                        egui::Button::new(
                            egui::RichText::new(label)
                                .size(15.0)
                                .color(egui::Color32::WHITE),
                        )
                        .fill(palette.accent)
                        .rounding(8.0)
                        .min_size(egui::vec2(170.0, 40.0)),
                    );
                    if button.clicked() {
                        submit_clicked = true;
                    }
                });
            });

        if submit_clicked || enter_submit {
            if let Some(lead) = self.controller.submit_requested(now) {
                let ctx = ui.ctx().clone();
                self.start_submit(&ctx, lead);
            }
        }

        self.record_section(ui, SectionId::Contact, top);
    }
}

fn field_label(ui: &mut egui::Ui, palette: &Palette, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(13.0)
            .color(palette.ink_soft),
    );
    ui.add_space(2.0);
}
