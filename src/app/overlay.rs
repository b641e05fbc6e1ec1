//! Toast rendering for `SiteApp`.

use std::time::Instant;

use eframe::egui;

use super::SiteApp;

impl SiteApp {
    /// Render the notification toast, bottom-right.
    pub fn draw_toast(&mut self, ctx: &egui::Context, now: Instant) {
        let palette = self.palette;
        let (title, message, accent, opacity) = match self.controller.toast() {
            Some(t) => (
                t.title.clone(),
                t.message.clone(),
                t.severity.accent(),
                t.opacity(now),
            ),
            None => return,
        };

        let mut dismiss = false;

        egui::Area::new(egui::Id::new("toast"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-18.0, -18.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                ui.set_opacity(opacity);
                egui::Frame::none()
                    .fill(palette.panel)
                    .stroke(egui::Stroke::new(1.0, palette.card_stroke))
                    .rounding(10.0)
                    .shadow(egui::epaint::Shadow {
                        offset: egui::vec2(0.0, 4.0),
                        blur: 16.0,
                        spread: 0.0,
                        color: egui::Color32::from_black_alpha(40),
                    })
                    .inner_margin(egui::Margin::symmetric(14.0, 12.0))
                    .show(ui, |ui| {
                        ui.set_max_width(340.0);
                        ui.horizontal(|ui| {
                            // Severity bar on the left edge
                            let (bar, _) = ui
                                .allocate_exact_size(egui::vec2(4.0, 36.0), egui::Sense::hover());
                            ui.painter().rect_filled(bar, 2.0, accent);
                            ui.vertical(|ui| {
                                ui.label(
                                    egui::RichText::new(&title)
                                        .size(14.5)
                                        .strong()
                                        .color(palette.ink),
                                );
                                ui.label(
                                    egui::RichText::new(&message)
                                        .size(13.0)
                                        .color(palette.ink_soft),
                                );
                            });
                            if ui.button("\u{2715}").clicked() {
                                dismiss = true;
                            }
                        });
                    });
            });

        if dismiss {
            self.controller.dismiss_toast();
        }
    }
}
