//! Page body rendering for `SiteApp`.
//!
//! The scrollable page: hero with its parallax wash, the service and
//! project card grids with their entry fades, the about block and the
//! footer. Section anchor rects are recorded here each frame so nav
//! clicks have somewhere to land.

use std::time::Instant;

use eframe::egui;

use meridian_kiosk::page::registry::SectionId;
use meridian_kiosk::page::reveal::CardId;
use meridian_kiosk::theme::Palette;

use super::{SiteApp, SECTION_GAP};

/// Cards refuse to shrink below this, so column count follows width.
const CARD_MIN_WIDTH: f32 = 300.0;

/// Widest the centered content column gets.
const PAGE_MAX_WIDTH: f32 = 1080.0;

const CARD_GAP: f32 = 16.0;

impl SiteApp {
    /// Render the scrolling page body.
    pub fn draw_page(&mut self, ctx: &egui::Context, now: Instant) {
        let palette = self.palette;

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(palette.page))
            .show(ctx, |ui| {
                let output = egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        let viewport = ui.clip_rect();

                        let top = ui.cursor().min;
                        self.draw_hero(ui);
                        self.controller.record_anchor(
                            SectionId::Home,
                            egui::Rect::from_min_max(
                                top,
                                egui::pos2(ui.max_rect().right(), ui.cursor().min.y),
                            ),
                        );

                        self.draw_services(ui, viewport, now);
                        self.draw_work(ui, viewport, now);
                        self.draw_about(ui);
                        self.draw_contact(ui, now);
                        self.draw_footer(ui);

                        // All anchors are recorded by now, so a pending nav
                        // click can be resolved against this frame's layout
                        if let Some(section) = self.controller.take_pending_scroll() {
                            if let Some(rect) = self.controller.anchor(section) {
                                ui.scroll_to_rect(rect, Some(egui::Align::Min));
                            }
                        }
                    });

                self.controller.observe_scroll(output.state.offset.y, now);
            });
    }

    /// Full-bleed hero: gradient wash, parallax orbs, heading and CTA.
    fn draw_hero(&mut self, ui: &mut egui::Ui) {
        let hero = match &self.content.hero {
            Some(h) => h.clone(),
            None => return,
        };
        let palette = self.palette;

        let width = ui.available_width();
        let height = (ui.ctx().screen_rect().height() * 0.75).clamp(420.0, 900.0);
        let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());
        let painter = ui.painter_at(rect);

        // Vertical wash, hero_top to hero_bottom
        let mut mesh = egui::Mesh::default();
        mesh.colored_vertex(rect.left_top(), palette.hero_top);
        mesh.colored_vertex(rect.right_top(), palette.hero_top);
        mesh.colored_vertex(rect.left_bottom(), palette.hero_bottom);
        mesh.colored_vertex(rect.right_bottom(), palette.hero_bottom);
        mesh.add_triangle(0, 2, 1);
        mesh.add_triangle(1, 2, 3);
        painter.add(egui::Shape::mesh(mesh));

        // Decorative orbs drift at a fraction of scroll speed
        let shift = self.controller.parallax_shift();
        let a = palette.accent;
        let wash = egui::Color32::from_rgba_unmultiplied(a.r(), a.g(), a.b(), 28);
        painter.circle_filled(
            egui::pos2(rect.right() - width * 0.18, rect.top() + height * 0.30 + shift),
            140.0,
            wash,
        );
        painter.circle_filled(
            egui::pos2(rect.left() + width * 0.12, rect.top() + height * 0.62 + shift * 0.6),
            90.0,
            wash,
        );
        painter.circle_filled(
            egui::pos2(rect.right() - width * 0.34, rect.top() + height * 0.78 + shift * 1.3),
            56.0,
            wash,
        );

        ui.allocate_new_ui(egui::UiBuilder::new().max_rect(rect.shrink(24.0)), |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(height * 0.26);
                ui.label(
                    egui::RichText::new(&hero.heading)
                        .size(38.0)
                        .strong()
                        .color(palette.ink),
                );
                ui.add_space(10.0);
                ui.label(
                    egui::RichText::new(&hero.subheading)
                        .size(18.0)
                        .color(palette.ink_soft),
                );
                ui.add_space(26.0);
                let cta = ui.add(
                    egui::Button::new(
                        egui::RichText::new(&hero.cta_label)
                            .size(16.0)
                            .color(egui::Color32::WHITE),
                    )
                    .fill(palette.accent)
                    .rounding(22.0)
                    .min_size(egui::vec2(180.0, 44.0)),
                );
                if cta.on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
                    self.controller.request_scroll(&hero.cta_target);
                }
            });
        });
    }

    fn draw_services(&mut self, ui: &mut egui::Ui, viewport: egui::Rect, now: Instant) {
        if self.content.services.is_empty() {
            return;
        }
        let palette = self.palette;

        let top = ui.cursor().min;
        ui.add_space(SECTION_GAP);
        let side = page_side_margin(ui.available_width());
        egui::Frame::none()
            .inner_margin(egui::Margin::symmetric(side, 0.0))
            .show(ui, |ui| {
                section_heading(ui, &palette, "What we do", "Services");

                let avail = ui.available_width();
                let cols = grid_columns(avail);
                let card_w = (avail - CARD_GAP * (cols as f32 - 1.0)) / cols as f32;

                for (row_i, row) in self.content.services.chunks(cols).enumerate() {
                    ui.horizontal(|ui| {
                        ui.spacing_mut().item_spacing.x = CARD_GAP;
                        for (col_i, card) in row.iter().enumerate() {
                            let id = CardId::new(SectionId::Services, row_i * cols + col_i);
                            let progress = self.controller.reveal_progress(id, now);
                            let rect = reveal_card(ui, &palette, progress, card_w, |ui| {
                                ui.label(
                                    egui::RichText::new(&card.icon)
                                        .size(26.0)
                                        .color(palette.accent),
                                );
                                ui.add_space(6.0);
                                ui.label(
                                    egui::RichText::new(&card.title)
                                        .size(17.0)
                                        .strong()
                                        .color(palette.ink),
                                );
                                ui.add_space(4.0);
                                ui.label(
                                    egui::RichText::new(&card.blurb)
                                        .size(13.5)
                                        .color(palette.ink_soft),
                                );
                            });
                            self.controller.observe_card(id, rect, viewport, now);
                        }
                    });
                    ui.add_space(CARD_GAP);
                }
            });
        self.record_section(ui, SectionId::Services, top);
    }

    fn draw_work(&mut self, ui: &mut egui::Ui, viewport: egui::Rect, now: Instant) {
        if self.content.projects.is_empty() {
            return;
        }
        let palette = self.palette;

        let top = ui.cursor().min;
        ui.add_space(SECTION_GAP);
        let side = page_side_margin(ui.available_width());
        egui::Frame::none()
            .inner_margin(egui::Margin::symmetric(side, 0.0))
            .show(ui, |ui| {
                section_heading(ui, &palette, "Case studies", "Selected work");

                let avail = ui.available_width();
                let cols = grid_columns(avail);
                let card_w = (avail - CARD_GAP * (cols as f32 - 1.0)) / cols as f32;

                for (row_i, row) in self.content.projects.chunks(cols).enumerate() {
                    ui.horizontal(|ui| {
                        ui.spacing_mut().item_spacing.x = CARD_GAP;
                        for (col_i, project) in row.iter().enumerate() {
                            let id = CardId::new(SectionId::Work, row_i * cols + col_i);
                            let progress = self.controller.reveal_progress(id, now);
                            let rect = reveal_card(ui, &palette, progress, card_w, |ui| {
                                ui.label(
                                    egui::RichText::new(&project.title)
                                        .size(17.0)
                                        .strong()
                                        .color(palette.ink),
                                );
                                ui.add_space(4.0);
                                ui.label(
                                    egui::RichText::new(&project.summary)
                                        .size(13.5)
                                        .color(palette.ink_soft),
                                );
                                ui.add_space(8.0);
                                ui.horizontal_wrapped(|ui| {
                                    for tag in &project.tags {
                                        egui::Frame::none()
                                            .fill(palette.accent_soft)
                                            .rounding(8.0)
                                            .inner_margin(egui::Margin::symmetric(8.0, 3.0))
                                            .show(ui, |ui| {
                                                ui.label(
                                                    egui::RichText::new(tag)
                                                        .size(11.5)
                                                        .color(palette.accent),
                                                );
                                            });
                                    }
                                });
                            });
                            self.controller.observe_card(id, rect, viewport, now);
                        }
                    });
                    ui.add_space(CARD_GAP);
                }
            });
        self.record_section(ui, SectionId::Work, top);
    }

    fn draw_about(&mut self, ui: &mut egui::Ui) {
        let about = match &self.content.about {
            Some(a) => a.clone(),
            None => return,
        };
        let palette = self.palette;

        let top = ui.cursor().min;
        ui.add_space(SECTION_GAP);
        let side = page_side_margin(ui.available_width());
        egui::Frame::none()
            .inner_margin(egui::Margin::symmetric(side, 0.0))
            .show(ui, |ui| {
                section_heading(ui, &palette, "Who we are", &about.heading);
                ui.vertical(|ui| {
                    ui.set_max_width(720.0);
                    for paragraph in &about.paragraphs {
                        ui.label(
                            egui::RichText::new(paragraph)
                                .size(14.5)
                                .color(palette.ink_soft),
                        );
                        ui.add_space(10.0);
                    }
                });
            });
        self.record_section(ui, SectionId::About, top);
    }

    fn draw_footer(&mut self, ui: &mut egui::Ui) {
        let palette = self.palette;

        ui.add_space(SECTION_GAP);
        ui.separator();
        ui.add_space(14.0);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(&self.content.footer.note)
                    .size(12.5)
                    .color(palette.ink_soft),
            );
            if !self.content.brand.tagline.is_empty() {
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new(&self.content.brand.tagline)
                        .size(12.0)
                        .color(palette.ink_soft),
                );
            }
        });
        ui.add_space(24.0);
    }

    /// Close out a section: the anchor rect runs from `top` to the cursor.
    pub(crate) fn record_section(&mut self, ui: &egui::Ui, id: SectionId, top: egui::Pos2) {
        let rect = egui::Rect::from_min_max(
            top,
            egui::pos2(ui.max_rect().right(), ui.cursor().min.y),
        );
        self.controller.record_anchor(id, rect);
    }
}

/// Uppercase kicker line over a section title.
pub(crate) fn section_heading(ui: &mut egui::Ui, palette: &Palette, kicker: &str, title: &str) {
    ui.label(
        egui::RichText::new(kicker.to_uppercase())
            .size(12.0)
            .strong()
            .color(palette.accent),
    );
    ui.add_space(4.0);
    ui.label(
        egui::RichText::new(title)
            .size(28.0)
            .strong()
            .color(palette.ink),
    );
    ui.add_space(18.0);
}

/// One card in a grid, faded in by its reveal progress. Returns the rect
/// the card occupied so visibility can be observed against the viewport.
fn reveal_card(
    ui: &mut egui::Ui,
    palette: &Palette,
    progress: f32,
    width: f32,
    add_contents: impl FnOnce(&mut egui::Ui),
) -> egui::Rect {
    let resp = ui.scope(|ui| {
        ui.set_opacity(ease_out(progress));
        egui::Frame::none()
            .fill(palette.card)
            .stroke(egui::Stroke::new(1.0, palette.card_stroke))
            .rounding(10.0)
            .inner_margin(egui::Margin::same(18.0))
            .show(ui, |ui| {
                ui.set_width(width - 36.0);
                add_contents(ui);
            });
    });
    resp.response.rect
}

fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// Side margin that centers a column of at most `PAGE_MAX_WIDTH`, never
/// tighter than 24px.
pub(crate) fn page_side_margin(full: f32) -> f32 {
    ((full - PAGE_MAX_WIDTH) * 0.5).max(24.0)
}

fn grid_columns(avail: f32) -> usize {
    ((avail / CARD_MIN_WIDTH).floor() as usize).clamp(1, 3)
}
