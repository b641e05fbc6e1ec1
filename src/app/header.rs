//! Header rendering for `SiteApp`.
//!
//! Draws the fixed top bar (brand, inline nav links, dark-mode toggle,
//! hamburger) and the slide-over menu with its dimmed backdrop.

use eframe::egui;

use super::{SiteApp, COMPACT_BREAKPOINT};

/// True when the window is too narrow for inline nav links.
pub(crate) fn compact_layout(width: f32) -> bool {
    width < COMPACT_BREAKPOINT
}

impl SiteApp {
    /// Render the fixed header strip.
    pub fn draw_header(&mut self, ctx: &egui::Context) {
        let palette = self.palette;
        let scrolled = self.controller.header_scrolled();

        // Scrolled past the hero: solid fill, drop shadow, tighter padding
        let fill = if scrolled {
            palette.header_condensed
        } else {
            palette.header
        };
        let margin = if scrolled {
            egui::Margin::symmetric(18.0, 8.0)
        } else {
            egui::Margin::symmetric(18.0, 14.0)
        };
        let shadow = if scrolled {
            egui::epaint::Shadow {
                offset: egui::vec2(0.0, 2.0),
                blur: 8.0,
                spread: 0.0,
                color: egui::Color32::from_black_alpha(26),
            }
        } else {
            egui::epaint::Shadow::NONE
        };

        egui::TopBottomPanel::top("site_header")
            .frame(egui::Frame::none().fill(fill).shadow(shadow).inner_margin(margin))
            .show_separator_line(false)
            .show(ctx, |ui| {
                let compact = compact_layout(ctx.screen_rect().width());
                let mut nav_clicked: Option<String> = None;
                let mut toggle_menu = false;
                let mut toggle_dark = false;

                ui.horizontal(|ui| {
                    // Brand mark doubles as a home link
                    let brand = ui.add(
                        egui::Label::new(
                            egui::RichText::new(&self.content.brand.name)
                                .size(19.0)
                                .strong()
                                .color(palette.ink),
                        )
                        .sense(egui::Sense::click()),
                    );
                    if brand.on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
                        nav_clicked = Some("home".to_string());
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        // Dark mode toggle
                        let dark_label = if self.dark_mode { "\u{263E}" } else { "\u{2600}" };
                        if ui.button(dark_label).clicked() {
                            toggle_dark = true;
                        }
                        ui.add_space(6.0);

                        if compact {
                            if ui.button("\u{2630}").clicked() {
                                toggle_menu = true;
                            }
                        } else {
                            // Right-to-left layout, so walk the nav reversed
                            for entry in self.content.nav.iter().rev() {
                                let link = ui.add(
                                    egui::Button::new(
                                        egui::RichText::new(&entry.label)
                                            .size(14.0)
                                            .color(palette.ink_soft),
                                    )
                                    .frame(false),
                                );
                                if link
                                    .on_hover_cursor(egui::CursorIcon::PointingHand)
                                    .clicked()
                                {
                                    nav_clicked = Some(entry.target.clone());
                                }
                            }
                        }
                    });
                });

                if toggle_dark {
                    let dark = !self.dark_mode;
                    self.set_dark_mode(ctx, dark);
                }
                if toggle_menu {
                    self.controller.menu.toggle();
                }
                if let Some(target) = nav_clicked {
                    self.controller.request_scroll(&target);
                }
            });
    }

    /// Render the slide-over menu and its backdrop while the menu is open.
    pub fn draw_menu_overlay(&mut self, ctx: &egui::Context) {
        if !self.controller.menu.is_open() {
            return;
        }

        let palette = self.palette;
        let screen = ctx.screen_rect();
        let panel_width = 300.0_f32.min(screen.width() * 0.85);
        let panel_rect = egui::Rect::from_min_max(
            egui::pos2(screen.max.x - panel_width, screen.min.y),
            screen.max,
        );

        egui::Area::new(egui::Id::new("menu_overlay"))
            .order(egui::Order::Foreground)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                let backdrop = ui.allocate_rect(screen, egui::Sense::click());
                ui.painter().rect_filled(screen, 0.0, palette.backdrop);
                ui.painter().rect_filled(panel_rect, 0.0, palette.panel);

                let mut close_clicked = false;
                let mut nav_clicked: Option<String> = None;

                ui.allocate_new_ui(
                    egui::UiBuilder::new().max_rect(panel_rect.shrink(20.0)),
                    |ui| {
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(&self.content.brand.name)
                                    .size(16.0)
                                    .strong()
                                    .color(palette.ink),
                            );
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui.button("\u{2715}").clicked() {
                                        close_clicked = true;
                                    }
                                },
                            );
                        });
                        ui.add_space(18.0);

                        for entry in &self.content.nav {
                            let link = ui.add(
                                egui::Button::new(
                                    egui::RichText::new(&entry.label)
                                        .size(16.0)
                                        .color(palette.ink),
                                )
                                .frame(false),
                            );
                            if link
                                .on_hover_cursor(egui::CursorIcon::PointingHand)
                                .clicked()
                            {
                                nav_clicked = Some(entry.target.clone());
                            }
                            ui.add_space(6.0);
                        }
                    },
                );

                if close_clicked {
                    self.controller.menu.close();
                }
                if let Some(target) = nav_clicked {
                    self.controller.menu_nav_clicked(&target);
                }

                // Clicks on the dimmed page close the menu; clicks on dead
                // space inside the panel do not
                if backdrop.clicked() {
                    let on_panel = backdrop
                        .interact_pointer_pos()
                        .map_or(false, |p| panel_rect.contains(p));
                    if !on_panel {
                        self.controller.menu.close();
                    }
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_below_breakpoint() {
        assert!(compact_layout(640.0));
        assert!(!compact_layout(1180.0));
    }

    #[test]
    fn test_breakpoint_is_exclusive() {
        assert!(!compact_layout(COMPACT_BREAKPOINT));
        assert!(compact_layout(COMPACT_BREAKPOINT - 0.5));
    }
}
