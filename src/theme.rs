//! Palette — the kiosk's light and dark color schemes.

use egui::Color32;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub page: Color32,
    pub panel: Color32,
    pub header: Color32,
    pub header_condensed: Color32,
    pub ink: Color32,
    pub ink_soft: Color32,
    pub accent: Color32,
    pub accent_soft: Color32,
    pub card: Color32,
    pub card_stroke: Color32,
    pub backdrop: Color32,
    pub hero_top: Color32,
    pub hero_bottom: Color32,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            page: Color32::from_rgb(250, 250, 248),
            panel: Color32::WHITE,
            header: Color32::from_rgb(250, 250, 248),
            header_condensed: Color32::WHITE,
            ink: Color32::from_rgb(28, 30, 38),
            ink_soft: Color32::from_rgb(95, 99, 110),
            accent: Color32::from_rgb(79, 70, 229),
            accent_soft: Color32::from_rgb(235, 233, 254),
            card: Color32::WHITE,
            card_stroke: Color32::from_rgb(229, 229, 234),
            backdrop: Color32::from_black_alpha(115),
            hero_top: Color32::from_rgb(238, 240, 255),
            hero_bottom: Color32::from_rgb(250, 250, 248),
        }
    }

    pub fn dark() -> Self {
        Self {
            page: Color32::from_rgb(24, 25, 28),
            panel: Color32::from_rgb(32, 33, 38),
            header: Color32::from_rgb(24, 25, 28),
            header_condensed: Color32::from_rgb(32, 33, 38),
            ink: Color32::from_rgb(236, 237, 240),
            ink_soft: Color32::from_rgb(160, 163, 172),
            accent: Color32::from_rgb(129, 140, 248),
            accent_soft: Color32::from_rgb(49, 46, 129),
            card: Color32::from_rgb(32, 33, 38),
            card_stroke: Color32::from_rgb(52, 54, 61),
            backdrop: Color32::from_black_alpha(150),
            hero_top: Color32::from_rgb(36, 38, 58),
            hero_bottom: Color32::from_rgb(24, 25, 28),
        }
    }

    pub fn for_mode(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Push the palette into egui's widget visuals.
    pub fn apply(&self, ctx: &egui::Context, dark: bool) {
        let mut visuals = if dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        visuals.panel_fill = self.page;
        visuals.window_fill = self.panel;
        visuals.hyperlink_color = self.accent;
        ctx.set_visuals(visuals);
    }
}
