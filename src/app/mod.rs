//! `SiteApp` — the top-level egui application state.
//!
//! This module declares the `SiteApp` struct and its per-frame loop. All
//! drawing is split across the sibling sub-modules:
//!
//! - `header`   — top bar, nav links, the overlay menu
//! - `sections` — hero, service and project grids, about, footer
//! - `contact`  — the contact form
//! - `overlay`  — the toast

pub mod contact;
pub mod header;
pub mod overlay;
pub mod sections;

use std::sync::{mpsc, Arc};
use std::time::Instant;

use eframe::egui;

use meridian_kiosk::content::SiteContent;
use meridian_kiosk::net::submit::{LeadReceipt, LeadTransport, SimulatedTransport, SubmitError};
use meridian_kiosk::page::form::LeadRecord;
use meridian_kiosk::page::PageController;
use meridian_kiosk::theme::Palette;

/// Below this window width the inline nav folds into the hamburger menu.
pub const COMPACT_BREAKPOINT: f32 = 880.0;

/// Vertical breathing room between page sections.
pub(crate) const SECTION_GAP: f32 = 72.0;

// ─── Application state ───────────────────────────────────────────────────────

pub struct SiteApp {
    pub content: SiteContent,
    pub controller: PageController,
    pub transport: Arc<dyn LeadTransport>,
    pub submit_rx: Option<mpsc::Receiver<Result<LeadReceipt, SubmitError>>>,
    pub dark_mode: bool,
    pub palette: Palette,
}

impl SiteApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let content = SiteContent::bundled();
        let controller = PageController::new(&content);
        let palette = Palette::light();
        palette.apply(&cc.egui_ctx, false);

        log::info!(
            "Meridian kiosk up: {} services, {} projects",
            content.services.len(),
            content.projects.len()
        );

        Self {
            content,
            controller,
            transport: Arc::new(SimulatedTransport::new()),
            submit_rx: None,
            dark_mode: false,
            palette,
        }
    }

    pub fn set_dark_mode(&mut self, ctx: &egui::Context, dark: bool) {
        self.dark_mode = dark;
        self.palette = Palette::for_mode(dark);
        self.palette.apply(ctx, dark);
    }

    /// Hand a validated lead to the transport on a worker thread.
    pub fn start_submit(&mut self, ctx: &egui::Context, lead: LeadRecord) {
        let (tx, rx) = mpsc::channel();
        self.submit_rx = Some(rx);

        let transport = Arc::clone(&self.transport);
        let ctx = ctx.clone();
        std::thread::spawn(move || {
            let result = transport.submit(&lead);
            let _ = tx.send(result);
            ctx.request_repaint();
        });
    }

    /// Poll the submission channel and fold a finished result into the page.
    pub fn check_submit(&mut self, now: Instant) {
        if let Some(rx) = &self.submit_rx {
            if let Ok(result) = rx.try_recv() {
                self.controller.submission_finished(result, now);
                self.submit_rx = None;
            }
        }
    }
}

impl eframe::App for SiteApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        self.check_submit(now);
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.controller.handle_escape();
        }
        self.controller.tick(now);

        self.draw_header(ctx);
        self.draw_page(ctx, now);
        self.draw_menu_overlay(ctx);
        self.draw_toast(ctx, now);

        // Reveal fades animate every frame; throttle releases and toast
        // expiry only need a wakeup at their deadline.
        if self.controller.reveal_animating(now) {
            ctx.request_repaint();
        } else if let Some(deadline) = self.controller.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
    }
}
