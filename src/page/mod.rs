//! The page controller.
//!
//! All interactive state of the kiosk page in one headless type: menu,
//! scroll effects, reveals, the contact form and the toast slot, sharing a
//! section registry resolved once from content. Nothing here draws; the
//! binary's `app` module renders from this state and feeds input back in.
//! Time-dependent operations take an `Instant` so tests can run on a
//! synthetic clock.

pub mod form;
pub mod menu;
pub mod registry;
pub mod reveal;
pub mod scroll;
pub mod toast;

use std::time::Instant;

use egui::Rect;

use crate::content::SiteContent;
use crate::net::submit::{LeadReceipt, SubmitError};

use form::{ContactForm, LeadRecord};
use menu::MenuState;
use registry::{SectionId, SectionRegistry};
use reveal::{CardId, RevealTracker};
use scroll::ScrollEffects;
use toast::{Toast, ToastSeverity};

pub struct PageController {
    registry: SectionRegistry,
    pub menu: MenuState,
    scroll: ScrollEffects,
    reveal: RevealTracker,
    pub form: ContactForm,
    toast: Option<Toast>,
    pending_scroll: Option<SectionId>,
}

impl PageController {
    pub fn new(content: &SiteContent) -> Self {
        let cards = (0..content.services.len())
            .map(|i| CardId::new(SectionId::Services, i))
            .chain((0..content.projects.len()).map(|i| CardId::new(SectionId::Work, i)));

        Self {
            registry: SectionRegistry::from_content(content),
            menu: MenuState::new(),
            scroll: ScrollEffects::new(content.hero.is_some()),
            reveal: RevealTracker::new(cards),
            form: ContactForm::new(),
            toast: None,
            pending_scroll: None,
        }
    }

    /// Advance time-driven state: release a due scroll sample, expire the
    /// toast. Called once per frame before drawing.
    pub fn tick(&mut self, now: Instant) {
        self.scroll.tick(now);
        if self.toast.as_ref().map_or(false, |t| t.expired(now)) {
            self.toast = None;
        }
    }

    // ── Scroll effects ──────────────────────────────────────────────────

    /// Feed the raw scroll offset for this frame.
    pub fn observe_scroll(&mut self, offset: f32, now: Instant) {
        self.scroll.observe(offset, now);
    }

    pub fn header_scrolled(&self) -> bool {
        self.scroll.scrolled()
    }

    pub fn parallax_shift(&self) -> f32 {
        self.scroll.parallax_shift()
    }

    // ── Navigation ──────────────────────────────────────────────────────

    pub fn has_section(&self, id: SectionId) -> bool {
        self.registry.contains(id)
    }

    pub fn record_anchor(&mut self, id: SectionId, rect: Rect) {
        self.registry.record_anchor(id, rect);
    }

    pub fn anchor(&self, id: SectionId) -> Option<Rect> {
        self.registry.anchor(id)
    }

    /// Request a scroll to a nav target. Unknown or absent targets are
    /// absorbed without effect.
    pub fn request_scroll(&mut self, target: &str) {
        match SectionId::from_slug(target) {
            Some(id) if self.registry.contains(id) => self.pending_scroll = Some(id),
            _ => log::debug!("Ignoring nav target '{}': no such section", target),
        }
    }

    /// A nav link inside the overlay menu: close the menu first, then
    /// request the scroll.
    pub fn menu_nav_clicked(&mut self, target: &str) {
        self.menu.close();
        self.request_scroll(target);
    }

    /// The render layer takes this once per frame and performs the actual
    /// scroll against the recorded anchor.
    pub fn take_pending_scroll(&mut self) -> Option<SectionId> {
        self.pending_scroll.take()
    }

    // ── Keyboard ────────────────────────────────────────────────────────

    /// Escape dismisses whatever is dismissable: the menu, the toast, or
    /// both. With neither up it changes nothing.
    pub fn handle_escape(&mut self) {
        if self.menu.is_open() {
            self.menu.close();
        }
        if self.toast.is_some() {
            self.toast = None;
        }
    }

    // ── Toast ───────────────────────────────────────────────────────────

    /// Show a toast, replacing (and thereby re-timing) any current one.
    pub fn show_toast(&mut self, title: &str, message: &str, severity: ToastSeverity, now: Instant) {
        self.toast = Some(Toast::new(title.to_string(), message.to_string(), severity, now));
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    pub fn dismiss_toast(&mut self) {
        self.toast = None;
    }

    // ── Reveal ──────────────────────────────────────────────────────────

    pub fn observe_card(&mut self, card: CardId, rect: Rect, viewport: Rect, now: Instant) {
        self.reveal.observe(card, rect, viewport, now);
    }

    pub fn reveal_progress(&self, card: CardId, now: Instant) -> f32 {
        self.reveal.progress(card, now)
    }

    pub fn reveal_animating(&self, now: Instant) -> bool {
        self.reveal.animating(now)
    }

    // ── Form pipeline ───────────────────────────────────────────────────

    /// Run validation and move to Submitting. `Some` hands the caller a
    /// lead to put on the wire; `None` means the attempt ended here
    /// (validation toast shown, a submit already in flight, or the page
    /// has no contact section).
    pub fn submit_requested(&mut self, now: Instant) -> Option<LeadRecord> {
        if !self.registry.contains(SectionId::Contact) {
            return None;
        }
        if self.form.submitting() {
            return None;
        }
        match self.form.validate() {
            Ok(lead) => {
                self.form.begin_submit();
                Some(lead)
            }
            Err(e) => {
                log::debug!("Lead refused: {} ({})", e.message, e.field);
                self.show_toast("Check the form", &e.message, ToastSeverity::Error, now);
                None
            }
        }
    }

    /// Fold the transport result back in. Success clears the form, failure
    /// keeps it; both restore the submit control and raise a toast.
    pub fn submission_finished(
        &mut self,
        result: Result<LeadReceipt, SubmitError>,
        now: Instant,
    ) {
        match result {
            Ok(receipt) => {
                log::info!(
                    "Lead captured from {} at {}",
                    receipt.email,
                    receipt.captured_at.to_rfc3339()
                );
                self.form.settle(true);
                self.show_toast(
                    "Message sent",
                    "Thanks for reaching out. We'll reply within two business days.",
                    ToastSeverity::Success,
                    now,
                );
            }
            Err(e) => {
                log::warn!("Lead submission failed: {}", e);
                self.form.settle(false);
                self.show_toast(
                    "Something went wrong",
                    "Your message couldn't be sent. Please try again.",
                    ToastSeverity::Error,
                    now,
                );
            }
        }
    }

    // ── Repaint scheduling ──────────────────────────────────────────────

    /// Earliest instant something time-driven becomes due, if anything is.
    pub fn next_deadline(&self) -> Option<Instant> {
        let mut next: Option<Instant> = self.scroll.next_release();
        if let Some(t) = &self.toast {
            let expiry = t.expires_at();
            next = Some(match next {
                Some(n) if n < expiry => n,
                _ => expiry,
            });
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{About, ContactCopy, Hero, ProjectCard, ServiceCard, SiteContent};
    use chrono::Utc;
    use egui::pos2;
    use std::time::Duration;

    fn full_content() -> SiteContent {
        SiteContent {
            nav: Vec::new(),
            hero: Some(Hero::default()),
            services: vec![ServiceCard::default(), ServiceCard::default()],
            projects: vec![ProjectCard::default()],
            about: Some(About::default()),
            contact: Some(ContactCopy::default()),
            ..SiteContent::default()
        }
    }

    fn controller() -> PageController {
        PageController::new(&full_content())
    }

    fn fill_form(page: &mut PageController) {
        page.form.first_name = "Jordan".to_string();
        page.form.last_name = "Reyes".to_string();
        page.form.email = "jordan@example.com".to_string();
        page.form.message = "We need a storefront.".to_string();
    }

    fn receipt() -> LeadReceipt {
        LeadReceipt {
            email: "jordan@example.com".to_string(),
            captured_at: Utc::now(),
        }
    }

    fn viewport() -> Rect {
        Rect::from_min_max(pos2(0.0, 0.0), pos2(800.0, 600.0))
    }

    #[test]
    fn test_successful_submission_clears_form() {
        let t0 = Instant::now();
        let mut page = controller();
        fill_form(&mut page);

        let lead = page.submit_requested(t0).expect("valid form must submit");
        assert_eq!(lead.email, "jordan@example.com");
        assert!(page.form.submitting());

        page.submission_finished(Ok(receipt()), t0 + Duration::from_secs(1));
        assert!(!page.form.submitting());
        assert!(page.form.email.is_empty());
        let toast = page.toast().expect("success toast");
        assert_eq!(toast.severity, ToastSeverity::Success);
    }

    #[test]
    fn test_invalid_form_stops_before_transport() {
        let t0 = Instant::now();
        let mut page = controller();
        fill_form(&mut page);
        page.form.email = "a@b".to_string();

        assert!(page.submit_requested(t0).is_none());
        assert!(!page.form.submitting());
        // Exactly one toast, and the fields are untouched
        let toast = page.toast().expect("validation toast");
        assert_eq!(toast.severity, ToastSeverity::Error);
        assert_eq!(page.form.first_name, "Jordan");
        assert_eq!(page.form.email, "a@b");
    }

    #[test]
    fn test_double_submit_is_refused() {
        let t0 = Instant::now();
        let mut page = controller();
        fill_form(&mut page);

        assert!(page.submit_requested(t0).is_some());
        // Second click while in flight
        assert!(page.submit_requested(t0 + Duration::from_millis(100)).is_none());
        assert!(page.form.submitting());
    }

    #[test]
    fn test_failed_submission_preserves_fields() {
        let t0 = Instant::now();
        let mut page = controller();
        fill_form(&mut page);
        page.submit_requested(t0);

        let err = SubmitError {
            message: "endpoint answered 503".to_string(),
        };
        page.submission_finished(Err(err), t0 + Duration::from_secs(1));

        assert!(!page.form.submitting());
        assert_eq!(page.form.email, "jordan@example.com");
        let toast = page.toast().expect("error toast");
        assert_eq!(toast.severity, ToastSeverity::Error);
    }

    #[test]
    fn test_no_contact_section_disables_pipeline() {
        let t0 = Instant::now();
        let mut content = full_content();
        content.contact = None;
        let mut page = PageController::new(&content);
        fill_form(&mut page);

        assert!(page.submit_requested(t0).is_none());
        assert!(page.toast().is_none());
    }

    #[test]
    fn test_toast_last_write_wins_and_retimes() {
        let t0 = Instant::now();
        let mut page = controller();

        page.show_toast("First", "one", ToastSeverity::Success, t0);
        page.show_toast("Second", "two", ToastSeverity::Error, t0 + Duration::from_secs(4));

        // 8s after the first show the replacement is still alive
        page.tick(t0 + Duration::from_secs(8));
        let toast = page.toast().expect("replacement toast");
        assert_eq!(toast.title, "Second");

        // ...and it expires 5s after ITS show, not the first one's
        page.tick(t0 + Duration::from_millis(9_100));
        assert!(page.toast().is_none());
    }

    #[test]
    fn test_escape_closes_menu_and_toast() {
        let t0 = Instant::now();
        let mut page = controller();
        page.menu.open();
        page.show_toast("Hi", "there", ToastSeverity::Success, t0);

        page.handle_escape();
        assert!(!page.menu.is_open());
        assert!(page.toast().is_none());
    }

    #[test]
    fn test_escape_with_only_menu() {
        let mut page = controller();
        page.menu.open();
        page.handle_escape();
        assert!(!page.menu.is_open());
        assert!(page.toast().is_none());
    }

    #[test]
    fn test_escape_with_nothing_is_noop() {
        let mut page = controller();
        page.handle_escape();
        assert!(!page.menu.is_open());
        assert!(page.toast().is_none());
        assert_eq!(page.take_pending_scroll(), None);
    }

    #[test]
    fn test_nav_to_known_section() {
        let mut page = controller();
        page.request_scroll("services");
        assert_eq!(page.take_pending_scroll(), Some(SectionId::Services));
        // Consumed
        assert_eq!(page.take_pending_scroll(), None);
    }

    #[test]
    fn test_nav_to_unknown_target_is_absorbed() {
        let mut page = controller();
        page.request_scroll("careers");
        assert_eq!(page.take_pending_scroll(), None);
    }

    #[test]
    fn test_nav_to_absent_section_is_absorbed() {
        let mut content = full_content();
        content.projects.clear();
        let mut page = PageController::new(&content);

        page.request_scroll("work");
        assert_eq!(page.take_pending_scroll(), None);
    }

    #[test]
    fn test_menu_link_closes_then_navigates() {
        let mut page = controller();
        page.menu.open();

        page.menu_nav_clicked("about");
        assert!(!page.menu.is_open());
        assert_eq!(page.take_pending_scroll(), Some(SectionId::About));
    }

    #[test]
    fn test_card_reveal_is_one_shot_through_controller() {
        let t0 = Instant::now();
        let mut page = controller();
        let id = CardId::new(SectionId::Services, 0);
        let on_screen = Rect::from_min_max(pos2(0.0, 100.0), pos2(400.0, 300.0));
        let off_screen = Rect::from_min_max(pos2(0.0, 4000.0), pos2(400.0, 4200.0));

        page.observe_card(id, on_screen, viewport(), t0);
        page.observe_card(id, off_screen, viewport(), t0 + Duration::from_secs(1));
        assert!((page.reveal_progress(id, t0 + Duration::from_secs(2)) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_next_deadline_tracks_toast() {
        let t0 = Instant::now();
        let mut page = controller();
        assert_eq!(page.next_deadline(), None);

        page.show_toast("Hi", "there", ToastSeverity::Success, t0);
        assert_eq!(page.next_deadline(), Some(t0 + Duration::from_secs(5)));
    }

    #[test]
    fn test_scrolled_flag_through_controller() {
        let t0 = Instant::now();
        let mut page = controller();

        page.observe_scroll(50.0, t0);
        assert!(!page.header_scrolled());

        page.observe_scroll(120.0, t0 + Duration::from_millis(20));
        assert!(page.header_scrolled());
        assert!((page.parallax_shift() - 48.0).abs() < 1e-3);
    }
}
