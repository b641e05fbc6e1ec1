//! Scroll-reactive state.
//!
//! The raw offset is sampled every frame and fed through a trailing-edge
//! throttle, so the header flag and the hero parallax move at most once per
//! window. Samples arriving while a window is open overwrite each other;
//! when the window closes the most recent one is applied.

use std::time::{Duration, Instant};

/// Offset above which the header switches to its condensed treatment.
pub const HEADER_THRESHOLD: f32 = 50.0;
/// Fraction of the scroll offset the hero backdrop moves by.
pub const PARALLAX_FACTOR: f32 = 0.4;
/// Minimum spacing between applied scroll samples.
pub const THROTTLE_WINDOW: Duration = Duration::from_millis(16);

/// Trailing-edge throttle over a single f32 sample.
#[derive(Debug)]
pub struct Throttle {
    window: Duration,
    open_until: Option<Instant>,
    pending: Option<f32>,
}

impl Throttle {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            open_until: None,
            pending: None,
        }
    }

    /// Record a sample. Returns it immediately when no window is open;
    /// otherwise holds it (replacing any held sample) until `poll`.
    pub fn submit(&mut self, value: f32, now: Instant) -> Option<f32> {
        match self.open_until {
            Some(until) if now < until => {
                self.pending = Some(value);
                None
            }
            _ => {
                self.open_until = Some(now + self.window);
                self.pending = None;
                Some(value)
            }
        }
    }

    /// Release the held sample once its window has closed. Releasing opens
    /// a fresh window, so back-to-back releases stay spaced apart.
    pub fn poll(&mut self, now: Instant) -> Option<f32> {
        match self.open_until {
            Some(until) if now >= until => match self.pending.take() {
                Some(value) => {
                    self.open_until = Some(now + self.window);
                    Some(value)
                }
                None => {
                    self.open_until = None;
                    None
                }
            },
            _ => None,
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the held sample becomes due, if one is held.
    pub fn next_release(&self) -> Option<Instant> {
        if self.pending.is_some() {
            self.open_until
        } else {
            None
        }
    }
}

/// Applied scroll state. `offset` only changes through the throttle.
#[derive(Debug)]
pub struct ScrollEffects {
    throttle: Throttle,
    offset: f32,
    scrolled: bool,
    hero_present: bool,
}

impl ScrollEffects {
    pub fn new(hero_present: bool) -> Self {
        Self {
            throttle: Throttle::new(THROTTLE_WINDOW),
            offset: 0.0,
            scrolled: false,
            hero_present,
        }
    }

    /// Feed the raw per-frame offset.
    pub fn observe(&mut self, offset: f32, now: Instant) {
        if let Some(value) = self.throttle.submit(offset, now) {
            self.apply(value);
        }
    }

    /// Release a due pending sample. Returns true when state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.throttle.poll(now) {
            Some(value) => {
                self.apply(value);
                true
            }
            None => false,
        }
    }

    fn apply(&mut self, offset: f32) {
        self.offset = offset;
        let scrolled = offset > HEADER_THRESHOLD;
        if scrolled != self.scrolled {
            self.scrolled = scrolled;
            log::debug!(
                "Header {} at offset {:.0}",
                if scrolled { "condensed" } else { "expanded" },
                offset
            );
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Whether the page has scrolled past the header threshold.
    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    /// Vertical shift for the hero backdrop. Zero when the page has no hero.
    pub fn parallax_shift(&self) -> f32 {
        if self.hero_present {
            self.offset * PARALLAX_FACTOR
        } else {
            0.0
        }
    }

    pub fn next_release(&self) -> Option<Instant> {
        self.throttle.next_release()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_first_sample_applies_immediately() {
        let t0 = Instant::now();
        let mut th = Throttle::new(ms(16));
        assert_eq!(th.submit(10.0, t0), Some(10.0));
    }

    #[test]
    fn test_burst_keeps_only_latest() {
        let t0 = Instant::now();
        let mut th = Throttle::new(ms(16));

        assert_eq!(th.submit(10.0, t0), Some(10.0));
        assert_eq!(th.submit(20.0, t0 + ms(4)), None);
        assert_eq!(th.submit(30.0, t0 + ms(8)), None);
        assert_eq!(th.poll(t0 + ms(12)), None);

        // Window closes: only the latest of the dropped samples comes out
        assert_eq!(th.poll(t0 + ms(16)), Some(30.0));
        assert!(!th.has_pending());
    }

    #[test]
    fn test_at_most_one_release_per_window() {
        let t0 = Instant::now();
        let mut th = Throttle::new(ms(16));

        th.submit(1.0, t0);
        th.submit(2.0, t0 + ms(5));
        assert_eq!(th.poll(t0 + ms(16)), Some(2.0));

        // The release opened a new window; a sample inside it must wait
        assert_eq!(th.submit(3.0, t0 + ms(20)), None);
        assert_eq!(th.poll(t0 + ms(24)), None);
        assert_eq!(th.poll(t0 + ms(32)), Some(3.0));
    }

    #[test]
    fn test_idle_window_resets() {
        let t0 = Instant::now();
        let mut th = Throttle::new(ms(16));

        th.submit(1.0, t0);
        assert_eq!(th.poll(t0 + ms(16)), None);

        // After an empty window the throttle is idle again
        assert_eq!(th.submit(2.0, t0 + ms(40)), Some(2.0));
    }

    #[test]
    fn test_scrolled_is_strict_threshold() {
        let t0 = Instant::now();
        let mut fx = ScrollEffects::new(true);

        fx.observe(50.0, t0);
        assert!(!fx.scrolled());

        fx.observe(50.1, t0 + ms(20));
        assert!(fx.scrolled());

        fx.observe(12.0, t0 + ms(40));
        assert!(!fx.scrolled());
    }

    #[test]
    fn test_parallax_factor() {
        let t0 = Instant::now();
        let mut fx = ScrollEffects::new(true);
        fx.observe(200.0, t0);
        assert!((fx.parallax_shift() - 80.0).abs() < 1e-6);
    }

    #[test]
    fn test_parallax_zero_without_hero() {
        let t0 = Instant::now();
        let mut fx = ScrollEffects::new(false);
        fx.observe(200.0, t0);
        assert_eq!(fx.parallax_shift(), 0.0);
        // The header flag is independent of the hero
        assert!(fx.scrolled());
    }

    #[test]
    fn test_effects_apply_on_tick() {
        let t0 = Instant::now();
        let mut fx = ScrollEffects::new(true);

        fx.observe(10.0, t0);
        fx.observe(300.0, t0 + ms(5));
        assert!(!fx.scrolled());
        assert!(fx.next_release().is_some());

        assert!(fx.tick(t0 + ms(16)));
        assert!(fx.scrolled());
        assert!((fx.offset() - 300.0).abs() < 1e-6);
        assert_eq!(fx.next_release(), None);
    }
}
