//! One-shot reveal of cards entering the viewport.
//!
//! Each watched card reveals the first time enough of it is visible, then
//! stays revealed forever — scrolling it out and back never re-runs the
//! entrance animation.

use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use egui::Rect;

use super::registry::SectionId;

/// How much of a card must be inside the viewport before it reveals.
const VISIBLE_FRACTION: f32 = 0.10;
/// The viewport's bottom edge is pulled up by this much, so cards reveal a
/// little before they would be flush with the window edge.
const BOTTOM_INSET: f32 = 50.0;
/// Length of the fade-in once revealed.
const FADE: Duration = Duration::from_millis(400);

/// Identity of an animatable card: its section plus its position in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardId {
    pub section: SectionId,
    pub index: usize,
}

impl CardId {
    pub fn new(section: SectionId, index: usize) -> Self {
        Self { section, index }
    }
}

/// Watches a fixed set of cards and reveals each at most once.
pub struct RevealTracker {
    watched: HashSet<CardId>,
    revealed: HashMap<CardId, Instant>,
}

impl RevealTracker {
    /// The watched set is fixed here; ids observed later that were never
    /// registered are ignored.
    pub fn new(cards: impl IntoIterator<Item = CardId>) -> Self {
        Self {
            watched: cards.into_iter().collect(),
            revealed: HashMap::new(),
        }
    }

    /// Report where a card ended up this frame. Reveals it the first time
    /// enough of it is inside the (inset) viewport.
    pub fn observe(&mut self, card: CardId, rect: Rect, viewport: Rect, now: Instant) {
        if !self.watched.contains(&card) {
            return;
        }
        if visible_fraction(rect, viewport) >= VISIBLE_FRACTION {
            self.watched.remove(&card);
            self.revealed.insert(card, now);
        }
    }

    pub fn is_revealed(&self, card: CardId) -> bool {
        self.revealed.contains_key(&card)
    }

    /// Fade-in progress in `0.0..=1.0`. Unrevealed cards are 0.
    pub fn progress(&self, card: CardId, now: Instant) -> f32 {
        match self.revealed.get(&card) {
            Some(at) => {
                let age = now.saturating_duration_since(*at);
                (age.as_secs_f32() / FADE.as_secs_f32()).clamp(0.0, 1.0)
            }
            None => 0.0,
        }
    }

    /// True while any fade-in is still running.
    pub fn animating(&self, now: Instant) -> bool {
        self.revealed
            .values()
            .any(|at| now.saturating_duration_since(*at) < FADE)
    }
}

/// Fraction of `rect` inside `viewport` after the bottom inset, 0 for
/// degenerate rects.
fn visible_fraction(rect: Rect, viewport: Rect) -> f32 {
    let area = rect.width() * rect.height();
    if area <= 0.0 {
        return 0.0;
    }
    let bottom = viewport.max.y - BOTTOM_INSET;
    let w = (rect.max.x.min(viewport.max.x) - rect.min.x.max(viewport.min.x)).max(0.0);
    let h = (rect.max.y.min(bottom) - rect.min.y.max(viewport.min.y)).max(0.0);
    (w * h) / area
}
