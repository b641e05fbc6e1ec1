//! Page sections and their anchors.
//!
//! The presence set is resolved from the content exactly once, when the
//! controller is built. Behaviors tied to a section that is not present
//! stay disabled for the lifetime of the page; nothing retries.

use std::collections::HashMap;

use egui::Rect;

use crate::content::SiteContent;

/// Identity of a page section. Nav targets resolve against these slugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    Services,
    Work,
    About,
    Contact,
}

impl SectionId {
    /// Resolve a nav target slug. Unknown slugs stay unresolved.
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "home" => Some(SectionId::Home),
            "services" => Some(SectionId::Services),
            "work" => Some(SectionId::Work),
            "about" => Some(SectionId::About),
            "contact" => Some(SectionId::Contact),
            _ => None,
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Services => "services",
            SectionId::Work => "work",
            SectionId::About => "about",
            SectionId::Contact => "contact",
        }
    }
}

/// Which sections the loaded content actually provides, plus where each one
/// ended up on the last laid-out frame.
pub struct SectionRegistry {
    present: Vec<SectionId>,
    anchors: HashMap<SectionId, Rect>,
}

impl SectionRegistry {
    /// Resolve the presence set from content. Home (the top of the page) is
    /// always present; everything else needs at least one content entry.
    pub fn from_content(content: &SiteContent) -> Self {
        let mut present = vec![SectionId::Home];
        if !content.services.is_empty() {
            present.push(SectionId::Services);
        }
        if !content.projects.is_empty() {
            present.push(SectionId::Work);
        }
        if content.about.is_some() {
            present.push(SectionId::About);
        }
        if content.contact.is_some() {
            present.push(SectionId::Contact);
        }

        for id in [
            SectionId::Services,
            SectionId::Work,
            SectionId::About,
            SectionId::Contact,
        ] {
            if !present.contains(&id) {
                log::debug!("Section '{}' absent from content, behaviors disabled", id.slug());
            }
        }

        Self {
            present,
            anchors: HashMap::new(),
        }
    }

    pub fn contains(&self, id: SectionId) -> bool {
        self.present.contains(&id)
    }

    /// Remember where a section landed this frame. Recordings for absent
    /// sections are dropped so stale anchors cannot appear.
    pub fn record_anchor(&mut self, id: SectionId, rect: Rect) {
        if self.contains(id) {
            self.anchors.insert(id, rect);
        }
    }

    pub fn anchor(&self, id: SectionId) -> Option<Rect> {
        self.anchors.get(&id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{About, ContactCopy, ServiceCard, SiteContent};
    use egui::pos2;

    fn content_with_services() -> SiteContent {
        SiteContent {
            services: vec![ServiceCard::default()],
            about: Some(About::default()),
            contact: Some(ContactCopy::default()),
            ..SiteContent::default()
        }
    }

    #[test]
    fn test_slug_round_trip() {
        for id in [
            SectionId::Home,
            SectionId::Services,
            SectionId::Work,
            SectionId::About,
            SectionId::Contact,
        ] {
            assert_eq!(SectionId::from_slug(id.slug()), Some(id));
        }
        assert_eq!(SectionId::from_slug("careers"), None);
        assert_eq!(SectionId::from_slug(""), None);
    }

    #[test]
    fn test_presence_follows_content() {
        let registry = SectionRegistry::from_content(&content_with_services());
        assert!(registry.contains(SectionId::Home));
        assert!(registry.contains(SectionId::Services));
        assert!(registry.contains(SectionId::About));
        assert!(registry.contains(SectionId::Contact));
        assert!(!registry.contains(SectionId::Work));
    }

    #[test]
    fn test_minimal_content_keeps_home_only() {
        let registry = SectionRegistry::from_content(&SiteContent::default());
        assert!(registry.contains(SectionId::Home));
        assert!(!registry.contains(SectionId::Services));
        assert!(!registry.contains(SectionId::Contact));
    }

    #[test]
    fn test_anchor_recording() {
        let mut registry = SectionRegistry::from_content(&content_with_services());
        let rect = Rect::from_min_max(pos2(0.0, 900.0), pos2(800.0, 1400.0));

        assert_eq!(registry.anchor(SectionId::Services), None);
        registry.record_anchor(SectionId::Services, rect);
        assert_eq!(registry.anchor(SectionId::Services), Some(rect));

        // Absent sections never hold an anchor
        registry.record_anchor(SectionId::Work, rect);
        assert_eq!(registry.anchor(SectionId::Work), None);
    }
}
