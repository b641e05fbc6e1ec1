//! Site content model.
//!
//! Everything the page says — brand, nav, hero copy, cards, contact copy —
//! lives in `assets/site.toml`, compiled into the binary. The structs here
//! are plain data the render layer walks. A parse failure falls back to the
//! built-in minimal content so the kiosk always opens.

use serde::Deserialize;

const BUNDLED: &str = include_str!("../assets/site.toml");

/// Full content of the page.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub brand: Brand,
    pub nav: Vec<NavEntry>,
    pub hero: Option<Hero>,
    pub services: Vec<ServiceCard>,
    pub projects: Vec<ProjectCard>,
    pub about: Option<About>,
    pub contact: Option<ContactCopy>,
    pub footer: Footer,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Brand {
    pub name: String,
    pub tagline: String,
}

/// One header/menu link. `target` is a section slug; unknown slugs are
/// ignored at click time.
#[derive(Debug, Clone, Deserialize)]
pub struct NavEntry {
    pub label: String,
    pub target: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Hero {
    pub heading: String,
    pub subheading: String,
    pub cta_label: String,
    pub cta_target: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ServiceCard {
    pub icon: String,
    pub title: String,
    pub blurb: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectCard {
    pub title: String,
    pub summary: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct About {
    pub heading: String,
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactCopy {
    pub heading: String,
    pub blurb: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Footer {
    pub note: String,
}

impl Default for Brand {
    fn default() -> Self {
        Self {
            name: String::from("Meridian Studio"),
            tagline: String::new(),
        }
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            brand: Brand::default(),
            nav: Vec::new(),
            hero: None,
            services: Vec::new(),
            projects: Vec::new(),
            about: None,
            contact: None,
            footer: Footer::default(),
        }
    }
}

impl SiteContent {
    /// Parse the TOML bundled into the binary. Falls back to the built-in
    /// minimal content when it does not parse.
    pub fn bundled() -> Self {
        match toml::from_str(BUNDLED) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("Bundled site content failed to parse, using fallback: {}", e);
                Self::default()
            }
        }
    }

    /// Parse content from an arbitrary TOML string.
    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_content_parses() {
        // from_toml (not bundled) so a broken asset fails the test instead
        // of silently falling back
        let content = SiteContent::from_toml(BUNDLED).expect("bundled TOML must parse");
        assert_eq!(content.brand.name, "Meridian Studio");
        assert!(!content.nav.is_empty());
        assert!(content.hero.is_some());
        assert!(!content.services.is_empty());
        assert!(!content.projects.is_empty());
        assert!(content.contact.is_some());
    }

    #[test]
    fn minimal_toml_fills_defaults() {
        let content = SiteContent::from_toml("[brand]\nname = \"Acme\"\n").unwrap();
        assert_eq!(content.brand.name, "Acme");
        assert!(content.nav.is_empty());
        assert!(content.hero.is_none());
        assert!(content.services.is_empty());
        assert!(content.about.is_none());
    }

    #[test]
    fn fallback_is_openable() {
        let content = SiteContent::default();
        assert_eq!(content.brand.name, "Meridian Studio");
        assert!(content.contact.is_none());
    }
}
