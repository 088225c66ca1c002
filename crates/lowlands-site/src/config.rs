//! Site configuration
//!
//! Layout choice and the two reveal presets, read from the embedded
//! `site.toml`. A `?layout=` query parameter overrides the layout.

use lowlands_reveal::{RevealError, RevealProfile, RevealResult};
use serde::Deserialize;

const EMBEDDED: &str = include_str!("../site.toml");

/// Which version of the page to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageLayout {
    /// Hero, bento grid, footer.
    Minimal,
    /// Minimal plus the scrolling detail sections.
    #[default]
    DeepDive,
}

impl PageLayout {
    /// Parse the query-string spelling.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "minimal" => Some(PageLayout::Minimal),
            "deep-dive" | "deepdive" => Some(PageLayout::DeepDive),
            _ => None,
        }
    }
}

/// Presentation settings.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Page layout.
    pub layout: PageLayout,
    /// Reveal preset for bento cards.
    pub card: RevealProfile,
    /// Reveal preset for detail sections.
    pub section: RevealProfile,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            layout: PageLayout::default(),
            card: RevealProfile::CARD,
            section: RevealProfile::SECTION,
        }
    }
}

impl SiteConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(raw: &str) -> RevealResult<Self> {
        toml::from_str(raw).map_err(|e| RevealError::Config(e.to_string()))
    }

    /// The configuration compiled into the binary, or defaults if it is
    /// rejected.
    pub fn embedded() -> Self {
        match Self::from_toml_str(EMBEDDED) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("embedded site.toml rejected, using defaults: {e}");
                Self::default()
            }
        }
    }

    /// Apply a `?layout=` override from a raw query string.
    pub fn with_query(mut self, query: &str) -> Self {
        if let Some(layout) = layout_from_query(query) {
            self.layout = layout;
        }
        self
    }
}

/// Extract `layout` from a query string such as `?layout=minimal&x=1`.
///
/// Unknown values are ignored.
pub fn layout_from_query(query: &str) -> Option<PageLayout> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .filter(|(key, _)| *key == "layout")
        .find_map(|(_, value)| PageLayout::parse(value))
}

/// The current page's query string, empty outside a browser.
pub fn current_query() -> String {
    web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = SiteConfig::from_toml_str(EMBEDDED).expect("embedded config is valid");
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_missing_tables_fall_back_to_presets() {
        let config = SiteConfig::from_toml_str("layout = \"minimal\"").expect("valid config");
        assert_eq!(config.layout, PageLayout::Minimal);
        assert_eq!(config.card, RevealProfile::CARD);
        assert_eq!(config.section, RevealProfile::SECTION);
    }

    #[test]
    fn test_out_of_range_threshold_rejected() {
        let raw = r#"
            [card]
            threshold = 1.5
            transition_ms = 700
            offset_px = 48
        "#;
        let err = SiteConfig::from_toml_str(raw).expect_err("threshold out of range");
        assert!(matches!(err, RevealError::Config(msg) if msg.contains("1.5")));
    }

    #[test]
    fn test_unknown_layout_rejected() {
        assert!(SiteConfig::from_toml_str("layout = \"carousel\"").is_err());
    }

    #[test]
    fn test_layout_from_query() {
        assert_eq!(layout_from_query("?layout=minimal"), Some(PageLayout::Minimal));
        assert_eq!(
            layout_from_query("?theme=dark&layout=deep-dive"),
            Some(PageLayout::DeepDive)
        );
        assert_eq!(layout_from_query("?layout=grid"), None);
        assert_eq!(layout_from_query(""), None);
    }

    #[test]
    fn test_query_overrides_layout() {
        let config = SiteConfig::default().with_query("?layout=minimal");
        assert_eq!(config.layout, PageLayout::Minimal);
        let untouched = SiteConfig::default().with_query("?layout=bogus");
        assert_eq!(untouched.layout, PageLayout::DeepDive);
    }
}
