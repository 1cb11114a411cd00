use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct AppConfig {
    pub app: AppSection,
    #[serde(default)]
    pub map: MapSection,
    #[serde(default)]
    pub list: ListSection,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppSection {
    pub title: String,
    #[serde(default)]
    pub default_page: Page,
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            title: "Nepal Marketplace".to_string(),
            default_page: Page::default(),
        }
    }
}

/// Страница приложения
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    #[default]
    Products,
    Donors,
    NewListing,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Products => "Marketplace",
            Page::Donors => "BloodLink",
            Page::NewListing => "New Listing",
        }
    }

    pub fn all() -> [Page; 3] {
        [Page::Products, Page::Donors, Page::NewListing]
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MapSection {
    pub width: f64,
    pub height: f64,
    pub marker_radius: f64,
}

impl Default for MapSection {
    fn default() -> Self {
        Self {
            width: 830.0,
            height: 440.0,
            marker_radius: 7.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ListSection {
    pub show_donors_list: bool,
}

impl Default for ListSection {
    fn default() -> Self {
        Self {
            show_donors_list: true,
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[app]
title = "Nepal Marketplace"
default_page = "products"

[map]
width = 830
height = 440
marker_radius = 7.0

[list]
show_donors_list = true
"#;

/// Load configuration
///
/// Search order:
/// 1. TOML passed at build time via `MARKETPLACE_CONFIG`
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<AppConfig> {
    if let Some(raw) = option_env!("MARKETPLACE_CONFIG") {
        match parse_config(raw) {
            Ok(config) => {
                log::info!("Using MARKETPLACE_CONFIG from build environment");
                return Ok(config);
            }
            Err(e) => log::warn!("MARKETPLACE_CONFIG is invalid, using defaults: {:#}", e),
        }
    }

    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(raw: &str) -> anyhow::Result<AppConfig> {
    let config: AppConfig = toml::from_str(raw)?;
    if config.map.width <= 0.0 || config.map.height <= 0.0 {
        anyhow::bail!(
            "map size must be positive, got {}x{}",
            config.map.width,
            config.map.height
        );
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.app.title, "Nepal Marketplace");
        assert_eq!(config.app.default_page, Page::Products);
        assert_eq!(config.map, MapSection::default());
        assert!(config.list.show_donors_list);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_sections_are_optional() {
        let config = parse_config(
            r#"
            [app]
            title = "BloodLink"
            default_page = "donors"
            "#,
        )
        .unwrap();
        assert_eq!(config.app.default_page, Page::Donors);
        assert_eq!(config.map.marker_radius, 7.0);
    }

    #[test]
    fn test_new_listing_page_name() {
        let config = parse_config(
            r#"
            [app]
            title = "x"
            default_page = "new-listing"
            "#,
        )
        .unwrap();
        assert_eq!(config.app.default_page, Page::NewListing);
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(parse_config("[app]\ndefault_page = \"donors\"").is_err());
        assert!(parse_config(
            "[app]\ntitle = \"x\"\n[map]\nwidth = 0\nheight = 10\nmarker_radius = 1.0"
        )
        .is_err());
    }
}
