use serde::Deserialize;
use crate::error::ThemeError;

pub const THEME_CONFIG_VAR: &str = "THEME_CONFIG";

/// DOM and storage names the controller works against.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub toggle_id: String,
    pub dark_class: String,
    pub theme_key: String,
    pub source_key: String,
    pub animate: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            toggle_id: "toggle-theme".to_string(),
            dark_class: "dark-mode".to_string(),
            theme_key: "theme".to_string(),
            source_key: "themeSource".to_string(),
            animate: true,
        }
    }
}

impl ThemeConfig {
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        let config: ThemeConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ThemeError> {
        if self.toggle_id.trim().is_empty() {
            return Err(ThemeError::Config("toggle_id must not be empty".to_string()));
        }
        if self.dark_class.trim().is_empty() || self.dark_class.contains(char::is_whitespace) {
            return Err(ThemeError::Config(format!("invalid dark_class: {:?}", self.dark_class)));
        }
        if self.theme_key.is_empty() || self.source_key.is_empty() || self.theme_key == self.source_key {
            return Err(ThemeError::Config("storage keys must be distinct and non-empty".to_string()));
        }
        Ok(())
    }
}

/// Loads the theme configuration, falling back to the defaults.
pub fn load_theme_config() -> ThemeConfig {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenv::dotenv().ok();
        match std::env::var(THEME_CONFIG_VAR) {
            Ok(raw) => parse_or_default(&raw),
            Err(_) => {
                log::debug!("{} not set, using default theme config", THEME_CONFIG_VAR);
                ThemeConfig::default()
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    {
        ThemeConfig::default()
    }
}

fn parse_or_default(raw: &str) -> ThemeConfig {
    match ThemeConfig::from_json(raw) {
        Ok(config) => {
            log::info!("Using theme config from {}", THEME_CONFIG_VAR);
            config
        }
        Err(e) => {
            log::warn!("Ignoring {}: {}", THEME_CONFIG_VAR, e);
            ThemeConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page_contract() {
        let config = ThemeConfig::default();
        assert_eq!(config.toggle_id, "toggle-theme");
        assert_eq!(config.dark_class, "dark-mode");
        assert_eq!(config.theme_key, "theme");
        assert_eq!(config.source_key, "themeSource");
        assert!(config.animate);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ThemeConfig::from_json(r#"{ "toggle_id": "theme-btn", "animate": false }"#).unwrap();
        assert_eq!(config.toggle_id, "theme-btn");
        assert!(!config.animate);
        assert_eq!(config.theme_key, "theme");
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(ThemeConfig::from_json(r#"{ "toggle_id": " " }"#).is_err());
        assert!(ThemeConfig::from_json(r#"{ "dark_class": "dark mode" }"#).is_err());
        assert!(ThemeConfig::from_json(r#"{ "source_key": "theme" }"#).is_err());
        assert!(ThemeConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_tab_colors_are_not_configurable() {
        let config = ThemeConfig::from_json(r##"{ "dark_color": "#123456", "light_color": "#654321" }"##).unwrap();
        assert_eq!(config, ThemeConfig::default());
    }

    #[test]
    fn test_invalid_falls_back_to_default() {
        assert_eq!(parse_or_default("{"), ThemeConfig::default());
    }
}
