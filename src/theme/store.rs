use crate::configs::ThemeConfig;
use crate::error::ThemeError;
use crate::utils::{ ThemePreferenceSource, ThemeState };

/// Value written under the source key while the theme follows the OS.
pub const SYSTEM_SOURCE: &str = "system";

/// Persisted key-value store backing the theme preference.
pub trait ThemeStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError>;
    fn remove(&mut self, key: &str) -> Result<(), ThemeError>;
}

/// Decoded view of the stored `theme` / `themeSource` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PersistedPreference {
    pub theme: Option<ThemeState>,
    pub source: ThemePreferenceSource,
}

impl PersistedPreference {
    pub fn read<S: ThemeStore + ?Sized>(store: &S, config: &ThemeConfig) -> Self {
        let theme = store.get(&config.theme_key).and_then(|raw| match raw.parse() {
            Ok(theme) => Some(theme),
            Err(e) => {
                log::warn!("Ignoring stored {}: {}", config.theme_key, e);
                None
            }
        });
        let system_sourced = store
            .get(&config.source_key)
            .map_or(false, |raw| raw == SYSTEM_SOURCE);

        // Nothing stored means nobody has chosen yet, so the OS decides.
        let source = if theme.is_none() || system_sourced {
            ThemePreferenceSource::System
        } else {
            ThemePreferenceSource::UserSet
        };

        Self { theme, source }
    }

    pub fn write<S: ThemeStore + ?Sized>(
        store: &mut S,
        config: &ThemeConfig,
        theme: ThemeState,
        source: ThemePreferenceSource
    ) -> Result<(), ThemeError> {
        store.set(&config.theme_key, theme.as_str())?;
        match source {
            ThemePreferenceSource::System => store.set(&config.source_key, SYSTEM_SOURCE),
            ThemePreferenceSource::UserSet => store.remove(&config.source_key),
        }
    }
}
