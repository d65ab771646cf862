use std::collections::{ BTreeSet, HashMap };
use crate::error::ThemeError;
use crate::theme::{ ThemeStore, ThemeSurface };
use crate::utils::{ Icon, IconTransition, ThemeState };

#[derive(Debug, Default)]
pub struct MemoryStore {
    pub entries: HashMap<String, String>,
    pub read_only: bool,
}

impl MemoryStore {
    pub fn with(pairs: &[(&str, &str)]) -> Self {
        Self {
            entries: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            read_only: false,
        }
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl ThemeStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        if self.read_only {
            return Err(ThemeError::Storage("quota exceeded".to_string()));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), ThemeError> {
        if self.read_only {
            return Err(ThemeError::Storage("quota exceeded".to_string()));
        }
        self.entries.remove(key);
        Ok(())
    }
}

/// Document stand-in that keeps the last painted values and every
/// transition it was asked to run.
#[derive(Debug)]
pub struct RecordingSurface {
    pub os_dark: bool,
    pub reduced_motion: bool,
    pub has_toggle: bool,
    pub has_meta: bool,
    pub root_classes: BTreeSet<String>,
    pub tab_color: Option<String>,
    pub icon: Option<Icon>,
    pub icon_renders: usize,
    pub transitions: Vec<IconTransition>,
}

impl RecordingSurface {
    pub fn new(os_dark: bool) -> Self {
        Self {
            os_dark,
            reduced_motion: false,
            has_toggle: true,
            has_meta: false,
            root_classes: BTreeSet::new(),
            tab_color: None,
            icon: None,
            icon_renders: 0,
            transitions: Vec::new(),
        }
    }

    /// Runs every pending transition to completion.
    pub fn finish_transitions(&mut self) {
        if let Some(last) = self.transitions.last() {
            self.icon = Some(last.target().icon());
        }
    }
}

impl ThemeSurface for RecordingSurface {
    fn prefers_dark(&self) -> bool {
        self.os_dark
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    fn set_root_class(&mut self, class: &str, enabled: bool) -> Result<(), ThemeError> {
        if enabled {
            self.root_classes.insert(class.to_string());
        } else {
            self.root_classes.remove(class);
        }
        Ok(())
    }

    fn set_tab_color(&mut self, color: &str) -> Result<(), ThemeError> {
        // Created lazily like the real page.
        self.has_meta = true;
        self.tab_color = Some(color.to_string());
        Ok(())
    }

    fn render_icon(&mut self, state: ThemeState) -> Result<(), ThemeError> {
        if !self.has_toggle {
            return Ok(());
        }
        self.icon = Some(state.icon());
        self.icon_renders += 1;
        Ok(())
    }

    fn has_rendered_icon(&self) -> bool {
        self.has_toggle && self.icon.is_some()
    }

    fn animate_icon(&mut self, transition: IconTransition) -> Result<(), ThemeError> {
        self.transitions.push(transition);
        Ok(())
    }
}
