use log::{ debug, info, warn };
use crate::configs::ThemeConfig;
use crate::error::ThemeError;
use crate::theme::store::{ PersistedPreference, ThemeStore };
use crate::theme::surface::ThemeSurface;
use crate::utils::{ IconTransition, ThemePreferenceSource, ThemeState };

/// Owns the current theme and keeps the document and the store in step.
///
/// The OS preference is followed for as long as the source is
/// [`ThemePreferenceSource::System`]; a manual toggle switches the source to
/// [`ThemePreferenceSource::UserSet`] and system changes are ignored from
/// then on.
pub struct ThemeController<S: ThemeStore, D: ThemeSurface> {
    store: S,
    surface: D,
    config: ThemeConfig,
    state: ThemeState,
    source: ThemePreferenceSource,
}

impl<S: ThemeStore, D: ThemeSurface> ThemeController<S, D> {
    pub fn new(store: S, surface: D, config: ThemeConfig) -> Self {
        Self {
            store,
            surface,
            config,
            state: ThemeState::default(),
            source: ThemePreferenceSource::System,
        }
    }

    pub fn state(&self) -> ThemeState {
        self.state
    }

    pub fn source(&self) -> ThemePreferenceSource {
        self.source
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    #[cfg(test)]
    pub(crate) fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    #[cfg(test)]
    pub(crate) fn surface_mut(&mut self) -> &mut D {
        &mut self.surface
    }

    /// Stored theme if there is one, otherwise the OS preference.
    pub fn resolve_initial_state(&self) -> ThemeState {
        PersistedPreference::read(&self.store, &self.config)
            .theme
            .unwrap_or_else(|| ThemeState::from_dark(self.surface.prefers_dark()))
    }

    /// Page-load bootstrap.
    pub fn start(&mut self) {
        let persisted = PersistedPreference::read(&self.store, &self.config);
        let os_dark = self.surface.prefers_dark();
        let state = persisted.theme.unwrap_or(ThemeState::from_dark(os_dark));
        self.source = persisted.source;

        if persisted.theme.is_none() {
            self.persist(state, ThemePreferenceSource::System);
        }
        info!("Initial theme {} ({:?})", state, self.source);
        self.apply_state(state, false);

        self.reconcile_with_os();
    }

    pub fn apply_state(&mut self, state: ThemeState, animate: bool) {
        self.state = state;

        let dark_class = self.config.dark_class.clone();
        report("root class", self.surface.set_root_class(&dark_class, state.is_dark()));
        report("tab color", self.surface.set_tab_color(state.tab_color()));

        let animate = animate
            && self.config.animate
            && !self.surface.prefers_reduced_motion()
            && self.surface.has_rendered_icon();
        if animate {
            report("icon transition", self.surface.animate_icon(IconTransition::towards(state)));
        } else {
            report("icon", self.surface.render_icon(state));
        }
    }

    pub fn on_manual_toggle(&mut self) {
        let next = self.state.toggled();
        self.source = ThemePreferenceSource::UserSet;
        self.persist(next, ThemePreferenceSource::UserSet);
        debug!("Manual toggle to {}", next);
        self.apply_state(next, true);
    }

    pub fn on_system_preference_change(&mut self, prefers_dark: bool) {
        if !self.source.follows_system() {
            debug!("Ignoring system preference change, theme was set by the user");
            return;
        }

        let state = ThemeState::from_dark(prefers_dark);
        self.persist(state, ThemePreferenceSource::System);
        if state == self.state {
            return;
        }
        debug!("Following system preference to {}", state);
        self.apply_state(state, false);
    }

    /// Another tab wrote the store.
    pub fn on_store_changed(&mut self) {
        let persisted = PersistedPreference::read(&self.store, &self.config);
        self.source = persisted.source;
        let state = persisted
            .theme
            .unwrap_or_else(|| ThemeState::from_dark(self.surface.prefers_dark()));
        if state != self.state {
            debug!("Syncing theme {} from storage", state);
            self.apply_state(state, false);
        }
    }

    /// The page came back from the back/forward cache.
    pub fn on_page_restored(&mut self) {
        self.on_store_changed();
        self.reconcile_with_os();
    }

    // A system-sourced value goes stale when the OS flips while the page is
    // closed or frozen; no change event is delivered for that.
    fn reconcile_with_os(&mut self) {
        let os_dark = self.surface.prefers_dark();
        if self.source.follows_system() && self.state.is_dark() != os_dark {
            self.on_system_preference_change(os_dark);
        }
    }

    fn persist(&mut self, state: ThemeState, source: ThemePreferenceSource) {
        report("persist", PersistedPreference::write(&mut self.store, &self.config, state, source));
    }
}

fn report(what: &str, result: Result<(), ThemeError>) {
    if let Err(e) = result {
        warn!("Theme {} skipped: {}", what, e);
    }
}
