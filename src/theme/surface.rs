use crate::error::ThemeError;
use crate::utils::{ IconTransition, ThemeState };

/// The parts of the document the controller drives.
///
/// Implementations tolerate missing elements: a page without a toggle
/// control simply has no icon to render.
pub trait ThemeSurface {
    /// Live value of `(prefers-color-scheme: dark)`.
    fn prefers_dark(&self) -> bool;

    fn prefers_reduced_motion(&self) -> bool {
        false
    }

    fn set_root_class(&mut self, class: &str, enabled: bool) -> Result<(), ThemeError>;

    /// Writes the tab-color meta tag, creating it when absent.
    fn set_tab_color(&mut self, color: &str) -> Result<(), ThemeError>;

    /// Immediately shows the icon for `state` inside the toggle.
    fn render_icon(&mut self, state: ThemeState) -> Result<(), ThemeError>;

    /// Whether the toggle currently holds a rendered icon to animate.
    fn has_rendered_icon(&self) -> bool;

    fn animate_icon(&mut self, transition: IconTransition) -> Result<(), ThemeError>;
}
