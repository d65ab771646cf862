pub mod controller;
pub mod store;
pub mod surface;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use controller::ThemeController;
pub use store::{ PersistedPreference, ThemeStore, SYSTEM_SOURCE };
pub use surface::ThemeSurface;
#[cfg(target_arch = "wasm32")]
pub use web::{ bind_theme_controller, DomSurface, LocalStore, WebThemeController };
