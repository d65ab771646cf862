pub mod views;
pub mod utils;
pub mod theme;
mod routes;
pub mod configs;
#[cfg(test)]
mod tests;
pub mod error;

pub use crate::routes::*;
pub use crate::utils::*;
pub use crate::configs::{ load_theme_config, ThemeConfig };
pub use crate::error::ThemeError;
pub use crate::theme::{ ThemeController, ThemeStore, ThemeSurface };
