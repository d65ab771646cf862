pub mod theme_config;

pub use theme_config::{ load_theme_config, ThemeConfig };
