use std::fmt::{ Display, Formatter };
use std::str::FromStr;
use crate::utils::icons::Icon;

pub const DARK_TAB_COLOR: &str = "#0a0a0a";
pub const LIGHT_TAB_COLOR: &str = "#fafafa";

/// Display mode applied to the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeState {
    #[default]
    Light,
    Dark,
}

impl ThemeState {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark { ThemeState::Dark } else { ThemeState::Light }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeState::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeState::Light => ThemeState::Dark,
            ThemeState::Dark => ThemeState::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeState::Light => "light",
            ThemeState::Dark => "dark",
        }
    }

    /// Tab color hint for the browser chrome.
    pub fn tab_color(self) -> &'static str {
        match self {
            ThemeState::Light => LIGHT_TAB_COLOR,
            ThemeState::Dark => DARK_TAB_COLOR,
        }
    }

    /// The toggle shows the icon of the state it switches back to.
    pub fn icon(self) -> Icon {
        match self {
            ThemeState::Light => Icon::Moon,
            ThemeState::Dark => Icon::Sun,
        }
    }
}

impl FromStr for ThemeState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeState::Light),
            "dark" => Ok(ThemeState::Dark),
            other => Err(format!("unknown theme: {}", other)),
        }
    }
}

impl Display for ThemeState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why the current state was chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemePreferenceSource {
    UserSet,
    System,
}

impl ThemePreferenceSource {
    pub fn follows_system(self) -> bool {
        self == ThemePreferenceSource::System
    }
}
