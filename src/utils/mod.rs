pub mod easing;
pub mod icons;
pub mod theme_state;
pub mod transition;

pub use icons::Icon;
pub use theme_state::{ ThemeState, ThemePreferenceSource, DARK_TAB_COLOR, LIGHT_TAB_COLOR };
pub use transition::{ FrameStep, IconFrame, IconTransition, SettleAction, TransitionGuard, TransitionPhase, TransitionRun };
