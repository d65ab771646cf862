//! Phased icon transition.
//!
//! The outgoing icon spins and shrinks while its strokes undraw, the markup
//! is swapped, then the incoming icon draws in and settles back to full size
//! with an elastic ease. Frames are sampled from frame timestamps so the
//! driver only has to forward each timestamp and paint what comes back.

use crate::utils::easing::{ lerp, power2_in_out, power4_in, power4_out, settle };
use crate::utils::theme_state::ThemeState;

pub const OUT_MS: f64 = 600.0;
pub const UNDRAW_MS: f64 = 450.0;
pub const IN_MS: f64 = 800.0;
pub const DRAW_MS: f64 = 500.0;
pub const TOTAL_MS: f64 = OUT_MS + IN_MS;

const OUT_SCALE: f64 = 0.5;
const IN_SCALE: f64 = 0.7;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionPhase {
    Out,
    In,
    Done,
}

/// One painted frame: rotation in degrees, uniform scale, and how much of
/// each stroke is hidden (`0` fully drawn, `1` fully dashed away).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconFrame {
    pub phase: TransitionPhase,
    pub rotation: f64,
    pub scale: f64,
    pub dash: f64,
}

impl IconFrame {
    pub const REST: IconFrame = IconFrame {
        phase: TransitionPhase::Done,
        rotation: 0.0,
        scale: 1.0,
        dash: 0.0,
    };

    pub fn transform(&self) -> String {
        format!("rotate({:.2}deg) scale({:.4})", self.rotation, self.scale)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconTransition {
    target: ThemeState,
}

impl IconTransition {
    pub fn towards(target: ThemeState) -> Self {
        Self { target }
    }

    pub fn target(&self) -> ThemeState {
        self.target
    }

    fn exit_rotation(&self) -> f64 {
        if self.target.is_dark() { -180.0 } else { 180.0 }
    }

    fn entry_rotation(&self) -> f64 {
        if self.target.is_dark() { 180.0 } else { -180.0 }
    }

    pub fn phase_at(&self, elapsed_ms: f64) -> TransitionPhase {
        if elapsed_ms < OUT_MS {
            TransitionPhase::Out
        } else if elapsed_ms < TOTAL_MS {
            TransitionPhase::In
        } else {
            TransitionPhase::Done
        }
    }

    pub fn sample(&self, elapsed_ms: f64) -> IconFrame {
        let elapsed = elapsed_ms.max(0.0);
        match self.phase_at(elapsed) {
            TransitionPhase::Out => {
                let e = power2_in_out(elapsed / OUT_MS);
                IconFrame {
                    phase: TransitionPhase::Out,
                    rotation: lerp(0.0, self.exit_rotation(), e),
                    scale: lerp(1.0, OUT_SCALE, e),
                    dash: power4_in(elapsed / UNDRAW_MS),
                }
            }
            TransitionPhase::In => {
                let local = elapsed - OUT_MS;
                let e = settle(local / IN_MS);
                IconFrame {
                    phase: TransitionPhase::In,
                    rotation: lerp(self.entry_rotation(), 0.0, e),
                    scale: lerp(IN_SCALE, 1.0, e),
                    dash: 1.0 - power4_out(local / DRAW_MS),
                }
            }
            TransitionPhase::Done => IconFrame::REST,
        }
    }
}

/// Single in-flight guard around the icon transition.
///
/// A toggle that lands while a run is in progress only retargets it; the
/// swap and the end of the run always render the latest target.
#[derive(Debug, Default)]
pub struct TransitionGuard {
    running: Option<ThemeState>,
}

impl TransitionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Returns `true` when the caller should start a new run.
    pub fn begin(&mut self, target: ThemeState) -> bool {
        let start = self.running.is_none();
        self.running = Some(target);
        start
    }

    pub fn target(&self) -> Option<ThemeState> {
        self.running
    }

    /// Ends the run and hands back the state whose icon must be showing.
    pub fn finish(&mut self) -> Option<ThemeState> {
        self.running.take()
    }
}

/// What the driver paints for one frame timestamp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrameStep {
    Paint(IconFrame),
    /// Replace the markup with the icon for the state, then paint the frame.
    Swap(ThemeState, IconFrame),
    Finish,
}

/// How the toggle is left once a run has finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettleAction {
    /// The icon on screen is stale; render the state's icon afresh.
    Repaint(ThemeState),
    /// The icon on screen is right; only clear the animation styles.
    Rest,
}

/// One run of the transition, fed frame timestamps by the driver.
#[derive(Clone, Copy, Debug)]
pub struct TransitionRun {
    transition: IconTransition,
    started: Option<f64>,
    swapped: bool,
}

impl TransitionRun {
    pub fn new(transition: IconTransition) -> Self {
        Self { transition, started: None, swapped: false }
    }

    /// State whose icon is on screen once the swap has happened.
    pub fn shown(&self) -> Option<ThemeState> {
        self.swapped.then_some(self.transition.target())
    }

    /// Advances to `now_ms`. `latest` is the guard's current target, picked
    /// up at the swap so toggles during the out phase land on the new icon.
    pub fn step(&mut self, now_ms: f64, latest: Option<ThemeState>) -> FrameStep {
        let started = *self.started.get_or_insert(now_ms);
        let elapsed = now_ms - started;
        match self.transition.phase_at(elapsed.max(0.0)) {
            TransitionPhase::Done => FrameStep::Finish,
            TransitionPhase::In if !self.swapped => {
                if let Some(target) = latest {
                    self.transition = IconTransition::towards(target);
                }
                self.swapped = true;
                FrameStep::Swap(self.transition.target(), self.transition.sample(elapsed))
            }
            _ => FrameStep::Paint(self.transition.sample(elapsed)),
        }
    }

    /// `last` is what the guard handed back on finish.
    pub fn settle(&self, last: Option<ThemeState>) -> SettleAction {
        match (last, self.shown()) {
            (Some(state), Some(shown)) if state == shown => SettleAction::Rest,
            (Some(state), _) => SettleAction::Repaint(state),
            (None, _) => SettleAction::Rest,
        }
    }
}
