//! Maps interaction events onto the shared speed scalars.

use crate::core::time::Debounce;
use super::queue::InputEvent;

/// Idle cruise speed; also the value everything resets to on release.
pub const IDLE_CRUISE: f32 = 2.0;
/// Target speed while the page is scrolling.
pub const SCROLL_BOOST: f32 = 50.0;
/// Quiet period after the last scroll before returning to cruise.
pub const SCROLL_SETTLE_MS: f64 = 100.0;
/// Cruise baseline held while the trigger is pressed.
pub const HOLD_CRUISE: f32 = 100.0;
/// Target speed while the trigger is pressed.
pub const HOLD_TARGET: f32 = 200.0;
/// Fraction of the remaining gap closed by the live speed each tick.
pub const SMOOTHING: f32 = 0.05;

/// The three speed scalars the simulation reads every tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedState {
    /// Speed actually applied this tick; eases toward `target`.
    pub live: f32,
    /// Value `live` is being smoothed toward.
    pub target: f32,
    /// Cruise baseline. Added to `live` for motion and restored after a scroll.
    pub base: f32,
}

impl SpeedState {
    /// Combined speed used for motion and render-mode selection.
    pub fn total(&self) -> f32 {
        self.base + self.live
    }

    /// Exponential smoothing step toward the target.
    pub fn relax(&mut self) {
        self.live += (self.target - self.live) * SMOOTHING;
    }
}

impl Default for SpeedState {
    fn default() -> Self {
        Self {
            live: 0.0,
            target: IDLE_CRUISE,
            base: IDLE_CRUISE,
        }
    }
}

/// Interaction controller: owns the speed state and the scroll debounce.
#[derive(Debug, Clone)]
pub struct SpeedController {
    state: SpeedState,
    scroll_settle: Debounce,
}

impl SpeedController {
    pub fn new() -> Self {
        Self {
            state: SpeedState::default(),
            scroll_settle: Debounce::new(SCROLL_SETTLE_MS),
        }
    }

    pub fn state(&self) -> &SpeedState {
        &self.state
    }

    /// Boost immediately and (re)start the settle timer.
    pub fn on_scroll(&mut self, now_ms: f64) {
        self.state.target = SCROLL_BOOST;
        self.scroll_settle.arm(now_ms);
    }

    pub fn on_trigger_down(&mut self) {
        self.state.target = HOLD_TARGET;
        self.state.base = HOLD_CRUISE;
    }

    /// Release and pointer-leave both snap back to idle cruise with no smoothing.
    pub fn on_trigger_release(&mut self) {
        self.state.base = IDLE_CRUISE;
        self.state.target = IDLE_CRUISE;
    }

    /// Fire the scroll settle if its quiet period has elapsed.
    /// The target returns to whatever the baseline is at that moment.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        if self.scroll_settle.fire(now_ms) {
            self.state.target = self.state.base;
            log::debug!("scroll settled, target back to {}", self.state.target);
            true
        } else {
            false
        }
    }

    pub fn scroll_pending(&self) -> bool {
        self.scroll_settle.is_pending()
    }

    /// Apply a speed-affecting event. Returns false for events this
    /// controller does not own (resize).
    pub fn apply(&mut self, event: &InputEvent, now_ms: f64) -> bool {
        match event {
            InputEvent::Scroll => self.on_scroll(now_ms),
            InputEvent::TriggerDown => self.on_trigger_down(),
            InputEvent::TriggerUp | InputEvent::TriggerLeave => self.on_trigger_release(),
            InputEvent::Resize { .. } => return false,
        }
        true
    }

    pub fn relax(&mut self) {
        self.state.relax();
    }
}

impl Default for SpeedController {
    fn default() -> Self {
        Self::new()
    }
}
