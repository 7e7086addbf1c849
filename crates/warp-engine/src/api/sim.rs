use crate::core::viewport::Viewport;
use crate::input::controller::{SpeedController, SpeedState};
use crate::input::queue::{InputEvent, InputQueue};
use crate::renderer::surface::Surface;
use crate::systems::starfield::{clear_style, StarField};

/// The whole warp simulation: star pool, speed controller and pending input.
///
/// Hosts push timestamped input at any time and call `frame` once per
/// display refresh.
pub struct WarpSim {
    field: StarField,
    controller: SpeedController,
    input: InputQueue,
    frames: u64,
}

impl WarpSim {
    pub fn new(star_count: usize, viewport: Viewport, seed: u64) -> Self {
        Self {
            field: StarField::new(star_count, viewport, seed),
            controller: SpeedController::new(),
            input: InputQueue::new(),
            frames: 0,
        }
    }

    /// Queue an input event for the next frame.
    pub fn push_input(&mut self, at_ms: f64, event: InputEvent) {
        self.input.push(at_ms, event);
    }

    /// Apply queued input without drawing. Resizes are forwarded to `surface`.
    pub fn process_input(&mut self, surface: &mut impl Surface) {
        for input in self.input.drain() {
            // Expiries due before this event happen before it.
            self.controller.poll(input.at_ms);
            match input.event {
                InputEvent::Resize { width, height } => {
                    let viewport = Viewport::new(width, height);
                    self.field.resize(viewport);
                    surface.resize(&viewport);
                }
                other => {
                    self.controller.apply(&other, input.at_ms);
                }
            }
        }
    }

    /// Run one animation frame at host time `now_ms`.
    ///
    /// Order: input, clear (from the pre-relaxation live speed), relax,
    /// then advance and draw every star.
    pub fn frame(&mut self, now_ms: f64, surface: &mut impl Surface) {
        self.process_input(surface);
        self.controller.poll(now_ms);

        surface.clear(self.field.viewport(), clear_style(self.controller.state().live));
        self.controller.relax();

        let speed = *self.controller.state();
        self.field.step(speed.total());
        self.field.draw(&speed, surface);
        self.frames += 1;
    }

    pub fn speed(&self) -> &SpeedState {
        self.controller.state()
    }

    pub fn controller(&self) -> &SpeedController {
        &self.controller
    }

    pub fn field(&self) -> &StarField {
        &self.field
    }

    pub fn viewport(&self) -> &Viewport {
        self.field.viewport()
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::controller::{HOLD_CRUISE, HOLD_TARGET, IDLE_CRUISE, SCROLL_BOOST};
    use crate::renderer::surface::CommandList;
    use crate::systems::starfield::SMEAR_ALPHA;
    use glam::Vec2;

    const FRAME_MS: f64 = 1000.0 / 60.0;

    fn sim() -> WarpSim {
        WarpSim::new(200, Viewport::new(800.0, 600.0), 7)
    }

    #[test]
    fn frame_clears_then_draws_every_star() {
        let mut s = sim();
        let mut list = CommandList::new();
        s.frame(0.0, &mut list);
        assert_eq!(list.len(), 201);
        assert_eq!(list.last_clear().map(|c| c.alpha), Some(1.0));
        assert_eq!(list.dot_count(), 200);
        assert_eq!(s.frame_count(), 1);
    }

    #[test]
    fn scroll_scenario() {
        let mut s = sim();
        let mut list = CommandList::new();
        s.push_input(100.0, InputEvent::Scroll);
        s.frame(101.0, &mut list);
        assert_eq!(s.speed().target, SCROLL_BOOST);
        s.frame(150.0, &mut list);
        assert_eq!(s.speed().target, SCROLL_BOOST);
        s.frame(200.0, &mut list);
        assert_eq!(s.speed().target, IDLE_CRUISE);
    }

    #[test]
    fn hold_scenario() {
        let mut s = sim();
        let mut list = CommandList::new();
        s.push_input(0.0, InputEvent::TriggerDown);
        s.frame(1.0, &mut list);
        assert_eq!(s.speed().base, HOLD_CRUISE);
        assert_eq!(s.speed().target, HOLD_TARGET);

        s.push_input(2.0, InputEvent::TriggerUp);
        s.process_input(&mut list);
        assert_eq!(s.speed().base, IDLE_CRUISE);
        assert_eq!(s.speed().target, IDLE_CRUISE);
    }

    #[test]
    fn holding_switches_to_trails_and_smear() {
        let mut s = sim();
        let mut list = CommandList::new();
        s.push_input(0.0, InputEvent::TriggerDown);
        for i in 0..60 {
            list.reset();
            s.frame(i as f64 * FRAME_MS, &mut list);
        }
        assert_eq!(list.line_count(), 200);
        assert_eq!(list.last_clear().map(|c| c.alpha), Some(SMEAR_ALPHA));
    }

    #[test]
    fn clear_uses_live_speed_from_before_relaxation() {
        let mut s = sim();
        let mut list = CommandList::new();
        s.push_input(0.0, InputEvent::TriggerDown);
        let mut crossing = None;
        for i in 0..20 {
            let live_before = s.speed().live;
            list.reset();
            s.frame(i as f64 * FRAME_MS, &mut list);
            if live_before <= 10.0 && s.speed().live > 10.0 {
                crossing = Some(i);
                break;
            }
        }
        assert!(crossing.is_some(), "live speed never crossed 10");
        // The frame that pushed live past 10 still cleared fully.
        assert_eq!(list.last_clear().map(|c| c.alpha), Some(1.0));

        list.reset();
        s.frame(1000.0, &mut list);
        assert_eq!(list.last_clear().map(|c| c.alpha), Some(SMEAR_ALPHA));
    }

    #[test]
    fn settle_queued_before_later_event_fires_first() {
        let mut s = sim();
        let mut list = CommandList::new();
        s.push_input(0.0, InputEvent::Scroll);
        s.push_input(150.0, InputEvent::TriggerDown);
        s.frame(151.0, &mut list);
        // Settle at 100ms restored idle cruise, then the press set hold values.
        assert_eq!(s.speed().target, HOLD_TARGET);
        assert!(!s.controller().scroll_pending());
    }

    #[test]
    fn resize_recentres_without_touching_stars() {
        let mut s = sim();
        let mut list = CommandList::new();
        s.frame(0.0, &mut list);
        let before = s.field().stars().to_vec();
        s.push_input(10.0, InputEvent::Resize { width: 1600.0, height: 1200.0 });
        s.process_input(&mut list);
        assert_eq!(s.viewport().origin(), Vec2::new(800.0, 600.0));
        assert_eq!(list.viewport, Some(Viewport::new(1600.0, 1200.0)));
        assert_eq!(s.field().stars(), &before[..]);
    }

    #[test]
    fn live_speed_eases_toward_cruise() {
        let mut s = sim();
        let mut list = CommandList::new();
        s.frame(0.0, &mut list);
        assert!((s.speed().live - 0.1).abs() < 1e-6);
        for i in 1..200 {
            s.frame(i as f64 * FRAME_MS, &mut list);
        }
        assert!(s.speed().live < IDLE_CRUISE);
        assert!((s.speed().live - IDLE_CRUISE).abs() < 1e-3);
    }
}
