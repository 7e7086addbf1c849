//! The star pool: per-tick motion, projection and drawing.

use crate::components::star::Star;
use crate::core::rng::Rng;
use crate::core::viewport::Viewport;
use crate::input::controller::SpeedState;
use crate::renderer::surface::{ClearStyle, Surface};

pub const DEFAULT_STAR_COUNT: usize = 1500;
/// Speeds strictly above this switch from dots to trails (and to a smeared clear).
pub const TRAIL_THRESHOLD: f32 = 10.0;
/// Trail opacity relative to the depth fade.
pub const TRAIL_ALPHA: f32 = 0.8;
/// Trail width is `size * speed / TRAIL_WIDTH_DIVISOR`.
pub const TRAIL_WIDTH_DIVISOR: f32 = 20.0;
/// Clear alpha while warping; leaves a smear of the previous frame.
pub const SMEAR_ALPHA: f32 = 0.3;

/// How a star is drawn for a given total speed. A hard switch, never blended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Dot,
    Trail,
}

impl RenderMode {
    pub fn for_speed(total_speed: f32) -> Self {
        if total_speed > TRAIL_THRESHOLD {
            RenderMode::Trail
        } else {
            RenderMode::Dot
        }
    }
}

/// Frame clear for the given live speed. Keyed on live speed alone, not base + live.
pub fn clear_style(live_speed: f32) -> ClearStyle {
    if live_speed > TRAIL_THRESHOLD {
        ClearStyle::backdrop(SMEAR_ALPHA)
    } else {
        ClearStyle::backdrop(1.0)
    }
}

/// Fixed-size pool of stars. Stars are created once and then only
/// advanced or respawned in place.
pub struct StarField {
    stars: Vec<Star>,
    viewport: Viewport,
    rng: Rng,
    respawns: u64,
}

impl StarField {
    pub fn new(count: usize, viewport: Viewport, seed: u64) -> Self {
        let mut rng = Rng::new(seed);
        let stars = (0..count).map(|_| Star::scattered(&viewport, &mut rng)).collect();
        log::debug!(
            "star field: {} stars in {}x{}",
            count, viewport.width, viewport.height
        );
        Self {
            stars,
            viewport,
            rng,
            respawns: 0,
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Total respawns since startup.
    pub fn respawns(&self) -> u64 {
        self.respawns
    }

    /// Adopt a new viewport. Existing stars keep their state until they
    /// next tick or respawn.
    pub fn resize(&mut self, viewport: Viewport) {
        log::info!("viewport resized to {}x{}", viewport.width, viewport.height);
        self.viewport = viewport;
    }

    /// Advance every star one tick at `total_speed`. Returns how many respawned.
    pub fn step(&mut self, total_speed: f32) -> usize {
        let viewport = self.viewport;
        let mut respawned = 0;
        for star in &mut self.stars {
            if star.tick(total_speed, &viewport, &mut self.rng) {
                respawned += 1;
            }
        }
        self.respawns += respawned as u64;
        respawned
    }

    /// Draw every star for the current speed. Does not clear.
    pub fn draw(&self, speed: &SpeedState, surface: &mut impl Surface) {
        let total = speed.total();
        let mode = RenderMode::for_speed(total);
        for star in &self.stars {
            self.draw_star(star, mode, total, surface);
        }
    }

    fn draw_star(&self, star: &Star, mode: RenderMode, total: f32, surface: &mut impl Surface) {
        let vp = &self.viewport;
        let fade = star.fade(vp);
        match mode {
            RenderMode::Trail => surface.stroke_line(
                star.tail(vp),
                star.head(vp),
                star.size * (total / TRAIL_WIDTH_DIVISOR),
                star.color,
                fade * TRAIL_ALPHA,
            ),
            RenderMode::Dot => {
                surface.fill_circle(star.head(vp), star.dot_radius(), star.color, fade)
            }
        }
    }
}
