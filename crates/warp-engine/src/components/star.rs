//! A single warp-field star and its per-tick motion.

use glam::Vec2;
use crate::core::rng::Rng;
use crate::core::viewport::Viewport;
use super::color::StarColor;

/// Numerator of the depth step. Larger values move every star faster.
pub const DEPTH_GAIN: f32 = 2000.0;
/// Added to depth before dividing, keeps the step finite near the viewer.
pub const DEPTH_SOFTENING: f32 = 100.0;
/// A star at or below this depth has passed the viewer and must respawn.
pub const NEAR_PLANE: f32 = 1.0;
/// Dot radius numerator: `size * DOT_SCALE / z`.
pub const DOT_SCALE: f32 = 1000.0;

/// Depth decrement for one tick at the given total speed.
///
/// Inversely proportional to `z + DEPTH_SOFTENING`, so near stars move
/// faster than far ones.
pub fn depth_step(z: f32, speed: f32) -> f32 {
    speed * (DEPTH_GAIN / (z + DEPTH_SOFTENING))
}

/// A particle in view-centred space. Plain data; mutated in place by the field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    /// Lateral position, fixed between respawns.
    pub pos: Vec2,
    /// Current depth.
    pub z: f32,
    /// Depth at the previous tick (trail tail).
    pub pz: f32,
    pub color: StarColor,
    /// Size scalar in [0, 1).
    pub size: f32,
}

impl Star {
    /// Startup spawn with a random depth in [0, width) so the first frame
    /// is not a single wall of stars.
    pub fn scattered(viewport: &Viewport, rng: &mut Rng) -> Self {
        let mut star = Self::fresh(viewport, rng);
        star.z = rng.next_f32() * viewport.width;
        star.pz = star.z;
        star
    }

    /// A star placed at the far edge (`z == width`) with no trail.
    pub fn respawned(viewport: &Viewport, rng: &mut Rng) -> Self {
        Self::fresh(viewport, rng)
    }

    fn fresh(viewport: &Viewport, rng: &mut Rng) -> Self {
        let pos = Vec2::new(rng.symmetric(viewport.width), rng.symmetric(viewport.height));
        let color = StarColor::random(rng);
        let size = rng.next_f32();
        Self {
            pos,
            z: viewport.width,
            pz: viewport.width,
            color,
            size,
        }
    }

    /// One tick of motion toward the viewer. Does not respawn; see `is_spent`.
    pub fn advanced(self, speed: f32) -> Self {
        Self {
            pz: self.z,
            z: self.z - depth_step(self.z, speed),
            ..self
        }
    }

    /// True once the star has crossed the near plane.
    pub fn is_spent(&self) -> bool {
        self.z <= NEAR_PLANE
    }

    /// Advance in place, respawning at the far edge if the near plane was crossed.
    /// Returns true when a respawn happened.
    pub fn tick(&mut self, speed: f32, viewport: &Viewport, rng: &mut Rng) -> bool {
        let next = self.advanced(speed);
        if next.is_spent() {
            *self = Self::respawned(viewport, rng);
            true
        } else {
            *self = next;
            false
        }
    }

    /// Pinhole projection of this star at `depth`, relative to the centred origin.
    pub fn project(&self, depth: f32, viewport: &Viewport) -> Vec2 {
        Vec2::new(
            (self.pos.x / depth) * viewport.width,
            (self.pos.y / depth) * viewport.height,
        )
    }

    /// Screen position at the current depth.
    pub fn head(&self, viewport: &Viewport) -> Vec2 {
        self.project(self.z, viewport)
    }

    /// Screen position at the previous depth.
    pub fn tail(&self, viewport: &Viewport) -> Vec2 {
        self.project(self.pz, viewport)
    }

    /// Depth fade: transparent at the far edge, opaque near the viewer.
    ///
    /// Clamped to [0, 1]: after a viewport shrink a star can sit beyond the
    /// far edge and is drawn fully transparent until it moves closer. A raw
    /// Canvas 2D page would instead ignore the negative `globalAlpha` and
    /// draw such stars opaque.
    pub fn fade(&self, viewport: &Viewport) -> f32 {
        (1.0 - self.z / viewport.width).clamp(0.0, 1.0)
    }

    pub fn dot_radius(&self) -> f32 {
        self.size * (DOT_SCALE / self.z)
    }

    /// Depth travelled during the last tick. Zero right after a respawn.
    pub fn trail_length(&self) -> f32 {
        self.pz - self.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vp() -> Viewport {
        Viewport::new(800.0, 600.0)
    }

    fn star_at(x: f32, y: f32, z: f32) -> Star {
        Star { pos: Vec2::new(x, y), z, pz: z, color: StarColor::White, size: 0.5 }
    }

    #[test]
    fn depth_step_matches_formula() {
        // (2 + 0) * 2000 / (400 + 100) = 8
        assert!((depth_step(400.0, 2.0) - 8.0).abs() < 1e-5);
    }

    #[test]
    fn near_stars_move_faster() {
        assert!(depth_step(10.0, 2.0) > depth_step(700.0, 2.0));
    }

    #[test]
    fn advanced_records_previous_depth() {
        let s = star_at(10.0, 10.0, 400.0).advanced(2.0);
        assert_eq!(s.pz, 400.0);
        assert!((s.z - 392.0).abs() < 1e-4);
    }

    #[test]
    fn scattered_spawn_is_within_bounds() {
        let mut rng = Rng::new(42);
        let viewport = vp();
        for _ in 0..500 {
            let s = Star::scattered(&viewport, &mut rng);
            assert!((0.0..viewport.width).contains(&s.z));
            assert_eq!(s.pz, s.z);
            assert!(s.pos.x >= -viewport.width && s.pos.x < viewport.width);
            assert!(s.pos.y >= -viewport.height && s.pos.y < viewport.height);
            assert!((0.0..1.0).contains(&s.size));
        }
    }

    #[test]
    fn crossing_near_plane_respawns_at_far_edge() {
        let mut rng = Rng::new(1);
        let viewport = vp();
        let mut s = star_at(50.0, 50.0, 1.5);
        let respawned = s.tick(200.0, &viewport, &mut rng);
        assert!(respawned);
        assert_eq!(s.z, viewport.width);
        assert_eq!(s.pz, s.z);
        assert_eq!(s.trail_length(), 0.0);
    }

    #[test]
    fn respawn_redraws_position_colour_and_size() {
        let viewport = vp();
        let mut rng = Rng::new(5);
        let mut size_changes = 0;
        for _ in 0..100 {
            let before = Star {
                pos: Vec2::new(1234.0, -987.0),
                z: 1.5,
                pz: 3.0,
                color: StarColor::Silver,
                size: 0.5,
            };
            let expected = Star::respawned(&viewport, &mut rng.clone());
            let mut s = before;
            assert!(s.tick(200.0, &viewport, &mut rng));
            assert_eq!(s, expected, "respawn must draw from the shared rng stream");
            assert!(s.pos.x >= -viewport.width && s.pos.x < viewport.width);
            assert!(s.pos.y >= -viewport.height && s.pos.y < viewport.height);
            assert_ne!(s.pos, before.pos);
            assert!((0.0..1.0).contains(&s.size));
            if s.size != before.size {
                size_changes += 1;
            }
        }
        assert!(size_changes > 90);
    }

    #[test]
    fn landing_exactly_on_near_plane_respawns() {
        assert!(star_at(0.0, 0.0, 1.0).is_spent());
        assert!(!star_at(0.0, 0.0, 1.0001).is_spent());
    }

    #[test]
    fn tick_without_respawn_keeps_position() {
        let mut rng = Rng::new(1);
        let mut s = star_at(12.0, -34.0, 500.0);
        assert!(!s.tick(2.0, &vp(), &mut rng));
        assert_eq!(s.pos, Vec2::new(12.0, -34.0));
        assert!(s.z > NEAR_PLANE);
    }

    #[test]
    fn projection_scales_with_viewport() {
        let s = star_at(100.0, 50.0, 200.0);
        assert_eq!(s.head(&vp()), Vec2::new(400.0, 150.0));
    }

    #[test]
    fn fade_is_clamped() {
        let viewport = vp();
        assert_eq!(star_at(0.0, 0.0, 800.0).fade(&viewport), 0.0);
        assert_eq!(star_at(0.0, 0.0, 1600.0).fade(&viewport), 0.0);
        assert!((star_at(0.0, 0.0, 200.0).fade(&viewport) - 0.75).abs() < 1e-6);
    }

    #[test]
    fn dot_radius_grows_as_star_approaches() {
        let far = star_at(0.0, 0.0, 500.0);
        let near = star_at(0.0, 0.0, 50.0);
        assert!((far.dot_radius() - 1.0).abs() < 1e-6);
        assert!(near.dot_radius() > far.dot_radius());
    }
}
