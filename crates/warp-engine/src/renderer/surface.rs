//! Drawing seam between the simulation and whatever paints the pixels.
//!
//! The star field only ever issues three kinds of call: a (possibly partial)
//! clear, a trail segment, and a dot. Coordinates are relative to the
//! centred origin (see `Viewport::origin`).

use glam::Vec2;
use crate::components::color::StarColor;
use crate::core::viewport::Viewport;

/// Near-black backdrop behind the stars.
pub const BACKDROP_RGB: [u8; 3] = [3, 3, 5];

/// Fill used to clear the frame. Alpha below 1 leaves a smear of the
/// previous frame behind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClearStyle {
    pub rgb: [u8; 3],
    pub alpha: f32,
}

impl ClearStyle {
    pub fn backdrop(alpha: f32) -> Self {
        Self { rgb: BACKDROP_RGB, alpha }
    }

    /// CSS `rgba()` string for Canvas 2D.
    pub fn css(&self) -> String {
        let [r, g, b] = self.rgb;
        format!("rgba({}, {}, {}, {})", r, g, b, self.alpha)
    }
}

/// A 2D immediate-mode drawing target.
pub trait Surface {
    /// The viewport changed; re-establish the centred origin.
    fn resize(&mut self, _viewport: &Viewport) {}

    /// Fill the whole viewport with `style`.
    fn clear(&mut self, viewport: &Viewport, style: ClearStyle);

    /// Stroke a trail segment from `from` to `to`.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: StarColor, alpha: f32);

    /// Fill a dot of `radius` centred on `center`.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: StarColor, alpha: f32);
}

/// One recorded surface call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Clear { style: ClearStyle },
    Line { from: Vec2, to: Vec2, width: f32, color: StarColor, alpha: f32 },
    Dot { center: Vec2, radius: f32, color: StarColor, alpha: f32 },
}

/// A surface that records every call. Used to inspect frames in tests.
#[derive(Debug, Default)]
pub struct CommandList {
    pub commands: Vec<DrawCommand>,
    /// Last viewport seen through `resize`.
    pub viewport: Option<Viewport>,
}

impl CommandList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Line { .. })).count()
    }

    pub fn dot_count(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Dot { .. })).count()
    }

    /// Style of the most recent clear, if any.
    pub fn last_clear(&self) -> Option<ClearStyle> {
        self.commands.iter().rev().find_map(|c| match c {
            DrawCommand::Clear { style } => Some(*style),
            _ => None,
        })
    }
}

impl Surface for CommandList {
    fn resize(&mut self, viewport: &Viewport) {
        self.viewport = Some(*viewport);
    }

    fn clear(&mut self, _viewport: &Viewport, style: ClearStyle) {
        self.commands.push(DrawCommand::Clear { style });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: StarColor, alpha: f32) {
        self.commands.push(DrawCommand::Line { from, to, width, color, alpha });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: StarColor, alpha: f32) {
        self.commands.push(DrawCommand::Dot { center, radius, color, alpha });
    }
}
