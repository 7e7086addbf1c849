use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use crate::components::color::StarColor;
use crate::core::viewport::Viewport;
use super::surface::{ClearStyle, Surface};

/// Per-star draw record for hosts that render from shared memory instead of
/// letting the bridge drive Canvas 2D. 10 floats = 40 bytes stride.
///
/// Dots use `(x0, y0)` as the centre and `extent` as the radius; lines run
/// from `(x0, y0)` (tail) to `(x1, y1)` (head) with `extent` as line width.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct StarInstance {
    /// `StarInstance::DOT` or `StarInstance::LINE`.
    pub kind: f32,
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
    /// Radius for dots, stroke width for lines.
    pub extent: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub alpha: f32,
}

impl StarInstance {
    pub const FLOATS: usize = 10;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
    pub const DOT: f32 = 0.0;
    pub const LINE: f32 = 1.0;

    pub fn is_line(&self) -> bool {
        self.kind == Self::LINE
    }
}

/// Surface that packs draw calls into a flat instance buffer.
/// A clear starts a new frame: previous instances are discarded.
pub struct InstanceBuffer {
    pub instances: Vec<StarInstance>,
    /// Clear issued at the start of the current frame.
    pub clear: ClearStyle,
}

impl InstanceBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
            clear: ClearStyle::backdrop(1.0),
        }
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for SharedArrayBuffer reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }

    /// The instance data viewed as plain floats.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }

    fn push(&mut self, kind: f32, a: Vec2, b: Vec2, extent: f32, color: StarColor, alpha: f32) {
        let [r, g, bl] = color.rgb_f32();
        self.instances.push(StarInstance {
            kind,
            x0: a.x,
            y0: a.y,
            x1: b.x,
            y1: b.y,
            extent,
            r,
            g,
            b: bl,
            alpha,
        });
    }
}

impl Default for InstanceBuffer {
    fn default() -> Self {
        Self::with_capacity(1500)
    }
}

impl Surface for InstanceBuffer {
    fn clear(&mut self, _viewport: &Viewport, style: ClearStyle) {
        self.instances.clear();
        self.clear = style;
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: StarColor, alpha: f32) {
        self.push(StarInstance::LINE, from, to, width, color, alpha);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: StarColor, alpha: f32) {
        self.push(StarInstance::DOT, center, center, radius, color, alpha);
    }
}
