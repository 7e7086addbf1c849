use glam::Vec2;

/// Drawable area in CSS pixels. Star space is centred on `origin()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Canvas-space position of the star-space origin (the screen centre).
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Top-left corner of the viewport relative to the centred origin.
    pub fn top_left(&self) -> Vec2 {
        -self.origin()
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}
