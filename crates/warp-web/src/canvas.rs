//! Canvas 2D implementation of the warp surface.

use std::f64::consts::TAU;
use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use warp_engine::{ClearStyle, StarColor, Surface, Viewport};

/// Draws stars with immediate-mode path calls. The context transform keeps
/// the origin at the canvas centre.
pub struct Canvas2dSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Canvas2dSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or("canvas has no 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    fn reset_alpha(&self) {
        self.ctx.set_global_alpha(1.0);
    }
}

impl Surface for Canvas2dSurface {
    fn resize(&mut self, viewport: &Viewport) {
        // Setting the size also resets the context transform.
        self.canvas.set_width(viewport.width as u32);
        self.canvas.set_height(viewport.height as u32);
        let origin = viewport.origin();
        if let Err(e) = self
            .ctx
            .set_transform(1.0, 0.0, 0.0, 1.0, origin.x as f64, origin.y as f64)
        {
            log::error!("failed to re-centre canvas: {:?}", e);
        }
    }

    fn clear(&mut self, viewport: &Viewport, style: ClearStyle) {
        let top_left = viewport.top_left();
        self.ctx.set_fill_style_str(&style.css());
        self.ctx.fill_rect(
            top_left.x as f64,
            top_left.y as f64,
            viewport.width as f64,
            viewport.height as f64,
        );
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: StarColor, alpha: f32) {
        self.ctx.begin_path();
        self.ctx.set_stroke_style_str(color.css());
        self.ctx.set_line_width(width as f64);
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_global_alpha(alpha as f64);
        self.ctx.stroke();
        self.reset_alpha();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: StarColor, alpha: f32) {
        self.ctx.begin_path();
        // arc() only fails on a negative radius
        if self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
            .is_err()
        {
            return;
        }
        self.ctx.set_fill_style_str(color.css());
        self.ctx.set_global_alpha(alpha as f64);
        self.ctx.fill();
        self.reset_alpha();
    }
}
