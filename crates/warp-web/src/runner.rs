use warp_engine::{
    InputEvent, InstanceBuffer, SpeedState, Surface, Viewport, WarpSim,
};

/// Generic runner that wires a `WarpSim` to a drawing surface.
///
/// The self-mounting page uses a `Canvas2dSurface`; hosts that run their own
/// loop use an `InstanceBuffer` and read the packed stars through pointers,
/// because wasm-bindgen cannot export generic structs directly.
pub struct WarpRunner<S: Surface> {
    sim: WarpSim,
    surface: S,
}

impl<S: Surface> WarpRunner<S> {
    pub fn new(star_count: usize, viewport: Viewport, seed: u64, mut surface: S) -> Self {
        surface.resize(&viewport);
        Self {
            sim: WarpSim::new(star_count, viewport, seed),
            surface,
        }
    }

    /// Queue an input event stamped with the host clock.
    pub fn push_input(&mut self, at_ms: f64, event: InputEvent) {
        self.sim.push_input(at_ms, event);
    }

    /// Run one animation frame.
    pub fn tick(&mut self, now_ms: f64) {
        self.sim.frame(now_ms, &mut self.surface);
    }

    pub fn speed(&self) -> &SpeedState {
        self.sim.speed()
    }

    pub fn viewport(&self) -> &Viewport {
        self.sim.viewport()
    }
}

impl WarpRunner<InstanceBuffer> {
    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.surface.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.surface.instance_count()
    }

    /// Alpha of this frame's backdrop fill (1.0 = full clear).
    pub fn clear_alpha(&self) -> f32 {
        self.surface.clear.alpha
    }
}
