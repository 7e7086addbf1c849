/// Input event types the warp field understands.
/// Carries no DOM details; the bridge maps browser events onto these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The page scrolled (one tick of a scroll gesture).
    Scroll,
    /// The hold-to-warp trigger was pressed.
    TriggerDown,
    /// The trigger was released.
    TriggerUp,
    /// The pointer left the trigger (treated like a release).
    TriggerLeave,
    /// The viewport changed size (CSS pixels).
    Resize { width: f32, height: f32 },
}

/// An input event stamped with the host clock (milliseconds).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimedInput {
    pub at_ms: f64,
    pub event: InputEvent,
}

/// A queue of input events.
/// JS writes events into the queue; Rust drains them at the start of each frame.
pub struct InputQueue {
    events: Vec<TimedInput>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    pub fn push(&mut self, at_ms: f64, event: InputEvent) {
        self.events.push(TimedInput { at_ms, event });
    }

    /// Drain all pending events in arrival order. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<TimedInput> {
        std::mem::take(&mut self.events)
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
