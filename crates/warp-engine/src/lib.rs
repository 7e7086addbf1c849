pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::config::WarpConfig;
pub use api::sim::WarpSim;
pub use components::color::StarColor;
pub use components::star::Star;
pub use crate::core::rng::Rng;
pub use crate::core::time::Debounce;
pub use crate::core::viewport::Viewport;
pub use input::controller::{SpeedController, SpeedState};
pub use input::queue::{InputEvent, InputQueue, TimedInput};
pub use renderer::instance::{InstanceBuffer, StarInstance};
pub use renderer::surface::{ClearStyle, CommandList, DrawCommand, Surface};
pub use systems::starfield::{RenderMode, StarField};
