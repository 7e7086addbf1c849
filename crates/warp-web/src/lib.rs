pub mod canvas;
pub mod mount;
pub mod page;
pub mod runner;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use warp_engine::{InputEvent, InstanceBuffer, Viewport, WarpConfig};

pub use canvas::Canvas2dSurface;
pub use runner::WarpRunner;

thread_local! {
    static RUNNER: RefCell<Option<WarpRunner<InstanceBuffer>>> = RefCell::new(None);
}

/// Run `f` against the host-driven runner. Before `warp_init` every export
/// is a no-op returning `R::default()`.
fn with_runner<R: Default>(f: impl FnOnce(&mut WarpRunner<InstanceBuffer>) -> R) -> R {
    RUNNER.with(|cell| match cell.borrow_mut().as_mut() {
        Some(runner) => f(runner),
        None => {
            log::warn!("warp field not initialized. Call warp_init() first.");
            R::default()
        }
    })
}

fn install_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Parse an optional JSON config, falling back to defaults on error.
fn load_config(json: Option<String>) -> WarpConfig {
    match json.as_deref().map(WarpConfig::from_json) {
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            log::warn!("invalid warp config, using defaults: {}", e);
            WarpConfig::default()
        }
        None => WarpConfig::default(),
    }
}

/// Self-wiring entry point: find the canvas and page elements, install every
/// listener and start the animation loop. Missing elements only disable
/// their own feature.
#[wasm_bindgen]
pub fn warp_mount(config_json: Option<String>) -> Result<(), JsValue> {
    install_logging();
    let config = load_config(config_json);

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    match document.get_element_by_id(&config.canvas_id) {
        Some(el) => match el.dyn_into::<web_sys::HtmlCanvasElement>() {
            Ok(canvas) => {
                if let Err(e) = mount::mount_warp(&window, &document, canvas, &config) {
                    log::error!("warp field failed to start: {:?}", e);
                }
            }
            Err(_) => log::warn!("#{} is not a canvas, warp field disabled", config.canvas_id),
        },
        None => log::warn!("#{} not found, warp field disabled", config.canvas_id),
    }

    if let Err(e) = page::install_cursor(&document, &config) {
        log::error!("cursor effects failed: {:?}", e);
    }
    if let Err(e) = page::install_reveal(&document, &config) {
        log::error!("reveal effects failed: {:?}", e);
    }
    Ok(())
}

// ---- Host-driven mode: JS owns the loop and renders from the instance buffer ----

#[wasm_bindgen]
pub fn warp_init(width: f32, height: f32, config_json: Option<String>) {
    install_logging();
    let config = load_config(config_json);
    let seed = config.seed.unwrap_or_else(mount::random_seed);
    let runner = WarpRunner::new(
        config.star_count,
        Viewport::new(width, height),
        seed,
        InstanceBuffer::with_capacity(config.star_count),
    );

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("warp field: initialized {} stars at {}x{}", config.star_count, width, height);
}

#[wasm_bindgen]
pub fn warp_tick(now_ms: f64) {
    with_runner(|r| r.tick(now_ms));
}

#[wasm_bindgen]
pub fn warp_scroll(now_ms: f64) {
    with_runner(|r| r.push_input(now_ms, InputEvent::Scroll));
}

#[wasm_bindgen]
pub fn warp_trigger_down(now_ms: f64) {
    with_runner(|r| r.push_input(now_ms, InputEvent::TriggerDown));
}

#[wasm_bindgen]
pub fn warp_trigger_up(now_ms: f64) {
    with_runner(|r| r.push_input(now_ms, InputEvent::TriggerUp));
}

#[wasm_bindgen]
pub fn warp_trigger_leave(now_ms: f64) {
    with_runner(|r| r.push_input(now_ms, InputEvent::TriggerLeave));
}

#[wasm_bindgen]
pub fn warp_resize(width: f32, height: f32, now_ms: f64) {
    with_runner(|r| r.push_input(now_ms, InputEvent::Resize { width, height }));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_instances_ptr() -> *const f32 {
    with_runner(|r| Some(r.instances_ptr())).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_instance_count() -> u32 {
    with_runner(|r| r.instance_count())
}

#[wasm_bindgen]
pub fn get_instance_floats() -> u32 {
    warp_engine::StarInstance::FLOATS as u32
}

#[wasm_bindgen]
pub fn get_clear_alpha() -> f32 {
    with_runner(|r| r.clear_alpha())
}

#[wasm_bindgen]
pub fn get_live_speed() -> f32 {
    with_runner(|r| r.speed().live)
}

#[wasm_bindgen]
pub fn get_target_speed() -> f32 {
    with_runner(|r| r.speed().target)
}

#[wasm_bindgen]
pub fn get_base_speed() -> f32 {
    with_runner(|r| r.speed().base)
}

#[wasm_bindgen]
pub fn get_viewport_width() -> f32 {
    with_runner(|r| r.viewport().width)
}

#[wasm_bindgen]
pub fn get_viewport_height() -> f32 {
    with_runner(|r| r.viewport().height)
}
