//! Self-wiring mode: the bridge owns the canvas, the DOM listeners and the
//! `requestAnimationFrame` loop.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, Window};
use warp_engine::{InputEvent, Viewport, WarpConfig};

use crate::canvas::Canvas2dSurface;
use crate::page::toggle_class_on;
use crate::runner::WarpRunner;

type SharedRunner = Rc<RefCell<WarpRunner<Canvas2dSurface>>>;

const SHAKING_CLASS: &str = "shaking";

/// Host clock shared with `requestAnimationFrame` timestamps.
pub fn now_ms(window: &Window) -> f64 {
    window.performance().map(|p| p.now()).unwrap_or(0.0)
}

/// Current inner size of the window.
pub fn window_viewport(window: &Window) -> Result<Viewport, JsValue> {
    let width = window.inner_width()?.as_f64().ok_or("innerWidth is not a number")?;
    let height = window.inner_height()?.as_f64().ok_or("innerHeight is not a number")?;
    Ok(Viewport::new(width as f32, height as f32))
}

pub fn random_seed() -> u64 {
    let hi = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let lo = (js_sys::Math::random() * u32::MAX as f64) as u64;
    (hi << 32) | lo
}

/// Start the warp field on `canvas` and keep it running for the page's lifetime.
pub fn mount_warp(
    window: &Window,
    document: &Document,
    canvas: HtmlCanvasElement,
    config: &WarpConfig,
) -> Result<(), JsValue> {
    let viewport = window_viewport(window)?;
    let seed = config.seed.unwrap_or_else(random_seed);
    let surface = Canvas2dSurface::new(canvas)?;
    let runner: SharedRunner = Rc::new(RefCell::new(WarpRunner::new(
        config.star_count,
        viewport,
        seed,
        surface,
    )));

    install_resize(window, &runner)?;
    install_scroll(window, &runner)?;
    match document.get_element_by_id(&config.trigger_id) {
        Some(trigger) => install_trigger(window, document, &trigger, &runner)?,
        None => log::warn!("#{} not found, hold-to-warp disabled", config.trigger_id),
    }
    start_loop(window, runner)?;

    log::info!(
        "warp field mounted: {} stars, {}x{}",
        config.star_count, viewport.width, viewport.height
    );
    Ok(())
}

/// Listen for `event` on `target` and forward it to the runner as `input`.
fn forward(
    window: &Window,
    target: &web_sys::EventTarget,
    event: &str,
    runner: &SharedRunner,
    input: InputEvent,
) -> Result<(), JsValue> {
    let runner = runner.clone();
    let window = window.clone();
    let handler = Closure::<dyn FnMut()>::new(move || {
        runner.borrow_mut().push_input(now_ms(&window), input);
    });
    target.add_event_listener_with_callback(event, handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(())
}

fn install_resize(window: &Window, runner: &SharedRunner) -> Result<(), JsValue> {
    let runner = runner.clone();
    let win = window.clone();
    let on_resize = Closure::<dyn FnMut()>::new(move || match window_viewport(&win) {
        Ok(vp) => runner.borrow_mut().push_input(
            now_ms(&win),
            InputEvent::Resize { width: vp.width, height: vp.height },
        ),
        Err(e) => log::error!("resize: {:?}", e),
    });
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    on_resize.forget();
    Ok(())
}

fn install_scroll(window: &Window, runner: &SharedRunner) -> Result<(), JsValue> {
    forward(window, window, "scroll", runner, InputEvent::Scroll)
}

fn install_trigger(
    window: &Window,
    document: &Document,
    trigger: &web_sys::Element,
    runner: &SharedRunner,
) -> Result<(), JsValue> {
    forward(window, trigger, "mousedown", runner, InputEvent::TriggerDown)?;
    forward(window, trigger, "mouseup", runner, InputEvent::TriggerUp)?;
    forward(window, trigger, "mouseleave", runner, InputEvent::TriggerLeave)?;
    if let Some(body) = document.body() {
        toggle_class_on(trigger, "mousedown", &body, SHAKING_CLASS, true)?;
    }
    Ok(())
}

fn request_frame(window: &Window, callback: &Closure<dyn FnMut(f64)>) -> Result<i32, JsValue> {
    window.request_animation_frame(callback.as_ref().unchecked_ref())
}

/// The frame callback re-schedules itself forever; it is never cancelled.
fn start_loop(window: &Window, runner: SharedRunner) -> Result<(), JsValue> {
    let slot: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let next = slot.clone();
    let win = window.clone();

    *slot.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |now: f64| {
        runner.borrow_mut().tick(now);
        if let Some(callback) = next.borrow().as_ref() {
            if let Err(e) = request_frame(&win, callback) {
                log::error!("requestAnimationFrame failed, animation stopped: {:?}", e);
            }
        }
    }));

    let first = slot.borrow();
    let callback = first.as_ref().ok_or("animation callback missing")?;
    request_frame(window, callback)?;
    Ok(())
}
