//! Page effects outside the star field: custom cursor, hover feedback and
//! reveal-on-scroll. Each one is skipped when its elements are absent.

use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent,
};
use warp_engine::WarpConfig;

const HOVERED_CLASS: &str = "hovered";
const REVEALED_CLASS: &str = "active";

/// Make the cursor element follow the pointer and grow over hover triggers.
pub fn install_cursor(document: &Document, config: &WarpConfig) -> Result<(), JsValue> {
    let Some(cursor) = document.get_element_by_id(&config.cursor_id) else {
        log::warn!("#{} not found, custom cursor disabled", config.cursor_id);
        return Ok(());
    };
    let cursor: HtmlElement = cursor.dyn_into()?;

    {
        let cursor = cursor.clone();
        let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |e: MouseEvent| {
            let style = cursor.style();
            let _ = style.set_property("left", &format!("{}px", e.client_x()));
            let _ = style.set_property("top", &format!("{}px", e.client_y()));
        });
        document.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
        on_move.forget();
    }

    let triggers = document.query_selector_all(&config.hover_selector)?;
    for i in 0..triggers.length() {
        let Some(trigger) = triggers.get(i) else { continue };
        toggle_class_on(&trigger, "mouseenter", &cursor, HOVERED_CLASS, true)?;
        toggle_class_on(&trigger, "mouseleave", &cursor, HOVERED_CLASS, false)?;
    }
    log::debug!("cursor follows pointer, {} hover triggers", triggers.length());
    Ok(())
}

/// Add `class` to every element matching the reveal selector once it
/// becomes visible. Never removed again.
pub fn install_reveal(document: &Document, config: &WarpConfig) -> Result<(), JsValue> {
    let on_intersect = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let _ = entry.target().class_list().add_1(REVEALED_CLASS);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    let observer =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)?;
    on_intersect.forget();

    let targets = document.query_selector_all(&config.reveal_selector)?;
    for i in 0..targets.length() {
        if let Some(el) = targets.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            observer.observe(&el);
        }
    }
    log::debug!("observing {} reveal elements", targets.length());
    Ok(())
}

/// Register `event` on `target` so it adds or removes `class` on `element`.
pub fn toggle_class_on(
    target: &web_sys::EventTarget,
    event: &str,
    element: &Element,
    class: &'static str,
    on: bool,
) -> Result<(), JsValue> {
    let element = element.clone();
    let handler = Closure::<dyn FnMut()>::new(move || {
        let classes = element.class_list();
        let _ = if on { classes.add_1(class) } else { classes.remove_1(class) };
    });
    target.add_event_listener_with_callback(event, handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(())
}
