//! Browser glue

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlCanvasElement, HtmlElement, Window};

use super::backing_size;
use crate::sim::{MessageBanner, Viewport};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

pub fn document(window: &Window) -> Result<Document, JsValue> {
    window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

pub fn canvas_by_id(document: &Document, id: &str) -> Result<HtmlCanvasElement, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing #{}", id)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str(&format!("#{} is not a canvas", id)))
}

/// Window inner size in CSS pixels
pub fn viewport(window: &Window) -> Viewport {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Viewport::new(width as f32, height as f32)
}

/// Size the canvas to the full window. Returns (backing size, CSS viewport).
pub fn fit_canvas_to_window(window: &Window, canvas: &HtmlCanvasElement) -> ((u32, u32), Viewport) {
    let vp = viewport(window);
    let size = backing_size(vp, window.device_pixel_ratio());
    canvas.set_width(size.0);
    canvas.set_height(size.1);
    let style = canvas.style();
    let _ = style.set_property("width", &format!("{}px", vp.width));
    let _ = style.set_property("height", &format!("{}px", vp.height));
    (size, vp)
}

/// Canvas top-left corner in client coordinates
pub fn surface_origin(canvas: &HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(rect.left() as f32, rect.top() as f32)
}

/// Milliseconds on the same clock as animation frame timestamps
pub fn now_ms(window: &Window) -> f64 {
    window
        .performance()
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Register a listener that lives for the rest of the page
pub fn listen<E, F>(target: &web_sys::EventTarget, event: &str, handler: F)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::<dyn FnMut(E)>::new(handler);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Run `handler` on the first of `events` on `target`, then remove the listener
/// for all of them
pub fn listen_once_any<F>(target: &web_sys::EventTarget, events: &'static [&'static str], handler: F)
where
    F: FnOnce() + 'static,
{
    let handler = RefCell::new(Some(handler));
    let function: Rc<RefCell<Option<js_sys::Function>>> = Rc::new(RefCell::new(None));
    let function_inner = function.clone();
    let target_inner = target.clone();

    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
        if let Some(f) = function_inner.borrow_mut().take() {
            for event in events {
                let _ = target_inner.remove_event_listener_with_callback(event, &f);
            }
        }
        if let Some(h) = handler.borrow_mut().take() {
            h();
        }
    });

    let f: js_sys::Function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
    for event in events {
        let _ = target.add_event_listener_with_callback(event, &f);
    }
    *function.borrow_mut() = Some(f);
    closure.forget();
}

/// Self-rescheduling animation frame loop; `tick` gets the frame timestamp (ms)
pub fn start_animation_loop<F>(window: &Window, tick: F)
where
    F: FnMut(f64) + 'static,
{
    fn schedule(window: &Window, tick: Rc<RefCell<dyn FnMut(f64)>>) {
        let next_window = window.clone();
        let closure = Closure::once(move |time: f64| {
            (&mut *tick.borrow_mut())(time);
            schedule(&next_window, tick);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }
    schedule(window, Rc::new(RefCell::new(tick)));
}

/// Fixed-interval timer that never stops
pub fn every(window: &Window, interval_ms: i32, mut tick: impl FnMut() + 'static) {
    let closure = Closure::<dyn FnMut()>::new(move || tick());
    let _ = window.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        interval_ms,
    );
    closure.forget();
}

/// DOM element mirroring the banner state
pub struct MessageOverlay {
    element: Option<HtmlElement>,
    synced_revision: Option<u64>,
}

impl MessageOverlay {
    pub fn from_id(document: &Document, id: &str) -> Self {
        let element = document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        if element.is_none() {
            log::warn!("No #{} element; messages will not be shown", id);
        }
        Self {
            element,
            synced_revision: None,
        }
    }

    /// Push banner text and visibility to the DOM when they changed
    pub fn sync(&mut self, banner: &MessageBanner) {
        if self.synced_revision == Some(banner.revision()) {
            return;
        }
        self.synced_revision = Some(banner.revision());
        let Some(el) = &self.element else { return };

        el.set_text_content(banner.text());
        let display = if banner.is_visible() { "block" } else { "none" };
        let _ = el.style().set_property("display", display);
    }
}
