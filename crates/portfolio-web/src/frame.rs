//! Frame and timer plumbing: a stoppable requestAnimationFrame loop plus
//! thin wrappers over setTimeout/setInterval.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub use portfolio_core::handle::LoopHandle;

/// Drive `frame` once per animation frame until the handle is stopped.
/// The callback receives the DOMHighResTimeStamp in milliseconds.
pub fn start_raf_loop(handle: &LoopHandle, mut frame: impl FnMut(f64) + 'static) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let handle_tick = handle.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
        if !handle_tick.is_running() {
            return;
        }
        frame(now_ms);
        if handle_tick.is_running() {
            if let Some(w) = web::window() {
                let _ = w.request_animation_frame(
                    tick_clone
                        .borrow()
                        .as_ref()
                        .unwrap()
                        .as_ref()
                        .unchecked_ref(),
                );
            }
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

/// One-shot timer.
pub fn set_timeout(delay_ms: i32, f: impl FnOnce() + 'static) {
    let cb = Closure::once_into_js(f);
    if let Some(w) = web::window() {
        let _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms);
    }
}

/// Repeating timer; runs for the lifetime of the page.
pub fn set_interval(interval_ms: i32, f: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        let _ = w.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            interval_ms,
        );
    }
    closure.forget();
}

/// Wall-clock milliseconds, for pause deadlines.
#[inline]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}
