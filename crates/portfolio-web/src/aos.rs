//! Initialization of the third-party AOS scroll-reveal library with the
//! page's animation configuration, skipped when its script is absent.

use js_sys::{Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use portfolio_core::constants::{REVEAL_DURATION_MS, REVEAL_OFFSET_PX};

pub fn init() {
    let Some(window) = web::window() else {
        return;
    };
    let aos = match Reflect::get(&window, &JsValue::from_str("AOS")) {
        Ok(v) if !v.is_undefined() && !v.is_null() => v,
        _ => {
            log::warn!("AOS not loaded; scroll-reveal attributes stay inert");
            return;
        }
    };
    let Some(init) = Reflect::get(&aos, &JsValue::from_str("init"))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
    else {
        log::warn!("AOS.init missing");
        return;
    };

    let config = Object::new();
    let set = |key: &str, value: &JsValue| {
        let _ = Reflect::set(&config, &JsValue::from_str(key), value);
    };
    set("duration", &JsValue::from_f64(REVEAL_DURATION_MS));
    set("easing", &JsValue::from_str("ease-out"));
    set("once", &JsValue::FALSE);
    set("mirror", &JsValue::TRUE);
    set("offset", &JsValue::from_f64(REVEAL_OFFSET_PX));

    if let Err(e) = init.call1(&aos, &config) {
        log::error!("AOS.init failed: {e:?}");
    }
}
