//! Visibility notifier (an IntersectionObserver wrapper) and the effects
//! it triggers: section fade classes, heading scrambles, skill bar
//! widths, and stat counters.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use portfolio_core::constants::{
    COUNTER_DURATION_MS, HEADING_THRESHOLD, SECTION_THRESHOLD, SKILLS_THRESHOLD, STATS_THRESHOLD,
};
use portfolio_core::counter::StatCounter;

use crate::dom;
use crate::frame::{start_raf_loop, LoopHandle};
use crate::scramble;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

/// Invoke `cb(is_intersecting)` on every visibility change of `el`.
pub fn observe_toggle(el: &web::Element, threshold: f64, mut cb: impl FnMut(bool) + 'static) {
    let closure: ObserverCallback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() {
                    cb(entry.is_intersecting());
                }
            }
        },
    ));
    attach(el, threshold, closure);
}

/// Invoke `cb` once, the first time `el` becomes visible, then disconnect
/// the observer.
pub fn observe_once(el: &web::Element, threshold: f64, cb: impl FnOnce() + 'static) {
    let mut cb = Some(cb);
    let closure: ObserverCallback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            let visible = entries.iter().any(|entry| {
                entry
                    .dyn_into::<web::IntersectionObserverEntry>()
                    .map(|e| e.is_intersecting())
                    .unwrap_or(false)
            });
            if visible {
                if let Some(f) = cb.take() {
                    f();
                }
                observer.disconnect();
            }
        },
    ));
    attach(el, threshold, closure);
}

fn attach(el: &web::Element, threshold: f64, closure: ObserverCallback) {
    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    match web::IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(el);
            closure.forget();
        }
        Err(e) => log::error!("IntersectionObserver unavailable: {e:?}"),
    }
}

/// Fade every `section` in and out as it crosses the viewport.
pub fn init_sections(document: &web::Document) {
    dom::for_each_selected(document, "section", |el| {
        let classes = el.class_list();
        observe_toggle(&el, SECTION_THRESHOLD, move |visible| {
            let _ = classes.toggle_with_force("visible", visible);
        });
    });
}

/// Scramble each section heading the first time it scrolls into view.
pub fn init_headings(document: &web::Document) {
    dom::for_each_selected(document, ".section-heading", |el| {
        // Capture the final text before any scramble touches it.
        if el.get_attribute("data-original").is_none() {
            let text = el.text_content().unwrap_or_default();
            let _ = el.set_attribute("data-original", &text);
        }
        let target = el.clone();
        observe_once(&el, HEADING_THRESHOLD, move || {
            if let Some(original) = target.get_attribute("data-original") {
                scramble::start(target, original);
            }
        });
    });
}

/// Animate skill bars to their `data-w` widths while the skills section is
/// visible, collapsing back to zero when it leaves.
pub fn init_skill_bars(document: &web::Document) {
    let Some(section) = document.query_selector(".skills").ok().flatten() else {
        return;
    };
    let mut bars: Vec<(web::HtmlElement, String)> = Vec::new();
    dom::for_each_selected(document, ".skill-bar-fill", |bar| {
        if let Some(width) = bar.get_attribute("data-w") {
            bars.push((bar, width));
        }
    });
    if bars.is_empty() {
        return;
    }
    observe_toggle(&section, SKILLS_THRESHOLD, move |visible| {
        for (bar, width) in &bars {
            let value = if visible {
                format!("{width}%")
            } else {
                "0%".to_owned()
            };
            let _ = bar.style().set_property("width", &value);
        }
    });
}

/// Run every stat counter once when the about section becomes visible.
pub fn init_stat_counters(document: &web::Document) {
    let Some(section) = document.query_selector(".about").ok().flatten() else {
        return;
    };
    let document = document.clone();
    observe_once(&section, STATS_THRESHOLD, move || {
        dom::for_each_selected(&document, ".stat-val", |el| {
            let Some(raw_target) = el.get_attribute("data-target") else {
                return;
            };
            let suffix = el.get_attribute("data-suffix").unwrap_or_default();
            match StatCounter::parse(&raw_target, &suffix) {
                Ok(counter) => animate_counter(el, counter),
                Err(e) => log::warn!("skipping stat counter: {e}"),
            }
        });
    });
}

fn animate_counter(el: web::HtmlElement, counter: StatCounter) {
    let handle = LoopHandle::new();
    let stop = handle.clone();
    let mut start_ms: Option<f64> = None;
    start_raf_loop(&handle, move |now_ms| {
        let t0 = *start_ms.get_or_insert(now_ms);
        let progress = ((now_ms - t0) / COUNTER_DURATION_MS).min(1.0);
        el.set_text_content(Some(&counter.display(progress)));
        if progress >= 1.0 {
            stop.stop();
        }
    });
}
