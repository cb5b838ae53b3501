//! Project carousel wiring: interval-driven auto-advance, hover/touch
//! pause, manual buttons, and drag-to-scroll for both mouse and touch.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys as web;

use portfolio_core::carousel::{Carousel, Drag, PauseState, Step};
use portfolio_core::constants::{
    AUTO_ADVANCE_MS, BUTTON_RESUME_MS, MOUSE_DRAG_MULTIPLIER, TOUCH_DRAG_MULTIPLIER,
    TOUCH_RESUME_MS,
};

use crate::dom;
use crate::frame::{now_ms, set_interval};

pub fn init(document: &web::Document) {
    let Some(track) = dom::element_by_id(document, "h-track") else {
        log::warn!("no #h-track; skipping carousel");
        return;
    };
    let model = Carousel::default();
    let pause = Rc::new(RefCell::new(PauseState::default()));

    {
        let track = track.clone();
        let pause = pause.clone();
        set_interval(AUTO_ADVANCE_MS, move || {
            if pause.borrow().is_paused(now_ms()) {
                return;
            }
            let step = model.advance(track.scroll_left() as f64, max_scroll(&track));
            apply_step(&track, step);
        });
    }

    // Pause while hovered or touched; touch-end keeps a grace period so
    // the timer does not fire off the back of the same gesture.
    {
        let pause = pause.clone();
        dom::add_listener0(&track, "mouseenter", move || pause.borrow_mut().hold());
    }
    {
        let pause = pause.clone();
        dom::add_listener0(&track, "mouseleave", move || pause.borrow_mut().release());
    }
    {
        let pause = pause.clone();
        dom::add_listener0(&track, "touchstart", move || pause.borrow_mut().hold());
    }
    {
        let pause = pause.clone();
        dom::add_listener0(&track, "touchend", move || {
            pause.borrow_mut().release_after(now_ms(), TOUCH_RESUME_MS);
        });
    }

    if let Some(next) = dom::element_by_id(document, "h-next") {
        let track = track.clone();
        let pause = pause.clone();
        dom::add_listener0(&next, "click", move || {
            pause.borrow_mut().release_after(now_ms(), BUTTON_RESUME_MS);
            let step = model.advance(track.scroll_left() as f64, max_scroll(&track));
            apply_step(&track, step);
        });
    }
    if let Some(prev) = dom::element_by_id(document, "h-prev") {
        let track = track.clone();
        let pause = pause.clone();
        dom::add_listener0(&prev, "click", move || {
            pause.borrow_mut().release_after(now_ms(), BUTTON_RESUME_MS);
            apply_step(&track, model.retreat());
        });
    }

    wire_mouse_drag(&track, &pause);
    wire_touch_drag(&track);
}

fn max_scroll(track: &web::Element) -> f64 {
    (track.scroll_width() - track.client_width()) as f64
}

fn apply_step(track: &web::Element, step: Step) {
    let options = web::ScrollToOptions::new();
    options.set_behavior(web::ScrollBehavior::Smooth);
    match step {
        Step::JumpToStart => {
            options.set_left(0.0);
            track.scroll_to_with_scroll_to_options(&options);
        }
        Step::ScrollBy(delta) => {
            options.set_left(delta);
            track.scroll_by_with_scroll_to_options(&options);
        }
    }
}

fn wire_mouse_drag(track: &web::HtmlElement, pause: &Rc<RefCell<PauseState>>) {
    let drag: Rc<RefCell<Option<Drag>>> = Rc::new(RefCell::new(None));

    {
        let track_el = track.clone();
        let drag = drag.clone();
        let pause = pause.clone();
        dom::add_listener(track, "mousedown", move |ev: web::MouseEvent| {
            let x = (ev.page_x() - track_el.offset_left()) as f64;
            *drag.borrow_mut() = Some(Drag::begin(x, track_el.scroll_left() as f64));
            pause.borrow_mut().hold();
            let _ = track_el.style().set_property("cursor", "grabbing");
        });
    }
    {
        let track_el = track.clone();
        let drag = drag.clone();
        dom::add_listener(track, "mousemove", move |ev: web::MouseEvent| {
            let Some(d) = *drag.borrow() else {
                return;
            };
            ev.prevent_default();
            let x = (ev.page_x() - track_el.offset_left()) as f64;
            track_el.set_scroll_left(d.scroll_for(x, MOUSE_DRAG_MULTIPLIER) as i32);
        });
    }
    {
        let track_el = track.clone();
        let drag = drag.clone();
        let pause = pause.clone();
        dom::add_listener0(track, "mouseup", move || {
            *drag.borrow_mut() = None;
            let _ = track_el.style().set_property("cursor", "grab");
            pause.borrow_mut().release_after(now_ms(), BUTTON_RESUME_MS);
        });
    }
    {
        let track_el = track.clone();
        let drag = drag.clone();
        dom::add_listener0(track, "mouseleave", move || {
            *drag.borrow_mut() = None;
            let _ = track_el.style().set_property("cursor", "grab");
        });
    }
}

fn wire_touch_drag(track: &web::HtmlElement) {
    let drag: Rc<RefCell<Option<Drag>>> = Rc::new(RefCell::new(None));

    {
        let track_el = track.clone();
        let drag = drag.clone();
        dom::add_listener(track, "touchstart", move |ev: web::TouchEvent| {
            if let Some(touch) = ev.touches().get(0) {
                *drag.borrow_mut() = Some(Drag::begin(
                    touch.page_x() as f64,
                    track_el.scroll_left() as f64,
                ));
            }
        });
    }
    {
        let track_el = track.clone();
        let drag = drag.clone();
        dom::add_listener(track, "touchmove", move |ev: web::TouchEvent| {
            let Some(d) = *drag.borrow() else {
                return;
            };
            if let Some(touch) = ev.touches().get(0) {
                track_el
                    .set_scroll_left(d.scroll_for(touch.page_x() as f64, TOUCH_DRAG_MULTIPLIER) as i32);
            }
        });
    }
}
