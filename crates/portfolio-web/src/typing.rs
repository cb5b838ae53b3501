//! Hero typed-roles wiring: a self-rescheduling timeout chain paced by
//! the core state machine's per-tick delays.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys as web;

use portfolio_core::typing::TypingEffect;

use crate::{dom, frame};

const ROLES: [&str; 4] = [
    "Computer Science Student",
    "Data Science Researcher",
    "AI Developer",
    "Tech Consultant",
];

pub fn init(document: &web::Document) {
    let Some(el) = dom::element_by_id(document, "typing-text") else {
        log::warn!("no #typing-text target; skipping typing effect");
        return;
    };
    let fx = Rc::new(RefCell::new(TypingEffect::new(
        ROLES.iter().map(|s| s.to_string()).collect(),
    )));
    // First character goes up immediately; the chain paces itself from
    // the returned delays after that.
    let next_delay = {
        let mut fx_mut = fx.borrow_mut();
        let tick = fx_mut.tick();
        el.set_text_content(Some(tick.text));
        tick.delay_ms
    };
    schedule(el, fx, next_delay as i32);
}

fn schedule(el: web::HtmlElement, fx: Rc<RefCell<TypingEffect>>, delay_ms: i32) {
    frame::set_timeout(delay_ms, move || {
        let next_delay = {
            let mut fx_mut = fx.borrow_mut();
            let tick = fx_mut.tick();
            el.set_text_content(Some(tick.text));
            tick.delay_ms
        };
        schedule(el, fx, next_delay as i32);
    });
}
