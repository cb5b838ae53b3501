//! Custom cursor wiring: the dot snaps to the pointer on every move
//! event, the ring eases after it on its own frame loop, and interactive
//! elements get a magnetic pull while hovered.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use web_sys as web;

use portfolio_core::cursor::{magnet_offset, RingFollower};

use crate::dom;
use crate::frame::{start_raf_loop, LoopHandle};

const MAGNET_SELECTOR: &str = "a, button, .project-card, .skill-card, .exp-item, .contact-link";

pub fn init(document: &web::Document) -> Option<LoopHandle> {
    let (Some(dot), Some(ring)) = (
        dom::element_by_id(document, "cursor-dot"),
        dom::element_by_id(document, "cursor-ring"),
    ) else {
        log::warn!("cursor elements missing; keeping the native cursor");
        return None;
    };

    let pointer = Rc::new(RefCell::new(Vec2::ZERO));
    {
        let pointer = pointer.clone();
        let dot = dot.clone();
        dom::add_listener(document, "mousemove", move |ev: web::MouseEvent| {
            let p = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
            *pointer.borrow_mut() = p;
            let _ = dot.style().set_property("transform", &translate(p));
        });
    }

    let handle = LoopHandle::new();
    {
        let pointer = pointer.clone();
        let ring = ring.clone();
        let mut follower = RingFollower::default();
        start_raf_loop(&handle, move |_now_ms| {
            let p = follower.step(*pointer.borrow());
            let _ = ring.style().set_property("transform", &translate(p));
        });
    }

    wire_magnet_targets(document, &dot, &ring);
    Some(handle)
}

fn translate(p: Vec2) -> String {
    format!("translate({}px, {}px)", p.x, p.y)
}

fn wire_magnet_targets(document: &web::Document, dot: &web::HtmlElement, ring: &web::HtmlElement) {
    dom::for_each_selected(document, MAGNET_SELECTOR, |el| {
        {
            let dot_classes = dot.class_list();
            let ring_classes = ring.class_list();
            dom::add_listener0(&el, "mouseenter", move || {
                let _ = dot_classes.add_1("cursor-hover");
                let _ = ring_classes.add_1("cursor-hover");
            });
        }
        {
            let dot_classes = dot.class_list();
            let ring_classes = ring.class_list();
            let el_leave = el.clone();
            dom::add_listener0(&el, "mouseleave", move || {
                let _ = dot_classes.remove_1("cursor-hover");
                let _ = ring_classes.remove_1("cursor-hover");
                let _ = el_leave.style().remove_property("transform");
            });
        }
        {
            let el_move = el.clone();
            dom::add_listener(&el, "mousemove", move |ev: web::MouseEvent| {
                let rect = el_move.get_bounding_client_rect();
                let center = Vec2::new(
                    (rect.left() + rect.width() / 2.0) as f32,
                    (rect.top() + rect.height() / 2.0) as f32,
                );
                let pointer = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
                let style = el_move.style();
                let _ = style.set_property("transform", &translate(magnet_offset(pointer, center)));
                let _ = style.set_property("transition", "transform 0.15s ease");
            });
        }
    });
}
