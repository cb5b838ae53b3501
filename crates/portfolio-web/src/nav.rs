//! Header and mobile navigation behavior.

use wasm_bindgen::JsCast;
use web_sys as web;

use portfolio_core::constants::HEADER_SCROLLED_PX;

use crate::dom;

pub fn init(document: &web::Document) {
    if let (Some(header), Some(window)) = (dom::element_by_id(document, "site-header"), web::window())
    {
        let classes = header.class_list();
        let win = window.clone();
        dom::add_listener0(&window, "scroll", move || {
            let scrolled = win.scroll_y().unwrap_or(0.0) > HEADER_SCROLLED_PX;
            let _ = classes.toggle_with_force("scrolled", scrolled);
        });
    }

    let (Some(hamburger), Some(links)) = (
        dom::element_by_id(document, "hamburger"),
        dom::element_by_id(document, "nav-links"),
    ) else {
        log::warn!("hamburger/nav-links missing; skipping mobile menu");
        return;
    };

    {
        let hamburger_classes = hamburger.class_list();
        let links_classes = links.class_list();
        dom::add_listener0(&hamburger, "click", move || {
            let _ = hamburger_classes.toggle("open");
            let _ = links_classes.toggle("mobile-open");
        });
    }

    // Following any nav link closes the mobile menu.
    if let Ok(list) = links.query_selector_all("a") {
        for i in 0..list.length() {
            let Some(link) = list
                .item(i)
                .and_then(|node| node.dyn_into::<web::HtmlElement>().ok())
            else {
                continue;
            };
            let hamburger_classes = hamburger.class_list();
            let links_classes = links.class_list();
            dom::add_listener0(&link, "click", move || {
                let _ = hamburger_classes.remove_1("open");
                let _ = links_classes.remove_1("mobile-open");
            });
        }
    }
}
