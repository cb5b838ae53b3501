//! Loading screen: one-shot splash timer, then a fade class, then removal
//! of the overlay element.

use web_sys as web;

use portfolio_core::constants::{LOADER_FADE_MS, LOADER_SPLASH_MS};

use crate::{dom, frame};

pub fn init(document: &web::Document) {
    let Some(loader) = dom::element_by_id(document, "loader") else {
        log::warn!("no #loader overlay; skipping loading screen");
        return;
    };
    let run = move || {
        frame::set_timeout(LOADER_SPLASH_MS, move || {
            let _ = loader.class_list().add_1("loader-done");
            frame::set_timeout(LOADER_FADE_MS, move || loader.remove());
        });
    };
    // The wasm module can come up after the load event already fired.
    if document.ready_state() == "complete" {
        run();
    } else if let Some(window) = web::window() {
        let mut run_once = Some(run);
        dom::add_listener0(&window, "load", move || {
            if let Some(f) = run_once.take() {
                f();
            }
        });
    }
}
