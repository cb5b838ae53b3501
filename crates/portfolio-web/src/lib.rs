#![cfg(target_arch = "wasm32")]
//! DOM wiring for the portfolio page effects.
//!
//! Each component is wired independently at startup behind a presence
//! check on its root element; a missing element degrades to a skipped
//! component, never a panic. The effects share nothing with each other
//! beyond the browser's single frame-scheduling primitive.

mod aos;
mod carousel;
mod contact;
mod cursor;
mod dom;
mod frame;
mod grid;
mod loader;
mod nav;
mod reveal;
mod scramble;
mod typing;

use wasm_bindgen::prelude::*;

use crate::frame::LoopHandle;

/// Stop tokens for the long-running frame loops. Embedding hosts keep
/// this and call [`Effects::stop`] to tear the animations down; in the
/// plain-page path the loops live until unload.
pub struct Effects {
    pub grid: Option<LoopHandle>,
    pub cursor: Option<LoopHandle>,
}

impl Effects {
    /// Stop every running frame loop.
    pub fn stop(&self) {
        if let Some(h) = &self.grid {
            h.stop();
        }
        if let Some(h) = &self.cursor {
            h.stop();
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    match init() {
        // Auto-start runs for the page lifetime; the handles are for
        // hosts that call `init` themselves.
        Ok(effects) => std::mem::forget(effects),
        Err(e) => log::error!("init error: {e:?}"),
    }
    Ok(())
}

/// Wire every page effect and return the loop handles.
pub fn init() -> anyhow::Result<Effects> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    loader::init(&document);
    nav::init(&document);
    aos::init();
    let cursor = cursor::init(&document);
    typing::init(&document);

    let grid = match grid::init(&document) {
        Ok(handle) => {
            log::info!("hero grid running");
            Some(handle)
        }
        Err(e) => {
            log::warn!("hero grid disabled: {e}");
            None
        }
    };

    reveal::init_sections(&document);
    reveal::init_headings(&document);
    reveal::init_skill_bars(&document);
    reveal::init_stat_counters(&document);

    carousel::init(&document);
    contact::init_smooth_scroll(&document);
    contact::init_contact_form(&document);

    Ok(Effects { grid, cursor })
}
