//! Heading scramble wiring: a per-element frame loop that stops itself
//! once the text has fully resolved.

use rand::rngs::StdRng;
use rand::SeedableRng;
use web_sys as web;

use portfolio_core::constants::SCRAMBLE_DURATION_MS;
use portfolio_core::scramble::ScrambleEffect;

use crate::frame::{start_raf_loop, LoopHandle};

pub fn start(el: web::HtmlElement, final_text: String) {
    let fx = ScrambleEffect::new(final_text);
    let mut rng = StdRng::from_entropy();
    let handle = LoopHandle::new();
    let stop = handle.clone();
    let mut start_ms: Option<f64> = None;
    start_raf_loop(&handle, move |now_ms| {
        let t0 = *start_ms.get_or_insert(now_ms);
        let progress = ((now_ms - t0) / SCRAMBLE_DURATION_MS).min(1.0);
        el.set_text_content(Some(&fx.frame(progress, &mut rng)));
        if progress >= 1.0 {
            stop.stop();
        }
    });
}
