//! Animated hero grid: clear and redraw the full canvas every frame from
//! the dot math in `portfolio_core::grid`. No dirty-region tracking; the
//! whole grid is cheap enough to repaint.

use std::cell::RefCell;
use std::f64::consts::PI;
use std::rc::Rc;

use anyhow::anyhow;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

use portfolio_core::constants::{GRID_LINE_ALPHA, GRID_LINE_WIDTH};
use portfolio_core::grid::{cell_counts, pointer_sentinel, wave_phase, GridParams};

use crate::dom;
use crate::frame::{start_raf_loop, LoopHandle};

pub fn init(document: &web::Document) -> anyhow::Result<LoopHandle> {
    let canvas = document
        .get_element_by_id("hero-canvas")
        .ok_or_else(|| anyhow!("missing #hero-canvas"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| anyhow!("#hero-canvas is not a canvas"))?;
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow!("2d context: {e:?}"))?
        .ok_or_else(|| anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|_| anyhow!("unexpected 2d context type"))?;

    dom::sync_canvas_to_viewport(&canvas);
    {
        // Resize re-syncs dimensions; the loop itself is never interrupted.
        let canvas_resize = canvas.clone();
        if let Some(window) = web::window() {
            dom::add_listener0(&window, "resize", move || {
                dom::sync_canvas_to_viewport(&canvas_resize)
            });
        }
    }

    // The grid owns its pointer state so dots stay uninfluenced until the
    // first movement (sentinel is far off-screen).
    let pointer = Rc::new(RefCell::new(pointer_sentinel()));
    {
        let pointer = pointer.clone();
        dom::add_listener(document, "mousemove", move |ev: web::MouseEvent| {
            *pointer.borrow_mut() = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        });
    }

    let params = GridParams::default();
    let handle = LoopHandle::new();
    start_raf_loop(&handle, move |now_ms| {
        draw(&ctx, &canvas, &params, *pointer.borrow(), now_ms);
    });
    Ok(handle)
}

fn draw(
    ctx: &web::CanvasRenderingContext2d,
    canvas: &web::HtmlCanvasElement,
    params: &GridParams,
    pointer: Vec2,
    now_ms: f64,
) {
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    ctx.clear_rect(0.0, 0.0, width, height);

    let (cols, rows) = cell_counts(width as f32, height as f32, params.spacing);
    let gap = params.spacing as f64;

    ctx.set_stroke_style_str(&rgba(GRID_LINE_ALPHA));
    ctx.set_line_width(GRID_LINE_WIDTH);
    for col in 0..cols {
        ctx.begin_path();
        ctx.move_to(col as f64 * gap, 0.0);
        ctx.line_to(col as f64 * gap, height);
        ctx.stroke();
    }
    for row in 0..rows {
        ctx.begin_path();
        ctx.move_to(0.0, row as f64 * gap);
        ctx.line_to(width, row as f64 * gap);
        ctx.stroke();
    }

    let phase = wave_phase(now_ms);
    for col in 0..cols {
        for row in 0..rows {
            let dot = params.dot(col, row, pointer, phase);
            ctx.begin_path();
            let _ = ctx.arc(
                dot.pos.x as f64,
                dot.pos.y as f64,
                dot.radius as f64,
                0.0,
                PI * 2.0,
            );
            ctx.set_fill_style_str(&rgba(dot.alpha));
            ctx.fill();
        }
    }
}

fn rgba(alpha: f32) -> String {
    format!("rgba(200, 240, 255, {alpha})")
}
