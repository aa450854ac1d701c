#![cfg(target_arch = "wasm32")]
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sphere_core::{DrawList, SceneState, MAX_POINTS};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod frame;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("sphere-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::wire_canvas_resize(&canvas);

    let gpu = frame::init_gpu(&canvas).await;
    if gpu.is_none() {
        log::warn!("running without a renderer; scene state still advances");
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene: SceneState::default(),
        rng: StdRng::from_entropy(),
        draws: DrawList::with_capacity(MAX_POINTS),
        gpu,
        canvas,
        frame_index: 0,
        last_instant: Instant::now(),
        stats_elapsed_sec: 0.0,
        stats_frames: 0,
    }));
    // Start RAF loop
    frame::start_loop(frame_ctx);
    Ok(())
}
