use crate::constants::{MAX_FRAME_DT_SEC, STATS_LOG_INTERVAL_SEC};
use crate::dom;
use crate::render;
use instant::Instant;
use rand::rngs::StdRng;
use sphere_core::{DrawList, FrameInput, SceneState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: SceneState,
    pub rng: StdRng,
    pub draws: DrawList,
    pub gpu: Option<render::GpuState>,
    pub canvas: web::HtmlCanvasElement,

    pub frame_index: u64,
    pub last_instant: Instant,
    pub stats_elapsed_sec: f32,
    pub stats_frames: u32,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT_SEC);
        self.last_instant = now;

        self.frame_index += 1;
        let stats = self.scene.frame(
            FrameInput {
                frame_index: self.frame_index,
                scroll_offset: dom::scroll_offset(),
            },
            &mut self.rng,
            &mut self.draws,
        );

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            match g.render(&self.draws) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
                Err(e) => log::error!("render error: {:?}", e),
            }
        }

        self.stats_elapsed_sec += dt_sec;
        self.stats_frames += 1;
        if self.stats_elapsed_sec >= STATS_LOG_INTERVAL_SEC {
            log::info!(
                "[frame] fps={:.1} points={} radius={:.0} scale={:.1}",
                self.stats_frames as f32 / self.stats_elapsed_sec,
                stats.total,
                stats.shell_radius,
                stats.current_scale
            );
            self.stats_elapsed_sec = 0.0;
            self.stats_frames = 0;
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState> {
    match render::GpuState::new(canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
