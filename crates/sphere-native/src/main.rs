use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

use sphere_core::gpu::{pick_alpha_mode, pick_surface_format, SphereRenderer};
use sphere_core::{Camera, DrawList, FrameInput, SceneState, MAX_POINTS};

// Pixels of scroll per wheel "line", matching a typical browser step
const WHEEL_LINE_PX: f32 = 40.0;
const STATS_LOG_INTERVAL_SEC: f32 = 5.0;

/// Accumulated wheel input standing in for a page scroll offset.
#[derive(Default)]
struct ScrollState {
    offset: f32,
}

impl ScrollState {
    fn apply(&mut self, delta: MouseScrollDelta) {
        // Wheel down scrolls the page down, i.e. grows the offset.
        let dy = match delta {
            MouseScrollDelta::LineDelta(_, y) => -y * WHEEL_LINE_PX,
            MouseScrollDelta::PixelDelta(p) => -p.y as f32,
        };
        self.offset = (self.offset + dy).max(0.0);
    }
}

struct GpuState<'w> {
    window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    spheres: SphereRenderer,
    width: u32,
    height: u32,

    scene: SceneState,
    rng: StdRng,
    draws: DrawList,
    scroll: ScrollState,
    frame_index: u64,
    last_frame: Instant,
    stats_elapsed_sec: f32,
    stats_frames: u32,
}

impl<'w> GpuState<'w> {
    async fn new(window: &'w winit::window::Window) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = pick_surface_format(&surface_caps.formats)
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: pick_alpha_mode(&surface_caps.alpha_modes),
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);
        log::info!(
            "[gpu] {} {}x{} format={:?} alpha={:?}",
            adapter.get_info().name,
            config.width,
            config.height,
            format,
            config.alpha_mode
        );

        let spheres = SphereRenderer::new(&device, format, MAX_POINTS);

        Ok(Self {
            window,
            surface,
            device,
            queue,
            width: config.width,
            height: config.height,
            config,
            spheres,
            scene: SceneState::default(),
            rng: StdRng::from_entropy(),
            draws: DrawList::with_capacity(MAX_POINTS),
            scroll: ScrollState::default(),
            frame_index: 0,
            last_frame: Instant::now(),
            stats_elapsed_sec: 0.0,
            stats_frames: 0,
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.width = new_size.width;
        self.height = new_size.height;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let now = Instant::now();
        let dt = now - self.last_frame;
        self.last_frame = now;

        self.frame_index += 1;
        let stats = self.scene.frame(
            FrameInput {
                frame_index: self.frame_index,
                scroll_offset: self.scroll.offset,
            },
            &mut self.rng,
            &mut self.draws,
        );

        self.stats_elapsed_sec += dt.as_secs_f32();
        self.stats_frames += 1;
        if self.stats_elapsed_sec >= STATS_LOG_INTERVAL_SEC {
            log::info!(
                "[frame] fps={:.1} points={} scroll={:.0} radius={:.0} scale={:.1}",
                self.stats_frames as f32 / self.stats_elapsed_sec,
                stats.total,
                self.scroll.offset,
                stats.shell_radius,
                stats.current_scale
            );
            self.stats_elapsed_sec = 0.0;
            self.stats_frames = 0;
        }

        let camera = Camera::sketch_default(self.width, self.height);
        self.spheres.prepare(
            &self.device,
            &self.queue,
            &self.draws,
            &camera,
            self.width,
            self.height,
        );

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        self.spheres.encode(&mut encoder, &view);
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Scroll Sphere (native)")
        .with_transparent(true)
        .build(&event_loop)?;

    let mut state = pollster::block_on(GpuState::new(&window))?;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => state.resize(size),
        Event::WindowEvent {
            event: WindowEvent::MouseWheel { delta, .. },
            ..
        } => state.scroll.apply(delta),
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => elwt.exit(),
        Event::AboutToWait => match state.render() {
            Ok(_) => state.window.request_redraw(),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                state.resize(state.window.inner_size())
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("surface out of memory; exiting");
                elwt.exit()
            }
            Err(e) => log::warn!("dropped frame: {:?}", e),
        },
        _ => {}
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_down_grows_offset_and_never_goes_negative() {
        let mut s = ScrollState::default();
        s.apply(MouseScrollDelta::LineDelta(0.0, -2.0));
        assert_eq!(s.offset, 80.0);
        s.apply(MouseScrollDelta::PixelDelta(winit::dpi::PhysicalPosition::new(
            0.0, 30.0,
        )));
        assert_eq!(s.offset, 50.0);
        s.apply(MouseScrollDelta::LineDelta(0.0, 10.0));
        assert_eq!(s.offset, 0.0);
    }
}
