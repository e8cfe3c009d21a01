use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use my_mechanic::cli::Cli;
use my_mechanic::core::{Clock, FpsMeter, GpuContext, InputEvent, WinitController};
use my_mechanic::overlay::{self, Overlay};
use my_mechanic::renderer::{FrameTarget, MeshRenderer};
use my_mechanic::views::{self, ViewController};
use my_mechanic::{SceneError, SceneManager};

const WINDOW_TITLE: &str = "MY MECHANIC";
const FPS_UPDATE_INTERVAL: f32 = 1.0;

/// Window-bound state, created on the first `resumed`
struct Surface {
    window: Arc<Window>,
    gpu: GpuContext,
    overlay: Overlay,
    input: WinitController,
}

struct App {
    cli: Cli,
    surface: Option<Surface>,
    scene: SceneManager<MeshRenderer>,
    views: ViewController,
    clock: Clock,
    fps: FpsMeter,
}

impl App {
    fn new(cli: Cli) -> Self {
        let scene = SceneManager::new().with_seed(cli.seed);
        Self {
            cli,
            surface: None,
            scene,
            views: ViewController::new(),
            clock: Clock::new(),
            fps: FpsMeter::new(FPS_UPDATE_INTERVAL),
        }
    }

    fn create_surface(&self, event_loop: &ActiveEventLoop) -> Result<Surface> {
        let window = event_loop
            .create_window(
                Window::default_attributes()
                    .with_title(WINDOW_TITLE)
                    .with_inner_size(winit::dpi::LogicalSize::new(self.cli.width, self.cli.height)),
            )
            .context("Failed to create window")?;
        let window = Arc::new(window);

        let gpu = pollster::block_on(GpuContext::new(window.clone()))?;
        let overlay = Overlay::new(&gpu, &window);
        let input = WinitController::new(gpu.dimensions());

        Ok(Surface {
            window,
            gpu,
            overlay,
            input,
        })
    }

    fn dispatch(&mut self, input: InputEvent) {
        match input {
            InputEvent::Resized { width, height } => {
                if let Some(surface) = &mut self.surface {
                    surface.gpu.resize(width, height);
                }
                self.scene.handle_resize(width, height);
            }
            InputEvent::PointerMoved { x, y } => self.scene.handle_pointer_move(x, y),
            InputEvent::Pressed(button) => self.views.handle_key(button),
        }
    }

    fn redraw(&mut self) {
        let (t, delta) = self.clock.tick();
        if let Some(fps) = self.fps.frame(delta) {
            log::debug!("{:.0} FPS", fps);
        }

        let Some(surface) = &mut self.surface else {
            return;
        };

        let frame = match surface.gpu.surface().get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                surface.gpu.reconfigure();
                return;
            }
            Err(e) => {
                log::warn!("Skipping frame: {}", e);
                return;
            }
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = surface
            .gpu
            .device()
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        let drawn = self.scene.step(
            t,
            FrameTarget {
                encoder: &mut encoder,
                view: &view,
            },
        );
        if !drawn {
            overlay::clear_pass(&mut encoder, &view);
        }

        let dims = surface.gpu.dimensions();
        let callbacks = surface.overlay.render(
            &surface.window,
            &mut encoder,
            &view,
            [dims.width, dims.height],
            &mut self.views,
        );

        surface
            .gpu
            .queue()
            .submit(callbacks.into_iter().chain(std::iter::once(encoder.finish())));
        surface.window.pre_present_notify();
        frame.present();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.surface.is_some() {
            return;
        }

        let surface = match self.create_surface(event_loop) {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("Failed to initialize window: {:#}", e);
                event_loop.exit();
                return;
            }
        };

        let no_scene = self.cli.no_scene;
        let gpu = &surface.gpu;
        self.scene.initialize(self.clock.elapsed(), gpu.dimensions(), |_| {
            if no_scene {
                Err(SceneError::Disabled)
            } else {
                MeshRenderer::new(gpu)
            }
        });

        self.views.show_welcome();
        self.surface = Some(surface);

        log::info!("MY MECHANIC loaded");
        log::info!("Shortcuts: H = home, E = emergency (dashboard), Esc = close modal");
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        let Some(surface) = &mut self.surface else {
            return;
        };

        // Let egui handle the event first
        let consumed = surface.overlay.handle_event(&surface.window, &event);

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::RedrawRequested => self.redraw(),
            _ if consumed && !WinitController::bypasses_overlay(&event) => {}
            _ => {
                if let Some(input) = surface.input.process_event(&event) {
                    self.dispatch(input);
                }
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(surface) = &self.surface {
            surface.window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if cli.print_catalog {
        println!("{}", views::catalog_json()?);
        return Ok(());
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli);
    event_loop.run_app(&mut app)?;

    log::info!("Shutting down");
    Ok(())
}
