//! Pointnoise - real-time point-cloud terrain
//!
//! A width x width grid of points is lifted by layered simplex noise and
//! colored red (low) to green (high). Keyboard keys tune the noise, the
//! mouse orbits the camera.

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalPosition,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use pointnoise::camera::OrbitCamera;
use pointnoise::cli::Args;
use pointnoise::controls::{ControlAction, ParamControls};
use pointnoise::error::PointnoiseError;
use pointnoise::export;
use pointnoise::field::{FieldSystem, NoiseFieldGenerator, RegenerationPolicy};
use pointnoise::params::{NoiseParameters, OrbitCameraConfig, RenderConfig};
use pointnoise::rendering::{RenderSystem, Uniforms};
use pointnoise::stats::FrameStats;

/// Wheel pixels treated as one scroll line
const PIXELS_PER_LINE: f32 = 50.0;

const HELP: &str = "Tab/1-6 select parameter, arrows adjust (Shift = x10), \
R reset, Space toggle regeneration policy, drag to orbit, wheel to zoom, Esc quit";

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,
    render_config: RenderConfig,

    // Terrain and its controls
    params: NoiseParameters,
    field: FieldSystem,
    controls: ParamControls,

    // Input state
    camera: OrbitCamera,
    dragging: bool,
    cursor: Option<PhysicalPosition<f64>>,
    shift: bool,

    stats: FrameStats,
    /// Setup failure to report once the event loop returns
    error: Option<PointnoiseError>,
}

impl App {
    fn new(params: NoiseParameters, policy: RegenerationPolicy) -> Self {
        Self {
            window: None,
            render_system: None,
            render_config: RenderConfig::default(),
            params,
            field: FieldSystem::new(policy),
            controls: ParamControls::new(),
            camera: OrbitCamera::new(OrbitCameraConfig::default()),
            dragging: false,
            cursor: None,
            shift: false,
            stats: FrameStats::new(Duration::from_secs(1)),
            error: None,
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), PointnoiseError> {
        let window_attributes = Window::default_attributes()
            .with_title(self.title())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));

        let window = Arc::new(event_loop.create_window(window_attributes)?);
        let size = window.inner_size();
        self.render_config.set_window_size(size.width, size.height);

        let render_system = pollster::block_on(RenderSystem::new(
            Arc::clone(&window),
            &self.render_config,
            self.params.point_count(),
        ))?;

        log::info!("{}", HELP);
        log::info!("{}", self.controls.describe(&self.params));

        self.window = Some(window);
        self.render_system = Some(render_system);
        Ok(())
    }

    fn title(&self) -> String {
        format!("pointnoise | {}", self.controls.describe(&self.params))
    }

    fn handle_action(&mut self, action: ControlAction, event_loop: &ActiveEventLoop) {
        match action {
            ControlAction::Quit => event_loop.exit(),
            ControlAction::TogglePolicy => {
                let policy = self.field.policy().toggled();
                self.field.set_policy(policy);
                log::info!("Regeneration policy: {:?}", policy);
            }
            _ => {
                if self.controls.apply(action, &mut self.params) {
                    log::debug!("Parameters changed: {:?}", self.params);
                }
                log::info!("{}", self.controls.describe(&self.params));
                if let Some(window) = &self.window {
                    window.set_title(&self.title());
                }
            }
        }
    }

    fn handle_cursor(&mut self, position: PhysicalPosition<f64>) {
        if self.dragging {
            if let Some(last) = self.cursor {
                let dx = (position.x - last.x) as f32;
                let dy = (position.y - last.y) as f32;
                self.camera
                    .rotate(dx, dy, self.render_config.window_height as f32);
            }
        }
        self.cursor = Some(position);
    }

    /// Regenerate (per policy), upload and present a single frame
    fn render_frame(&mut self, event_loop: &ActiveEventLoop) {
        let regenerated = self.field.update(&self.params);

        let Some(render_system) = self.render_system.as_mut() else {
            return;
        };

        if regenerated {
            render_system.upload_frame(self.field.frame());
        }

        let view_proj = self.camera.view_proj(&self.render_config);
        render_system.update_uniforms(&Uniforms::new(view_proj));

        match render_system.render() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                render_system.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Surface out of memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }

        let generation_time = regenerated.then(|| self.field.last_generation_time());
        self.stats.record_frame(generation_time);
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        if let Err(e) = self.init_window(event_loop) {
            log::error!("Initialization failed: {}", e);
            self.error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                self.render_config.set_window_size(size.width, size.height);
                if let Some(render_system) = self.render_system.as_mut() {
                    render_system.resize(size.width, size.height);
                }
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                self.shift = modifiers.state().shift_key();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(code),
                        ..
                    },
                ..
            } => {
                if let Some(action) = ControlAction::from_key(code, self.shift) {
                    self.handle_action(action, event_loop);
                }
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                self.dragging = state == ElementState::Pressed;
            }
            WindowEvent::CursorMoved { position, .. } => self.handle_cursor(position),
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_LINE,
                };
                self.camera.zoom(lines);
            }
            WindowEvent::RedrawRequested => self.render_frame(event_loop),
            _ => {}
        }
    }
}

fn main() -> Result<(), PointnoiseError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let params = args.noise_parameters();

    if let Some(path) = &args.export {
        let frame = NoiseFieldGenerator::new().generate(&params);
        return export::save_png(&frame, params.width, path);
    }

    log::info!("Pointnoise - {} points per frame", params.point_count());

    let mut app = App::new(params, args.regeneration_policy());
    let event_loop = EventLoop::new()?;
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
