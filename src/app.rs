//! Native event loop
//!
//! One simulation tick per redraw. With vsync on, presentation blocks on the
//! display so the tick rate follows the refresh rate.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;
use winit::dpi::LogicalSize;
use winit::error::{EventLoopError, OsError};
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget};
use winit::window::{Window, WindowBuilder};

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_TITLE};
use crate::platform::{InputCollector, SystemClock, TpsMeter};
use crate::renderer::{RenderState, build_frame};
use crate::settings::Settings;
use crate::sim::{Clock, SimState, TickInput, tick};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to create event loop: {0}")]
    CreateEventLoop(#[source] EventLoopError),
    #[error("failed to create window: {0}")]
    CreateWindow(#[source] OsError),
    #[error("failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("no suitable graphics adapter: {0}")]
    RequestAdapter(#[from] wgpu::RequestAdapterError),
    #[error("failed to create graphics device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    #[error("rendering failed: {0}")]
    Render(#[source] wgpu::SurfaceError),
    #[error("event loop failed: {0}")]
    EventLoopRun(#[source] EventLoopError),
}

/// Open the window and run until it is closed or a fatal error occurs
pub fn run(settings: Settings) -> Result<(), AppError> {
    let seed = settings.seed.unwrap_or_else(time_seed);
    log::info!(
        "Point Defense starting (scale {}x, vsync {}, seed {})",
        settings.window_scale,
        settings.vsync,
        seed
    );

    let event_loop = EventLoop::new().map_err(AppError::CreateEventLoop)?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(
                (SCREEN_WIDTH as u32 * settings.window_scale) as f64,
                (SCREEN_HEIGHT as u32 * settings.window_scale) as f64,
            ))
            .with_resizable(false)
            .build(&event_loop)
            .map_err(AppError::CreateWindow)?,
    );

    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::PRIMARY,
        ..Default::default()
    });
    let surface = instance.create_surface(window.clone())?;
    let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
        power_preference: wgpu::PowerPreference::HighPerformance,
        compatible_surface: Some(&surface),
        force_fallback_adapter: false,
    }))?;
    log::info!("Using adapter: {:?}", adapter.get_info().name);

    let size = window.inner_size();
    let render_state = pollster::block_on(RenderState::new(
        surface,
        &adapter,
        size.width,
        size.height,
        settings.present_mode(),
    ))?;

    let clock = SystemClock::new();
    let mut app = App {
        sim: SimState::new(seed, clock.now()),
        clock,
        input: InputCollector::new(size.width, size.height),
        tps: TpsMeter::new(),
        render_state,
        window,
        fatal: None,
    };

    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop
        .run(|event, target| app.handle_event(event, target))
        .map_err(AppError::EventLoopRun)?;

    match app.fatal.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

struct App {
    sim: SimState,
    clock: SystemClock,
    input: InputCollector,
    tps: TpsMeter,
    render_state: RenderState,
    window: Arc<Window>,
    fatal: Option<AppError>,
}

impl App {
    fn handle_event(&mut self, event: Event<()>, target: &EventLoopWindowTarget<()>) {
        match event {
            Event::WindowEvent { window_id, event } if window_id == self.window.id() => {
                match event {
                    WindowEvent::CloseRequested => {
                        log::info!("Window closed");
                        target.exit();
                    }
                    WindowEvent::Resized(new_size) => {
                        self.input.set_window_size(new_size.width, new_size.height);
                        self.render_state.resize(new_size.width, new_size.height);
                    }
                    WindowEvent::RedrawRequested => self.frame(target),
                    other => self.input.handle_window_event(&other),
                }
            }
            Event::AboutToWait => self.window.request_redraw(),
            Event::LoopExiting => {
                log::info!("Shutting down after {} ticks", self.sim.frame_count);
            }
            _ => {}
        }
    }

    /// Tick once, then draw
    fn frame(&mut self, target: &EventLoopWindowTarget<()>) {
        let now = self.clock.now();
        let input = TickInput::poll(&mut self.input);
        tick(&mut self.sim, &input, now);
        self.tps.record(now);

        let vertices = build_frame(&self.sim, self.tps.tps());
        match self.render_state.render(&vertices) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost; reconfiguring");
                self.render_state.reconfigure();
            }
            Err(wgpu::SurfaceError::Timeout) => log::warn!("Surface timeout; frame skipped"),
            Err(err) => {
                log::error!("Render error: {err}");
                self.fatal = Some(AppError::Render(err));
                target.exit();
            }
        }
    }
}
