//! Platform layer
//!
//! Owns the winit window and event loop and feeds the scene:
//! - Timer: each firing dispatches a `Tick` and arms the next one
//!   (`ControlFlow::WaitUntil`), so ticks never pile up
//! - Input: keys and clicks become `SceneEvent`s
//! - Redraw: the frame is rebuilt from the current state and presented
//!
//! Everything runs on the main thread; the event loop serializes all
//! callbacks, so the scene needs no locking.

mod error;
mod event_mapper;

use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, StartCause, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

pub use error::AppError;
pub use event_mapper::{map_key, map_mouse};

use crate::renderer::{RenderState, build_frame};
use crate::settings::Settings;
use crate::sim::{SceneEvent, SceneState, update};

/// Window plus the GPU state bound to it
struct Graphics {
    window: Arc<Window>,
    renderer: RenderState,
}

/// Event-loop application
pub struct App {
    settings: Settings,
    state: SceneState,
    graphics: Option<Graphics>,
    /// Last cursor column in physical pixels
    cursor_x: f64,
    /// First fatal error; the loop exits as soon as one is recorded
    error: Option<AppError>,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            state: SceneState::new(),
            graphics: None,
            cursor_x: 0.0,
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: AppError) {
        log::error!("{}", error);
        self.error.get_or_insert(error);
        event_loop.exit();
    }

    fn init_graphics(&self, event_loop: &ActiveEventLoop) -> Result<Graphics, AppError> {
        let attributes = Window::default_attributes()
            .with_title(self.settings.title.clone())
            .with_inner_size(LogicalSize::new(
                self.settings.window_width,
                self.settings.window_height,
            ));
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .map_err(AppError::WindowCreation)?,
        );
        let size = window.inner_size();
        log::info!("Window created: {}x{}", size.width, size.height);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance
            .create_surface(window.clone())
            .map_err(AppError::SurfaceCreation)?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .map_err(AppError::NoAdapter)?;
        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let renderer = pollster::block_on(RenderState::new(
            surface,
            &adapter,
            size.width,
            size.height,
            self.settings.vsync,
            self.state.sun.pos,
        ))
        .map_err(AppError::DeviceRequest)?;

        Ok(Graphics { window, renderer })
    }

    /// Apply an event and ask for a frame if the scene wants one
    fn dispatch(&mut self, event: SceneEvent) {
        let response = update(&mut self.state, &event);
        if response.redraw {
            if let Some(graphics) = &self.graphics {
                graphics.window.request_redraw();
            }
        }
    }

    /// Timer continuation: tick, then arm the next firing
    fn on_timer(&mut self, event_loop: &ActiveEventLoop) {
        self.dispatch(SceneEvent::Tick);
        self.arm_timer(event_loop, Instant::now() + self.settings.tick_interval());
    }

    fn arm_timer(&self, event_loop: &ActiveEventLoop, at: Instant) {
        event_loop.set_control_flow(ControlFlow::WaitUntil(at));
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(graphics) = self.graphics.as_mut() else {
            return;
        };
        let frame = build_frame(&self.state, self.settings.quality);
        match graphics.renderer.render(&frame) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let (w, h) = graphics.renderer.size;
                graphics.renderer.resize(w, h);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => self.fail(event_loop, AppError::OutOfMemory),
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.graphics.is_some() {
            return;
        }
        match self.init_graphics(event_loop) {
            Ok(graphics) => {
                self.graphics = Some(graphics);
                // First tick fires immediately
                self.arm_timer(event_loop, Instant::now());
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn new_events(&mut self, event_loop: &ActiveEventLoop, cause: StartCause) {
        if let StartCause::ResumeTimeReached { .. } = cause {
            self.on_timer(event_loop);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting.");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(graphics) = self.graphics.as_mut() {
                    graphics.renderer.resize(size.width, size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                if let Some(key) = map_key(&event.logical_key) {
                    self.dispatch(SceneEvent::Key(key));
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_x = position.x;
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let width = self
                    .graphics
                    .as_ref()
                    .map(|g| g.window.inner_size().width)
                    .unwrap_or(self.settings.window_width);
                let press = map_mouse(state, button, self.cursor_x, width);
                self.dispatch(SceneEvent::Pointer(press));
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }
}

/// Open the window and run until it is closed
pub fn run(settings: Settings) -> Result<(), AppError> {
    let event_loop = EventLoop::new().map_err(AppError::EventLoopCreation)?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(settings);
    event_loop
        .run_app(&mut app)
        .map_err(AppError::EventLoopExecution)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
