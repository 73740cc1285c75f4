/// Wirecube Window - winit/wgpu platform shell for the spinning cube
///
/// Opens a fixed-size window, draws the scene's line segments through a
/// small wgpu line pipeline, and polls the keyboard once per frame.
use std::sync::Arc;
use std::time::Duration;

use log::{debug, info};
use nalgebra::Point2;
use thiserror::Error;
use winit::{
    dpi::PhysicalSize,
    error::{EventLoopError, OsError},
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    platform::pump_events::{EventLoopExtPumpEvents, PumpStatus},
    window::{Window, WindowBuilder},
};
use wirecube_core::{Canvas, Platform, Rgba, TopologyError};

pub mod renderer;

pub use renderer::LineRenderer;

pub const TITLE: &str = "Wirecube";

/// Failures while setting up or driving the window
#[derive(Debug, Error)]
pub enum WindowError {
    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] OsError),
    #[error("failed to create drawing surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),
    #[error("no graphics adapter can present to this window")]
    NoAdapter,
    #[error("surface reports no supported texture formats")]
    NoSurfaceFormat,
    #[error("failed to open graphics device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
    #[error("failed to acquire frame: {0}")]
    Frame(#[from] wgpu::SurfaceError),
    #[error("invalid cube geometry: {0}")]
    Topology(#[from] TopologyError),
}

/// Main application struct for window rendering
pub struct WindowApp {
    event_loop: EventLoop<()>,
    window: Arc<Window>,
    renderer: LineRenderer,
}

impl WindowApp {
    /// Open a non-resizable square window and attach a line renderer to it
    pub fn new(size: u32) -> Result<Self, WindowError> {
        let event_loop = EventLoop::new()?;

        let window = Arc::new(
            WindowBuilder::new()
                .with_title(TITLE)
                .with_inner_size(PhysicalSize::new(size, size))
                .with_resizable(false)
                .build(&event_loop)?,
        );
        info!("Opened {}x{} window", size, size);

        let renderer = pollster::block_on(LineRenderer::new(window.clone()))?;

        Ok(Self {
            event_loop,
            window,
            renderer,
        })
    }
}

impl Canvas for WindowApp {
    type Error = WindowError;

    fn set_draw_color(&mut self, color: Rgba) {
        self.renderer.set_draw_color(color);
    }

    fn clear(&mut self) -> Result<(), WindowError> {
        self.renderer.clear();
        Ok(())
    }

    fn draw_line(&mut self, from: Point2<f64>, to: Point2<f64>) -> Result<(), WindowError> {
        self.renderer.draw_line(from, to);
        Ok(())
    }

    fn present(&mut self) -> Result<(), WindowError> {
        self.renderer.present()
    }
}

impl Platform for WindowApp {
    fn poll_quit(&mut self) -> Result<bool, WindowError> {
        let window_id = self.window.id();
        let mut quit = false;

        let status = self.event_loop.pump_events(Some(Duration::ZERO), |event, _target| {
            if let Event::WindowEvent { window_id: id, event } = event {
                if id == window_id && is_quit_event(&event) {
                    quit = true;
                }
            }
        });

        if let PumpStatus::Exit(code) = status {
            debug!("Event loop exited with code {}", code);
            quit = true;
        }
        Ok(quit)
    }
}

/// Escape pressed, or the window's close button
fn is_quit_event(event: &WindowEvent) -> bool {
    match event {
        WindowEvent::CloseRequested => true,
        WindowEvent::KeyboardInput {
            event: KeyEvent {
                state,
                physical_key,
                ..
            },
            ..
        } => is_escape_press(*state, *physical_key),
        _ => false,
    }
}

fn is_escape_press(state: ElementState, key: PhysicalKey) -> bool {
    state == ElementState::Pressed && key == PhysicalKey::Code(KeyCode::Escape)
}
