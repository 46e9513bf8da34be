//! Standalone viewer window backed by winit.
//!
//! Owns the whole frame loop: poll input, advance the camera, dispatch the
//! compute render, present, repeat, until a close request or Escape.
//!
//! ```no_run
//! # use photon::Viewer;
//! Viewer::builder()
//!     .with_title("Photon")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window, WindowId},
};

use crate::{
    camera::CameraController, error::PhotonError, input::InputState,
    options::Options, renderer::Renderer, util::FrameClock,
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with sensible defaults (title "Photon", default
    /// options).
    fn new() -> Self {
        Self {
            options: None,
            title: "Photon".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that flies a camera through the raytraced scene.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the frame loop. Blocks until the window is
    /// closed or Escape is pressed; returns `Ok(())` on a normal exit.
    ///
    /// # Errors
    ///
    /// Returns [`PhotonError::Viewer`] if the event loop cannot be created
    /// or fails while running.
    pub fn run(self) -> Result<(), PhotonError> {
        let event_loop =
            EventLoop::new().map_err(|e| PhotonError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            renderer: None,
            controller: CameraController::new(&self.options.camera),
            input: InputState::new(),
            clock: FrameClock::new(),
            options: self.options,
            title: self.title,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| PhotonError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler: the frame loop state.
struct ViewerApp {
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    controller: CameraController,
    input: InputState,
    clock: FrameClock,
    options: Options,
    title: String,
}

impl ViewerApp {
    /// Hide the cursor and grab it so relative pointer motion drives the
    /// look rotation. Grab refusal is non-fatal; the viewer still runs.
    fn grab_cursor(window: &Window) {
        window.set_cursor_visible(false);
        if let Err(e) = window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined))
        {
            log::warn!("cursor grab unavailable: {e}");
        }
    }

    /// Run one frame: tick the clock, integrate input into the camera,
    /// dispatch the compute render, present, and update the FPS readout.
    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let delta_time = self.clock.tick();
        let snapshot = self.input.snapshot();
        self.controller.advance(delta_time, &snapshot);

        if let Some(renderer) = &mut self.renderer {
            renderer.dispatch(&self.controller.camera);
            match renderer.present() {
                Ok(()) => {}
                Err(
                    wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost,
                ) => {
                    renderer.reconfigure();
                }
                Err(e) => {
                    log::error!("present failed: {e}");
                    event_loop.exit();
                    return;
                }
            }
        }

        if let Some(window) = &self.window {
            window.set_title(&format!(
                "{} | FPS: {}",
                self.title,
                self.clock.fps() as u32
            ));
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::PhysicalSize::new(
                self.options.window.width,
                self.options.window.height,
            ))
            .with_resizable(false);

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        Self::grab_cursor(&window);

        let inner = window.inner_size();
        let size = (inner.width.max(1), inner.height.max(1));
        let renderer =
            match pollster::block_on(Renderer::new(window.clone(), size)) {
                Ok(r) => r,
                Err(e) => {
                    log::error!("Failed to initialize renderer: {e}");
                    event_loop.exit();
                    return;
                }
            };

        window.request_redraw();
        self.window = Some(window);
        self.renderer = Some(renderer);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                let pressed = event.state == ElementState::Pressed;
                if code == KeyCode::Escape && pressed {
                    event_loop.exit();
                    return;
                }
                let _ = self.input.handle_key(code, pressed);
            }

            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }

            _ => (),
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.input.accumulate_pointer(delta.0, delta.1);
        }
    }
}
