//! Windowed plot display.
//!
//! Provides [`run_windowed`], which takes ownership of a finished
//! [`Scene`] and shows it in a winit window until the user closes it. The
//! scene never changes once the window is up; only the view does.
//!
//! Controls:
//!
//! - mouse wheel: zoom about the cursor
//! - left drag: pan
//! - `R` / `Home`: restore the fitted view
//! - `Escape` / `Q`: close

use std::sync::Arc;

use edgeviz_core::camera::{Bounds, Camera2D};
use edgeviz_core::canvas::Scene;
use edgeviz_core::geometry::{tessellate, Triangle};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{WindowAttributes, WindowId};

use super::renderer::DebugRenderer;

/// Zoom factor applied per wheel line; below 1 means scrolling up zooms in.
const ZOOM_PER_LINE: f64 = 0.9;

/// Pixels of trackpad scroll treated as one wheel line.
const PIXELS_PER_LINE: f64 = 40.0;

/// Window settings for the plot display.
#[derive(Debug, Clone)]
pub struct WindowConfig {
    /// Title prefix; the data limits are appended.
    pub title: String,
    /// Initial inner width in physical pixels.
    pub width: u32,
    /// Initial inner height in physical pixels.
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "edgeviz".to_owned(),
            width: 1024,
            height: 768,
        }
    }
}

/// Show `scene` in a window and block until the window is closed.
///
/// The view starts fitted to the scene's data bounds (the unit square for
/// an empty scene).
///
/// # Errors
///
/// Returns an error if the event loop cannot be created or if the window
/// or renderer fails to initialize.
pub fn run_windowed(scene: Scene, config: WindowConfig) -> Result<(), anyhow::Error> {
    let bounds = scene.bounds().unwrap_or_default();
    let fitted = Camera2D::fit(&bounds);

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App {
        state: AppState::Pending {
            title: window_title(&config.title, &bounds),
            width: config.width,
            height: config.height,
        },
        scene,
        fitted,
        init_failed: false,
    };

    event_loop.run_app(&mut app)?;

    if app.init_failed {
        return Err(anyhow::anyhow!(
            "failed to initialize plot window (see logs for details)"
        ));
    }

    Ok(())
}

fn window_title(prefix: &str, bounds: &Bounds) -> String {
    format!(
        "{prefix}: x [{:.3}, {:.3}]  y [{:.3}, {:.3}]",
        bounds.min_x, bounds.max_x, bounds.min_y, bounds.max_y
    )
}

// ---------------------------------------------------------------------------
// Internal state machine
// ---------------------------------------------------------------------------

/// Winit 0.30 requires that window creation happens inside the
/// `ApplicationHandler::resumed` callback, so the app starts `Pending` and
/// becomes `Running` once the window and renderer exist.
enum AppState {
    Pending {
        title: String,
        width: u32,
        height: u32,
    },
    Running(Box<View>),
}

/// Window, renderer and interaction state.
struct View {
    renderer: DebugRenderer,
    /// Triangles for the current camera and viewport; `None` when stale.
    triangles: Option<Vec<Triangle>>,
    cursor: PhysicalPosition<f64>,
    dragging: bool,
}

struct App {
    state: AppState,
    scene: Scene,
    fitted: Camera2D,
    /// Set to `true` if initialization fails (window or renderer), so
    /// `run_windowed` can return an error after the event loop exits.
    init_failed: bool,
}

impl App {
    fn fail(&mut self, event_loop: &ActiveEventLoop) {
        self.init_failed = true;
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let AppState::Pending {
            title,
            width,
            height,
        } = &self.state
        else {
            return;
        };

        let attrs = WindowAttributes::default()
            .with_title(title.clone())
            .with_inner_size(winit::dpi::PhysicalSize::new(*width, *height));

        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                tracing::error!(error = %e, "failed to create window -- exiting");
                self.fail(event_loop);
                return;
            }
        };

        match pollster::block_on(DebugRenderer::new(window.clone(), self.fitted.clone())) {
            Ok(renderer) => {
                tracing::info!(draw_calls = self.scene.len(), "plot window created");
                window.request_redraw();
                self.state = AppState::Running(Box::new(View {
                    renderer,
                    triangles: None,
                    cursor: PhysicalPosition::new(0.0, 0.0),
                    dragging: false,
                }));
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to initialize renderer -- exiting");
                self.fail(event_loop);
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let AppState::Running(view) = &mut self.state else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("window close requested -- shutting down");
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                tracing::debug!(
                    width = new_size.width,
                    height = new_size.height,
                    "window resized"
                );
                view.renderer.resize(new_size);
                view.invalidate();
            }
            WindowEvent::CursorMoved { position, .. } => {
                if view.dragging {
                    let viewport = view.renderer.viewport();
                    view.renderer.camera.pan_pixels(
                        position.x - view.cursor.x,
                        position.y - view.cursor.y,
                        viewport,
                    );
                    view.invalidate();
                }
                view.cursor = position;
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                view.dragging = state == ElementState::Pressed;
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y as f64,
                    MouseScrollDelta::PixelDelta(pos) => pos.y / PIXELS_PER_LINE,
                };
                let viewport = view.renderer.viewport();
                view.renderer.camera.zoom_at(
                    view.cursor.x,
                    view.cursor.y,
                    ZOOM_PER_LINE.powf(lines),
                    viewport,
                );
                view.invalidate();
            }
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                match event.physical_key {
                    PhysicalKey::Code(KeyCode::Escape | KeyCode::KeyQ) => event_loop.exit(),
                    PhysicalKey::Code(KeyCode::KeyR | KeyCode::Home) => {
                        view.renderer.camera = self.fitted.clone();
                        view.invalidate();
                    }
                    _ => {}
                }
            }
            WindowEvent::RedrawRequested => {
                if view.triangles.is_none() {
                    let viewport = view.renderer.viewport();
                    view.triangles =
                        Some(tessellate(&self.scene, &view.renderer.camera, viewport));
                }
                let triangles = view.triangles.as_deref().unwrap_or_default();

                match view.renderer.render(triangles) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        let size = view.renderer.window().inner_size();
                        view.renderer.resize(size);
                        view.renderer.window().request_redraw();
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        tracing::error!("GPU out of memory -- exiting");
                        event_loop.exit();
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "surface error during render");
                    }
                }
            }
            _ => {}
        }
    }
}

impl View {
    /// Drop cached triangles and schedule a redraw.
    fn invalidate(&mut self) {
        self.triangles = None;
        self.renderer.window().request_redraw();
    }
}
