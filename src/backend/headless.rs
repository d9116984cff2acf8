//! Headless host that feeds input events to a [`DrawingEngine`].

use crate::config::Config;
use crate::draw::{CairoSurface, Surface, SurfaceError};
use crate::input::{DrawingEngine, EngineSettings, InputEvent};
use log::debug;

/// Drives one drawing session without a window system.
///
/// Events are delivered one at a time, in order. With `auto_frame` on, a
/// frame is rendered after each event, standing in for the display refresh.
pub struct HeadlessBackend<S: Surface> {
    engine: Option<DrawingEngine<S>>,
    auto_frame: bool,
}

impl<S: Surface> HeadlessBackend<S> {
    pub fn new(engine: DrawingEngine<S>) -> Self {
        Self {
            engine: Some(engine),
            auto_frame: true,
        }
    }

    /// Enables or disables rendering a frame after every event.
    pub fn with_auto_frame(mut self, auto_frame: bool) -> Self {
        self.auto_frame = auto_frame;
        self
    }

    pub fn engine(&self) -> Option<&DrawingEngine<S>> {
        self.engine.as_ref()
    }

    pub fn engine_mut(&mut self) -> Option<&mut DrawingEngine<S>> {
        self.engine.as_mut()
    }

    pub fn is_disposed(&self) -> bool {
        self.engine.is_none()
    }

    /// Routes one event to the engine.
    ///
    /// Returns `false` if the session was already torn down and the event was
    /// dropped.
    pub fn dispatch(&mut self, event: InputEvent) -> bool {
        let Some(engine) = self.engine.as_mut() else {
            debug!("Dropping {:?}: session disposed", event);
            return false;
        };

        debug!("Dispatching {:?}", event);
        match event {
            InputEvent::Key { key, code } => engine.on_key_event(key, code),
            InputEvent::Press { button, position } => engine.on_mouse_press(button, position),
            InputEvent::Motion(position) => engine.on_mouse_motion(position),
            InputEvent::Release(button) => engine.on_mouse_release(button),
            InputEvent::Drag {
                from,
                to,
                within_bounds,
            } => {
                let within_bounds = within_bounds && engine.contains_point(to);
                engine.on_pointer_drag(from, to, within_bounds);
            }
            InputEvent::Resize { container_width } => engine.on_resize(container_width),
            InputEvent::Frame => {
                engine.render_frame();
                return true;
            }
        }

        if self.auto_frame {
            engine.render_frame();
        }
        true
    }

    /// Dispatches every event in order and returns how many were delivered.
    pub fn run<I>(&mut self, events: I) -> usize
    where
        I: IntoIterator<Item = InputEvent>,
    {
        events
            .into_iter()
            .map(|event| self.dispatch(event))
            .filter(|delivered| *delivered)
            .count()
    }

    /// Tears the session down and returns the surface.
    ///
    /// Returns `None` if it was already disposed; later events are dropped.
    pub fn dispose(&mut self) -> Option<S> {
        self.engine.take().map(DrawingEngine::dispose)
    }
}

impl HeadlessBackend<CairoSurface> {
    /// Creates a cairo-backed session sized for `container_width`.
    pub fn with_cairo(config: &Config, container_width: u32) -> Result<Self, SurfaceError> {
        let settings = EngineSettings::from_config(config);
        let (width, height) = settings.canvas_size(container_width);
        let surface = CairoSurface::new(width, height)?
            .with_export_dir(config.export.directory.clone())
            .with_jpeg_quality(config.export.jpeg_quality);

        log::info!("Headless session started on {}x{} canvas", width, height);
        Ok(Self::new(DrawingEngine::new(surface, settings)))
    }
}
