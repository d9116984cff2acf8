//! Drawing engine state and construction.

use crate::config::{Action, Config, KeyBinding, StatusPanelStyle};
use crate::draw::{ImageFormat, Surface, WHITE};
use crate::input::tool::ToolState;
use crate::util::{self, Point};
use std::collections::HashMap;

/// Settings the engine reads on every event, resolved from [`Config`].
#[derive(Debug, Clone)]
pub struct EngineSettings {
    /// Upper bound for the surface width
    pub max_width: u32,
    /// Fixed surface height
    pub height: u32,
    /// Status panel geometry and colors
    pub status_panel: StatusPanelStyle,
    /// Export file name without extension
    pub export_filename: String,
    /// Export encoding
    pub export_format: ImageFormat,
    /// Keybinding action map for lookup
    pub action_map: HashMap<KeyBinding, Action>,
}

impl EngineSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            max_width: config.canvas.max_width,
            height: config.canvas.height,
            status_panel: config.ui.status_panel.clone(),
            export_filename: config.export.filename.clone(),
            export_format: config.export.format,
            action_map: config.action_map(),
        }
    }

    /// Surface dimensions for a container of the given width.
    pub fn canvas_size(&self, container_width: u32) -> (u32, u32) {
        (
            util::canvas_width(container_width, self.max_width),
            self.height.max(1),
        )
    }
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Pointer state between two motion samples.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct PointerTrail {
    /// Whether the drawing button is held
    pub(crate) pressed: bool,
    /// Last reported pointer position, if any
    pub(crate) last: Option<Point>,
}

/// Owns the tool state and turns input events into surface operations.
///
/// All handlers run to completion on the caller's thread; none of them
/// return errors.
pub struct DrawingEngine<S: Surface> {
    /// The raster being painted
    pub(crate) surface: S,
    /// Current color, size and mode
    pub(crate) tool: ToolState,
    /// Resolved configuration
    pub(crate) settings: EngineSettings,
    /// Previous pointer sample for solid strokes
    pub(crate) pointer: PointerTrail,
    /// Number of key presses that matched no binding
    pub(crate) unrecognized_keys: usize,
    /// Whether a status panel has been painted since the canvas was last
    /// cleared or resized
    pub(crate) panel_painted: bool,
}

impl<S: Surface> DrawingEngine<S> {
    /// Takes ownership of `surface`, paints it white and starts with the
    /// default tool state (black, size 1, dotted).
    pub fn new(mut surface: S, settings: EngineSettings) -> Self {
        surface.set_background(WHITE);
        log::debug!(
            "Drawing engine started on {}x{} surface",
            surface.width(),
            surface.height()
        );

        Self {
            surface,
            tool: ToolState::default(),
            settings,
            pointer: PointerTrail::default(),
            unrecognized_keys: 0,
            panel_painted: false,
        }
    }

    /// Creates an engine with settings taken from `config`.
    pub fn from_config(surface: S, config: &Config) -> Self {
        Self::new(surface, EngineSettings::from_config(config))
    }

    /// Current color, size and mode.
    pub fn tool_state(&self) -> ToolState {
        self.tool
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// How many key presses were reported as unrecognized.
    pub fn unrecognized_key_count(&self) -> usize {
        self.unrecognized_keys
    }

    /// Returns whether `point` lies strictly inside the surface.
    pub fn contains_point(&self, point: Point) -> bool {
        util::point_in_bounds(point, self.surface.width(), self.surface.height())
    }

    /// Tears the engine down and hands back the surface.
    pub fn dispose(self) -> S {
        log::debug!("Drawing engine disposed");
        self.surface
    }
}
