//! Rendering primitives and surfaces (Cairo-based).
//!
//! This module defines the core drawing types used by the paint canvas:
//! - [`Color`]: RGBA color representation and the fixed [`PaletteColor`] set
//! - [`Surface`]: the raster the engine paints onto
//! - [`CairoSurface`]: the production raster backed by a cairo image surface
//! - [`RecordingSurface`]: a call log used for tracing and tests

pub mod cairo_surface;
pub mod color;
pub mod export;
pub mod recording;
pub mod surface;

// Re-export commonly used types at module level
pub use cairo_surface::CairoSurface;
pub use color::{Color, PaletteColor};
pub use recording::{DrawCall, RecordingSurface};
pub use surface::{ImageFormat, Stroke, Surface, SurfaceError};

pub use color::{BLACK, BLUE, GREEN, RED, WHITE};
