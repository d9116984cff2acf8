//! The raster surface the drawing engine paints onto.

use super::color::Color;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Outline settings for filled primitives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Outline color
    pub color: Color,
    /// Outline width in logical units
    pub width: f64,
}

/// Image encodings supported for export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    #[serde(alias = "jpeg")]
    Jpg,
    Png,
}

impl ImageFormat {
    /// File extension written after the export filename.
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Jpg => "jpg",
            ImageFormat::Png => "png",
        }
    }

    /// Parses a format name (`png`, `jpg`, `jpeg`), ignoring case.
    pub fn from_name(name: &str) -> Result<Self, SurfaceError> {
        match name.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Ok(ImageFormat::Jpg),
            "png" => Ok(ImageFormat::Png),
            _ => Err(SurfaceError::UnsupportedFormat(name.to_string())),
        }
    }

    /// Infers the format from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self, SurfaceError> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| SurfaceError::UnsupportedFormat(path.display().to_string()))?;
        Self::from_name(ext)
    }
}

/// Errors reported by surface implementations.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Encode(String),

    #[error("Invalid surface size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),
}

/// A persistent 2D raster with immediate-mode primitives.
///
/// Pixel contents accumulate across calls until [`Surface::set_background`]
/// repaints them. Coordinates are logical units with the origin at the
/// top-left corner.
pub trait Surface {
    /// Current width in logical units.
    fn width(&self) -> u32;

    /// Current height in logical units.
    fn height(&self) -> u32;

    /// Fills the whole surface with a uniform color.
    fn set_background(&mut self, color: Color);

    /// Draws a filled circle without outline.
    fn draw_filled_circle(&mut self, x: f64, y: f64, diameter: f64, color: Color);

    /// Draws a segment with round caps.
    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64, color: Color);

    /// Draws a filled rounded rectangle, optionally outlined.
    #[allow(clippy::too_many_arguments)]
    fn draw_rounded_rect(
        &mut self,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        radius: f64,
        fill: Color,
        outline: Option<Stroke>,
    );

    /// Draws a single line of text; `(x, y)` is the left end of the baseline.
    fn draw_text(&mut self, text: &str, x: f64, y: f64, size: f64, color: Color);

    /// Writes the current contents to `<filename>.<ext>` and returns the path written.
    fn save_as_image(&mut self, filename: &str, format: ImageFormat)
    -> Result<PathBuf, SurfaceError>;

    /// Changes the surface dimensions.
    fn resize(&mut self, width: u32, height: u32) -> Result<(), SurfaceError>;

    /// Pushes the current drawing-state onto the state stack.
    fn save(&mut self);

    /// Pops the drawing-state stack.
    fn restore(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names_parse_case_insensitively() {
        assert_eq!(ImageFormat::from_name("JPG").unwrap(), ImageFormat::Jpg);
        assert_eq!(ImageFormat::from_name("jpeg").unwrap(), ImageFormat::Jpg);
        assert_eq!(ImageFormat::from_name("Png").unwrap(), ImageFormat::Png);
        assert!(ImageFormat::from_name("gif").is_err());
    }

    #[test]
    fn format_from_path_uses_extension() {
        let format = ImageFormat::from_path(Path::new("out/final.png")).unwrap();
        assert_eq!(format, ImageFormat::Png);
        assert!(ImageFormat::from_path(Path::new("no_extension")).is_err());
    }
}
