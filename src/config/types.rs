//! Configuration type definitions.

use crate::draw::ImageFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Canvas sizing.
///
/// The canvas follows the container width up to `max_width`; the height is fixed.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Upper bound for the canvas width in logical units (valid range: 1 - 4096)
    #[serde(default = "default_max_width")]
    pub max_width: u32,

    /// Canvas height in logical units (valid range: 1 - 4096)
    #[serde(default = "default_height")]
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            max_width: default_max_width(),
            height: default_height(),
        }
    }
}

/// Image export settings used by the save keybinding.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Directory the image is written to
    #[serde(default = "default_export_directory")]
    pub directory: PathBuf,

    /// File name without extension; the same file is overwritten on each save
    #[serde(default = "default_export_filename")]
    pub filename: String,

    /// Image format: "jpg" or "png"
    #[serde(default = "default_export_format")]
    pub format: ImageFormat,

    /// JPEG quality (valid range: 1 - 100)
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_directory(),
            filename: default_export_filename(),
            format: default_export_format(),
            jpeg_quality: default_jpeg_quality(),
        }
    }
}

/// UI display preferences.
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct UiConfig {
    /// Status panel styling options
    #[serde(default)]
    pub status_panel: StatusPanelStyle,
}

/// Status panel styling configuration.
///
/// The panel is anchored to the top-right corner: its left edge sits
/// `margin_right + width` units from the right edge of the canvas.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StatusPanelStyle {
    /// Panel width
    #[serde(default = "default_panel_width")]
    pub width: f64,

    /// Panel height
    #[serde(default = "default_panel_height")]
    pub height: f64,

    /// Gap between the panel and the right edge of the canvas
    #[serde(default = "default_panel_margin_right")]
    pub margin_right: f64,

    /// Gap between the panel and the top edge of the canvas
    #[serde(default = "default_panel_margin_top")]
    pub margin_top: f64,

    /// Corner radius
    #[serde(default = "default_panel_corner_radius")]
    pub corner_radius: f64,

    /// Font size for the panel text
    #[serde(default = "default_panel_font_size")]
    pub font_size: f64,

    /// Horizontal inset of the text from the panel's left edge
    #[serde(default = "default_panel_text_inset")]
    pub text_inset: f64,

    /// Baseline distance between text lines (and from the panel top to the first line)
    #[serde(default = "default_panel_line_height")]
    pub line_height: f64,

    /// Background color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_panel_bg_color")]
    pub bg_color: [f64; 4],

    /// Border color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_panel_border_color")]
    pub border_color: [f64; 4],

    /// Border line width (0 disables the border)
    #[serde(default = "default_panel_border_width")]
    pub border_width: f64,

    /// Text color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_panel_text_color")]
    pub text_color: [f64; 4],
}

impl Default for StatusPanelStyle {
    fn default() -> Self {
        Self {
            width: default_panel_width(),
            height: default_panel_height(),
            margin_right: default_panel_margin_right(),
            margin_top: default_panel_margin_top(),
            corner_radius: default_panel_corner_radius(),
            font_size: default_panel_font_size(),
            text_inset: default_panel_text_inset(),
            line_height: default_panel_line_height(),
            bg_color: default_panel_bg_color(),
            border_color: default_panel_border_color(),
            border_width: default_panel_border_width(),
            text_color: default_panel_text_color(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_max_width() -> u32 {
    500
}

fn default_height() -> u32 {
    500
}

fn default_export_directory() -> PathBuf {
    PathBuf::from(".")
}

pub(crate) fn default_export_filename() -> String {
    "Screenshot".to_string()
}

fn default_export_format() -> ImageFormat {
    ImageFormat::Jpg
}

fn default_jpeg_quality() -> u8 {
    90
}

fn default_panel_width() -> f64 {
    100.0
}

fn default_panel_height() -> f64 {
    70.0
}

fn default_panel_margin_right() -> f64 {
    20.0
}

fn default_panel_margin_top() -> f64 {
    20.0
}

fn default_panel_corner_radius() -> f64 {
    8.0
}

fn default_panel_font_size() -> f64 {
    14.0
}

fn default_panel_text_inset() -> f64 {
    10.0
}

fn default_panel_line_height() -> f64 {
    20.0
}

fn default_panel_bg_color() -> [f64; 4] {
    let gray = 150.0 / 255.0;
    [gray, gray, gray, 1.0]
}

fn default_panel_border_color() -> [f64; 4] {
    [0.0, 0.0, 0.0, 1.0]
}

fn default_panel_border_width() -> f64 {
    1.0
}

fn default_panel_text_color() -> [f64; 4] {
    [0.0, 0.0, 0.0, 1.0]
}
