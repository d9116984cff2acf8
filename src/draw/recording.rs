//! A surface that records calls instead of rasterizing them.

use super::color::Color;
use super::surface::{ImageFormat, Stroke, Surface, SurfaceError};
use std::path::PathBuf;

/// One recorded surface operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    SetBackground(Color),
    FilledCircle {
        x: f64,
        y: f64,
        diameter: f64,
        color: Color,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        width: f64,
        color: Color,
    },
    RoundedRect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        radius: f64,
        fill: Color,
        outline: Option<Stroke>,
    },
    Text {
        text: String,
        x: f64,
        y: f64,
        size: f64,
        color: Color,
    },
    SaveImage {
        filename: String,
        format: ImageFormat,
    },
    Resize {
        width: u32,
        height: u32,
    },
    Save,
    Restore,
}

impl DrawCall {
    /// Whether the call changes pixel contents.
    pub fn is_pixel_mutation(&self) -> bool {
        matches!(
            self,
            DrawCall::SetBackground(_)
                | DrawCall::FilledCircle { .. }
                | DrawCall::Line { .. }
                | DrawCall::RoundedRect { .. }
                | DrawCall::Text { .. }
        )
    }
}

/// In-memory [`Surface`] that keeps an ordered log of every call.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    calls: Vec<DrawCall>,
    save_depth: usize,
    fail_exports: bool,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Makes every subsequent `save_as_image` call fail.
    pub fn failing_exports(mut self) -> Self {
        self.fail_exports = true;
        self
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Returns and clears the recorded calls.
    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }

    /// Number of `save()` calls not yet matched by `restore()`.
    pub fn save_depth(&self) -> usize {
        self.save_depth
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_background(&mut self, color: Color) {
        self.calls.push(DrawCall::SetBackground(color));
    }

    fn draw_filled_circle(&mut self, x: f64, y: f64, diameter: f64, color: Color) {
        self.calls.push(DrawCall::FilledCircle {
            x,
            y,
            diameter,
            color,
        });
    }

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64, color: Color) {
        self.calls.push(DrawCall::Line {
            x1,
            y1,
            x2,
            y2,
            width,
            color,
        });
    }

    fn draw_rounded_rect(
        &mut self,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        radius: f64,
        fill: Color,
        outline: Option<Stroke>,
    ) {
        self.calls.push(DrawCall::RoundedRect {
            x,
            y,
            w,
            h,
            radius,
            fill,
            outline,
        });
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, size: f64, color: Color) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            x,
            y,
            size,
            color,
        });
    }

    fn save_as_image(
        &mut self,
        filename: &str,
        format: ImageFormat,
    ) -> Result<PathBuf, SurfaceError> {
        self.calls.push(DrawCall::SaveImage {
            filename: filename.to_string(),
            format,
        });
        if self.fail_exports {
            return Err(SurfaceError::Encode("export disabled".to_string()));
        }
        Ok(PathBuf::from(format!("{}.{}", filename, format.extension())))
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), SurfaceError> {
        if width == 0 || height == 0 {
            return Err(SurfaceError::InvalidSize { width, height });
        }
        self.calls.push(DrawCall::Resize { width, height });
        self.width = width;
        self.height = height;
        Ok(())
    }

    fn save(&mut self) {
        self.save_depth += 1;
        self.calls.push(DrawCall::Save);
    }

    fn restore(&mut self) {
        if self.save_depth == 0 {
            log::warn!("Ignoring restore() without matching save()");
            return;
        }
        self.save_depth -= 1;
        self.calls.push(DrawCall::Restore);
    }
}
