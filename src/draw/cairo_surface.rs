//! Cairo-backed raster surface.

use super::color::{Color, WHITE};
use super::export;
use super::surface::{ImageFormat, Stroke, Surface, SurfaceError};
use std::f64::consts::PI;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Font family used for on-canvas text.
const TEXT_FONT_FAMILY: &str = "Sans";

/// An ARGB32 image surface with a persistent cairo context.
///
/// The context lives as long as the surface so that `save`/`restore` operate
/// on cairo's own graphics-state stack.
pub struct CairoSurface {
    surface: cairo::ImageSurface,
    ctx: cairo::Context,
    export_dir: PathBuf,
    jpeg_quality: u8,
    save_depth: usize,
}

impl CairoSurface {
    /// Creates a transparent surface of the given size.
    ///
    /// # Errors
    /// Returns [`SurfaceError::InvalidSize`] for zero or oversized dimensions and
    /// [`SurfaceError::Cairo`] if cairo cannot allocate the image.
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        let (surface, ctx) = create_image(width, height)?;
        Ok(Self {
            surface,
            ctx,
            export_dir: PathBuf::from("."),
            jpeg_quality: 90,
            save_depth: 0,
        })
    }

    /// Sets the directory used by [`Surface::save_as_image`].
    pub fn with_export_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.export_dir = dir.into();
        self
    }

    /// Sets the JPEG quality (1-100) used for exports.
    pub fn with_jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality.clamp(1, 100);
        self
    }

    /// Directory exports are written to.
    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    /// Reads back one pixel as straight (non-premultiplied) RGBA.
    ///
    /// Returns `None` for coordinates outside the surface or if the pixel data
    /// is unavailable.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }

        self.surface.flush();
        let stride = self.surface.stride() as usize;
        let offset = y as usize * stride + x as usize * 4;
        let mut result = None;
        self.surface
            .with_data(|data| {
                if let Some(px) = data.get(offset..offset + 4) {
                    result = Some(export::unpremultiply(u32::from_ne_bytes([
                        px[0], px[1], px[2], px[3],
                    ])));
                }
            })
            .ok()?;
        result
    }

    /// Returns the whole surface as straight RGBA bytes, row by row.
    pub fn to_rgba(&self) -> Result<Vec<u8>, SurfaceError> {
        self.surface.flush();
        let stride = self.surface.stride() as usize;
        let (width, height) = (self.width(), self.height());
        let mut rgba = Vec::new();
        self.surface
            .with_data(|data| {
                rgba = export::argb32_to_rgba(data, width, height, stride);
            })
            .map_err(|err| SurfaceError::Encode(err.to_string()))?;
        Ok(rgba)
    }

    /// Encodes the current contents to an arbitrary path.
    pub fn write_image(&self, path: &Path, format: ImageFormat) -> Result<(), SurfaceError> {
        self.surface.flush();
        match format {
            ImageFormat::Png => {
                let mut writer = BufWriter::new(File::create(path)?);
                self.surface
                    .write_to_png(&mut writer)
                    .map_err(|err| SurfaceError::Encode(err.to_string()))?;
            }
            ImageFormat::Jpg => {
                let rgb = export::flatten_over_white(&self.to_rgba()?);
                export::write_jpeg(path, &rgb, self.width(), self.height(), self.jpeg_quality)?;
            }
        }
        log::debug!("Wrote {} ({:?})", path.display(), format);
        Ok(())
    }

    fn set_source(&self, color: Color) {
        self.ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    }
}

fn create_image(
    width: u32,
    height: u32,
) -> Result<(cairo::ImageSurface, cairo::Context), SurfaceError> {
    if width == 0 || height == 0 || width > i32::MAX as u32 || height > i32::MAX as u32 {
        return Err(SurfaceError::InvalidSize { width, height });
    }
    let surface =
        cairo::ImageSurface::create(cairo::Format::ARgb32, width as i32, height as i32)?;
    let ctx = cairo::Context::new(&surface)?;
    Ok((surface, ctx))
}

impl Surface for CairoSurface {
    fn width(&self) -> u32 {
        self.surface.width() as u32
    }

    fn height(&self) -> u32 {
        self.surface.height() as u32
    }

    fn set_background(&mut self, color: Color) {
        let _ = self.ctx.save();
        self.ctx.set_operator(cairo::Operator::Source);
        self.set_source(color);
        let _ = self.ctx.paint();
        let _ = self.ctx.restore();
    }

    fn draw_filled_circle(&mut self, x: f64, y: f64, diameter: f64, color: Color) {
        if diameter <= 0.0 {
            return;
        }
        self.ctx.new_path();
        self.set_source(color);
        self.ctx.arc(x, y, diameter / 2.0, 0.0, 2.0 * PI);
        let _ = self.ctx.fill();
    }

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64, color: Color) {
        self.ctx.new_path();
        self.set_source(color);
        self.ctx.set_line_width(width);
        self.ctx.set_line_cap(cairo::LineCap::Round);
        self.ctx.move_to(x1, y1);
        self.ctx.line_to(x2, y2);
        let _ = self.ctx.stroke();
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
        let r = radius.clamp(0.0, w.min(h) / 2.0);

        self.ctx.new_path();
        self.ctx.arc(x + w - r, y + r, r, -PI / 2.0, 0.0);
        self.ctx.arc(x + w - r, y + h - r, r, 0.0, PI / 2.0);
        self.ctx.arc(x + r, y + h - r, r, PI / 2.0, PI);
        self.ctx.arc(x + r, y + r, r, PI, 3.0 * PI / 2.0);
        self.ctx.close_path();

        self.set_source(fill);
        let _ = self.ctx.fill_preserve();

        if let Some(stroke) = outline.filter(|s| s.width > 0.0) {
            self.set_source(stroke.color);
            self.ctx.set_line_width(stroke.width);
            let _ = self.ctx.stroke();
        } else {
            self.ctx.new_path();
        }
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, size: f64, color: Color) {
        self.ctx.new_path();
        self.ctx.select_font_face(
            TEXT_FONT_FAMILY,
            cairo::FontSlant::Normal,
            cairo::FontWeight::Normal,
        );
        self.ctx.set_font_size(size);
        self.set_source(color);
        self.ctx.move_to(x, y);
        if let Err(err) = self.ctx.show_text(text) {
            log::warn!("Failed to draw text '{}': {}", text, err);
        }
        self.ctx.new_path();
    }

    fn save_as_image(
        &mut self,
        filename: &str,
        format: ImageFormat,
    ) -> Result<PathBuf, SurfaceError> {
        let directory = export::ensure_directory_exists(&self.export_dir)?;
        let path = directory.join(format!("{}.{}", filename, format.extension()));
        self.write_image(&path, format)?;
        Ok(path)
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), SurfaceError> {
        if width == self.width() && height == self.height() {
            return Ok(());
        }

        let (surface, ctx) = create_image(width, height)?;

        // Keep existing pixels: white first, then the old raster at the origin.
        ctx.set_source_rgba(WHITE.r, WHITE.g, WHITE.b, WHITE.a);
        ctx.paint()?;
        self.surface.flush();
        ctx.set_source_surface(&self.surface, 0.0, 0.0)?;
        ctx.paint()?;
        ctx.set_source_rgba(0.0, 0.0, 0.0, 1.0);

        if self.save_depth > 0 {
            log::warn!(
                "Resize discarded {} unrestored drawing state(s)",
                self.save_depth
            );
            self.save_depth = 0;
        }

        self.surface = surface;
        self.ctx = ctx;
        Ok(())
    }

    fn save(&mut self) {
        if self.ctx.save().is_ok() {
            self.save_depth += 1;
        }
    }

    fn restore(&mut self) {
        if self.save_depth == 0 {
            log::warn!("Ignoring restore() without matching save()");
            return;
        }
        if self.ctx.restore().is_ok() {
            self.save_depth -= 1;
        }
    }
}
