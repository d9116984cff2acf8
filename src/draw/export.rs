//! Pixel readback and image file output.

use super::surface::SurfaceError;
use image::ColorType;
use image::codecs::jpeg::JpegEncoder;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Converts cairo ARGB32 rows (premultiplied, native endian) into straight RGBA bytes.
///
/// `stride` is the byte length of one source row, which may exceed `width * 4`.
pub fn argb32_to_rgba(data: &[u8], width: u32, height: u32, stride: usize) -> Vec<u8> {
    let width = width as usize;
    let height = height as usize;
    let mut rgba = Vec::with_capacity(width * height * 4);

    for row in data.chunks(stride).take(height) {
        for px in row[..width * 4].chunks_exact(4) {
            rgba.extend_from_slice(&unpremultiply(u32::from_ne_bytes([
                px[0], px[1], px[2], px[3],
            ])));
        }
    }

    rgba
}

/// Decodes a single premultiplied ARGB32 word into straight RGBA.
pub fn unpremultiply(argb: u32) -> [u8; 4] {
    let a = (argb >> 24) & 0xff;
    let channel = |shift: u32| -> u8 {
        let premultiplied = (argb >> shift) & 0xff;
        if a == 0 {
            0
        } else {
            ((premultiplied * 255 + a / 2) / a).min(255) as u8
        }
    };
    [channel(16), channel(8), channel(0), a as u8]
}

/// Drops the alpha channel by compositing each pixel over white.
///
/// JPEG has no alpha, and the canvas background is white.
pub fn flatten_over_white(rgba: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(rgba.len() / 4 * 3);
    for px in rgba.chunks_exact(4) {
        let alpha = px[3] as u32;
        for &channel in &px[..3] {
            let blended = (channel as u32 * alpha + 255 * (255 - alpha) + 127) / 255;
            rgb.push(blended as u8);
        }
    }
    rgb
}

/// Writes RGB bytes as a JPEG file.
pub fn write_jpeg(
    path: &Path,
    rgb: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<(), SurfaceError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    let mut encoder = JpegEncoder::new_with_quality(&mut writer, quality);
    encoder
        .encode(rgb, width, height, ColorType::Rgb8)
        .map_err(|err| SurfaceError::Encode(err.to_string()))?;
    Ok(())
}

/// Ensure the export directory exists, creating it if necessary.
///
/// # Returns
/// The canonicalized path to the directory
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, SurfaceError> {
    let directory = expand_tilde(directory);
    let directory = directory.as_path();
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Expand a leading `~/` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(stripped) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    path.to_path_buf()
}
