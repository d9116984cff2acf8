//! Current pen settings.

use super::mode::DrawMode;
use crate::draw::PaletteColor;

/// Pen size in the range 1..=5.
///
/// Dots are drawn `4 * size` across; solid strokes are `size` wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BrushSize(u8);

impl BrushSize {
    pub const MIN: BrushSize = BrushSize(1);
    pub const MAX: BrushSize = BrushSize(5);

    /// Returns `None` unless `value` is within 1..=5.
    pub const fn new(value: u8) -> Option<Self> {
        if value >= Self::MIN.0 && value <= Self::MAX.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Size selected by a digit key code (`1`..`5` are codes 49..53),
    /// independent of the character the key produced.
    pub fn from_key_code(code: u32) -> Option<Self> {
        code.checked_sub(u32::from(b'0'))
            .and_then(|value| u8::try_from(value).ok())
            .and_then(Self::new)
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Diameter of a dot drawn in dotted mode.
    pub fn dot_diameter(self) -> f64 {
        self.0 as f64 * 4.0
    }

    /// Stroke width of a segment drawn in solid mode.
    pub fn line_width(self) -> f64 {
        self.0 as f64
    }
}

impl Default for BrushSize {
    fn default() -> Self {
        Self::MIN
    }
}

/// Color, size and mode applied to every stroke.
///
/// The fields vary independently; every combination is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToolState {
    pub color: PaletteColor,
    pub size: BrushSize,
    pub mode: DrawMode,
}
