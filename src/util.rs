//! Geometry helpers for pointer positions and canvas sizing.

/// A pointer position in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Returns whether `point` lies strictly inside a `width` x `height` area.
///
/// Points on any edge (x == 0, x == width, ...) are outside.
pub fn point_in_bounds(point: Point, width: u32, height: u32) -> bool {
    point.x > 0.0 && point.x < width as f64 && point.y > 0.0 && point.y < height as f64
}

/// Computes the canvas width for a container, capped at `max_width`.
///
/// A zero-width container still yields a one-unit canvas.
pub fn canvas_width(container_width: u32, max_width: u32) -> u32 {
    container_width.min(max_width).max(1)
}
