//! Stroke style selection.

/// How pointer drags are turned into pixels.
///
/// Selected with `D` and `S`; independent of color and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawMode {
    /// One filled circle per sampled pointer position (default)
    #[default]
    Dotted,
    /// A segment from the previous to the current pointer position
    Solid,
}

impl DrawMode {
    /// Label shown in the status panel.
    pub fn label(self) -> &'static str {
        match self {
            DrawMode::Dotted => "Dotted",
            DrawMode::Solid => "Solid",
        }
    }
}
