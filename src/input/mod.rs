//! Input handling and tool state.
//!
//! This module translates host keyboard and pointer events into drawing
//! operations. It owns the current pen settings (color, size, mode) and the
//! engine that applies them to a [`crate::draw::Surface`].

pub mod events;
pub mod mode;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{InputEvent, Key, MouseButton};
pub use mode::DrawMode;
pub use state::{DrawingEngine, EngineSettings};
pub use tool::{BrushSize, ToolState};
