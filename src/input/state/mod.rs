mod actions;
mod core;
mod mouse;
mod render;
#[cfg(test)]
mod tests;

pub use self::core::{DrawingEngine, EngineSettings};
