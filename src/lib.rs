//! Library exports for the paintpad drawing engine.
//!
//! Exposes the engine, its surface abstraction and the configuration types so
//! that hosts other than the bundled CLI can drive a canvas.

pub mod backend;
pub mod config;
pub mod draw;
pub mod input;
pub mod ui;
pub mod util;

pub use config::Config;
