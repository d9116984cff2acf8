//! Hosts that deliver input events to the drawing engine.

pub mod headless;
pub mod script;

pub use headless::HeadlessBackend;
pub use script::{ScriptError, load_script, parse_script};
