//! Configuration file support for paintpad.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/paintpad/config.toml`. Settings include canvas bounds,
//! image export, status panel styling, and keybindings.
//!
//! If no config file exists, the defaults reproduce the stock 500x500 canvas.

pub mod keybindings;
pub mod types;

// Re-export commonly used types at module level
pub use keybindings::{Action, KeyBinding, KeybindingsConfig};
pub use types::{CanvasConfig, ExportConfig, StatusPanelStyle, UiConfig};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// max_width = 500
/// height = 500
///
/// [export]
/// directory = "~/Pictures"
/// filename = "Screenshot"
/// format = "jpg"
///
/// [ui.status_panel]
/// font_size = 14.0
///
/// [keybindings]
/// clear_canvas = ["c"]
/// ```
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct Config {
    /// Canvas size bounds
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Image export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// UI display preferences
    #[serde(default)]
    pub ui: UiConfig,

    /// Keyboard shortcuts
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.max_width`, `canvas.height`: 1 - 4096
    /// - `export.jpeg_quality`: 1 - 100
    /// - `export.filename`: non-empty
    /// - status panel sizes: non-negative, colors 0.0 - 1.0
    pub fn validate_and_clamp(&mut self) {
        if !(1..=4096).contains(&self.canvas.max_width) {
            warn!(
                "Invalid canvas max_width {}, clamping to 1-4096 range",
                self.canvas.max_width
            );
            self.canvas.max_width = self.canvas.max_width.clamp(1, 4096);
        }

        if !(1..=4096).contains(&self.canvas.height) {
            warn!(
                "Invalid canvas height {}, clamping to 1-4096 range",
                self.canvas.height
            );
            self.canvas.height = self.canvas.height.clamp(1, 4096);
        }

        if !(1..=100).contains(&self.export.jpeg_quality) {
            warn!(
                "Invalid jpeg_quality {}, clamping to 1-100 range",
                self.export.jpeg_quality
            );
            self.export.jpeg_quality = self.export.jpeg_quality.clamp(1, 100);
        }

        if self.export.filename.trim().is_empty() {
            warn!("Empty export filename, falling back to 'Screenshot'");
            self.export.filename = types::default_export_filename();
        }

        let panel = &mut self.ui.status_panel;
        for (name, value) in [
            ("width", &mut panel.width),
            ("height", &mut panel.height),
            ("margin_right", &mut panel.margin_right),
            ("margin_top", &mut panel.margin_top),
            ("corner_radius", &mut panel.corner_radius),
            ("font_size", &mut panel.font_size),
            ("text_inset", &mut panel.text_inset),
            ("line_height", &mut panel.line_height),
            ("border_width", &mut panel.border_width),
        ] {
            if !value.is_finite() || *value < 0.0 {
                warn!("Invalid status_panel.{} {:.1}, using 0.0", name, value);
                *value = 0.0;
            }
        }

        for (name, color) in [
            ("bg_color", &mut panel.bg_color),
            ("border_color", &mut panel.border_color),
            ("text_color", &mut panel.text_color),
        ] {
            for (i, component) in color.iter_mut().enumerate() {
                if !(0.0..=1.0).contains(&*component) {
                    warn!(
                        "Invalid status_panel.{}[{}] = {:.3}, clamping to 0.0-1.0",
                        name, i, component
                    );
                    *component = if component.is_nan() {
                        0.0
                    } else {
                        component.clamp(0.0, 1.0)
                    };
                }
            }
        }
    }

    /// Builds the key lookup table, falling back to the default bindings if the
    /// configured ones are invalid.
    pub fn action_map(&self) -> HashMap<KeyBinding, Action> {
        match self.keybindings.build_action_map() {
            Ok(map) => map,
            Err(err) => {
                log::error!("Invalid keybindings ({}), using defaults", err);
                KeybindingsConfig::default()
                    .build_action_map()
                    .unwrap_or_default()
            }
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/paintpad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("paintpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default path, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined, or the file
    /// exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Writes the documented example config to the user's config directory.
    ///
    /// # Errors
    /// Returns an error if a config file already exists at the target path or
    /// the file cannot be written.
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(&config_path, default_config)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::ImageFormat;

    #[test]
    fn defaults_match_stock_canvas() {
        let config = Config::default();
        assert_eq!(config.canvas.max_width, 500);
        assert_eq!(config.canvas.height, 500);
        assert_eq!(config.export.filename, "Screenshot");
        assert_eq!(config.export.format, ImageFormat::Jpg);
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.canvas.max_width, 500);
        assert_eq!(config.ui.status_panel.corner_radius, 8.0);
    }

    #[test]
    fn partial_toml_overrides_fields() {
        let config: Config = toml::from_str(
            r#"
            [canvas]
            max_width = 320

            [export]
            format = "png"
            "#,
        )
        .unwrap();
        assert_eq!(config.canvas.max_width, 320);
        assert_eq!(config.canvas.height, 500);
        assert_eq!(config.export.format, ImageFormat::Png);
    }

    #[test]
    fn jpeg_alias_is_accepted() {
        let config: Config = toml::from_str("[export]\nformat = \"jpeg\"").unwrap();
        assert_eq!(config.export.format, ImageFormat::Jpg);
    }

    #[test]
    fn validate_clamps_out_of_range_values() {
        let mut config = Config::default();
        config.canvas.max_width = 0;
        config.canvas.height = 10_000;
        config.export.jpeg_quality = 0;
        config.export.filename = "  ".to_string();
        config.ui.status_panel.width = -5.0;
        config.ui.status_panel.bg_color = [1.5, -0.2, 0.5, 1.0];

        config.validate_and_clamp();

        assert_eq!(config.canvas.max_width, 1);
        assert_eq!(config.canvas.height, 4096);
        assert_eq!(config.export.jpeg_quality, 1);
        assert_eq!(config.export.filename, "Screenshot");
        assert_eq!(config.ui.status_panel.width, 0.0);
        assert_eq!(config.ui.status_panel.bg_color, [1.0, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn invalid_keybindings_fall_back_to_defaults() {
        let mut config = Config::default();
        config.keybindings.save_image = vec!["Ctrl+S".to_string()];
        let map = config.action_map();
        assert_eq!(
            map.get(&KeyBinding::parse("v").unwrap()),
            Some(&Action::SaveImage)
        );
    }

    #[test]
    fn load_from_reads_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[canvas]\nheight = 300\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.canvas.height, 300);
    }

    #[test]
    fn load_from_reports_parse_errors() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[canvas\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }

    #[test]
    fn example_config_parses() {
        let config: Config = toml::from_str(include_str!("../../config.example.toml")).unwrap();
        assert!(config.keybindings.build_action_map().is_ok());
    }

    #[test]
    fn json_schema_lists_sections() {
        let schema = serde_json::to_value(Config::json_schema()).unwrap();
        let properties = schema.get("properties").unwrap();
        for section in ["canvas", "export", "ui", "keybindings"] {
            assert!(properties.get(section).is_some(), "missing {section}");
        }
    }
}
