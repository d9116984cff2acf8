//! Keybinding configuration types and parsing.
//!
//! Every action the canvas responds to can be bound to one or more keys in
//! the `[keybindings]` section of the configuration file.

use crate::input::{BrushSize, Key};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// All possible actions that can be bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Color selections
    SetColorRed,
    SetColorGreen,
    SetColorBlue,

    // Stroke style
    SetModeDotted,
    SetModeSolid,

    // Pen size
    SetSize(BrushSize),

    // Canvas actions
    ClearCanvas,
    SaveImage,
}

/// A single keybinding: one key label, matched exactly.
///
/// Letters are case-sensitive, so `"r"` does not fire for Shift+R.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub key: String,
}

impl KeyBinding {
    /// Parse a keybinding string like "r", "5" or "Escape".
    ///
    /// Named keys are normalized to the label hosts report (`"esc"` becomes
    /// `"Escape"`). Key combinations are rejected since the canvas tracks no
    /// modifier state.
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty keybinding string".to_string());
        }

        if s.len() > 1 && s.contains('+') {
            return Err(format!("Key combinations are not supported: {}", s));
        }

        let key = match Key::from_label(s) {
            Key::Char(_) | Key::Unknown => s.to_string(),
            named => named.label().unwrap_or_else(|| s.to_string()),
        };

        Ok(Self { key })
    }

    /// Check if this keybinding matches a key label.
    pub fn matches(&self, key: &str) -> bool {
        self.key == key
    }
}

/// Configuration for all keybindings.
///
/// Each action can have multiple keybindings. Users specify them in config.toml as:
/// ```toml
/// [keybindings]
/// set_color_red = ["r"]
/// clear_canvas = ["c", "Backspace"]
/// save_image = ["v"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct KeybindingsConfig {
    #[serde(default = "default_set_color_red")]
    pub set_color_red: Vec<String>,

    #[serde(default = "default_set_color_green")]
    pub set_color_green: Vec<String>,

    #[serde(default = "default_set_color_blue")]
    pub set_color_blue: Vec<String>,

    #[serde(default = "default_set_mode_dotted")]
    pub set_mode_dotted: Vec<String>,

    #[serde(default = "default_set_mode_solid")]
    pub set_mode_solid: Vec<String>,

    #[serde(default = "default_set_size_1")]
    pub set_size_1: Vec<String>,

    #[serde(default = "default_set_size_2")]
    pub set_size_2: Vec<String>,

    #[serde(default = "default_set_size_3")]
    pub set_size_3: Vec<String>,

    #[serde(default = "default_set_size_4")]
    pub set_size_4: Vec<String>,

    #[serde(default = "default_set_size_5")]
    pub set_size_5: Vec<String>,

    #[serde(default = "default_clear_canvas")]
    pub clear_canvas: Vec<String>,

    #[serde(default = "default_save_image")]
    pub save_image: Vec<String>,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            set_color_red: default_set_color_red(),
            set_color_green: default_set_color_green(),
            set_color_blue: default_set_color_blue(),
            set_mode_dotted: default_set_mode_dotted(),
            set_mode_solid: default_set_mode_solid(),
            set_size_1: default_set_size_1(),
            set_size_2: default_set_size_2(),
            set_size_3: default_set_size_3(),
            set_size_4: default_set_size_4(),
            set_size_5: default_set_size_5(),
            clear_canvas: default_clear_canvas(),
            save_image: default_save_image(),
        }
    }
}

impl KeybindingsConfig {
    /// Build a lookup map from keybindings to actions.
    /// Returns an error if any keybinding string is invalid or if duplicates are detected.
    pub fn build_action_map(&self) -> Result<HashMap<KeyBinding, Action>, String> {
        let mut map = HashMap::new();

        let sizes = [
            &self.set_size_1,
            &self.set_size_2,
            &self.set_size_3,
            &self.set_size_4,
            &self.set_size_5,
        ];
        let mut bindings: Vec<(&Vec<String>, Action)> = vec![
            (&self.set_color_red, Action::SetColorRed),
            (&self.set_color_green, Action::SetColorGreen),
            (&self.set_color_blue, Action::SetColorBlue),
            (&self.set_mode_dotted, Action::SetModeDotted),
            (&self.set_mode_solid, Action::SetModeSolid),
            (&self.clear_canvas, Action::ClearCanvas),
            (&self.save_image, Action::SaveImage),
        ];
        for (value, keys) in (1u8..).zip(sizes) {
            if let Some(size) = BrushSize::new(value) {
                bindings.push((keys, Action::SetSize(size)));
            }
        }

        for (keys, action) in bindings {
            for binding_str in keys {
                let binding = KeyBinding::parse(binding_str)?;
                if let Some(existing_action) = map.insert(binding, action) {
                    return Err(format!(
                        "Duplicate keybinding '{}' assigned to both {:?} and {:?}",
                        binding_str, existing_action, action
                    ));
                }
            }
        }

        Ok(map)
    }
}

// =============================================================================
// Default keybinding functions
// =============================================================================

fn default_set_color_red() -> Vec<String> {
    vec!["r".to_string()]
}

fn default_set_color_green() -> Vec<String> {
    vec!["g".to_string()]
}

fn default_set_color_blue() -> Vec<String> {
    vec!["b".to_string()]
}

fn default_set_mode_dotted() -> Vec<String> {
    vec!["d".to_string()]
}

fn default_set_mode_solid() -> Vec<String> {
    vec!["s".to_string()]
}

fn default_set_size_1() -> Vec<String> {
    vec!["1".to_string()]
}

fn default_set_size_2() -> Vec<String> {
    vec!["2".to_string()]
}

fn default_set_size_3() -> Vec<String> {
    vec!["3".to_string()]
}

fn default_set_size_4() -> Vec<String> {
    vec!["4".to_string()]
}

fn default_set_size_5() -> Vec<String> {
    vec!["5".to_string()]
}

fn default_clear_canvas() -> Vec<String> {
    vec!["c".to_string()]
}

fn default_save_image() -> Vec<String> {
    vec!["v".to_string()]
}
