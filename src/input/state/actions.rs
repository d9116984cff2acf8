use crate::config::Action;
use crate::draw::{PaletteColor, Surface, WHITE};
use crate::input::{events::Key, mode::DrawMode, tool::BrushSize};

use super::DrawingEngine;

impl<S: Surface> DrawingEngine<S> {
    /// Processes a key press event that carries only a label.
    pub fn on_key_press(&mut self, key: Key) {
        self.on_key_event(key, None);
    }

    /// Processes a key press event.
    ///
    /// Keys are resolved through the keybinding table (defaults: r/g/b color,
    /// d/s mode, 1-5 size, c clear, v save). Letters are case-sensitive. When
    /// the label has no binding, a digit key code 49-53 still selects size
    /// 1-5, so Shift+1 behaves like 1. Anything else changes nothing; it is
    /// logged and counted.
    pub fn on_key_event(&mut self, key: Key, code: Option<u32>) {
        let action = key
            .label()
            .and_then(|label| self.find_action(&label))
            .or_else(|| {
                code.and_then(BrushSize::from_key_code)
                    .map(Action::SetSize)
            });

        match action {
            Some(action) => self.handle_action(action),
            None => {
                self.unrecognized_keys += 1;
                log::warn!("Unrecognized key: {:?} (code {:?})", key, code);
            }
        }
    }

    /// Look up an action for the given key label.
    pub(super) fn find_action(&self, key_str: &str) -> Option<Action> {
        self.settings
            .action_map
            .iter()
            .find(|(binding, _)| binding.matches(key_str))
            .map(|(_, action)| *action)
    }

    /// Handle an action triggered by a keybinding.
    pub(super) fn handle_action(&mut self, action: Action) {
        match action {
            Action::SetColorRed => self.set_color(PaletteColor::Red),
            Action::SetColorGreen => self.set_color(PaletteColor::Green),
            Action::SetColorBlue => self.set_color(PaletteColor::Blue),
            Action::SetModeDotted => self.set_mode(DrawMode::Dotted),
            Action::SetModeSolid => self.set_mode(DrawMode::Solid),
            Action::SetSize(size) => {
                self.tool.size = size;
                log::debug!("Size set to {}", size.get());
            }
            Action::ClearCanvas => {
                self.surface.set_background(WHITE);
                self.panel_painted = false;
                log::info!("Canvas cleared");
            }
            Action::SaveImage => self.save_image(),
        }
    }

    fn set_color(&mut self, color: PaletteColor) {
        self.tool.color = color;
        log::debug!("Color set to {}", color.name());
    }

    fn set_mode(&mut self, mode: DrawMode) {
        self.tool.mode = mode;
        log::debug!("Mode set to {}", mode.label());
    }

    /// Exports the surface; failures are logged and otherwise ignored.
    fn save_image(&mut self) {
        let filename = self.settings.export_filename.clone();
        let format = self.settings.export_format;

        match self.surface.save_as_image(&filename, format) {
            Ok(path) => log::info!("Canvas saved to {}", path.display()),
            Err(err) => log::error!(
                "Failed to save canvas as {}.{}: {}",
                filename,
                format.extension(),
                err
            ),
        }
    }
}
