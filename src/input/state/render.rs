use crate::draw::Surface;
use crate::ui;

use super::DrawingEngine;

impl<S: Surface> DrawingEngine<S> {
    /// Paints the status panel for one display refresh.
    ///
    /// The panel's paint settings are pushed and popped around the call so
    /// they never reach later strokes.
    pub fn render_frame(&mut self) {
        self.surface.save();
        ui::render_status_panel(&mut self.surface, &self.tool, &self.settings.status_panel);
        self.surface.restore();
        self.panel_painted = true;
    }

    /// Resizes the surface for a new container width.
    ///
    /// The width becomes `min(max_width, container_width)` and the height stays
    /// fixed. Existing pixels are kept where the surface implementation
    /// supports it; [`crate::draw::CairoSurface`] does. The last painted
    /// status panel is erased first so only the next frame's panel remains.
    pub fn on_resize(&mut self, container_width: u32) {
        let (width, height) = self.settings.canvas_size(container_width);
        if (width, height) == (self.surface.width(), self.surface.height()) {
            return;
        }

        if self.panel_painted {
            self.surface.save();
            ui::erase_status_panel(&mut self.surface, &self.settings.status_panel);
            self.surface.restore();
            self.panel_painted = false;
        }

        match self.surface.resize(width, height) {
            Ok(()) => log::info!("Canvas resized to {}x{}", width, height),
            Err(err) => log::error!("Failed to resize canvas to {}x{}: {}", width, height, err),
        }
    }
}
