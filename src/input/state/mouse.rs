use crate::draw::Surface;
use crate::input::{events::MouseButton, mode::DrawMode};
use crate::util::Point;

use super::DrawingEngine;

impl<S: Surface> DrawingEngine<S> {
    /// Paints one drag sample.
    ///
    /// # Arguments
    /// * `prev` - Previous pointer position (only used in solid mode)
    /// * `cur` - Current pointer position
    /// * `within_bounds` - Whether `cur` lies strictly inside the surface,
    ///   as computed by the caller; nothing is drawn when false
    ///
    /// # Behavior
    /// - Dotted: a filled circle at `cur`, `4 * size` across
    /// - Solid: a segment from `prev` to `cur`, `size` wide
    ///
    /// Samples are not interpolated, so fast drags in dotted mode leave gaps.
    pub fn on_pointer_drag(&mut self, prev: Point, cur: Point, within_bounds: bool) {
        if !within_bounds {
            return;
        }

        let color = self.tool.color.color();
        match self.tool.mode {
            DrawMode::Dotted => {
                self.surface
                    .draw_filled_circle(cur.x, cur.y, self.tool.size.dot_diameter(), color);
            }
            DrawMode::Solid => {
                self.surface.draw_line(
                    prev.x,
                    prev.y,
                    cur.x,
                    cur.y,
                    self.tool.size.line_width(),
                    color,
                );
            }
        }
    }

    /// Processes a mouse button press event.
    ///
    /// Only the left button draws; the press position becomes the start of the trail.
    pub fn on_mouse_press(&mut self, button: MouseButton, position: Point) {
        if button == MouseButton::Left {
            self.pointer.pressed = true;
        }
        self.pointer.last = Some(position);
    }

    /// Processes pointer motion.
    ///
    /// While the left button is held, each motion sample is forwarded to
    /// [`DrawingEngine::on_pointer_drag`] with the previous sample and a bounds
    /// check on the current point.
    pub fn on_mouse_motion(&mut self, position: Point) {
        let prev = self.pointer.last.replace(position).unwrap_or(position);

        if self.pointer.pressed {
            let within_bounds = self.contains_point(position);
            self.on_pointer_drag(prev, position, within_bounds);
        }
    }

    /// Processes a mouse button release event.
    pub fn on_mouse_release(&mut self, button: MouseButton) {
        if button == MouseButton::Left {
            self.pointer.pressed = false;
        }
    }
}
