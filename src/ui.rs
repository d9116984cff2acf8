/// UI rendering: status panel and key help text
use crate::config::StatusPanelStyle;
use crate::draw::{Color, Stroke, Surface, WHITE};
use crate::input::ToolState;

/// Key help shown by hosts next to the canvas.
pub const KEY_HELP: &[&str] = &[
    "Draw on the canvas by dragging with the left mouse button.",
    "  R - Red, G - Green, B - Blue   Change drawing color",
    "  D - Dotted, S - Solid          Change drawing mode",
    "  1-5                            Change stroke weight/dot size",
    "  C                              Clear canvas (white background)",
    "  V                              Save current canvas as 'Screenshot.jpg'",
];

/// The three panel lines for the given tool state.
pub fn status_lines(tool: &ToolState) -> [String; 3] {
    [
        format!("Color: {}", tool.color.name()),
        format!("Weight: {}", tool.size.get()),
        format!("Mode: {}", tool.mode.label()),
    ]
}

/// Paint the status panel in the top-right corner of the surface.
///
/// Callers are expected to bracket this with `save`/`restore`.
pub fn render_status_panel<S: Surface + ?Sized>(
    surface: &mut S,
    tool: &ToolState,
    style: &StatusPanelStyle,
) {
    let (panel_x, panel_y) = panel_origin(surface.width(), style);

    let outline = (style.border_width > 0.0).then(|| Stroke {
        color: Color::from_array(style.border_color),
        width: style.border_width,
    });
    surface.draw_rounded_rect(
        panel_x,
        panel_y,
        style.width,
        style.height,
        style.corner_radius,
        Color::from_array(style.bg_color),
        outline,
    );

    let text_color = Color::from_array(style.text_color);
    let text_x = panel_x + style.text_inset;
    for (i, line) in status_lines(tool).iter().enumerate() {
        let baseline = panel_y + style.line_height * (i as f64 + 1.0);
        surface.draw_text(line, text_x, baseline, style.font_size, text_color);
    }
}

/// Paint the area covered by the status panel white.
///
/// The panel is painted into the canvas itself, so hosts erase it before the
/// canvas is resized and the panel moves to the new top-right corner.
pub fn erase_status_panel<S: Surface + ?Sized>(surface: &mut S, style: &StatusPanelStyle) {
    let (panel_x, panel_y) = panel_origin(surface.width(), style);
    // Half the border lies outside the panel, plus one pixel of antialiasing.
    let pad = style.border_width / 2.0 + 1.0;
    surface.draw_rounded_rect(
        panel_x - pad,
        panel_y - pad,
        style.width + 2.0 * pad,
        style.height + 2.0 * pad,
        0.0,
        WHITE,
        None,
    );
}

fn panel_origin(surface_width: u32, style: &StatusPanelStyle) -> (f64, f64) {
    (
        surface_width as f64 - style.margin_right - style.width,
        style.margin_top,
    )
}
