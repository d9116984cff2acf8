use super::*;
use crate::config::Config;
use crate::draw::{
    BLUE, DrawCall, GREEN, ImageFormat, PaletteColor, RED, RecordingSurface, Surface, WHITE,
};
use crate::input::{BrushSize, DrawMode, Key, MouseButton, ToolState};
use crate::util::Point;

fn create_test_engine() -> DrawingEngine<RecordingSurface> {
    let mut engine = DrawingEngine::new(RecordingSurface::new(500, 500), EngineSettings::default());
    engine.surface_mut().take_calls();
    engine
}

fn press_keys(engine: &mut DrawingEngine<RecordingSurface>, keys: &str) {
    for c in keys.chars() {
        engine.on_key_press(Key::Char(c));
    }
}

fn size(value: u8) -> BrushSize {
    BrushSize::new(value).unwrap()
}

#[test]
fn test_new_engine_paints_white_background() {
    let engine = DrawingEngine::new(RecordingSurface::new(500, 500), EngineSettings::default());
    assert_eq!(engine.surface().calls(), &[DrawCall::SetBackground(WHITE)]);
    assert_eq!(engine.tool_state(), ToolState::default());
}

#[test]
fn test_color_keys_select_palette() {
    let mut engine = create_test_engine();

    engine.on_key_press(Key::Char('r'));
    assert_eq!(engine.tool_state().color, PaletteColor::Red);

    engine.on_key_press(Key::Char('g'));
    assert_eq!(engine.tool_state().color, PaletteColor::Green);

    engine.on_key_press(Key::Char('b'));
    assert_eq!(engine.tool_state().color, PaletteColor::Blue);
}

#[test]
fn test_last_color_key_wins() {
    for (sequence, expected) in [
        ("", PaletteColor::Black),
        ("r", PaletteColor::Red),
        ("rgb", PaletteColor::Blue),
        ("bgr", PaletteColor::Red),
        ("rx3sg", PaletteColor::Green),
        ("bbbbr", PaletteColor::Red),
    ] {
        let mut engine = create_test_engine();
        press_keys(&mut engine, sequence);
        assert_eq!(engine.tool_state().color, expected, "sequence {sequence:?}");
    }
}

#[test]
fn test_uppercase_letters_are_unrecognized() {
    let mut engine = create_test_engine();
    press_keys(&mut engine, "g3");
    let before = engine.tool_state();

    for c in ['R', 'G', 'B', 'D', 'S', 'C', 'V'] {
        engine.on_key_press(Key::Char(c));
    }

    assert_eq!(engine.tool_state(), before);
    assert_eq!(engine.unrecognized_key_count(), 7);
    assert!(engine.surface().calls().is_empty());
}

#[test]
fn test_digit_keys_set_size() {
    let mut engine = create_test_engine();
    for digit in 1..=5u8 {
        engine.on_key_press(Key::Char((b'0' + digit) as char));
        assert_eq!(engine.tool_state().size, size(digit));
    }
}

#[test]
fn test_other_digits_leave_size_unchanged() {
    let mut engine = create_test_engine();
    engine.on_key_press(Key::Char('4'));

    for c in ['0', '6', '7', '8', '9', 'x', '!'] {
        engine.on_key_press(Key::Char(c));
        assert_eq!(engine.tool_state().size, size(4), "key {c:?}");
    }
}

#[test]
fn test_shifted_digit_code_sets_size() {
    let mut engine = create_test_engine();
    for (label, code, expected) in [
        ('!', 49, 1),
        ('@', 50, 2),
        ('#', 51, 3),
        ('$', 52, 4),
        ('%', 53, 5),
    ] {
        engine.on_key_event(Key::Char(label), Some(code));
        assert_eq!(engine.tool_state().size, size(expected), "key {label:?}");
    }
    assert_eq!(engine.unrecognized_key_count(), 0);
}

#[test]
fn test_label_binding_wins_over_key_code() {
    let mut engine = create_test_engine();
    engine.on_key_event(Key::Char('r'), Some(49));
    assert_eq!(engine.tool_state().color, PaletteColor::Red);
    assert_eq!(engine.tool_state().size, size(1));

    engine.on_key_event(Key::Char('4'), Some(52));
    engine.on_key_event(Key::Char('g'), Some(50));
    assert_eq!(engine.tool_state().size, size(4));
}

#[test]
fn test_non_digit_code_is_unrecognized() {
    let mut engine = create_test_engine();
    engine.on_key_event(Key::Char('^'), Some(54));
    engine.on_key_event(Key::Char(')'), Some(48));
    engine.on_key_event(Key::Unknown, None);
    assert_eq!(engine.tool_state(), ToolState::default());
    assert_eq!(engine.unrecognized_key_count(), 3);
}

#[test]
fn test_mode_keys_toggle_mode() {
    let mut engine = create_test_engine();
    engine.on_key_press(Key::Char('s'));
    assert_eq!(engine.tool_state().mode, DrawMode::Solid);
    engine.on_key_press(Key::Char('d'));
    assert_eq!(engine.tool_state().mode, DrawMode::Dotted);
}

#[test]
fn test_fields_vary_independently() {
    let mut engine = create_test_engine();
    press_keys(&mut engine, "b5s");
    press_keys(&mut engine, "2");

    let tool = engine.tool_state();
    assert_eq!(tool.color, PaletteColor::Blue);
    assert_eq!(tool.size, size(2));
    assert_eq!(tool.mode, DrawMode::Solid);
}

#[test]
fn test_unrecognized_key_changes_nothing() {
    let mut engine = create_test_engine();
    press_keys(&mut engine, "g3s");
    let before = engine.tool_state();

    engine.on_key_press(Key::Char('x'));

    assert_eq!(engine.tool_state(), before);
    assert_eq!(engine.unrecognized_key_count(), 1);
    assert!(engine.surface().calls().is_empty());
}

#[test]
fn test_named_and_unknown_keys_are_unrecognized_by_default() {
    let mut engine = create_test_engine();
    engine.on_key_press(Key::Escape);
    engine.on_key_press(Key::Unknown);
    engine.on_key_press(Key::Space);
    assert_eq!(engine.unrecognized_key_count(), 3);
    assert_eq!(engine.tool_state(), ToolState::default());
}

#[test]
fn test_clear_key_repaints_white() {
    let mut engine = create_test_engine();
    engine.on_key_press(Key::Char('c'));
    assert_eq!(engine.surface().calls(), &[DrawCall::SetBackground(WHITE)]);
}

#[test]
fn test_save_key_requests_screenshot_jpg() {
    let mut engine = create_test_engine();
    engine.on_key_press(Key::Char('v'));
    assert_eq!(
        engine.surface().calls(),
        &[DrawCall::SaveImage {
            filename: "Screenshot".to_string(),
            format: ImageFormat::Jpg,
        }]
    );
}

#[test]
fn test_failed_export_is_not_fatal() {
    let surface = RecordingSurface::new(100, 100).failing_exports();
    let mut engine = DrawingEngine::new(surface, EngineSettings::default());
    press_keys(&mut engine, "vr");
    assert_eq!(engine.tool_state().color, PaletteColor::Red);
    assert_eq!(engine.unrecognized_key_count(), 0);
}

#[test]
fn test_custom_keybindings_replace_defaults() {
    let mut config = Config::default();
    config.keybindings.clear_canvas = vec!["x".to_string()];
    config.keybindings.set_color_red = vec!["1".to_string()];
    config.keybindings.set_size_1 = vec!["q".to_string()];

    let mut engine = DrawingEngine::from_config(RecordingSurface::new(50, 50), &config);
    engine.surface_mut().take_calls();

    press_keys(&mut engine, "3x1");
    assert_eq!(engine.tool_state().color, PaletteColor::Red);
    assert_eq!(engine.tool_state().size, size(3));
    assert_eq!(engine.surface().calls(), &[DrawCall::SetBackground(WHITE)]);

    engine.on_key_press(Key::Char('c'));
    assert_eq!(engine.unrecognized_key_count(), 1);
}

#[test]
fn test_dotted_drag_draws_circle_at_current_point() {
    let mut engine = create_test_engine();
    press_keys(&mut engine, "r2");

    engine.on_pointer_drag(Point::new(5.0, 5.0), Point::new(30.0, 40.0), true);

    assert_eq!(
        engine.surface().calls(),
        &[DrawCall::FilledCircle {
            x: 30.0,
            y: 40.0,
            diameter: 8.0,
            color: RED,
        }]
    );
}

#[test]
fn test_solid_drag_draws_segment_from_previous_point() {
    let mut engine = create_test_engine();
    press_keys(&mut engine, "b5s");

    engine.on_pointer_drag(Point::new(5.0, 6.0), Point::new(30.0, 40.0), true);

    assert_eq!(
        engine.surface().calls(),
        &[DrawCall::Line {
            x1: 5.0,
            y1: 6.0,
            x2: 30.0,
            y2: 40.0,
            width: 5.0,
            color: BLUE,
        }]
    );
}

#[test]
fn test_out_of_bounds_drag_is_noop() {
    let mut engine = create_test_engine();
    engine.on_pointer_drag(Point::new(10.0, 10.0), Point::new(600.0, 10.0), false);
    press_keys(&mut engine, "s");
    engine.on_pointer_drag(Point::new(10.0, 10.0), Point::new(600.0, 10.0), false);
    assert!(engine.surface().calls().is_empty());
}

#[test]
fn test_drag_size_sweep() {
    for value in 1..=5u8 {
        let mut engine = create_test_engine();
        engine.on_key_press(Key::Char((b'0' + value) as char));
        engine.on_pointer_drag(Point::new(1.0, 1.0), Point::new(2.0, 2.0), true);
        match engine.surface().calls() {
            [DrawCall::FilledCircle { diameter, .. }] => {
                assert_eq!(*diameter, 4.0 * value as f64);
            }
            other => panic!("unexpected calls {other:?}"),
        }
    }
}

#[test]
fn test_mouse_motion_requires_left_button() {
    let mut engine = create_test_engine();
    engine.on_mouse_motion(Point::new(10.0, 10.0));
    engine.on_mouse_press(MouseButton::Right, Point::new(10.0, 10.0));
    engine.on_mouse_motion(Point::new(20.0, 20.0));
    assert!(engine.surface().calls().is_empty());
}

#[test]
fn test_mouse_trail_connects_samples_in_solid_mode() {
    let mut engine = create_test_engine();
    press_keys(&mut engine, "gs");

    engine.on_mouse_press(MouseButton::Left, Point::new(10.0, 10.0));
    engine.on_mouse_motion(Point::new(20.0, 15.0));
    engine.on_mouse_motion(Point::new(30.0, 25.0));
    engine.on_mouse_release(MouseButton::Left);
    engine.on_mouse_motion(Point::new(40.0, 40.0));

    let segments: Vec<_> = engine
        .surface()
        .calls()
        .iter()
        .map(|call| match call {
            DrawCall::Line {
                x1, y1, x2, y2, color, ..
            } => {
                assert_eq!(*color, GREEN);
                (*x1, *y1, *x2, *y2)
            }
            other => panic!("unexpected call {other:?}"),
        })
        .collect();
    assert_eq!(segments, [(10.0, 10.0, 20.0, 15.0), (20.0, 15.0, 30.0, 25.0)]);
}

#[test]
fn test_mouse_motion_outside_surface_draws_nothing() {
    let mut engine = create_test_engine();
    engine.on_mouse_press(MouseButton::Left, Point::new(490.0, 10.0));
    engine.on_mouse_motion(Point::new(500.0, 10.0));
    engine.on_mouse_motion(Point::new(520.0, 10.0));
    engine.on_mouse_motion(Point::new(250.0, 0.0));
    assert!(engine.surface().calls().is_empty());

    engine.on_mouse_motion(Point::new(250.0, 1.0));
    assert_eq!(engine.surface().calls().len(), 1);
}

#[test]
fn test_render_frame_is_wrapped_in_save_restore() {
    let mut engine = create_test_engine();
    engine.render_frame();

    let calls = engine.surface().calls();
    assert_eq!(calls.first(), Some(&DrawCall::Save));
    assert_eq!(calls.last(), Some(&DrawCall::Restore));
    assert_eq!(engine.surface().save_depth(), 0);
}

#[test]
fn test_render_frame_shows_current_tool() {
    let mut engine = create_test_engine();
    press_keys(&mut engine, "b4s");
    engine.render_frame();

    let texts: Vec<_> = engine
        .surface()
        .calls()
        .iter()
        .filter_map(|call| match call {
            DrawCall::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(texts, ["Color: Blue", "Weight: 4", "Mode: Solid"]);
}

#[test]
fn test_render_frame_does_not_change_stroke_parameters() {
    let mut engine = create_test_engine();
    press_keys(&mut engine, "r3");
    engine.render_frame();
    engine.surface_mut().take_calls();

    engine.on_pointer_drag(Point::new(1.0, 1.0), Point::new(50.0, 50.0), true);
    assert_eq!(
        engine.surface().calls(),
        &[DrawCall::FilledCircle {
            x: 50.0,
            y: 50.0,
            diameter: 12.0,
            color: RED,
        }]
    );
}

#[test]
fn test_resize_caps_width_and_keeps_height() {
    let mut engine = create_test_engine();

    engine.on_resize(320);
    assert_eq!(engine.surface().width(), 320);
    assert_eq!(engine.surface().height(), 500);

    engine.on_resize(1200);
    assert_eq!(engine.surface().width(), 500);

    assert_eq!(
        engine.surface().calls(),
        &[
            DrawCall::Resize {
                width: 320,
                height: 500
            },
            DrawCall::Resize {
                width: 500,
                height: 500
            },
        ]
    );
}

#[test]
fn test_resize_erases_painted_panel_first() {
    let mut engine = create_test_engine();
    engine.on_resize(320);
    engine.render_frame();
    engine.surface_mut().take_calls();

    engine.on_resize(500);

    let calls = engine.surface().calls();
    assert_eq!(calls.len(), 4);
    assert_eq!(calls[0], DrawCall::Save);
    assert!(matches!(
        calls[1],
        DrawCall::RoundedRect { x, fill, outline: None, .. } if x == 198.5 && fill == WHITE
    ));
    assert_eq!(calls[2], DrawCall::Restore);
    assert_eq!(
        calls[3],
        DrawCall::Resize {
            width: 500,
            height: 500
        }
    );

    // Nothing left to erase on the next resize.
    engine.surface_mut().take_calls();
    engine.on_resize(400);
    assert_eq!(
        engine.surface().calls(),
        &[DrawCall::Resize {
            width: 400,
            height: 500
        }]
    );
}

#[test]
fn test_clear_forgets_painted_panel() {
    let mut engine = create_test_engine();
    engine.render_frame();
    engine.on_key_press(Key::Char('c'));
    engine.surface_mut().take_calls();

    engine.on_resize(300);
    assert_eq!(
        engine.surface().calls(),
        &[DrawCall::Resize {
            width: 300,
            height: 500
        }]
    );
}

#[test]
fn test_resize_to_same_size_is_noop() {
    let mut engine = create_test_engine();
    engine.on_resize(500);
    engine.on_resize(9000);
    assert!(engine.surface().calls().is_empty());
}

#[test]
fn test_zero_container_width_yields_one_unit_canvas() {
    let mut engine = create_test_engine();
    engine.on_resize(0);
    assert_eq!(engine.surface().width(), 1);
}

#[test]
fn test_resize_keeps_tool_state() {
    let mut engine = create_test_engine();
    press_keys(&mut engine, "g2s");
    engine.on_resize(200);
    assert_eq!(
        engine.tool_state(),
        ToolState {
            color: PaletteColor::Green,
            size: size(2),
            mode: DrawMode::Solid,
        }
    );
}

#[test]
fn test_dispose_returns_surface() {
    let mut engine = create_test_engine();
    engine.on_pointer_drag(Point::new(1.0, 1.0), Point::new(2.0, 2.0), true);
    let surface = engine.dispose();
    assert_eq!(surface.calls().len(), 1);
}
