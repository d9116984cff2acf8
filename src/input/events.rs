//! Generic input event types delivered by a host.

use crate::util::Point;

/// Generic key representation for cross-backend compatibility.
///
/// Hosts map their native key codes to these values before handing them to
/// the drawing engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Escape key
    Escape,
    /// Return/Enter key
    Return,
    /// Backspace key
    Backspace,
    /// Tab key
    Tab,
    /// Space bar
    Space,
    /// Unmapped or unrecognized key
    Unknown,
}

impl Key {
    /// Parses a host key label such as `r`, `3`, `Escape` or `Space`.
    pub fn from_label(label: &str) -> Self {
        let mut chars = label.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Key::Char(c);
        }

        match label.to_ascii_lowercase().as_str() {
            "escape" | "esc" => Key::Escape,
            "return" | "enter" => Key::Return,
            "backspace" => Key::Backspace,
            "tab" => Key::Tab,
            "space" => Key::Space,
            _ => Key::Unknown,
        }
    }

    /// Label used for keybinding lookup, `None` for [`Key::Unknown`].
    pub fn label(&self) -> Option<String> {
        match self {
            Key::Char(' ') | Key::Space => Some("Space".to_string()),
            Key::Char(c) => Some(c.to_string()),
            Key::Escape => Some("Escape".to_string()),
            Key::Return => Some("Return".to_string()),
            Key::Backspace => Some("Backspace".to_string()),
            Key::Tab => Some("Tab".to_string()),
            Key::Unknown => None,
        }
    }
}

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left mouse button (the only drawing button)
    Left,
    Right,
    Middle,
}

/// One event from the input source, in delivery order.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A key was pressed. `code` is the host's numeric key code, if known.
    Key { key: Key, code: Option<u32> },
    /// A pointer button went down.
    Press { button: MouseButton, position: Point },
    /// The pointer moved.
    Motion(Point),
    /// A pointer button went up.
    Release(MouseButton),
    /// A drag sample whose bounds check was already done by the host.
    Drag {
        from: Point,
        to: Point,
        within_bounds: bool,
    },
    /// The hosting container changed width.
    Resize { container_width: u32 },
    /// One display refresh.
    Frame,
}

impl InputEvent {
    /// A key press without a numeric code.
    pub fn key(key: Key) -> Self {
        InputEvent::Key { key, code: None }
    }
}
