//! Line-oriented event scripts for the headless host.
//!
//! Each non-empty line holds one event:
//!
//! ```text
//! # comment
//! key r
//! key ! 49
//! press 10 10
//! move 20 20
//! release
//! drag 10 10 20 20
//! resize 320
//! frame
//! ```
//!
//! `key` takes an optional numeric key code after the label. Pointer commands
//! always use the left button. A `drag` line produces a sample flagged as in
//! bounds; the host checks it against the surface when it is dispatched.

use crate::input::{InputEvent, Key, MouseButton};
use crate::util::Point;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading an event script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: '{command}' expects {expected} argument(s), got {found}")]
    ArgumentCount {
        line: usize,
        command: String,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: invalid number '{value}'")]
    InvalidNumber { line: usize, value: String },

    #[error("Failed to read script: {0}")]
    Io(#[from] std::io::Error),
}

/// Parses a whole script into events, in file order.
pub fn parse_script(source: &str) -> Result<Vec<InputEvent>, ScriptError> {
    let mut events = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        if let Some(event) = parse_line(raw, index + 1)? {
            events.push(event);
        }
    }
    Ok(events)
}

/// Reads and parses a script file.
pub fn load_script(path: &Path) -> Result<Vec<InputEvent>, ScriptError> {
    let source = std::fs::read_to_string(path)?;
    parse_script(&source)
}

/// Parses one line; `None` for blank lines and comments.
pub fn parse_line(raw: &str, line: usize) -> Result<Option<InputEvent>, ScriptError> {
    let content = raw.split('#').next().unwrap_or_default().trim();
    let mut tokens = content.split_whitespace();
    let Some(command) = tokens.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = tokens.collect();

    let expect = |expected: usize| -> Result<(), ScriptError> {
        if args.len() == expected {
            Ok(())
        } else {
            Err(ScriptError::ArgumentCount {
                line,
                command: command.to_string(),
                expected,
                found: args.len(),
            })
        }
    };

    let event = match command.to_ascii_lowercase().as_str() {
        "key" => {
            if args.len() != 2 {
                expect(1)?;
            }
            let code = match args.get(1) {
                Some(value) => Some(value.parse::<u32>().map_err(|_| {
                    ScriptError::InvalidNumber {
                        line,
                        value: value.to_string(),
                    }
                })?),
                None => None,
            };
            InputEvent::Key {
                key: Key::from_label(args[0]),
                code,
            }
        }
        "press" => {
            expect(2)?;
            InputEvent::Press {
                button: MouseButton::Left,
                position: parse_point(&args, line)?,
            }
        }
        "move" => {
            expect(2)?;
            InputEvent::Motion(parse_point(&args, line)?)
        }
        "release" => {
            expect(0)?;
            InputEvent::Release(MouseButton::Left)
        }
        "drag" => {
            expect(4)?;
            InputEvent::Drag {
                from: parse_point(&args[..2], line)?,
                to: parse_point(&args[2..], line)?,
                within_bounds: true,
            }
        }
        "resize" => {
            expect(1)?;
            let container_width = args[0]
                .parse::<u32>()
                .map_err(|_| ScriptError::InvalidNumber {
                    line,
                    value: args[0].to_string(),
                })?;
            InputEvent::Resize { container_width }
        }
        "frame" => {
            expect(0)?;
            InputEvent::Frame
        }
        _ => {
            return Err(ScriptError::UnknownCommand {
                line,
                command: command.to_string(),
            });
        }
    };

    Ok(Some(event))
}

fn parse_point(args: &[&str], line: usize) -> Result<Point, ScriptError> {
    let coord = |value: &str| {
        value
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ScriptError::InvalidNumber {
                line,
                value: value.to_string(),
            })
    };
    Ok(Point::new(coord(args[0])?, coord(args[1])?))
}
