//! Scripted input: a JSON list of commands replayed against a surface.

use circlepad_core::{ConfigError, ElementId, KeyEvent, PointerEvent, Surface, TextColor};
use kurbo::{Point, Size};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Script errors.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Step {step}: no palette swatch named '{name}'")]
    UnknownSwatch { step: usize, name: String },
    #[error("Step {step}: no element at index {index}")]
    UnknownElement { step: usize, index: usize },
}

/// Result type for script operations.
pub type ScriptResult<T> = Result<T, ScriptError>;

/// One scripted step. Elements are addressed by insertion index.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    Add,
    /// Place an element at a pixel offset without selecting or coloring it.
    Insert { x: f64, y: f64 },
    Erase,
    ClearAll,
    SetColor { color: TextColor },
    SetSwatch { name: String },
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp { x: f64, y: f64 },
    Key { key: String },
    TypeText { text: String },
    Focus { index: usize },
    Click { index: usize },
    Blur,
    Resize { width: f64, height: f64 },
}

/// Read a script from a file, or from stdin when `path` is `-`.
pub fn load_script(path: &Path) -> ScriptResult<Vec<Command>> {
    let json = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };
    Ok(serde_json::from_str(&json)?)
}

/// Apply every command in order. Stops at the first invalid step.
pub fn run_script(surface: &mut Surface, commands: &[Command]) -> ScriptResult<()> {
    for (step, command) in commands.iter().enumerate() {
        log::debug!("Step {step}: {command:?}");
        apply(surface, step, command)?;
    }
    Ok(())
}

fn element_at_index(surface: &Surface, step: usize, index: usize) -> ScriptResult<ElementId> {
    surface
        .registry()
        .iter()
        .nth(index)
        .map(|e| e.id())
        .ok_or(ScriptError::UnknownElement { step, index })
}

fn apply(surface: &mut Surface, step: usize, command: &Command) -> ScriptResult<()> {
    match command {
        Command::Add => {
            surface.add_element();
        }
        Command::Insert { x, y } => {
            surface.insert_element_at(Point::new(*x, *y));
        }
        Command::Erase => surface.erase(),
        Command::ClearAll => surface.clear_all(),
        Command::SetColor { color } => surface.set_color(color.clone()),
        Command::SetSwatch { name } => {
            let color = surface
                .selection()
                .palette()
                .by_name(name)
                .map(|s| s.color.clone())
                .ok_or_else(|| ScriptError::UnknownSwatch {
                    step,
                    name: name.clone(),
                })?;
            surface.set_color(color);
        }
        Command::PointerDown { x, y } => surface.handle_pointer_event(PointerEvent::Down {
            position: Point::new(*x, *y),
        }),
        Command::PointerMove { x, y } => surface.handle_pointer_event(PointerEvent::Move {
            position: Point::new(*x, *y),
        }),
        Command::PointerUp { x, y } => surface.handle_pointer_event(PointerEvent::Up {
            position: Point::new(*x, *y),
        }),
        Command::Key { key } => {
            surface.handle_key_event(&KeyEvent::Pressed(key.clone()));
        }
        Command::TypeText { text } => surface.type_text(text),
        Command::Focus { index } => {
            let id = element_at_index(surface, step, *index)?;
            surface.focus_text(id);
        }
        Command::Click { index } => {
            let id = element_at_index(surface, step, *index)?;
            surface.focus_text(id);
            surface.click_text(id);
        }
        Command::Blur => surface.blur(),
        Command::Resize { width, height } => surface.resize(Size::new(*width, *height)),
    }
    Ok(())
}
