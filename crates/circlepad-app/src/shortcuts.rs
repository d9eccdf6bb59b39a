//! Keyboard shortcuts and script commands, for the usage screen.

/// A documented key or command.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: &'static str,
    pub description: &'static str,
}

impl Shortcut {
    pub const fn new(key: &'static str, description: &'static str) -> Self {
        Self { key, description }
    }
}

/// Registry of keys the surface reacts to and the script commands that
/// drive it.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Keys handled by the global key handler.
    pub fn keys() -> Vec<Shortcut> {
        vec![
            Shortcut::new("Delete", "Clear selected element text (when not typing)"),
            Shortcut::new("Backspace", "Clear selected element text (when not typing)"),
        ]
    }

    /// Script command types.
    pub fn commands() -> Vec<Shortcut> {
        vec![
            Shortcut::new("add", "Add an element and start typing in it"),
            Shortcut::new("insert", "Place an unselected element at {\"x\", \"y\"}"),
            Shortcut::new("erase", "Clear the selected element's text"),
            Shortcut::new("clear_all", "Clear all text and deselect"),
            Shortcut::new("set_color", "Pick a color: {\"color\": \"#rrggbb\"}"),
            Shortcut::new("set_swatch", "Pick a palette color by name: {\"name\": \"Red\"}"),
            Shortcut::new("pointer_down", "Press at {\"x\", \"y\"} (client coordinates)"),
            Shortcut::new("pointer_move", "Move to {\"x\", \"y\"}"),
            Shortcut::new("pointer_up", "Release at {\"x\", \"y\"}"),
            Shortcut::new("key", "Press a key: {\"key\": \"Delete\"}"),
            Shortcut::new("type_text", "Type into the focused element: {\"text\": \"..\"}"),
            Shortcut::new("focus", "Focus element text by insertion index"),
            Shortcut::new("click", "Click element text by insertion index"),
            Shortcut::new("blur", "Move keyboard focus off the surface"),
            Shortcut::new("resize", "Resize the surface: {\"width\", \"height\"}"),
        ]
    }

    /// Key and command listing shown after the `--help` options.
    pub fn help_text() -> String {
        let mut text = String::from("Keys:\n");
        for shortcut in Self::keys() {
            text.push_str(&format!("  {:14} {}\n", shortcut.key, shortcut.description));
        }
        text.push_str("\nScript commands:\n");
        for shortcut in Self::commands() {
            text.push_str(&format!("  {:14} {}\n", shortcut.key, shortcut.description));
        }
        text
    }
}
