//! Selection, keyboard focus and the current text color.

use crate::color::{Palette, TextColor};
use crate::element::ElementId;
use crate::registry::ElementRegistry;

/// Tracks the current color, the active palette swatch and which element's
/// text area holds keyboard focus. The selection slot itself lives in the
/// [`ElementRegistry`]; this controller is the only code that changes it
/// outside of a drag start.
#[derive(Debug, Clone)]
pub struct SelectionController {
    current_color: TextColor,
    palette: Palette,
    /// Swatch highlighted for `current_color`.
    active_swatch: Option<usize>,
    /// Element whose text area has keyboard focus.
    focused: Option<ElementId>,
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new(Palette::default(), TextColor::default())
    }
}

impl SelectionController {
    pub fn new(palette: Palette, initial_color: TextColor) -> Self {
        let active_swatch = palette.active_index(&initial_color);
        Self {
            current_color: initial_color,
            palette,
            active_swatch,
            focused: None,
        }
    }

    pub fn current_color(&self) -> &TextColor {
        &self.current_color
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Index of the highlighted palette swatch, if the current color is in
    /// the palette.
    pub fn active_swatch(&self) -> Option<usize> {
        self.active_swatch
    }

    /// Change the current color.
    ///
    /// The selected element (if any) gets the new text color and keyboard
    /// focus. Unselected elements keep whatever color they had.
    pub fn set_color(&mut self, color: TextColor, registry: &mut ElementRegistry) {
        self.active_swatch = self.palette.active_index(&color);
        self.current_color = color;
        log::debug!("Current color set to {}", self.current_color);

        if let Some(id) = registry.selected() {
            if let Some(element) = registry.get_mut(id) {
                element.color = Some(self.current_color.clone());
            }
            self.focused = Some(id);
        }
    }

    /// Change the selection. `None` deselects everything.
    pub fn select_element(&mut self, id: Option<ElementId>, registry: &mut ElementRegistry) {
        if registry.selected() != id {
            log::debug!("Selection changed: {:?} -> {:?}", registry.selected(), id);
        }
        registry.select(id);
    }

    /// Text area of `id` received focus.
    pub fn focus_text(&mut self, id: ElementId, registry: &mut ElementRegistry) {
        if registry.get(id).is_none() {
            log::warn!("Cannot focus unknown element {id}");
            return;
        }
        self.select_element(Some(id), registry);
        self.focused = Some(id);
    }

    /// Text area of `id` was clicked.
    ///
    /// An element that has never had a color written inherits the current
    /// color here, once.
    pub fn click_text(&mut self, id: ElementId, registry: &mut ElementRegistry) {
        self.select_element(Some(id), registry);
        if let Some(element) = registry.get_mut(id) {
            if element.color.is_none() {
                element.color = Some(self.current_color.clone());
            }
        }
    }

    /// Keyboard focus leaves any text area.
    pub fn blur(&mut self) {
        self.focused = None;
    }

    pub fn focused(&self) -> Option<ElementId> {
        self.focused
    }

    /// Whether keyboard input is going into a text area.
    pub fn is_editing(&self) -> bool {
        self.focused.is_some()
    }
}
