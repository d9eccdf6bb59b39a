//! The surface: owns all elements and routes commands and input events.

use crate::color::TextColor;
use crate::config::SurfaceConfig;
use crate::drag::DragController;
use crate::element::{Anchor, ElementId, HitRegion};
use crate::geometry::SurfaceBounds;
use crate::input::{KeyEvent, PointerEvent};
use crate::registry::ElementRegistry;
use crate::selection::SelectionController;
use kurbo::{Point, Size};
use serde::Serialize;

/// Runtime state of one annotation surface (not persisted).
///
/// All mutation goes through `&mut self`; the selection slot and the current
/// color have no other writers.
#[derive(Debug, Clone)]
pub struct Surface {
    bounds: SurfaceBounds,
    element_size: Size,
    spawn_anchor: Anchor,
    registry: ElementRegistry,
    selection: SelectionController,
    drag: DragController,
}

impl Default for Surface {
    fn default() -> Self {
        Self::new(&SurfaceConfig::default())
    }
}

impl Surface {
    /// Create a surface from a config, placing any configured elements.
    ///
    /// Configured elements start unselected and without a text color; they
    /// answer handle drags and text clicks exactly like added ones.
    pub fn new(config: &SurfaceConfig) -> Self {
        let mut surface = Self {
            bounds: SurfaceBounds::new(
                Point::new(config.origin_x, config.origin_y),
                config.surface_size(),
            ),
            element_size: config.element_size(),
            spawn_anchor: config.spawn_anchor(),
            registry: ElementRegistry::new(),
            selection: SelectionController::new(
                config.palette.clone(),
                config.default_color.clone(),
            ),
            drag: DragController::new(),
        };
        for &position in &config.elements {
            surface.insert_element_at(position);
        }
        surface
    }

    pub fn bounds(&self) -> &SurfaceBounds {
        &self.bounds
    }

    /// Change the surface size. Elements are not re-clamped until they are
    /// next dragged.
    pub fn resize(&mut self, size: Size) {
        self.bounds.size = size;
    }

    /// Move the surface within client coordinates.
    pub fn set_origin(&mut self, origin: Point) {
        self.bounds.origin = origin;
    }

    pub fn registry(&self) -> &ElementRegistry {
        &self.registry
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    pub fn selected(&self) -> Option<ElementId> {
        self.registry.selected()
    }

    pub fn current_color(&self) -> &TextColor {
        self.selection.current_color()
    }

    /// Add an element at the spawn anchor.
    ///
    /// The new element is selected, gets the current color and takes
    /// keyboard focus. It responds to handle drags like any other element.
    pub fn add_element(&mut self) -> ElementId {
        let color = self.selection.current_color().clone();
        let id = self
            .registry
            .create_element(self.spawn_anchor, self.element_size, Some(color));
        self.selection.select_element(Some(id), &mut self.registry);
        self.selection.focus_text(id, &mut self.registry);
        log::info!("Added element {id}");
        id
    }

    /// Add an element at a pixel offset. Used for restoring or scripting
    /// layouts; does not select it.
    pub fn insert_element_at(&mut self, position: Point) -> ElementId {
        self.registry
            .create_element(Anchor::pixels(position), self.element_size, None)
    }

    /// Clear the selected element's text and give it focus. No-op without a
    /// selection.
    pub fn erase(&mut self) {
        let Some(id) = self.registry.selected() else {
            return;
        };
        self.registry.clear_text(id);
        self.selection.focus_text(id, &mut self.registry);
        log::debug!("Erased element {id}");
    }

    /// Clear every element's text and deselect. Elements are kept.
    pub fn clear_all(&mut self) {
        self.registry.clear_all_text();
        log::info!("Cleared {} elements", self.registry.len());
    }

    /// Pick a palette color.
    pub fn set_color(&mut self, color: TextColor) {
        self.selection.set_color(color, &mut self.registry);
    }

    pub fn select(&mut self, id: Option<ElementId>) {
        self.selection.select_element(id, &mut self.registry);
    }

    pub fn focus_text(&mut self, id: ElementId) {
        self.selection.focus_text(id, &mut self.registry);
    }

    pub fn click_text(&mut self, id: ElementId) {
        self.selection.click_text(id, &mut self.registry);
    }

    pub fn blur(&mut self) {
        self.selection.blur();
    }

    /// Insert typed text into the focused element. Ignored without focus.
    pub fn type_text(&mut self, text: &str) {
        let Some(id) = self.selection.focused() else {
            return;
        };
        if let Some(element) = self.registry.get_mut(id) {
            element.text.push_str(text);
        }
    }

    /// Global key handler.
    ///
    /// A delete-class key clears the selected element's text, unless a text
    /// area is being edited: then Backspace edits the focused text and the
    /// global action is suppressed. Returns true if any text changed.
    pub fn handle_key_event(&mut self, event: &KeyEvent) -> bool {
        if !event.is_delete_press() {
            return false;
        }

        if let Some(id) = self.selection.focused() {
            if matches!(event, KeyEvent::Pressed(key) if key == "Backspace") {
                return self
                    .registry
                    .get_mut(id)
                    .is_some_and(|e| e.text.pop().is_some());
            }
            return false;
        }

        let Some(id) = self.registry.selected() else {
            return false;
        };
        self.registry.clear_text(id);
        log::debug!("Delete key cleared element {id}");
        true
    }

    /// Route a pointer event (client coordinates).
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { position } => self.pointer_down(position),
            PointerEvent::Move { position } => {
                self.drag
                    .update(position, &mut self.registry, &self.bounds);
            }
            PointerEvent::Up { .. } => {
                self.drag.end();
            }
        }
    }

    fn pointer_down(&mut self, position: Point) {
        // A press always starts a fresh gesture.
        self.drag.end();

        let local = self.bounds.to_local(position);
        match self.registry.element_at(local, self.bounds.size) {
            // Handle presses keep the current text focus.
            Some((id, HitRegion::Handle)) => {
                self.drag
                    .begin(id, position, &mut self.registry, &self.bounds);
            }
            Some((id, HitRegion::Text)) => {
                self.focus_text(id);
                self.click_text(id);
            }
            None => {
                if self.bounds.client_rect().contains(position) {
                    self.select(None);
                }
                self.blur();
            }
        }
    }

    /// Palette entries with the highlight derived from the current color.
    fn swatch_snapshots(&self) -> Vec<SwatchSnapshot> {
        let palette = self.selection.palette();
        let current = self.selection.current_color();
        palette
            .swatches()
            .iter()
            .enumerate()
            .map(|(index, swatch)| SwatchSnapshot {
                name: swatch.name.clone(),
                color: swatch.color.clone(),
                active: palette.is_active(index, current),
            })
            .collect()
    }

    /// Serializable view of the current state.
    pub fn snapshot(&self) -> SurfaceSnapshot {
        let size = self.bounds.size;
        SurfaceSnapshot {
            width: size.width,
            height: size.height,
            current_color: self.selection.current_color().clone(),
            active_swatch: self.selection.active_swatch(),
            palette: self.swatch_snapshots(),
            selected: self.registry.selected(),
            focused: self.selection.focused(),
            dragging: self.drag.session().map(|s| s.element),
            elements: self
                .registry
                .iter()
                .map(|e| {
                    let position = e.position(size);
                    ElementSnapshot {
                        id: e.id(),
                        x: position.x,
                        y: position.y,
                        width: e.size.width,
                        height: e.size.height,
                        text: e.text.clone(),
                        color: e.color.clone(),
                        selected: self.registry.is_selected(e.id()),
                    }
                })
                .collect(),
        }
    }
}

/// Point-in-time view of a surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurfaceSnapshot {
    pub width: f64,
    pub height: f64,
    pub current_color: TextColor,
    pub active_swatch: Option<usize>,
    pub palette: Vec<SwatchSnapshot>,
    pub selected: Option<ElementId>,
    pub focused: Option<ElementId>,
    pub dragging: Option<ElementId>,
    pub elements: Vec<ElementSnapshot>,
}

/// One palette entry and whether it shows as active.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwatchSnapshot {
    pub name: String,
    pub color: TextColor,
    pub active: bool,
}

/// Point-in-time view of one element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementSnapshot {
    pub id: ElementId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub text: String,
    pub color: Option<TextColor>,
    pub selected: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> Surface {
        Surface::new(&SurfaceConfig {
            width: 800.0,
            height: 600.0,
            element_diameter: 100.0,
            ..SurfaceConfig::default()
        })
    }

    fn color(hex: &str) -> TextColor {
        TextColor::parse(hex).unwrap()
    }

    fn key(name: &str) -> KeyEvent {
        KeyEvent::Pressed(name.to_string())
    }

    fn down(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Down {
            position: Point::new(x, y),
        }
    }

    fn mv(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Move {
            position: Point::new(x, y),
        }
    }

    fn up(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Up {
            position: Point::new(x, y),
        }
    }

    #[test]
    fn test_add_element_selects_colors_and_focuses() {
        let mut surface = surface();
        surface.set_color(color("#3b82f6"));

        let id = surface.add_element();

        assert_eq!(surface.selected(), Some(id));
        assert_eq!(surface.selection().focused(), Some(id));
        let element = surface.registry().get(id).unwrap();
        assert_eq!(element.color, Some(color("#3b82f6")));
        assert!(element.text.is_empty());
        let pos = element.position(surface.bounds().size);
        assert!((pos.x - 360.0).abs() < 1e-9);
        assert!((pos.y - 330.0).abs() < 1e-9);
    }

    #[test]
    fn test_type_with_color_scenario() {
        let mut surface = surface();
        let e1 = surface.insert_element_at(Point::new(100.0, 100.0));

        surface.focus_text(e1);
        surface.set_color(color("#ff0000"));
        surface.type_text("hi");

        let element = surface.registry().get(e1).unwrap();
        assert_eq!(element.text, "hi");
        assert_eq!(element.color, Some(color("#ff0000")));
    }

    #[test]
    fn test_drag_scenario() {
        let mut surface = surface();
        let e1 = surface.insert_element_at(Point::new(100.0, 100.0));
        surface.blur();

        // Start the drag on E1's handle; origin of the gesture is then (190, 190).
        surface.handle_pointer_event(down(190.0, 190.0));
        assert_eq!(surface.selected(), Some(e1));
        assert!(surface.drag().is_dragging());

        surface.handle_pointer_event(mv(210.0, 180.0));
        assert_eq!(
            surface.registry().get(e1).unwrap().position(surface.bounds().size),
            Point::new(120.0, 90.0)
        );

        // Release outside the surface still ends the drag.
        surface.handle_pointer_event(up(5000.0, -300.0));
        assert!(!surface.drag().is_dragging());

        surface.handle_pointer_event(mv(400.0, 400.0));
        assert_eq!(
            surface.registry().get(e1).unwrap().position(surface.bounds().size),
            Point::new(120.0, 90.0)
        );
    }

    #[test]
    fn test_drag_clamps_to_surface() {
        let mut surface = surface();
        let e1 = surface.insert_element_at(Point::new(100.0, 100.0));

        surface.handle_pointer_event(down(195.0, 195.0));
        surface.handle_pointer_event(mv(10_000.0, -10_000.0));

        let pos = surface.registry().get(e1).unwrap().position(surface.bounds().size);
        assert_eq!(pos, Point::new(700.0, 0.0));
    }

    #[test]
    fn test_drag_with_offset_surface() {
        let mut surface = surface();
        surface.set_origin(Point::new(50.0, 20.0));
        let e1 = surface.insert_element_at(Point::new(100.0, 100.0));

        // Handle in client coordinates: (50 + 190, 20 + 190).
        surface.handle_pointer_event(down(240.0, 210.0));
        surface.handle_pointer_event(mv(250.0, 230.0));

        let pos = surface.registry().get(e1).unwrap().position(surface.bounds().size);
        assert_eq!(pos, Point::new(110.0, 120.0));
    }

    #[test]
    fn test_handle_press_keeps_focus() {
        let mut surface = surface();
        let first = surface.add_element();
        let second = surface.insert_element_at(Point::new(0.0, 0.0));

        surface.handle_pointer_event(down(95.0, 95.0));

        assert_eq!(surface.selected(), Some(second));
        assert_eq!(surface.selection().focused(), Some(first));
    }

    #[test]
    fn test_text_press_focuses_and_seeds_color() {
        let mut surface = surface();
        let e1 = surface.insert_element_at(Point::new(0.0, 0.0));
        surface.set_color(color("#10b981"));

        surface.handle_pointer_event(down(50.0, 50.0));

        assert_eq!(surface.selected(), Some(e1));
        assert_eq!(surface.selection().focused(), Some(e1));
        assert_eq!(
            surface.registry().get(e1).unwrap().color,
            Some(color("#10b981"))
        );
    }

    #[test]
    fn test_empty_press_deselects_and_blurs() {
        let mut surface = surface();
        surface.add_element();

        surface.handle_pointer_event(down(10.0, 10.0));

        assert_eq!(surface.selected(), None);
        assert!(!surface.selection().is_editing());
    }

    #[test]
    fn test_press_outside_surface_keeps_selection() {
        let mut surface = surface();
        let id = surface.add_element();

        surface.handle_pointer_event(down(-20.0, -20.0));

        assert_eq!(surface.selected(), Some(id));
        assert!(!surface.selection().is_editing());
    }

    #[test]
    fn test_erase() {
        let mut surface = surface();
        let id = surface.add_element();
        surface.type_text("hello");
        surface.blur();

        surface.erase();

        assert_eq!(surface.registry().get(id).unwrap().text, "");
        assert_eq!(surface.selection().focused(), Some(id));
    }

    #[test]
    fn test_erase_without_selection_is_noop() {
        let mut surface = surface();
        let id = surface.add_element();
        surface.type_text("keep");
        surface.select(None);
        surface.blur();

        surface.erase();

        assert_eq!(surface.registry().get(id).unwrap().text, "keep");
        assert_eq!(surface.selection().focused(), None);
    }

    #[test]
    fn test_clear_all_scenario() {
        let mut surface = surface();
        let e1 = surface.add_element();
        surface.type_text("hi");
        let e2 = surface.add_element();
        surface.type_text("there");
        surface.select(Some(e1));

        surface.clear_all();

        assert_eq!(surface.registry().len(), 2);
        assert_eq!(surface.registry().get(e1).unwrap().text, "");
        assert_eq!(surface.registry().get(e2).unwrap().text, "");
        assert_eq!(surface.selected(), None);
    }

    #[test]
    fn test_delete_key_while_editing_is_suppressed() {
        let mut surface = surface();
        let id = surface.add_element();
        surface.type_text("hi");

        assert!(!surface.handle_key_event(&key("Delete")));
        assert_eq!(surface.registry().get(id).unwrap().text, "hi");
    }

    #[test]
    fn test_backspace_while_editing_edits_text() {
        let mut surface = surface();
        let id = surface.add_element();
        surface.type_text("hi");

        assert!(surface.handle_key_event(&key("Backspace")));
        assert_eq!(surface.registry().get(id).unwrap().text, "h");
    }

    #[test]
    fn test_delete_key_clears_selected_when_not_editing() {
        let mut surface = surface();
        let id = surface.add_element();
        surface.type_text("hi");
        surface.blur();

        assert!(surface.handle_key_event(&key("Backspace")));
        assert_eq!(surface.registry().get(id).unwrap().text, "");
    }

    #[test]
    fn test_delete_key_without_selection_is_noop() {
        let mut surface = surface();
        let id = surface.add_element();
        surface.type_text("hi");
        surface.blur();
        surface.select(None);

        assert!(!surface.handle_key_event(&key("Delete")));
        assert!(!surface.handle_key_event(&key("x")));
        assert_eq!(surface.registry().get(id).unwrap().text, "hi");
    }

    #[test]
    fn test_color_change_does_not_touch_deselected() {
        let mut surface = surface();
        let first = surface.add_element();
        let second = surface.add_element();

        surface.set_color(color("#ec4899"));

        assert_eq!(
            surface.registry().get(first).unwrap().color,
            Some(TextColor::default())
        );
        assert_eq!(
            surface.registry().get(second).unwrap().color,
            Some(color("#ec4899"))
        );
        assert_eq!(surface.selection().active_swatch(), Some(6));
    }

    #[test]
    fn test_configured_elements_are_placed() {
        let config = SurfaceConfig::from_json(
            r##"{"width": 800, "height": 600, "element_diameter": 100,
                "default_color": "#ef4444", "elements": [{"x": 10, "y": 10}]}"##,
        )
        .unwrap();
        let mut surface = Surface::new(&config);

        assert_eq!(surface.registry().len(), 1);
        assert_eq!(surface.selected(), None);
        let id = surface.registry().iter().next().unwrap().id();
        let element = surface.registry().get(id).unwrap();
        assert_eq!(element.position(surface.bounds().size), Point::new(10.0, 10.0));
        assert!(element.color.is_none());

        // First click on the text seeds the current color.
        surface.handle_pointer_event(down(60.0, 60.0));
        assert_eq!(surface.selected(), Some(id));
        assert_eq!(
            surface.registry().get(id).unwrap().color,
            Some(color("#ef4444"))
        );

        // The handle drags it like any added element.
        surface.handle_pointer_event(down(105.0, 105.0));
        surface.handle_pointer_event(mv(125.0, 115.0));
        surface.handle_pointer_event(up(125.0, 115.0));
        assert_eq!(
            surface.registry().get(id).unwrap().position(surface.bounds().size),
            Point::new(30.0, 20.0)
        );
    }

    #[test]
    fn test_snapshot_palette_highlight() {
        let mut surface = surface();
        surface.set_color(color("#3b82f6"));

        let palette = surface.snapshot().palette;
        assert_eq!(palette.len(), 7);
        let active: Vec<_> = palette
            .iter()
            .filter(|s| s.active)
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(active, vec!["Blue"]);

        surface.set_color(color("#123456"));
        assert!(surface.snapshot().palette.iter().all(|s| !s.active));
    }

    #[test]
    fn test_snapshot() {
        let mut surface = surface();
        let id = surface.add_element();
        surface.type_text("note");

        let snapshot = surface.snapshot();
        assert_eq!(snapshot.elements.len(), 1);
        assert_eq!(snapshot.selected, Some(id));
        assert!(snapshot.elements[0].selected);
        assert_eq!(snapshot.elements[0].text, "note");
        assert_eq!(snapshot.dragging, None);

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["current_color"], "#111827");
    }
}
