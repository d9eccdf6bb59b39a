//! The set of elements on a surface and the single selection slot.

use crate::color::TextColor;
use crate::element::{Anchor, Element, ElementId, HitRegion};
use kurbo::{Point, Size};
use std::collections::HashMap;

/// Owns every element and tracks which one (if any) is selected.
#[derive(Debug, Clone, Default)]
pub struct ElementRegistry {
    /// All elements, keyed by ID.
    elements: HashMap<ElementId, Element>,
    /// Insertion order (back to front).
    order: Vec<ElementId>,
    /// Currently selected element.
    selected: Option<ElementId>,
}

impl ElementRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a new element with empty text. Does not select it.
    pub fn create_element(
        &mut self,
        anchor: Anchor,
        size: Size,
        color: Option<TextColor>,
    ) -> ElementId {
        let element = Element::new(anchor, size, color);
        let id = element.id();
        self.order.push(id);
        self.elements.insert(id, element);
        log::debug!("Created element {id}");
        id
    }

    /// Set the selected element. Any previous selection is replaced.
    pub fn select(&mut self, id: Option<ElementId>) {
        if let Some(id) = id {
            if !self.elements.contains_key(&id) {
                log::warn!("Ignoring selection of unknown element {id}");
                return;
            }
        }
        self.selected = id;
    }

    pub fn selected(&self) -> Option<ElementId> {
        self.selected
    }

    /// Check if an element is the selected one.
    pub fn is_selected(&self, id: ElementId) -> bool {
        self.selected == Some(id)
    }

    /// Empty the text of one element.
    pub fn clear_text(&mut self, id: ElementId) {
        match self.elements.get_mut(&id) {
            Some(element) => element.clear_text(),
            None => log::warn!("Ignoring clear of unknown element {id}"),
        }
    }

    /// Empty the text of every element and deselect. Elements are kept.
    pub fn clear_all_text(&mut self) {
        for element in self.elements.values_mut() {
            element.clear_text();
        }
        self.selected = None;
    }

    /// Get an element by ID.
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    /// Get a mutable reference to an element by ID.
    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(&id)
    }

    /// Elements in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.order.iter().filter_map(|id| self.elements.get(id))
    }

    /// Frontmost element under `point` (surface coordinates) and the region hit.
    pub fn element_at(&self, point: Point, surface: Size) -> Option<(ElementId, HitRegion)> {
        self.order.iter().rev().find_map(|&id| {
            self.elements
                .get(&id)
                .and_then(|e| e.hit_test(point, surface))
                .map(|region| (id, region))
        })
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
