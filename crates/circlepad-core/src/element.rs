//! Circular annotation elements.

use crate::color::TextColor;
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for elements.
pub type ElementId = Uuid;

/// Side length of the square drag handle, in pixels.
pub const HANDLE_SIZE: f64 = 18.0;

/// Default element diameter, in pixels.
pub const DEFAULT_DIAMETER: f64 = 120.0;

/// How an element's top-left corner is placed within the surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Anchor {
    /// Fractions of the surface width and height.
    Relative { fx: f64, fy: f64 },
    /// Pixel offset from the surface origin.
    Pixels { x: f64, y: f64 },
}

impl Anchor {
    pub fn pixels(point: Point) -> Self {
        Self::Pixels {
            x: point.x,
            y: point.y,
        }
    }

    /// Resolve to a pixel offset for the given surface size.
    pub fn resolve(&self, surface: Size) -> Point {
        match *self {
            Anchor::Relative { fx, fy } => Point::new(fx * surface.width, fy * surface.height),
            Anchor::Pixels { x, y } => Point::new(x, y),
        }
    }
}

/// Which part of an element a point falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitRegion {
    /// The drag handle.
    Handle,
    /// The editable text area (the circle body).
    Text,
}

/// A draggable, editable, colorable circle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    pub(crate) id: ElementId,
    /// Placement within the surface.
    pub anchor: Anchor,
    /// Bounding box size.
    pub size: Size,
    /// Editable text content.
    pub text: String,
    /// Text color. `None` until the first explicit color write.
    pub color: Option<TextColor>,
}

impl Element {
    /// Create an element with empty text.
    pub fn new(anchor: Anchor, size: Size, color: Option<TextColor>) -> Self {
        Self {
            id: Uuid::new_v4(),
            anchor,
            size,
            text: String::new(),
            color,
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Top-left offset within a surface of the given size.
    pub fn position(&self, surface: Size) -> Point {
        self.anchor.resolve(surface)
    }

    /// Move to a pixel offset.
    pub fn set_position(&mut self, position: Point) {
        self.anchor = Anchor::pixels(position);
    }

    /// Bounding box in surface coordinates.
    pub fn bounds(&self, surface: Size) -> Rect {
        Rect::from_origin_size(self.position(surface), self.size)
    }

    /// Handle region in surface coordinates (bottom-right of the bounds).
    pub fn handle_bounds(&self, surface: Size) -> Rect {
        let bounds = self.bounds(surface);
        Rect::new(
            bounds.x1 - HANDLE_SIZE,
            bounds.y1 - HANDLE_SIZE,
            bounds.x1,
            bounds.y1,
        )
    }

    /// Hit test a point given in surface coordinates.
    pub fn hit_test(&self, point: Point, surface: Size) -> Option<HitRegion> {
        if self.handle_bounds(surface).contains(point) {
            return Some(HitRegion::Handle);
        }

        let bounds = self.bounds(surface);
        let rx = bounds.width() / 2.0;
        let ry = bounds.height() / 2.0;
        if rx < f64::EPSILON || ry < f64::EPSILON {
            return None;
        }
        let center = bounds.center();
        let dx = (point.x - center.x) / rx;
        let dy = (point.y - center.y) / ry;
        (dx * dx + dy * dy <= 1.0).then_some(HitRegion::Text)
    }

    pub fn clear_text(&mut self) {
        self.text.clear();
    }
}
