//! Bounding helpers for keeping elements inside the surface.

use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// The container's placement in client (pointer) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceBounds {
    /// Top-left corner in client coordinates.
    pub origin: Point,
    /// Current container size.
    pub size: Size,
}

impl SurfaceBounds {
    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Container rect in client coordinates.
    pub fn client_rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }

    /// Convert a client point into surface coordinates.
    pub fn to_local(&self, client: Point) -> Point {
        client - self.origin.to_vec2()
    }

    /// Convert a surface rect into client coordinates.
    pub fn to_client(&self, local: Rect) -> Rect {
        local + self.origin.to_vec2()
    }
}

/// Bound `proposed` to `[min, max]`.
///
/// When the range is inverted (`max < min`, an element larger than its
/// container) the minimum wins.
pub fn clamp(proposed: f64, min: f64, max: f64) -> f64 {
    min.max(max.min(proposed))
}

/// Clamp a proposed top-left position so an element of `element` size stays
/// inside a container of `container` size.
pub fn clamp_position(proposed: Point, container: Size, element: Size) -> Point {
    Point::new(
        clamp(proposed.x, 0.0, container.width - element.width),
        clamp(proposed.y, 0.0, container.height - element.height),
    )
}
