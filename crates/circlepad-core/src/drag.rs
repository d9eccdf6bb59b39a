//! Drag interaction: turns pointer movement into clamped element moves.

use crate::element::ElementId;
use crate::geometry::{SurfaceBounds, clamp_position};
use crate::registry::ElementRegistry;
use kurbo::{Point, Vec2};

/// An in-progress drag. Exists only between pointer-down on a handle and
/// the next pointer-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// The element being dragged.
    pub element: ElementId,
    /// Pointer position (client coordinates) at drag start.
    pub pointer_origin: Point,
    /// Element position (surface coordinates) at drag start.
    pub element_origin: Point,
}

impl DragSession {
    /// Pointer delta from the drag origin.
    pub fn delta(&self, pointer: Point) -> Vec2 {
        pointer - self.pointer_origin
    }

    /// Unclamped position for the given pointer.
    pub fn proposed_position(&self, pointer: Point) -> Point {
        self.element_origin + self.delta(pointer)
    }
}

/// Drag state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Tracks the single active drag, if any.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Start dragging `id` from `pointer` (client coordinates).
    ///
    /// Selects the element, records both origins and rewrites the element's
    /// anchor as a pixel offset so later moves share one coordinate system.
    /// Any previous session is replaced. Returns false for unknown elements.
    pub fn begin(
        &mut self,
        id: ElementId,
        pointer: Point,
        registry: &mut ElementRegistry,
        bounds: &SurfaceBounds,
    ) -> bool {
        let Some(element) = registry.get_mut(id) else {
            log::warn!("Cannot drag unknown element {id}");
            return false;
        };

        // Element rect relative to the container rect, measured once.
        let element_rect = bounds.to_client(element.bounds(bounds.size));
        let element_origin = (element_rect.origin() - bounds.client_rect().origin()).to_point();
        element.set_position(element_origin);

        registry.select(Some(id));

        if let DragState::Dragging(previous) = self.state {
            log::debug!("Replacing drag session for {}", previous.element);
        }
        self.state = DragState::Dragging(DragSession {
            element: id,
            pointer_origin: pointer,
            element_origin,
        });
        log::debug!("Drag start on {id} at ({}, {})", pointer.x, pointer.y);
        true
    }

    /// Apply a pointer move. Returns the new clamped position, or `None`
    /// when no drag is active.
    ///
    /// The position is always derived from the drag origin, not the previous
    /// move, and bounds are read fresh on every call.
    pub fn update(
        &self,
        pointer: Point,
        registry: &mut ElementRegistry,
        bounds: &SurfaceBounds,
    ) -> Option<Point> {
        let session = self.session()?;
        let element = registry.get_mut(session.element)?;
        let position = clamp_position(
            session.proposed_position(pointer),
            bounds.size,
            element.size,
        );
        element.set_position(position);
        Some(position)
    }

    /// End the drag. Returns the finished session, if there was one.
    pub fn end(&mut self) -> Option<DragSession> {
        match std::mem::take(&mut self.state) {
            DragState::Dragging(session) => {
                log::debug!("Drag end on {}", session.element);
                Some(session)
            }
            DragState::Idle => None,
        }
    }
}
