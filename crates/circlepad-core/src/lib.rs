//! Circlepad Core Library
//!
//! Platform-agnostic element model and interaction logic for the Circlepad
//! annotation surface: circular elements that hold colored text and can be
//! selected, dragged and erased.

pub mod color;
pub mod config;
pub mod drag;
pub mod element;
pub mod geometry;
pub mod input;
pub mod registry;
pub mod selection;
pub mod surface;

pub use color::{ColorError, DEFAULT_COLOR, Palette, Swatch, TextColor};
pub use config::{ConfigError, ConfigResult, SurfaceConfig};
pub use drag::{DragController, DragSession, DragState};
pub use element::{Anchor, Element, ElementId, HitRegion};
pub use geometry::{SurfaceBounds, clamp, clamp_position};
pub use input::{KeyEvent, PointerEvent};
pub use registry::ElementRegistry;
pub use selection::SelectionController;
pub use surface::{ElementSnapshot, Surface, SurfaceSnapshot, SwatchSnapshot};
