//! Surface configuration.

use crate::color::{Palette, TextColor};
use crate::element::{Anchor, DEFAULT_DIAMETER};
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Settings for a [`Surface`](crate::Surface). Every field has a default, so
/// a config file only needs the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SurfaceConfig {
    /// Surface width in pixels.
    pub width: f64,
    /// Surface height in pixels.
    pub height: f64,
    /// Surface top-left in client coordinates.
    pub origin_x: f64,
    pub origin_y: f64,
    /// Diameter of newly added elements.
    pub element_diameter: f64,
    /// Where new elements are placed, as fractions of the surface size.
    pub spawn_fx: f64,
    pub spawn_fy: f64,
    /// Color the surface starts with.
    pub default_color: TextColor,
    /// Selectable colors.
    pub palette: Palette,
    /// Elements present before any are added, as pixel offsets.
    pub elements: Vec<Point>,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 600.0,
            origin_x: 0.0,
            origin_y: 0.0,
            element_diameter: DEFAULT_DIAMETER,
            spawn_fx: 0.45,
            spawn_fy: 0.55,
            default_color: TextColor::default(),
            palette: Palette::default(),
            elements: Vec::new(),
        }
    }
}

impl SurfaceConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded surface config from {}", path.display());
        Ok(config)
    }

    /// Check value ranges.
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "surface size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.element_diameter > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "element diameter must be positive, got {}",
                self.element_diameter
            )));
        }
        for (name, value) in [("spawn_fx", self.spawn_fx), ("spawn_fy", self.spawn_fy)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }
        for (index, p) in self.elements.iter().enumerate() {
            if !(p.x.is_finite() && p.y.is_finite() && p.x >= 0.0 && p.y >= 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "element {index} must have a non-negative position, got ({}, {})",
                    p.x, p.y
                )));
            }
        }
        Ok(())
    }

    pub fn surface_size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn element_size(&self) -> Size {
        Size::new(self.element_diameter, self.element_diameter)
    }

    pub fn spawn_anchor(&self) -> Anchor {
        Anchor::Relative {
            fx: self.spawn_fx,
            fy: self.spawn_fy,
        }
    }
}
