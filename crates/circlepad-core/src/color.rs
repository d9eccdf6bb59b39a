//! Text colors and the swatch palette.

use peniko::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Color every surface starts with.
pub const DEFAULT_COLOR: &str = "#111827";

/// Errors produced when parsing a color literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("Color must start with '#': {0}")]
    MissingHash(String),
    #[error("Color must have 3 or 6 hex digits: {0}")]
    InvalidLength(String),
    #[error("Invalid hex digit in color: {0}")]
    InvalidDigit(String),
}

/// A text color, stored normalized as lowercase `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TextColor {
    hex: String,
    rgb: [u8; 3],
}

impl TextColor {
    /// Parse a `#rgb` or `#rrggbb` literal.
    pub fn parse(literal: &str) -> Result<Self, ColorError> {
        let trimmed = literal.trim();
        let Some(digits) = trimmed.strip_prefix('#') else {
            return Err(ColorError::MissingHash(literal.to_string()));
        };
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidDigit(literal.to_string()));
        }

        let channel = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|_| ColorError::InvalidDigit(literal.to_string()))
        };
        let rgb = match digits.len() {
            // #rgb -> #rrggbb
            3 => [
                channel(&digits[0..1])? * 17,
                channel(&digits[1..2])? * 17,
                channel(&digits[2..3])? * 17,
            ],
            6 => [
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            ],
            _ => return Err(ColorError::InvalidLength(literal.to_string())),
        };

        Ok(Self::from_rgb(rgb[0], rgb[1], rgb[2]))
    }

    /// Build a color from its channels.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            hex: format!("#{r:02x}{g:02x}{b:02x}"),
            rgb: [r, g, b],
        }
    }

    /// The normalized `#rrggbb` form.
    pub fn as_str(&self) -> &str {
        &self.hex
    }

    /// Red, green and blue channels.
    pub fn rgb(&self) -> [u8; 3] {
        self.rgb
    }
}

impl Default for TextColor {
    fn default() -> Self {
        Self::from_rgb(0x11, 0x18, 0x27)
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

impl FromStr for TextColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TextColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TextColor> for String {
    fn from(color: TextColor) -> Self {
        color.hex
    }
}

impl From<&TextColor> for Color {
    fn from(color: &TextColor) -> Self {
        let [r, g, b] = color.rgb;
        Color::from_rgba8(r, g, b, 255)
    }
}

/// A named palette entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swatch {
    pub name: String,
    pub color: TextColor,
}

impl Swatch {
    pub fn new(name: impl Into<String>, color: TextColor) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

/// The enumerated set of selectable text colors.
///
/// The palette itself holds no selection state: which swatch shows as
/// active is always derived from the current color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    swatches: Vec<Swatch>,
}

impl Palette {
    pub fn new(swatches: Vec<Swatch>) -> Self {
        Self { swatches }
    }

    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }

    /// Index of the swatch that should show as active for `current`.
    pub fn active_index(&self, current: &TextColor) -> Option<usize> {
        self.swatches.iter().position(|s| &s.color == current)
    }

    /// Whether the swatch at `index` is active for `current`.
    pub fn is_active(&self, index: usize, current: &TextColor) -> bool {
        self.swatches
            .get(index)
            .is_some_and(|s| &s.color == current)
    }

    /// Look up a swatch by name (case-insensitive).
    pub fn by_name(&self, name: &str) -> Option<&Swatch> {
        self.swatches
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
    }
}

impl Default for Palette {
    fn default() -> Self {
        let entries = [
            ("Ink", (0x11, 0x18, 0x27)),
            ("Red", (0xef, 0x44, 0x44)),
            ("Amber", (0xf5, 0x9e, 0x0b)),
            ("Emerald", (0x10, 0xb9, 0x81)),
            ("Blue", (0x3b, 0x82, 0xf6)),
            ("Violet", (0x8b, 0x5c, 0xf6)),
            ("Pink", (0xec, 0x48, 0x99)),
        ];
        Self::new(
            entries
                .into_iter()
                .map(|(name, (r, g, b))| Swatch::new(name, TextColor::from_rgb(r, g, b)))
                .collect(),
        )
    }
}
