//! Line styling carried alongside curve parameters.
//!
//! The generator never reads these; they travel with presets so a
//! renderer can draw the figure the way it was saved.

use serde::{Deserialize, Serialize};

use crate::error::CurveError;

/// Colour used when a preset names none, or names one we don't know.
pub const DEFAULT_COLOR: &str = "midnightblue";

/// Line width used when a preset names none.
pub const DEFAULT_LINEWIDTH: u32 = 2;

/// Line widths offered to users.
pub const LINEWIDTHS: [u32; 5] = [1, 2, 3, 4, 5];

/// Named colours offered to users: (label, colour name).
pub const PALETTE: [(&str, &str); 4] = [
    ("red", "crimson"),
    ("green", "green"),
    ("yellow", "gold"),
    ("blue", "midnightblue"),
];

/// Resolve a palette label to its colour name.
///
/// Colour names themselves are accepted too, so `"crimson"` and `"red"`
/// resolve to the same thing. Unknown labels fall back to [`DEFAULT_COLOR`].
pub fn color_for_label(label: &str) -> &'static str {
    let label = label.trim().to_lowercase();
    PALETTE
        .iter()
        .find(|(name, color)| *name == label || *color == label)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_COLOR)
}

/// Stroke colour and width for a figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineStyle {
    #[serde(default = "default_color")]
    pub color: String,

    #[serde(default = "default_linewidth")]
    pub linewidth: u32,
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

fn default_linewidth() -> u32 {
    DEFAULT_LINEWIDTH
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: default_color(),
            linewidth: DEFAULT_LINEWIDTH,
        }
    }
}

impl LineStyle {
    /// Build a style from a palette label (or colour name) and width.
    pub fn new(color_label: &str, linewidth: u32) -> Result<Self, CurveError> {
        let style = Self {
            color: color_for_label(color_label).to_string(),
            linewidth,
        };
        style.validate()?;
        Ok(style)
    }

    pub fn validate(&self) -> Result<(), CurveError> {
        if self.linewidth == 0 {
            return Err(CurveError::parameter("linewidth must be positive"));
        }
        Ok(())
    }
}
