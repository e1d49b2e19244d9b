//! Named parameter presets.
//!
//! A preset is a flat JSON record:
//!
//! ```json
//! {
//!   "freq_x": 3.0,
//!   "freq_y": 2.0,
//!   "freq_z": 1.0,
//!   "phase": "0.5 0",
//!   "color": "crimson",
//!   "linewidth": 2,
//!   "length": 10.0,
//!   "3D": false
//! }
//! ```
//!
//! Only `freq_x` and `freq_y` are required. Older presets stored `phase`
//! as a bare number; both forms load. Keys we don't know are ignored.

use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::error::CurveError;
use crate::params::{CurveParameters, DEFAULT_LENGTH, Mode};
use crate::style::{DEFAULT_COLOR, DEFAULT_LINEWIDTH, LineStyle};

/// Errors from reading or writing presets.
#[derive(Debug, Error)]
pub enum PresetError {
    #[error("preset io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("preset json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Curve(#[from] CurveError),
}

/// A saved parameter set plus its line style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub freq_x: f64,
    pub freq_y: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freq_z: Option<f64>,

    #[serde(default = "default_phase", deserialize_with = "phase_from_text_or_number")]
    pub phase: String,

    #[serde(default = "default_color")]
    pub color: String,

    #[serde(default = "default_linewidth")]
    pub linewidth: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,

    #[serde(rename = "3D", default)]
    pub three_d: bool,
}

fn default_phase() -> String {
    "0".to_string()
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

fn default_linewidth() -> u32 {
    DEFAULT_LINEWIDTH
}

/// Accept `"phase": "0.5 0"` as well as `"phase": 0.5`.
fn phase_from_text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum PhaseValue {
        Text(String),
        Number(f64),
    }

    Ok(match PhaseValue::deserialize(deserializer)? {
        PhaseValue::Text(text) => text,
        PhaseValue::Number(value) => value.to_string(),
    })
}

impl Preset {
    /// Capture curve parameters and a line style as a preset.
    pub fn from_parameters(params: &CurveParameters, style: &LineStyle) -> Self {
        Self {
            freq_x: params.freq_x,
            freq_y: params.freq_y,
            freq_z: Some(params.freq_z),
            phase: params.phase.clone(),
            color: style.color.clone(),
            linewidth: style.linewidth,
            length: Some(params.length),
            three_d: params.mode == Mode::ThreeD,
        }
    }

    /// Curve parameters described by this preset. Amplitudes are not stored
    /// and come back as 1.
    pub fn to_parameters(&self) -> CurveParameters {
        CurveParameters::new(self.freq_x, self.freq_y)
            .with_freq_z(self.freq_z.unwrap_or(1.0))
            .with_phase(self.phase.clone())
            .with_length(self.length.unwrap_or(DEFAULT_LENGTH))
            .with_mode(if self.three_d { Mode::ThreeD } else { Mode::TwoD })
    }

    pub fn style(&self) -> LineStyle {
        LineStyle {
            color: self.color.clone(),
            linewidth: self.linewidth,
        }
    }

    /// Check that the preset describes a figure that can actually be generated.
    pub fn validate(&self) -> Result<(), CurveError> {
        let params = self.to_parameters();
        params.phases()?;
        params.validate()?;
        self.style().validate()
    }

    pub fn from_json(json: &str) -> Result<Self, PresetError> {
        let preset: Preset = serde_json::from_str(json)?;
        preset.validate()?;
        Ok(preset)
    }

    /// Pretty JSON, two-space indent. Non-ASCII text is written as-is.
    pub fn to_json(&self) -> Result<String, PresetError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load and validate a preset file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PresetError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let preset = Self::from_json(&content)?;
        info!("loaded preset {}", path.display());
        Ok(preset)
    }

    /// Write the preset, replacing any existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), PresetError> {
        let path = path.as_ref();
        let mut json = self.to_json()?;
        json.push('\n');
        fs::write(path, json)?;
        info!("saved preset {}", path.display());
        Ok(())
    }
}
