//! Curve parameters supplied per generation request.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CurveError;
use crate::phase::parse_phases;

/// Default half-width of the sampling domain, in units of π.
pub const DEFAULT_LENGTH: f64 = 10.0;

/// Whether a Z coordinate is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    #[serde(rename = "2d")]
    TwoD,
    #[serde(rename = "3d")]
    ThreeD,
}

impl Mode {
    /// Short name as used on the command line and in JSON output.
    pub fn name(&self) -> &'static str {
        match self {
            Mode::TwoD => "2d",
            Mode::ThreeD => "3d",
        }
    }

    pub fn from_name(name: &str) -> Option<Mode> {
        match name.to_lowercase().as_str() {
            "2d" => Some(Mode::TwoD),
            "3d" => Some(Mode::ThreeD),
            _ => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::from_name(s).ok_or_else(|| {
            CurveError::parameter(format!("unknown mode '{}', expected 2d or 3d", s))
        })
    }
}

/// Everything needed to sample one figure, apart from the resolution.
///
/// `phase` stays a string until generation so that presets and command-line
/// input can be passed through untouched; see [`crate::phase`] for the
/// accepted syntax.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveParameters {
    pub freq_x: f64,
    pub freq_y: f64,
    pub freq_z: f64,
    pub phase: String,
    pub amplitude_x: f64,
    pub amplitude_y: f64,
    pub amplitude_z: f64,
    /// Half-width of the domain in units of π.
    pub length: f64,
    pub mode: Mode,
}

impl CurveParameters {
    /// Parameters with the given X/Y frequencies and every other field at its default.
    pub fn new(freq_x: f64, freq_y: f64) -> Self {
        Self {
            freq_x,
            freq_y,
            freq_z: 1.0,
            phase: "0".to_string(),
            amplitude_x: 1.0,
            amplitude_y: 1.0,
            amplitude_z: 1.0,
            length: DEFAULT_LENGTH,
            mode: Mode::TwoD,
        }
    }

    pub fn with_freq_z(mut self, freq_z: f64) -> Self {
        self.freq_z = freq_z;
        self
    }

    pub fn with_phase(mut self, phase: impl Into<String>) -> Self {
        self.phase = phase.into();
        self
    }

    pub fn with_amplitudes(mut self, x: f64, y: f64, z: f64) -> Self {
        self.amplitude_x = x;
        self.amplitude_y = y;
        self.amplitude_z = z;
        self
    }

    pub fn with_length(mut self, length: f64) -> Self {
        self.length = length;
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Parsed phases for X, Y, Z in units of π.
    pub fn phases(&self) -> Result<[f64; 3], CurveError> {
        parse_phases(&self.phase)
    }

    /// Check that every numeric field is finite.
    pub fn validate(&self) -> Result<(), CurveError> {
        let fields = [
            ("freq_x", self.freq_x),
            ("freq_y", self.freq_y),
            ("freq_z", self.freq_z),
            ("amplitude_x", self.amplitude_x),
            ("amplitude_y", self.amplitude_y),
            ("amplitude_z", self.amplitude_z),
            ("length", self.length),
        ];

        for (name, value) in fields {
            if !value.is_finite() {
                return Err(CurveError::parameter(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Parse a frequency or amplitude typed by a user.
///
/// Accepts any finite decimal; surrounding whitespace is ignored.
pub fn parse_real(name: &str, text: &str) -> Result<f64, CurveError> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CurveError::parameter(format!("{} must be a number, got '{}'", name, text)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let params = CurveParameters::new(3.0, 2.0);
        assert_eq!(params.freq_z, 1.0);
        assert_eq!(params.phase, "0");
        assert_eq!(params.amplitude_x, 1.0);
        assert_eq!(params.amplitude_y, 1.0);
        assert_eq!(params.amplitude_z, 1.0);
        assert_eq!(params.length, 10.0);
        assert_eq!(params.mode, Mode::TwoD);
    }

    #[test]
    fn mode_names_round_trip_case_insensitively() {
        assert_eq!("2D".parse::<Mode>().unwrap(), Mode::TwoD);
        assert_eq!("3d".parse::<Mode>().unwrap(), Mode::ThreeD);
        assert!("4d".parse::<Mode>().is_err());
        assert_eq!(Mode::ThreeD.to_string(), "3d");
    }

    #[test]
    fn mode_serializes_as_short_name() {
        assert_eq!(serde_json::to_string(&Mode::ThreeD).unwrap(), "\"3d\"");
        let mode: Mode = serde_json::from_str("\"2d\"").unwrap();
        assert_eq!(mode, Mode::TwoD);
    }

    #[test]
    fn validate_rejects_non_finite_fields() {
        assert!(CurveParameters::new(1.0, 2.0).validate().is_ok());
        assert!(CurveParameters::new(f64::NAN, 2.0).validate().is_err());
        assert!(CurveParameters::new(1.0, 2.0)
            .with_amplitudes(1.0, f64::INFINITY, 1.0)
            .validate()
            .is_err());
        assert!(CurveParameters::new(1.0, 2.0)
            .with_length(f64::NEG_INFINITY)
            .validate()
            .is_err());
    }

    #[test]
    fn parse_real_trims_and_rejects() {
        assert_eq!(parse_real("freq_x", " 2.5 ").unwrap(), 2.5);
        assert!(parse_real("freq_x", "two").is_err());
        assert!(parse_real("freq_x", "NaN").is_err());
    }
}
