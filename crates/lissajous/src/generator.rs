//! Lissajous figure generator.
//!
//! Lissajous figures are the family of curves described by:
//!   x(t) = a * sin(fx*t + π*φx)
//!   y(t) = b * sin(fy*t + π*φy)
//!   z(t) = c * sin(fz*t + π*φz)      (3d mode only)
//!
//! sampled at `resolution` points over `t ∈ [-length·π, length·π]`. Phases
//! are multiples of π, so `φ = 0.5` shifts an axis by a quarter period.
//!
//! ## Rust Lesson #12: Borrowing results
//!
//! [`CurveGenerator::get_values`] hands out slices that borrow the generator.
//! While those slices are alive the compiler refuses a `&mut self` call such
//! as `generate`, so a caller can never observe a figure being overwritten
//! under its feet.

use std::f64::consts::PI;

use log::debug;

use crate::error::CurveError;
use crate::geometry::{Bounds, Point, Point3};
use crate::params::{CurveParameters, Mode};
use crate::sampling::domain;

/// Sample count used when none is configured.
pub const DEFAULT_RESOLUTION: usize = 1000;

/// Generator configuration. Only affects generations that happen after a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub resolution: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { resolution: DEFAULT_RESOLUTION }
    }
}

/// Coordinate arrays of one generated figure.
///
/// `z` is `None` for 2d figures; it is never an empty vector standing in
/// for "absent".
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedFigure {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Option<Vec<f64>>,
}

/// Borrowed view of a figure's coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coordinates<'a> {
    Planar { x: &'a [f64], y: &'a [f64] },
    Spatial { x: &'a [f64], y: &'a [f64], z: &'a [f64] },
}

impl GeneratedFigure {
    /// Number of samples per axis.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// True when the figure carries a Z axis.
    pub fn is_spatial(&self) -> bool {
        self.z.is_some()
    }

    pub fn mode(&self) -> Mode {
        if self.is_spatial() { Mode::ThreeD } else { Mode::TwoD }
    }

    pub fn coordinates(&self) -> Coordinates<'_> {
        match &self.z {
            Some(z) => Coordinates::Spatial { x: &self.x, y: &self.y, z },
            None => Coordinates::Planar { x: &self.x, y: &self.y },
        }
    }

    /// XY pairs, the projection used for flat plots.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.x.iter().zip(&self.y).map(|(&x, &y)| Point::new(x, y))
    }

    /// XYZ triples, or `None` for a 2d figure.
    pub fn points3(&self) -> Option<impl Iterator<Item = Point3> + '_> {
        let z = self.z.as_ref()?;
        Some(
            self.x
                .iter()
                .zip(&self.y)
                .zip(z)
                .map(|((&x, &y), &z)| Point3::new(x, y, z)),
        )
    }

    /// Bounds of the XY projection.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::of(&self.x, &self.y)
    }
}

impl<'a> Coordinates<'a> {
    pub fn x(&self) -> &'a [f64] {
        match *self {
            Coordinates::Planar { x, .. } | Coordinates::Spatial { x, .. } => x,
        }
    }

    pub fn y(&self) -> &'a [f64] {
        match *self {
            Coordinates::Planar { y, .. } | Coordinates::Spatial { y, .. } => y,
        }
    }

    pub fn z(&self) -> Option<&'a [f64]> {
        match *self {
            Coordinates::Planar { .. } => None,
            Coordinates::Spatial { z, .. } => Some(z),
        }
    }
}

/// Samples Lissajous figures and keeps the most recent one.
#[derive(Debug, Clone, Default)]
pub struct CurveGenerator {
    config: GeneratorConfig,
    figure: Option<GeneratedFigure>,
}

impl CurveGenerator {
    /// Create a generator with the given sample count.
    pub fn new(resolution: usize) -> Result<Self, CurveError> {
        let mut generator = Self::default();
        generator.set_resolution(resolution)?;
        Ok(generator)
    }

    pub fn config(&self) -> GeneratorConfig {
        self.config
    }

    pub fn resolution(&self) -> usize {
        self.config.resolution
    }

    /// Change the sample count for subsequent generations.
    ///
    /// The currently stored figure is not resampled.
    pub fn set_resolution(&mut self, resolution: usize) -> Result<(), CurveError> {
        if resolution == 0 {
            return Err(CurveError::InvalidConfiguration(
                "resolution must be a positive sample count".to_string(),
            ));
        }
        debug!("resolution {} -> {}", self.config.resolution, resolution);
        self.config.resolution = resolution;
        Ok(())
    }

    /// Sample a figure, store it as the current result and return it.
    ///
    /// On error the previously stored figure is kept.
    pub fn generate(&mut self, params: &CurveParameters) -> Result<&GeneratedFigure, CurveError> {
        let [phase_x, phase_y, phase_z] = params.phases()?;
        params.validate()?;

        let t = domain(params.length, self.config.resolution);
        if !t.iter().all(|v| v.is_finite()) {
            return Err(CurveError::InvalidParameter(format!(
                "length {} overflows the sampling domain",
                params.length
            )));
        }

        let x = sample_axis("x", &t, params.amplitude_x, params.freq_x, phase_x)?;
        let y = sample_axis("y", &t, params.amplitude_y, params.freq_y, phase_y)?;
        let z = match params.mode {
            Mode::ThreeD => Some(sample_axis(
                "z",
                &t,
                params.amplitude_z,
                params.freq_z,
                phase_z,
            )?),
            Mode::TwoD => None,
        };

        debug!(
            "generated {} figure: fx={} fy={} phase='{}' samples={}",
            params.mode,
            params.freq_x,
            params.freq_y,
            params.phase,
            t.len()
        );

        Ok(self.figure.insert(GeneratedFigure { x, y, z }))
    }

    /// The most recently generated coordinates.
    pub fn get_values(&self) -> Result<Coordinates<'_>, CurveError> {
        self.figure
            .as_ref()
            .map(GeneratedFigure::coordinates)
            .ok_or(CurveError::NoFigureGenerated)
    }

    /// The most recently generated figure, if any.
    pub fn figure(&self) -> Option<&GeneratedFigure> {
        self.figure.as_ref()
    }
}

/// `amplitude * sin(freq * t + π * phase)` for every sample.
///
/// Finite inputs can still overflow (`freq * t` past `f64::MAX`), which
/// would turn into NaN samples; those are reported instead of stored.
fn sample_axis(
    axis: &str,
    t: &[f64],
    amplitude: f64,
    freq: f64,
    phase: f64,
) -> Result<Vec<f64>, CurveError> {
    let offset = PI * phase;
    let values: Vec<f64> = t
        .iter()
        .map(|&t| amplitude * (freq * t + offset).sin())
        .collect();
    if values.iter().any(|v| !v.is_finite()) {
        return Err(CurveError::InvalidParameter(format!(
            "{} axis overflows for freq={} amplitude={} phase={}",
            axis, freq, amplitude, phase
        )));
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::linspace;
    use approx::assert_abs_diff_eq;

    #[test]
    fn lengths_match_resolution() {
        for resolution in [1, 2, 5, 20, 1000] {
            let mut generator = CurveGenerator::new(resolution).unwrap();
            let params = CurveParameters::new(3.0, 2.0).with_mode(Mode::ThreeD);
            let figure = generator.generate(&params).unwrap();
            assert_eq!(figure.x.len(), resolution);
            assert_eq!(figure.y.len(), resolution);
            assert_eq!(figure.z.as_ref().map(Vec::len), Some(resolution));
        }
    }

    #[test]
    fn two_d_never_has_z() {
        let mut generator = CurveGenerator::default();
        let figure = generator.generate(&CurveParameters::new(1.0, 2.0)).unwrap();
        assert!(figure.z.is_none());
        assert!(!figure.is_spatial());
        assert!(matches!(generator.get_values().unwrap(), Coordinates::Planar { .. }));
    }

    #[test]
    fn three_d_always_has_z() {
        let mut generator = CurveGenerator::default();
        let params = CurveParameters::new(1.0, 2.0).with_mode(Mode::ThreeD);
        generator.generate(&params).unwrap();
        let values = generator.get_values().unwrap();
        assert!(matches!(values, Coordinates::Spatial { .. }));
        assert_eq!(values.z().unwrap().len(), DEFAULT_RESOLUTION);
    }

    #[test]
    fn generation_is_deterministic() {
        let params = CurveParameters::new(5.0, 4.0)
            .with_phase("0.5 0.25 1")
            .with_mode(Mode::ThreeD);
        let mut generator = CurveGenerator::new(777).unwrap();
        let first = generator.generate(&params).unwrap().clone();
        let second = generator.generate(&params).unwrap().clone();
        assert_eq!(first, second);
        for (a, b) in first.x.iter().zip(&second.x) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn reference_values_for_small_figure() {
        let mut generator = CurveGenerator::new(5).unwrap();
        let params = CurveParameters::new(1.0, 3.0).with_phase("0").with_length(1.0);
        let figure = generator.generate(&params).unwrap();

        let t = linspace(-PI, PI, 5);
        for i in 0..5 {
            assert_abs_diff_eq!(figure.x[i], t[i].sin(), epsilon = 1e-12);
            assert_abs_diff_eq!(figure.y[i], (3.0 * t[i]).sin(), epsilon = 1e-12);
        }
    }

    #[test]
    fn phase_is_a_multiple_of_pi() {
        // phase 0.5 on a unit-frequency axis turns sin into cos.
        let mut generator = CurveGenerator::new(9).unwrap();
        let params = CurveParameters::new(1.0, 1.0).with_phase("0.5").with_length(1.0);
        let figure = generator.generate(&params).unwrap();

        let t = linspace(-PI, PI, 9);
        for i in 0..9 {
            assert_abs_diff_eq!(figure.x[i], t[i].cos(), epsilon = 1e-12);
            assert_abs_diff_eq!(figure.y[i], t[i].sin(), epsilon = 1e-12);
        }
    }

    #[test]
    fn domain_endpoints_follow_length() {
        // t spans ±10π, so a 1/20 frequency puts the endpoints at sin(±π/2).
        let mut generator = CurveGenerator::new(101).unwrap();
        let params = CurveParameters::new(0.05, 0.05).with_length(10.0);
        let figure = generator.generate(&params).unwrap();
        assert_abs_diff_eq!(figure.x[0], -1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(figure.x[100], 1.0, epsilon = 1e-9);
    }

    #[test]
    fn amplitudes_scale_each_axis() {
        let mut generator = CurveGenerator::new(50).unwrap();
        let base = CurveParameters::new(3.0, 2.0)
            .with_phase("0.3 0.1 0.7")
            .with_mode(Mode::ThreeD);
        let unit = generator.generate(&base).unwrap().clone();
        let scaled = generator
            .generate(&base.clone().with_amplitudes(2.0, -3.0, 0.5))
            .unwrap()
            .clone();

        let unit_z = unit.z.unwrap();
        let scaled_z = scaled.z.unwrap();
        for i in 0..50 {
            assert_abs_diff_eq!(scaled.x[i], 2.0 * unit.x[i], epsilon = 1e-12);
            assert_abs_diff_eq!(scaled.y[i], -3.0 * unit.y[i], epsilon = 1e-12);
            assert_abs_diff_eq!(scaled_z[i], 0.5 * unit_z[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn z_uses_its_own_frequency_and_phase() {
        let mut generator = CurveGenerator::new(7).unwrap();
        let params = CurveParameters::new(1.0, 1.0)
            .with_freq_z(2.0)
            .with_phase("0 0 0.5")
            .with_length(1.0)
            .with_mode(Mode::ThreeD);
        let figure = generator.generate(&params).unwrap();

        let t = linspace(-PI, PI, 7);
        let z = figure.z.as_ref().unwrap();
        for i in 0..7 {
            assert_abs_diff_eq!(z[i], (2.0 * t[i] + PI * 0.5).sin(), epsilon = 1e-12);
        }
    }

    #[test]
    fn zero_resolution_is_rejected() {
        let mut generator = CurveGenerator::default();
        assert!(matches!(
            generator.set_resolution(0),
            Err(CurveError::InvalidConfiguration(_))
        ));
        assert_eq!(generator.resolution(), DEFAULT_RESOLUTION);
        assert!(CurveGenerator::new(0).is_err());
    }

    #[test]
    fn resolution_change_applies_to_next_generation_only() {
        let mut generator = CurveGenerator::new(10).unwrap();
        let params = CurveParameters::new(1.0, 2.0);
        generator.generate(&params).unwrap();

        generator.set_resolution(20).unwrap();
        assert_eq!(generator.get_values().unwrap().x().len(), 10);

        generator.generate(&params).unwrap();
        assert_eq!(generator.get_values().unwrap().x().len(), 20);
    }

    #[test]
    fn values_before_generation_fail() {
        let generator = CurveGenerator::default();
        assert_eq!(generator.get_values(), Err(CurveError::NoFigureGenerated));
        assert!(generator.figure().is_none());
    }

    #[test]
    fn bad_phase_keeps_previous_figure() {
        let mut generator = CurveGenerator::new(10).unwrap();
        let good = generator.generate(&CurveParameters::new(1.0, 2.0)).unwrap().clone();

        let bad = CurveParameters::new(1.0, 2.0).with_phase("abc");
        assert!(matches!(
            generator.generate(&bad),
            Err(CurveError::InvalidParameter(_))
        ));
        assert_eq!(generator.figure(), Some(&good));
    }

    #[test]
    fn non_finite_frequency_is_rejected() {
        let mut generator = CurveGenerator::default();
        let params = CurveParameters::new(f64::INFINITY, 2.0);
        assert!(matches!(
            generator.generate(&params),
            Err(CurveError::InvalidParameter(_))
        ));
    }

    #[test]
    fn overflowing_length_is_rejected() {
        let mut generator = CurveGenerator::new(3).unwrap();
        let good = generator.generate(&CurveParameters::new(1.0, 1.0)).unwrap().clone();

        let params = CurveParameters::new(1.0, 1.0).with_length(1e308);
        assert!(matches!(
            generator.generate(&params),
            Err(CurveError::InvalidParameter(_))
        ));
        assert_eq!(generator.figure(), Some(&good));
    }

    #[test]
    fn overflowing_frequency_is_rejected() {
        let mut generator = CurveGenerator::new(3).unwrap();
        let good = generator.generate(&CurveParameters::new(1.0, 1.0)).unwrap().clone();

        for params in [
            CurveParameters::new(1e308, 1.0),
            CurveParameters::new(1.0, 1e308),
            CurveParameters::new(1.0, 1.0).with_freq_z(1e308).with_mode(Mode::ThreeD),
        ] {
            assert!(matches!(
                generator.generate(&params),
                Err(CurveError::InvalidParameter(_))
            ));
            assert_eq!(generator.figure(), Some(&good));
        }
    }

    #[test]
    fn huge_but_representable_values_still_generate() {
        let mut generator = CurveGenerator::new(5).unwrap();
        let params = CurveParameters::new(1e6, 1.0).with_amplitudes(1e300, 1.0, 1.0);
        let figure = generator.generate(&params).unwrap();
        assert!(figure.x.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn figure_helpers() {
        let mut generator = CurveGenerator::new(200).unwrap();
        let params = CurveParameters::new(3.0, 2.0)
            .with_amplitudes(2.0, 1.0, 1.0)
            .with_mode(Mode::ThreeD);
        let figure = generator.generate(&params).unwrap();

        assert_eq!(figure.len(), 200);
        assert_eq!(figure.mode(), Mode::ThreeD);
        assert_eq!(figure.points().count(), 200);
        assert_eq!(figure.points3().map(Iterator::count), Some(200));

        let bounds = figure.bounds().unwrap();
        assert!(bounds.max_x <= 2.0 && bounds.min_x >= -2.0);
        assert!(bounds.max_y <= 1.0 && bounds.min_y >= -1.0);
    }
}
