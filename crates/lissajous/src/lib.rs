//! # lissajous
//!
//! Sampling of Lissajous figures, plus the presets and configuration an
//! application needs around it.
//!
//! ```
//! use lissajous::{CurveGenerator, CurveParameters, Mode};
//!
//! let mut generator = CurveGenerator::new(500)?;
//! let params = CurveParameters::new(3.0, 2.0).with_phase("0.5").with_mode(Mode::ThreeD);
//! let figure = generator.generate(&params)?;
//! assert_eq!(figure.x.len(), 500);
//! assert!(figure.z.is_some());
//! # Ok::<(), lissajous::CurveError>(())
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod geometry;
pub mod params;
pub mod phase;
pub mod preset;
pub mod sampling;
pub mod style;

// Re-export common types at crate root for convenience.
pub use config::{AppConfig, ConfigError};
pub use error::CurveError;
pub use generator::{
    Coordinates, CurveGenerator, DEFAULT_RESOLUTION, GeneratedFigure, GeneratorConfig,
};
pub use geometry::{Bounds, Point, Point3};
pub use params::{CurveParameters, Mode, parse_real};
pub use phase::parse_phases;
pub use preset::{Preset, PresetError};
pub use style::{LineStyle, PALETTE, color_for_label};
