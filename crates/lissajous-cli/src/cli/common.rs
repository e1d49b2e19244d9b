//! Common utilities shared across CLI commands.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use serde::Serialize;

use lissajous::{Bounds, CurveParameters, GeneratedFigure, Mode, Preset, parse_real};

/// Output format for generated coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OutputFormat {
    Json,
    Csv,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<OutputFormat> {
        match name.to_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "csv" => Some(OutputFormat::Csv),
            _ => None,
        }
    }
}

/// Take the value following a flag, advancing the cursor.
pub fn next_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("{} requires a value", flag))
}

/// Take the value following a flag and parse it as a real number.
fn real_value(args: &[String], i: &mut usize, flag: &str, name: &str) -> Result<f64> {
    Ok(parse_real(name, next_value(args, i, flag)?)?)
}

/// Curve flags shared by `generate` and `save`.
///
/// Every field is optional so that a `--preset` can supply the base values
/// and explicit flags override them.
#[derive(Debug, Default)]
pub struct CurveOptions {
    pub preset: Option<PathBuf>,
    pub freq_x: Option<f64>,
    pub freq_y: Option<f64>,
    pub freq_z: Option<f64>,
    pub phase: Option<String>,
    pub amplitude_x: Option<f64>,
    pub amplitude_y: Option<f64>,
    pub amplitude_z: Option<f64>,
    pub length: Option<f64>,
    pub resolution: Option<usize>,
    pub mode: Option<Mode>,
}

impl CurveOptions {
    /// Try to consume the flag at `args[*i]`. Returns `Ok(false)` if the flag
    /// is not a curve option.
    pub fn accept(&mut self, args: &[String], i: &mut usize) -> Result<bool> {
        let flag = args[*i].as_str();
        match flag {
            "--preset" => self.preset = Some(PathBuf::from(next_value(args, i, flag)?)),
            "-x" | "--freq-x" => self.freq_x = Some(real_value(args, i, flag, "freq_x")?),
            "-y" | "--freq-y" => self.freq_y = Some(real_value(args, i, flag, "freq_y")?),
            "-z" | "--freq-z" => self.freq_z = Some(real_value(args, i, flag, "freq_z")?),
            "-p" | "--phase" => self.phase = Some(next_value(args, i, flag)?.to_string()),
            "-a" | "--amp-x" => self.amplitude_x = Some(real_value(args, i, flag, "amplitude_x")?),
            "-b" | "--amp-y" => self.amplitude_y = Some(real_value(args, i, flag, "amplitude_y")?),
            "-c" | "--amp-z" => self.amplitude_z = Some(real_value(args, i, flag, "amplitude_z")?),
            "-l" | "--length" => self.length = Some(real_value(args, i, flag, "length")?),
            "-r" | "--resolution" => {
                let value = next_value(args, i, flag)?;
                let resolution = value.parse::<usize>().with_context(|| {
                    format!("resolution must be a positive integer, got '{}'", value)
                })?;
                self.resolution = Some(resolution);
            }
            "--3d" => self.mode = Some(Mode::ThreeD),
            "--2d" => self.mode = Some(Mode::TwoD),
            "-m" | "--mode" => self.mode = Some(next_value(args, i, flag)?.parse()?),
            _ => return Ok(false),
        }
        Ok(true)
    }

    /// Load the base preset, if one was named.
    pub fn load_preset(&self) -> Result<Option<Preset>> {
        match &self.preset {
            Some(path) => {
                eprintln!("Loading preset: {}", path.display());
                let preset = Preset::load(path)
                    .with_context(|| format!("failed to load preset {}", path.display()))?;
                Ok(Some(preset))
            }
            None => Ok(None),
        }
    }

    /// Build curve parameters from the base preset (if any) and the flags.
    pub fn to_parameters(&self, base: Option<&Preset>) -> Result<CurveParameters> {
        let mut params = match base {
            Some(preset) => preset.to_parameters(),
            None => {
                let (Some(freq_x), Some(freq_y)) = (self.freq_x, self.freq_y) else {
                    bail!("--freq-x and --freq-y are required unless --preset is given");
                };
                CurveParameters::new(freq_x, freq_y)
            }
        };

        if let Some(v) = self.freq_x {
            params.freq_x = v;
        }
        if let Some(v) = self.freq_y {
            params.freq_y = v;
        }
        if let Some(v) = self.freq_z {
            params.freq_z = v;
        }
        if let Some(v) = &self.phase {
            params.phase = v.clone();
        }
        if let Some(v) = self.amplitude_x {
            params.amplitude_x = v;
        }
        if let Some(v) = self.amplitude_y {
            params.amplitude_y = v;
        }
        if let Some(v) = self.amplitude_z {
            params.amplitude_z = v;
        }
        if let Some(v) = self.length {
            params.length = v;
        }
        if let Some(v) = self.mode {
            params.mode = v;
        }

        Ok(params)
    }
}

/// A figure in JSON output format.
#[derive(Serialize)]
struct JsonFigure<'a> {
    resolution: usize,
    mode: Mode,
    x: &'a [f64],
    y: &'a [f64],
    #[serde(skip_serializing_if = "Option::is_none")]
    z: Option<&'a [f64]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bounds: Option<Bounds>,
}

/// Convert a figure to JSON output.
pub fn figure_to_json(figure: &GeneratedFigure) -> Result<String> {
    let output = JsonFigure {
        resolution: figure.len(),
        mode: figure.mode(),
        x: &figure.x,
        y: &figure.y,
        z: figure.z.as_deref(),
        bounds: figure.bounds(),
    };
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Convert a figure to CSV: an `x,y[,z]` header and one row per sample.
pub fn figure_to_csv(figure: &GeneratedFigure) -> String {
    let mut csv = String::with_capacity(figure.len() * 48);
    match figure.points3() {
        Some(points) => {
            csv.push_str("x,y,z\n");
            for p in points {
                csv.push_str(&format!("{},{},{}\n", p.x, p.y, p.z));
            }
        }
        None => {
            csv.push_str("x,y\n");
            for p in figure.points() {
                csv.push_str(&format!("{},{}\n", p.x, p.y));
            }
        }
    }
    csv
}

/// Write output to a file, or stdout for `None` / `"-"`.
pub fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        None | Some("-") => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
            stdout.flush()?;
        }
        Some(path) => {
            fs::write(path, content).with_context(|| format!("failed to write {}", path))?;
            eprintln!("Wrote: {}", path);
        }
    }
    Ok(())
}
