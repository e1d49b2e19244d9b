//! Preset commands: `save` writes a preset, `show` describes one.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::Local;

use lissajous::{AppConfig, LineStyle, Preset, color_for_label};

use super::common::{CurveOptions, next_value};

/// File name for output saved without an explicit path, e.g. `preset_20240309_140507.json`.
pub fn timestamped_name(prefix: &str, extension: &str, now: chrono::DateTime<Local>) -> String {
    format!("{}_{}.{}", prefix, now.format("%Y%m%d_%H%M%S"), extension)
}

/// Execute the save command.
pub fn cmd_save(args: &[String], config: &AppConfig) -> Result<()> {
    let mut options = CurveOptions::default();
    let mut output_path: Option<PathBuf> = None;
    let mut color: Option<String> = None;
    let mut linewidth: Option<u32> = None;

    let mut i = 0;
    while i < args.len() {
        if options.accept(args, &mut i)? {
            i += 1;
            continue;
        }
        match args[i].as_str() {
            "-o" | "--output" => {
                output_path = Some(PathBuf::from(next_value(args, &mut i, "--output")?));
            }
            "--color" => {
                color = Some(next_value(args, &mut i, "--color")?.to_string());
            }
            "-w" | "--linewidth" => {
                let value = next_value(args, &mut i, "--linewidth")?;
                let width = value.parse::<u32>().with_context(|| {
                    format!("linewidth must be a positive integer, got '{}'", value)
                })?;
                linewidth = Some(width);
            }
            other => bail!("Unknown option for save: {}", other),
        }
        i += 1;
    }

    let base = options.load_preset()?;
    let params = options.to_parameters(base.as_ref())?;

    // Style precedence: flags, then the base preset, then the configured default.
    let base_style = base
        .as_ref()
        .map(Preset::style)
        .unwrap_or_else(|| config.default_style.clone());
    let style = LineStyle {
        color: match &color {
            Some(label) => color_for_label(label).to_string(),
            None => base_style.color,
        },
        linewidth: linewidth.unwrap_or(base_style.linewidth),
    };

    let preset = Preset::from_parameters(&params, &style);
    preset.validate()?;

    let path = match output_path {
        Some(path) => path,
        None => {
            config.init_dirs()?;
            config.presets_dir.join(timestamped_name("preset", "json", Local::now()))
        }
    };

    preset
        .save(&path)
        .with_context(|| format!("failed to save preset {}", path.display()))?;
    eprintln!("Wrote: {}", path.display());
    Ok(())
}

/// Execute the show command.
pub fn cmd_show(args: &[String], config: &AppConfig) -> Result<()> {
    let Some(path) = args.first() else {
        bail!("show requires a preset file");
    };
    let path = Path::new(path);

    let preset = Preset::load(path)
        .with_context(|| format!("failed to load preset {}", path.display()))?;
    let params = preset.to_parameters();
    let phases = params.phases()?;

    let mut generator = config.generator()?;
    let figure = generator.generate(&params)?;

    println!("Preset: {}", path.display());
    println!("  mode:       {}", params.mode);
    println!("  freq:       x={} y={} z={}", params.freq_x, params.freq_y, params.freq_z);
    println!(
        "  phase:      '{}' (x={}π y={}π z={}π)",
        params.phase, phases[0], phases[1], phases[2]
    );
    println!("  length:     {}π", params.length);
    println!("  color:      {}", preset.color);
    println!("  linewidth:  {}", preset.linewidth);
    println!("  samples:    {}", figure.len());
    if let Some(bounds) = figure.bounds() {
        println!(
            "  bounds:     x=[{:.4}, {:.4}] y=[{:.4}, {:.4}]",
            bounds.min_x, bounds.max_x, bounds.min_y, bounds.max_y
        );
        let center = bounds.center();
        println!(
            "  extent:     {:.4} x {:.4} around ({:.4}, {:.4})",
            bounds.width(),
            bounds.height(),
            center.x,
            center.y
        );
    }

    Ok(())
}
