//! Generate command implementation.

use std::time::Instant;

use anyhow::{Result, bail};
use chrono::Local;

use lissajous::AppConfig;

use super::common::{
    CurveOptions, OutputFormat, figure_to_csv, figure_to_json, next_value, write_output,
};
use super::preset::timestamped_name;

/// Execute the generate command.
pub fn cmd_generate(args: &[String], config: &AppConfig) -> Result<()> {
    let mut options = CurveOptions::default();
    let mut output_path: Option<String> = None;
    let mut format = OutputFormat::Json;
    let mut save_export = false;

    let mut i = 0;
    while i < args.len() {
        if options.accept(args, &mut i)? {
            i += 1;
            continue;
        }
        match args[i].as_str() {
            "-o" | "--output" => {
                output_path = Some(next_value(args, &mut i, "--output")?.to_string());
            }
            "--save" => save_export = true,
            "-f" | "--format" => {
                let name = next_value(args, &mut i, "--format")?;
                format = match OutputFormat::from_name(name) {
                    Some(format) => format,
                    None => bail!("Unknown format: {}. Use 'json' or 'csv'.", name),
                };
            }
            other => bail!("Unknown option for generate: {}", other),
        }
        i += 1;
    }

    let preset = options.load_preset()?;
    let params = options.to_parameters(preset.as_ref())?;

    let mut generator = config.generator()?;
    if let Some(resolution) = options.resolution {
        generator.set_resolution(resolution)?;
    }

    let start = Instant::now();
    let figure = generator.generate(&params)?;
    let elapsed = start.elapsed();

    eprintln!(
        "Generated {} figure ({}:{}) with {} samples in {:.2}ms",
        params.mode,
        params.freq_x,
        params.freq_y,
        figure.len(),
        elapsed.as_secs_f64() * 1000.0
    );

    let content = match format {
        OutputFormat::Json => figure_to_json(figure)?,
        OutputFormat::Csv => figure_to_csv(figure),
    };

    // --save without -o exports into the configured images directory.
    if save_export && output_path.is_none() {
        config.init_dirs()?;
        let extension = match format {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        };
        let path = config.images_dir.join(timestamped_name("figure", extension, Local::now()));
        output_path = Some(path.to_string_lossy().into_owned());
    }

    write_output(output_path.as_deref(), &content)
}
