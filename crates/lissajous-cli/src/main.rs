//! lissajous - sample Lissajous figures and manage presets
//!
//! Usage:
//!   lissajous generate -x <fx> -y <fy> [options]   Write figure coordinates
//!   lissajous save -x <fx> -y <fy> [options]       Save a preset
//!   lissajous show <preset.json>                   Describe a preset
//!   lissajous colors                               List palette colours
//!   lissajous config [--example]                   Print configuration

mod cli;

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use lissajous::{AppConfig, PALETTE, style::LINEWIDTHS};

use cli::{cmd_generate, cmd_save, cmd_show};

/// Environment variable naming a config file when `--config` is absent.
const CONFIG_ENV: &str = "LISSAJOUS_CONFIG";

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut args: Vec<String> = env::args().collect();
    let prog = args.first().cloned().unwrap_or_else(|| "lissajous".to_string());

    if let Err(e) = run(&prog, &mut args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(prog: &str, args: &mut Vec<String>) -> Result<()> {
    let config_path = take_config_flag(args)?;
    let config = load_config(config_path)?;

    if args.len() < 2 {
        print_usage(prog);
        return Ok(());
    }

    let rest = &args[2..];
    match args[1].as_str() {
        "generate" | "gen" => cmd_generate(rest, &config),
        "save" => cmd_save(rest, &config),
        "show" => cmd_show(rest, &config),
        "colors" => {
            cmd_colors();
            Ok(())
        }
        "config" => cmd_config(rest, &config),
        "help" | "--help" | "-h" => {
            print_usage(prog);
            Ok(())
        }
        "--version" | "-V" => {
            println!("lissajous {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage(prog);
            anyhow::bail!("Unknown command: {}", other)
        }
    }
}

/// Flags that never take a value; every other `-…` token consumes the next one.
const SWITCHES: &[&str] = &[
    "--3d",
    "--2d",
    "--save",
    "--example",
    "--help",
    "-h",
    "--version",
    "-V",
];

/// Remove `--config <path>` from the argument list.
///
/// Only a `--config` in flag position counts, so a token that is the value of
/// another option (`-o --config`) is left for that option.
fn take_config_flag(args: &mut Vec<String>) -> Result<Option<PathBuf>> {
    let mut pos = None;
    let mut i = 1;
    while i < args.len() {
        let arg = args[i].as_str();
        if arg == "--config" {
            pos = Some(i);
            break;
        }
        i += if arg.starts_with('-') && !SWITCHES.contains(&arg) { 2 } else { 1 };
    }
    let Some(pos) = pos else {
        return Ok(None);
    };
    if pos + 1 >= args.len() {
        anyhow::bail!("--config requires a value");
    }
    let path = args.remove(pos + 1);
    args.remove(pos);
    Ok(Some(PathBuf::from(path)))
}

/// Resolve the configuration: explicit flag, then environment, then defaults.
fn load_config(explicit: Option<PathBuf>) -> Result<AppConfig> {
    let path = explicit.or_else(|| env::var_os(CONFIG_ENV).map(PathBuf::from));
    match path {
        Some(path) => AppConfig::load(&path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(AppConfig::default()),
    }
}

fn cmd_colors() {
    println!("Available colors:");
    for (label, color) in PALETTE {
        println!("  {:<8} {}", label, color);
    }
    println!();
    println!(
        "Line widths: {}",
        LINEWIDTHS.iter().map(u32::to_string).collect::<Vec<_>>().join(", ")
    );
}

fn cmd_config(args: &[String], config: &AppConfig) -> Result<()> {
    if args.iter().any(|a| a == "--example") {
        print!("{}", lissajous::config::EXAMPLE_CONFIG);
        return Ok(());
    }
    print!("{}", config.to_yaml()?);
    Ok(())
}

fn print_usage(prog: &str) {
    eprintln!("lissajous {} - Lissajous figure sampling", env!("CARGO_PKG_VERSION"));
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  {} generate -x <fx> -y <fy> [options]", prog);
    eprintln!("  {} save -x <fx> -y <fy> [options]", prog);
    eprintln!("  {} show <preset.json>", prog);
    eprintln!("  {} colors", prog);
    eprintln!("  {} config [--example]", prog);
    eprintln!();
    eprintln!("Curve options (generate, save):");
    eprintln!("  -x, --freq-x <n>       X frequency (required without --preset)");
    eprintln!("  -y, --freq-y <n>       Y frequency (required without --preset)");
    eprintln!("  -z, --freq-z <n>       Z frequency (default: 1)");
    eprintln!("  -p, --phase <\"x y z\">  Phases in units of pi, e.g. \"0.5 0\" or \"pi/2\"");
    eprintln!("                         (default: 0)");
    eprintln!("  -a, --amp-x <n>        X amplitude (default: 1)");
    eprintln!("  -b, --amp-y <n>        Y amplitude (default: 1)");
    eprintln!("  -c, --amp-z <n>        Z amplitude (default: 1)");
    eprintln!("  -l, --length <n>       Domain half-width in units of pi (default: 10)");
    eprintln!("  -r, --resolution <n>   Samples per axis (default: from config, 1000)");
    eprintln!("  --3d / --2d            Produce a Z axis or not (default: 2d)");
    eprintln!("  --preset <file>        Start from a saved preset; flags override it");
    eprintln!();
    eprintln!("Generate options:");
    eprintln!("  -f, --format <fmt>     Output format: json, csv (default: json)");
    eprintln!("  -o, --output <file>    Output file (- for stdout, default: stdout)");
    eprintln!("  --save                 Without -o, write a timestamped file into images_dir");
    eprintln!();
    eprintln!("Save options:");
    eprintln!("  --color <name>         Palette label or colour name (see 'colors')");
    eprintln!("  -w, --linewidth <n>    Line width (default: 2)");
    eprintln!("  -o, --output <file>    Preset file (default: timestamped file in presets_dir)");
    eprintln!();
    eprintln!("Global options:");
    eprintln!("  --config <file>        YAML config file (or set {})", CONFIG_ENV);
}
