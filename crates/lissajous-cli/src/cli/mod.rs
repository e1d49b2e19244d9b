//! CLI command implementations.
//!
//! This module contains the implementations for the CLI subcommands:
//! - `generate` - Sample a figure and write its coordinates
//! - `save` - Write a parameter preset
//! - `show` - Describe a saved preset

pub mod common;
pub mod generate;
pub mod preset;

pub use generate::cmd_generate;
pub use preset::{cmd_save, cmd_show};
