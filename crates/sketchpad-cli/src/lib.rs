//! CLI logic for the Sketchpad demonstration.
//!
//! This module contains the core CLI logic: it loads configuration, plays the
//! demonstration scene and writes the drawing transcript.

pub mod error_adapter;

mod args;
mod config;
mod demo;

pub use args::Args;
pub use demo::DemoScene;

use std::fs;

use log::info;

use sketchpad::{SketchpadError, config::validate_scale_factor};

/// Run the Sketchpad CLI application
///
/// Builds the demonstration scene, draws it, scales it and draws it again.
/// The transcript goes to the output file when one is given, otherwise to
/// stdout.
///
/// # Errors
///
/// Returns `SketchpadError` for:
/// - Configuration loading errors
/// - Scene construction errors
/// - File I/O errors
pub fn run(args: &Args) -> Result<(), SketchpadError> {
    let app_config = config::load_config(args.config.as_ref())?;

    let factor = args
        .scale
        .unwrap_or_else(|| app_config.transform().scale_factor());
    validate_scale_factor(factor).map_err(config::ConfigError::from)?;
    info!(factor; "Playing demo scene");

    let scene = DemoScene::build()?;
    let transcript = scene.play(factor, app_config.output());

    match &args.output {
        Some(path) => {
            fs::write(path, transcript)?;
            info!(output_file = path; "Transcript written");
        }
        None => print!("{transcript}"),
    }

    Ok(())
}
