//! Amida CLI library
//!
//! This module contains the core CLI logic for the Amida lottery tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use amida::{AmidaError, LotteryBuilder, Permutation};

/// Run the Amida CLI application
///
/// Replays the input script, writes the drawing to the output file and
/// returns the resolved permutation.
///
/// # Errors
///
/// Returns `AmidaError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Script diagnostics
/// - Ladder generation errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<Permutation, AmidaError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing script"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = LotteryBuilder::new(app_config);
    let script = builder.parse(&source)?;
    let lottery = builder.replay(&script)?;
    let svg = builder.render_svg(&lottery)?;

    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(lottery.result().clone())
}
