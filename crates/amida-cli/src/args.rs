//! Command-line argument definitions for the Amida CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Amida lottery tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input lottery script
    #[arg(help = "Path to the input script")]
    pub input: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["amida", "draw.amida"]);

        assert_eq!(args.input, "draw.amida");
        assert_eq!(args.output, "out.svg");
        assert!(args.config.is_none());
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_all_options() {
        let args = Args::parse_from([
            "amida",
            "draw.amida",
            "-o",
            "result.svg",
            "-c",
            "amida.toml",
            "--log-level",
            "debug",
        ]);

        assert_eq!(args.output, "result.svg");
        assert_eq!(args.config.as_deref(), Some("amida.toml"));
        assert_eq!(args.log_level, "debug");
    }
}
