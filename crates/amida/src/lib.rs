//! Amida - ghost-leg lotteries from replayable scripts.
//!
//! Parsing, replay, and rendering for Amida lotteries. A script records the
//! interactions that draw a lottery; replaying it yields the resolved
//! permutation and the drawing can be exported as SVG.

pub mod config;

mod error;
mod export;

pub use amida_core::{
    LadderError, color, geometry, ladder, resolve::Permutation, script, session,
};

pub use error::AmidaError;

use std::{fs, path::Path};

use log::{debug, info, trace, warn};

use amida_core::{
    script::{Command, Script},
    session::Lottery,
};

use config::AppConfig;
use export::Exporter;

/// Builder for parsing, replaying and rendering Amida lotteries.
///
/// # Examples
///
/// ```rust,no_run
/// use amida::{LotteryBuilder, config::AppConfig};
///
/// let source = "lines 3\nrung 200 120\n";
///
/// let builder = LotteryBuilder::new(AppConfig::default());
///
/// let script = builder.parse(source).expect("Failed to parse");
/// let lottery = builder.replay(&script).expect("Failed to replay");
/// println!("{}", lottery.result());
///
/// let svg = builder.render_svg(&lottery).expect("Failed to render");
/// ```
#[derive(Default)]
pub struct LotteryBuilder {
    config: AppConfig,
}

impl LotteryBuilder {
    /// Create a new lottery builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse script source into a [`Script`].
    ///
    /// # Errors
    ///
    /// Returns [`AmidaError::Parse`] carrying every diagnostic of the
    /// script together with its source.
    pub fn parse(&self, source: &str) -> Result<Script, AmidaError> {
        info!("Parsing script");

        let script = amida_parser::parse(source)
            .map_err(|err| AmidaError::new_parse_error(err, source))?;

        debug!(commands = script.len(); "Script parsed successfully");
        trace!(script:?; "Parsed script");

        Ok(script)
    }

    /// Replay a script against a fresh lottery.
    ///
    /// `lines` commands spread the verticals over the configured canvas
    /// width. Clicks that miss every gap are skipped, as are `undo` and
    /// `clear` with nothing to remove.
    ///
    /// # Errors
    ///
    /// Returns [`AmidaError::Ladder`] when a `lines` command cannot generate
    /// a ladder, e.g. for a zero count or a non-positive canvas width.
    pub fn replay(&self, script: &Script) -> Result<Lottery, AmidaError> {
        let span = self.config.canvas().width();
        let mut lottery = Lottery::default();

        for (step, command) in script.commands().iter().enumerate() {
            match *command {
                Command::Lines(count) => lottery.new_lottery(count, span)?,
                Command::Rung(click) => {
                    if lottery.add_rung(click).is_none() {
                        warn!(
                            step,
                            x = click.x(),
                            y = click.y();
                            "Click outside every gap, no rung placed"
                        );
                    }
                }
                Command::Undo => {
                    if lottery.remove_last_rung().is_none() {
                        debug!(step; "Nothing to undo");
                    }
                }
                Command::Clear => lottery.clear_rungs(),
            }
        }

        info!(
            lines = lottery.verticals().len(),
            rungs = lottery.rungs().len(),
            result:% = lottery.result();
            "Script replayed"
        );

        Ok(lottery)
    }

    /// Render a lottery to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`AmidaError::Export`] for invalid style settings and
    /// [`AmidaError::Io`] if the rendered document cannot be read back.
    pub fn render_svg(&self, lottery: &Lottery) -> Result<String, AmidaError> {
        let temp_file =
            tempfile::NamedTempFile::new().map_err(|err| AmidaError::Export(Box::new(err)))?;

        self.export_svg(lottery, temp_file.path())?;

        let svg_string = fs::read_to_string(temp_file.path())?;

        info!("SVG rendered successfully");
        Ok(svg_string)
    }

    /// Render a lottery and write it to `path` as SVG.
    ///
    /// # Errors
    ///
    /// Returns [`AmidaError::Export`] for invalid style settings or a
    /// failed write.
    pub fn export_svg(&self, lottery: &Lottery, path: impl AsRef<Path>) -> Result<(), AmidaError> {
        let mut svg_exporter = export::svg::SvgBuilder::new(path.as_ref())
            .with_canvas(self.config.canvas())
            .with_style(self.config.style())
            .build()?;

        svg_exporter.export_lottery(lottery)?;
        Ok(())
    }
}
