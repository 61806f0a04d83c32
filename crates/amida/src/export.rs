//! Export functionality for Amida lotteries.
//!
//! The [`Exporter`] trait is the last stage of the pipeline:
//!
//! ```text
//! Script Source
//!     ↓ parse
//! Script
//!     ↓ replay
//! Lottery (lines, rungs, result)
//!     ↓ export (this module)
//! Output File
//! ```
//!
//! # Available Backends
//!
//! - [`svg`] - SVG output via [`svg::SvgBuilder`] and [`svg::Svg`]

/// SVG export backend.
pub mod svg;

use amida_core::session::Lottery;

/// Abstraction for lottery export backends.
pub trait Exporter {
    /// Exports the current state of a lottery.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the lottery cannot be drawn, or
    /// [`Error::Io`] if writing the output fails.
    fn export_lottery(&mut self, lottery: &Lottery) -> Result<(), Error>;
}

/// Errors that can occur during export.
///
/// Converted into [`AmidaError::Export`] at the crate boundary.
///
/// [`AmidaError::Export`]: crate::AmidaError::Export
#[derive(Debug)]
pub enum Error {
    /// A rendering failure described by `message`.
    Render(String),
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}
