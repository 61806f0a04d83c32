//! Error types for ladder construction and resolution.
//!
//! A click that misses every gap is not an error: [`locate`] returns `None`
//! and the session treats the placement as a no-op.
//!
//! [`locate`]: crate::placement::locate

use thiserror::Error;

use crate::ladder::BatchId;

/// Errors raised by the ladder model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LadderError {
    /// A lottery needs at least one vertical line.
    #[error("invalid line count {count}: a lottery needs at least one vertical line")]
    InvalidLineCount { count: usize },

    /// More vertical lines were requested than a single batch may hold.
    #[error("invalid line count {count}: a lottery holds at most {max} vertical lines")]
    TooManyLines { count: usize, max: usize },

    /// The span the vertical lines are spread over must be finite and positive.
    #[error("invalid span {span}: the layout span must be a finite positive number")]
    InvalidSpan { span: f32 },

    /// A rung was placed against a vertical batch that has since been replaced.
    #[error("stale rung: placed against vertical batch {rung_batch}, current batch is {current_batch}")]
    StaleReference {
        rung_batch: BatchId,
        current_batch: BatchId,
    },
}
