//! The lottery session.
//!
//! [`Lottery`] owns the current vertical line batch, the rungs placed on it
//! in insertion order, and the resolved [`Permutation`]. Every mutating
//! operation recomputes the result from scratch before returning, so the
//! three are always consistent with each other.
//!
//! # Example
//!
//! ```
//! # use amida_core::{geometry::Point, session::Lottery};
//! let mut lottery = Lottery::default();
//! lottery.new_lottery(3, 400.0).unwrap(); // lines at 100, 200, 300
//!
//! lottery.add_rung(Point::new(150.0, 40.0));
//! assert_eq!(lottery.result().labels(), &[2, 1, 3]);
//!
//! lottery.remove_last_rung();
//! assert!(lottery.result().is_identity());
//! ```

use log::{debug, info};

use crate::{
    error::LadderError,
    geometry::Point,
    ladder::{HorizontalLine, VerticalLines},
    layout,
    placement,
    resolve::{self, Permutation},
};

/// A ghost-leg lottery being drawn.
#[derive(Debug, Clone, Default)]
pub struct Lottery {
    span: f32,
    lines: VerticalLines,
    rungs: Vec<HorizontalLine>,
    result: Permutation,
}

impl Lottery {
    /// Replaces the ladder with `count` new lines spread over `span`.
    ///
    /// All rungs are dropped together with the old lines, and the result
    /// becomes the identity permutation of the new size.
    ///
    /// # Errors
    ///
    /// Returns the [`LadderError`] of [`layout::generate`] for a zero or
    /// oversized `count` or an invalid `span`, and leaves the lottery unchanged.
    pub fn new_lottery(&mut self, count: usize, span: f32) -> Result<(), LadderError> {
        let lines = layout::generate(count, span)?;

        self.span = span;
        self.lines = lines;
        self.rungs.clear();
        self.recompute();

        info!(count, span; "Generated new lottery");
        Ok(())
    }

    /// Places a rung for a click at `click`.
    ///
    /// The rung joins the two lines enclosing `click.x()` at height
    /// `click.y()`. Returns the placed rung, or `None` if the click missed
    /// every gap or is not a finite point, in which case nothing changes.
    pub fn add_rung(&mut self, click: Point) -> Option<HorizontalLine> {
        if !click.is_finite() {
            debug!(x = click.x(), y = click.y(); "Ignoring non-finite click");
            return None;
        }

        let Some(gap) = placement::locate(click.x(), &self.lines) else {
            debug!(x = click.x(), y = click.y(); "Click missed every gap, no rung placed");
            return None;
        };

        let rung = HorizontalLine::new(gap, click.y());
        self.rungs.push(rung);
        self.recompute();

        debug!(
            start = rung.start().get(),
            end = rung.end().get(),
            y = rung.position();
            "Placed rung"
        );
        Some(rung)
    }

    /// Removes the most recently placed rung, if any.
    pub fn remove_last_rung(&mut self) -> Option<HorizontalLine> {
        let removed = self.rungs.pop();
        if removed.is_some() {
            self.recompute();
        } else {
            debug!("No rung to remove");
        }
        removed
    }

    /// Removes every rung. The result becomes the identity permutation.
    pub fn clear_rungs(&mut self) {
        debug!(removed = self.rungs.len(); "Clearing rungs");
        self.rungs.clear();
        self.recompute();
    }

    /// Returns the span the current lines were spread over.
    pub fn span(&self) -> f32 {
        self.span
    }

    /// Returns the current vertical lines.
    pub fn verticals(&self) -> &VerticalLines {
        &self.lines
    }

    /// Returns the placed rungs in insertion order.
    pub fn rungs(&self) -> &[HorizontalLine] {
        &self.rungs
    }

    /// Returns the resolved permutation for the current lines and rungs.
    pub fn result(&self) -> &Permutation {
        &self.result
    }

    fn recompute(&mut self) {
        // Rungs are only ever built from gaps of `self.lines` and are dropped
        // whenever the lines are replaced.
        self.result = resolve::resolve(&self.lines, &self.rungs)
            .expect("session rungs always reference the current vertical batch");
    }
}
