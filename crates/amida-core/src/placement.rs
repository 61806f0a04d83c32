//! Rung placement: mapping a click to the gap it falls in.
//!
//! Placement is a pure lookup. Appending the rung is left to the caller
//! (see [`Lottery::add_rung`](crate::session::Lottery::add_rung)), which
//! keeps the geometry testable without any session state.

use crate::ladder::{Gap, VerticalLines};

/// Finds the gap whose two lines strictly enclose `click_x`.
///
/// Adjacent pairs are scanned left to right and the first match wins. A
/// click before the first line, after the last line, or exactly on a line
/// matches no gap.
///
/// # Examples
///
/// ```
/// # use amida_core::{layout::generate, placement::locate};
/// let lines = generate(4, 100.0).unwrap(); // 20, 40, 60, 80
///
/// let gap = locate(30.0, &lines).unwrap();
/// assert_eq!(gap.start().get(), 0);
/// assert_eq!(gap.end().get(), 1);
///
/// assert!(locate(10.0, &lines).is_none());
/// assert!(locate(40.0, &lines).is_none());
/// ```
pub fn locate(click_x: f32, lines: &VerticalLines) -> Option<Gap> {
    lines
        .as_slice()
        .windows(2)
        .position(|pair| click_x > pair[0].position() && click_x < pair[1].position())
        .and_then(|left| lines.gap(left))
}
