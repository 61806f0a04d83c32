//! Layout generation for vertical lines.
//!
//! Vertical lines are spread evenly over a span with one spacing unit of
//! margin on both ends:
//!
//! ```text
//!   0     s     2s    3s    4s   span = 4s
//!   |     │     │     │     |
//!   edge  1     2     3     edge          (count = 3, s = span / 4)
//! ```

use log::debug;

use crate::{error::LadderError, ladder::VerticalLines};

/// Largest number of vertical lines a single batch may hold.
pub const MAX_LINE_COUNT: usize = 4096;

/// Generates `count` evenly spaced vertical lines over `span`.
///
/// Line `i` (1-based) is placed at `span / (count + 1) * i`. Each call
/// produces a new batch, so rungs placed against an earlier batch cannot be
/// mixed with the returned lines.
///
/// # Errors
///
/// Returns [`LadderError::InvalidLineCount`] when `count` is zero,
/// [`LadderError::TooManyLines`] when it exceeds [`MAX_LINE_COUNT`], and
/// [`LadderError::InvalidSpan`] when `span` is not a finite positive number.
///
/// # Examples
///
/// ```
/// # use amida_core::layout::generate;
/// let lines = generate(4, 100.0).unwrap();
/// let positions: Vec<f32> = lines.iter().map(|line| line.position()).collect();
/// assert_eq!(positions, vec![20.0, 40.0, 60.0, 80.0]);
/// ```
pub fn generate(count: usize, span: f32) -> Result<VerticalLines, LadderError> {
    if count == 0 {
        return Err(LadderError::InvalidLineCount { count });
    }
    if count > MAX_LINE_COUNT {
        return Err(LadderError::TooManyLines {
            count,
            max: MAX_LINE_COUNT,
        });
    }
    if !span.is_finite() || span <= 0.0 {
        return Err(LadderError::InvalidSpan { span });
    }

    let spacing = span / (count + 1) as f32;
    let lines = VerticalLines::from_positions((1..=count).map(|i| spacing * i as f32));

    debug!(count, span, spacing, batch = lines.batch().get(); "Generated vertical lines");

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_generate_even_spacing() {
        let lines = generate(3, 400.0).unwrap();
        assert_eq!(lines.len(), 3);
        assert_approx_eq!(f32, lines.as_slice()[0].position(), 100.0);
        assert_approx_eq!(f32, lines.as_slice()[1].position(), 200.0);
        assert_approx_eq!(f32, lines.as_slice()[2].position(), 300.0);
    }

    #[test]
    fn test_generate_single_line_is_centered() {
        let lines = generate(1, 640.0).unwrap();
        assert_eq!(lines.len(), 1);
        assert_approx_eq!(f32, lines.as_slice()[0].position(), 320.0);
        assert_eq!(lines.gaps().count(), 0);
    }

    #[test]
    fn test_generate_zero_count_fails() {
        assert_eq!(
            generate(0, 100.0).unwrap_err(),
            LadderError::InvalidLineCount { count: 0 }
        );
    }

    #[test]
    fn test_generate_line_count_bound() {
        assert_eq!(generate(MAX_LINE_COUNT, 100.0).unwrap().len(), MAX_LINE_COUNT);

        for count in [MAX_LINE_COUNT + 1, usize::MAX] {
            assert_eq!(
                generate(count, 100.0).unwrap_err(),
                LadderError::TooManyLines {
                    count,
                    max: MAX_LINE_COUNT
                }
            );
        }
    }

    #[test]
    fn test_generate_invalid_span_fails() {
        assert!(matches!(
            generate(3, 0.0),
            Err(LadderError::InvalidSpan { .. })
        ));
        assert!(matches!(
            generate(3, -10.0),
            Err(LadderError::InvalidSpan { .. })
        ));
        assert!(matches!(
            generate(3, f32::NAN),
            Err(LadderError::InvalidSpan { .. })
        ));
    }

    #[test]
    fn test_generate_new_batch_every_call() {
        let first = generate(3, 100.0).unwrap();
        let second = generate(3, 100.0).unwrap();
        assert_ne!(first.batch(), second.batch());
    }
}

#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    /// Lines are strictly increasing and keep one spacing unit of margin.
    fn check_lines_evenly_spaced(count: usize, span: f32) -> Result<(), TestCaseError> {
        let lines = generate(count, span).unwrap();
        let spacing = span / (count + 1) as f32;

        prop_assert_eq!(lines.len(), count);
        for (i, line) in lines.iter().enumerate() {
            let expected = spacing * (i + 1) as f32;
            prop_assert!(approx_eq!(f32, line.position(), expected, epsilon = 0.01));
            prop_assert!(line.position() > 0.0 && line.position() < span);
        }
        for pair in lines.as_slice().windows(2) {
            prop_assert!(pair[0].position() < pair[1].position());
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn lines_evenly_spaced(count in 1usize..64, span in 10.0f32..5000.0) {
            check_lines_evenly_spaced(count, span)?;
        }
    }
}
