//! Permutation resolution: tracing every start label through the rungs.
//!
//! # Algorithm
//!
//! 1. Rungs are sorted by their y coordinate, top to bottom. The sort is
//!    stable, so rungs at the same height keep their insertion order. `-0.0`
//!    and `0.0` count as the same height.
//! 2. Each start label is traced through the sorted rungs. A trace sitting
//!    on a rung's left line moves right, a trace sitting on its right line
//!    moves left, and any other rung is skipped.
//! 3. The label is written into the slot its trace ends in.
//!
//! The trace tracks the slot as a [`VerticalIndex`] the whole way down and
//! never looks at line coordinates, so coinciding or closely spaced lines
//! cannot be confused.
//!
//! ```text
//!   1   2   3           trace of label 1:
//!   │───│   │  y=10      0 ─(rung 0-1)→ 1
//!   │   │───│  y=20      1 ─(rung 1-2)→ 2
//!   │   │   │
//!   2   3   1           result: [2, 3, 1]
//! ```

use std::fmt;

use log::{debug, trace};

use crate::{
    error::LadderError,
    ladder::{HorizontalLine, VerticalIndex, VerticalLines},
};

/// The result of a lottery.
///
/// Slot `j` holds the 1-based start label that ends at vertical line `j`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Permutation {
    labels: Vec<usize>,
}

impl Permutation {
    /// Returns the identity permutation `[1, 2, ..., len]`.
    pub fn identity(len: usize) -> Self {
        Self {
            labels: (1..=len).collect(),
        }
    }

    /// Returns the labels, one per ending slot.
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Returns the number of slots.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` if there are no slots.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the start label ending at `slot`.
    pub fn label_at(&self, slot: VerticalIndex) -> Option<usize> {
        self.labels.get(slot.get()).copied()
    }

    /// Returns the slot the 1-based start `label` ends at.
    pub fn slot_of(&self, label: usize) -> Option<VerticalIndex> {
        self.labels
            .iter()
            .position(|&candidate| candidate == label)
            .map(VerticalIndex::new)
    }

    /// Returns `true` if every label ends where it started.
    pub fn is_identity(&self) -> bool {
        self.labels
            .iter()
            .enumerate()
            .all(|(slot, &label)| label == slot + 1)
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut labels = self.labels.iter();
        if let Some(first) = labels.next() {
            write!(f, "{first}")?;
            for label in labels {
                write!(f, " {label}")?;
            }
        }
        Ok(())
    }
}

/// Resolves the permutation induced by `rungs` on `lines`.
///
/// `rungs` may be given in any order; only their y coordinates and, for
/// equal heights, their order in the slice matter. Every rung must join
/// two adjacent lines, which [`HorizontalLine::new`] guarantees.
///
/// # Errors
///
/// Returns [`LadderError::StaleReference`] if a rung was placed against a
/// different batch than `lines`.
///
/// # Examples
///
/// ```
/// # use amida_core::{layout::generate, ladder::HorizontalLine, resolve::resolve};
/// let lines = generate(3, 100.0).unwrap();
/// let rung = HorizontalLine::new(lines.gap(0).unwrap(), 50.0);
///
/// let result = resolve(&lines, &[rung]).unwrap();
/// assert_eq!(result.labels(), &[2, 1, 3]);
/// ```
pub fn resolve(
    lines: &VerticalLines,
    rungs: &[HorizontalLine],
) -> Result<Permutation, LadderError> {
    if let Some(stale) = rungs.iter().find(|rung| rung.batch() != lines.batch()) {
        return Err(LadderError::StaleReference {
            rung_batch: stale.batch(),
            current_batch: lines.batch(),
        });
    }

    let mut sorted: Vec<&HorizontalLine> = rungs.iter().collect();
    sorted.sort_by(|a, b| height_key(a).total_cmp(&height_key(b)));

    let mut labels = vec![0; lines.len()];
    for line in lines.iter() {
        let end = trace_sorted(line.index(), &sorted);
        trace!(start = line.index().get(), end = end.get(); "Traced start label");
        labels[end.get()] = line.index().label();
    }

    debug_assert!(
        labels.iter().all(|&label| label != 0),
        "adjacent-only rungs always induce a permutation"
    );

    let permutation = Permutation { labels };
    debug!(
        lines = lines.len(),
        rungs = rungs.len(),
        result:% = permutation;
        "Resolved lottery"
    );

    Ok(permutation)
}

/// Sort key of a rung. Adding `0.0` turns `-0.0` into `0.0`, which
/// `total_cmp` would otherwise order first.
fn height_key(rung: &HorizontalLine) -> f32 {
    rung.position() + 0.0
}

/// Traces one start slot through rungs already sorted top to bottom.
fn trace_sorted(start: VerticalIndex, sorted: &[&HorizontalLine]) -> VerticalIndex {
    sorted.iter().fold(start, |current, rung| {
        if current == rung.start() {
            rung.end()
        } else if current == rung.end() {
            rung.start()
        } else {
            current
        }
    })
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;
    use crate::layout::generate;

    // ===================
    // Strategies
    // ===================

    /// A line count together with rungs given as `(left line, y)` pairs.
    fn ladder_strategy() -> impl Strategy<Value = (usize, Vec<(usize, f32)>)> {
        (2usize..12).prop_flat_map(|count| {
            (
                Just(count),
                prop::collection::vec((0..count - 1, 0.0f32..500.0), 0..40),
            )
        })
    }

    fn build(count: usize, placed: &[(usize, f32)]) -> (VerticalLines, Vec<HorizontalLine>) {
        let lines = generate(count, 1000.0).unwrap();
        let rungs = placed
            .iter()
            .map(|&(left, y)| HorizontalLine::new(lines.gap(left).unwrap(), y))
            .collect();
        (lines, rungs)
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Every label 1..=N appears exactly once.
    fn check_result_is_bijection(count: usize, placed: &[(usize, f32)]) -> Result<(), TestCaseError> {
        let (lines, rungs) = build(count, placed);
        let result = resolve(&lines, &rungs).unwrap();

        let mut labels = result.labels().to_vec();
        labels.sort_unstable();
        prop_assert_eq!(labels, (1..=count).collect::<Vec<_>>());
        Ok(())
    }

    /// Reversing insertion order of rungs at distinct heights changes nothing.
    fn check_insertion_order_irrelevant(
        count: usize,
        placed: &[(usize, f32)],
    ) -> Result<(), TestCaseError> {
        let mut distinct = placed.to_vec();
        distinct.sort_by(|a, b| a.1.total_cmp(&b.1));
        distinct.dedup_by(|a, b| a.1 == b.1);

        let (lines, rungs) = build(count, &distinct);
        let mut reversed = rungs.clone();
        reversed.reverse();

        prop_assert_eq!(
            resolve(&lines, &rungs).unwrap(),
            resolve(&lines, &reversed).unwrap()
        );
        Ok(())
    }

    /// Matches composing adjacent swaps applied top to bottom.
    fn check_matches_swap_composition(
        count: usize,
        placed: &[(usize, f32)],
    ) -> Result<(), TestCaseError> {
        let (lines, rungs) = build(count, placed);
        let result = resolve(&lines, &rungs).unwrap();

        let mut ordered = placed.to_vec();
        ordered.sort_by(|a, b| a.1.total_cmp(&b.1));
        let mut slots: Vec<usize> = (1..=count).collect();
        for (left, _) in ordered {
            slots.swap(left, left + 1);
        }

        prop_assert_eq!(result.labels(), slots.as_slice());
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn result_is_bijection((count, placed) in ladder_strategy()) {
            check_result_is_bijection(count, &placed)?;
        }

        #[test]
        fn insertion_order_irrelevant((count, placed) in ladder_strategy()) {
            check_insertion_order_irrelevant(count, &placed)?;
        }

        #[test]
        fn matches_swap_composition((count, placed) in ladder_strategy()) {
            check_matches_swap_composition(count, &placed)?;
        }
    }
}
