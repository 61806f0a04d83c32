//! Ladder model: vertical lines, the gaps between them, and rungs.
//!
//! A lottery is drawn as N parallel [`VerticalLine`]s spread along the x
//! axis, connected by [`HorizontalLine`] rungs. Vertical lines are created
//! together as one [`VerticalLines`] batch. Every batch carries a
//! process-unique [`BatchId`], and every rung remembers the batch it was
//! placed against, so a rung outliving its batch can be detected instead of
//! being silently resolved against an unrelated ladder.
//!
//! Identity is positional. A vertical line is identified by its
//! [`VerticalIndex`] within its batch, never by its coordinate.

use std::{
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};

/// Identifier of one generated batch of vertical lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BatchId(u64);

impl BatchId {
    /// The batch of an empty ladder that was never generated.
    pub const EMPTY: BatchId = BatchId(0);

    /// Allocates a batch id that has not been handed out before.
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw id value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for BatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Zero-based index of a vertical line within its batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VerticalIndex(usize);

impl VerticalIndex {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw zero-based index.
    pub fn get(self) -> usize {
        self.0
    }

    /// Returns the 1-based label printed above this line.
    pub fn label(self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for VerticalIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for VerticalIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// One of the N lottery lines.
///
/// Deliberately not `PartialEq`: two lines are the same line only when
/// they share a batch and an index.
#[derive(Debug, Clone, Copy)]
pub struct VerticalLine {
    index: VerticalIndex,
    position: f32,
}

impl VerticalLine {
    /// Returns the index of this line within its batch.
    pub fn index(&self) -> VerticalIndex {
        self.index
    }

    /// Returns the x coordinate of this line.
    pub fn position(&self) -> f32 {
        self.position
    }
}

/// An ordered batch of vertical lines.
///
/// Lines are sorted by position, left to right, and are never mutated after
/// the batch is built. The default value is the empty ladder shown before
/// any lottery was generated.
#[derive(Debug, Clone)]
pub struct VerticalLines {
    batch: BatchId,
    lines: Vec<VerticalLine>,
}

impl Default for VerticalLines {
    fn default() -> Self {
        Self {
            batch: BatchId::EMPTY,
            lines: Vec::new(),
        }
    }
}

impl VerticalLines {
    /// Builds a new batch from positions given in ascending order.
    pub(crate) fn from_positions(positions: impl IntoIterator<Item = f32>) -> Self {
        let lines = positions
            .into_iter()
            .enumerate()
            .map(|(index, position)| VerticalLine {
                index: VerticalIndex(index),
                position,
            })
            .collect();

        Self {
            batch: BatchId::next(),
            lines,
        }
    }

    /// Returns the id of this batch.
    pub fn batch(&self) -> BatchId {
        self.batch
    }

    /// Returns the number of vertical lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if the batch holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the line at `index`, if it exists.
    pub fn get(&self, index: VerticalIndex) -> Option<&VerticalLine> {
        self.lines.get(index.0)
    }

    /// Returns the lines as a slice, left to right.
    pub fn as_slice(&self) -> &[VerticalLine] {
        &self.lines
    }

    /// Iterates over the lines, left to right.
    pub fn iter(&self) -> impl Iterator<Item = &VerticalLine> {
        self.lines.iter()
    }

    /// Returns the gap between line `left` and line `left + 1`.
    ///
    /// Returns `None` when `left` is the last line or out of range.
    pub fn gap(&self, left: usize) -> Option<Gap> {
        (left < self.lines.len().saturating_sub(1)).then_some(Gap {
            batch: self.batch,
            left: VerticalIndex(left),
        })
    }

    /// Iterates over every gap between adjacent lines, left to right.
    pub fn gaps(&self) -> impl Iterator<Item = Gap> + '_ {
        (0..self.lines.len().saturating_sub(1)).map(|left| Gap {
            batch: self.batch,
            left: VerticalIndex(left),
        })
    }

    /// Returns the x coordinates of both lines bounding `gap`.
    ///
    /// Returns `None` if the gap belongs to another batch.
    pub fn gap_bounds(&self, gap: Gap) -> Option<(f32, f32)> {
        if gap.batch != self.batch {
            return None;
        }
        let start = self.lines.get(gap.start().0)?;
        let end = self.lines.get(gap.end().0)?;
        Some((start.position, end.position))
    }
}

/// The space between two adjacent vertical lines of one batch.
///
/// A `Gap` can only be obtained from a [`VerticalLines`] batch, which is what
/// guarantees that the two lines it names are adjacent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Gap {
    batch: BatchId,
    left: VerticalIndex,
}

impl Gap {
    /// Returns the batch this gap belongs to.
    pub fn batch(&self) -> BatchId {
        self.batch
    }

    /// Returns the left line of the gap.
    pub fn start(&self) -> VerticalIndex {
        self.left
    }

    /// Returns the right line of the gap.
    pub fn end(&self) -> VerticalIndex {
        VerticalIndex(self.left.0 + 1)
    }

    /// Returns both lines of the gap as an index pair `(i, i + 1)`.
    pub fn indices(&self) -> (VerticalIndex, VerticalIndex) {
        (self.start(), self.end())
    }
}

/// A rung connecting two adjacent vertical lines at a given height.
///
/// Rungs are immutable once created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalLine {
    batch: BatchId,
    start: VerticalIndex,
    end: VerticalIndex,
    position: f32,
}

impl HorizontalLine {
    /// Creates a rung across `gap` at the y coordinate `position`.
    pub fn new(gap: Gap, position: f32) -> Self {
        Self {
            batch: gap.batch,
            start: gap.start(),
            end: gap.end(),
            position,
        }
    }

    /// Returns the batch this rung was placed against.
    pub fn batch(&self) -> BatchId {
        self.batch
    }

    /// Returns the left line the rung starts at.
    pub fn start(&self) -> VerticalIndex {
        self.start
    }

    /// Returns the right line the rung ends at.
    pub fn end(&self) -> VerticalIndex {
        self.end
    }

    /// Returns the y coordinate of the rung.
    pub fn position(&self) -> f32 {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(positions: &[f32]) -> VerticalLines {
        VerticalLines::from_positions(positions.iter().copied())
    }

    #[test]
    fn test_default_is_empty() {
        let ladder = VerticalLines::default();
        assert!(ladder.is_empty());
        assert_eq!(ladder.batch(), BatchId::EMPTY);
        assert_eq!(ladder.gaps().count(), 0);
    }

    #[test]
    fn test_batches_are_unique() {
        let first = lines(&[10.0, 20.0]);
        let second = lines(&[10.0, 20.0]);
        assert_ne!(first.batch(), second.batch());
        assert_ne!(first.batch(), BatchId::EMPTY);
    }

    #[test]
    fn test_lines_are_indexed_in_order() {
        let ladder = lines(&[10.0, 20.0, 30.0]);
        let indices: Vec<_> = ladder.iter().map(|line| line.index().get()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(ladder.get(VerticalIndex::new(1)).map(|l| l.position()), Some(20.0));
        assert!(ladder.get(VerticalIndex::new(3)).is_none());
    }

    #[test]
    fn test_gap_bounds_checked() {
        let ladder = lines(&[10.0, 20.0, 30.0]);
        assert!(ladder.gap(0).is_some());
        assert!(ladder.gap(1).is_some());
        assert!(ladder.gap(2).is_none());
        assert!(ladder.gap(usize::MAX).is_none());
    }

    #[test]
    fn test_gap_indices_are_adjacent() {
        let ladder = lines(&[10.0, 20.0, 30.0, 40.0]);
        for gap in ladder.gaps() {
            let (start, end) = gap.indices();
            assert_eq!(end.get(), start.get() + 1);
            assert_eq!(gap.batch(), ladder.batch());
        }
        assert_eq!(ladder.gaps().count(), 3);
    }

    #[test]
    fn test_gap_bounds_rejects_other_batch() {
        let old = lines(&[10.0, 20.0]);
        let new = lines(&[10.0, 20.0]);
        let gap = old.gap(0).unwrap();
        assert_eq!(old.gap_bounds(gap), Some((10.0, 20.0)));
        assert_eq!(new.gap_bounds(gap), None);
    }

    #[test]
    fn test_rung_from_gap() {
        let ladder = lines(&[10.0, 20.0, 30.0]);
        let rung = HorizontalLine::new(ladder.gap(1).unwrap(), 42.0);
        assert_eq!(rung.start(), VerticalIndex::new(1));
        assert_eq!(rung.end(), VerticalIndex::new(2));
        assert_eq!(rung.position(), 42.0);
        assert_eq!(rung.batch(), ladder.batch());
    }

    #[test]
    fn test_vertical_index_label() {
        assert_eq!(VerticalIndex::new(0).label(), 1);
        assert_eq!(VerticalIndex::from(4).label(), 5);
        assert_eq!(BatchId::EMPTY.to_string(), "#0");
    }
}
