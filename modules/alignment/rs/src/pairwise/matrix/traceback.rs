use std::iter::FusedIterator;

use crate::pairwise::cell::Direction;
use crate::pairwise::error::{Error, Result};
use crate::pairwise::select::DirectionSelector;

use super::{AlignmentMatrix, Variant};

/// A single traceback move. `row` and `col` are the coordinates of the cell being left.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct TraceStep {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

/// Lazily walks the matrix from a starting cell towards its predecessors.
///
/// Global tracebacks end at the origin; once the first row or column is reached, the walk
/// follows the boundary without consulting the selector. Local tracebacks end at the first
/// terminal cell or at the matrix boundary. The iterator yields at most one error and is
/// exhausted afterwards.
pub struct Traceback<'a, Sel: DirectionSelector> {
    matrix: &'a AlignmentMatrix,
    selector: Sel,
    row: usize,
    col: usize,
    finished: bool,
}

impl<'a, Sel: DirectionSelector> Traceback<'a, Sel> {
    pub(super) fn new(matrix: &'a AlignmentMatrix, row: usize, col: usize, selector: Sel) -> Self {
        Self {
            matrix,
            selector,
            row,
            col,
            finished: false,
        }
    }

    /// The cell the next step will leave from. Once exhausted, the cell where the walk stopped.
    pub fn position(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    fn choose(&self) -> Option<Result<Direction>> {
        let (row, col) = (self.row, self.col);
        let available = self.matrix.at(row, col).directions();

        if row == 0 || col == 0 {
            return match self.matrix.variant {
                Variant::Global => available.iter().next().map(Ok),
                Variant::Local => None,
            };
        }
        if available.is_empty() {
            return None;
        }

        let selected = self.selector.select(available);
        if available.contains(selected) {
            Some(Ok(selected))
        } else {
            Some(Err(Error::InvalidDirection {
                row,
                col,
                selected,
                available,
            }))
        }
    }
}

impl<Sel: DirectionSelector> Iterator for Traceback<'_, Sel> {
    type Item = Result<TraceStep>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let (row, col) = (self.row, self.col);
        let direction = match self.choose() {
            Some(Ok(direction)) => direction,
            Some(Err(err)) => {
                self.finished = true;
                return Some(Err(err));
            }
            None => {
                self.finished = true;
                return None;
            }
        };

        match direction.apply(row, col) {
            Some((prow, pcol)) => {
                self.row = prow;
                self.col = pcol;
                Some(Ok(TraceStep {
                    row,
                    col,
                    direction,
                }))
            }
            None => {
                self.finished = true;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            (0, Some(0))
        } else {
            (0, Some(self.row + self.col))
        }
    }
}

impl<Sel: DirectionSelector> FusedIterator for Traceback<'_, Sel> {}
