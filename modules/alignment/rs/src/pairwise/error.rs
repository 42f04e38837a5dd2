use derive_more::{Display, Error};

use super::cell::{Direction, Directions};
use super::matrix::Variant;

/// Failures reported by the alignment engine. None of them are transient.
#[derive(Clone, Eq, PartialEq, Debug, Hash, Display, Error)]
pub enum Error {
    /// A matrix coordinate is outside of the grid.
    #[display("out of bounds (row: {row} >= {rows} || col: {col} >= {cols})")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// A direction selector picked a move that is not among the cell's optimal predecessors.
    #[display("invalid direction selected at ({row}, {col}): {selected:?} is not in {available:?}")]
    InvalidDirection {
        row: usize,
        col: usize,
        selected: Direction,
        available: Directions,
    },
    /// The operation is meaningless for the alignment variant of the matrix.
    #[display("'{operation}' is not supported by the {variant} alignment")]
    UnsupportedVariant {
        operation: &'static str,
        variant: Variant,
    },
    /// A cell score left the range representable by the packed cell encoding.
    #[display("score overflow at ({row}, {col})")]
    Overflow { row: usize, col: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
