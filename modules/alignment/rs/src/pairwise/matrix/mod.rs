use derive_getters::Getters;
use derive_more::Display;

use crate::Alignable;

use super::cell::{Cell, Direction};
use super::error::{Error, Result};
use super::scoring::Scheme;
use super::select::DirectionSelector;

pub use traceback::{TraceStep, Traceback};

mod traceback;

/// Alignment flavour. Decides boundary initialization, zero clamping and where tracebacks start.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Display)]
pub enum Variant {
    /// End-to-end alignment (Needleman-Wunsch)
    #[display("global")]
    Global,
    /// Best scoring pair of substrings (Smith-Waterman)
    #[display("local")]
    Local,
}

/// Highest scoring cell of a local alignment matrix.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct AlignmentSeed {
    pub row: usize,
    pub col: usize,
    pub score: i64,
}

/// Dense (len(seq1) + 1) x (len(seq2) + 1) dynamic programming matrix of packed cells.
///
/// Rows follow the first sequence, columns follow the second one. Cells are stored row-major.
/// The matrix is immutable once filled and can be traced back any number of times, from any
/// number of threads.
#[derive(Clone, Debug, Getters)]
pub struct AlignmentMatrix {
    rows: usize,
    cols: usize,
    variant: Variant,
    #[getter(skip)]
    cells: Vec<Cell>,
    #[getter(skip)]
    best: AlignmentSeed,
}

#[inline(always)]
fn representable(score: i64, row: usize, col: usize) -> Result<i64> {
    if (Cell::MIN_SCORE..=Cell::MAX_SCORE).contains(&score) {
        Ok(score)
    } else {
        Err(Error::Overflow { row, col })
    }
}

#[inline(always)]
fn accumulate(score: i64, delta: i64, row: usize, col: usize) -> Result<i64> {
    let score = score.checked_add(delta).ok_or(Error::Overflow { row, col })?;
    representable(score, row, col)
}

impl AlignmentMatrix {
    /// Fills the matrix for the given pair of sequences.
    ///
    /// Global matrices accumulate gap scores along the first row and column. Local matrices
    /// start from zero boundaries and clamp every non-positive cell to a terminal zero.
    pub fn fill<S1, S2, Sch>(seq1: &S1, seq2: &S2, scheme: &Sch, variant: Variant) -> Result<Self>
    where
        S1: Alignable<Symbol = Sch::Symbol>,
        S2: Alignable<Symbol = Sch::Symbol>,
        Sch: Scheme,
    {
        let (rows, cols) = (seq1.len() + 1, seq2.len() + 1);
        let mut cells = Vec::with_capacity(rows * cols);
        let mut best = AlignmentSeed {
            row: 0,
            col: 0,
            score: 0,
        };

        // First row
        cells.push(Cell::terminal(0));
        let mut score = 0;
        for col in 1..cols {
            let cell = match variant {
                Variant::Global => {
                    let s2 = seq2.at(col - 1);
                    score = accumulate(score, scheme.score_insert(col - 1, s2).into(), 0, col)?;
                    Cell::new(score, Direction::Left.into())
                }
                Variant::Local => Cell::terminal(0),
            };
            cells.push(cell);
        }

        for row in 1..rows {
            let s1 = seq1.at(row - 1);
            let delete: i64 = scheme.score_delete(row - 1, s1).into();
            let above = (row - 1) * cols;

            let first = match variant {
                Variant::Global => {
                    let score = accumulate(cells[above].score(), delete, row, 0)?;
                    Cell::new(score, Direction::Up.into())
                }
                Variant::Local => Cell::terminal(0),
            };
            cells.push(first);

            for col in 1..cols {
                let s2 = seq2.at(col - 1);
                // Saturated candidates still lose the max, only the winner must fit into a cell
                let diagonal = cells[above + col - 1]
                    .score()
                    .saturating_add(scheme.score_align(row - 1, s1, col - 1, s2).into());
                let up = cells[above + col].score().saturating_add(delete);
                let left = cells[above + cols + col - 1]
                    .score()
                    .saturating_add(scheme.score_insert(col - 1, s2).into());
                let max = diagonal.max(up).max(left);

                let cell = if variant == Variant::Local && max <= 0 {
                    Cell::terminal(0)
                } else {
                    representable(max, row, col)?;
                    Cell::encode(diagonal, up, left)
                };
                if variant == Variant::Local && cell.score() > 0 && cell.score() >= best.score {
                    // Ties go to the cell visited last in row-major order
                    best = AlignmentSeed {
                        row,
                        col,
                        score: cell.score(),
                    };
                }
                cells.push(cell);
            }
        }

        log::debug!("Filled {variant} alignment matrix: {rows} x {cols}");
        if variant == Variant::Local && best.score == 0 {
            log::debug!("Local alignment matrix has no positive cells, the alignment is empty");
        }

        Ok(Self {
            rows,
            cols,
            variant,
            cells,
            best,
        })
    }

    #[inline(always)]
    pub(crate) fn at(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    fn check(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            Err(Error::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        } else {
            Ok(())
        }
    }

    fn unsupported(&self, operation: &'static str) -> Error {
        Error::UnsupportedVariant {
            operation,
            variant: self.variant,
        }
    }

    /// Packed cell at the given coordinates.
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell> {
        self.check(row, col)?;
        Ok(self.at(row, col))
    }

    /// Decoded score at the given coordinates.
    pub fn value(&self, row: usize, col: usize) -> Result<i64> {
        Ok(self.cell(row, col)?.score())
    }

    /// Score of the global alignment, i.e. the bottom-right cell.
    pub fn score(&self) -> Result<i64> {
        match self.variant {
            Variant::Global => Ok(self.at(self.rows - 1, self.cols - 1).score()),
            Variant::Local => Err(self.unsupported("score")),
        }
    }

    /// Highest score of the local matrix, zero if no cell is positive.
    pub fn max_score(&self) -> Result<i64> {
        Ok(self.best()?.score)
    }

    /// Highest scoring cell of the local matrix, the origin if no cell is positive.
    pub fn best(&self) -> Result<AlignmentSeed> {
        match self.variant {
            Variant::Global => Err(self.unsupported("best")),
            Variant::Local => Ok(self.best),
        }
    }

    /// Where the default traceback starts.
    pub fn terminal(&self) -> (usize, usize) {
        match self.variant {
            Variant::Global => (self.rows - 1, self.cols - 1),
            Variant::Local => (self.best.row, self.best.col),
        }
    }

    /// Decoded scores, one vector per row.
    pub fn to_score_matrix(&self) -> Vec<Vec<i64>> {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().map(Cell::score).collect())
            .collect()
    }

    /// Lazy traceback from the terminal cell of the matrix.
    pub fn traceback<Sel: DirectionSelector>(&self, selector: Sel) -> Traceback<'_, Sel> {
        let (row, col) = self.terminal();
        Traceback::new(self, row, col, selector)
    }

    /// Lazy traceback from an arbitrary cell.
    pub fn traceback_from<Sel: DirectionSelector>(
        &self,
        row: usize,
        col: usize,
        selector: Sel,
    ) -> Result<Traceback<'_, Sel>> {
        self.check(row, col)?;
        Ok(Traceback::new(self, row, col, selector))
    }
}
