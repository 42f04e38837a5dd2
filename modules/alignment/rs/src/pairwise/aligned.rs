use std::ops::Range;

use derive_getters::{Dissolve, Getters};

use crate::Alignable;

use super::cell::Direction;
use super::error::Result;
use super::matrix::{AlignmentMatrix, Traceback};
use super::select::DirectionSelector;

/// A rendered pairwise alignment.
///
/// Both aligned vectors have the same length, gaps are filled with the gap symbol. Removing the
/// gaps from `aligned1` (`aligned2`) restores `seq1` (`seq2`) range of the first (second)
/// sequence. No column holds gaps on both sides.
#[derive(Clone, Eq, PartialEq, Debug, Getters, Dissolve)]
pub struct Aligned<T> {
    score: i64,
    seq1: Range<usize>,
    seq2: Range<usize>,
    aligned1: Vec<T>,
    aligned2: Vec<T>,
}

impl<T> Aligned<T> {
    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.aligned1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aligned1.is_empty()
    }

    /// Alignment columns from left to right.
    pub fn columns(&self) -> impl Iterator<Item = (&T, &T)> {
        self.aligned1.iter().zip(self.aligned2.iter())
    }

    /// The same alignment with the roles of the sequences exchanged.
    pub fn swapped(self) -> Self {
        Self {
            score: self.score,
            seq1: self.seq2,
            seq2: self.seq1,
            aligned1: self.aligned2,
            aligned2: self.aligned1,
        }
    }

    pub fn into_pair(self) -> (Vec<T>, Vec<T>) {
        (self.aligned1, self.aligned2)
    }
}

/// Consumes a traceback and lays out both sequences along the traced path.
pub(crate) fn render<S1, S2, Sel, T>(
    matrix: &AlignmentMatrix,
    traceback: Traceback<'_, Sel>,
    seq1: &S1,
    seq2: &S2,
    gap: &T,
) -> Result<Aligned<T>>
where
    S1: Alignable<Symbol = T>,
    S2: Alignable<Symbol = T>,
    Sel: DirectionSelector,
    T: Clone,
{
    let (end1, end2) = traceback.position();
    let steps = traceback.collect::<Result<Vec<_>>>()?;
    let (start1, start2) = steps
        .last()
        .and_then(|step| step.direction.apply(step.row, step.col))
        .unwrap_or((end1, end2));

    let mut aligned1 = Vec::with_capacity(steps.len());
    let mut aligned2 = Vec::with_capacity(steps.len());
    for step in steps.iter().rev() {
        let (s1, s2) = match step.direction {
            Direction::Diagonal => (seq1.at(step.row - 1), seq2.at(step.col - 1)),
            Direction::Up => (seq1.at(step.row - 1), gap),
            Direction::Left => (gap, seq2.at(step.col - 1)),
        };
        aligned1.push(s1.clone());
        aligned2.push(s2.clone());
    }

    let score = matrix.at(end1, end2).score() - matrix.at(start1, start2).score();
    Ok(Aligned {
        score,
        seq1: start1..end1,
        seq2: start2..end2,
        aligned1,
        aligned2,
    })
}
