//! Local (Smith-Waterman) alignment: the highest scoring pair of substrings.

use crate::Alignable;

use super::aligned::Aligned;
use super::engine::Engine;
use super::error::Result;
use super::matrix::{AlignmentMatrix, AlignmentSeed, Traceback, Variant};
use super::options::Options;
use super::scoring;
use super::select::DirectionSelector;

/// A local alignment of two sequences.
///
/// Tracebacks start at the best scoring cell and stop at the first zero cell. If no cell scores
/// above zero, the alignment is empty and its score is zero.
#[derive(Clone, Debug)]
pub struct SmithWaterman<S1, S2, Scheme, Sel, Smb>
where
    S1: Alignable<Symbol = Smb>,
    S2: Alignable<Symbol = Smb>,
    Scheme: scoring::Scheme<Symbol = Smb>,
    Sel: DirectionSelector,
{
    engine: Engine<S1, S2, Scheme, Sel, Smb>,
}

impl<S1, S2, Scheme, Sel, Smb> SmithWaterman<S1, S2, Scheme, Sel, Smb>
where
    S1: Alignable<Symbol = Smb>,
    S2: Alignable<Symbol = Smb>,
    Scheme: scoring::Scheme<Symbol = Smb>,
    Sel: DirectionSelector,
{
    pub fn new(seq1: S1, seq2: S2, options: Options<Scheme, Sel, Smb>) -> Result<Self> {
        let engine = Engine::new(seq1, seq2, options, Variant::Local)?;
        Ok(Self { engine })
    }

    pub fn matrix(&self) -> &AlignmentMatrix {
        self.engine.matrix()
    }

    pub fn options(&self) -> &Options<Scheme, Sel, Smb> {
        self.engine.options()
    }

    pub fn value(&self, row: usize, col: usize) -> Result<i64> {
        self.engine.matrix().value(row, col)
    }

    pub fn max_score(&self) -> i64 {
        self.best().score
    }

    /// Best scoring cell, the origin when the matrix has no positive cells.
    pub fn best(&self) -> AlignmentSeed {
        let (row, col) = self.engine.matrix().terminal();
        AlignmentSeed {
            row,
            col,
            score: self.engine.matrix().at(row, col).score(),
        }
    }

    pub fn traceback(&self) -> Traceback<'_, Sel>
    where
        Sel: Clone,
    {
        self.engine.traceback()
    }

    pub fn traceback_with<Other: DirectionSelector>(
        &self,
        selector: Other,
    ) -> Traceback<'_, Other> {
        self.engine.traceback_with(selector)
    }

    pub fn align(&self) -> Result<Aligned<Smb>>
    where
        Sel: Clone,
        Smb: Clone,
    {
        self.engine.align()
    }

    pub fn align_with<Other: DirectionSelector>(&self, selector: Other) -> Result<Aligned<Smb>>
    where
        Smb: Clone,
    {
        self.engine.align_with(selector)
    }
}

/// Locally aligns two sequences and returns the aligned substrings padded with the gap symbol.
pub fn align<S1, S2, Scheme, Sel, Smb>(
    seq1: S1,
    seq2: S2,
    options: Options<Scheme, Sel, Smb>,
) -> Result<(Vec<Smb>, Vec<Smb>)>
where
    S1: Alignable<Symbol = Smb>,
    S2: Alignable<Symbol = Smb>,
    Scheme: scoring::Scheme<Symbol = Smb>,
    Sel: DirectionSelector + Clone,
    Smb: Clone,
{
    Ok(SmithWaterman::new(seq1, seq2, options)?.align()?.into_pair())
}
