//! Global (Needleman-Wunsch) alignment: both sequences are aligned end to end.

use crate::Alignable;

use super::aligned::Aligned;
use super::engine::Engine;
use super::error::Result;
use super::matrix::{AlignmentMatrix, Traceback, Variant};
use super::options::Options;
use super::scoring;
use super::select::DirectionSelector;

/// A global alignment of two sequences. The matrix is filled on construction, tracebacks and
/// renderings are computed on demand and may be requested repeatedly.
#[derive(Clone, Debug)]
pub struct NeedlemanWunsch<S1, S2, Scheme, Sel, Smb>
where
    S1: Alignable<Symbol = Smb>,
    S2: Alignable<Symbol = Smb>,
    Scheme: scoring::Scheme<Symbol = Smb>,
    Sel: DirectionSelector,
{
    engine: Engine<S1, S2, Scheme, Sel, Smb>,
}

impl<S1, S2, Scheme, Sel, Smb> NeedlemanWunsch<S1, S2, Scheme, Sel, Smb>
where
    S1: Alignable<Symbol = Smb>,
    S2: Alignable<Symbol = Smb>,
    Scheme: scoring::Scheme<Symbol = Smb>,
    Sel: DirectionSelector,
{
    pub fn new(seq1: S1, seq2: S2, options: Options<Scheme, Sel, Smb>) -> Result<Self> {
        let engine = Engine::new(seq1, seq2, options, Variant::Global)?;
        Ok(Self { engine })
    }

    pub fn matrix(&self) -> &AlignmentMatrix {
        self.engine.matrix()
    }

    pub fn options(&self) -> &Options<Scheme, Sel, Smb> {
        self.engine.options()
    }

    /// Matrix score at the given coordinates.
    pub fn value(&self, row: usize, col: usize) -> Result<i64> {
        self.engine.matrix().value(row, col)
    }

    /// Score of the optimal global alignment.
    pub fn score(&self) -> i64 {
        let (row, col) = self.engine.matrix().terminal();
        self.engine.matrix().at(row, col).score()
    }

    /// Traceback from the bottom-right cell to the origin using the configured selector.
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

/// Globally aligns two sequences and returns them padded with the gap symbol.
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
    Ok(NeedlemanWunsch::new(seq1, seq2, options)?.align()?.into_pair())
}
