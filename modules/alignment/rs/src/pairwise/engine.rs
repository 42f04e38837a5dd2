use crate::Alignable;

use super::aligned::{self, Aligned};
use super::error::Result;
use super::matrix::{AlignmentMatrix, Traceback, Variant};
use super::options::Options;
use super::scoring;
use super::select::DirectionSelector;

/// Shared core of the global and local aligners: owns the options, the sequences and the
/// matrix filled for them.
#[derive(Clone, Debug)]
pub(crate) struct Engine<S1, S2, Scheme, Sel, Smb>
where
    S1: Alignable<Symbol = Smb>,
    S2: Alignable<Symbol = Smb>,
    Scheme: scoring::Scheme<Symbol = Smb>,
    Sel: DirectionSelector,
{
    seq1: S1,
    seq2: S2,
    options: Options<Scheme, Sel, Smb>,
    matrix: AlignmentMatrix,
}

impl<S1, S2, Scheme, Sel, Smb> Engine<S1, S2, Scheme, Sel, Smb>
where
    S1: Alignable<Symbol = Smb>,
    S2: Alignable<Symbol = Smb>,
    Scheme: scoring::Scheme<Symbol = Smb>,
    Sel: DirectionSelector,
{
    pub fn new(
        seq1: S1,
        seq2: S2,
        options: Options<Scheme, Sel, Smb>,
        variant: Variant,
    ) -> Result<Self> {
        let matrix = AlignmentMatrix::fill(&seq1, &seq2, &options.scoring, variant)?;
        Ok(Self {
            seq1,
            seq2,
            options,
            matrix,
        })
    }

    pub fn matrix(&self) -> &AlignmentMatrix {
        &self.matrix
    }

    pub fn options(&self) -> &Options<Scheme, Sel, Smb> {
        &self.options
    }

    pub fn traceback(&self) -> Traceback<'_, Sel>
    where
        Sel: Clone,
    {
        self.matrix.traceback(self.options.selector.clone())
    }

    pub fn traceback_with<Other: DirectionSelector>(
        &self,
        selector: Other,
    ) -> Traceback<'_, Other> {
        self.matrix.traceback(selector)
    }

    pub fn align_with<Other: DirectionSelector>(&self, selector: Other) -> Result<Aligned<Smb>>
    where
        Smb: Clone,
    {
        aligned::render(
            &self.matrix,
            self.matrix.traceback(selector),
            &self.seq1,
            &self.seq2,
            &self.options.gap,
        )
    }

    pub fn align(&self) -> Result<Aligned<Smb>>
    where
        Sel: Clone,
        Smb: Clone,
    {
        self.align_with(self.options.selector.clone())
    }
}
