use std::marker::PhantomData;

use crate::pairwise::scoring::Score;

// Gap scoring function MUST be additive: each symbol skipped against a gap is priced
// independently of its neighbours (no gap open/extend distinction).
pub trait Scorer {
    type Score: Score;
    type Symbol;

    /// A symbol of the first sequence is aligned against a gap in the second one.
    fn seq1_gap(&self, pos: usize, s1: &Self::Symbol) -> Self::Score;
    /// A symbol of the second sequence is aligned against a gap in the first one.
    fn seq2_gap(&self, pos: usize, s2: &Self::Symbol) -> Self::Score;
}

pub trait PosInvariantScorer {
    type GapScore: Score;
    type Symbol;

    fn gap(&self) -> Self::GapScore;
}

impl<T: PosInvariantScorer> Scorer for T {
    type Score = <Self as PosInvariantScorer>::GapScore;
    type Symbol = <Self as PosInvariantScorer>::Symbol;

    #[inline(always)]
    fn seq1_gap(&self, _: usize, _: &Self::Symbol) -> Self::Score {
        self.gap()
    }

    #[inline(always)]
    fn seq2_gap(&self, _: usize, _: &Self::Symbol) -> Self::Score {
        self.gap()
    }
}

#[derive(Debug)]
pub struct Linear<S: Score, Symbol> {
    pub penalty: S,
    _phantom: PhantomData<Symbol>,
}

impl<S: Score, Symbol> Linear<S, Symbol> {
    pub fn new(penalty: S) -> Self {
        Self {
            penalty,
            _phantom: Default::default(),
        }
    }
}

impl<S: Score, Symbol> Clone for Linear<S, Symbol> {
    fn clone(&self) -> Self {
        Self::new(self.penalty)
    }
}

impl<S: Score, Symbol> PosInvariantScorer for Linear<S, Symbol> {
    type GapScore = S;
    type Symbol = Symbol;

    #[inline(always)]
    fn gap(&self) -> Self::GapScore {
        self.penalty
    }
}
