use std::marker::PhantomData;

use crate::pairwise::scoring::Score;

pub trait Scorer {
    type Score: Score;
    type Symbol;

    fn score(
        &self,
        seq1pos: usize,
        s1: &Self::Symbol,
        seq2pos: usize,
        s2: &Self::Symbol,
    ) -> Self::Score;
}

pub trait PosInvariantScorer {
    type SymScore: Score;
    type Symbol;

    fn score(&self, s1: &Self::Symbol, s2: &Self::Symbol) -> Self::SymScore;
}

impl<T: PosInvariantScorer> Scorer for T {
    type Score = <Self as PosInvariantScorer>::SymScore;
    type Symbol = <Self as PosInvariantScorer>::Symbol;

    #[inline(always)]
    fn score(&self, _: usize, s1: &Self::Symbol, _: usize, s2: &Self::Symbol) -> Self::Score {
        PosInvariantScorer::score(self, s1, s2)
    }
}

#[derive(Debug)]
pub struct Equality<S: Score, Symbol> {
    pub equal: S,
    pub different: S,
    _phantom: PhantomData<Symbol>,
}

impl<S: Score, Symbol: PartialEq> PosInvariantScorer for Equality<S, Symbol> {
    type SymScore = S;
    type Symbol = Symbol;

    #[inline(always)]
    fn score(&self, a: &Self::Symbol, b: &Self::Symbol) -> Self::SymScore {
        if a == b { self.equal } else { self.different }
    }
}

impl<S: Score, Symbol: PartialEq> Equality<S, Symbol> {
    pub fn new(equal: S, different: S) -> Self {
        Self {
            equal,
            different,
            _phantom: Default::default(),
        }
    }
}

impl<S: Score, Symbol> Clone for Equality<S, Symbol> {
    fn clone(&self) -> Self {
        Self {
            equal: self.equal,
            different: self.different,
            _phantom: Default::default(),
        }
    }
}

/// Substitution scores computed by an arbitrary function, e.g. a lookup into a substitution matrix.
#[derive(Clone)]
pub struct Closure<S: Score, Symbol, F: Fn(&Symbol, &Symbol) -> S> {
    func: F,
    _phantom: PhantomData<(S, Symbol)>,
}

impl<S: Score, Symbol, F: Fn(&Symbol, &Symbol) -> S> Closure<S, Symbol, F> {
    pub fn new(func: F) -> Self {
        Self {
            func,
            _phantom: Default::default(),
        }
    }
}

impl<S: Score, Symbol, F: Fn(&Symbol, &Symbol) -> S> PosInvariantScorer for Closure<S, Symbol, F> {
    type SymScore = S;
    type Symbol = Symbol;

    #[inline(always)]
    fn score(&self, a: &Self::Symbol, b: &Self::Symbol) -> Self::SymScore {
        (self.func)(a, b)
    }
}
