use std::marker::PhantomData;

use crate::pairwise::scoring::{gaps, symbols, Score};

/// Scoring scheme assembled from independent symbol and gap scorers.
pub struct Delegate<ScoreType, Symbol, S, G>
where
    ScoreType: Score,
    S: symbols::Scorer<Symbol = Symbol, Score = ScoreType>,
    G: gaps::Scorer<Symbol = Symbol, Score = ScoreType>,
{
    pub symbols: S,
    pub gaps: G,
    symbol: PhantomData<Symbol>,
    score: PhantomData<ScoreType>,
}

impl<ScoreType, Symbol, S, G> Delegate<ScoreType, Symbol, S, G>
where
    ScoreType: Score,
    S: symbols::Scorer<Symbol = Symbol, Score = ScoreType>,
    G: gaps::Scorer<Symbol = Symbol, Score = ScoreType>,
{
    pub fn new(symbols: S, gaps: G) -> Self {
        Delegate {
            symbols,
            gaps,
            symbol: Default::default(),
            score: Default::default(),
        }
    }
}

impl<ScoreType, Symbol, S, G> Clone for Delegate<ScoreType, Symbol, S, G>
where
    ScoreType: Score,
    S: symbols::Scorer<Symbol = Symbol, Score = ScoreType> + Clone,
    G: gaps::Scorer<Symbol = Symbol, Score = ScoreType> + Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.symbols.clone(), self.gaps.clone())
    }
}

impl<ScoreType, Symbol, S, G> std::fmt::Debug for Delegate<ScoreType, Symbol, S, G>
where
    ScoreType: Score,
    S: symbols::Scorer<Symbol = Symbol, Score = ScoreType> + std::fmt::Debug,
    G: gaps::Scorer<Symbol = Symbol, Score = ScoreType> + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Delegate")
            .field("symbols", &self.symbols)
            .field("gaps", &self.gaps)
            .finish()
    }
}

impl<ScoreType, Symbol, S, G> super::Scheme for Delegate<ScoreType, Symbol, S, G>
where
    ScoreType: Score,
    S: symbols::Scorer<Symbol = Symbol, Score = ScoreType>,
    G: gaps::Scorer<Symbol = Symbol, Score = ScoreType>,
{
    type Score = ScoreType;
    type Symbol = Symbol;

    #[inline(always)]
    fn score_align(
        &self,
        posa: usize,
        a: &Self::Symbol,
        posb: usize,
        b: &Self::Symbol,
    ) -> Self::Score {
        self.symbols.score(posa, a, posb, b)
    }

    #[inline(always)]
    fn score_delete(&self, pos: usize, a: &Self::Symbol) -> Self::Score {
        self.gaps.seq1_gap(pos, a)
    }

    #[inline(always)]
    fn score_insert(&self, pos: usize, b: &Self::Symbol) -> Self::Score {
        self.gaps.seq2_gap(pos, b)
    }
}
