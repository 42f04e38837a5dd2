pub use delegate::Delegate;

pub use crate::Score;

mod delegate;
pub mod gaps;
pub mod presets;
pub mod symbols;

/// A scoring policy for the alignment matrix.
///
/// `score_delete` prices a symbol of the first sequence (matrix rows) aligned against a gap,
/// `score_insert` a symbol of the second sequence (matrix columns) aligned against a gap.
/// All functions must be pure and total.
pub trait Scheme {
    type Score: Score;
    type Symbol;

    fn score_align(
        &self,
        seq1pos: usize,
        s1: &Self::Symbol,
        seq2pos: usize,
        s2: &Self::Symbol,
    ) -> Self::Score;

    fn score_delete(&self, seq1pos: usize, s1: &Self::Symbol) -> Self::Score;

    fn score_insert(&self, seq2pos: usize, s2: &Self::Symbol) -> Self::Score;
}

impl<T: Scheme> Scheme for &T {
    type Score = T::Score;
    type Symbol = T::Symbol;

    #[inline(always)]
    fn score_align(
        &self,
        seq1pos: usize,
        s1: &Self::Symbol,
        seq2pos: usize,
        s2: &Self::Symbol,
    ) -> Self::Score {
        (**self).score_align(seq1pos, s1, seq2pos, s2)
    }

    #[inline(always)]
    fn score_delete(&self, seq1pos: usize, s1: &Self::Symbol) -> Self::Score {
        (**self).score_delete(seq1pos, s1)
    }

    #[inline(always)]
    fn score_insert(&self, seq2pos: usize, s2: &Self::Symbol) -> Self::Score {
        (**self).score_insert(seq2pos, s2)
    }
}

pub fn compose<ScoreType, Symbol, S, G>(symbols: S, gaps: G) -> Delegate<ScoreType, Symbol, S, G>
where
    ScoreType: Score,
    S: symbols::Scorer<Symbol = Symbol, Score = ScoreType>,
    G: gaps::Scorer<Symbol = Symbol, Score = ScoreType>,
{
    Delegate::new(symbols, gaps)
}

/// Scores aligned symbols with a plain function and charges a constant penalty per gap.
pub fn with_gap_penalty<ScoreType, Symbol, F>(
    score: F,
    gap: ScoreType,
) -> Delegate<
    ScoreType,
    Symbol,
    symbols::Closure<ScoreType, Symbol, F>,
    gaps::Linear<ScoreType, Symbol>,
>
where
    ScoreType: Score,
    F: Fn(&Symbol, &Symbol) -> ScoreType,
{
    compose(symbols::Closure::new(score), gaps::Linear::new(gap))
}
