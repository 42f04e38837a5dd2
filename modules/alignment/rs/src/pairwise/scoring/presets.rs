//! Default scoring configurations.

use crate::pairwise::scoring::{compose, gaps, symbols, Delegate, Score};

/// Fixed match/mismatch rewards and a single linear gap cost.
pub type Basic<S, Symbol> =
    Delegate<S, Symbol, symbols::Equality<S, Symbol>, gaps::Linear<S, Symbol>>;

pub fn basic<S: Score, Symbol: PartialEq>(matched: S, mismatched: S, gap: S) -> Basic<S, Symbol> {
    compose(
        symbols::Equality::new(matched, mismatched),
        gaps::Linear::new(gap),
    )
}

/// match = 1, mismatch = 0, gap = 0. The default for global alignments.
pub fn needleman_wunsch<S: Score, Symbol: PartialEq>() -> Basic<S, Symbol> {
    basic(S::one(), S::zero(), S::zero())
}

/// match = 1, mismatch = -1, gap = -1
pub fn alternative<S: Score, Symbol: PartialEq>() -> Basic<S, Symbol> {
    basic(S::one(), -S::one(), -S::one())
}

/// match = 2, mismatch = -1, gap = -3. The default for local alignments.
pub fn smith_waterman<S: Score, Symbol: PartialEq>() -> Basic<S, Symbol> {
    let two = S::one() + S::one();
    basic(two, -S::one(), -(two + S::one()))
}
