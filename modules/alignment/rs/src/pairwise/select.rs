use super::cell::{Direction, Directions};

/// Tie-break policy: picks the next traceback move among the directions that attain a cell's score.
///
/// Returning a direction outside of `available` is a bug in the policy and aborts the traceback
/// with [`Error::InvalidDirection`](super::Error::InvalidDirection).
pub trait DirectionSelector {
    fn select(&self, available: Directions) -> Direction;
}

impl<F: Fn(Directions) -> Direction> DirectionSelector for F {
    #[inline(always)]
    fn select(&self, available: Directions) -> Direction {
        self(available)
    }
}

/// Selects the first available direction in a fixed order of preference.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Preference([Direction; 3]);

impl Preference {
    /// Diagonal, then row-consuming (up), then column-consuming (left).
    pub const DIAGONAL_FIRST: Preference =
        Preference([Direction::Diagonal, Direction::Up, Direction::Left]);
    /// Row-consuming (up), then diagonal, then column-consuming (left).
    pub const UP_FIRST: Preference =
        Preference([Direction::Up, Direction::Diagonal, Direction::Left]);
    /// Column-consuming (left), then diagonal, then row-consuming (up).
    pub const LEFT_FIRST: Preference =
        Preference([Direction::Left, Direction::Diagonal, Direction::Up]);

    pub fn new(order: [Direction; 3]) -> Self {
        Self(order)
    }

    pub fn order(&self) -> &[Direction; 3] {
        &self.0
    }
}

impl Default for Preference {
    fn default() -> Self {
        Self::DIAGONAL_FIRST
    }
}

impl DirectionSelector for Preference {
    #[inline(always)]
    fn select(&self, available: Directions) -> Direction {
        // An order that doesn't cover the available set yields its first entry, which is then
        // rejected by the traceback.
        self.0
            .iter()
            .copied()
            .find(|x| available.contains(*x))
            .unwrap_or(self.0[0])
    }
}
