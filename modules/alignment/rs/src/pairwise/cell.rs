use std::fmt::{Debug, Formatter};

use derive_more::BitOr;

/// A move through the alignment matrix, named by the predecessor it points to.
///
/// Rows are indexed by the first sequence and columns by the second one:
/// * `Diagonal` consumes one symbol of each sequence (match or mismatch);
/// * `Up` consumes a symbol of the first sequence only (deletion, gap in the second sequence);
/// * `Left` consumes a symbol of the second sequence only (insertion, gap in the first sequence).
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Direction {
    Diagonal = 0b001,
    Up = 0b010,
    Left = 0b100,
}

impl Direction {
    pub const ALL: [Direction; 3] = [Direction::Diagonal, Direction::Up, Direction::Left];

    /// Returns the symbol representation of the direction.
    pub fn symbol(&self) -> char {
        match self {
            Direction::Diagonal => '\\',
            Direction::Up => '^',
            Direction::Left => '<',
        }
    }

    /// Coordinates of the predecessor cell, `None` if the move leaves the matrix.
    pub fn apply(&self, row: usize, col: usize) -> Option<(usize, usize)> {
        match self {
            Direction::Diagonal => Some((row.checked_sub(1)?, col.checked_sub(1)?)),
            Direction::Up => Some((row.checked_sub(1)?, col)),
            Direction::Left => Some((row, col.checked_sub(1)?)),
        }
    }
}

/// A set of directions. The empty set marks cells where a traceback must stop.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, BitOr)]
pub struct Directions(u8);

impl Directions {
    pub const NONE: Directions = Directions(0);

    pub fn contains(&self, direction: Direction) -> bool {
        self.0 & direction as u8 != 0
    }

    pub fn with(self, direction: Direction) -> Self {
        Directions(self.0 | direction as u8)
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterates over the directions in the set in the `Diagonal`, `Up`, `Left` order.
    pub fn iter(&self) -> impl Iterator<Item = Direction> {
        let set = *self;
        Direction::ALL.into_iter().filter(move |x| set.contains(*x))
    }
}

impl From<Direction> for Directions {
    fn from(value: Direction) -> Self {
        Directions(value as u8)
    }
}

impl FromIterator<Direction> for Directions {
    fn from_iter<T: IntoIterator<Item = Direction>>(iter: T) -> Self {
        iter.into_iter().fold(Directions::NONE, Directions::with)
    }
}

impl Debug for Directions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

const FLAG_BITS: u32 = 3;
const FLAG_MASK: i64 = (1 << FLAG_BITS) - 1;

/// A single cell of the alignment matrix: the best score of the prefix alignment together with
/// every direction that attains it, packed into one `i64`.
///
/// The score occupies the upper 61 bits (arithmetic shift keeps the sign), the direction flags
/// occupy the lower 3 bits.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Cell(i64);

impl Cell {
    pub const MAX_SCORE: i64 = i64::MAX >> FLAG_BITS;
    pub const MIN_SCORE: i64 = i64::MIN >> FLAG_BITS;

    /// Packs a score and a direction set. The score must be within `MIN_SCORE..=MAX_SCORE`,
    /// the matrix fill range-checks every score before packing it.
    #[inline(always)]
    pub(crate) fn new(score: i64, directions: Directions) -> Self {
        debug_assert!((Self::MIN_SCORE..=Self::MAX_SCORE).contains(&score));
        Cell((score << FLAG_BITS) | directions.0 as i64)
    }

    /// A cell without predecessors: traceback stops here.
    #[inline(always)]
    pub(crate) fn terminal(score: i64) -> Self {
        Self::new(score, Directions::NONE)
    }

    /// Keeps the maximum of the three candidate scores and flags every candidate that reaches it.
    #[inline(always)]
    pub(crate) fn encode(diagonal: i64, up: i64, left: i64) -> Self {
        let max = diagonal.max(up).max(left);

        let mut flags = 0;
        if diagonal == max {
            flags |= Direction::Diagonal as u8;
        }
        if up == max {
            flags |= Direction::Up as u8;
        }
        if left == max {
            flags |= Direction::Left as u8;
        }
        Self::new(max, Directions(flags))
    }

    #[inline(always)]
    pub fn score(&self) -> i64 {
        self.0 >> FLAG_BITS
    }

    #[inline(always)]
    pub fn directions(&self) -> Directions {
        Directions((self.0 & FLAG_MASK) as u8)
    }

    #[inline(always)]
    pub fn is_terminal(&self) -> bool {
        self.directions().is_empty()
    }
}

impl Debug for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cell")
            .field("score", &self.score())
            .field("directions", &self.directions())
            .finish()
    }
}
