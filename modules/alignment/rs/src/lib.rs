pub use pairalign_core_rs::alignment::Alignable;

use pairalign_core_rs::num::PrimSInt;

pub mod pairwise;

/// Score values produced by scoring schemes. Accumulated inside the alignment matrix as `i64`.
pub trait Score: PrimSInt + Into<i64> {}

impl<T: PrimSInt + Into<i64>> Score for T {}
