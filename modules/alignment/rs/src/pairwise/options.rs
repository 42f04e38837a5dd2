use derive_getters::Dissolve;

use super::scoring::{presets, Scheme};
use super::select::{DirectionSelector, Preference};

/// Aligner configuration: scoring scheme, traceback tie-break policy and the gap symbol used to
/// render alignments.
#[derive(Clone, Debug, Dissolve)]
pub struct Options<Sch, Sel, Smb> {
    pub scoring: Sch,
    pub selector: Sel,
    pub gap: Smb,
}

impl<Sch: Scheme> Options<Sch, Preference, Sch::Symbol>
where
    Sch::Symbol: Default,
{
    pub fn new(scoring: Sch) -> Self {
        Self {
            scoring,
            selector: Preference::default(),
            gap: Default::default(),
        }
    }
}

impl<Sch, Sel, Smb> Options<Sch, Sel, Smb> {
    pub fn with_gap(mut self, gap: Smb) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_selector<Other: DirectionSelector>(
        self,
        selector: Other,
    ) -> Options<Sch, Other, Smb> {
        Options {
            scoring: self.scoring,
            selector,
            gap: self.gap,
        }
    }

    pub fn with_scoring<Other: Scheme<Symbol = Smb>>(
        self,
        scoring: Other,
    ) -> Options<Other, Sel, Smb> {
        Options {
            scoring,
            selector: self.selector,
            gap: self.gap,
        }
    }
}

impl<Smb: PartialEq + Default> Options<presets::Basic<i32, Smb>, Preference, Smb> {
    /// match = 1, mismatch = 0, gap = 0
    pub fn needleman_wunsch() -> Self {
        Options::new(presets::needleman_wunsch())
    }

    /// match = 2, mismatch = -1, gap = -3
    pub fn smith_waterman() -> Self {
        Options::new(presets::smith_waterman())
    }
}

impl<Smb: PartialEq + Default> Default for Options<presets::Basic<i32, Smb>, Preference, Smb> {
    fn default() -> Self {
        Self::needleman_wunsch()
    }
}
