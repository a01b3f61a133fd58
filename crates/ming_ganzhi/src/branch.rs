//! The twelve earthly branches.
//!
//! Each branch carries one primary element (stepping through the five
//! elements in cycle order) and exactly three hidden stems, taken from the
//! stem table at alternating offsets from the branch's own index.

use serde::{Deserialize, Serialize};

use crate::element::{ALL_ELEMENTS, Element};
use crate::stem::{ALL_STEMS, Stem};

/// The twelve earthly branches in cycle order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All twelve branches in order (index 0 = Zi).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

impl Branch {
    /// 0-based index (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Pinyin name of the branch.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    /// Primary element: branch index stepped through the five elements.
    pub const fn primary_element(self) -> Element {
        ALL_ELEMENTS[(self.index() % 5) as usize]
    }

    /// The branch's three hidden stems, in table order.
    ///
    /// Hidden stem k sits at stem index `(branch_index + 2k) mod 10`. The
    /// hidden stems contribute to total element/polarity tallies but never
    /// to the visible ones.
    pub const fn hidden_stems(self) -> [Stem; 3] {
        let b = self.index() as usize;
        [
            ALL_STEMS[b % 10],
            ALL_STEMS[(b + 2) % 10],
            ALL_STEMS[(b + 4) % 10],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
        }
    }

    #[test]
    fn primary_element_steps_through_the_cycle() {
        assert_eq!(Branch::Zi.primary_element(), Element::Wood);
        assert_eq!(Branch::Chou.primary_element(), Element::Fire);
        assert_eq!(Branch::Si.primary_element(), Element::Wood);
        assert_eq!(Branch::Hai.primary_element(), Element::Fire);
    }

    #[test]
    fn hidden_stems_at_alternating_offsets() {
        assert_eq!(
            Branch::Zi.hidden_stems(),
            [Stem::Jia, Stem::Bing, Stem::Wu]
        );
        assert_eq!(Branch::Si.hidden_stems(), [Stem::Ji, Stem::Xin, Stem::Gui]);
        assert_eq!(
            Branch::Xu.hidden_stems(),
            [Stem::Jia, Stem::Bing, Stem::Wu]
        );
    }

    #[test]
    fn every_branch_has_three_hidden_stems() {
        for b in ALL_BRANCHES {
            assert_eq!(b.hidden_stems().len(), 3);
        }
    }
}
