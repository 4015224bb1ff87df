use core::fmt;
use serde::{Deserialize, Serialize};

/// Shape of a play, in strictly increasing beat priority. Any category beats
/// any lower one of the same card count, so e.g. every flush beats every
/// straight.
///
/// `Pass` and `Win` are sentinels used by the turn machine and history; the
/// generator never produces them and the comparator never ranks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Category {
    Pass = 0,
    Single = 1,
    Pair = 2,
    Triplet = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    Win = 9,
}

impl Category {
    /// Number of cards a combination of this category carries.
    pub const fn card_count(self) -> usize {
        match self {
            Category::Pass | Category::Win => 0,
            Category::Single => 1,
            Category::Pair => 2,
            Category::Triplet => 3,
            Category::Straight
            | Category::Flush
            | Category::FullHouse
            | Category::FourOfAKind
            | Category::StraightFlush => 5,
        }
    }

    pub const fn is_sentinel(self) -> bool {
        matches!(self, Category::Pass | Category::Win)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Pass => "pass",
            Category::Single => "single",
            Category::Pair => "pair",
            Category::Triplet => "triplet",
            Category::Straight => "straight",
            Category::Flush => "flush",
            Category::FullHouse => "fullhouse",
            Category::FourOfAKind => "fourofakind",
            Category::StraightFlush => "straightflush",
            Category::Win => "win",
        };
        f.write_str(label)
    }
}
