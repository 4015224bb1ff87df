use core::fmt;
use serde::{Deserialize, Serialize};

/// Card rank in climbing order: 3 is the weakest rank and 2 the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Three = 0,
    Four = 1,
    Five = 2,
    Six = 3,
    Seven = 4,
    Eight = 5,
    Nine = 6,
    Ten = 7,
    Jack = 8,
    Queen = 9,
    King = 10,
    Ace = 11,
    Two = 12,
}

impl Rank {
    pub const ORDERED: [Rank; 13] = [
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
        Rank::Two,
    ];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Rank::Three),
            1 => Some(Rank::Four),
            2 => Some(Rank::Five),
            3 => Some(Rank::Six),
            4 => Some(Rank::Seven),
            5 => Some(Rank::Eight),
            6 => Some(Rank::Nine),
            7 => Some(Rank::Ten),
            8 => Some(Rank::Jack),
            9 => Some(Rank::Queen),
            10 => Some(Rank::King),
            11 => Some(Rank::Ace),
            12 => Some(Rank::Two),
            _ => None,
        }
    }

    /// Position in the climbing order, 0 for Three through 12 for Two.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_char(symbol: char) -> Option<Self> {
        match symbol {
            '3' => Some(Rank::Three),
            '4' => Some(Rank::Four),
            '5' => Some(Rank::Five),
            '6' => Some(Rank::Six),
            '7' => Some(Rank::Seven),
            '8' => Some(Rank::Eight),
            '9' => Some(Rank::Nine),
            't' => Some(Rank::Ten),
            'j' => Some(Rank::Jack),
            'q' => Some(Rank::Queen),
            'k' => Some(Rank::King),
            'a' => Some(Rank::Ace),
            '2' => Some(Rank::Two),
            _ => None,
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 't',
            Rank::Jack => 'j',
            Rank::Queen => 'q',
            Rank::King => 'k',
            Rank::Ace => 'a',
            Rank::Two => '2',
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
