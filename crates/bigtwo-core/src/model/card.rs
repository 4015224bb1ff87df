use crate::model::rank::Rank;
use crate::model::suit::Suit;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// An immutable playing card. The derived ordering compares rank first and
/// breaks ties by suit, which is the total order the whole engine ranks by.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// The card the holder of which must open the game.
    pub const THREE_OF_DIAMONDS: Card = Card::new(Rank::Three, Suit::Diamonds);
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCardError(pub String);

impl fmt::Display for ParseCardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid card {:?}", self.0)
    }
}

impl std::error::Error for ParseCardError {}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses the stable two-character encoding, e.g. `"3d"`, `"th"`, `"2s"`.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut chars = text.chars();
        let (Some(rank_char), Some(suit_char), None) =
            (chars.next(), chars.next(), chars.next())
        else {
            return Err(ParseCardError(text.to_string()));
        };
        match (Rank::from_char(rank_char), Suit::from_char(suit_char)) {
            (Some(rank), Some(suit)) => Ok(Card::new(rank, suit)),
            _ => Err(ParseCardError(text.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Card, Rank, Suit};

    #[test]
    fn rank_dominates_suit() {
        let four_of_diamonds = Card::new(Rank::Four, Suit::Diamonds);
        let three_of_spades = Card::new(Rank::Three, Suit::Spades);
        assert!(four_of_diamonds > three_of_spades);
    }

    #[test]
    fn suit_breaks_ties() {
        let seven_of_clubs = Card::new(Rank::Seven, Suit::Clubs);
        let seven_of_hearts = Card::new(Rank::Seven, Suit::Hearts);
        assert!(seven_of_hearts > seven_of_clubs);
    }

    #[test]
    fn parse_and_display_roundtrip() {
        for text in ["3d", "td", "jh", "ah", "2s"] {
            let card: Card = text.parse().unwrap();
            assert_eq!(card.to_string(), text);
        }
        assert!("3x".parse::<Card>().is_err());
        assert!("3dd".parse::<Card>().is_err());
        assert!("".parse::<Card>().is_err());
    }

    #[test]
    fn three_of_diamonds_is_the_lowest_card() {
        let parsed: Card = "3d".parse().unwrap();
        assert_eq!(parsed, Card::THREE_OF_DIAMONDS);
        assert_eq!(Card::THREE_OF_DIAMONDS, Card::new(Rank::Three, Suit::Diamonds));
    }
}
