use crate::model::card::Card;
use crate::play::category::Category;
use core::fmt;
use serde::{Deserialize, Serialize};

/// A category-tagged, order-sensitive group of cards offered as one play.
///
/// Card order is part of the contract: straights and flushes ascend by rank,
/// a full house stores its pair before its triplet and a four-of-a-kind its
/// quad before the kicker. The comparator relies on those positions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Combination {
    category: Category,
    cards: Vec<Card>,
}

impl Combination {
    pub fn new(category: Category, cards: Vec<Card>) -> Self {
        debug_assert_eq!(cards.len(), category.card_count());
        Self { category, cards }
    }

    pub fn pass() -> Self {
        Self {
            category: Category::Pass,
            cards: Vec::new(),
        }
    }

    pub fn win() -> Self {
        Self {
            category: Category::Win,
            cards: Vec::new(),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn is_pass(&self) -> bool {
        self.category == Category::Pass
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// The one card whose total order captures this combination's strength
    /// within its category: the quad representative for a four-of-a-kind,
    /// the last stored card for everything else. Sentinels have none.
    pub fn strength_card(&self) -> Option<Card> {
        match self.category {
            Category::Pass | Category::Win => None,
            Category::FourOfAKind => self.cards.first().copied(),
            _ => self.cards.last().copied(),
        }
    }

    /// Whether this play may legally follow `previous`: higher category wins
    /// outright, equal categories fall back to the designated card. Sentinels
    /// never beat and are never beaten.
    pub fn beats(&self, previous: &Combination) -> bool {
        if self.category.is_sentinel() || previous.category.is_sentinel() {
            return false;
        }
        if self.category != previous.category {
            return self.category > previous.category;
        }
        match (self.strength_card(), previous.strength_card()) {
            (Some(own), Some(other)) => own > other,
            _ => false,
        }
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)?;
        for (i, card) in self.cards.iter().enumerate() {
            if i == 0 {
                write!(f, ": {card}")?;
            } else {
                write!(f, " {card}")?;
            }
        }
        Ok(())
    }
}
