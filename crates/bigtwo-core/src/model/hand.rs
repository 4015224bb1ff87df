use crate::model::card::Card;

/// A player's hand, kept sorted ascending by the card total order.
///
/// Every mutation bumps a version counter; cached play-option lists are keyed
/// on that version so they invalidate the moment the hand changes.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
    version: u64,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cards(cards: Vec<Card>) -> Self {
        let mut hand = Self {
            cards,
            version: 0,
        };
        hand.cards.sort();
        hand
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
        self.cards.sort();
        self.version += 1;
    }

    /// Removes exactly the given cards. Fails without mutating the hand when
    /// any of them is missing, so a play can never half-apply.
    pub fn remove_all(&mut self, cards: &[Card]) -> bool {
        if !cards.iter().all(|card| self.cards.contains(card)) {
            return false;
        }
        self.cards.retain(|card| !cards.contains(card));
        self.version += 1;
        true
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn version(&self) -> u64 {
        self.version
    }
}
