use crate::model::card::Card;
use crate::model::rank::Rank;
use crate::model::suit::Suit;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(52);
        for rank in Rank::ORDERED.iter().copied() {
            for suit in Suit::ALL.iter().copied() {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    pub fn shuffled<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::standard();
        deck.cards.shuffle(rng);
        deck
    }

    pub fn shuffled_with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Splits the deck into equal consecutive slices, one per player. Any
    /// remainder when the deck does not divide evenly stays undealt.
    pub fn deal(&self, player_count: usize) -> Vec<Vec<Card>> {
        let per_player = self.cards.len() / player_count;
        (0..player_count)
            .map(|i| self.cards[i * per_player..(i + 1) * per_player].to_vec())
            .collect()
    }
}
