use crate::model::card::Card;
use crate::model::hand::Hand;
use crate::play::combo::Combination;
use crate::play::validator::valid_plays;

/// A hand plus a memoized option list.
///
/// The memo is keyed on (hand version, previous play, starting flag) rather
/// than cleared imperatively, so staleness is impossible by construction: any
/// hand mutation bumps the version and the next lookup recomputes.
#[derive(Debug, Clone, Default)]
pub struct Player {
    hand: Hand,
    cache: OptionCache,
}

#[derive(Debug, Clone, Default)]
struct OptionCache {
    key: Option<OptionKey>,
    options: Vec<Combination>,
}

#[derive(Debug, Clone, PartialEq)]
struct OptionKey {
    hand_version: u64,
    previous_play: Option<Combination>,
    is_starting_hand: bool,
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_hand(&mut self, cards: Vec<Card>) {
        self.hand = Hand::with_cards(cards);
        self.cache = OptionCache::default();
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// The legal plays for this hand under the given context, 0-indexed and
    /// stable until the hand next mutates.
    pub fn play_options(
        &mut self,
        previous_play: Option<&Combination>,
        is_starting_hand: bool,
    ) -> &[Combination] {
        let key = OptionKey {
            hand_version: self.hand.version(),
            previous_play: previous_play.cloned(),
            is_starting_hand,
        };
        if self.cache.key.as_ref() != Some(&key) {
            self.cache.options = valid_plays(self.hand.cards(), previous_play, is_starting_hand);
            self.cache.key = Some(key);
        }
        &self.cache.options
    }

    /// Discards the combination's cards from the hand. Passing removes
    /// nothing and always succeeds.
    pub fn play(&mut self, combination: &Combination) -> bool {
        self.hand.remove_all(combination.cards())
    }
}
