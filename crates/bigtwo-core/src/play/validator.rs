use crate::model::card::Card;
use crate::play::combo::Combination;
use crate::play::generator;

/// The complete legal move set for a hand under the given game context.
///
/// With a previous play on the table only the sub-generators of matching
/// cardinality run, candidates must strictly beat the previous play, and a
/// pass sentinel closes the list (passing is always legal while there is
/// something to beat; an unplayable cardinality such as 4 leaves pass as the
/// only option). Leading a trick offers the union of every sub-generator in
/// generator order with no pass, and the very first play of a game is cut
/// down to combinations containing the three of diamonds.
pub fn valid_plays(
    hand: &[Card],
    previous_play: Option<&Combination>,
    is_starting_hand: bool,
) -> Vec<Combination> {
    if let Some(previous) = previous_play {
        let candidates = match previous.cards().len() {
            1 => generator::singles(hand),
            2 => generator::pairs(hand),
            3 => generator::triplets(hand),
            5 => generator::five_card_hands(hand),
            _ => Vec::new(),
        };
        let mut plays: Vec<Combination> = candidates
            .into_iter()
            .filter(|candidate| candidate.beats(previous))
            .collect();
        plays.push(Combination::pass());
        return plays;
    }

    let mut plays = generator::singles(hand);
    plays.extend(generator::pairs(hand));
    plays.extend(generator::triplets(hand));
    plays.extend(generator::five_card_hands(hand));
    if is_starting_hand {
        plays.retain(|play| play.contains(Card::THREE_OF_DIAMONDS));
    }
    plays
}
