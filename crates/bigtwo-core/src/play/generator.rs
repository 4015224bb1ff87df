//! Enumerates every combination formable from a hand, one function per
//! category. Inputs are always sorted ascending by the card total order and
//! the emission order of each function is part of the contract: callers and
//! tests rely on deterministic enumeration.

use crate::model::card::Card;
use crate::model::rank::Rank;
use crate::model::suit::Suit;
use crate::play::category::Category;
use crate::play::combo::Combination;

/// One single per card, in hand order.
pub fn singles(cards: &[Card]) -> Vec<Combination> {
    cards
        .iter()
        .map(|&card| Combination::new(Category::Single, vec![card]))
        .collect()
}

/// Every 2-subset of equal rank, scanning index pairs (i, j) with i < j.
pub fn pairs(cards: &[Card]) -> Vec<Combination> {
    let mut out = Vec::new();
    for i in 0..cards.len() {
        for j in i + 1..cards.len() {
            if cards[i].rank == cards[j].rank {
                out.push(Combination::new(Category::Pair, vec![cards[i], cards[j]]));
            }
        }
    }
    out
}

/// For each rank held three times, the one triplet; for a rank held four
/// times, all four 3-of-4 selections in combinatorial order.
pub fn triplets(cards: &[Card]) -> Vec<Combination> {
    let mut out = Vec::new();
    for tier in rank_tiers(cards) {
        match tier.len() {
            3 => out.push(Combination::new(Category::Triplet, tier)),
            4 => out.extend(
                k_subsets(&tier, 3)
                    .into_iter()
                    .map(|pick| Combination::new(Category::Triplet, pick)),
            ),
            _ => {}
        }
    }
    out
}

/// Every run of five consecutive ranks wholly present in the hand, ascending
/// by starting rank, with the cartesian product of card choices per rank.
/// The top rank's choice varies outermost and the bottom rank's innermost.
/// A run drawn from a single suit is tagged a straight flush instead.
///
/// Runs never wrap: Two is the top of the highest straight (J-Q-K-A-2), not
/// the bottom of a new one.
pub fn straights(cards: &[Card]) -> Vec<Combination> {
    let tiers = rank_tiers(cards);
    let mut out = Vec::new();
    for start in 0..=Rank::ORDERED.len() - 5 {
        let window = &tiers[start..start + 5];
        if window.iter().any(|tier| tier.is_empty()) {
            continue;
        }
        for &c5 in &window[4] {
            for &c4 in &window[3] {
                for &c3 in &window[2] {
                    for &c2 in &window[1] {
                        for &c1 in &window[0] {
                            let run = vec![c1, c2, c3, c4, c5];
                            let category = if run.iter().all(|c| c.suit == c1.suit) {
                                Category::StraightFlush
                            } else {
                                Category::Straight
                            };
                            out.push(Combination::new(category, run));
                        }
                    }
                }
            }
        }
    }
    out
}

/// Every 5-subset of a suit held five or more times, excluding consecutive
/// runs, which [`straights`] already emitted as straight flushes.
pub fn flushes(cards: &[Card]) -> Vec<Combination> {
    let mut out = Vec::new();
    for suit in Suit::ALL {
        let suited: Vec<Card> = cards.iter().copied().filter(|c| c.suit == suit).collect();
        if suited.len() < 5 {
            continue;
        }
        for pick in k_subsets(&suited, 5) {
            if pick[0].rank.index() + 4 == pick[4].rank.index() {
                continue;
            }
            out.push(Combination::new(Category::Flush, pick));
        }
    }
    out
}

/// Every triplet-rank × pair-rank pairing over distinct ranks, stored with
/// the pair first and the triplet last. Two ranks that both qualify as the
/// triplet produce distinct full houses in each orientation.
pub fn full_houses(cards: &[Card]) -> Vec<Combination> {
    let tiers = rank_tiers(cards);
    let candidates: Vec<&Vec<Card>> = tiers.iter().filter(|tier| tier.len() >= 2).collect();
    let mut out = Vec::new();
    for &triple_tier in &candidates {
        if triple_tier.len() < 3 {
            continue;
        }
        for &pair_tier in &candidates {
            if pair_tier[0].rank == triple_tier[0].rank {
                continue;
            }
            for triple in k_subsets(triple_tier, 3) {
                for pair in k_subsets(pair_tier, 2) {
                    let mut run = pair;
                    run.extend_from_slice(&triple);
                    out.push(Combination::new(Category::FullHouse, run));
                }
            }
        }
    }
    out
}

/// For each rank held exactly four times, the quad plus every other card in
/// the hand as a kicker, one play per kicker in hand order.
pub fn four_of_a_kinds(cards: &[Card]) -> Vec<Combination> {
    let tiers = rank_tiers(cards);
    let mut out = Vec::new();
    for quad_tier in &tiers {
        if quad_tier.len() != 4 {
            continue;
        }
        let quad_rank = quad_tier[0].rank;
        for kicker in cards.iter().copied().filter(|c| c.rank != quad_rank) {
            let mut run = quad_tier.clone();
            run.push(kicker);
            out.push(Combination::new(Category::FourOfAKind, run));
        }
    }
    out
}

/// All five-card shapes, concatenated in category-generator order.
pub fn five_card_hands(cards: &[Card]) -> Vec<Combination> {
    let mut out = straights(cards);
    out.extend(flushes(cards));
    out.extend(full_houses(cards));
    out.extend(four_of_a_kinds(cards));
    out
}

/// Buckets the hand by rank index, each bucket in hand order.
fn rank_tiers(cards: &[Card]) -> [Vec<Card>; 13] {
    let mut tiers: [Vec<Card>; 13] = std::array::from_fn(|_| Vec::new());
    for &card in cards {
        tiers[card.rank.index()].push(card);
    }
    tiers
}

/// All k-subsets in lexicographic index order.
fn k_subsets(cards: &[Card], k: usize) -> Vec<Vec<Card>> {
    let n = cards.len();
    if k > n {
        return Vec::new();
    }
    let mut indices: Vec<usize> = (0..k).collect();
    let mut out = Vec::new();
    loop {
        out.push(indices.iter().map(|&i| cards[i]).collect());
        let Some(pivot) = (0..k).rev().find(|&i| indices[i] < i + n - k) else {
            return out;
        };
        indices[pivot] += 1;
        for i in pivot + 1..k {
            indices[i] = indices[i - 1] + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(text: &str) -> Vec<Card> {
        let mut cards: Vec<Card> = text
            .split_whitespace()
            .map(|c| c.parse().unwrap())
            .collect();
        cards.sort();
        cards
    }

    fn rendered(combos: &[Combination]) -> Vec<String> {
        combos.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn pairs_scan_index_pairs_in_order() {
        assert!(pairs(&hand("3d 4s")).is_empty());

        let plain = pairs(&hand("3d 3s 4d 4c"));
        assert_eq!(rendered(&plain), ["pair: 3d 3s", "pair: 4d 4c"]);

        let overlapping = pairs(&hand("3d 3h 3s"));
        assert_eq!(
            rendered(&overlapping),
            ["pair: 3d 3h", "pair: 3d 3s", "pair: 3h 3s"]
        );
    }

    #[test]
    fn triplets_expand_four_held_cards() {
        assert!(triplets(&hand("3d 4s")).is_empty());

        let plain = triplets(&hand("3d 3h 3s 4d 4c 4s"));
        assert_eq!(
            rendered(&plain),
            ["triplet: 3d 3h 3s", "triplet: 4d 4c 4s"]
        );

        let from_quad = triplets(&hand("3d 3c 3h 3s"));
        assert_eq!(
            rendered(&from_quad),
            [
                "triplet: 3d 3c 3h",
                "triplet: 3d 3c 3s",
                "triplet: 3d 3h 3s",
                "triplet: 3c 3h 3s",
            ]
        );
    }

    #[test]
    fn straights_take_every_run_choice() {
        assert!(straights(&hand("3d 4s")).is_empty());

        let single_run = straights(&hand("3d 4c 5s 6h 7d"));
        assert_eq!(rendered(&single_run), ["straight: 3d 4c 5s 6h 7d"]);

        // Duplicate bottom rank: the lowest rank's choice varies innermost.
        let duplicated = straights(&hand("3d 3c 4c 5s 6h 7d"));
        assert_eq!(
            rendered(&duplicated),
            ["straight: 3d 4c 5s 6h 7d", "straight: 3c 4c 5s 6h 7d"]
        );
    }

    #[test]
    fn single_suit_run_is_a_straight_flush() {
        let run = straights(&hand("3d 4d 5d 6d 7d"));
        assert_eq!(rendered(&run), ["straightflush: 3d 4d 5d 6d 7d"]);
    }

    #[test]
    fn straights_never_wrap_past_two() {
        // 2-3-4-5-6 is not a straight; J-Q-K-A-2 is the highest one.
        assert!(straights(&hand("2d 3c 4s 5h 6d")).is_empty());
        let top = straights(&hand("jd qc ks ah 2d"));
        assert_eq!(rendered(&top), ["straight: jd qc ks ah 2d"]);
    }

    #[test]
    fn flushes_enumerate_five_subsets_per_suit() {
        assert!(flushes(&hand("3d 4s")).is_empty());

        let exact = flushes(&hand("3d 4d 5d 6d td"));
        assert_eq!(rendered(&exact), ["flush: 3d 4d 5d 6d td"]);

        let six_held = flushes(&hand("3d 4d 5d 6d 8d 9d"));
        assert_eq!(
            rendered(&six_held),
            [
                "flush: 3d 4d 5d 6d 8d",
                "flush: 3d 4d 5d 6d 9d",
                "flush: 3d 4d 5d 8d 9d",
                "flush: 3d 4d 6d 8d 9d",
                "flush: 3d 5d 6d 8d 9d",
                "flush: 4d 5d 6d 8d 9d",
            ]
        );
    }

    #[test]
    fn flushes_exclude_straight_flushes() {
        assert!(flushes(&hand("3d 4d 5d 6d 7d")).is_empty());
    }

    #[test]
    fn full_houses_store_pair_before_triplet() {
        assert!(full_houses(&hand("3d 4s 5s 6s 7s")).is_empty());

        let plain = full_houses(&hand("3d 3c 4c 6d 6h 6s"));
        assert_eq!(rendered(&plain), ["fullhouse: 3d 3c 6d 6h 6s"]);
    }

    #[test]
    fn both_rank_orientations_are_distinct_full_houses() {
        let both = full_houses(&hand("3d 3c 3s 6c 6h 6s"));
        assert_eq!(
            rendered(&both),
            [
                "fullhouse: 6c 6h 3d 3c 3s",
                "fullhouse: 6c 6s 3d 3c 3s",
                "fullhouse: 6h 6s 3d 3c 3s",
                "fullhouse: 3d 3c 6c 6h 6s",
                "fullhouse: 3d 3s 6c 6h 6s",
                "fullhouse: 3c 3s 6c 6h 6s",
            ]
        );
    }

    #[test]
    fn four_of_a_kinds_take_every_kicker() {
        assert!(four_of_a_kinds(&hand("3d 4s 5s 6s 7s")).is_empty());

        let quads = four_of_a_kinds(&hand("3d 3c 3h 3s 6c 6h 6s"));
        assert_eq!(
            rendered(&quads),
            [
                "fourofakind: 3d 3c 3h 3s 6c",
                "fourofakind: 3d 3c 3h 3s 6h",
                "fourofakind: 3d 3c 3h 3s 6s",
            ]
        );
    }

    #[test]
    fn five_card_hands_concatenate_in_generator_order() {
        assert!(five_card_hands(&hand("3d 4s 5s 6s 8s")).is_empty());

        let lone = five_card_hands(&hand("3d 3c 3h 3s 6c"));
        assert_eq!(rendered(&lone), ["fourofakind: 3d 3c 3h 3s 6c"]);

        let mixed = five_card_hands(&hand("3d 3c 3h 3s 6c 6h 7d 8d 9d tc kd"));
        assert_eq!(
            rendered(&mixed),
            [
                "straight: 6c 7d 8d 9d tc",
                "straight: 6h 7d 8d 9d tc",
                "flush: 3d 7d 8d 9d kd",
                "fullhouse: 6c 6h 3d 3c 3h",
                "fullhouse: 6c 6h 3d 3c 3s",
                "fullhouse: 6c 6h 3d 3h 3s",
                "fullhouse: 6c 6h 3c 3h 3s",
                "fourofakind: 3d 3c 3h 3s 6c",
                "fourofakind: 3d 3c 3h 3s 6h",
                "fourofakind: 3d 3c 3h 3s 7d",
                "fourofakind: 3d 3c 3h 3s 8d",
                "fourofakind: 3d 3c 3h 3s 9d",
                "fourofakind: 3d 3c 3h 3s tc",
                "fourofakind: 3d 3c 3h 3s kd",
            ]
        );
    }

    #[test]
    fn generation_is_idempotent() {
        let cards = hand("3d 3c 3h 3s 6c 6h 7d 8d 9d tc kd");
        assert_eq!(five_card_hands(&cards), five_card_hands(&cards));
        assert_eq!(pairs(&cards), pairs(&cards));
    }

    #[test]
    fn every_combination_draws_from_the_hand_without_reuse() {
        let cards = hand("3d 3c 3h 3s 6c 6h 7d 8d 9d tc kd");
        let mut all = singles(&cards);
        all.extend(pairs(&cards));
        all.extend(triplets(&cards));
        all.extend(five_card_hands(&cards));
        for combo in &all {
            assert_eq!(combo.cards().len(), combo.category().card_count());
            for (i, card) in combo.cards().iter().enumerate() {
                assert!(cards.contains(card));
                assert!(!combo.cards()[i + 1..].contains(card), "{combo} reuses {card}");
            }
        }
    }
}
