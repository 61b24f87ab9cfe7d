use super::hand::Hand;
use super::kicks::Kickers;
use super::rank::Rank;
use super::ranking::Ranking;
use super::strength::Strength;
use super::suit::Suit;

/// A6789 plays as a Nine-high straight
const WHEEL: u16 = 0b_0100_0011_1100_0000;
const LOWEST_STRAIGHT_RANK: Rank = Rank::Nine;

/// Classifies exactly five cards.
///
/// Categories are tried strongest first in short deck order, so the first
/// match wins. Multiplicities are exact: a rank held three times is never
/// read as a pair.
pub struct Evaluator(Hand);
impl From<Hand> for Evaluator {
    fn from(h: Hand) -> Self {
        assert!(h.size() == 5, "classify 5 cards, not {}", h.size());
        Self(h)
    }
}

impl From<Evaluator> for Strength {
    fn from(evaluator: Evaluator) -> Self {
        let ranking = evaluator.find_ranking();
        let kickers = evaluator.find_kickers(ranking);
        Self::from((ranking, kickers))
    }
}

impl Evaluator {
    pub fn find_ranking(&self) -> Ranking {
        None.or_else(|| self.find_straight_flush())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_3_oak_2_oak())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_2_oak_2_oak())
            .or_else(|| self.find_2_oak())
            .unwrap_or(Ranking::HighCard)
    }
    pub fn find_kickers(&self, ranking: Ranking) -> Kickers {
        match ranking {
            Ranking::Straight | Ranking::StraightFlush => {
                Kickers::from(self.find_rank_of_straight().into_iter().collect::<Vec<_>>())
            }
            _ => Kickers::from(self.find_ranks_by_multiplicity()),
        }
    }

    ///

    fn find_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2).map(|_| Ranking::OnePair)
    }
    fn find_3_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3).map(|_| Ranking::ThreeOAK)
    }
    fn find_4_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(4).map(|_| Ranking::FourOAK)
    }
    fn find_2_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2).and_then(|hi| {
            self.find_rank_of_n_oak_skip(2, Some(hi))
                .map(|_| Ranking::TwoPair)
        })
    }
    fn find_3_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3)
            .and(self.find_rank_of_n_oak(2))
            .map(|_| Ranking::FullHouse)
    }
    fn find_straight(&self) -> Option<Ranking> {
        self.find_rank_of_straight().map(|_| Ranking::Straight)
    }
    fn find_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush().map(|_| Ranking::Flush)
    }
    fn find_straight_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush()
            .and(self.find_rank_of_straight())
            .map(|_| Ranking::StraightFlush)
    }

    /// one bit per distinct rank, at the rank's value
    fn rank_bits(&self) -> u16 {
        Rank::all()
            .iter()
            .filter(|r| self.0.freq(r) > 0)
            .map(|&r| 1u16 << u8::from(r))
            .fold(0u16, |a, b| a | b)
    }
    fn find_rank_of_straight(&self) -> Option<Rank> {
        let ranks = self.rank_bits();
        let mut bits = ranks;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        if bits > 0 {
            Some(Rank::from((15 - bits.leading_zeros()) as u8))
        } else if ranks == WHEEL {
            Some(LOWEST_STRAIGHT_RANK)
        } else {
            None
        }
    }
    fn find_suit_of_flush(&self) -> Option<Suit> {
        Suit::all()
            .into_iter()
            .find(|s| self.0.of(s).size() == 5)
    }
    fn find_rank_of_n_oak(&self, n: usize) -> Option<Rank> {
        self.find_rank_of_n_oak_skip(n, None)
    }
    fn find_rank_of_n_oak_skip(&self, n: usize, skip: Option<Rank>) -> Option<Rank> {
        Rank::all()
            .into_iter()
            .rev()
            .filter(|&r| Some(r) != skip)
            .find(|r| self.0.freq(r) == n)
    }
    /// distinct ranks, most copies first, ties broken high to low.
    /// this is the tie-break order of every category but the straights
    fn find_ranks_by_multiplicity(&self) -> Vec<Rank> {
        let mut ranks = Rank::all()
            .into_iter()
            .rev()
            .map(|r| (self.0.freq(&r), r))
            .filter(|&(n, _)| n > 0)
            .collect::<Vec<_>>();
        ranks.sort_by(|a, b| b.0.cmp(&a.0));
        ranks.into_iter().map(|(_, r)| r).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::card::Card;
    use crate::cards::hands::HandIterator;
    use std::collections::BTreeMap;

    fn strength(s: &str) -> Strength {
        Strength::from(
            s.split_whitespace()
                .map(|c| Card::try_from(c).unwrap())
                .collect::<Hand>(),
        )
    }
    fn ranks(s: &str) -> Vec<Rank> {
        s.chars().map(|c| Rank::try_from(c).unwrap()).collect()
    }

    #[test]
    fn straight_flush() {
        let s = strength("Ts Js Qs Ks As");
        assert_eq!(s.ranking(), Ranking::StraightFlush);
        assert_eq!(Vec::<Rank>::from(s.kickers()), ranks("A"));
    }

    #[test]
    fn wheel_is_nine_high() {
        let s = strength("Ah 6d 7c 8s 9h");
        assert_eq!(s.ranking(), Ranking::Straight);
        assert_eq!(Vec::<Rank>::from(s.kickers()), ranks("9"));
        assert!(s < strength("6d 7c 8s 9h Th"));
    }

    #[test]
    fn steel_wheel() {
        let s = strength("Ac 6c 7c 8c 9c");
        assert_eq!(s.ranking(), Ranking::StraightFlush);
        assert_eq!(Vec::<Rank>::from(s.kickers()), ranks("9"));
    }

    #[test]
    fn four_oak() {
        let s = strength("7d 7c 7h 7s Kd");
        assert_eq!(s.ranking(), Ranking::FourOAK);
        assert_eq!(Vec::<Rank>::from(s.kickers()), ranks("7K"));
    }

    #[test]
    fn flush_over_full_house() {
        let flush = strength("6h 8h Th Jh Kh");
        let boat = strength("Ad Ac Ah Ks Kd");
        assert_eq!(flush.ranking(), Ranking::Flush);
        assert_eq!(boat.ranking(), Ranking::FullHouse);
        assert_eq!(Vec::<Rank>::from(flush.kickers()), ranks("KJT86"));
        assert_eq!(Vec::<Rank>::from(boat.kickers()), ranks("AK"));
        assert!(flush > boat);
    }

    #[test]
    fn full_house_orders_trips_first() {
        let s = strength("6d 6c 6h As Ad");
        assert_eq!(s.ranking(), Ranking::FullHouse);
        assert_eq!(Vec::<Rank>::from(s.kickers()), ranks("6A"));
    }

    #[test]
    fn three_oak() {
        let s = strength("9d 9c 9h As 6d");
        assert_eq!(s.ranking(), Ranking::ThreeOAK);
        assert_eq!(Vec::<Rank>::from(s.kickers()), ranks("9A6"));
    }

    #[test]
    fn two_pair() {
        let s = strength("Td Tc Qh Qs 6d");
        assert_eq!(s.ranking(), Ranking::TwoPair);
        assert_eq!(Vec::<Rank>::from(s.kickers()), ranks("QT6"));
    }

    #[test]
    fn one_pair() {
        let s = strength("8d 8c Ah Ts 6d");
        assert_eq!(s.ranking(), Ranking::OnePair);
        assert_eq!(Vec::<Rank>::from(s.kickers()), ranks("8AT6"));
    }

    #[test]
    fn high_card() {
        let s = strength("Ad Jc 9h 8s 6d");
        assert_eq!(s.ranking(), Ranking::HighCard);
        assert_eq!(Vec::<Rank>::from(s.kickers()), ranks("AJ986"));
    }

    #[test]
    fn kickers_break_ties() {
        assert!(strength("8d 8c Ah Ts 6d") > strength("8h 8s Ac 9s 7d"));
        assert!(strength("Td Tc Qh Qs 7d") > strength("Th Ts Qd Qc 6d"));
        assert_eq!(strength("Ad Jc 9h 8s 6d"), strength("Ac Jh 9s 8d 6h"));
    }

    /// one detector per category, tried strongest first
    fn reference(hand: Hand) -> Strength {
        let cards = Vec::<Card>::from(hand);
        let mut sorted = cards.iter().map(|c| c.rank()).collect::<Vec<_>>();
        sorted.sort_by(|a, b| b.cmp(a));
        let count = |r: Rank| sorted.iter().filter(|&&x| x == r).count();
        let with = |n: usize| {
            let mut found = sorted
                .iter()
                .copied()
                .filter(|&r| count(r) == n)
                .collect::<Vec<_>>();
            found.dedup();
            found
        };
        let flush = cards.iter().all(|c| c.suit() == cards[0].suit());
        let straight = match with(1) {
            distinct if distinct == ranks("A9876") => Some(Rank::Nine),
            distinct if distinct.len() == 5 && u8::from(distinct[0]) - u8::from(distinct[4]) == 4 => {
                Some(distinct[0])
            }
            _ => None,
        };
        let (ranking, kicks) = if let (true, Some(high)) = (flush, straight) {
            (Ranking::StraightFlush, vec![high])
        } else if with(4).len() == 1 {
            (Ranking::FourOAK, [with(4), with(1)].concat())
        } else if flush {
            (Ranking::Flush, sorted.clone())
        } else if with(3).len() == 1 && with(2).len() == 1 {
            (Ranking::FullHouse, [with(3), with(2)].concat())
        } else if with(3).len() == 1 {
            (Ranking::ThreeOAK, [with(3), with(1)].concat())
        } else if let Some(high) = straight {
            (Ranking::Straight, vec![high])
        } else if with(2).len() == 2 {
            (Ranking::TwoPair, [with(2), with(1)].concat())
        } else if with(2).len() == 1 {
            (Ranking::OnePair, [with(2), with(1)].concat())
        } else {
            (Ranking::HighCard, sorted.clone())
        };
        Strength::from((ranking, Kickers::from(kicks)))
    }

    #[test]
    fn fused_matches_reference() {
        for hand in HandIterator::from((5, Hand::empty())) {
            assert_eq!(Strength::from(hand), reference(hand), "{}", hand);
        }
    }

    #[test]
    fn category_frequencies() {
        let counts = HandIterator::from((5, Hand::empty()))
            .map(Strength::from)
            .map(|s| s.ranking())
            .fold(BTreeMap::new(), |mut counts, r| {
                *counts.entry(r).or_insert(0usize) += 1;
                counts
            });
        assert_eq!(counts[&Ranking::StraightFlush], 24);
        assert_eq!(counts[&Ranking::FourOAK], 288);
        assert_eq!(counts[&Ranking::Flush], 480);
        assert_eq!(counts[&Ranking::FullHouse], 1_728);
        assert_eq!(counts[&Ranking::Straight], 6_120);
        assert_eq!(counts[&Ranking::ThreeOAK], 16_128);
        assert_eq!(counts[&Ranking::TwoPair], 36_288);
        assert_eq!(counts[&Ranking::OnePair], 193_536);
        assert_eq!(counts[&Ranking::HighCard], 122_400);
        assert_eq!(counts.values().sum::<usize>(), crate::N_FIVE_CARD_HANDS);
    }

    #[test]
    fn kicker_counts_match_category() {
        for hand in HandIterator::from((5, Hand::empty())) {
            let s = Strength::from(hand);
            assert_eq!(
                Vec::<Rank>::from(s.kickers()).len(),
                s.ranking().n_kickers(),
                "{}",
                hand
            );
        }
    }

    #[test]
    #[should_panic]
    fn rejects_six_cards() {
        strength("6d 7d 8d 9d Td Jd");
    }
}
