use crate::Error;
use crate::cards::hand::Hand;
use crate::cards::rank::Rank;
use crate::ranges::range::Range;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

/// Candidate holdings of every player, flattened to (player, hand) pairs.
///
/// Sampling picks one hand per player with no card shared between any two
/// players. Pairs are tried in a fresh random order each time; picking a
/// pair prunes that player's other pairs and every pair touching its cards,
/// and is only kept if the players still waiting could all be seated from
/// what is left. The search walks an explicit stack of frames, one per pick,
/// and backs out of a frame once its pairs are exhausted.
///
/// A frame that backs out marks its state, the waiting players and the
/// cards already seated, as failed. Players with equal ranges are
/// interchangeable, so the state is recorded up to swapping them. No failed
/// state is entered twice, which bounds the work on inputs that cannot be
/// seated at all.
#[derive(Debug, Clone)]
pub struct Assignment {
    players: usize,
    pairs: Vec<(usize, Hand)>,
    classes: Vec<u64>,
}

/// one level of the search: the pairs still compatible with every pick
/// below it, and how many of them have been tried
struct Frame {
    pick: Option<(usize, Hand)>,
    seated: Hand,
    pool: Vec<(usize, Hand)>,
    next: usize,
}

impl From<&[Range]> for Assignment {
    fn from(ranges: &[Range]) -> Self {
        assert!(ranges.len() < 64, "at most 63 players");
        let classes = ranges
            .iter()
            .enumerate()
            .fold(Vec::<(&Range, u64)>::new(), |mut classes, (player, range)| {
                match classes.iter_mut().find(|(r, _)| *r == range) {
                    Some((_, members)) => *members |= 1 << player,
                    None => classes.push((range, 1 << player)),
                }
                classes
            })
            .into_iter()
            .map(|(_, members)| members)
            .collect();
        Self {
            players: ranges.len(),
            pairs: ranges
                .iter()
                .enumerate()
                .flat_map(|(player, range)| range.hands().map(move |hand| (player, hand)))
                .collect(),
            classes,
        }
    }
}

impl Assignment {
    pub fn players(&self) -> usize {
        self.players
    }

    /// One hand per player, in player order, pairwise disjoint.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Result<Vec<Hand>, Error> {
        let mut hands = vec![Hand::empty(); self.players];
        let mut waiting = (1u64 << self.players) - 1;
        let mut failed = HashSet::<(u64, Hand)>::new();
        let mut pool = self.pairs.clone();
        if !self.viable(waiting, &pool) {
            return Err(Error::InfeasibleAssignment);
        }
        pool.shuffle(rng);
        let ref mut stack = vec![Frame {
            pick: None,
            seated: Hand::empty(),
            pool,
            next: 0,
        }];
        while waiting != 0 {
            let frame = stack.last_mut().ok_or(Error::InfeasibleAssignment)?;
            match frame.pool.get(frame.next).copied() {
                Some((player, hand)) => {
                    frame.next += 1;
                    let rest = waiting & !(1 << player);
                    let seated = Hand::add(frame.seated, hand);
                    if failed.contains(&(self.canonical(rest), seated)) {
                        continue;
                    }
                    let pool = frame
                        .pool
                        .iter()
                        .filter(|(p, h)| *p != player && !h.overlaps(hand))
                        .copied()
                        .collect::<Vec<_>>();
                    if self.viable(rest, &pool) {
                        hands[player] = hand;
                        waiting = rest;
                        stack.push(Frame {
                            pick: Some((player, hand)),
                            seated,
                            pool,
                            next: 0,
                        });
                    } else {
                        failed.insert((self.canonical(rest), seated));
                    }
                }
                None => {
                    if let Some(frame) = stack.pop() {
                        failed.insert((self.canonical(waiting), frame.seated));
                        if let Some((player, _)) = frame.pick {
                            hands[player] = Hand::empty();
                            waiting |= 1 << player;
                        }
                    }
                }
            }
        }
        Ok(hands)
    }

    /// Necessary conditions for seating every waiting player from the pool:
    /// each has a candidate left, there are two live cards per player, and
    /// no rank is needed by more cards than the pool still holds of it.
    fn viable(&self, waiting: u64, pool: &[(usize, Hand)]) -> bool {
        let live = pool.iter().fold(Hand::empty(), |live, (_, h)| Hand::add(live, *h));
        if live.size() < crate::N_HOLE * waiting.count_ones() as usize {
            return false;
        }
        // fewest cards of each rank among a player's candidates
        let mut least = vec![None::<[usize; crate::N_RANKS]>; self.players];
        for (player, hand) in pool {
            let counts = Rank::all().map(|r| hand.freq(&r));
            least[*player] = Some(match least[*player] {
                None => counts,
                Some(prior) => std::array::from_fn(|i| prior[i].min(counts[i])),
            });
        }
        let needs = least
            .iter()
            .enumerate()
            .filter(|(player, _)| waiting & 1 << player != 0)
            .map(|(_, least)| *least)
            .collect::<Option<Vec<_>>>();
        match needs {
            None => false,
            Some(needs) => Rank::all()
                .iter()
                .enumerate()
                .all(|(i, r)| needs.iter().map(|n| n[i]).sum::<usize>() <= live.freq(r)),
        }
    }

    /// the waiting set with each class's waiting players moved onto its
    /// lowest members
    fn canonical(&self, waiting: u64) -> u64 {
        self.classes
            .iter()
            .map(|&members| {
                (0..(waiting & members).count_ones())
                    .fold((members, 0u64), |(rest, low), _| {
                        (rest & (rest - 1), low | rest & rest.wrapping_neg())
                    })
                    .1
            })
            .fold(0, |mask, low| mask | low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::card::Card;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use std::collections::HashSet;

    fn seat(ranges: &[&str]) -> Assignment {
        let ranges = ranges
            .iter()
            .map(|r| Range::try_from(*r).unwrap())
            .collect::<Vec<_>>();
        Assignment::from(ranges.as_slice())
    }
    fn hand(s: &str) -> Hand {
        s.split_whitespace()
            .map(|c| Card::try_from(c).unwrap())
            .collect()
    }

    #[test]
    fn hands_are_disjoint_and_in_range() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let ranges = ["AA", "AA KK", "AK", "AcKd AdKc"];
        let parsed = ranges.map(|r| Range::try_from(r).unwrap());
        let assignment = seat(&ranges);
        for _ in 0..1000 {
            let hands = assignment.sample(rng).unwrap();
            assert_eq!(hands.len(), ranges.len());
            for (i, hand) in hands.iter().enumerate() {
                assert!(parsed[i].contains(hand));
                for other in hands.iter().skip(i + 1) {
                    assert!(!hand.overlaps(*other));
                }
            }
        }
    }

    #[test]
    fn forced_choices_are_found() {
        // AcAh leaves the second player nothing, so AcAd and AhAs are forced
        let ref mut rng = SmallRng::seed_from_u64(1);
        let assignment = seat(&["AcAd AcAh", "AhAs AcAd", "KK"]);
        for _ in 0..200 {
            let hands = assignment.sample(rng).unwrap();
            assert_eq!(hands[0], hand("Ac Ad"));
            assert_eq!(hands[1], hand("Ah As"));
        }
    }

    #[test]
    fn impossible_seating_fails() {
        let ref mut rng = SmallRng::seed_from_u64(2);
        assert_eq!(
            seat(&["AcAd", "AcAd"]).sample(rng),
            Err(Error::InfeasibleAssignment)
        );
        assert_eq!(
            seat(&["AA", "AA", "AA"]).sample(rng),
            Err(Error::InfeasibleAssignment)
        );
    }

    #[test]
    fn every_candidate_is_reachable() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let assignment = seat(&["AA", "KK"]);
        let seen = (0..1000)
            .map(|_| assignment.sample(rng).unwrap()[0])
            .collect::<HashSet<Hand>>();
        assert_eq!(seen.len(), 6);
        let assignment = seat(&["AA", "AsAh"]);
        let seen = (0..1000)
            .map(|_| assignment.sample(rng).unwrap()[0])
            .collect::<HashSet<Hand>>();
        assert_eq!(seen, HashSet::from([hand("Ac Ad")]));
    }

    #[test]
    fn too_few_cards_fail_before_searching() {
        let ref mut rng = SmallRng::seed_from_u64(5);
        assert_eq!(
            seat(&["AA KK QQ JJ"; 9]).sample(rng),
            Err(Error::InfeasibleAssignment)
        );
        assert_eq!(
            seat(&["AK AQ AJ AT A9 A8 A7 A6"; 9]).sample(rng),
            Err(Error::InfeasibleAssignment)
        );
    }

    #[test]
    fn exhausted_search_fails() {
        // one suited hand per suit fits, a fifth player never does
        let ref mut rng = SmallRng::seed_from_u64(6);
        let assignment = seat(&["AKs AQs KQs"; 5]);
        for _ in 0..10 {
            assert_eq!(assignment.sample(rng), Err(Error::InfeasibleAssignment));
        }
        let assignment = seat(&["AKs AQs KQs"; 4]);
        for _ in 0..100 {
            let hands = assignment.sample(rng).unwrap();
            assert_eq!(hands.iter().copied().fold(Hand::empty(), Hand::add).size(), 8);
        }
    }

    #[test]
    fn equal_ranges_share_a_class() {
        let assignment = seat(&["AA", "KK", "AA", "AA"]);
        assert_eq!(assignment.canonical(0b1101), 0b1101);
        assert_eq!(assignment.canonical(0b1000), 0b0001);
        assert_eq!(assignment.canonical(0b1100), 0b0101);
        assert_eq!(assignment.canonical(0b1010), 0b0011);
    }

    #[test]
    #[should_panic]
    fn sixty_four_players_are_too_many() {
        seat(&["AA"; 64]);
    }

    #[test]
    fn no_players_is_trivially_seated() {
        let ref mut rng = SmallRng::seed_from_u64(4);
        assert_eq!(seat(&[]).sample(rng), Ok(vec![]));
    }
}
