use super::evaluator::Evaluator;
use super::hand::Hand;
use super::kicks::Kickers;
use super::ranking::Ranking;

/// A hand's strength.
///
/// Category in bits 20..24, tie-break ranks in the five nibbles below it.
/// Comparing the packed u32 compares category first and kickers second, so
/// the derived Ord is the showdown order. The packed value is also what the
/// strength tables store.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Strength(u32);

impl Strength {
    pub fn ranking(&self) -> Ranking {
        Ranking::from((self.0 >> 20) as u8)
    }
    pub fn kickers(&self) -> Kickers {
        Kickers::from(self.0)
    }
}

/// classify a 5-card Hand
impl From<Hand> for Strength {
    fn from(hand: Hand) -> Self {
        Self::from(Evaluator::from(hand))
    }
}

impl From<(Ranking, Kickers)> for Strength {
    fn from((ranking, kickers): (Ranking, Kickers)) -> Self {
        Self((u8::from(ranking) as u32) << 20 | u32::from(kickers))
    }
}

/// u32 isomorphism
impl From<Strength> for u32 {
    fn from(s: Strength) -> Self {
        s.0
    }
}
impl From<u32> for Strength {
    fn from(n: u32) -> Self {
        debug_assert!(n >> 20 <= 8, "no such category: {:#x}", n);
        Self(n)
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.ranking(), self.kickers())
    }
}
