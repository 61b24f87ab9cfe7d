use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;

/// Hand represents an unordered set of Cards as a single u64.
///
/// Each bit is one card of the short deck, so only bits `24..60` are ever set.
/// The bit value is also the key of the strength tables. Hand is Copy, and
/// iterating a copy yields its cards in ascending order and leaves the source
/// Hand intact, so decomposition is restartable.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u64);

impl Hand {
    pub const fn empty() -> Self {
        Self(0)
    }
    /// Every card of the short deck.
    pub const fn full() -> Self {
        Self(Self::mask())
    }
    pub const fn mask() -> u64 {
        0x0FFF_FFFF_FF00_0000
    }

    /// disjoint union. colliding cards are a logic error
    pub fn add(lhs: Self, rhs: Self) -> Self {
        debug_assert!(!lhs.overlaps(rhs), "{} collides with {}", lhs, rhs);
        Self(lhs.0 | rhs.0)
    }
    pub fn complement(&self) -> Self {
        Self(self.0 ^ Self::mask())
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }
    pub fn overlaps(&self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
    /// the cards of this Hand in one suit
    pub fn of(&self, suit: &Suit) -> Self {
        Self(self.0 & u64::from(*suit))
    }
    /// how many cards of this rank are in the Hand
    pub fn freq(&self, rank: &Rank) -> usize {
        (self.0 & u64::from(*rank)).count_ones() as usize
    }
    pub fn remove(&mut self, card: Card) {
        self.0 &= !u64::from(card);
    }
    pub fn take_min(&self) -> Option<Card> {
        match self.0 {
            0 => None,
            n => Some(Card::from(n & n.wrapping_neg())),
        }
    }
}

/// we can empty a hand from low to high
/// by extracting the lowest set bit until the hand is empty
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        let card = self.take_min()?;
        self.remove(card);
        Some(card)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.size(), Some(self.size()))
    }
}

impl ExactSizeIterator for Hand {}

/// u64 isomorphism
/// we SUM/OR the cards to get the bitstring
/// [6d, Ts, Jc, Js]
/// xxxx 000000000000000011100000000000000000000000000000000000000001
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        debug_assert!(n & !Self::mask() == 0, "bits outside short deck: {:#x}", n);
        Self(n & Self::mask())
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

impl From<Card> for Hand {
    fn from(card: Card) -> Self {
        Self(u64::from(card))
    }
}

/// Vec<Card> isomorphism (up to Vec permutation, this always comes out sorted)
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.collect()
    }
}
impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        cards.into_iter().collect()
    }
}

/// union of any number of cards. repeated cards collapse
impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self(iter.into_iter().map(u64::from).fold(0u64, |a, b| a | b))
    }
}

impl std::ops::BitOr for Hand {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}
impl std::ops::BitOrAssign for Hand {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}
impl std::ops::BitAnd for Hand {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in *self {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}
