use super::rank::Rank;
use super::suit::Suit;

/// A playing card encoded as a single byte.
///
/// The encoding is `rank * 4 + suit` with ranks numbered by pip value,
/// so the 36 short-deck cards occupy the contiguous range `24..60`.
/// Cards sort first by rank, then by suit within each rank.
///
/// # Representations
///
/// - `u8`: bit position `24..60`
/// - `u64`: single-bit representation for set membership in [`Hand`]
///
/// [`Hand`]: super::hand::Hand
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    /// Lowest valid bit position (6d).
    pub const MIN: u8 = Rank::MIN as u8 * 4 + Suit::MIN as u8;
    /// Highest valid bit position (As).
    pub const MAX: u8 = Rank::MAX as u8 * 4 + Suit::MAX as u8;

    pub fn rank(&self) -> Rank {
        Rank::from(self.0 / 4)
    }
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % 4)
    }
    /// Every card of the short deck, ascending.
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::MIN..=Self::MAX).map(Self)
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * 4 + u8::from(s))
    }
}

/// u8 isomorphism
/// each card is mapped to its bit position 24..60
/// Ts
/// 43
/// 0b00101011
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        assert!((Self::MIN..=Self::MAX).contains(&n), "Invalid card u8: {}", n);
        Self(n)
    }
}

/// u64 isomorphism
/// each card is just one bit turned on
/// Ts
/// xxxx 000000000000000010000000000000000000000000000000000000000000
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}
impl From<u64> for Card {
    fn from(n: u64) -> Self {
        debug_assert!(n.count_ones() == 1);
        Self::from(n.trailing_zeros() as u8)
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = crate::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(u), None) => Ok(Card::from((Rank::try_from(r)?, Suit::try_from(u)?))),
            _ => Err(crate::Error::InvalidCard(s.to_string())),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}
