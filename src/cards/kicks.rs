use super::rank::Rank;

/// A hand's tie-break ranks.
///
/// Up to five ranks packed one per nibble, most significant first, so the
/// derived Ord compares them lexicographically. Unused trailing nibbles are 0,
/// which no rank occupies since the short deck starts at Six.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Kickers(u32);

impl Kickers {
    pub const SLOTS: usize = 5;
    const BITS: u32 = 4;
}

/// u32 isomorphism
/// [A, K, 9]
/// xxxxxxxxxxxx 1110 1101 1001 0000 0000
impl From<Kickers> for u32 {
    fn from(k: Kickers) -> Self {
        k.0
    }
}
impl From<u32> for Kickers {
    fn from(n: u32) -> Self {
        Self(n & 0xFFFFF)
    }
}

/// Vec<Rank> isomorphism, in significance order
impl From<Kickers> for Vec<Rank> {
    fn from(k: Kickers) -> Self {
        (0..Kickers::SLOTS)
            .rev()
            .map(|slot| (k.0 >> (slot as u32 * Kickers::BITS)) & 0xF)
            .take_while(|&nibble| nibble > 0)
            .map(|nibble| Rank::from(nibble as u8))
            .collect()
    }
}
impl From<Vec<Rank>> for Kickers {
    fn from(ranks: Vec<Rank>) -> Self {
        assert!(ranks.len() <= Kickers::SLOTS);
        Self(
            ranks
                .iter()
                .map(|&r| u8::from(r) as u32)
                .chain(std::iter::repeat(0))
                .take(Kickers::SLOTS)
                .fold(0u32, |acc, r| acc << Kickers::BITS | r),
        )
    }
}

impl std::fmt::Display for Kickers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for rank in Vec::<Rank>::from(*self) {
            write!(f, "{}", rank)?;
        }
        Ok(())
    }
}
