/// A poker hand's category.
///
/// Ordered weakest to strongest. In the short deck a flush is rarer than a
/// full house, so it ranks above it. Tie-breaks live in [`Kickers`].
///
/// [`Kickers`]: super::kicks::Kickers
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum Ranking {
    HighCard = 0,      // 5 kickers
    OnePair = 1,       // 4 kickers
    TwoPair = 2,       // 3 kickers
    ThreeOAK = 3,      // 3 kickers
    Straight = 4,      // 1 kickers
    FullHouse = 5,     // 2 kickers
    Flush = 6,         // 5 kickers
    FourOAK = 7,       // 2 kickers
    StraightFlush = 8, // 1 kickers
}

impl Ranking {
    pub const fn all() -> [Self; 9] {
        [
            Ranking::HighCard,
            Ranking::OnePair,
            Ranking::TwoPair,
            Ranking::ThreeOAK,
            Ranking::Straight,
            Ranking::FullHouse,
            Ranking::Flush,
            Ranking::FourOAK,
            Ranking::StraightFlush,
        ]
    }
    /// how many ranks it takes to break a tie within this category
    pub fn n_kickers(&self) -> usize {
        match self {
            Ranking::HighCard | Ranking::Flush => 5,
            Ranking::OnePair => 4,
            Ranking::TwoPair | Ranking::ThreeOAK => 3,
            Ranking::FullHouse | Ranking::FourOAK => 2,
            Ranking::Straight | Ranking::StraightFlush => 1,
        }
    }
}

/// u8 isomorphism
impl From<u8> for Ranking {
    fn from(n: u8) -> Self {
        match n {
            0 => Ranking::HighCard,
            1 => Ranking::OnePair,
            2 => Ranking::TwoPair,
            3 => Ranking::ThreeOAK,
            4 => Ranking::Straight,
            5 => Ranking::FullHouse,
            6 => Ranking::Flush,
            7 => Ranking::FourOAK,
            8 => Ranking::StraightFlush,
            _ => panic!("Invalid ranking u8: {}", n),
        }
    }
}
impl From<Ranking> for u8 {
    fn from(r: Ranking) -> u8 {
        r as u8
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::HighCard => write!(f, "HighCard     "),
            Ranking::OnePair => write!(f, "OnePair      "),
            Ranking::TwoPair => write!(f, "TwoPair      "),
            Ranking::ThreeOAK => write!(f, "ThreeOfAKind "),
            Ranking::Straight => write!(f, "Straight     "),
            Ranking::FullHouse => write!(f, "FullHouse    "),
            Ranking::Flush => write!(f, "Flush        "),
            Ranking::FourOAK => write!(f, "FourOfAKind  "),
            Ranking::StraightFlush => write!(f, "StraightFlush"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for ranking in Ranking::all() {
            assert!(ranking == Ranking::from(u8::from(ranking)));
        }
    }

    #[test]
    fn flush_beats_full_house() {
        assert!(Ranking::Flush > Ranking::FullHouse);
        assert!(Ranking::FullHouse > Ranking::Straight);
        assert!(Ranking::all().windows(2).all(|w| w[0] < w[1]));
    }
}
