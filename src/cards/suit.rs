#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    Diamond = 0,
    Club = 1,
    Heart = 2,
    Spade = 3,
}

impl Suit {
    pub const MAX: Self = Suit::Spade;
    pub const MIN: Self = Suit::Diamond;

    pub const fn all() -> [Self; crate::N_SUITS] {
        [Suit::Diamond, Suit::Club, Suit::Heart, Suit::Spade]
    }
}

impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::Diamond,
            1 => Suit::Club,
            2 => Suit::Heart,
            3 => Suit::Spade,
            _ => panic!("Invalid suit u8: {}", n),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// u64 injection
/// every card bit of this suit across the short deck
impl From<Suit> for u64 {
    fn from(s: Suit) -> u64 {
        0x0111_1111_1100_0000 << u8::from(s)
    }
}

/// char isomorphism, case-insensitive
impl TryFrom<char> for Suit {
    type Error = crate::Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'd' => Ok(Suit::Diamond),
            'c' => Ok(Suit::Club),
            'h' => Ok(Suit::Heart),
            's' => Ok(Suit::Spade),
            _ => Err(crate::Error::InvalidCard(c.to_string())),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Diamond => "d",
                Suit::Club => "c",
                Suit::Heart => "h",
                Suit::Spade => "s",
            }
        )
    }
}
