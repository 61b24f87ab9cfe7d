use crate::Error;
use crate::cards::card::Card;
use crate::cards::hand::Hand;
use crate::cards::rank::Rank;
use crate::cards::suit::Suit;

/// One token of range notation.
///
/// Shapes are tried in declaration order and the first that fits wins, so
/// `AcKd` is explicit before it could be anything else and `AA` is paired
/// before unpaired is considered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    /// AcKd
    Explicit(Card, Card),
    /// AKs
    Suited(Rank, Rank),
    /// AKo
    Offsuit(Rank, Rank),
    /// AA
    Paired(Rank),
    /// AK
    Unpaired(Rank, Rank),
}

impl Notation {
    /// every two-card Hand this token stands for.
    /// may repeat a Hand, as AAo does, callers collect into a set
    pub fn hands(&self) -> Vec<Hand> {
        match *self {
            Notation::Explicit(a, b) => vec![Self::hole(a, b)],
            Notation::Suited(hi, lo) => Suit::all()
                .into_iter()
                .map(|s| Self::hole(Card::from((hi, s)), Card::from((lo, s))))
                .collect(),
            Notation::Offsuit(hi, lo) => Self::suitings()
                .filter(|(a, b)| a != b)
                .map(|(a, b)| Self::hole(Card::from((hi, a)), Card::from((lo, b))))
                .collect(),
            Notation::Paired(rank) => Self::suitings()
                .filter(|(a, b)| a < b)
                .map(|(a, b)| Self::hole(Card::from((rank, a)), Card::from((rank, b))))
                .collect(),
            Notation::Unpaired(hi, lo) => Self::suitings()
                .map(|(a, b)| Self::hole(Card::from((hi, a)), Card::from((lo, b))))
                .collect(),
        }
    }

    fn hole(a: Card, b: Card) -> Hand {
        Hand::add(Hand::from(a), Hand::from(b))
    }
    fn suitings() -> impl Iterator<Item = (Suit, Suit)> {
        Suit::all()
            .into_iter()
            .flat_map(|a| Suit::all().into_iter().map(move |b| (a, b)))
    }

    fn explicit(token: &[char]) -> Option<Self> {
        match token {
            [r1, s1, r2, s2] => {
                let a = Card::from((Rank::try_from(*r1).ok()?, Suit::try_from(*s1).ok()?));
                let b = Card::from((Rank::try_from(*r2).ok()?, Suit::try_from(*s2).ok()?));
                (a != b).then_some(Notation::Explicit(a, b))
            }
            _ => None,
        }
    }
    fn suited(token: &[char]) -> Option<Self> {
        match token {
            [r1, r2, 's'] => {
                let (hi, lo) = (Rank::try_from(*r1).ok()?, Rank::try_from(*r2).ok()?);
                (hi != lo).then_some(Notation::Suited(hi, lo))
            }
            _ => None,
        }
    }
    fn offsuit(token: &[char]) -> Option<Self> {
        match token {
            [r1, r2, 'o'] => Some(Notation::Offsuit(
                Rank::try_from(*r1).ok()?,
                Rank::try_from(*r2).ok()?,
            )),
            _ => None,
        }
    }
    fn paired(token: &[char]) -> Option<Self> {
        match token {
            [r1, r2] if r1 == r2 => Some(Notation::Paired(Rank::try_from(*r1).ok()?)),
            _ => None,
        }
    }
    fn unpaired(token: &[char]) -> Option<Self> {
        match token {
            [r1, r2] => {
                let (hi, lo) = (Rank::try_from(*r1).ok()?, Rank::try_from(*r2).ok()?);
                (hi != lo).then_some(Notation::Unpaired(hi, lo))
            }
            _ => None,
        }
    }
}

/// case-insensitive
impl TryFrom<&str> for Notation {
    type Error = Error;
    fn try_from(token: &str) -> Result<Self, Self::Error> {
        let ref chars = token.trim().to_lowercase().chars().collect::<Vec<char>>();
        None.or_else(|| Self::explicit(chars))
            .or_else(|| Self::suited(chars))
            .or_else(|| Self::offsuit(chars))
            .or_else(|| Self::paired(chars))
            .or_else(|| Self::unpaired(chars))
            .ok_or_else(|| Error::MalformedRangeToken(token.to_string()))
    }
}

impl std::fmt::Display for Notation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Notation::Explicit(a, b) => write!(f, "{}{}", a, b),
            Notation::Suited(hi, lo) => write!(f, "{}{}s", hi, lo),
            Notation::Offsuit(hi, lo) => write!(f, "{}{}o", hi, lo),
            Notation::Paired(rank) => write!(f, "{}{}", rank, rank),
            Notation::Unpaired(hi, lo) => write!(f, "{}{}", hi, lo),
        }
    }
}
