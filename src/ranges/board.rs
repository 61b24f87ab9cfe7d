use crate::Error;
use crate::cards::card::Card;
use crate::cards::hand::Hand;

/// Community cards written as concatenated rank-suit pairs, e.g. `KhQdJc`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Board(Hand);

impl Board {
    pub fn size(&self) -> usize {
        self.0.size()
    }
}

impl From<Board> for Hand {
    fn from(board: Board) -> Self {
        board.0
    }
}

/// str isomorphism. surrounding whitespace is ignored
impl TryFrom<&str> for Board {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let chars = s.trim().chars().collect::<Vec<char>>();
        match chars.len() {
            0 | 2 | 4 | 6 | 8 | 10 => chars
                .chunks(2)
                .map(|pair| pair.iter().collect::<String>())
                .map(|pair| Card::try_from(pair.as_str()))
                .try_fold(Hand::empty(), |hand, card| {
                    let card = card?;
                    match hand.contains(&card) {
                        true => Err(Error::DuplicateCard(card)),
                        false => Ok(Hand::add(hand, Hand::from(card))),
                    }
                })
                .map(Self),
            n => Err(Error::InvalidBoardLength(n)),
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_sizes() {
        assert_eq!(Board::try_from("").unwrap().size(), 0);
        assert_eq!(Board::try_from("Kh").unwrap().size(), 1);
        assert_eq!(Board::try_from("KhQdJc").unwrap().size(), 3);
        assert_eq!(Board::try_from("  khqdjc9h8D ").unwrap().size(), 5);
    }

    #[test]
    fn rejects_odd_or_long_lengths() {
        for (s, n) in [("K", 1), ("KhQ", 3), ("KhQdJc9h8", 9), ("KhQdJc9h8dTs", 12)] {
            assert_eq!(Board::try_from(s), Err(Error::InvalidBoardLength(n)));
        }
    }

    #[test]
    fn rejects_unknown_cards() {
        assert!(matches!(Board::try_from("Kh2d"), Err(Error::InvalidCard(_))));
        assert!(matches!(Board::try_from("KhQx"), Err(Error::InvalidCard(_))));
    }

    #[test]
    fn rejects_repeated_cards() {
        let kh = Card::try_from("Kh").unwrap();
        assert_eq!(Board::try_from("KhQdKh"), Err(Error::DuplicateCard(kh)));
    }

    #[test]
    fn bijective_str() {
        let board = Board::try_from("9h8dJcKhQd").unwrap();
        assert_eq!(board, Board::try_from(board.to_string().as_str()).unwrap());
    }
}
