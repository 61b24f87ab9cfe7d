use super::card::Card;
use super::hand::Hand;
use rand::Rng;

/// A deck of cards supporting random draws.
///
/// Tracks the dead cards (already dealt or excluded) as a [`Hand`]. Draws pick
/// a uniformly random position of the short deck and reject it if the card is
/// dead, so every live card is equally likely. Randomness is always supplied by
/// the caller so that Monte Carlo runs reproduce from a seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(Hand);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// A fresh 36-card deck with nothing dead.
    pub fn new() -> Self {
        Self(Hand::empty())
    }
    /// Number of live cards.
    pub fn size(&self) -> usize {
        crate::N_CARDS - self.0.size()
    }
    /// Tests whether a card is still live.
    pub fn contains(&self, card: &Card) -> bool {
        !self.0.contains(card)
    }
    /// Draws and kills a uniformly random live card.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Card {
        assert!(self.size() > 0, "draw from an empty deck");
        loop {
            let card = Card::from(rng.random_range(Card::MIN..=Card::MAX));
            if self.contains(&card) {
                self.0 = Hand::add(self.0, Hand::from(card));
                return card;
            }
        }
    }
    /// Draws n distinct live cards as one Hand.
    pub fn deal<R: Rng>(&mut self, n: usize, rng: &mut R) -> Hand {
        assert!(n <= self.size(), "deal {} from {} live cards", n, self.size());
        (0..n)
            .map(|_| self.draw(rng))
            .map(Hand::from)
            .fold(Hand::empty(), Hand::add)
    }
}

/// the dead cards of this deck
impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
/// a deck with these cards already dead
impl From<Hand> for Deck {
    fn from(dead: Hand) -> Self {
        Self(dead)
    }
}
