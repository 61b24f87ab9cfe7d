use crate::Error;
use crate::cards::hand::Hand;
use crate::cards::hands::HandIterator;
use crate::cards::strength::Strength;

/// Anything that can score a hand of five or more cards.
///
/// Shared by reference across simulation shards, hence Sync.
pub trait Lookup: Sync {
    fn lookup(&self, hand: Hand) -> Result<Strength, Error>;

    /// best five of any larger hand, scoring each five-card subset with self
    fn best(&self, hand: Hand) -> Result<Strength, Error> {
        HandIterator::from((5, hand.complement()))
            .map(|five| self.lookup(five))
            .collect::<Result<Vec<Strength>, Error>>()?
            .into_iter()
            .max()
            .ok_or(Error::LookupMiss(u64::from(hand)))
    }
}

/// Table-free Lookup that classifies on every call.
///
/// Seven cards cost 21 classifications, fine for tests and short runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct Exhaustive;

impl Lookup for Exhaustive {
    fn lookup(&self, hand: Hand) -> Result<Strength, Error> {
        match hand.size() {
            5 => Ok(Strength::from(hand)),
            n if n > 5 => self.best(hand),
            _ => Err(Error::LookupMiss(u64::from(hand))),
        }
    }
}
