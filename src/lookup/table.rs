use super::lookup::Lookup;
use crate::Error;
use crate::cards::card::Card;
use crate::cards::hand::Hand;
use crate::cards::hands::HandIterator;
use crate::cards::strength::Strength;
use rayon::prelude::*;
use std::collections::HashMap;

/// Precomputed strengths keyed by the hand's u64 bit value.
///
/// Built once, never mutated after, and shared by reference with every
/// reader. Five-card and seven-card tables are the same type; which one you
/// hold is a matter of which constructor made it.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Table(HashMap<u64, Strength>);

impl Table {
    /// every five-card hand, classified
    pub fn five() -> Self {
        log::info!("{:<32}{:<32}", "building    five card table", crate::N_FIVE_CARD_HANDS);
        let table = Self(
            Self::shards(5)
                .map(|hand| (u64::from(hand), Strength::from(hand)))
                .collect(),
        );
        log::info!("{:<32}{:<32}", "built       five card table", table.len());
        table
    }

    /// every seven-card hand, scored as the best of its 21 five-card subsets
    pub fn seven(five: &impl Lookup) -> Result<Self, Error> {
        log::info!("{:<32}{:<32}", "building    seven card table", crate::N_SEVEN_CARD_HANDS);
        let table = Self(
            Self::shards(7)
                .map(|hand| five.best(hand).map(|strength| (u64::from(hand), strength)))
                .collect::<Result<HashMap<u64, Strength>, Error>>()?,
        );
        log::info!("{:<32}{:<32}", "built       seven card table", table.len());
        Ok(table)
    }

    /// every n-card hand, one rayon task per lowest card
    fn shards(n: usize) -> impl ParallelIterator<Item = Hand> {
        Card::all()
            .collect::<Vec<Card>>()
            .into_par_iter()
            .inspect(|card| log::debug!("{:<32}{:<32}", "tabulating  shard", card))
            .flat_map_iter(move |card| HandIterator::from((n, card)))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&u64, &Strength)> {
        self.0.iter()
    }
}

impl Lookup for Table {
    fn lookup(&self, hand: Hand) -> Result<Strength, Error> {
        let key = u64::from(hand);
        self.0.get(&key).copied().ok_or(Error::LookupMiss(key))
    }
}

impl From<HashMap<u64, Strength>> for Table {
    fn from(map: HashMap<u64, Strength>) -> Self {
        Self(map)
    }
}
impl FromIterator<(u64, Strength)> for Table {
    fn from_iter<I: IntoIterator<Item = (u64, Strength)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
