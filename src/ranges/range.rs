use super::notation::Notation;
use crate::Error;
use crate::cards::hand::Hand;
use std::collections::BTreeSet;

/// A set of two-card holdings a player might have.
///
/// Kept ordered so that anything iterating a Range, and in particular the
/// seeded equity simulation, sees the same sequence every run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Range(BTreeSet<Hand>);

impl Range {
    /// Permissive parse. Tokens that fit no shape are skipped, logged, and
    /// handed back alongside the Range.
    pub fn parse(s: &str) -> (Self, Vec<String>) {
        let mut rejected = Vec::new();
        let mut range = Self::default();
        for token in s.split_whitespace() {
            match Notation::try_from(token) {
                Ok(notation) => range.0.extend(notation.hands()),
                Err(e) => {
                    log::warn!("skipping range token {:?}: {}", token, e);
                    rejected.push(token.to_string());
                }
            }
        }
        (range, rejected)
    }
    pub fn size(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn contains(&self, hand: &Hand) -> bool {
        self.0.contains(hand)
    }
    pub fn hands(&self) -> impl Iterator<Item = Hand> + '_ {
        self.0.iter().copied()
    }
    /// the holdings still possible once these cards are known
    pub fn disjoint(&self, dead: Hand) -> Self {
        self.hands().filter(|h| !h.overlaps(dead)).collect()
    }
}

/// strict parse, the first malformed token is an error
impl TryFrom<&str> for Range {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.split_whitespace()
            .map(Notation::try_from)
            .try_fold(Self::default(), |mut range, notation| {
                range.0.extend(notation?.hands());
                Ok(range)
            })
    }
}

impl FromIterator<Hand> for Range {
    fn from_iter<I: IntoIterator<Item = Hand>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
impl From<Range> for Vec<Hand> {
    fn from(range: Range) -> Self {
        range.0.into_iter().collect()
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let holdings = self.hands().map(|h| h.to_string()).collect::<Vec<_>>();
        write!(f, "{}", holdings.join(" "))
    }
}
