use super::assignment::Assignment;
use super::outcome::Outcome;
use crate::Error;
use crate::cards::deck::Deck;
use crate::cards::hand::Hand;
use crate::cards::strength::Strength;
use crate::lookup::lookup::Lookup;
use crate::ranges::range::Range;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::prelude::*;

/// Monte Carlo showdowns between player ranges.
///
/// Each iteration seats every player with a hand from their range, none
/// sharing a card with each other or the board, then deals the board out to
/// five cards and scores everyone's best seven. Iterations are split across
/// a fixed number of shards, each with its own rng derived from the seed, so
/// a seed reproduces a run on any machine.
#[derive(Debug, Clone)]
pub struct Simulation {
    ranges: Vec<Range>,
    board: Hand,
    known: Option<usize>,
    iterations: usize,
    seed: Option<u64>,
}

impl From<Vec<Range>> for Simulation {
    fn from(ranges: Vec<Range>) -> Self {
        Self {
            ranges,
            board: Hand::empty(),
            known: None,
            iterations: crate::SIMULATION_ITERATIONS,
            seed: None,
        }
    }
}

impl Simulation {
    /// community cards already dealt
    pub fn board(mut self, board: Hand) -> Self {
        self.board = board;
        self
    }
    /// the board size the caller expects, checked against the board
    pub fn known(mut self, n: usize) -> Self {
        self.known = Some(n);
        self
    }
    pub fn iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Raw tallies per player, in the order the ranges were given.
    pub fn run<L: Lookup>(&self, lookup: &L) -> Result<Vec<Outcome>, Error> {
        let ref assignment = self.validate()?;
        let seed = self.seed.unwrap_or_else(rand::random);
        log::info!(
            "{:<32}{:<32}",
            "simulating  showdowns",
            format!("{} players x {} iterations", self.ranges.len(), self.iterations)
        );
        let outcomes = (0..crate::SIMULATION_SHARDS)
            .into_par_iter()
            .map(|shard| self.shard(shard, seed, assignment, lookup))
            .collect::<Result<Vec<Vec<Outcome>>, Error>>()?
            .into_iter()
            .fold(vec![Outcome::default(); self.ranges.len()], |mut total, shard| {
                total.iter_mut().zip(shard).for_each(|(t, s)| *t += s);
                total
            });
        log::info!("{:<32}{:<32}", "simulated   showdowns", self.iterations);
        Ok(outcomes)
    }

    /// Reject inputs no iteration could satisfy, before running any.
    fn validate(&self) -> Result<Assignment, Error> {
        let board = self.board.size();
        if self.ranges.is_empty() {
            return Err(Error::NoPlayers);
        }
        match self.known {
            Some(known) if known != board => Err(Error::InvalidBoardSize { board, known }),
            _ if board > crate::N_BOARD => Err(Error::InvalidBoardSize {
                board,
                known: crate::N_BOARD,
            }),
            _ => Ok(()),
        }?;
        if crate::N_HOLE * self.ranges.len() + crate::N_BOARD > crate::N_CARDS {
            return Err(Error::InfeasibleAssignment);
        }
        let ranges = self
            .ranges
            .iter()
            .map(|range| range.disjoint(self.board))
            .collect::<Vec<Range>>();
        if ranges.iter().any(Range::is_empty) {
            return Err(Error::InfeasibleAssignment);
        }
        Ok(Assignment::from(ranges.as_slice()))
    }

    /// iterations this shard is responsible for
    fn share(&self, shard: usize) -> usize {
        let n = crate::SIMULATION_SHARDS;
        self.iterations / n + usize::from(shard < self.iterations % n)
    }

    fn shard<L: Lookup>(
        &self,
        shard: usize,
        seed: u64,
        assignment: &Assignment,
        lookup: &L,
    ) -> Result<Vec<Outcome>, Error> {
        let stream = (shard as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
        let ref mut rng = SmallRng::seed_from_u64(seed ^ stream);
        let mut outcomes = vec![Outcome::default(); assignment.players()];
        for _ in 0..self.share(shard) {
            for (tally, outcome) in outcomes.iter_mut().zip(self.showdown(assignment, lookup, rng)?) {
                *tally += outcome;
            }
        }
        log::debug!("{:<32}{:<32}", "simulated   shard", shard);
        Ok(outcomes)
    }

    /// one iteration: seat players, finish the board, compare
    fn showdown<L: Lookup, R: Rng>(
        &self,
        assignment: &Assignment,
        lookup: &L,
        rng: &mut R,
    ) -> Result<Vec<Outcome>, Error> {
        let hands = assignment.sample(rng)?;
        let dead = hands.iter().copied().fold(self.board, Hand::add);
        let runout = Deck::from(dead).deal(crate::N_BOARD - self.board.size(), rng);
        let board = Hand::add(self.board, runout);
        let strengths = hands
            .into_iter()
            .map(|hand| lookup.lookup(Hand::add(hand, board)))
            .collect::<Result<Vec<Strength>, Error>>()?;
        Ok(Self::settle(&strengths))
    }

    /// a unique best hand wins, shared best hands tie, the rest lose
    fn settle(strengths: &[Strength]) -> Vec<Outcome> {
        let best = strengths.iter().max().copied();
        let winners = strengths.iter().filter(|&&s| Some(s) == best).count();
        strengths
            .iter()
            .map(|&s| match (Some(s) == best, winners) {
                (true, 1) => Outcome::win(),
                (true, _) => Outcome::tie(),
                (false, _) => Outcome::loss(),
            })
            .collect()
    }
}
