use serde::Serialize;

/// One player's showdown tally over a simulation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub wins: usize,
    pub ties: usize,
    pub losses: usize,
}

impl Outcome {
    pub fn win() -> Self {
        Self {
            wins: 1,
            ..Self::default()
        }
    }
    pub fn tie() -> Self {
        Self {
            ties: 1,
            ..Self::default()
        }
    }
    pub fn loss() -> Self {
        Self {
            losses: 1,
            ..Self::default()
        }
    }
    /// showdowns played
    pub fn total(&self) -> usize {
        self.wins + self.ties + self.losses
    }
}

impl std::ops::Add for Outcome {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            wins: self.wins + rhs.wins,
            ties: self.ties + rhs.ties,
            losses: self.losses + rhs.losses,
        }
    }
}
impl std::ops::AddAssign for Outcome {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "wins {:>8} ties {:>8} losses {:>8}",
            self.wins, self.ties, self.losses
        )
    }
}
