//! Move ordering policy for the search.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// How candidate moves are ordered before the search walks them.
///
/// `Shuffled` applies a uniform random permutation at every node, breaking
/// deterministic move-order bias. `Sequential` keeps the rules engine's
/// order, making the search a pure function of (position, depth, side).
#[derive(Debug, Clone)]
pub enum MoveOrdering {
    Shuffled(StdRng),
    Sequential,
}

impl MoveOrdering {
    /// Uniform shuffle seeded from entropy.
    pub fn random() -> Self {
        MoveOrdering::Shuffled(StdRng::from_entropy())
    }

    /// Uniform shuffle with a pinned seed, for reproducible searches.
    pub fn seeded(seed: u64) -> Self {
        MoveOrdering::Shuffled(StdRng::seed_from_u64(seed))
    }

    /// Identity permutation.
    pub fn sequential() -> Self {
        MoveOrdering::Sequential
    }

    pub(crate) fn order<M>(&mut self, moves: &mut [M]) {
        match self {
            MoveOrdering::Shuffled(rng) => moves.shuffle(rng),
            MoveOrdering::Sequential => {}
        }
    }
}
