//! Minimax Chess Engine
//!
//! Depth-limited minimax search with alpha-beta pruning, randomized move
//! ordering, and material/positional evaluation, operating over the
//! `game_core::GameRules` interface. The rules of chess live entirely behind
//! that interface.

mod eval;
mod ordering;
mod search;

use game_core::{GameRules, MoveSource, SearchReport};

pub use eval::{evaluate, piece_value};
pub use ordering::MoveOrdering;
pub use search::{best_move, minimax};

/// Move source backed by the minimax search.
///
/// Holds the move-ordering policy and a node counter; all search state is
/// otherwise on the call stack, so independent `pick_move` calls share
/// nothing but the position handle they are given.
#[derive(Debug, Clone)]
pub struct MinimaxEngine {
    ordering: MoveOrdering,
    nodes: u64,
}

impl MinimaxEngine {
    /// Engine with entropy-seeded random move ordering.
    pub fn new() -> Self {
        Self {
            ordering: MoveOrdering::random(),
            nodes: 0,
        }
    }

    /// Engine with a pinned shuffle seed, for reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            ordering: MoveOrdering::seeded(seed),
            nodes: 0,
        }
    }

    /// Engine that keeps the rules engine's move order.
    pub fn sequential() -> Self {
        Self {
            ordering: MoveOrdering::sequential(),
            nodes: 0,
        }
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: GameRules> MoveSource<G> for MinimaxEngine {
    fn pick_move(&mut self, game: &mut G, depth: u8) -> SearchReport<G::Move> {
        self.nodes = 0;

        // The automated player's seat drives the root as the maximizing side.
        let outcome = search::best_move(game, depth, true, &mut self.ordering, &mut self.nodes);

        match outcome {
            Some((mv, score)) => SearchReport {
                best_move: Some(mv),
                score,
                depth,
                nodes: self.nodes,
            },
            None => SearchReport {
                best_move: None,
                score: 0,
                depth,
                nodes: self.nodes,
            },
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
