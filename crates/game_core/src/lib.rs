pub mod rules;
pub mod types;

pub use rules::*;
pub use types::*;

// =============================================================================
// MoveSource trait — implemented by all move sources (search, remote, ...)
// =============================================================================

/// Result of asking a move source for a move.
#[derive(Debug, Clone)]
pub struct SearchReport<M> {
    /// The move chosen (None if no legal moves, or the source failed)
    pub best_move: Option<M>,
    /// Score the source attributes to its move, white-positive centipawn-like
    /// units. Sources without an evaluation report 0.
    pub score: i32,
    /// Search depth used (plies)
    pub depth: u8,
    /// Number of nodes visited (0 for non-searching sources)
    pub nodes: u64,
}

impl<M> SearchReport<M> {
    /// Report with no move, e.g. when the position has no legal moves.
    pub fn empty(depth: u8) -> Self {
        Self {
            best_move: None,
            score: 0,
            depth,
            nodes: 0,
        }
    }
}

/// Trait that all move sources implement.
///
/// This allows the harness to swap between the in-process searcher, a remote
/// engine bridge, or anything else that can produce a move for a position.
pub trait MoveSource<G: GameRules>: Send {
    /// Pick a move for the live position.
    ///
    /// The handle is borrowed mutably because sources may explore it through
    /// `apply`/`undo`, but it must be returned in the exact state it was
    /// received (strict stack discipline).
    fn pick_move(&mut self, game: &mut G, depth: u8) -> SearchReport<G::Move>;

    /// Name for reports and logs.
    fn name(&self) -> &str;

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}
}
