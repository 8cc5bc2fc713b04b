//! Interface to the move/rules collaborator.
//!
//! The search side of this workspace never implements chess rules. Everything
//! it needs from a rules engine is behind [`GameRules`]: move generation,
//! in-place apply/undo, terminal detection, and a read-only board snapshot.

use crate::types::{Color, Piece};

/// 8x8 board snapshot, rank-major. `grid[0]` is white's back rank,
/// `grid[rank][file]`.
pub type Grid = [[Option<Piece>; 8]; 8];

/// Why a position admits no further search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TerminalKind {
    Checkmate,
    Stalemate,
    /// Fifty-move rule or insufficient material.
    Draw,
    ThreefoldRepetition,
}

/// A live game handle owned by the rules collaborator.
///
/// `apply` and `undo` mutate shared state in place and must be paired in
/// strict LIFO order: after any completed sequence of paired calls the
/// position is bit-identical to what it was before. Calling `undo` with no
/// matching `apply` is a programming error.
///
/// Move lists are re-derived from the live position on every call; callers
/// must not cache them across `apply`/`undo`.
pub trait GameRules {
    /// Move representation owned by the rules engine. Opaque to the search
    /// core; produced by `legal_moves`, consumed by `apply`.
    type Move: Clone + PartialEq + std::fmt::Debug;

    /// All legal moves for the side to move. Order is unspecified.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Plays `mv` on the live position.
    fn apply(&mut self, mv: &Self::Move);

    /// Reverses the most recent `apply`, restoring all state including
    /// counters and rights.
    fn undo(&mut self);

    fn side_to_move(&self) -> Color;

    /// Terminal state of the live position, or `None` if play continues.
    fn terminal(&self) -> Option<TerminalKind>;

    /// Read-only piece placement snapshot.
    fn grid(&self) -> Grid;

    /// Standard FEN of the live position. Boundary serialization only.
    fn fen(&self) -> String;

    /// UCI text for a move of this game ("e2e4", "e7e8q").
    fn move_to_uci(&self, mv: &Self::Move) -> String;

    /// Resolves UCI text against the current legal moves. `None` if the text
    /// is malformed or names an illegal move.
    fn move_from_uci(&self, text: &str) -> Option<Self::Move>;
}
