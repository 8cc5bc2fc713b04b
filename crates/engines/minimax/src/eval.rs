//! Static material and positional evaluation.

use game_core::{Color, GameRules, Grid, PieceKind};

/// Bonus per non-king piece within one square of the mover's king.
const KING_RING_BONUS: i32 = 10;

/// Material value of a piece in points.
pub fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 350,
        PieceKind::Bishop => 350,
        PieceKind::Rook => 525,
        PieceKind::Queen => 1000,
        PieceKind::King => 10_000,
    }
}

/// Scores the live position. Positive favors white, negative favors black.
///
/// Material sum over the whole board, plus [`KING_RING_BONUS`] for every
/// non-king piece of either color within Chebyshev distance 1 of the
/// side-to-move's king. When that king is not on the board the positional
/// term is omitted.
///
/// Pure and deterministic; reads the position only through `grid` and
/// `side_to_move`.
pub fn evaluate<G: GameRules>(game: &G) -> i32 {
    let grid = game.grid();
    let king = find_king(&grid, game.side_to_move());

    let mut value = 0;
    for (rank, row) in grid.iter().enumerate() {
        for (file, square) in row.iter().enumerate() {
            let Some(piece) = square else { continue };

            value += piece.color.sign() * piece_value(piece.kind);

            if piece.kind != PieceKind::King {
                if let Some((king_rank, king_file)) = king {
                    let distance = (rank as i32 - king_rank)
                        .abs()
                        .max((file as i32 - king_file).abs());
                    if distance <= 1 {
                        value += KING_RING_BONUS;
                    }
                }
            }
        }
    }

    value
}

fn find_king(grid: &Grid, color: Color) -> Option<(i32, i32)> {
    for (rank, row) in grid.iter().enumerate() {
        for (file, square) in row.iter().enumerate() {
            if let Some(piece) = square {
                if piece.kind == PieceKind::King && piece.color == color {
                    return Some((rank as i32, file as i32));
                }
            }
        }
    }
    None
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
