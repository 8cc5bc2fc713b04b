//! Rules collaborator backed by the `shakmaty` crate.
//!
//! All chess rules (move legality, check, castling, repetition-relevant
//! state) live in shakmaty. This crate adapts its immutable-position API to
//! the mutable apply/undo handle the search side works against, using a
//! clone-per-apply undo stack.

use game_core::{Color, GameRules, Grid, Piece, PieceKind, TerminalKind};
use shakmaty::fen::{Fen, ParseFenError};
use shakmaty::{CastlingMode, Chess, EnPassantMode, File, Position, Role, Square};
use thiserror::Error;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod lib_tests;

#[derive(Debug, Error)]
pub enum RulesError {
    #[error("invalid FEN: {0}")]
    Fen(#[from] ParseFenError),
    #[error("illegal position: {0}")]
    Setup(String),
}

/// A live chess game with undo support.
///
/// Holds the current shakmaty position plus an undo stack of prior positions
/// and a history of repetition keys. The key history spans every position the
/// handle has visited, including moves applied and undone during search, the
/// same scope the repetition rule is checked against during play.
#[derive(Debug, Clone)]
pub struct ShakmatyGame {
    current: Chess,
    undo_stack: Vec<Chess>,
    key_history: Vec<u64>,
}

impl ShakmatyGame {
    /// Standard starting position.
    pub fn new() -> Self {
        Self::with_position(Chess::default())
    }

    /// Position from a FEN string.
    pub fn from_fen(fen: &str) -> Result<Self, RulesError> {
        let parsed: Fen = fen.parse()?;
        let current: Chess = parsed
            .into_position(CastlingMode::Standard)
            .map_err(|e| RulesError::Setup(e.to_string()))?;
        Ok(Self::with_position(current))
    }

    fn with_position(current: Chess) -> Self {
        let mut game = Self {
            current,
            undo_stack: Vec::new(),
            key_history: Vec::new(),
        };
        game.key_history.push(game.position_key());
        game
    }

    /// Repetition key: FNV mix over the repetition-relevant FEN fields
    /// (placement, side to move, castling rights, en-passant square).
    fn position_key(&self) -> u64 {
        let fen = self.fen();
        let mut h = 0xcbf29ce484222325u64;
        for field in fen.split_whitespace().take(4) {
            for &b in field.as_bytes() {
                h ^= b as u64;
                h = h.wrapping_mul(0x100000001b3);
            }
            h ^= b' ' as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        h
    }

    fn is_threefold(&self) -> bool {
        match self.key_history.last() {
            Some(&cur) => self.key_history.iter().filter(|&&k| k == cur).count() >= 3,
            None => false,
        }
    }
}

impl Default for ShakmatyGame {
    fn default() -> Self {
        Self::new()
    }
}

impl GameRules for ShakmatyGame {
    type Move = shakmaty::Move;

    fn legal_moves(&self) -> Vec<Self::Move> {
        self.current.legal_moves().into_iter().collect()
    }

    fn apply(&mut self, mv: &Self::Move) {
        self.undo_stack.push(self.current.clone());
        self.current.play_unchecked(mv);
        self.key_history.push(self.position_key());
    }

    fn undo(&mut self) {
        debug_assert!(!self.undo_stack.is_empty(), "undo without matching apply");
        if let Some(prev) = self.undo_stack.pop() {
            self.current = prev;
            self.key_history.pop();
        }
    }

    fn side_to_move(&self) -> Color {
        color_from(self.current.turn())
    }

    fn terminal(&self) -> Option<TerminalKind> {
        if self.current.is_checkmate() {
            return Some(TerminalKind::Checkmate);
        }
        if self.current.is_stalemate() {
            return Some(TerminalKind::Stalemate);
        }
        if self.is_threefold() {
            return Some(TerminalKind::ThreefoldRepetition);
        }
        if self.current.halfmoves() >= 100 || self.current.is_insufficient_material() {
            return Some(TerminalKind::Draw);
        }
        None
    }

    fn grid(&self) -> Grid {
        let mut grid: Grid = [[None; 8]; 8];
        let board = self.current.board();
        for sq in Square::ALL {
            if let Some(piece) = board.piece_at(sq) {
                grid[sq.rank() as usize][sq.file() as usize] = Some(Piece::new(
                    color_from(piece.color),
                    kind_from(piece.role),
                ));
            }
        }
        grid
    }

    fn fen(&self) -> String {
        Fen::from_position(self.current.clone(), EnPassantMode::Legal).to_string()
    }

    fn move_to_uci(&self, mv: &Self::Move) -> String {
        match *mv {
            // Standard UCI writes castling as the king's two-square hop.
            shakmaty::Move::Castle { king, rook } => {
                let file = if rook.file() > king.file() {
                    File::G
                } else {
                    File::C
                };
                format!("{}{}", king, Square::from_coords(file, king.rank()))
            }
            ref mv => {
                let mut s = String::new();
                if let Some(from) = mv.from() {
                    s.push_str(&from.to_string());
                }
                s.push_str(&mv.to().to_string());
                if let Some(role) = mv.promotion() {
                    s.push(role.char());
                }
                s
            }
        }
    }

    fn move_from_uci(&self, text: &str) -> Option<Self::Move> {
        // Resolve against the legal move list so castling and en-passant
        // come back with the right internal representation.
        let text = text.trim().to_ascii_lowercase();
        self.current
            .legal_moves()
            .into_iter()
            .find(|mv| self.move_to_uci(mv) == text)
    }
}

fn color_from(color: shakmaty::Color) -> Color {
    match color {
        shakmaty::Color::White => Color::White,
        shakmaty::Color::Black => Color::Black,
    }
}

fn kind_from(role: Role) -> PieceKind {
    match role {
        Role::Pawn => PieceKind::Pawn,
        Role::Knight => PieceKind::Knight,
        Role::Bishop => PieceKind::Bishop,
        Role::Rook => PieceKind::Rook,
        Role::Queen => PieceKind::Queen,
        Role::King => PieceKind::King,
    }
}
