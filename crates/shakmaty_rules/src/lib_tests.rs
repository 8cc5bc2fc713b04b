use super::*;

#[test]
fn startpos_has_twenty_moves() {
    let game = ShakmatyGame::new();
    assert_eq!(game.legal_moves().len(), 20);
    assert_eq!(game.side_to_move(), Color::White);
    assert_eq!(game.terminal(), None);
}

#[test]
fn apply_undo_restores_fen() {
    let mut game = ShakmatyGame::new();
    let before = game.fen();

    let mv = game.move_from_uci("e2e4").expect("e2e4 is legal");
    game.apply(&mv);
    assert_ne!(game.fen(), before);
    assert_eq!(game.side_to_move(), Color::Black);

    game.undo();
    assert_eq!(game.fen(), before);
    assert_eq!(game.side_to_move(), Color::White);
}

#[test]
fn nested_apply_undo_restores_fen() {
    let mut game = ShakmatyGame::new();
    let before = game.fen();

    let moves: Vec<_> = game.legal_moves().into_iter().take(3).collect();
    for mv in &moves {
        game.apply(mv);
    }
    for _ in &moves {
        game.undo();
    }
    assert_eq!(game.fen(), before);
}

#[test]
fn detects_checkmate() {
    // Fool's mate
    let game =
        ShakmatyGame::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 0 3")
            .unwrap();
    assert_eq!(game.terminal(), Some(TerminalKind::Checkmate));
    assert!(game.legal_moves().is_empty());
}

#[test]
fn detects_stalemate() {
    let game = ShakmatyGame::from_fen("k7/8/1Q6/8/8/8/8/1K6 b - - 0 1").unwrap();
    assert_eq!(game.terminal(), Some(TerminalKind::Stalemate));
}

#[test]
fn detects_threefold_repetition() {
    let mut game = ShakmatyGame::new();
    // Knights out and back, twice: the starting position occurs three times.
    for uci in [
        "g1f3", "g8f6", "f3g1", "f6g8", "g1f3", "g8f6", "f3g1", "f6g8",
    ] {
        assert_eq!(game.terminal(), None, "premature terminal before {uci}");
        let mv = game.move_from_uci(uci).expect("shuffle move is legal");
        game.apply(&mv);
    }
    assert_eq!(game.terminal(), Some(TerminalKind::ThreefoldRepetition));
}

#[test]
fn detects_fifty_move_draw() {
    let game = ShakmatyGame::from_fen("k6r/8/8/8/8/8/8/K6R w - - 100 60").unwrap();
    assert_eq!(game.terminal(), Some(TerminalKind::Draw));
}

#[test]
fn detects_insufficient_material() {
    let game = ShakmatyGame::from_fen("k7/8/8/8/8/8/8/K6N w - - 0 1").unwrap();
    assert_eq!(game.terminal(), Some(TerminalKind::Draw));
}

#[test]
fn castling_uses_king_hop_notation() {
    let game = ShakmatyGame::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    assert!(game.move_from_uci("e1g1").is_some());
    assert!(game.move_from_uci("e1c1").is_some());

    let short = game.move_from_uci("e1g1").unwrap();
    assert_eq!(game.move_to_uci(&short), "e1g1");
}

#[test]
fn promotion_roundtrips_through_uci() {
    let game = ShakmatyGame::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1").unwrap();
    let mv = game.move_from_uci("a7a8q").expect("promotion is legal");
    assert_eq!(game.move_to_uci(&mv), "a7a8q");
}

#[test]
fn grid_matches_start_position() {
    let game = ShakmatyGame::new();
    let grid = game.grid();

    assert_eq!(
        grid[0][4],
        Some(Piece::new(Color::White, PieceKind::King))
    );
    assert_eq!(
        grid[7][4],
        Some(Piece::new(Color::Black, PieceKind::King))
    );
    assert_eq!(
        grid[1][0],
        Some(Piece::new(Color::White, PieceKind::Pawn))
    );
    assert_eq!(grid[4][4], None);
}

#[test]
fn rejects_malformed_fen() {
    assert!(ShakmatyGame::from_fen("not a position").is_err());
}

#[test]
fn rejects_illegal_setup() {
    // Two white kings
    assert!(ShakmatyGame::from_fen("k7/8/8/8/8/8/8/KK6 w - - 0 1").is_err());
}

#[test]
fn move_from_uci_rejects_illegal_text() {
    let game = ShakmatyGame::new();
    assert_eq!(game.move_from_uci("e2e5"), None);
    assert_eq!(game.move_from_uci(""), None);
    assert_eq!(game.move_from_uci("zz99"), None);
}
