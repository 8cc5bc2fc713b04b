use super::*;
use minimax_engine::MinimaxEngine;

#[test]
fn self_play_completes() {
    let mut source1 = MinimaxEngine::with_seed(1);
    let mut source2 = MinimaxEngine::with_seed(2);

    let config = MatchConfig {
        num_games: 2,
        depth: 1,
        max_moves: 60,
        verbose: false,
        ..Default::default()
    };

    let runner = MatchRunner::new(config);
    let result = runner.run_match(&mut source1, &mut source2);

    assert_eq!(result.total_games(), 2);
}

#[test]
fn forfeiting_source_loses() {
    /// Source that never produces a move.
    struct Resigner;

    impl<G: game_core::GameRules> MoveSource<G> for Resigner {
        fn pick_move(
            &mut self,
            _game: &mut G,
            depth: u8,
        ) -> game_core::SearchReport<G::Move> {
            game_core::SearchReport::empty(depth)
        }
        fn name(&self) -> &str {
            "Resigner"
        }
    }

    let mut quitter = Resigner;
    let mut opponent = MinimaxEngine::with_seed(3);

    let config = MatchConfig {
        num_games: 1,
        depth: 1,
        max_moves: 10,
        alternate_colors: false,
        verbose: false,
    };
    let result = MatchRunner::new(config).run_match(&mut quitter, &mut opponent);

    assert_eq!(result.losses, 1);
    assert_eq!(result.wins, 0);
}

#[test]
fn depth_sweep_tallies_every_game() {
    let mut white = MinimaxEngine::with_seed(4);
    let mut black = MinimaxEngine::with_seed(5);

    let tallies = run_depth_sweep(&mut white, &mut black, &[1], 2, 40, false);

    assert_eq!(tallies.len(), 1);
    assert_eq!(tallies[0].depth, 1);
    assert_eq!(
        tallies[0].white_wins + tallies[0].black_wins + tallies[0].draws,
        2
    );
}
