//! Match runner for playing games between move sources.

use game_core::{Color, GameRules, MoveSource, TerminalKind};
use shakmaty_rules::ShakmatyGame;

use crate::results::{DepthTally, GameResult, MatchResult};

/// A move source playing on the standard rules engine.
pub type Source = dyn MoveSource<ShakmatyGame>;

/// Configuration for a match.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Search depth passed to the sources
    pub depth: u8,
    /// Maximum moves per game before declaring a draw
    pub max_moves: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Print progress during the match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            depth: 3,
            max_moves: 200,
            alternate_colors: true,
            verbose: true,
        }
    }
}

/// Runs matches between two move sources.
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two sources.
    ///
    /// Returns the result from `source1`'s perspective.
    pub fn run_match(&self, source1: &mut Source, source2: &mut Source) -> MatchResult {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            let source1_white = !self.config.alternate_colors || game_num % 2 == 0;

            let game_result = if source1_white {
                self.play_game(source1, source2)
            } else {
                self.play_game(source2, source1).flipped()
            };

            result.record(game_result);

            if self.config.verbose {
                let color = if source1_white { "W" } else { "B" };
                let outcome = match game_result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    GameResult::Draw => "1/2",
                };
                println!(
                    "Game {}/{}: {} ({}) - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    outcome,
                    color,
                    result.wins,
                    result.losses,
                    result.draws
                );
            }
        }

        result
    }

    /// Play a single game, returns the result from white's perspective.
    fn play_game(&self, white: &mut Source, black: &mut Source) -> GameResult {
        let mut game = ShakmatyGame::new();
        white.new_game();
        black.new_game();

        for _move_num in 0..self.config.max_moves {
            match game.terminal() {
                Some(TerminalKind::Checkmate) => {
                    // The side to move is the side that got mated.
                    return if game.side_to_move() == Color::White {
                        GameResult::Loss
                    } else {
                        GameResult::Win
                    };
                }
                Some(_) => return GameResult::Draw,
                None => {}
            }

            let mover = game.side_to_move();
            let report = match mover {
                Color::White => white.pick_move(&mut game, self.config.depth),
                Color::Black => black.pick_move(&mut game, self.config.depth),
            };

            match report.best_move {
                Some(mv) => game.apply(&mv),
                None => {
                    // Moves exist but the source produced none (e.g. a failed
                    // remote request): forfeit rather than spin.
                    return if mover == Color::White {
                        GameResult::Loss
                    } else {
                        GameResult::Win
                    };
                }
            }
        }

        // Move cap reached
        GameResult::Draw
    }
}

/// Quick utility to run a single match.
pub fn quick_match(
    source1: &mut Source,
    source2: &mut Source,
    num_games: u32,
    depth: u8,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        depth,
        ..Default::default()
    };
    MatchRunner::new(config).run_match(source1, source2)
}

/// Play the same pairing at several depths, `games_per_depth` games each,
/// with `white` always taking the white seat. Tallies are reported per depth
/// from the white seat's perspective.
pub fn run_depth_sweep(
    white: &mut Source,
    black: &mut Source,
    depths: &[u8],
    games_per_depth: u32,
    max_moves: u32,
    verbose: bool,
) -> Vec<DepthTally> {
    let mut tallies = Vec::with_capacity(depths.len());

    for &depth in depths {
        if verbose {
            println!("Starting games at depth {}", depth);
        }

        let runner = MatchRunner::new(MatchConfig {
            num_games: games_per_depth,
            depth,
            max_moves,
            alternate_colors: false,
            verbose: false,
        });

        let mut tally = DepthTally {
            depth,
            white_wins: 0,
            black_wins: 0,
            draws: 0,
        };

        for game_num in 0..games_per_depth {
            match runner.play_game(white, black) {
                GameResult::Win => tally.white_wins += 1,
                GameResult::Loss => tally.black_wins += 1,
                GameResult::Draw => tally.draws += 1,
            }
            if verbose {
                println!(
                    "Depth {}: game {}/{} done ({}-{}-{})",
                    depth,
                    game_num + 1,
                    games_per_depth,
                    tally.white_wins,
                    tally.black_wins,
                    tally.draws
                );
            }
        }

        tallies.push(tally);
    }

    tallies
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
