use super::*;

#[test]
fn record_tallies_each_outcome() {
    let mut result = MatchResult::new();
    result.record(GameResult::Win);
    result.record(GameResult::Win);
    result.record(GameResult::Loss);
    result.record(GameResult::Draw);

    assert_eq!(result.wins, 2);
    assert_eq!(result.losses, 1);
    assert_eq!(result.draws, 1);
    assert_eq!(result.total_games(), 4);
}

#[test]
fn score_counts_draws_as_half() {
    let result = MatchResult {
        wins: 2,
        losses: 1,
        draws: 1,
    };
    assert!((result.score() - 0.625).abs() < 1e-9);
}

#[test]
fn empty_match_scores_even() {
    assert!((MatchResult::new().score() - 0.5).abs() < 1e-9);
}

#[test]
fn flipping_swaps_wins_and_losses() {
    assert_eq!(GameResult::Win.flipped(), GameResult::Loss);
    assert_eq!(GameResult::Loss.flipped(), GameResult::Win);
    assert_eq!(GameResult::Draw.flipped(), GameResult::Draw);
}

#[test]
fn sweep_report_lists_each_depth() {
    let report = SweepReport {
        white: "minimax".to_string(),
        black: "remote".to_string(),
        games_per_depth: 3,
        tallies: vec![
            DepthTally {
                depth: 1,
                white_wins: 0,
                black_wins: 3,
                draws: 0,
            },
            DepthTally {
                depth: 2,
                white_wins: 1,
                black_wins: 2,
                draws: 0,
            },
        ],
    };

    let text = report.generate_report();
    assert!(text.contains("minimax"));
    assert!(text.contains("remote"));
    assert!(text.lines().count() >= 4);
}

#[test]
fn match_report_roundtrips_through_json() {
    let report = MatchReport {
        source1: "minimax".to_string(),
        source2: "remote".to_string(),
        depth: 3,
        result: MatchResult {
            wins: 1,
            losses: 2,
            draws: 0,
        },
    };

    let json = serde_json::to_string(&report).unwrap();
    let back: MatchReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back.source1, report.source1);
    assert_eq!(back.result.losses, 2);
}
