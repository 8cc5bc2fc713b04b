//! Result tallies, reporting, and JSON persistence.
//!
//! Tallies are explicit values returned from the runner; nothing here is
//! global or shared across games.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Result of a single game, from the first player's perspective.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    /// The same game seen from the other seat.
    pub fn flipped(self) -> GameResult {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }
}

/// Result of a match (multiple games).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from the first player's perspective (1 win, 0.5 draw, 0 loss).
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

/// Saved report of a single match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub source1: String,
    pub source2: String,
    pub depth: u8,
    pub result: MatchResult,
}

impl MatchReport {
    pub fn save(&self, path: &Path) -> Result<(), String> {
        save_json(self, path)
    }

    pub fn load(path: &Path) -> Result<Self, String> {
        load_json(path)
    }

    pub fn generate_report(&self) -> String {
        format!(
            "{:<20} vs {:<20} depth {}  {:>3}-{:<3}-{:<3}  ({:.1}%)\n",
            self.source1,
            self.source2,
            self.depth,
            self.result.wins,
            self.result.losses,
            self.result.draws,
            self.result.score() * 100.0
        )
    }

    pub fn print_report(&self) {
        print!("{}", self.generate_report());
    }
}

/// Tally for one depth of a sweep, from the white seat's perspective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepthTally {
    pub depth: u8,
    pub white_wins: u32,
    pub black_wins: u32,
    pub draws: u32,
}

/// Full report of a depth sweep: the same pairing played at several depths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepReport {
    pub white: String,
    pub black: String,
    pub games_per_depth: u32,
    pub tallies: Vec<DepthTally>,
}

impl SweepReport {
    pub fn save(&self, path: &Path) -> Result<(), String> {
        save_json(self, path)
    }

    pub fn load(path: &Path) -> Result<Self, String> {
        load_json(path)
    }

    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!(
            "=== Sweep: {} (white) vs {} (black), {} games/depth ===\n",
            self.white, self.black, self.games_per_depth
        ));
        report.push_str(&format!(
            "{:<8} {:>10} {:>10} {:>8}\n",
            "Depth", "White", "Black", "Draws"
        ));
        for tally in &self.tallies {
            report.push_str(&format!(
                "{:<8} {:>10} {:>10} {:>8}\n",
                tally.depth, tally.white_wins, tally.black_wins, tally.draws
            ));
        }
        report
    }

    pub fn print_report(&self) {
        print!("{}", self.generate_report());
    }
}

fn save_json<T: Serialize>(value: &T, path: &Path) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize: {}", e))?;
    std::fs::write(path, json).map_err(|e| format!("Failed to write: {}", e))
}

fn load_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T, String> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| format!("Failed to read: {}", e))?;
    serde_json::from_str(&contents).map_err(|e| format!("Failed to parse: {}", e))
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
