//! Remote Engine Bridge
//!
//! Move source that forwards the live position (as FEN) to an HTTP relay
//! sitting in front of a strong external engine and plays the move named in
//! the relay's `bestmove` reply. A peer of the in-process searcher: same
//! `MoveSource` seam, no search logic of its own.

use std::time::Duration;

use game_core::{GameRules, MoveSource, SearchReport};
use serde::Serialize;
use thiserror::Error;

/// Default relay endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/";

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("reply carried no bestmove: {0:?}")]
    Protocol(String),
}

#[derive(Serialize)]
struct MoveRequest<'a> {
    fen: &'a str,
}

/// Bridge to a remote engine behind an HTTP relay.
pub struct RemoteEngine {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl RemoteEngine {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_timeout(endpoint, Duration::from_secs(60))
    }

    /// Bridge with an explicit transport timeout. The timeout bounds the
    /// HTTP round trip only; the remote engine's own search effort is the
    /// relay's business.
    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::blocking::Client::new());
        Self {
            endpoint: endpoint.into(),
            client,
        }
    }

    /// Posts the position and returns the UCI text of the suggested move.
    pub fn request_best_move(&self, fen: &str) -> Result<String, RemoteError> {
        let reply = self
            .client
            .post(&self.endpoint)
            .json(&MoveRequest { fen })
            .send()?
            .error_for_status()?
            .text()?;

        match parse_bestmove(&reply) {
            Some(uci) => Ok(uci.to_string()),
            None => Err(RemoteError::Protocol(reply)),
        }
    }
}

impl Default for RemoteEngine {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl<G: GameRules> MoveSource<G> for RemoteEngine {
    fn pick_move(&mut self, game: &mut G, depth: u8) -> SearchReport<G::Move> {
        let fen = game.fen();
        match self.request_best_move(&fen) {
            Ok(uci) => match game.move_from_uci(&uci) {
                Some(mv) => SearchReport {
                    best_move: Some(mv),
                    score: 0,
                    depth,
                    nodes: 0,
                },
                None => {
                    log::error!("remote move {uci:?} is not legal in {fen:?}");
                    SearchReport::empty(depth)
                }
            },
            Err(err) => {
                log::error!("remote engine request failed: {err}");
                SearchReport::empty(depth)
            }
        }
    }

    fn name(&self) -> &str {
        "Remote v1.0"
    }
}

/// Extracts the move from a raw engine reply such as
/// `"bestmove e2e4 ponder e7e5"`, possibly preceded by info lines.
fn parse_bestmove(reply: &str) -> Option<&str> {
    let at = reply.find("bestmove")?;
    let mut words = reply[at..].split_whitespace();
    words.next(); // the "bestmove" token itself
    words.next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_bestmove() {
        assert_eq!(parse_bestmove("bestmove e2e4"), Some("e2e4"));
    }

    #[test]
    fn parses_bestmove_with_ponder() {
        assert_eq!(parse_bestmove("bestmove e2e4 ponder e7e5"), Some("e2e4"));
    }

    #[test]
    fn parses_bestmove_after_info_lines() {
        let reply = "info depth 18 score cp 32 pv d2d4\nbestmove d2d4 ponder d7d5";
        assert_eq!(parse_bestmove(reply), Some("d2d4"));
    }

    #[test]
    fn rejects_reply_without_bestmove() {
        assert_eq!(parse_bestmove("info depth 18"), None);
        assert_eq!(parse_bestmove(""), None);
    }

    #[test]
    fn rejects_truncated_bestmove() {
        assert_eq!(parse_bestmove("bestmove"), None);
    }

    #[test]
    fn mate_reply_yields_the_none_marker() {
        // Engines answer "bestmove (none)" when there is no move; the marker
        // will then fail legal-move resolution upstream.
        assert_eq!(parse_bestmove("bestmove (none)"), Some("(none)"));
    }
}
