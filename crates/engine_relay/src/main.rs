//! Engine relay server
//!
//! Accepts `POST /` with a JSON body `{ "fen": "..." }`, forwards the
//! position to a local UCI engine process, and replies with the engine's raw
//! `bestmove` line. The engine binary comes from `RELAY_ENGINE` (default
//! `stockfish`), the port from `RELAY_PORT` (default 8080).

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use std::process::Stdio;
use std::sync::Arc;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::process::Command;

/// Search depth requested from the relayed engine.
const GO_DEPTH: u32 = 18;

#[derive(Debug, Error)]
enum RelayError {
    #[error("failed to launch engine {0:?}: {1}")]
    Spawn(String, std::io::Error),
    #[error("engine pipes unavailable")]
    Pipes,
    #[error("engine i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("engine exited without a bestmove")]
    NoBestMove,
}

struct RelayConfig {
    engine_path: String,
}

#[derive(Deserialize)]
struct MoveRequest {
    fen: String,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let engine_path = std::env::var("RELAY_ENGINE").unwrap_or_else(|_| "stockfish".to_string());
    let port: u16 = std::env::var("RELAY_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    let config = Arc::new(RelayConfig { engine_path });
    let app = Router::new().route("/", post(best_move)).with_state(config);

    let addr = format!("0.0.0.0:{}", port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            log::error!("cannot bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    log::info!("relay listening on {}", addr);
    if let Err(e) = axum::serve(listener, app).await {
        log::error!("server error: {}", e);
    }
}

async fn best_move(
    State(config): State<Arc<RelayConfig>>,
    Json(request): Json<MoveRequest>,
) -> Result<String, (StatusCode, String)> {
    log::info!("position {}", request.fen);

    match ask_engine(&config.engine_path, &request.fen).await {
        Ok(line) => {
            log::info!("{}", line);
            Ok(line)
        }
        Err(e) => {
            log::error!("engine request failed: {}", e);
            Err((StatusCode::BAD_GATEWAY, e.to_string()))
        }
    }
}

/// One full engine conversation: send the position, read until `bestmove`.
async fn ask_engine(engine_path: &str, fen: &str) -> Result<String, RelayError> {
    let mut child = Command::new(engine_path)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| RelayError::Spawn(engine_path.to_string(), e))?;

    let (Some(mut stdin), Some(stdout)) = (child.stdin.take(), child.stdout.take()) else {
        return Err(RelayError::Pipes);
    };

    stdin.write_all(uci_script(fen, GO_DEPTH).as_bytes()).await?;
    stdin.flush().await?;

    let mut lines = BufReader::new(stdout).lines();
    while let Some(line) = lines.next_line().await? {
        log::debug!("engine: {}", line);
        if line.starts_with("bestmove") {
            let _ = stdin.write_all(b"quit\n").await;
            let _ = child.wait().await;
            return Ok(line);
        }
    }

    let _ = child.wait().await;
    Err(RelayError::NoBestMove)
}

fn uci_script(fen: &str, depth: u32) -> String {
    format!(
        "uci\nucinewgame\nposition fen {}\ngo depth {}\n",
        fen, depth
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_sets_position_then_searches() {
        let fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        let script = uci_script(fen, 18);

        let lines: Vec<&str> = script.lines().collect();
        assert_eq!(lines[0], "uci");
        assert_eq!(lines[1], "ucinewgame");
        assert_eq!(lines[2], format!("position fen {}", fen));
        assert_eq!(lines[3], "go depth 18");
    }

    #[test]
    fn script_ends_with_newline() {
        assert!(uci_script("8/8/8/8/8/8/8/8 w - - 0 1", 1).ends_with('\n'));
    }
}
