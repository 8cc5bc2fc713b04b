//! Arena for the minimax engine and its remote peer
//!
//! This crate provides infrastructure for:
//! - Running matches between two move sources
//! - Sweeping search depths and tallying outcomes per depth
//! - Persisting reports as JSON
//!
//! # Usage
//!
//! ```bash
//! # Play the in-process searcher against the remote relay
//! cargo run -p arena -- match minimax remote --games 10 --depth 3
//!
//! # Sweep several depths, a few games each
//! cargo run -p arena -- sweep minimax remote --depths 1,2,3 --games 3
//! ```

mod config;
mod match_runner;
mod results;

pub use config::*;
pub use match_runner::*;
pub use results::*;
