//! Arena CLI
//!
//! Play matches between the in-process minimax searcher and the remote
//! engine bridge, and sweep search depths.

use arena::{
    run_depth_sweep, ArenaConfig, MatchConfig, MatchReport, MatchRunner, Source, SweepReport,
};
use minimax_engine::MinimaxEngine;
use remote_engine::RemoteEngine;
use std::env;
use std::path::Path;

const CONFIG_FILE: &str = "arena.toml";
const MATCH_FILE: &str = "arena_match.json";
const SWEEP_FILE: &str = "arena_sweep.json";

fn print_usage() {
    println!("Arena runner");
    println!();
    println!("Usage:");
    println!("  arena match <source1> <source2> [--games N] [--depth D]");
    println!("  arena sweep <white> <black> [--games N] [--depths 1,2,3]");
    println!();
    println!("Sources:");
    println!("  minimax        - In-process alpha-beta search, random ordering");
    println!("  minimax:SEED   - Same, with a pinned shuffle seed");
    println!("  remote         - HTTP relay bridge (configured endpoint)");
    println!("  remote:URL     - HTTP relay bridge at URL");
    println!();
    println!("Examples:");
    println!("  arena match minimax remote --games 20 --depth 3");
    println!("  arena sweep minimax remote --depths 1,2,3 --games 3");
}

fn create_source(spec: &str, config: &ArenaConfig) -> Box<Source> {
    match spec.split_once(':') {
        None => match spec.to_lowercase().as_str() {
            "minimax" => Box::new(MinimaxEngine::new()),
            "remote" => Box::new(RemoteEngine::new(config.endpoint.clone())),
            _ => {
                eprintln!("Unknown source: {}", spec);
                Box::new(MinimaxEngine::new())
            }
        },
        Some(("minimax", seed)) => match seed.parse() {
            Ok(seed) => Box::new(MinimaxEngine::with_seed(seed)),
            Err(_) => {
                eprintln!("Bad seed in {:?}, using entropy", spec);
                Box::new(MinimaxEngine::new())
            }
        },
        Some(("remote", url)) => Box::new(RemoteEngine::new(url.to_string())),
        Some(_) => {
            eprintln!("Unknown source: {}", spec);
            Box::new(MinimaxEngine::new())
        }
    }
}

fn parse_depths(text: &str) -> Option<Vec<u8>> {
    text.split(',')
        .map(|d| d.trim().parse().ok())
        .collect::<Option<Vec<u8>>>()
        .filter(|depths| !depths.is_empty())
}

fn run_match(args: &[String], config: &ArenaConfig) {
    if args.len() < 2 {
        eprintln!("Error: match requires two source specifications");
        print_usage();
        return;
    }

    let source1_spec = &args[0];
    let source2_spec = &args[1];

    let mut num_games = config.games;
    let mut depth = config.depth;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => {
                if i + 1 < args.len() {
                    num_games = args[i + 1].parse().unwrap_or(num_games);
                    i += 1;
                }
            }
            "--depth" | "-d" => {
                if i + 1 < args.len() {
                    depth = args[i + 1].parse().unwrap_or(depth);
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }

    println!("=== Match: {} vs {} ===", source1_spec, source2_spec);
    println!("Games: {}, Depth: {}", num_games, depth);
    println!();

    let mut source1 = create_source(source1_spec, config);
    let mut source2 = create_source(source2_spec, config);

    let runner = MatchRunner::new(MatchConfig {
        num_games,
        depth,
        max_moves: config.max_moves,
        ..Default::default()
    });
    let result = runner.run_match(source1.as_mut(), source2.as_mut());

    println!();
    println!("=== Final Result ===");
    let report = MatchReport {
        source1: source1_spec.to_string(),
        source2: source2_spec.to_string(),
        depth,
        result,
    };
    report.print_report();

    if let Err(e) = report.save(Path::new(MATCH_FILE)) {
        eprintln!("Warning: Failed to save match report: {}", e);
    }
}

fn run_sweep(args: &[String], config: &ArenaConfig) {
    if args.len() < 2 {
        eprintln!("Error: sweep requires two source specifications");
        print_usage();
        return;
    }

    let white_spec = &args[0];
    let black_spec = &args[1];

    let mut games_per_depth = config.games_per_depth;
    let mut depths = config.depths.clone();

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => {
                if i + 1 < args.len() {
                    games_per_depth = args[i + 1].parse().unwrap_or(games_per_depth);
                    i += 1;
                }
            }
            "--depths" => {
                if i + 1 < args.len() {
                    match parse_depths(&args[i + 1]) {
                        Some(parsed) => depths = parsed,
                        None => eprintln!("Bad --depths {:?}, keeping {:?}", args[i + 1], depths),
                    }
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }

    println!(
        "=== Sweep: {} (white) vs {} (black) ===",
        white_spec, black_spec
    );
    println!("Depths: {:?}, Games per depth: {}", depths, games_per_depth);
    println!();

    let mut white = create_source(white_spec, config);
    let mut black = create_source(black_spec, config);

    let tallies = run_depth_sweep(
        white.as_mut(),
        black.as_mut(),
        &depths,
        games_per_depth,
        config.max_moves,
        true,
    );

    let report = SweepReport {
        white: white_spec.to_string(),
        black: black_spec.to_string(),
        games_per_depth,
        tallies,
    };

    println!();
    report.print_report();

    if let Err(e) = report.save(Path::new(SWEEP_FILE)) {
        eprintln!("Warning: Failed to save sweep report: {}", e);
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let config = ArenaConfig::load_or_default(Path::new(CONFIG_FILE));

    match args[1].as_str() {
        "match" => run_match(&args[2..], &config),
        "sweep" => run_sweep(&args[2..], &config),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
        }
    }
}
