//! AI Simulator CLI - fast in-memory Dudo matches for AI tuning.
//!
//! Every action still goes through the engine's legality checks; only the
//! pacing and presentation of live play are skipped.

mod metrics;
mod output;
mod simulator;
mod types;

use std::time::Instant;

use clap::Parser;
use dudo_engine::ai::{create_ai, AiPlayer};
use dudo_engine::domain::derive_seat_seed;
use dudo_engine::MatchConfig;
use metrics::build_match_metrics;
use output::OutputWriter;
use simulator::{MatchResult, Simulator};
use tracing::{info, warn};
use types::{parse_seats, MetricsLevel, OutputFormat, SeatSpec};

#[derive(Parser)]
#[command(name = "ai-simulator")]
#[command(about = "Fast in-memory Dudo simulator for AI tuning")]
struct Args {
    /// Number of matches to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Comma-separated seat list, e.g. `heuristic:reckless,classic,random`
    #[arg(long, default_value = "heuristic,classic")]
    seats: String,

    /// Dice per player at the start
    #[arg(long, default_value = "5")]
    starting_dice: u8,

    /// Base seed; match `n` uses `seed + n`
    #[arg(long)]
    seed: Option<u64>,

    /// Abort a match that has not finished after this many rounds
    #[arg(long, default_value = "500")]
    max_rounds: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Compress output files
    #[arg(long)]
    compress: bool,

    /// Metrics detail level
    #[arg(long, default_value = "detailed")]
    metrics_level: MetricsLevel,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Silent by default, only warnings and errors.
    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let seats = parse_seats(&args.seats)?;
    let seat_names: Vec<String> = seats.iter().map(SeatSpec::to_string).collect();
    let config = MatchConfig::new(
        (0..seats.len()).map(|i| format!("P{}", i + 1)).collect(),
        args.starting_dice,
    );
    config.validate()?;

    if args.show_output {
        info!("Starting AI simulator");
        info!(
            games = args.games,
            seats = %seat_names.join(", "),
            starting_dice = args.starting_dice,
            "Configuration"
        );
    }

    let mut output_writer =
        OutputWriter::new(&args.output_dir, &args.output_format, args.compress)?;
    if args.show_output {
        info!("Output directory: {}", args.output_dir);
    }

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0;

    for game_num in 1..=args.games {
        let game_start = Instant::now();
        let match_seed = match args.seed {
            Some(s) => s.wrapping_add(u64::from(game_num)),
            None => rand::random(),
        };

        match run_match(&config, &seats, match_seed, args.max_rounds) {
            Ok(result) => {
                let duration_ms = game_start.elapsed().as_secs_f64() * 1000.0;
                let metrics = build_match_metrics(
                    game_num,
                    match_seed,
                    seat_names.clone(),
                    args.starting_dice,
                    args.games,
                    &result,
                    duration_ms,
                    &args.metrics_level,
                );

                if let Err(e) = output_writer.write_match(&metrics) {
                    warn!("Failed to write metrics for match {}: {}", game_num, e);
                }

                if args.verbose {
                    info!(
                        "Match {} completed: winner={:?} rounds={}",
                        game_num,
                        result.winner,
                        result.rounds_played()
                    );
                }
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!("Match {} (seed {}) failed: {}", game_num, match_seed, e);
            }
        }
    }

    let elapsed = start.elapsed();
    let (detail_path, csv_path) = output_writer.output_paths();
    let (detail_path, csv_path) = (detail_path.to_path_buf(), csv_path.to_path_buf());
    output_writer.finish()?;

    if args.show_output {
        info!("Detailed results written to: {}", detail_path.display());
        info!("Summary CSV written to: {}", csv_path.display());
        print_summary(&results, &seat_names, errors, elapsed, args.games);
    }

    Ok(())
}

fn run_match(
    config: &MatchConfig,
    seats: &[SeatSpec],
    match_seed: u64,
    max_rounds: u32,
) -> Result<MatchResult, Box<dyn std::error::Error>> {
    let ais = seats
        .iter()
        .enumerate()
        .map(|(seat, seat_spec)| {
            create_ai(seat_spec.ai, &seat_spec.ai_config(derive_seat_seed(match_seed, seat)))
        })
        .collect::<Result<Vec<Box<dyn AiPlayer>>, _>>()?;

    let simulator = Simulator::new(config, match_seed, max_rounds)?;
    Ok(simulator.simulate_match(&ais)?)
}

fn print_summary(
    results: &[MatchResult],
    seat_names: &[String],
    errors: u32,
    elapsed: std::time::Duration,
    total: u32,
) {
    println!("\n=== Simulation Summary ===");
    println!("Matches completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {}", errors);
    }
    println!("Total time: {:?}", elapsed);
    if results.is_empty() {
        return;
    }
    println!(
        "Average time per match: {:?}",
        elapsed / results.len() as u32
    );

    let n = results.len() as f64;
    let total_rounds: u32 = results.iter().map(MatchResult::rounds_played).sum();
    println!("Average rounds per match: {:.1}", f64::from(total_rounds) / n);

    let mut wins = vec![0u32; seat_names.len()];
    let mut dice_left = vec![0u32; seat_names.len()];
    for result in results {
        if let Some(w) = result.winner {
            wins[w] += 1;
            dice_left[w] += u32::from(result.final_dice[w]);
        }
    }

    println!("\n=== Results by Seat ===");
    for (seat, name) in seat_names.iter().enumerate() {
        let win_rate = (wins[seat] as f64 / n) * 100.0;
        let avg_left = if wins[seat] > 0 {
            dice_left[seat] as f64 / wins[seat] as f64
        } else {
            0.0
        };
        println!(
            "Seat {} ({}): wins={} ({:.1}%), avg dice left when winning={:.2}",
            seat, name, wins[seat], win_rate, avg_left
        );
    }
}
