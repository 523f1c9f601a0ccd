//! SORTRACE CLI
//!
//! Thin presentation driver over the sortrace engines: parses input,
//! runs a sort, and replays the trace as colored terminal frames.
//! Compared positions render red, mutated positions green.

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::str::FromStr;
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};
use color_eyre::Result;
use color_eyre::eyre::{WrapErr, bail};
use console::style;
use rand::Rng;
use sortrace_core::{Algorithm, SortOutcome};
use sortrace_engines::run;
use sortrace_replay::{ArrayState, Replayer, TraceCursor, verify_outcome};

#[derive(Parser)]
#[command(name = "sortrace")]
#[command(about = "SORTRACE - Sorting animation traces in the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sort a sequence and report the outcome
    Sort {
        /// Algorithm (merge, insertion, counting, selection)
        #[arg(short, long)]
        algorithm: String,
        /// Comma-separated integers
        #[arg(short, long)]
        input: Option<String>,
        /// Generate a random input of this size instead
        #[arg(short, long)]
        random: Option<usize>,
        /// Dump the full outcome as JSON
        #[arg(long)]
        json: bool,
    },
    /// Replay a sort as animated terminal frames
    Replay {
        /// Algorithm (merge, insertion, counting, selection)
        #[arg(short, long)]
        algorithm: String,
        /// Comma-separated integers
        #[arg(short, long)]
        input: Option<String>,
        /// Generate a random input of this size instead
        #[arg(short, long)]
        random: Option<usize>,
        /// Delay between frames in milliseconds
        #[arg(short, long, default_value_t = 150)]
        delay_ms: u64,
    },
    /// Print every trace operation
    Trace {
        /// Algorithm (merge, insertion, counting, selection)
        #[arg(short, long)]
        algorithm: String,
        /// Comma-separated integers
        #[arg(short, long)]
        input: Option<String>,
        /// Generate a random input of this size instead
        #[arg(short, long)]
        random: Option<usize>,
    },
    /// List supported algorithms
    Algorithms,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Sort {
            algorithm,
            input,
            random,
            json,
        } => cmd_sort(&algorithm, input, random, json),
        Commands::Replay {
            algorithm,
            input,
            random,
            delay_ms,
        } => cmd_replay(&algorithm, input, random, delay_ms),
        Commands::Trace {
            algorithm,
            input,
            random,
        } => cmd_trace(&algorithm, input, random),
        Commands::Algorithms => cmd_algorithms(),
    }
}

fn cmd_sort(algorithm: &str, input: Option<String>, random: Option<usize>, json: bool) -> Result<()> {
    let (outcome, elapsed) = sorted_outcome(algorithm, input, random)?;
    if json {
        println!("{}", outcome.to_json());
        return Ok(());
    }

    println!("input:  {}", render_plain(&outcome.input));
    println!("sorted: {}", render_plain(&outcome.sorted));
    println!(
        "ops:    {} ({} compares, {} overwrites, {} swaps)",
        outcome.trace.len(),
        outcome.trace.compare_count(),
        outcome.trace.overwrite_count(),
        outcome.trace.swap_count()
    );
    println!("Sorted in {:.4} seconds", elapsed.as_secs_f64());
    Ok(())
}

fn cmd_replay(
    algorithm: &str,
    input: Option<String>,
    random: Option<usize>,
    delay_ms: u64,
) -> Result<()> {
    let (outcome, _) = sorted_outcome(algorithm, input, random)?;
    verify_outcome(&outcome)?;

    println!("{}", render_plain(&outcome.input));
    let delay = Duration::from_millis(delay_ms);
    let started = Instant::now();
    let mut cursor = TraceCursor::from_trace(&outcome.trace);
    Replayer::new().replay_with_callback(&mut cursor, &outcome.input, |_, state| {
        println!("{}", render_frame(state));
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    })?;
    println!("Sorted in {:.4} seconds", started.elapsed().as_secs_f64());
    Ok(())
}

fn cmd_trace(algorithm: &str, input: Option<String>, random: Option<usize>) -> Result<()> {
    let (outcome, _) = sorted_outcome(algorithm, input, random)?;
    for (step, op) in outcome.trace.ops().iter().enumerate() {
        println!("{:>5}  {}", step, op);
    }
    Ok(())
}

fn cmd_algorithms() -> Result<()> {
    for algorithm in Algorithm::ALL {
        let family = if algorithm.is_comparison_based() {
            "comparison"
        } else {
            "distribution"
        };
        let stability = if algorithm.is_stable() { "stable" } else { "unstable" };
        println!("{:<15} {:<13} {}", algorithm.label(), family, stability);
    }
    Ok(())
}

/// Parse or generate the input, run the engine, time it.
fn sorted_outcome(
    algorithm: &str,
    input: Option<String>,
    random: Option<usize>,
) -> Result<(SortOutcome, Duration)> {
    let algorithm = Algorithm::from_str(algorithm)?;
    let values = resolve_input(input, random)?;
    let started = Instant::now();
    let outcome = run(algorithm, &values)?;
    Ok((outcome, started.elapsed()))
}

fn resolve_input(input: Option<String>, random: Option<usize>) -> Result<Vec<i64>> {
    match (input, random) {
        (Some(_), Some(_)) => bail!("pass either --input or --random, not both"),
        (Some(text), None) => parse_sequence(&text),
        (None, Some(size)) => Ok(random_sequence(size)),
        (None, None) => bail!("an input is required: --input \"5,3,8,1\" or --random 12"),
    }
}

fn parse_sequence(text: &str) -> Result<Vec<i64>> {
    text.split(',')
        .map(|token| {
            let token = token.trim();
            token
                .parse::<i64>()
                .wrap_err_with(|| format!("invalid integer {:?}", token))
        })
        .collect()
}

fn random_sequence(size: usize) -> Vec<i64> {
    let mut rng = rand::thread_rng();
    (0..size).map(|_| rng.gen_range(1..=100)).collect()
}

fn render_plain(values: &[i64]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_frame(state: &ArrayState) -> String {
    let highlight = state.highlight();
    state
        .values()
        .iter()
        .enumerate()
        .map(|(index, value)| match highlight {
            Some(h) if h.covers(index) => {
                if h.is_mutation() {
                    style(value).green().to_string()
                } else {
                    style(value).red().to_string()
                }
            }
            _ => value.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
