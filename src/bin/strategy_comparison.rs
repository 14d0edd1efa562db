use clap::Parser;
use puzzle_slider::engine::Board;
use puzzle_slider::solver::{search, Strategy};
use puzzle_slider::utils::{random_solvable_board, scramble};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::time::Instant;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Compare the four search strategies on random boards", long_about = None)]
struct Args {
    /// Number of boards to evaluate
    #[clap(short, long, default_value_t = 20)]
    boards: usize,

    /// Seed of the first board; board i uses seed + i
    #[clap(long, default_value_t = 0)]
    seed: u64,

    /// Scramble the goal with this many random moves instead of drawing
    /// uniformly random solvable boards
    #[clap(long)]
    scramble: Option<usize>,
}

#[derive(Default)]
struct Totals {
    runs: u64,
    failures: u64,
    depth: u64,
    nodes: u64,
    millis: u128,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut totals: HashMap<Strategy, Totals> = HashMap::new();

    println!("Starting strategy comparison for {} boards...", args.boards);

    for board_idx in 0..args.boards {
        let current_seed = args.seed + board_idx as u64;
        let mut rng = SmallRng::seed_from_u64(current_seed);
        let start = match args.scramble {
            Some(steps) => match scramble(&Board::goal(), steps, &mut rng) {
                Ok(board) => board,
                Err(e) => {
                    eprintln!("Could not scramble board {}: {}", board_idx, e);
                    continue;
                }
            },
            None => random_solvable_board(&mut rng),
        };

        println!("\nEvaluating Board {} (Seed: {}): {}", board_idx, current_seed, start);

        for strategy in Strategy::ALL {
            let entry = totals.entry(strategy).or_default();
            let timer = Instant::now();
            match search(&start, strategy) {
                Ok(result) => {
                    let elapsed = timer.elapsed().as_millis();
                    println!(
                        "  {:<32} Depth: {:<7} Nodes: {:<7} Time: {} ms",
                        strategy.name(),
                        result.depth,
                        result.nodes_generated,
                        elapsed
                    );
                    entry.runs += 1;
                    entry.depth += u64::from(result.depth);
                    entry.nodes += result.nodes_generated;
                    entry.millis += elapsed;
                }
                Err(e) => {
                    println!("  {:<32} {}", strategy.name(), e);
                    entry.failures += 1;
                }
            }
        }
    }

    println!("\n--- Comparison Complete ---");
    println!("Number of boards evaluated: {}", args.boards);
    println!("\n--- Averages ---");

    for strategy in Strategy::ALL {
        let Some(t) = totals.get(&strategy) else {
            continue;
        };
        if t.runs == 0 {
            println!("{:<32}: no successful runs ({} failed)", strategy.name(), t.failures);
            continue;
        }
        let runs = t.runs as f64;
        println!(
            "{:<32}: Depth = {:.2}, Nodes = {:.2}, Time = {:.2} ms, Failures = {}",
            strategy.name(),
            t.depth as f64 / runs,
            t.nodes as f64 / runs,
            t.millis as f64 / runs,
            t.failures
        );
    }
}
