use clap::Parser;
use puzzle_slider::engine::Board;
use puzzle_slider::error::Error;
use puzzle_slider::report::{self, ReportConfig, DEFAULT_REPORT_PATH};
use puzzle_slider::solvability::is_solvable;
use puzzle_slider::solver::{search, Strategy};
use puzzle_slider::utils::random_board;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Interactive 8-puzzle search menu", long_about = None)]
struct Args {
    /// Seed for random state generation (random if omitted)
    #[clap(long)]
    seed: Option<u64>,

    /// Path of the report file written after each search
    #[clap(short, long, default_value = DEFAULT_REPORT_PATH)]
    output: PathBuf,
}

fn print_menu() {
    println!();
    println!("1. Generate a random state");
    println!("2. Initialize working state");
    println!("3. Breadth-First Search");
    println!("4. Depth-First Search");
    println!("5. A* Search w/ misplaced tiles");
    println!("6. A* Search w/ manhattan distance");
    println!("99. Exit the application");
    println!();
}

fn run_search(start: &Board, strategy: Strategy, config: &ReportConfig) {
    if !is_solvable(start) {
        println!("{} is not solvable! Generate and initialize a new start state.", start);
        return;
    }
    println!("Running {} from {}...", strategy, start);
    match search(start, strategy) {
        Ok(result) => {
            println!("{}", report::render(&result));
            match report::save_report(&result, config) {
                Ok(()) => println!("See the ({}) file for search path", config.path.display()),
                Err(e) => eprintln!("{}", e),
            }
        }
        Err(Error::NoOpRequested) => {
            println!("Randomize and initialize a new start state to begin a search!");
        }
        Err(e) => println!("{}", report::render_failure(start, &e)),
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let config = ReportConfig {
        path: args.output,
        ..ReportConfig::default()
    };

    // Both start at the goal, which the engine refuses to search.
    let mut generated = Board::goal();
    let mut start = Board::goal();

    println!("Welcome to Puzzle Slider!");
    loop {
        print_menu();
        print!("Choose an option: ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => {
                println!("Error reading input. Please try again.");
                continue;
            }
        }

        match input.trim() {
            "1" => {
                generated = random_board(&mut rng);
                if is_solvable(&generated) {
                    println!("{} is solvable!", generated);
                } else {
                    println!("{} is not solvable!", generated);
                }
            }
            "2" => {
                start = generated;
                println!("Your initialized start state is: {}", start);
                println!("{}", start.to_grid_string());
            }
            "3" => run_search(&start, Strategy::BreadthFirst, &config),
            "4" => run_search(&start, Strategy::DepthFirst, &config),
            "5" => run_search(&start, Strategy::AStarMisplaced, &config),
            "6" => run_search(&start, Strategy::AStarManhattan, &config),
            "99" | "q" => {
                println!("Exiting the application!");
                break;
            }
            _ => println!("Incorrect option, choose again!"),
        }
    }
}
