use clap::Parser;
use puzzle_slider::report::{self, ReportConfig, DEFAULT_REPORT_PATH, DEFAULT_WRAP_WIDTH};
use puzzle_slider::solvability::is_solvable;
use puzzle_slider::solver::{search, Strategy};
use puzzle_slider::utils::board_from_str;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Solve one 8-puzzle board", long_about = None)]
struct Args {
    /// Starting board in row-major order, blank as E, 0 or _ (e.g. 1E3425786)
    state: String,

    /// Search strategy to run
    #[clap(short, long, value_enum, default_value = "breadth-first")]
    strategy: Strategy,

    /// Path of the report file
    #[clap(short, long, default_value = DEFAULT_REPORT_PATH)]
    output: PathBuf,

    /// Move-path entries per line in the report file (0 disables wrapping)
    #[clap(long, default_value_t = DEFAULT_WRAP_WIDTH)]
    wrap: usize,

    /// Search even if the board fails the solvability check
    #[clap(long)]
    skip_solvability_check: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let start = match board_from_str(&args.state) {
        Ok(board) => board,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(2);
        }
    };
    println!("Starting board:\n{}\n", start.to_grid_string());

    if !is_solvable(&start) {
        println!("{} is not solvable!", start);
        if !args.skip_solvability_check {
            return ExitCode::FAILURE;
        }
    }

    println!("Running {}...\n", args.strategy);
    match search(&start, args.strategy) {
        Ok(result) => {
            println!("{}", report::render(&result));
            let config = ReportConfig {
                path: args.output,
                wrap_width: args.wrap,
            };
            if let Err(e) = report::save_report(&result, &config) {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            }
            println!("See the ({}) file for search path", config.path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("{}", report::render_failure(&start, &e));
            ExitCode::FAILURE
        }
    }
}
