use clap::{ArgAction, Args, Parser, Subcommand};
use engine::{
    report_input_error, InputError, Matrix, Solution, SolverConfig, DEFAULT_DISPLAY_DIGITS, MAX_SIZE,
};
use parser::error::{report_errors, report_grid_errors, report_not_ready};
use parser::{read_grid, Grid, NotReadyReason, Readiness};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::exit;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

// Snapshots closer than this are considered unchanged and not printed again
const MATRIX_COMPARE_EPS: f64 = 1e-9;

const EXIT_NOT_READY: i32 = 1;
const EXIT_IO: i32 = 3;

#[derive(Parser)]
#[command(name = "gauss", version, about = "Solve linear systems by Gaussian elimination, step by step")]
struct Cli {
    /// More log output on stderr (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve the augmented matrix in FILE and print every elimination step
    Solve(SolveArgs),
    /// Only check whether every cell in FILE is a number or p/q fraction
    Check {
        /// Matrix file, or '-' for stdin
        file: PathBuf,
    },
}

#[derive(Args)]
struct SolveArgs {
    /// Matrix file, or '-' for stdin. One equation per line, e.g. `2 1 | 5`
    file: PathBuf,

    /// Fractional digits shown for every number
    #[arg(long, default_value_t = DEFAULT_DISPLAY_DIGITS)]
    digits: usize,

    /// Largest number of equations or unknowns accepted
    #[arg(long, default_value_t = MAX_SIZE)]
    max_size: usize,

    /// Print only the result
    #[arg(short, long)]
    quiet: bool,

    /// Print the matrix after every step, even when it did not change
    #[arg(long)]
    all_matrices: bool,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Read FILE (or stdin for '-'), returning the display name and contents
fn read_source(file: &Path) -> (String, String) {
    let name = file.display().to_string();
    let result = if name == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map(|_| buf)
    } else {
        std::fs::read_to_string(file)
    };

    match result {
        Ok(source) => (name, source),
        Err(e) => {
            eprintln!("❌ Error reading {}: {}", name, e);
            exit(EXIT_IO);
        }
    }
}

fn load_grid(filename: &str, source: &str) -> Grid {
    match read_grid(source) {
        Ok(grid) => {
            debug!(rows = grid.rows(), cols = grid.cols(), "grid read");
            grid
        }
        Err(errors) => {
            report_grid_errors(filename, source, &errors);
            exit(errors[0].exit_code());
        }
    }
}

/// Report the grammar errors of the cell at 1-based (row, col). Returns
/// false when the cell parses, leaving the caller to report it otherwise.
fn report_cell_syntax(filename: &str, source: &str, grid: &Grid, row: usize, col: usize) -> bool {
    let Some(cell) = grid.cell(row.saturating_sub(1), col.saturating_sub(1)) else {
        return false;
    };
    match parser::parse_cell(&cell.text) {
        Ok(_) => false,
        Err(errors) => {
            report_errors(filename, source, cell.span.start, errors);
            true
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Solve(args) => run_solve(args),
        Command::Check { file } => run_check(file),
    }
}

fn run_solve(args: SolveArgs) {
    let (filename, source) = read_source(&args.file);
    let grid = load_grid(&filename, &source);

    let config = SolverConfig::default()
        .with_digits(args.digits)
        .with_max_size(args.max_size);

    let solution = match engine::solve_with(&grid.texts(), &config) {
        Ok(solution) => solution,
        Err(error) => {
            let syntax_reported = match &error {
                InputError::InvalidCell { row, col, .. } => {
                    report_cell_syntax(&filename, &source, &grid, *row, *col)
                }
                _ => false,
            };
            if !syntax_reported {
                report_input_error(&filename, &source, &error, |row, col| {
                    grid.span(row.saturating_sub(1), col.saturating_sub(1))
                });
            }
            exit(error.exit_code());
        }
    };
    info!(
        steps = solution.steps.len(),
        unique = solution.outcome.is_unique(),
        "solved"
    );

    if !args.quiet {
        print_steps(&solution, args.all_matrices);
    }
    println!("Result:");
    println!("{}", solution.summary());
}

/// Print each step; a step's matrix is shown only when it differs from the
/// last one shown, except the forward-elimination result which always is.
fn print_steps(solution: &Solution, all_matrices: bool) {
    println!("Steps:");
    let mut shown: Option<&Matrix> = None;

    for step in &solution.steps {
        println!("{}", step.description);

        let changed = shown.is_none_or(|prev| !prev.approx_eq(&step.matrix, MATRIX_COMPARE_EPS));
        if all_matrices || changed || step.kind.is_forward_complete() {
            print!("{}", step.matrix.render(solution.digits));
            shown = Some(&step.matrix);
        }
        println!();
    }
}

fn run_check(file: PathBuf) {
    let (filename, source) = read_source(&file);
    let grid = load_grid(&filename, &source);

    match parser::check_grid(&grid.texts()) {
        Readiness::Ready => println!("ready ({} x {})", grid.rows(), grid.cols()),
        Readiness::NotReady { row, col, reason } => {
            let span = grid.span(row - 1, col - 1).unwrap_or(0..0);
            report_not_ready(&filename, &source, span, row, col, &reason);
            if reason == NotReadyReason::Malformed {
                report_cell_syntax(&filename, &source, &grid, row, col);
            }
            println!("not ready");
            exit(EXIT_NOT_READY);
        }
        other => {
            // Empty and ragged grids are already rejected by read_grid
            println!("not ready: {}", other);
            exit(EXIT_NOT_READY);
        }
    }
}
