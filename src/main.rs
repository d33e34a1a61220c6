use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::{debug, Level};

use lh_avg::output::OutputFormat;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INVALID_SCORE: i32 = 1;
const EXIT_CONFIG: i32 = 2;
const EXIT_NO_INPUT: i32 = 3;

#[derive(Parser, Debug)]
#[command(name = "lh-avg")]
#[command(about = "Average and diff Lighthouse score strings", long_about = None)]
#[command(version)]
struct Cli {
    /// Score strings such as "14 / 100 / 98 / 100 / (1, 0, 6)" (read from stdin when omitted)
    scores: Vec<String>,

    /// Report percentages instead of fractions
    #[arg(short, long)]
    percentage: bool,

    /// Show every row after the first as a difference from the first
    #[arg(short, long)]
    diff: bool,

    /// Output format (defaults to the config value, then text)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Path to config file (defaults to .lhavgrc in the working directory, then ~/.config/lh-avg/config.yaml)
    #[arg(short, long)]
    config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match lh_avg::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let as_percentage = cli.percentage || config.percentage;
    let show_diff = cli.diff || config.diff;
    let format = cli.format.or(config.format).unwrap_or_default();
    debug!(as_percentage, show_diff, ?format, "Effective options");

    let stdin = std::io::stdin();
    let stdin_reader = (!stdin.is_terminal()).then(|| stdin.lock());
    let (scores, source) =
        match lh_avg::input::resolve_scores(cli.scores, &config.scores, stdin_reader) {
            Ok(resolved) => resolved,
            Err(e) => {
                eprintln!("Input error: {:#}", e);
                std::process::exit(EXIT_NO_INPUT);
            }
        };

    if scores.is_empty() {
        eprintln!("No score strings given.");
        eprintln!("Pass them as arguments, pipe them on stdin, or add them to .lhavgrc:");
        eprintln!("  scores:");
        eprintln!("    - \"14 / 100 / 98 / 100 / (1, 0, 6)\"");
        std::process::exit(EXIT_NO_INPUT);
    }
    debug!("Read {} score strings from {:?}", scores.len(), source);

    // Report every bad input before computing anything
    if let Err(errors) = lh_avg::scoring::validate_scores(&scores) {
        eprintln!("Invalid score strings:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_INVALID_SCORE);
    }

    let reports = match lh_avg::average(&scores, as_percentage, show_diff) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(EXIT_INVALID_SCORE);
        }
    };

    let use_colors = !cli.no_color && lh_avg::output::should_use_colors();
    match lh_avg::output::format_results(&reports, format, show_diff, use_colors) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Failed to serialize results: {}", e);
            std::process::exit(EXIT_INVALID_SCORE);
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
