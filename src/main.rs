use clap::{Parser, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use std::process;

use agrigeo_shield::engine::{self, RunOptions};
use agrigeo_shield::policy::AnalysisLayer;
use agrigeo_shield::reporter::cli::CliReporter;
use agrigeo_shield::reporter::json::JsonReporter;
use agrigeo_shield::reporter::text::TextReporter;
use agrigeo_shield::reporter::{self, Reporter};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Cli,
    Json,
    Text,
}

#[derive(Parser)]
#[command(
    name = "agrigeo-shield",
    version,
    about = "Score districts for agri power, women's employment potential and drought risk"
)]
struct Cli {
    /// JSON file with the district requests and their reduced statistics
    input: PathBuf,

    /// Directory containing agrigeo.toml (defaults to current directory)
    #[arg(long, default_value = ".")]
    config: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "cli")]
    format: Format,

    /// Only output the power score per district
    #[arg(long)]
    score: bool,

    /// Apply the 2035 climate-risk scenario to every district
    #[arg(long)]
    scenario: bool,

    /// Override the analysis layer of every district
    #[arg(long, value_enum)]
    layer: Option<AnalysisLayer>,

    /// Scoring preset from agrigeo.toml
    #[arg(long)]
    preset: Option<String>,

    /// Show legends, export tasks and monthly series
    #[arg(long, short)]
    verbose: bool,

    /// Only log errors
    #[arg(long, short)]
    quiet: bool,
}

fn init_tracing(quiet: bool, verbose: bool) {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("AGRIGEO_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("Warning: failed to initialize logging: {e}");
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose);

    let options = RunOptions {
        config_dir: cli.config,
        preset: cli.preset,
        scenario: cli.scenario,
        layer: cli.layer,
    };

    let result = match engine::run(&cli.input, &options) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let output = if cli.score {
        reporter::score_only(&result)
    } else {
        let reporter: Box<dyn Reporter> = match cli.format {
            Format::Cli => Box::new(CliReporter),
            Format::Json => Box::new(JsonReporter),
            Format::Text => Box::new(TextReporter),
        };
        reporter.format(&result, cli.verbose)
    };
    print!("{output}");
    let _ = std::io::stdout().flush();

    if !result.failing().is_empty() {
        process::exit(1);
    }
}
