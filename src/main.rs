use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use stylometer::{Error, StyleReport, TextAdapter};

#[derive(Parser)]
#[command(
    name = "stylometer",
    about = "Measure writing style and suggest improvement strategies",
    version
)]
struct Cli {
    /// File paths to analyze (reads stdin if none provided)
    files: Vec<PathBuf>,

    /// Tagger model enabling tokenization, tagging and Flesch readability
    #[arg(long, env = "STYLOMETER_LEXICON")]
    lexicon: Option<PathBuf>,

    /// Print metrics, scores and advice without the strategy tables
    #[arg(long)]
    metrics_only: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let adapter = TextAdapter::from_model_path(cli.lexicon.as_deref());

    if cli.files.is_empty() {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)?;
        print_report(cli, stylometer::analyze(&input, &adapter))?;
    } else {
        for path in &cli.files {
            let text = std::fs::read_to_string(path).map_err(|source| Error::Read {
                path: path.clone(),
                source,
            })?;
            print_report(cli, stylometer::analyze(&text, &adapter))?;
        }
    }
    Ok(())
}

fn print_report(cli: &Cli, report: StyleReport) -> Result<(), Error> {
    let report = if cli.metrics_only {
        report.without_strategies()
    } else {
        report
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
