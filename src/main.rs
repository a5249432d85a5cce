use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_OUTPUT: i32 = 3;
const EXIT_CONFIG: i32 = 4;

#[derive(Parser, Debug)]
#[command(name = "topsis")]
#[command(about = "Rank alternatives in a CSV table with TOPSIS", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/topsis/config.yaml)
    #[arg(short, long)]
    config: Option<String>,

    /// Also print the ranked alternatives, best first
    #[arg(short, long)]
    print: bool,

    /// CSV file: identifier column followed by numeric criteria
    input: PathBuf,

    /// Comma-separated weights, one per criterion (e.g. "1,1,2")
    weights: String,

    /// Comma-separated impacts, "+" or "-" per criterion (e.g. "+,-,+")
    impacts: String,

    /// Where to write the result table
    output: PathBuf,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "topsis=debug" } else { "topsis=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match topsis::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };
    if let Err(errors) = topsis::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let ranked = match topsis::run::run_file(
        &cli.input,
        &cli.weights,
        &cli.impacts,
        &cli.output,
        &config.output,
    ) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            let code = if e.is_input_error() { EXIT_INPUT } else { EXIT_OUTPUT };
            std::process::exit(code);
        }
    };

    if cli.print {
        let use_colors = topsis::output::should_use_colors();
        println!("{}", topsis::output::format_ranked_table(&ranked, use_colors));
    }

    println!(
        "TOPSIS completed successfully! Result saved as '{}'",
        cli.output.display()
    );
    std::process::exit(EXIT_SUCCESS);
}
