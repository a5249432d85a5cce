use clap::Parser;
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const EXIT_CONFIG: i32 = 4;
const EXIT_SERVER: i32 = 5;

#[derive(Parser, Debug)]
#[command(name = "topsis-server")]
#[command(about = "HTTP service that ranks uploaded CSV tables with TOPSIS", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to config file (defaults to ~/.config/topsis/config.yaml)
    #[arg(short, long)]
    config: Option<String>,

    /// Override the listen address from the config file
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "topsis=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = match topsis::config::load_config(cli.config.map(PathBuf::from)) {
        Ok(c) => c,
        Err(e) => {
            error!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };
    if let Some(bind) = cli.bind {
        config.server.bind = bind;
    }
    if let Err(errors) = topsis::config::validate_config(&config) {
        for e in errors {
            error!("Config error: {}", e);
        }
        std::process::exit(EXIT_CONFIG);
    }

    if let Err(e) = topsis::server::serve(&config).await {
        error!("{:#}", e);
        std::process::exit(EXIT_SERVER);
    }
}
