//! graphlens CLI Entry Point

use graphlens_cli::{run, CliConfig};
use tracing::error;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: graphlens <fixture.json> <query> [config.json]";

#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (fixture, query) = match (args.first(), args.get(1)) {
        (Some(fixture), Some(query)) => (fixture.clone(), query.clone()),
        _ => {
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };

    let config = match args.get(2) {
        Some(path) => match CliConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{:#}", e);
                std::process::exit(2);
            }
        },
        None => CliConfig::default(),
    };

    // Initialize logging on stderr so stdout stays pure JSON
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    match run(&fixture, &query, &config).await {
        Ok(output) => println!("{}", output),
        Err(e) => {
            error!("{:#}", e);
            std::process::exit(1);
        }
    }
}
