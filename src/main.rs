use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use soundshelf::config::Config;
use soundshelf::{app, DatabaseState};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, short, default_value_t = 3)]
    verbosity: usize,
    #[arg(long, short, default_value_t = false)]
    quiet: bool,
    /// JSON configuration file; defaults apply when omitted
    #[arg(long, short)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(err) = stderrlog::new()
        .verbosity(args.verbosity)
        .quiet(args.quiet)
        .timestamp(stderrlog::Timestamp::Millisecond)
        .init()
    {
        eprintln!("Failed to initialise logging: {}", err);
        return ExitCode::FAILURE;
    }

    let config = match args.config {
        Some(path) => {
            info!("Configuration path: {}", path);
            match Config::from_file(&path) {
                Ok(config) => config,
                Err(err) => {
                    error!("{}", err);
                    return ExitCode::FAILURE;
                }
            }
        }
        None => {
            info!("No configuration file given, using defaults");
            Config::default()
        }
    };

    let pool = match queries::connect(&config.database, config.max_connections).await {
        Ok(pool) => pool,
        Err(err) => {
            error!("Error connecting to database: {}", err);
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = migration::run(&pool).await {
        error!("Error running migrations: {}", err);
        return ExitCode::FAILURE;
    }

    let state = DatabaseState::new(pool, &config.public_url);
    let router = app(state);

    let listener = match tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Error binding port {}: {}", config.port, err);
            return ExitCode::FAILURE;
        }
    };
    info!("Listening on 0.0.0.0:{}", config.port);
    info!("Serving the catalog at {}", config.public_url);

    if let Err(err) = axum::serve(listener, router).await {
        error!("Server stopped: {}", err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
