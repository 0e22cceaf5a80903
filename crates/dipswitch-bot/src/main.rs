//! DIP switch bot binary.
//!
//! Reads configuration from flags and the environment, installs the tracing
//! subscriber and serves Telegram updates until interrupted.

use std::process::ExitCode;

use clap::Parser;
use dipswitch_bot::{Args, Config, telegram};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::try_new(&args.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match Config::from_args(args) {
        Ok(config) => config,
        Err(err) => {
            error!(%err, "invalid configuration");
            return ExitCode::FAILURE;
        },
    };

    info!(log_filter = %config.log_filter, "starting dipswitch bot");
    telegram::run(config).await;
    ExitCode::SUCCESS
}
