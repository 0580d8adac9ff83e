use hartisize::cli::{Args, Runner};
use hartisize::config::{AppConfig, trace_from_env};
use hartisize::logging;
use hartisize::Result;
use std::process::ExitCode;

async fn run() -> Result<()> {
    // Checked before anything else so a bad value never reaches the registry
    let trace = trace_from_env()?;
    let args = Args::parse_args();
    let config = AppConfig::from_args(&args, trace)?;
    logging::init(config.log_settings());

    Runner::new(config).run().await
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
