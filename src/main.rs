use anyhow::Result;
use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

use prowler_plugin::cli::RootCommand;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    // Handle Ctrl+C gracefully
    tokio::select! {
        result = RootCommand::execute() => result,
        _ = tokio::signal::ctrl_c() => {
            eprintln!("\nInterrupted by user");
            std::process::exit(130);
        }
    }
}
