use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use prowler_plugin_core::{Credentials, ScanOptions};

use super::{ScannerOverrides, load_scanner_config, read_json_payload};
use crate::connector::{Connector, ProwlerConnector};

#[derive(Debug)]
pub struct CheckArgs {
    pub options: PathBuf,
    pub secret: PathBuf,
    pub schema: Option<String>,
    pub output: Option<PathBuf>,
    pub overrides: ScannerOverrides,
}

pub async fn run_check_command(args: CheckArgs) -> Result<()> {
    let scanner = load_scanner_config(&args.overrides)?;

    let options: ScanOptions = read_json_payload(&args.options)?;
    let secret_data: Credentials = read_json_payload(&args.secret)?;

    let connector = ProwlerConnector::new(scanner);
    let results = connector
        .check(&options, &secret_data, args.schema.as_deref())
        .await?;

    let rendered = serde_json::to_string_pretty(&results)?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("failed to write scan results: {}", path.display()))?;
            info!(path = %path.display(), "scan results written");
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
