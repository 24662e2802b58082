use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use prowler_plugin_core::{Credentials, ScanOptions};

use super::{ScannerOverrides, load_scanner_config, read_json_payload};
use crate::connector::{Connector, ProwlerConnector};

#[derive(Debug)]
pub struct VerifyArgs {
    pub options: Option<PathBuf>,
    pub secret: PathBuf,
    pub schema: Option<String>,
    pub overrides: ScannerOverrides,
}

pub async fn run_verify_command(args: VerifyArgs) -> Result<()> {
    let scanner = load_scanner_config(&args.overrides)?;

    let options: ScanOptions = match &args.options {
        Some(path) => read_json_payload(path)?,
        None => ScanOptions::default(),
    };
    let secret_data: Credentials = read_json_payload(&args.secret)?;

    let connector = ProwlerConnector::new(scanner);
    connector
        .verify(&options, &secret_data, args.schema.as_deref())
        .await?;

    info!("credentials verified");
    println!("OK");
    Ok(())
}
