pub mod check;
pub mod frameworks;
pub mod metadata;
pub mod verify;

pub use check::run_check_command;
pub use frameworks::run_frameworks_command;
pub use metadata::run_metadata_command;
pub use verify::run_verify_command;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use crate::config::{PluginConfig, ScannerConfig};

/// CLI-level overrides shared by verify and check.
#[derive(Debug, Clone, Default)]
pub struct ScannerOverrides {
    pub config: Option<PathBuf>,
    pub prowler_path: Option<PathBuf>,
    pub credentials_file: Option<PathBuf>,
}

/// Resolve the scanner config through the full precedence chain, with CLI
/// flags applied last.
pub fn load_scanner_config(overrides: &ScannerOverrides) -> Result<ScannerConfig> {
    let env_vars: HashMap<String, String> = std::env::vars().collect();
    let config = PluginConfig::load_with_precedence(overrides.config.as_deref(), &env_vars)?;

    let mut scanner = config.scanner;
    if let Some(path) = &overrides.prowler_path {
        scanner.prowler_path = path.clone();
    }
    if let Some(path) = &overrides.credentials_file {
        scanner.credentials_file = Some(path.clone());
    }
    Ok(scanner)
}

/// Read one of the host-contract JSON payloads from a file.
pub fn read_json_payload<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read payload file: {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse payload file: {}", path.display()))
}
