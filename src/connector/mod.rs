//! Prowler scan invocation.
//!
//! The connector validates the host payloads, runs the scanner against an
//! ephemeral credential profile, and ingests the JSON it writes. The
//! profile is released on every exit path. Nothing is retried and no
//! timeout is enforced here; an operator-level process timeout is an
//! external concern.

pub mod profile;
pub mod store;

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use serde_json::Value;
use tokio::process::Command;
use tracing::debug;

use prowler_plugin_core::{
    AWS_PROVIDER, ConnectorError, Credentials, ScanOptions, resolve_framework,
};

use crate::config::ScannerConfig;
use profile::ProfileGuard;
use store::CredentialsStore;

/// Basename the scanner is told to write (`-F output`); it appends the
/// `.json` extension itself.
const OUTPUT_BASENAME: &str = "output";
const OUTPUT_FILENAME: &str = "output.json";

/// The host platform's plugin contract.
///
/// `schema` identifies the secret schema the host delivered; the original
/// contract carries it, the logic never reads it.
#[async_trait]
pub trait Connector {
    /// Cheap connectivity probe: can this profile list checks at all?
    async fn verify(
        &self,
        options: &ScanOptions,
        secret_data: &Credentials,
        schema: Option<&str>,
    ) -> Result<(), ConnectorError>;

    /// Full compliance scan; returns the scanner's JSON verbatim.
    async fn check(
        &self,
        options: &ScanOptions,
        secret_data: &Credentials,
        schema: Option<&str>,
    ) -> Result<Value, ConnectorError>;
}

/// Connector backed by the Prowler CLI.
#[derive(Debug, Clone)]
pub struct ProwlerConnector {
    config: ScannerConfig,
}

impl ProwlerConnector {
    pub fn new(config: ScannerConfig) -> Self {
        Self { config }
    }

    fn credentials_store(&self) -> CredentialsStore {
        match &self.config.credentials_file {
            Some(path) => CredentialsStore::new(path.clone()),
            None => CredentialsStore::from_env(),
        }
    }

    /// `aws -p <profile> -b`: provider subcommand, profile selection, no
    /// banner.
    fn command_prefix(profile_name: &str) -> Vec<String> {
        vec![
            "aws".to_string(),
            "-p".to_string(),
            profile_name.to_string(),
            "-b".to_string(),
        ]
    }

    fn verify_args(profile_name: &str) -> Vec<String> {
        let mut args = Self::command_prefix(profile_name);
        args.push("-l".to_string());
        args
    }

    fn check_args(
        profile_name: &str,
        output_dir: &Path,
        framework: &str,
        regions: &[String],
    ) -> Vec<String> {
        let mut args = Self::command_prefix(profile_name);
        args.extend([
            "-M".to_string(),
            "json".to_string(),
            "-o".to_string(),
            output_dir.display().to_string(),
            "-F".to_string(),
            OUTPUT_BASENAME.to_string(),
            "-z".to_string(),
            "--compliance".to_string(),
            framework.to_string(),
        ]);

        if !regions.is_empty() {
            args.push("-f".to_string());
            args.extend(regions.iter().cloned());
        }

        args
    }

    /// Run the scanner to completion, stdout discarded, stderr captured.
    async fn run_scanner(&self, args: &[String]) -> Result<(), ConnectorError> {
        debug!(scanner = %self.config.prowler_path.display(), ?args, "running scanner");

        let output = Command::new(&self.config.prowler_path)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ConnectorError::BinaryNotFound(self.config.prowler_path.clone())
                } else {
                    ConnectorError::Io(e)
                }
            })?;

        if !output.status.success() {
            return Err(ConnectorError::ExecutionFailed {
                reason: String::from_utf8_lossy(&output.stderr).to_string(),
            });
        }

        Ok(())
    }

    fn read_scan_output(output_dir: &Path) -> Result<Value, ConnectorError> {
        let output_path = output_dir.join(OUTPUT_FILENAME);
        let text = std::fs::read_to_string(&output_path).map_err(|e| {
            ConnectorError::OutputContract(format!(
                "scanner exited 0 but {} is unreadable: {e}",
                output_path.display()
            ))
        })?;

        serde_json::from_str(&text).map_err(|e| {
            ConnectorError::OutputContract(format!(
                "scanner exited 0 but {} is not valid JSON: {e}",
                output_path.display()
            ))
        })
    }
}

#[async_trait]
impl Connector for ProwlerConnector {
    async fn verify(
        &self,
        _options: &ScanOptions,
        secret_data: &Credentials,
        _schema: Option<&str>,
    ) -> Result<(), ConnectorError> {
        secret_data.validate()?;

        let guard = ProfileGuard::acquire(self.credentials_store(), secret_data)?;
        let run = self.run_scanner(&Self::verify_args(guard.profile_name())).await;
        let released = guard.release();

        run?;
        released
    }

    async fn check(
        &self,
        options: &ScanOptions,
        secret_data: &Credentials,
        _schema: Option<&str>,
    ) -> Result<Value, ConnectorError> {
        secret_data.validate()?;

        let framework = resolve_framework(AWS_PROVIDER, &options.compliance_framework)
            .ok_or_else(|| ConnectorError::UnknownFramework {
                framework: options.compliance_framework.clone(),
            })?;

        // Private per invocation; removed with the call on every branch.
        let output_dir = tempfile::tempdir()?;

        let guard = ProfileGuard::acquire(self.credentials_store(), secret_data)?;
        let args = Self::check_args(
            guard.profile_name(),
            output_dir.path(),
            framework,
            &options.regions,
        );
        let run = self.run_scanner(&args).await;
        let released = guard.release();

        run?;
        released?;

        Self::read_scan_output(output_dir.path())
    }
}
