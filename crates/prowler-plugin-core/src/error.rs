//! Error taxonomy for the connector.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced to the host platform by verify/check calls.
///
/// Nothing is retried internally; every variant propagates to the immediate
/// caller. The ephemeral credential profile is removed before any of these
/// reach the caller.
#[derive(Error, Debug)]
pub enum ConnectorError {
    /// A mandatory credential field was absent from `secret_data`.
    #[error("required parameter missing: {key}")]
    RequiredParameter { key: String },

    /// The requested compliance framework is not in the known table.
    #[error("unknown compliance framework: {framework}")]
    UnknownFramework { framework: String },

    /// The scanner process exited non-zero; carries its stderr verbatim.
    #[error("prowler execution failed: {reason}")]
    ExecutionFailed { reason: String },

    /// The scanner binary could not be found on the host.
    #[error("prowler binary not found at: {0}")]
    BinaryNotFound(PathBuf),

    /// The scanner exited zero but its declared output (a parsable
    /// `output.json`) was missing or malformed.
    #[error("scanner output contract violated: {0}")]
    OutputContract(String),

    /// The credentials store or the temporary output directory could not be
    /// read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
