//! Core types for the Prowler compliance plugin.
//!
//! This crate provides the types shared across all plugin components:
//! - Host contract payloads (Credentials, ScanOptions)
//! - Finding status and severity enums
//! - The compliance framework table
//! - The connector error taxonomy

mod credentials;
mod error;
mod frameworks;
mod options;
mod status;

pub use credentials::Credentials;
pub use error::ConnectorError;
pub use frameworks::{AWS_PROVIDER, compliance_frameworks, resolve_framework};
pub use options::ScanOptions;
pub use status::{Severity, Status};
