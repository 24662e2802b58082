pub mod cli;
pub mod config;
pub mod connector;

// Re-export core types for convenience
pub use prowler_plugin_core::{ConnectorError, Credentials, ScanOptions};
