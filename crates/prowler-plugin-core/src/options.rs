//! Scan options delivered by the host platform.

use serde::{Deserialize, Serialize};

/// The `options` payload of a verify/check call.
///
/// `compliance_framework` must resolve against the known framework table
/// for the provider. An empty `regions` list means "all regions" (the
/// scanner's default); a non-empty list restricts the scan to exactly those
/// regions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanOptions {
    #[serde(default)]
    pub compliance_framework: String,
    #[serde(default)]
    pub regions: Vec<String>,
}
